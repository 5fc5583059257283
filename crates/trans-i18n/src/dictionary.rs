//! Key to template mapping.
//!
//! # Invariants
//!
//! 1. **Empty templates are absent**: [`Dictionary::get`] never returns an
//!    empty literal, so every consumer treats `""` like a missing key.
//!
//! 2. **Read-only at use**: lookups take `&self`. A [`Translator`] owns its
//!    dictionary and never hands out `&mut`.
//!
//! 3. **Thread safety**: `Dictionary` is `Send + Sync`; formatter entries
//!    are `Arc<dyn Fn + Send + Sync>`.
//!
//! [`Translator`]: crate::Translator

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::plural::PluralForms;

/// Pre-bound formatting function, called with a count.
pub type FormatFn = Arc<dyn Fn(i64) -> String + Send + Sync>;

/// A dictionary value: a static template or a formatting function.
#[derive(Clone)]
pub enum TemplateEntry {
    /// Template with optional `%s` / `%N$s` markers.
    Literal(String),
    /// Function producing the final text from a count.
    Formatter(FormatFn),
}

impl TemplateEntry {
    /// Wrap a closure as a formatter entry.
    pub fn formatter<F>(f: F) -> Self
    where
        F: Fn(i64) -> String + Send + Sync + 'static,
    {
        Self::Formatter(Arc::new(f))
    }

    /// The template text, if this is a literal.
    #[must_use]
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Self::Literal(s) => Some(s),
            Self::Formatter(_) => None,
        }
    }

    fn is_usable(&self) -> bool {
        match self {
            Self::Literal(s) => !s.is_empty(),
            Self::Formatter(_) => true,
        }
    }
}

impl fmt::Debug for TemplateEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(s) => f.debug_tuple("Literal").field(s).finish(),
            Self::Formatter(_) => f.write_str("Formatter(..)"),
        }
    }
}

impl From<&str> for TemplateEntry {
    fn from(s: &str) -> Self {
        Self::Literal(s.to_owned())
    }
}

impl From<String> for TemplateEntry {
    fn from(s: String) -> Self {
        Self::Literal(s)
    }
}

/// Key to template mapping.
///
/// # Example
///
/// ```
/// use trans_i18n::{Dictionary, PluralForms, TemplateEntry};
///
/// let mut dict = Dictionary::new();
/// dict.insert("greeting", "Hello, %s!");
/// dict.insert_plural("nbGames", PluralForms {
///     one: "%s game".into(),
///     other: "%s games".into(),
///     ..Default::default()
/// });
/// dict.insert_formatter("inNbDays", |n| format!("in {n} days"));
///
/// assert_eq!(dict.get("greeting").and_then(TemplateEntry::as_literal), Some("Hello, %s!"));
/// assert!(dict.contains_key("nbGames:one"));
/// assert!(dict.get("nbGames").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: HashMap<String, TemplateEntry>,
}

impl Dictionary {
    /// Create an empty dictionary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a literal template.
    pub fn insert(&mut self, key: impl Into<String>, template: impl Into<String>) {
        self.entries
            .insert(key.into(), TemplateEntry::Literal(template.into()));
    }

    /// Insert a formatting function.
    pub fn insert_formatter<F>(&mut self, key: impl Into<String>, f: F)
    where
        F: Fn(i64) -> String + Send + Sync + 'static,
    {
        self.entries
            .insert(key.into(), TemplateEntry::formatter(f));
    }

    /// Insert each present form as a `key:category` entry.
    pub fn insert_plural(&mut self, key: impl Into<String>, forms: PluralForms) {
        let key = key.into();
        for (category, template) in forms.entries() {
            self.insert(format!("{key}:{category}"), template);
        }
    }

    /// Look up a usable entry. Empty literals read as absent.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&TemplateEntry> {
        self.entries.get(key).filter(|entry| entry.is_usable())
    }

    /// Whether `key` is stored, usable or not.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over stored keys, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Parse a JSON object whose values are templates or plural-form
    /// objects (`{"one": ..., "other": ...}`).
    #[cfg(feature = "serde")]
    pub fn from_json_str(json: &str) -> crate::error::Result<Self> {
        let raw: HashMap<String, RawEntry> = serde_json::from_str(json)
            .map_err(|e| crate::error::I18nError::ParseError(e.to_string()))?;
        let mut dict = Self::new();
        for (key, entry) in raw {
            match entry {
                RawEntry::Template(template) => dict.insert(key, template),
                RawEntry::Plural(forms) => dict.insert_plural(key, forms),
            }
        }
        tracing::debug!(entries = dict.len(), "Loaded dictionary from JSON");
        Ok(dict)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum RawEntry {
    Template(String),
    Plural(PluralForms),
}

impl<K, V> FromIterator<(K, V)> for Dictionary
where
    K: Into<String>,
    V: Into<TemplateEntry>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dict = Self::new();
        dict.extend(iter);
        dict
    }
}

impl<K, V> Extend<(K, V)> for Dictionary
where
    K: Into<String>,
    V: Into<TemplateEntry>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.entries
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_lookup() {
        let dict: Dictionary = [("a", "Alpha")].into_iter().collect();
        assert_eq!(dict.get("a").and_then(TemplateEntry::as_literal), Some("Alpha"));
        assert!(dict.get("b").is_none());
    }

    #[test]
    fn empty_literal_reads_as_absent() {
        let mut dict = Dictionary::new();
        dict.insert("blank", "");
        assert!(dict.contains_key("blank"));
        assert!(dict.get("blank").is_none());
    }

    #[test]
    fn formatter_entries_are_callable() {
        let mut dict = Dictionary::new();
        dict.insert_formatter("n", |n| format!("#{n}"));
        match dict.get("n") {
            Some(TemplateEntry::Formatter(f)) => assert_eq!(f(3), "#3"),
            other => panic!("unexpected entry {other:?}"),
        }
    }

    #[test]
    fn plural_forms_expand_to_suffixed_keys() {
        let mut dict = Dictionary::new();
        dict.insert_plural(
            "files",
            PluralForms {
                one: "%s file".into(),
                few: Some("%s files (few)".into()),
                other: "%s files".into(),
                ..Default::default()
            },
        );
        let mut keys: Vec<&str> = dict.keys().collect();
        keys.sort_unstable();
        assert_eq!(keys, ["files:few", "files:one", "files:other"]);
        assert_eq!(dict.len(), 3);
    }

    #[test]
    fn extend_overwrites() {
        let mut dict: Dictionary = [("k", "old")].into_iter().collect();
        dict.extend([("k", "new")]);
        assert_eq!(dict.get("k").and_then(TemplateEntry::as_literal), Some("new"));
        assert!(!dict.is_empty());
    }

    #[test]
    fn debug_hides_closures() {
        let entry = TemplateEntry::formatter(|n| n.to_string());
        assert_eq!(format!("{entry:?}"), "Formatter(..)");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_loading() {
        let dict = Dictionary::from_json_str(r#"{"hello": "Hello %s", "x:one": "one x"}"#)
            .expect("valid json");
        assert_eq!(dict.len(), 2);
        assert_eq!(
            dict.get("hello").and_then(TemplateEntry::as_literal),
            Some("Hello %s")
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_loading_expands_plural_objects() {
        let dict = Dictionary::from_json_str(
            r#"{"nbGames": {"one": "%s game", "few": "%s games!", "other": "%s games"}}"#,
        )
        .expect("valid json");
        assert_eq!(dict.len(), 3);
        assert!(dict.contains_key("nbGames:few"));
        assert!(!dict.contains_key("nbGames"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_loading_rejects_nested_values() {
        let err = Dictionary::from_json_str(r#"{"a": {"b": "c"}}"#).unwrap_err();
        assert!(matches!(err, crate::I18nError::ParseError(_)));
    }
}
