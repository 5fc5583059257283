//! Key lookup, pluralization, and interpolation over one dictionary.
//!
//! # Invariants
//!
//! 1. **Total**: every operation returns something renderable. A miss
//!    echoes the key (or `[key]` for segment output).
//!
//! 2. **Plural chain is fixed**: `key:<category>`, `key:other`, `key`,
//!    `key:one`, first usable entry wins.
//!
//! 3. **No implicit count**: `plural` never injects the count as an
//!    argument; `plural_same` does, as argument 1.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Missing key | Key not in dictionary | Key returned verbatim |
//! | Empty template | `""` stored under key | Same as missing |
//! | Exhausted plural chain | No suffix or base entry | Key returned verbatim |
//! | Formatter without number | `translate` first arg not numeric | Same as missing |

use crate::dictionary::{Dictionary, TemplateEntry};
use crate::placeholder::{Arg, Segment, segments, substitute};
use crate::plural::{PluralRule, QuantityClassifier};

/// Build a [`Translator`] over `dictionary`.
#[must_use]
pub fn create_translator<C: QuantityClassifier>(
    dictionary: Dictionary,
    classifier: C,
) -> Translator<C> {
    Translator::new(dictionary, classifier)
}

/// Message formatter bound to one immutable dictionary.
///
/// # Example
///
/// ```
/// use trans_i18n::{Dictionary, PluralRule, Translator};
///
/// let dict: Dictionary = [
///     ("hello", "Hello, %s!"),
///     ("nbGames:one", "%s game"),
///     ("nbGames:other", "%s games"),
/// ]
/// .into_iter()
/// .collect();
/// let trans = Translator::new(dict, PluralRule::English);
///
/// assert_eq!(trans.translate("hello", &["Ada".into()]), "Hello, Ada!");
/// assert_eq!(trans.plural_same("nbGames", 1, &[]), "1 game");
/// assert_eq!(trans.plural_same("nbGames", 12, &[]), "12 games");
/// assert_eq!(trans.noarg("missing"), "missing");
/// ```
#[derive(Debug, Clone)]
pub struct Translator<C = PluralRule> {
    dictionary: Dictionary,
    classifier: C,
}

impl<C: QuantityClassifier> Translator<C> {
    #[must_use]
    pub fn new(dictionary: Dictionary, classifier: C) -> Self {
        Self {
            dictionary,
            classifier,
        }
    }

    /// Look up `key` and substitute `args`.
    #[must_use]
    pub fn translate(&self, key: &str, args: &[Arg<'_>]) -> String {
        let count = args.first().and_then(Arg::as_integer);
        self.dictionary
            .get(key)
            .and_then(|entry| render(entry, args, count))
            .unwrap_or_else(|| miss(key))
    }

    /// Resolve the plural form of `key` for `count`, then substitute `args`.
    #[must_use]
    pub fn plural(&self, key: &str, count: i64, args: &[Arg<'_>]) -> String {
        self.resolve_plural(key, count)
            .and_then(|entry| render(entry, args, Some(count)))
            .unwrap_or_else(|| miss(key))
    }

    /// [`plural`](Self::plural) with `count` also passed as argument 1.
    #[must_use]
    pub fn plural_same(&self, key: &str, count: i64, args: &[Arg<'_>]) -> String {
        let mut all = Vec::with_capacity(args.len() + 1);
        all.push(Arg::from(count));
        all.extend_from_slice(args);
        self.plural(key, count, &all)
    }

    /// Look up `key` without scanning for markers.
    #[must_use]
    pub fn noarg<'a>(&'a self, key: &'a str) -> &'a str {
        match self.dictionary.get(key).and_then(TemplateEntry::as_literal) {
            Some(template) => template,
            None => {
                tracing::trace!(key, "Translation key not found");
                key
            }
        }
    }

    /// Look up `key` and interleave literal text with raw argument values.
    #[must_use]
    pub fn structured<T>(&self, key: &str, args: Vec<T>) -> Vec<Segment<T>> {
        match self.dictionary.get(key).and_then(TemplateEntry::as_literal) {
            Some(template) => segments(template, args),
            None => vec![Segment::Text(miss(key))],
        }
    }

    /// Plural resolution as in [`plural`](Self::plural), segment output.
    #[must_use]
    pub fn structured_plural<T>(&self, key: &str, count: i64, args: Vec<T>) -> Vec<Segment<T>> {
        match self.resolve_plural(key, count) {
            Some(TemplateEntry::Literal(template)) => segments(template, args),
            Some(TemplateEntry::Formatter(f)) => vec![Segment::Text(f(count))],
            None => vec![Segment::Text(miss(key))],
        }
    }

    /// Walk the plural fallback chain for `key`.
    #[must_use]
    pub fn resolve_plural(&self, key: &str, count: i64) -> Option<&TemplateEntry> {
        let category = self.classifier.classify(count);
        let resolved = self
            .dictionary
            .get(&format!("{key}:{category}"))
            .or_else(|| self.dictionary.get(&format!("{key}:other")))
            .or_else(|| self.dictionary.get(key))
            .or_else(|| self.dictionary.get(&format!("{key}:one")));
        if resolved.is_none() {
            tracing::trace!(key, count, %category, "Plural fallback chain exhausted");
        }
        resolved
    }
}

fn render(entry: &TemplateEntry, args: &[Arg<'_>], count: Option<i64>) -> Option<String> {
    match entry {
        TemplateEntry::Literal(template) => Some(substitute(template, args)),
        TemplateEntry::Formatter(f) => count.map(|n| f(n)),
    }
}

fn miss(key: &str) -> String {
    tracing::trace!(key, "Translation key not found");
    key.to_owned()
}
