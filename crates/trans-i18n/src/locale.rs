//! Display locale selection.

use crate::plural::PluralRule;

/// Arabic locale whose default calendar is Gregorian.
pub const GREGORIAN_ARABIC_LOCALE: &str = "ar-ly";

/// The host document's language, passed in explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleEnvironment {
    lang: String,
}

impl LocaleEnvironment {
    #[must_use]
    pub fn new(lang: impl Into<String>) -> Self {
        Self { lang: lang.into() }
    }

    /// The language tag as supplied.
    #[must_use]
    pub fn lang(&self) -> &str {
        &self.lang
    }

    /// The tag to use for date rendering.
    #[must_use]
    pub fn display_locale(&self) -> &str {
        display_locale(&self.lang)
    }

    /// Built-in plural rule for the supplied language.
    #[must_use]
    pub fn plural_rule(&self) -> PluralRule {
        PluralRule::for_locale(&self.lang)
    }
}

impl Default for LocaleEnvironment {
    fn default() -> Self {
        Self::new("en-GB")
    }
}

/// Remap regional Arabic tags (`ar-*`) to [`GREGORIAN_ARABIC_LOCALE`].
///
/// A bare `ar` tag is passed through unchanged.
#[must_use]
pub fn display_locale(lang: &str) -> &str {
    if lang.starts_with("ar-") {
        GREGORIAN_ARABIC_LOCALE
    } else {
        lang
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arabic_regions_use_gregorian_locale() {
        assert_eq!(display_locale("ar-SA"), "ar-ly");
        assert_eq!(display_locale("ar-EG"), "ar-ly");
        assert_eq!(LocaleEnvironment::new("ar-MA").display_locale(), "ar-ly");
    }

    #[test]
    fn other_locales_pass_through() {
        assert_eq!(display_locale("ar"), "ar");
        assert_eq!(display_locale("fr-FR"), "fr-FR");
        assert_eq!(display_locale("arn-CL"), "arn-CL");
        assert_eq!(display_locale(""), "");
    }

    #[test]
    fn plural_rule_follows_lang() {
        assert_eq!(LocaleEnvironment::new("ru-RU").plural_rule(), PluralRule::Russian);
        assert_eq!(LocaleEnvironment::default().plural_rule(), PluralRule::English);
    }
}
