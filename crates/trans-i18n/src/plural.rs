//! Plural categories and quantity classification.
//!
//! A [`QuantityClassifier`] maps a count to a [`PluralCategory`] for the
//! active locale. Hosts normally inject their own; [`PluralRule`] covers the
//! common CLDR integer rules for when they do not.

use std::fmt;

/// CLDR plural category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluralCategory {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

impl PluralCategory {
    /// Every category, in CLDR order.
    pub const ALL: [Self; 6] = [
        Self::Zero,
        Self::One,
        Self::Two,
        Self::Few,
        Self::Many,
        Self::Other,
    ];

    /// Dictionary suffix for this category (`"one"`, `"other"`, ...).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Zero => "zero",
            Self::One => "one",
            Self::Two => "two",
            Self::Few => "few",
            Self::Many => "many",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for PluralCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps a count to the active locale's plural category.
///
/// Implementations must be total. Closures `Fn(i64) -> PluralCategory`
/// implement this trait directly.
pub trait QuantityClassifier {
    fn classify(&self, count: i64) -> PluralCategory;
}

impl<F> QuantityClassifier for F
where
    F: Fn(i64) -> PluralCategory,
{
    fn classify(&self, count: i64) -> PluralCategory {
        self(count)
    }
}

impl QuantityClassifier for PluralRule {
    fn classify(&self, count: i64) -> PluralCategory {
        self.categorize(count)
    }
}

/// Built-in integer plural rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PluralRule {
    /// one: |n| = 1; other otherwise. Also used for German, Spanish, Italian...
    #[default]
    English,
    /// one: |n| <= 1.
    French,
    /// East Slavic: one / few / many.
    Russian,
    /// one only for exactly 1, then few / many.
    Polish,
    /// zero / one / two / few / many / other.
    Arabic,
    /// No grammatical number.
    CJK,
}

impl PluralRule {
    /// Pick a rule from a BCP 47-ish tag. Unknown languages get English.
    #[must_use]
    pub fn for_locale(locale: &str) -> Self {
        let lang = locale
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match lang.as_str() {
            "fr" | "hy" | "kab" => Self::French,
            "ru" | "uk" | "be" => Self::Russian,
            "pl" => Self::Polish,
            "ar" => Self::Arabic,
            "zh" | "ja" | "ko" | "vi" | "th" | "id" | "ms" => Self::CJK,
            _ => Self::English,
        }
    }

    /// Classify `count`. Negative counts classify like their magnitude.
    #[must_use]
    pub fn categorize(self, count: i64) -> PluralCategory {
        let n = count.unsigned_abs();
        match self {
            Self::English => {
                if n == 1 {
                    PluralCategory::One
                } else {
                    PluralCategory::Other
                }
            }
            Self::French => {
                if n <= 1 {
                    PluralCategory::One
                } else {
                    PluralCategory::Other
                }
            }
            Self::Russian => {
                let (m10, m100) = (n % 10, n % 100);
                if m10 == 1 && m100 != 11 {
                    PluralCategory::One
                } else if (2..=4).contains(&m10) && !(12..=14).contains(&m100) {
                    PluralCategory::Few
                } else {
                    PluralCategory::Many
                }
            }
            Self::Polish => {
                let (m10, m100) = (n % 10, n % 100);
                if n == 1 {
                    PluralCategory::One
                } else if (2..=4).contains(&m10) && !(12..=14).contains(&m100) {
                    PluralCategory::Few
                } else {
                    PluralCategory::Many
                }
            }
            Self::Arabic => match (n, n % 100) {
                (0, _) => PluralCategory::Zero,
                (1, _) => PluralCategory::One,
                (2, _) => PluralCategory::Two,
                (_, 3..=10) => PluralCategory::Few,
                (_, 11..=99) => PluralCategory::Many,
                _ => PluralCategory::Other,
            },
            Self::CJK => PluralCategory::Other,
        }
    }
}

/// Plural forms for one key, written into a dictionary as `key:category`
/// entries by [`Dictionary::insert_plural`](crate::Dictionary::insert_plural).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PluralForms {
    pub zero: Option<String>,
    pub one: String,
    pub two: Option<String>,
    pub few: Option<String>,
    pub many: Option<String>,
    pub other: String,
}

impl PluralForms {
    /// Present forms as `(category, template)` pairs.
    pub fn entries(&self) -> impl Iterator<Item = (PluralCategory, &str)> {
        [
            (PluralCategory::Zero, self.zero.as_deref()),
            (PluralCategory::One, Some(self.one.as_str())),
            (PluralCategory::Two, self.two.as_deref()),
            (PluralCategory::Few, self.few.as_deref()),
            (PluralCategory::Many, self.many.as_deref()),
            (PluralCategory::Other, Some(self.other.as_str())),
        ]
        .into_iter()
        .filter_map(|(cat, form)| form.map(|f| (cat, f)))
    }
}
