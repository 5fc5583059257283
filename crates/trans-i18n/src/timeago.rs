//! Coarse relative-time labels ("5 minutes ago", "in 3 days").
//!
//! A duration is classified by scanning [`AGO_UNITS`] from the largest unit
//! down. The first bucket whose threshold is met and which has a label for
//! the duration's direction wins. The last bucket has threshold zero, so
//! the scan always matches.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Missing label | Label key not in dictionary | Label key returned |
//! | NaN duration | Bad clock arithmetic | Treated as "right now" |

use chrono::Utc;

use crate::date::{DateLike, to_date};
use crate::dictionary::{Dictionary, TemplateEntry};
use crate::error::Result;

/// Label dictionary keys.
pub mod labels {
    pub const NB_YEARS_AGO: &str = "nbYearsAgo";
    pub const IN_NB_YEARS: &str = "inNbYears";
    pub const NB_MONTHS_AGO: &str = "nbMonthsAgo";
    pub const IN_NB_MONTHS: &str = "inNbMonths";
    pub const NB_WEEKS_AGO: &str = "nbWeeksAgo";
    pub const IN_NB_WEEKS: &str = "inNbWeeks";
    pub const NB_DAYS_AGO: &str = "nbDaysAgo";
    pub const IN_NB_DAYS: &str = "inNbDays";
    pub const NB_HOURS_AGO: &str = "nbHoursAgo";
    pub const IN_NB_HOURS: &str = "inNbHours";
    pub const NB_MINUTES_AGO: &str = "nbMinutesAgo";
    pub const IN_NB_MINUTES: &str = "inNbMinutes";
    pub const IN_NB_SECONDS: &str = "inNbSeconds";
    pub const RIGHT_NOW: &str = "rightNow";
    pub const JUST_NOW: &str = "justNow";
}

const MINUTE: f64 = 60.0;
const HOUR: f64 = 60.0 * MINUTE;
const DAY: f64 = 24.0 * HOUR;
const WEEK: f64 = 7.0 * DAY;
const YEAR: f64 = 365.0 * DAY;
const MONTH: f64 = YEAR / 12.0;

/// Whether the event lies behind or ahead of now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Past,
    Future,
}

impl Direction {
    /// Non-negative seconds are in the past.
    #[must_use]
    pub fn of(seconds: f64) -> Self {
        if seconds < 0.0 {
            Self::Future
        } else {
            Self::Past
        }
    }
}

/// One row of the unit table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeUnitBucket {
    pub past: Option<&'static str>,
    pub future: &'static str,
    /// Seconds per unit.
    pub divisor: f64,
    /// Units required before this bucket applies.
    pub min_multiple: f64,
}

impl TimeUnitBucket {
    #[must_use]
    pub fn label(&self, direction: Direction) -> Option<&'static str> {
        match direction {
            Direction::Past => self.past,
            Direction::Future => Some(self.future),
        }
    }

    /// Threshold met and a label exists for `direction`.
    #[must_use]
    pub fn matches(&self, abs_seconds: f64, direction: Direction) -> bool {
        abs_seconds >= self.divisor * self.min_multiple && self.label(direction).is_some()
    }
}

/// Buckets, largest unit first.
pub const AGO_UNITS: [TimeUnitBucket; 8] = [
    TimeUnitBucket {
        past: Some(labels::NB_YEARS_AGO),
        future: labels::IN_NB_YEARS,
        divisor: YEAR,
        min_multiple: 1.0,
    },
    TimeUnitBucket {
        past: Some(labels::NB_MONTHS_AGO),
        future: labels::IN_NB_MONTHS,
        divisor: MONTH,
        min_multiple: 1.0,
    },
    TimeUnitBucket {
        past: Some(labels::NB_WEEKS_AGO),
        future: labels::IN_NB_WEEKS,
        divisor: WEEK,
        min_multiple: 1.0,
    },
    TimeUnitBucket {
        past: Some(labels::NB_DAYS_AGO),
        future: labels::IN_NB_DAYS,
        divisor: DAY,
        min_multiple: 2.0,
    },
    TimeUnitBucket {
        past: Some(labels::NB_HOURS_AGO),
        future: labels::IN_NB_HOURS,
        divisor: HOUR,
        min_multiple: 1.0,
    },
    TimeUnitBucket {
        past: Some(labels::NB_MINUTES_AGO),
        future: labels::IN_NB_MINUTES,
        divisor: MINUTE,
        min_multiple: 1.0,
    },
    TimeUnitBucket {
        past: None,
        future: labels::IN_NB_SECONDS,
        divisor: 1.0,
        min_multiple: 9.0,
    },
    TimeUnitBucket {
        past: Some(labels::RIGHT_NOW),
        future: labels::JUST_NOW,
        divisor: 1.0,
        min_multiple: 0.0,
    },
];

/// Pick the bucket and label key for a signed duration in seconds.
#[must_use]
pub fn select_bucket(seconds: f64) -> (&'static TimeUnitBucket, &'static str) {
    let abs = seconds.abs();
    let direction = Direction::of(seconds);
    let bucket = AGO_UNITS
        .iter()
        .find(|unit| unit.matches(abs, direction))
        .unwrap_or(&AGO_UNITS[AGO_UNITS.len() - 1]);
    let key = bucket.label(direction).unwrap_or(bucket.future);
    (bucket, key)
}

/// Relative-time formatter over a unit-label dictionary.
///
/// Label entries are normally [`TemplateEntry::Formatter`]s taking the
/// whole number of units; literal entries are returned as-is.
#[derive(Debug, Clone)]
pub struct RelativeTimeFormatter {
    labels: Dictionary,
}

impl RelativeTimeFormatter {
    #[must_use]
    pub fn new(labels: Dictionary) -> Self {
        Self { labels }
    }

    /// Formatter with built-in English labels.
    #[must_use]
    pub fn english() -> Self {
        Self::new(english_labels())
    }

    /// Format a signed duration: positive is past, negative is future.
    #[must_use]
    pub fn format_ago(&self, seconds: f64) -> String {
        let (bucket, key) = select_bucket(seconds);
        match self.labels.get(key) {
            Some(TemplateEntry::Literal(text)) => text.clone(),
            Some(TemplateEntry::Formatter(f)) => {
                let units = (seconds.abs() / bucket.divisor).floor();
                f(if units.is_finite() { units as i64 } else { 0 })
            }
            None => {
                tracing::debug!(key, seconds, "Relative time label missing");
                key.to_owned()
            }
        }
    }

    /// Label for `date` relative to `now_millis`.
    pub fn timeago(&self, date: &DateLike, now_millis: i64) -> Result<String> {
        let then = to_date(date)?.timestamp_millis();
        let elapsed_ms = now_millis.saturating_sub(then);
        Ok(self.format_ago(elapsed_ms as f64 / 1000.0))
    }

    /// Label for `date` relative to the system clock.
    pub fn timeago_now(&self, date: &DateLike) -> Result<String> {
        self.timeago(date, Utc::now().timestamp_millis())
    }
}

impl Default for RelativeTimeFormatter {
    fn default() -> Self {
        Self::english()
    }
}

fn unit_label(unit: &'static str, past: bool) -> impl Fn(i64) -> String + Send + Sync + 'static {
    move |n| {
        let plural = if n == 1 { "" } else { "s" };
        if past {
            format!("{n} {unit}{plural} ago")
        } else {
            format!("in {n} {unit}{plural}")
        }
    }
}

/// English label dictionary for [`RelativeTimeFormatter::english`].
#[must_use]
pub fn english_labels() -> Dictionary {
    use labels::*;

    let mut dict = Dictionary::new();
    for (past, future, unit) in [
        (NB_YEARS_AGO, IN_NB_YEARS, "year"),
        (NB_MONTHS_AGO, IN_NB_MONTHS, "month"),
        (NB_WEEKS_AGO, IN_NB_WEEKS, "week"),
        (NB_DAYS_AGO, IN_NB_DAYS, "day"),
        (NB_HOURS_AGO, IN_NB_HOURS, "hour"),
        (NB_MINUTES_AGO, IN_NB_MINUTES, "minute"),
    ] {
        dict.insert_formatter(past, unit_label(unit, true));
        dict.insert_formatter(future, unit_label(unit, false));
    }
    dict.insert_formatter(IN_NB_SECONDS, unit_label("second", false));
    dict.insert(RIGHT_NOW, "right now");
    dict.insert(JUST_NOW, "just now");
    dict
}
