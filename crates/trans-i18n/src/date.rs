//! Date inputs and the absolute-date formatter seam.

use chrono::{DateTime, Utc};

use crate::error::{I18nError, Result};
use crate::locale::LocaleEnvironment;

/// Anything that can denote an instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateLike {
    /// Already-parsed instant.
    Date(DateTime<Utc>),
    /// Milliseconds since the Unix epoch.
    Millis(i64),
    /// Numeric string (epoch millis) or RFC 3339 timestamp.
    Text(String),
}

impl From<DateTime<Utc>> for DateLike {
    fn from(d: DateTime<Utc>) -> Self {
        Self::Date(d)
    }
}

impl From<i64> for DateLike {
    fn from(ms: i64) -> Self {
        Self::Millis(ms)
    }
}

impl From<&str> for DateLike {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for DateLike {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// Convert a [`DateLike`] into a UTC instant.
///
/// A numeric string contributes only its leading integer: `"12.9"` and
/// `"12e3"` are both 12 ms.
pub fn to_date(input: &DateLike) -> Result<DateTime<Utc>> {
    match input {
        DateLike::Date(d) => Ok(*d),
        DateLike::Millis(ms) => from_millis(*ms),
        DateLike::Text(s) => {
            let trimmed = s.trim();
            if trimmed.parse::<f64>().is_ok_and(f64::is_finite) {
                return leading_integer(trimmed)
                    .ok_or_else(|| I18nError::InvalidDate(format!("{s:?}: no leading integer")))
                    .and_then(from_millis);
            }
            DateTime::parse_from_rfc3339(trimmed)
                .map(|d| d.with_timezone(&Utc))
                .map_err(|e| I18nError::InvalidDate(format!("{s:?}: {e}")))
        }
    }
}

/// Optional sign followed by decimal digits, ignoring the rest.
fn leading_integer(s: &str) -> Option<i64> {
    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    let digits = unsigned.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let sign_len = s.len() - unsigned.len();
    s[..sign_len + digits].parse().ok()
}

fn from_millis(ms: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp_millis(ms)
        .ok_or_else(|| I18nError::InvalidDate(format!("{ms} ms out of range")))
}

/// Locale-aware absolute date rendering (year, short month, day, hour,
/// minute). Hosts plug in their own calendar implementation.
pub trait DateFormatter {
    fn format(&self, date: &DateTime<Utc>) -> String;

    /// Whether the formatter renders a 12-hour clock.
    fn hour12(&self) -> bool;
}

/// Minimal [`DateFormatter`] backed by chrono's English month names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChronoDateFormatter {
    locale: String,
    hour12: bool,
}

impl ChronoDateFormatter {
    /// Formatter for the environment's display locale.
    #[must_use]
    pub fn new(env: &LocaleEnvironment) -> Self {
        let locale = env.display_locale().to_owned();
        let hour12 = uses_12_hour_clock(&locale);
        Self { locale, hour12 }
    }

    /// Override the clock style.
    #[must_use]
    pub fn with_hour12(mut self, hour12: bool) -> Self {
        self.hour12 = hour12;
        self
    }

    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }
}

impl DateFormatter for ChronoDateFormatter {
    fn format(&self, date: &DateTime<Utc>) -> String {
        let pattern = if self.hour12 {
            "%b %-d, %Y, %-I:%M %p"
        } else {
            "%-d %b %Y, %H:%M"
        };
        date.format(pattern).to_string()
    }

    fn hour12(&self) -> bool {
        self.hour12
    }
}

fn uses_12_hour_clock(locale: &str) -> bool {
    let mut parts = locale.split(['-', '_']);
    let lang = parts.next().unwrap_or_default().to_ascii_lowercase();
    let region = parts.next().map(str::to_ascii_uppercase);
    match lang.as_str() {
        "en" => matches!(
            region.as_deref(),
            None | Some("US" | "CA" | "AU" | "NZ" | "IN" | "PH")
        ),
        "ar" | "hi" | "bn" | "ko" => true,
        _ => false,
    }
}

/// Render `date` with the host's absolute-date formatter.
pub fn common_date_format(formatter: &impl DateFormatter, date: &DateLike) -> Result<String> {
    Ok(formatter.format(&to_date(date)?))
}

/// Whether times should be shown on a 24-hour clock.
#[must_use]
pub fn use_24h(formatter: &impl DateFormatter) -> bool {
    !formatter.hour12()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 5, 14, 7, 0).unwrap()
    }

    #[test]
    fn millis_and_numeric_strings() {
        let ms = sample().timestamp_millis();
        assert_eq!(to_date(&DateLike::Millis(ms)).unwrap(), sample());
        assert_eq!(to_date(&DateLike::from(ms.to_string())).unwrap(), sample());
        assert_eq!(
            to_date(&DateLike::from(format!("{ms}.9"))).unwrap(),
            sample()
        );
    }

    #[test]
    fn numeric_strings_use_leading_integer() {
        let millis = |s: &str| to_date(&s.into()).map(|d| d.timestamp_millis());
        assert_eq!(millis("1e3"), Ok(1));
        assert_eq!(millis("12.9"), Ok(12));
        assert_eq!(millis("-250"), Ok(-250));
        assert_eq!(millis("+7"), Ok(7));
        assert!(millis(".5").is_err());
    }

    #[test]
    fn rfc3339_strings() {
        let parsed = to_date(&"2024-03-05T15:07:00+01:00".into()).unwrap();
        assert_eq!(parsed, sample());
    }

    #[test]
    fn invalid_inputs() {
        assert!(matches!(
            to_date(&"yesterday".into()),
            Err(I18nError::InvalidDate(_))
        ));
        assert!(to_date(&"".into()).is_err());
        assert!(to_date(&DateLike::Millis(i64::MAX)).is_err());
    }

    #[test]
    fn chrono_formatter_clock_styles() {
        let us = ChronoDateFormatter::new(&LocaleEnvironment::new("en-US"));
        assert!(us.hour12());
        assert_eq!(us.format(&sample()), "Mar 5, 2024, 2:07 PM");

        let fr = ChronoDateFormatter::new(&LocaleEnvironment::new("fr-FR"));
        assert!(use_24h(&fr));
        assert_eq!(fr.format(&sample()), "5 Mar 2024, 14:07");
    }

    #[test]
    fn formatter_uses_display_locale() {
        let f = ChronoDateFormatter::new(&LocaleEnvironment::new("ar-SA"));
        assert_eq!(f.locale(), "ar-ly");
        assert!(f.hour12());
        assert!(use_24h(&f.with_hour12(false)));
    }

    #[test]
    fn common_format_parses_then_formats() {
        let f = ChronoDateFormatter::new(&LocaleEnvironment::new("en-GB"));
        let out = common_date_format(&f, &DateLike::Date(sample())).unwrap();
        assert_eq!(out, "5 Mar 2024, 14:07");
        assert!(common_date_format(&f, &"nope".into()).is_err());
    }
}
