#![forbid(unsafe_code)]

//! Client-side message localization.
//!
//! Provides key-based lookup over an immutable dictionary, `%s` / `%N$s`
//! positional interpolation (string and segment output), pluralization
//! through an injected quantity classifier, and coarse relative-time
//! labels.
//!
//! # How it fits together
//! A [`Translator`] owns one [`Dictionary`] and one [`QuantityClassifier`].
//! A [`RelativeTimeFormatter`] owns a separate label dictionary whose
//! entries are usually formatter functions. Neither holds mutable state.
//! A missing key is never an error: it is echoed back so broken catalogs
//! stay visible without failing a render.

pub mod date;
pub mod dictionary;
pub mod error;
pub mod locale;
pub mod placeholder;
pub mod plural;
pub mod timeago;
pub mod translator;

pub use date::{ChronoDateFormatter, DateFormatter, DateLike, common_date_format, to_date, use_24h};
pub use dictionary::{Dictionary, FormatFn, TemplateEntry};
pub use error::I18nError;
pub use locale::{LocaleEnvironment, display_locale};
pub use placeholder::{Arg, Segment};
pub use plural::{PluralCategory, PluralForms, PluralRule, QuantityClassifier};
pub use timeago::{AGO_UNITS, RelativeTimeFormatter, TimeUnitBucket};
pub use translator::{Translator, create_translator};
