#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod dataset;
mod error;
mod locale_tag;
mod resolver;
mod timezone_codes;
mod types;
mod unicode_ext;
mod validate;

pub use dataset::{CalendarPreferences, ReferenceDataset};
pub use error::{ParseError, ParseResult, ResolutionError, ResolveResult};
pub use locale_tag::LocaleTag;
pub use resolver::{
    FieldError, PreferenceField, Resolution, resolve_all, resolve_calendar, resolve_currency,
    resolve_currency_format, resolve_measurement_system, resolve_territory, resolve_timezone,
};
pub use timezone_codes::timezone_for_code;
pub use types::{CalendarId, CurrencyCode, CurrencyFormat, MeasurementSystem, Territory};
pub use unicode_ext::{KNOWN_KEYS, RegionOverride, UnicodeOptions, decode_u_extension};
pub use validate::{ConsistencyWarning, validate};
