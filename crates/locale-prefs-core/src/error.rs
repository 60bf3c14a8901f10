use alloc::string::String;
use core::fmt;

use crate::types::{CalendarId, Territory};

/// Structural failure while parsing a tag or decoding extension content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    EmptyTag,
    EmptySubtag,
    MalformedTag(&'static str),
    DuplicateExtension(char),
    EmptyExtension(char),
    InvalidRegion(String),
    InvalidCurrency(String),
    InvalidRegionOverride(String),
}

pub type ParseResult<T> = Result<T, ParseError>;

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::EmptyTag => write!(f, "locale tag is empty"),
            ParseError::EmptySubtag => write!(f, "locale tag has empty subtag"),
            ParseError::MalformedTag(message) => write!(f, "malformed tag: {message}"),
            ParseError::DuplicateExtension(singleton) => {
                write!(f, "duplicate extension singleton {singleton}")
            }
            ParseError::EmptyExtension(singleton) => {
                write!(f, "extension singleton {singleton} has no subtags")
            }
            ParseError::InvalidRegion(value) => write!(f, "invalid region code {value}"),
            ParseError::InvalidCurrency(value) => write!(f, "invalid currency code {value}"),
            ParseError::InvalidRegionOverride(value) => {
                write!(f, "invalid region override {value}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// Per-preference failure while resolving a parsed tag against a dataset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResolutionError {
    NoDefaultTerritory(String),
    InvalidRegionOverride(String),
    UnsupportedCalendar(String),
    CalendarNotValidForTerritory {
        calendar: CalendarId,
        territory: Territory,
    },
    UnknownTimezoneCode(String),
    AmbiguousTimezone(Territory),
    InvalidCurrencyCode(String),
    InvalidCurrencyFormat(String),
    InvalidMeasurementSystem(String),
    MissingTerritoryData(Territory),
}

pub type ResolveResult<T> = Result<T, ResolutionError>;

impl fmt::Display for ResolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolutionError::NoDefaultTerritory(language) => {
                write!(f, "no default territory for language {language}")
            }
            ResolutionError::InvalidRegionOverride(value) => {
                write!(f, "invalid region override {value}")
            }
            ResolutionError::UnsupportedCalendar(value) => {
                write!(f, "unsupported calendar {value}")
            }
            ResolutionError::CalendarNotValidForTerritory {
                calendar,
                territory,
            } => {
                write!(f, "calendar {calendar} is not valid for territory {territory}")
            }
            ResolutionError::UnknownTimezoneCode(code) => {
                write!(f, "unknown timezone code {code}")
            }
            ResolutionError::AmbiguousTimezone(territory) => {
                write!(f, "territory {territory} has more than one timezone")
            }
            ResolutionError::InvalidCurrencyCode(value) => {
                write!(f, "invalid currency code {value}")
            }
            ResolutionError::InvalidCurrencyFormat(value) => {
                write!(f, "invalid currency format {value}")
            }
            ResolutionError::InvalidMeasurementSystem(value) => {
                write!(f, "invalid measurement system {value}")
            }
            ResolutionError::MissingTerritoryData(territory) => {
                write!(f, "dataset has no entry for territory {territory}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ResolutionError {}
