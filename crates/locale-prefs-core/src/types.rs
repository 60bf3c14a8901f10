use alloc::string::String;
use core::fmt;

use crate::error::{ParseError, ParseResult};

/// ISO3166 alpha-2 or UN M.49 three-digit area code, stored normalized.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Territory(String);

impl Territory {
    pub fn new(value: &str) -> ParseResult<Self> {
        let value = value.trim();
        if value.len() == 2 && value.bytes().all(|byte| byte.is_ascii_alphabetic()) {
            return Ok(Self(value.to_ascii_uppercase()));
        }
        if value.len() == 3 && value.bytes().all(|byte| byte.is_ascii_digit()) {
            return Ok(Self(String::from(value)));
        }
        Err(ParseError::InvalidRegion(String::from(value)))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Territory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Territory {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Territory::new(value)
    }
}

/// ISO4217 three-letter currency code, stored uppercase.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn new(value: &str) -> ParseResult<Self> {
        let value = value.trim();
        if value.len() == 3 && value.bytes().all(|byte| byte.is_ascii_alphabetic()) {
            return Ok(Self(value.to_ascii_uppercase()));
        }
        Err(ParseError::InvalidCurrency(String::from(value)))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for CurrencyCode {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        CurrencyCode::new(value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CalendarId {
    Gregorian,
    Coptic,
    Persian,
    Ethiopic,
}

impl CalendarId {
    /// Decodes a `-u-ca-` token. CLDR abbreviates gregorian as `gregory`;
    /// both spellings are accepted.
    pub fn from_bcp47(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case("gregorian") || value.eq_ignore_ascii_case("gregory") {
            return Some(CalendarId::Gregorian);
        }
        if value.eq_ignore_ascii_case("coptic") {
            return Some(CalendarId::Coptic);
        }
        if value.eq_ignore_ascii_case("persian") {
            return Some(CalendarId::Persian);
        }
        if value.eq_ignore_ascii_case("ethiopic") {
            return Some(CalendarId::Ethiopic);
        }
        None
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CalendarId::Gregorian => "gregorian",
            CalendarId::Coptic => "coptic",
            CalendarId::Persian => "persian",
            CalendarId::Ethiopic => "ethiopic",
        }
    }
}

impl fmt::Display for CalendarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CurrencyFormat {
    Standard,
    Accounting,
}

impl CurrencyFormat {
    /// Decodes a `-u-cf-` token. The external form for the accounting
    /// style is `account`.
    pub fn from_bcp47(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case("standard") {
            return Some(CurrencyFormat::Standard);
        }
        if value.eq_ignore_ascii_case("account") {
            return Some(CurrencyFormat::Accounting);
        }
        None
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CurrencyFormat::Standard => "standard",
            CurrencyFormat::Accounting => "accounting",
        }
    }
}

impl fmt::Display for CurrencyFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MeasurementSystem {
    Metric,
    UsSystem,
    UkSystem,
}

impl MeasurementSystem {
    /// Decodes a `-u-ms-` token, exact match only.
    pub fn from_bcp47(value: &str) -> Option<Self> {
        match value {
            "metric" => Some(MeasurementSystem::Metric),
            "ussystem" => Some(MeasurementSystem::UsSystem),
            "uksystem" => Some(MeasurementSystem::UkSystem),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MeasurementSystem::Metric => "metric",
            MeasurementSystem::UsSystem => "ussystem",
            MeasurementSystem::UkSystem => "uksystem",
        }
    }
}

impl fmt::Display for MeasurementSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
