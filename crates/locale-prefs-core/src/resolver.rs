use alloc::string::String;
use alloc::vec::Vec;

use crate::dataset::ReferenceDataset;
use crate::error::{ResolutionError, ResolveResult};
use crate::locale_tag::LocaleTag;
use crate::timezone_codes::timezone_for_code;
use crate::types::{CalendarId, CurrencyCode, CurrencyFormat, MeasurementSystem, Territory};
use crate::unicode_ext::{RegionOverride, UnicodeOptions};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreferenceField {
    Territory,
    Calendar,
    Timezone,
    Currency,
    CurrencyFormat,
    MeasurementSystem,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: PreferenceField,
    pub error: ResolutionError,
}

/// Aggregate output of [`resolve_all`]: whatever resolved, plus the
/// per-field errors for whatever did not. A missing timezone with an
/// [`ResolutionError::AmbiguousTimezone`] entry is the reported-ambiguity
/// case; callers disambiguate by supplying `-u-tz-`.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Resolution {
    pub territory: Option<Territory>,
    pub calendar: Option<CalendarId>,
    pub timezone: Option<String>,
    pub currency: Option<CurrencyCode>,
    pub currency_format: Option<CurrencyFormat>,
    pub measurement_system: Option<MeasurementSystem>,
    pub errors: Vec<FieldError>,
}

impl Resolution {
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_for(&self, field: PreferenceField) -> Option<&ResolutionError> {
        self.errors
            .iter()
            .find(|entry| entry.field == field)
            .map(|entry| &entry.error)
    }
}

/// Territory rule: valid `rg` override, then the tag's region, then the
/// highest-population territory recorded for the language.
pub fn resolve_territory(
    tag: &LocaleTag,
    options: &UnicodeOptions,
    dataset: &ReferenceDataset,
) -> ResolveResult<Territory> {
    match options.region_override() {
        Some(RegionOverride::Territory(territory)) => return Ok(territory.clone()),
        Some(RegionOverride::Malformed(raw)) => {
            return Err(ResolutionError::InvalidRegionOverride(raw.clone()));
        }
        None => {}
    }
    if let Some(region) = tag.region() {
        return Ok(region.clone());
    }
    dataset
        .default_territory(tag.language())
        .cloned()
        .ok_or_else(|| ResolutionError::NoDefaultTerritory(String::from(tag.language())))
}

pub fn resolve_calendar(
    tag: &LocaleTag,
    options: &UnicodeOptions,
    dataset: &ReferenceDataset,
) -> ResolveResult<CalendarId> {
    let territory = resolve_territory(tag, options, dataset)?;
    calendar_for_territory(options, dataset, &territory)
}

fn calendar_for_territory(
    options: &UnicodeOptions,
    dataset: &ReferenceDataset,
    territory: &Territory,
) -> ResolveResult<CalendarId> {
    if let Some(value) = options.resolvable("ca") {
        let calendar = decode_calendar(value)?;
        let preferences = dataset
            .calendars_for(territory)
            .ok_or_else(|| ResolutionError::MissingTerritoryData(territory.clone()))?;
        if !preferences.allows(calendar) {
            return Err(ResolutionError::CalendarNotValidForTerritory {
                calendar,
                territory: territory.clone(),
            });
        }
        return Ok(calendar);
    }
    match dataset.calendars_for(territory) {
        Some(preferences) if !preferences.allows(CalendarId::Gregorian) => {
            Ok(preferences.default_calendar())
        }
        _ => Ok(CalendarId::Gregorian),
    }
}

fn decode_calendar(value: &str) -> ResolveResult<CalendarId> {
    CalendarId::from_bcp47(value)
        .ok_or_else(|| ResolutionError::UnsupportedCalendar(String::from(value)))
}

pub fn resolve_timezone(
    tag: &LocaleTag,
    options: &UnicodeOptions,
    dataset: &ReferenceDataset,
) -> ResolveResult<String> {
    if let Some(code) = options.resolvable("tz") {
        return timezone_override(code);
    }
    let territory = resolve_territory(tag, options, dataset)?;
    timezone_for_territory(dataset, &territory)
}

fn timezone_override(code: &str) -> ResolveResult<String> {
    timezone_for_code(code)
        .map(String::from)
        .ok_or_else(|| ResolutionError::UnknownTimezoneCode(String::from(code)))
}

fn timezone_for_territory(
    dataset: &ReferenceDataset,
    territory: &Territory,
) -> ResolveResult<String> {
    let zones = dataset
        .timezones_for(territory)
        .ok_or_else(|| ResolutionError::MissingTerritoryData(territory.clone()))?;
    let mut iter = zones.iter();
    match (iter.next(), iter.next()) {
        (Some(zone), None) => Ok(zone.clone()),
        (Some(_), Some(_)) => Err(ResolutionError::AmbiguousTimezone(territory.clone())),
        (None, _) => Err(ResolutionError::MissingTerritoryData(territory.clone())),
    }
}

/// Currency rule: a syntactically valid `cu` override is absolute and skips
/// the territory cross-check entirely.
pub fn resolve_currency(
    tag: &LocaleTag,
    options: &UnicodeOptions,
    dataset: &ReferenceDataset,
) -> ResolveResult<CurrencyCode> {
    if let Some(value) = options.resolvable("cu") {
        return currency_override(value);
    }
    let territory = resolve_territory(tag, options, dataset)?;
    currency_for_territory(dataset, &territory)
}

fn currency_override(value: &str) -> ResolveResult<CurrencyCode> {
    CurrencyCode::new(value)
        .map_err(|_| ResolutionError::InvalidCurrencyCode(String::from(value)))
}

fn currency_for_territory(
    dataset: &ReferenceDataset,
    territory: &Territory,
) -> ResolveResult<CurrencyCode> {
    dataset
        .currency_for(territory)
        .cloned()
        .ok_or_else(|| ResolutionError::MissingTerritoryData(territory.clone()))
}

/// Currency-format rule needs no territory at all: `account` maps to the
/// accounting style, `standard` to the standard numeric style.
pub fn resolve_currency_format(
    _tag: &LocaleTag,
    options: &UnicodeOptions,
    _dataset: &ReferenceDataset,
) -> ResolveResult<CurrencyFormat> {
    match options.resolvable("cf") {
        Some(value) => CurrencyFormat::from_bcp47(value)
            .ok_or_else(|| ResolutionError::InvalidCurrencyFormat(String::from(value))),
        None => Ok(CurrencyFormat::Standard),
    }
}

pub fn resolve_measurement_system(
    tag: &LocaleTag,
    options: &UnicodeOptions,
    dataset: &ReferenceDataset,
) -> ResolveResult<MeasurementSystem> {
    if let Some(value) = options.resolvable("ms") {
        return measurement_override(value);
    }
    let territory = resolve_territory(tag, options, dataset)?;
    dataset
        .measurement_for(&territory)
        .ok_or_else(|| ResolutionError::MissingTerritoryData(territory.clone()))
}

fn measurement_override(value: &str) -> ResolveResult<MeasurementSystem> {
    MeasurementSystem::from_bcp47(value)
        .ok_or_else(|| ResolutionError::InvalidMeasurementSystem(String::from(value)))
}

/// Resolves all five preferences, collecting partial results instead of
/// failing atomically.
///
/// The territory is computed once and shared. When it fails, its error is
/// recorded once under [`PreferenceField::Territory`], and the remaining
/// fields are attempted only through their territory-independent override
/// paths so the error list stays free of repeated territory noise.
pub fn resolve_all(
    tag: &LocaleTag,
    options: &UnicodeOptions,
    dataset: &ReferenceDataset,
) -> Resolution {
    let mut resolution = Resolution::default();

    let territory = match resolve_territory(tag, options, dataset) {
        Ok(territory) => {
            resolution.territory = Some(territory.clone());
            Some(territory)
        }
        Err(error) => {
            resolution.errors.push(FieldError {
                field: PreferenceField::Territory,
                error,
            });
            None
        }
    };

    match (&territory, options.resolvable("ca")) {
        (Some(territory), _) => {
            match calendar_for_territory(options, dataset, territory) {
                Ok(calendar) => resolution.calendar = Some(calendar),
                Err(error) => resolution.errors.push(FieldError {
                    field: PreferenceField::Calendar,
                    error,
                }),
            }
        }
        (None, Some(value)) => {
            // Without a territory the validity set is unknowable, but an
            // unsupported token is still a reportable failure.
            if let Err(error) = decode_calendar(value) {
                resolution.errors.push(FieldError {
                    field: PreferenceField::Calendar,
                    error,
                });
            }
        }
        (None, None) => {}
    }

    match (&territory, options.resolvable("tz")) {
        (_, Some(code)) => match timezone_override(code) {
            Ok(zone) => resolution.timezone = Some(zone),
            Err(error) => resolution.errors.push(FieldError {
                field: PreferenceField::Timezone,
                error,
            }),
        },
        (Some(territory), None) => match timezone_for_territory(dataset, territory) {
            Ok(zone) => resolution.timezone = Some(zone),
            Err(error) => resolution.errors.push(FieldError {
                field: PreferenceField::Timezone,
                error,
            }),
        },
        (None, None) => {}
    }

    match (&territory, options.resolvable("cu")) {
        (_, Some(value)) => match currency_override(value) {
            Ok(currency) => resolution.currency = Some(currency),
            Err(error) => resolution.errors.push(FieldError {
                field: PreferenceField::Currency,
                error,
            }),
        },
        (Some(territory), None) => match currency_for_territory(dataset, territory) {
            Ok(currency) => resolution.currency = Some(currency),
            Err(error) => resolution.errors.push(FieldError {
                field: PreferenceField::Currency,
                error,
            }),
        },
        (None, None) => {}
    }

    match resolve_currency_format(tag, options, dataset) {
        Ok(format) => resolution.currency_format = Some(format),
        Err(error) => resolution.errors.push(FieldError {
            field: PreferenceField::CurrencyFormat,
            error,
        }),
    }

    match (&territory, options.resolvable("ms")) {
        (_, Some(value)) => match measurement_override(value) {
            Ok(system) => resolution.measurement_system = Some(system),
            Err(error) => resolution.errors.push(FieldError {
                field: PreferenceField::MeasurementSystem,
                error,
            }),
        },
        (Some(territory), None) => match dataset
            .measurement_for(territory)
            .ok_or_else(|| ResolutionError::MissingTerritoryData(territory.clone()))
        {
            Ok(system) => resolution.measurement_system = Some(system),
            Err(error) => resolution.errors.push(FieldError {
                field: PreferenceField::MeasurementSystem,
                error,
            }),
        },
        (None, None) => {}
    }

    resolution
}
