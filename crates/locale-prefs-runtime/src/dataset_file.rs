use std::collections::BTreeMap;

use serde::Deserialize;

use locale_prefs_core::{
    CalendarId, CalendarPreferences, CurrencyCode, MeasurementSystem, ReferenceDataset, Territory,
};

use crate::error::{RuntimeError, RuntimeResult};

/// On-disk shape of a dataset document. Values are plain strings here;
/// conversion into the core dataset validates them against the typed
/// identifier rules.
#[derive(Debug, Deserialize)]
pub struct DatasetFile {
    pub version: String,
    #[serde(default)]
    pub languages: BTreeMap<String, Vec<LanguageTerritory>>,
    #[serde(default)]
    pub territories: BTreeMap<String, TerritoryEntry>,
}

#[derive(Debug, Deserialize)]
pub struct LanguageTerritory {
    pub territory: String,
    pub population: u64,
}

#[derive(Debug, Deserialize)]
pub struct TerritoryEntry {
    pub currency: String,
    #[serde(default)]
    pub timezones: Vec<String>,
    #[serde(default)]
    pub calendars: Vec<String>,
    #[serde(default)]
    pub default_calendar: Option<String>,
    pub measurement: String,
}

impl DatasetFile {
    pub fn from_json(contents: &str) -> RuntimeResult<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    pub fn into_dataset(self) -> RuntimeResult<ReferenceDataset> {
        let mut dataset = ReferenceDataset::new(self.version.as_str());

        for (language, entries) in &self.languages {
            for entry in entries {
                let territory = parse_territory(&entry.territory)?;
                dataset.add_language_territory(language, territory, entry.population);
            }
        }

        for (code, entry) in &self.territories {
            let territory = parse_territory(code)?;

            let currency = CurrencyCode::new(&entry.currency)
                .map_err(|err| RuntimeError::InvalidDataset(err.to_string()))?;
            dataset.set_territory_currency(territory.clone(), currency);

            for zone in &entry.timezones {
                dataset.add_territory_timezone(territory.clone(), zone.clone());
            }

            let mut allowed = Vec::with_capacity(entry.calendars.len());
            for token in &entry.calendars {
                allowed.push(parse_calendar(token)?);
            }
            // An omitted default keeps gregorian valid for the territory.
            let default = match &entry.default_calendar {
                Some(token) => parse_calendar(token)?,
                None => CalendarId::Gregorian,
            };
            dataset.set_territory_calendars(
                territory.clone(),
                CalendarPreferences::new(&allowed, default),
            );

            let measurement = MeasurementSystem::from_bcp47(&entry.measurement).ok_or_else(|| {
                RuntimeError::InvalidDataset(format!(
                    "unknown measurement system {}",
                    entry.measurement
                ))
            })?;
            dataset.set_territory_measurement(territory, measurement);
        }

        Ok(dataset)
    }
}

fn parse_territory(code: &str) -> RuntimeResult<Territory> {
    Territory::new(code).map_err(|err| RuntimeError::InvalidDataset(err.to_string()))
}

fn parse_calendar(token: &str) -> RuntimeResult<CalendarId> {
    CalendarId::from_bcp47(token)
        .ok_or_else(|| RuntimeError::InvalidDataset(format!("unknown calendar {token}")))
}
