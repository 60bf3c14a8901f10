use alloc::collections::{BTreeMap, BTreeSet};
use alloc::string::String;
use alloc::vec::Vec;

use crate::types::{CalendarId, CurrencyCode, MeasurementSystem, Territory};

/// Calendars valid for a territory, plus the one to use when gregorian is
/// excluded from the set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CalendarPreferences {
    allowed: BTreeSet<CalendarId>,
    default: CalendarId,
}

impl CalendarPreferences {
    pub fn new(allowed: &[CalendarId], default: CalendarId) -> Self {
        let mut set: BTreeSet<CalendarId> = allowed.iter().copied().collect();
        set.insert(default);
        Self {
            allowed: set,
            default,
        }
    }

    pub fn allows(&self, calendar: CalendarId) -> bool {
        self.allowed.contains(&calendar)
    }

    pub fn default_calendar(&self) -> CalendarId {
        self.default
    }
}

/// Versioned, read-only CLDR-derived lookup tables.
///
/// Built once at load time through the `add_*`/`set_*` mutators, then shared
/// by reference across resolution calls. Nothing here has interior
/// mutability, so a loaded dataset is freely shareable between threads.
#[derive(Clone, Debug, Default)]
pub struct ReferenceDataset {
    version: String,
    language_territories: BTreeMap<String, Vec<(Territory, u64)>>,
    territory_currency: BTreeMap<Territory, CurrencyCode>,
    territory_timezones: BTreeMap<Territory, BTreeSet<String>>,
    territory_calendars: BTreeMap<Territory, CalendarPreferences>,
    territory_measurement: BTreeMap<Territory, MeasurementSystem>,
}

impl ReferenceDataset {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            ..Self::default()
        }
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn add_language_territory(
        &mut self,
        language: &str,
        territory: Territory,
        population: u64,
    ) {
        self.language_territories
            .entry(language.to_ascii_lowercase())
            .or_default()
            .push((territory, population));
    }

    pub fn set_territory_currency(&mut self, territory: Territory, currency: CurrencyCode) {
        self.territory_currency.insert(territory, currency);
    }

    pub fn add_territory_timezone(&mut self, territory: Territory, zone: impl Into<String>) {
        self.territory_timezones
            .entry(territory)
            .or_default()
            .insert(zone.into());
    }

    pub fn set_territory_calendars(
        &mut self,
        territory: Territory,
        preferences: CalendarPreferences,
    ) {
        self.territory_calendars.insert(territory, preferences);
    }

    pub fn set_territory_measurement(
        &mut self,
        territory: Territory,
        system: MeasurementSystem,
    ) {
        self.territory_measurement.insert(territory, system);
    }

    /// Highest-population territory recorded for a language. Exact
    /// population ties break toward the lexicographically smaller code so
    /// resolution stays deterministic.
    pub fn default_territory(&self, language: &str) -> Option<&Territory> {
        let entries = self
            .language_territories
            .get(&language.to_ascii_lowercase())?;
        entries
            .iter()
            .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(&a.0)))
            .map(|(territory, _)| territory)
    }

    pub fn currency_for(&self, territory: &Territory) -> Option<&CurrencyCode> {
        self.territory_currency.get(territory)
    }

    pub fn timezones_for(&self, territory: &Territory) -> Option<&BTreeSet<String>> {
        self.territory_timezones.get(territory)
    }

    pub fn calendars_for(&self, territory: &Territory) -> Option<&CalendarPreferences> {
        self.territory_calendars.get(territory)
    }

    pub fn measurement_for(&self, territory: &Territory) -> Option<MeasurementSystem> {
        self.territory_measurement.get(territory).copied()
    }

    pub fn language_count(&self) -> usize {
        self.language_territories.len()
    }

    pub fn territory_count(&self) -> usize {
        self.territory_currency.len()
    }
}
