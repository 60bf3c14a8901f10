use locale_prefs_core::{
    CalendarId, CalendarPreferences, CurrencyCode, MeasurementSystem, ReferenceDataset, Territory,
};

use crate::error::{RuntimeError, RuntimeResult};

/// Seed dataset built explicitly at startup, derived from CLDR supplemental
/// data. Deployments wanting the full tables load a release through the
/// manifest path instead; this covers the major locales out of the box.
pub fn bundled_dataset() -> RuntimeResult<ReferenceDataset> {
    let mut dataset = ReferenceDataset::new("45-bundled");
    languages(&mut dataset)?;
    territories(&mut dataset)?;
    Ok(dataset)
}

fn languages(dataset: &mut ReferenceDataset) -> RuntimeResult<()> {
    let rows: &[(&str, &[(&str, u64)])] = &[
        ("am", &[("ET", 22_000_000)]),
        (
            "ar",
            &[("EG", 87_000_000), ("DZ", 33_000_000), ("SA", 29_000_000)],
        ),
        (
            "de",
            &[("DE", 72_000_000), ("AT", 8_000_000), ("CH", 5_000_000)],
        ),
        (
            "en",
            &[
                ("US", 254_000_000),
                ("IN", 200_000_000),
                ("GB", 63_000_000),
                ("CA", 30_000_000),
                ("AU", 23_000_000),
            ],
        ),
        (
            "es",
            &[
                ("MX", 110_000_000),
                ("CO", 45_000_000),
                ("ES", 44_000_000),
                ("AR", 41_000_000),
            ],
        ),
        ("fa", &[("IR", 67_000_000), ("AF", 15_000_000)]),
        (
            "fr",
            &[("FR", 64_000_000), ("CD", 30_000_000), ("CA", 7_000_000)],
        ),
        ("hi", &[("IN", 530_000_000)]),
        ("it", &[("IT", 57_000_000), ("CH", 400_000)]),
        ("ja", &[("JP", 121_000_000)]),
        ("ko", &[("KR", 47_000_000)]),
        ("nl", &[("NL", 16_000_000), ("BE", 6_000_000)]),
        ("pl", &[("PL", 37_000_000)]),
        (
            "pt",
            &[
                ("BR", 187_000_000),
                ("AO", 14_000_000),
                ("PT", 10_000_000),
                ("MZ", 8_000_000),
            ],
        ),
        ("ru", &[("RU", 130_000_000)]),
        ("th", &[("TH", 55_000_000)]),
        ("tr", &[("TR", 70_000_000)]),
        (
            "zh",
            &[
                ("CN", 1_300_000_000),
                ("TW", 22_000_000),
                ("HK", 6_500_000),
                ("SG", 1_000_000),
            ],
        ),
    ];
    for (language, entries) in rows {
        for (code, population) in *entries {
            dataset.add_language_territory(language, parse_territory(code)?, *population);
        }
    }
    Ok(())
}

fn territories(dataset: &mut ReferenceDataset) -> RuntimeResult<()> {
    use CalendarId::{Coptic, Ethiopic, Gregorian, Persian};
    use MeasurementSystem::{Metric, UkSystem, UsSystem};

    let g: &[CalendarId] = &[];

    add_territory(dataset, "AF", "AFN", &["Asia/Kabul"], Metric, &[Persian], Persian)?;
    add_territory(dataset, "AO", "AOA", &["Africa/Luanda"], Metric, g, Gregorian)?;
    add_territory(
        dataset,
        "AR",
        "ARS",
        &["America/Buenos_Aires"],
        Metric,
        g,
        Gregorian,
    )?;
    add_territory(dataset, "AT", "EUR", &["Europe/Vienna"], Metric, g, Gregorian)?;
    add_territory(
        dataset,
        "AU",
        "AUD",
        &[
            "Australia/Adelaide",
            "Australia/Brisbane",
            "Australia/Darwin",
            "Australia/Hobart",
            "Australia/Melbourne",
            "Australia/Perth",
            "Australia/Sydney",
        ],
        Metric,
        g,
        Gregorian,
    )?;
    add_territory(dataset, "BE", "EUR", &["Europe/Brussels"], Metric, g, Gregorian)?;
    add_territory(
        dataset,
        "BR",
        "BRL",
        &["America/Manaus", "America/Sao_Paulo"],
        Metric,
        g,
        Gregorian,
    )?;
    add_territory(
        dataset,
        "CA",
        "CAD",
        &["America/Toronto", "America/Vancouver"],
        Metric,
        g,
        Gregorian,
    )?;
    add_territory(
        dataset,
        "CD",
        "CDF",
        &["Africa/Kinshasa", "Africa/Lubumbashi"],
        Metric,
        g,
        Gregorian,
    )?;
    add_territory(dataset, "CH", "CHF", &["Europe/Zurich"], Metric, g, Gregorian)?;
    add_territory(dataset, "CN", "CNY", &["Asia/Shanghai"], Metric, g, Gregorian)?;
    add_territory(dataset, "CO", "COP", &["America/Bogota"], Metric, g, Gregorian)?;
    add_territory(dataset, "DE", "EUR", &["Europe/Berlin"], Metric, g, Gregorian)?;
    add_territory(dataset, "DZ", "DZD", &["Africa/Algiers"], Metric, g, Gregorian)?;
    add_territory(
        dataset,
        "EG",
        "EGP",
        &["Africa/Cairo"],
        Metric,
        &[Coptic, Gregorian],
        Gregorian,
    )?;
    add_territory(
        dataset,
        "ES",
        "EUR",
        &["Atlantic/Canary", "Europe/Madrid"],
        Metric,
        g,
        Gregorian,
    )?;
    add_territory(
        dataset,
        "ET",
        "ETB",
        &["Africa/Addis_Ababa"],
        Metric,
        &[Ethiopic, Coptic],
        Ethiopic,
    )?;
    add_territory(dataset, "FR", "EUR", &["Europe/Paris"], Metric, g, Gregorian)?;
    add_territory(dataset, "GB", "GBP", &["Europe/London"], UkSystem, g, Gregorian)?;
    add_territory(dataset, "HK", "HKD", &["Asia/Hong_Kong"], Metric, g, Gregorian)?;
    add_territory(dataset, "IN", "INR", &["Asia/Calcutta"], Metric, g, Gregorian)?;
    add_territory(
        dataset,
        "IR",
        "IRR",
        &["Asia/Tehran"],
        Metric,
        &[Persian],
        Persian,
    )?;
    add_territory(dataset, "IT", "EUR", &["Europe/Rome"], Metric, g, Gregorian)?;
    add_territory(dataset, "JP", "JPY", &["Asia/Tokyo"], Metric, g, Gregorian)?;
    add_territory(dataset, "KR", "KRW", &["Asia/Seoul"], Metric, g, Gregorian)?;
    add_territory(
        dataset,
        "MX",
        "MXN",
        &["America/Mexico_City", "America/Tijuana"],
        Metric,
        g,
        Gregorian,
    )?;
    add_territory(dataset, "MZ", "MZN", &["Africa/Maputo"], Metric, g, Gregorian)?;
    add_territory(dataset, "NL", "EUR", &["Europe/Amsterdam"], Metric, g, Gregorian)?;
    add_territory(dataset, "PL", "PLN", &["Europe/Warsaw"], Metric, g, Gregorian)?;
    add_territory(
        dataset,
        "PT",
        "EUR",
        &["Atlantic/Azores", "Europe/Lisbon"],
        Metric,
        g,
        Gregorian,
    )?;
    add_territory(
        dataset,
        "RU",
        "RUB",
        &["Asia/Vladivostok", "Asia/Yekaterinburg", "Europe/Moscow"],
        Metric,
        g,
        Gregorian,
    )?;
    add_territory(dataset, "SA", "SAR", &["Asia/Riyadh"], Metric, g, Gregorian)?;
    add_territory(dataset, "SG", "SGD", &["Asia/Singapore"], Metric, g, Gregorian)?;
    add_territory(dataset, "TH", "THB", &["Asia/Bangkok"], Metric, g, Gregorian)?;
    add_territory(dataset, "TR", "TRY", &["Europe/Istanbul"], Metric, g, Gregorian)?;
    add_territory(dataset, "TW", "TWD", &["Asia/Taipei"], Metric, g, Gregorian)?;
    add_territory(
        dataset,
        "US",
        "USD",
        &[
            "America/Chicago",
            "America/Denver",
            "America/Los_Angeles",
            "America/New_York",
        ],
        UsSystem,
        g,
        Gregorian,
    )?;

    Ok(())
}

fn add_territory(
    dataset: &mut ReferenceDataset,
    code: &str,
    currency: &str,
    zones: &[&str],
    measurement: MeasurementSystem,
    calendars: &[CalendarId],
    default_calendar: CalendarId,
) -> RuntimeResult<()> {
    let territory = parse_territory(code)?;
    let currency = CurrencyCode::new(currency)
        .map_err(|err| RuntimeError::InvalidDataset(err.to_string()))?;
    dataset.set_territory_currency(territory.clone(), currency);
    for zone in zones {
        dataset.add_territory_timezone(territory.clone(), *zone);
    }
    dataset.set_territory_calendars(
        territory.clone(),
        CalendarPreferences::new(calendars, default_calendar),
    );
    dataset.set_territory_measurement(territory, measurement);
    Ok(())
}

fn parse_territory(code: &str) -> RuntimeResult<Territory> {
    Territory::new(code).map_err(|err| RuntimeError::InvalidDataset(err.to_string()))
}

#[cfg(test)]
mod tests {
    use locale_prefs_core::{
        CalendarId, LocaleTag, MeasurementSystem, ResolutionError, Territory, decode_u_extension,
        resolve_calendar, resolve_measurement_system, resolve_territory, resolve_timezone,
    };

    use super::bundled_dataset;

    fn resolve_input(input: &str) -> (LocaleTag, locale_prefs_core::UnicodeOptions) {
        let tag = LocaleTag::parse(input).expect("valid tag");
        let options = decode_u_extension(&tag);
        (tag, options)
    }

    #[test]
    fn covers_major_language_defaults() {
        let dataset = bundled_dataset().expect("bundled");
        assert_eq!(
            dataset.default_territory("en").map(Territory::as_str),
            Some("US")
        );
        assert_eq!(
            dataset.default_territory("pt").map(Territory::as_str),
            Some("BR")
        );
        assert_eq!(
            dataset.default_territory("zh").map(Territory::as_str),
            Some("CN")
        );
    }

    #[test]
    fn australia_requires_timezone_disambiguation() {
        let dataset = bundled_dataset().expect("bundled");
        let (tag, options) = resolve_input("en-AU");
        let err = resolve_timezone(&tag, &options, &dataset).expect_err("ambiguous");
        assert!(matches!(err, ResolutionError::AmbiguousTimezone(_)));

        let (tag, options) = resolve_input("en-AU-u-tz-ausyd");
        let zone = resolve_timezone(&tag, &options, &dataset).expect("zone");
        assert_eq!(zone, "Australia/Sydney");
    }

    #[test]
    fn iran_defaults_to_persian_calendar() {
        let dataset = bundled_dataset().expect("bundled");
        let (tag, options) = resolve_input("fa-IR");
        let calendar = resolve_calendar(&tag, &options, &dataset).expect("calendar");
        assert_eq!(calendar, CalendarId::Persian);
    }

    #[test]
    fn united_kingdom_uses_uk_measurement_system() {
        let dataset = bundled_dataset().expect("bundled");
        let (tag, options) = resolve_input("en-GB");
        assert_eq!(
            resolve_measurement_system(&tag, &options, &dataset),
            Ok(MeasurementSystem::UkSystem)
        );
    }

    #[test]
    fn region_override_resolves_against_bundled_tables() {
        let dataset = bundled_dataset().expect("bundled");
        let (tag, options) = resolve_input("en-US-u-rg-auzzzz");
        let resolved = resolve_territory(&tag, &options, &dataset).expect("territory");
        assert_eq!(resolved.as_str(), "AU");
    }
}
