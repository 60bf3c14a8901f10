use std::fs;
use std::path::Path;

use serde::Deserialize;

use locale_prefs_core::{CurrencyCode, MeasurementSystem, ReferenceDataset, Territory};

use crate::error::{RuntimeError, RuntimeResult};

#[derive(Debug, Deserialize)]
struct OverlayFile {
    #[serde(default)]
    language: Vec<LanguageRow>,
    #[serde(default)]
    territory: Vec<TerritoryRow>,
}

#[derive(Debug, Deserialize)]
struct LanguageRow {
    tag: String,
    territory: String,
    population: u64,
}

#[derive(Debug, Deserialize)]
struct TerritoryRow {
    code: String,
    #[serde(default)]
    currency: Option<String>,
    #[serde(default)]
    timezones: Vec<String>,
    #[serde(default)]
    measurement: Option<String>,
}

/// Layers deployment-local rows onto a dataset during the load phase.
/// A missing overlay file is not an error.
pub fn apply_overlay(dataset: &mut ReferenceDataset, path: &Path) -> RuntimeResult<()> {
    if !path.exists() {
        return Ok(());
    }
    let contents = fs::read_to_string(path)?;
    let parsed: OverlayFile = toml::from_str(&contents)?;

    for row in parsed.language {
        let territory = parse_territory(&row.territory)?;
        dataset.add_language_territory(&row.tag, territory, row.population);
    }

    for row in parsed.territory {
        let territory = parse_territory(&row.code)?;
        if let Some(currency) = &row.currency {
            let currency = CurrencyCode::new(currency)
                .map_err(|err| RuntimeError::InvalidDataset(err.to_string()))?;
            dataset.set_territory_currency(territory.clone(), currency);
        }
        for zone in &row.timezones {
            dataset.add_territory_timezone(territory.clone(), zone.clone());
        }
        if let Some(token) = &row.measurement {
            let system = MeasurementSystem::from_bcp47(token).ok_or_else(|| {
                RuntimeError::InvalidDataset(format!("unknown measurement system {token}"))
            })?;
            dataset.set_territory_measurement(territory.clone(), system);
        }
    }

    Ok(())
}

fn parse_territory(code: &str) -> RuntimeResult<Territory> {
    Territory::new(code).map_err(|err| RuntimeError::InvalidDataset(err.to_string()))
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use locale_prefs_core::{ReferenceDataset, Territory};

    use super::apply_overlay;

    fn temp_path() -> PathBuf {
        let mut path = std::env::temp_dir();
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time")
            .as_nanos();
        path.push(format!("locale_prefs_overlay_{nanos}.toml"));
        path
    }

    #[test]
    fn missing_overlay_is_a_no_op() {
        let mut dataset = ReferenceDataset::new("45");
        apply_overlay(&mut dataset, &temp_path()).expect("missing file ok");
        assert_eq!(dataset.language_count(), 0);
    }

    #[test]
    fn overlay_rows_layer_onto_dataset() {
        let path = temp_path();
        fs::write(
            &path,
            concat!(
                "[[language]]\n",
                "tag = \"mi\"\n",
                "territory = \"NZ\"\n",
                "population = 185000\n",
                "\n",
                "[[territory]]\n",
                "code = \"NZ\"\n",
                "currency = \"NZD\"\n",
                "timezones = [\"Pacific/Auckland\"]\n",
                "measurement = \"metric\"\n",
            ),
        )
        .expect("write overlay");

        let mut dataset = ReferenceDataset::new("45");
        apply_overlay(&mut dataset, &path).expect("apply");
        let nz = Territory::new("NZ").expect("territory");
        assert_eq!(
            dataset.default_territory("mi").map(Territory::as_str),
            Some("NZ")
        );
        assert_eq!(dataset.currency_for(&nz).map(|c| c.as_str()), Some("NZD"));
        assert_eq!(dataset.timezones_for(&nz).map(|zones| zones.len()), Some(1));

        fs::remove_file(&path).ok();
    }

    #[test]
    fn overlay_rejects_invalid_rows() {
        let path = temp_path();
        fs::write(
            &path,
            "[[territory]]\ncode = \"NZ\"\ncurrency = \"dollars\"\n",
        )
        .expect("write overlay");

        let mut dataset = ReferenceDataset::new("45");
        apply_overlay(&mut dataset, &path).expect_err("invalid currency should fail");

        fs::remove_file(&path).ok();
    }
}
