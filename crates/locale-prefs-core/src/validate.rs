use alloc::vec::Vec;

use crate::dataset::ReferenceDataset;
use crate::resolver::Resolution;
use crate::types::{CurrencyCode, MeasurementSystem, Territory};

/// Divergence between a resolved preference and the territory default.
/// Expected when the caller overrode a value; surfaced for observability,
/// never an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConsistencyWarning {
    CurrencyOverride {
        territory: Territory,
        expected: CurrencyCode,
        actual: CurrencyCode,
    },
    MeasurementSystemOverride {
        territory: Territory,
        expected: MeasurementSystem,
        actual: MeasurementSystem,
    },
}

/// Cross-checks a (possibly partial) resolution against the dataset.
/// Calendar validity is already enforced during resolution, so only the
/// override-detection checks remain here.
pub fn validate(resolution: &Resolution, dataset: &ReferenceDataset) -> Vec<ConsistencyWarning> {
    let mut warnings = Vec::new();
    let Some(territory) = &resolution.territory else {
        return warnings;
    };

    if let (Some(actual), Some(expected)) =
        (&resolution.currency, dataset.currency_for(territory))
    {
        if actual != expected {
            warnings.push(ConsistencyWarning::CurrencyOverride {
                territory: territory.clone(),
                expected: expected.clone(),
                actual: actual.clone(),
            });
        }
    }

    if let (Some(actual), Some(expected)) = (
        resolution.measurement_system,
        dataset.measurement_for(territory),
    ) {
        if actual != expected {
            warnings.push(ConsistencyWarning::MeasurementSystemOverride {
                territory: territory.clone(),
                expected,
                actual,
            });
        }
    }

    warnings
}
