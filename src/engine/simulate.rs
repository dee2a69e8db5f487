use std::collections::{BTreeMap, BTreeSet};

use rand::Rng;
use tracing::debug;

use crate::catalog::BiomarkerCatalog;
use crate::model::{AnalysisProfile, ExpressionRecord};

use super::EngineError;

/// Draws synthetic expression levels for every named biomarker.
///
/// Markers with an oncogenic component draw an elevated tumor level over a
/// healthy baseline; suppressor and unvalidated markers draw the inverse.
/// The draws model biological variability, so two calls agree only when
/// driven by the same seeded RNG. Names are visited in set order, which
/// keeps a seeded run reproducible regardless of how the caller collected
/// the names.
///
/// Fails on the first name the catalog does not know; no partial result is
/// returned, so a typo cannot silently skew downstream scores.
pub fn simulate_expression<R: Rng>(
    catalog: &BiomarkerCatalog,
    names: &BTreeSet<String>,
    profile: &AnalysisProfile,
    rng: &mut R,
) -> Result<BTreeMap<String, ExpressionRecord>, EngineError> {
    let mut records = BTreeMap::new();
    for name in names {
        let Some(indication) = catalog.indication(name) else {
            return Err(EngineError::UnknownBiomarker(name.clone()));
        };
        let (tumor, healthy) = if indication.is_oncogenic() {
            (
                rng.gen_range(profile.elevated_expr_min..profile.elevated_expr_max),
                rng.gen_range(profile.baseline_expr_min..profile.baseline_expr_max),
            )
        } else {
            (
                rng.gen_range(profile.baseline_expr_min..profile.baseline_expr_max),
                rng.gen_range(profile.elevated_expr_min..profile.elevated_expr_max),
            )
        };
        let record = ExpressionRecord::new(tumor, healthy);
        debug!(
            "{}: tumor {:.2}, healthy {:.2}, fold change {:.2}",
            name, record.tumor_expression, record.healthy_expression, record.fold_change
        );
        records.insert(name.clone(), record);
    }
    Ok(records)
}

/// Binary-classification threshold per biomarker: the geometric mean of its
/// tumor and healthy levels, a scale-appropriate midpoint between the two.
pub fn expression_thresholds(
    expression: &BTreeMap<String, ExpressionRecord>,
) -> BTreeMap<String, f64> {
    expression
        .iter()
        .map(|(name, record)| {
            let threshold = (record.tumor_expression * record.healthy_expression).sqrt();
            (name.clone(), threshold)
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/engine/simulate.rs"]
mod tests;
