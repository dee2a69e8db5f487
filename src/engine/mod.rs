use std::collections::{BTreeMap, BTreeSet};

use rand::Rng;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::catalog::BiomarkerCatalog;
use crate::model::{AnalysisProfile, ExpressionRecord, GateType, Recommendation, TruthTable};

pub mod recommend;
pub mod score;
pub mod simulate;
pub mod truth_table;

pub use recommend::best_gate_recommendation;
pub use score::{calculate_selectivity_scores, kill_masses, selectivity_score};
pub use simulate::{expression_thresholds, simulate_expression};
pub use truth_table::{
    MAX_GATE_INPUTS, activation_probability, generate_all_truth_tables, generate_truth_table,
};

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("unknown biomarker '{0}': not present in the catalog")]
    UnknownBiomarker(String),

    #[error("no simulated expression for antigen '{0}'")]
    MissingExpression(String),

    #[error("no tumor antigens selected: at least one is required for gate analysis")]
    EmptyTumorSelection,

    #[error("no selectivity scores to rank")]
    EmptyScores,
}

/// Antigen names chosen for one analysis run. Tumor antigens drive the gate
/// logic in selection order; healthy antigens are simulated alongside for
/// context but never enter a gate.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AntigenSelection {
    pub tumor: Vec<String>,
    pub healthy: Vec<String>,
}

impl AntigenSelection {
    pub fn new(tumor: Vec<String>, healthy: Vec<String>) -> Self {
        Self { tumor, healthy }
    }

    /// Union of both lists, deduplicated, in name order. This is the set the
    /// simulator draws for, so draw order does not depend on selection order.
    pub fn all_names(&self) -> BTreeSet<String> {
        self.tumor
            .iter()
            .chain(self.healthy.iter())
            .cloned()
            .collect()
    }
}

/// Complete result of one analysis run.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub selection: AntigenSelection,
    pub gate_antigens: Vec<String>,
    pub expression: BTreeMap<String, ExpressionRecord>,
    pub thresholds: BTreeMap<String, f64>,
    pub truth_tables: BTreeMap<GateType, TruthTable>,
    pub scores: BTreeMap<GateType, f64>,
    pub recommendation: Recommendation,
}

/// Runs the full selectivity analysis: one expression draw shared by all
/// gates, truth tables and scores for every gate, then the top-gate
/// recommendation.
///
/// Gate logic is defined for at most [`MAX_GATE_INPUTS`] antigens; extra
/// tumor selections are ignored with a warning. An empty tumor selection is
/// rejected here, before any simulation happens.
pub fn run_analysis<R: Rng>(
    catalog: &BiomarkerCatalog,
    selection: &AntigenSelection,
    profile: &AnalysisProfile,
    rng: &mut R,
) -> Result<AnalysisReport, EngineError> {
    if selection.tumor.is_empty() {
        return Err(EngineError::EmptyTumorSelection);
    }
    if selection.tumor.len() > MAX_GATE_INPUTS {
        warn!(
            "{} tumor antigens selected, gate logic uses only the first {}",
            selection.tumor.len(),
            MAX_GATE_INPUTS
        );
    }
    let gate_antigens: Vec<String> = selection
        .tumor
        .iter()
        .take(MAX_GATE_INPUTS)
        .cloned()
        .collect();

    let names = selection.all_names();
    info!(
        "analyzing {} antigens ({} gating)",
        names.len(),
        gate_antigens.len()
    );

    let expression = simulate_expression(catalog, &names, profile, rng)?;
    let thresholds = expression_thresholds(&expression);
    let truth_tables =
        generate_all_truth_tables(catalog, &gate_antigens, &expression, &thresholds, profile)?;
    let scores = calculate_selectivity_scores(&truth_tables, profile);
    let recommendation = best_gate_recommendation(&scores)?;
    debug!(
        "best gate {} with selectivity {:.3}",
        recommendation.gate, recommendation.score
    );

    Ok(AnalysisReport {
        selection: selection.clone(),
        gate_antigens,
        expression,
        thresholds,
        truth_tables,
        scores,
        recommendation,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/engine/analysis.rs"]
mod tests;
