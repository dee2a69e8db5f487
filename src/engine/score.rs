use std::collections::BTreeMap;

use crate::model::{AnalysisProfile, CellType, GateType, TruthTable};

/// Expected kill mass split by cell archetype: `(tumor_kill, healthy_kill)`.
///
/// Per row, kill mass is `boolean_output * probabilistic_output`; a row the
/// gate keeps off contributes nothing however high its fuzzy signal.
pub fn kill_masses(table: &TruthTable) -> (f64, f64) {
    let mut tumor_kill = 0.0;
    let mut healthy_kill = 0.0;
    for row in &table.rows {
        let kill = f64::from(row.boolean_output) * row.probabilistic_output;
        match row.cell_type {
            CellType::Tumor => tumor_kill += kill,
            CellType::Healthy => healthy_kill += kill,
        }
    }
    (tumor_kill, healthy_kill)
}

/// Selectivity of one gate: tumor kill mass over healthy kill mass, with a
/// small epsilon keeping the denominator strictly positive. Always finite
/// and non-negative.
pub fn selectivity_score(table: &TruthTable, profile: &AnalysisProfile) -> f64 {
    let (tumor_kill, healthy_kill) = kill_masses(table);
    tumor_kill / (healthy_kill + profile.selectivity_epsilon)
}

pub fn calculate_selectivity_scores(
    truth_tables: &BTreeMap<GateType, TruthTable>,
    profile: &AnalysisProfile,
) -> BTreeMap<GateType, f64> {
    truth_tables
        .iter()
        .map(|(&gate, table)| (gate, selectivity_score(table, profile)))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/engine/score.rs"]
mod tests;
