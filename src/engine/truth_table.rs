use std::collections::BTreeMap;

use crate::catalog::BiomarkerCatalog;
use crate::model::{
    AnalysisProfile, CellType, ExpressionRecord, GateType, TruthRow, TruthTable, gate_order,
};

use super::EngineError;

/// Binary gate logic is defined for at most this many antigen inputs.
/// Callers selecting more antigens gate on the first two only.
pub const MAX_GATE_INPUTS: usize = 2;

/// Activation probability for one antigen in one input pattern.
///
/// A present antigen (bit 1) maps its tumor expression through a saturating
/// ratio against the binarization threshold, clamped away from certainty at
/// both ends. An absent antigen keeps a fixed leak probability rather than
/// zero, reflecting imperfect CAR silencing.
pub fn activation_probability(
    bit: u8,
    tumor_expression: f64,
    threshold: f64,
    profile: &AnalysisProfile,
) -> f64 {
    if bit == 1 {
        let p = tumor_expression / (tumor_expression + threshold);
        p.clamp(profile.active_prob_floor, profile.active_prob_ceil)
    } else {
        profile.inactive_prob
    }
}

/// Enumerates every input pattern for one gate over the selected tumor
/// antigens (capped at [`MAX_GATE_INPUTS`]) in increasing binary order, and
/// computes the boolean output, the fuzzy probabilistic output and the cell
/// archetype label per pattern.
///
/// A single-antigen table feeds the gate that antigen's bit twice; NOT only
/// ever reads the first input. An empty selection yields one inert row so
/// the table shape stays well defined.
pub fn generate_truth_table(
    gate: GateType,
    catalog: &BiomarkerCatalog,
    tumor_antigens: &[String],
    expression: &BTreeMap<String, ExpressionRecord>,
    thresholds: &BTreeMap<String, f64>,
    profile: &AnalysisProfile,
) -> Result<TruthTable, EngineError> {
    let antigens: Vec<String> = tumor_antigens
        .iter()
        .take(MAX_GATE_INPUTS)
        .cloned()
        .collect();
    let n = antigens.len();

    if n == 0 {
        return Ok(TruthTable {
            gate,
            antigens,
            rows: vec![TruthRow {
                inputs: Vec::new(),
                boolean_output: 0,
                probabilistic_output: 0.0,
                cell_type: CellType::Healthy,
            }],
        });
    }

    let mut rows = Vec::with_capacity(1 << n);
    for pattern in 0..(1u32 << n) {
        let inputs: Vec<u8> = (0..n)
            .map(|i| ((pattern >> (n - 1 - i)) & 1) as u8)
            .collect();

        let a = inputs[0];
        let b = if n > 1 { inputs[1] } else { a };
        let boolean_output = gate.apply_bits(a, b);

        let mut probs = Vec::with_capacity(n);
        for (antigen, bit) in antigens.iter().zip(&inputs) {
            let record = expression
                .get(antigen)
                .ok_or_else(|| EngineError::MissingExpression(antigen.clone()))?;
            let threshold = thresholds
                .get(antigen)
                .ok_or_else(|| EngineError::MissingExpression(antigen.clone()))?;
            probs.push(activation_probability(
                *bit,
                record.tumor_expression,
                *threshold,
                profile,
            ));
        }
        let pa = probs[0];
        let pb = if n > 1 { probs[1] } else { pa };
        let probabilistic_output = gate.apply_probabilities(pa, pb);

        let cell_type = classify_pattern(catalog, &antigens, &inputs);

        rows.push(TruthRow {
            inputs,
            boolean_output,
            probabilistic_output,
            cell_type,
        });
    }

    Ok(TruthTable {
        gate,
        antigens,
        rows,
    })
}

/// Labels an input pattern as a tumor or healthy cell archetype.
///
/// Counts bits consistent with the marker biology: an oncogenic marker
/// present, or a suppressor absent. Tumor requires a strict majority of
/// consistent bits, so a single-positive pattern over two oncogenic markers
/// stays healthy. Markers missing from the catalog count as neither.
fn classify_pattern(catalog: &BiomarkerCatalog, antigens: &[String], inputs: &[u8]) -> CellType {
    let mut consistent = 0usize;
    for (antigen, bit) in antigens.iter().zip(inputs) {
        let indication = catalog.indication(antigen);
        let oncogenic = indication.is_some_and(|ind| ind.is_oncogenic());
        let suppressor = indication.is_some_and(|ind| ind.is_suppressor());
        if oncogenic && *bit == 1 {
            consistent += 1;
        } else if suppressor && *bit == 0 {
            consistent += 1;
        }
    }
    if 2 * consistent > inputs.len() {
        CellType::Tumor
    } else {
        CellType::Healthy
    }
}

/// One table per gate, all sharing the same expression draw. Keys iterate
/// in the fixed gate priority order.
pub fn generate_all_truth_tables(
    catalog: &BiomarkerCatalog,
    tumor_antigens: &[String],
    expression: &BTreeMap<String, ExpressionRecord>,
    thresholds: &BTreeMap<String, f64>,
    profile: &AnalysisProfile,
) -> Result<BTreeMap<GateType, TruthTable>, EngineError> {
    let mut tables = BTreeMap::new();
    for &gate in gate_order() {
        let table = generate_truth_table(
            gate,
            catalog,
            tumor_antigens,
            expression,
            thresholds,
            profile,
        )?;
        tables.insert(gate, table);
    }
    Ok(tables)
}

#[cfg(test)]
#[path = "../../tests/src_inline/engine/truth_table.rs"]
mod tests;
