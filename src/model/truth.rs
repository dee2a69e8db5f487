use serde::Serialize;

use crate::model::gates::GateType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CellType {
    Tumor,
    Healthy,
}

impl CellType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CellType::Tumor => "tumor",
            CellType::Healthy => "healthy",
        }
    }
}

/// One input pattern of a truth table.
///
/// `inputs` holds one bit per gated antigen, in the same order as the
/// table's `antigens`. `probabilistic_output` is the fuzzy gate output over
/// the per-antigen activation probabilities implied by the pattern.
#[derive(Debug, Clone, Serialize)]
pub struct TruthRow {
    pub inputs: Vec<u8>,
    pub boolean_output: u8,
    pub probabilistic_output: f64,
    pub cell_type: CellType,
}

#[derive(Debug, Clone, Serialize)]
pub struct TruthTable {
    pub gate: GateType,
    pub antigens: Vec<String>,
    pub rows: Vec<TruthRow>,
}
