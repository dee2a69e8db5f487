use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GateType {
    And,
    Or,
    Not,
    Xor,
    Xnor,
}

pub fn gate_order() -> &'static [GateType] {
    &[
        GateType::And,
        GateType::Or,
        GateType::Not,
        GateType::Xor,
        GateType::Xnor,
    ]
}

impl GateType {
    pub fn as_str(&self) -> &'static str {
        match self {
            GateType::And => "AND",
            GateType::Or => "OR",
            GateType::Not => "NOT",
            GateType::Xor => "XOR",
            GateType::Xnor => "XNOR",
        }
    }

    /// Boolean output for a pair of binarized antigen states.
    ///
    /// NOT is unary and ignores `b`.
    pub fn apply_bits(&self, a: u8, b: u8) -> u8 {
        match self {
            GateType::And => a & b,
            GateType::Or => a | b,
            GateType::Not => 1 - a,
            GateType::Xor => a ^ b,
            GateType::Xnor => 1 - (a ^ b),
        }
    }

    /// Fuzzy-logic output for a pair of activation probabilities.
    ///
    /// Inputs are treated as independent Bernoulli activations, so AND is
    /// the joint probability and OR follows inclusion-exclusion. NOT is
    /// unary and ignores `b`.
    pub fn apply_probabilities(&self, a: f64, b: f64) -> f64 {
        match self {
            GateType::And => a * b,
            GateType::Or => a + b - a * b,
            GateType::Not => 1.0 - a,
            GateType::Xor => a * (1.0 - b) + (1.0 - a) * b,
            GateType::Xnor => a * b + (1.0 - a) * (1.0 - b),
        }
    }
}

impl std::fmt::Display for GateType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/gates.rs"]
mod tests;
