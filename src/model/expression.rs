use serde::Serialize;

/// Simulated expression levels for one antigen, in arbitrary units.
///
/// `fold_change` is tumor over healthy; it is `f64::INFINITY` when the
/// healthy level is zero.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ExpressionRecord {
    pub tumor_expression: f64,
    pub healthy_expression: f64,
    pub fold_change: f64,
}

impl ExpressionRecord {
    pub fn new(tumor_expression: f64, healthy_expression: f64) -> Self {
        let fold_change = if healthy_expression == 0.0 {
            f64::INFINITY
        } else {
            tumor_expression / healthy_expression
        };
        Self {
            tumor_expression,
            healthy_expression,
            fold_change,
        }
    }
}
