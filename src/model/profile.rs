#[derive(Debug, Clone)]
pub struct AnalysisProfile {
    pub elevated_expr_min: f64,
    pub elevated_expr_max: f64,
    pub baseline_expr_min: f64,
    pub baseline_expr_max: f64,
    pub active_prob_floor: f64,
    pub active_prob_ceil: f64,
    pub inactive_prob: f64,
    pub selectivity_epsilon: f64,
}

impl AnalysisProfile {
    pub fn default_v1() -> Self {
        Self {
            elevated_expr_min: 5.0,
            elevated_expr_max: 15.0,
            baseline_expr_min: 0.5,
            baseline_expr_max: 3.0,
            active_prob_floor: 0.05,
            active_prob_ceil: 0.95,
            inactive_prob: 0.1,
            selectivity_epsilon: 0.001,
        }
    }
}
