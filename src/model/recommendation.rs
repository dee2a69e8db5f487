use serde::Serialize;

use crate::model::gates::GateType;

#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub gate: GateType,
    pub score: f64,
    pub explanation: String,
    pub safety_note: String,
}
