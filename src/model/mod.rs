pub mod expression;
pub mod gates;
pub mod profile;
pub mod recommendation;
pub mod truth;

pub use expression::ExpressionRecord;
pub use gates::{GateType, gate_order};
pub use profile::AnalysisProfile;
pub use recommendation::Recommendation;
pub use truth::{CellType, TruthRow, TruthTable};
