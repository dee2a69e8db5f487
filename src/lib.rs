//! # immunogate: logic-gate selectivity analysis for CAR-T design
//!
//! immunogate evaluates dual-antigen logic-gated CAR-T strategies against
//! pancreatic ductal adenocarcinoma (PDAC) biomarker profiles. For a chosen
//! pair of tumor antigens it simulates expression in tumor and healthy
//! contexts, builds boolean and fuzzy truth tables for the five canonical
//! gates (AND, OR, NOT, XOR, XNOR), scores each gate's tumor-vs-healthy
//! selectivity and recommends the safest gate with a domain rationale.
//!
//! ## Features
//!
//! - Builtin PDAC serum biomarker catalog, or a user catalog from CSV/TSV
//!   (gzipped supported)
//! - Seedable expression simulation for reproducible runs
//! - Per-gate truth tables with boolean and probabilistic outputs
//! - Selectivity scoring and best-gate recommendation
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use immunogate::catalog::builtin_catalog;
//! use immunogate::engine::{AntigenSelection, run_analysis};
//! use immunogate::model::AnalysisProfile;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let catalog = builtin_catalog();
//! let selection = AntigenSelection::new(
//!     vec!["MUC1".to_string(), "CEA".to_string()],
//!     Vec::new(),
//! );
//! let profile = AnalysisProfile::default_v1();
//! let mut rng = ChaCha8Rng::seed_from_u64(7);
//!
//! let report = run_analysis(&catalog, &selection, &profile, &mut rng).unwrap();
//! println!("best gate: {}", report.recommendation.gate);
//! ```

pub mod catalog;
pub mod cli;
pub mod engine;
pub mod model;
pub mod report;

/// Re-export commonly used types
pub use catalog::{Biomarker, BiomarkerCatalog, Indication, builtin_catalog, load_catalog};
pub use engine::{AnalysisReport, AntigenSelection, EngineError, run_analysis};
pub use model::{AnalysisProfile, GateType, Recommendation, TruthTable};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!(
        "{} v{} - logic-gate selectivity analysis for CAR-T strategy design",
        NAME, VERSION
    )
}
