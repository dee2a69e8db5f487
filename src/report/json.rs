use serde::Serialize;

use crate::engine::AnalysisReport;

#[derive(Debug, Serialize)]
struct JsonDocument<'a> {
    tool: &'static str,
    version: &'static str,
    seed: Option<u64>,
    analysis: &'a AnalysisReport,
}

/// Machine-readable analysis document. The seed is recorded when the run
/// was seeded so the exact output can be regenerated.
pub fn render_analysis_json(
    report: &AnalysisReport,
    seed: Option<u64>,
) -> serde_json::Result<String> {
    let doc = JsonDocument {
        tool: "immunogate",
        version: env!("CARGO_PKG_VERSION"),
        seed,
        analysis: report,
    };
    serde_json::to_string_pretty(&doc)
}
