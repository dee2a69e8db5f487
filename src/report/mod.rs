use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::engine::AnalysisReport;

pub mod json;
pub mod text;

pub use json::render_analysis_json;
pub use text::{render_catalog_text, render_report_text};

pub fn format_f64_6(v: f64) -> String {
    format!("{:.6}", v)
}

/// Writes the full output set for one analysis run into `out_dir`:
/// `analysis.json` (machine-readable), `truth_tables.tsv` (one row per
/// table row) and `report.txt` (human-readable summary).
pub fn write_reports(
    report: &AnalysisReport,
    seed: Option<u64>,
    out_dir: &Path,
) -> std::io::Result<()> {
    fs::create_dir_all(out_dir)?;

    let json_path = out_dir.join("analysis.json");
    let json = render_analysis_json(report, seed).map_err(std::io::Error::other)?;
    write_text(&json_path, &json)?;

    let tsv_path = out_dir.join("truth_tables.tsv");
    write_text(&tsv_path, &render_truth_tables_tsv(report))?;

    let report_path = out_dir.join("report.txt");
    write_text(&report_path, &render_report_text(report))?;

    Ok(())
}

pub fn render_truth_tables_tsv(report: &AnalysisReport) -> String {
    let mut out = String::new();
    out.push_str("gate\tantigens\tinputs\tboolean_output\tprobabilistic_output\tcell_type\n");
    for table in report.truth_tables.values() {
        let antigens = table.antigens.join(",");
        for row in &table.rows {
            let inputs = row
                .inputs
                .iter()
                .map(|bit| bit.to_string())
                .collect::<Vec<_>>()
                .join(",");
            out.push_str(&format!(
                "{}\t{}\t{}\t{}\t{}\t{}\n",
                table.gate,
                antigens,
                inputs,
                row.boolean_output,
                format_f64_6(row.probabilistic_output),
                row.cell_type.as_str()
            ));
        }
    }
    out
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
