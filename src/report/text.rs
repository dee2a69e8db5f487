use crate::catalog::BiomarkerCatalog;
use crate::engine::{AnalysisReport, kill_masses};
use crate::report::format_f64_6;

pub fn render_report_text(report: &AnalysisReport) -> String {
    let mut out = String::new();

    out.push_str("Logic Gate Selectivity Report\n");
    out.push_str("=============================\n\n");

    out.push_str("1. Antigen selection\n");
    out.push_str(&format!(
        "Tumor antigens: {}\n",
        name_list(&report.selection.tumor)
    ));
    out.push_str(&format!(
        "Healthy antigens: {}\n",
        name_list(&report.selection.healthy)
    ));
    out.push_str(&format!(
        "Gate inputs: {}\n\n",
        name_list(&report.gate_antigens)
    ));

    out.push_str("2. Simulated expression\n");
    for (name, record) in &report.expression {
        let threshold = report.thresholds.get(name).copied().unwrap_or(0.0);
        out.push_str(&format!(
            "{}: tumor {}, healthy {}, fold change {}, threshold {}\n",
            name,
            format_f64_6(record.tumor_expression),
            format_f64_6(record.healthy_expression),
            format_f64_6(record.fold_change),
            format_f64_6(threshold)
        ));
    }
    out.push('\n');

    out.push_str("3. Truth tables\n");
    for table in report.truth_tables.values() {
        out.push_str(&format!(
            "{} ({})\n",
            table.gate,
            name_list(&table.antigens)
        ));
        for row in &table.rows {
            out.push_str(&format!(
                "  {}: bool {}, prob {}, {}\n",
                bit_pattern(&row.inputs),
                row.boolean_output,
                format_f64_6(row.probabilistic_output),
                row.cell_type.as_str()
            ));
        }
    }
    out.push('\n');

    out.push_str("4. Selectivity scores\n");
    for (gate, table) in &report.truth_tables {
        let (tumor_kill, healthy_kill) = kill_masses(table);
        let score = report.scores.get(gate).copied().unwrap_or(0.0);
        out.push_str(&format!(
            "{}: tumor kill {}, healthy kill {}, selectivity {}\n",
            gate,
            format_f64_6(tumor_kill),
            format_f64_6(healthy_kill),
            format_f64_6(score)
        ));
    }
    out.push('\n');

    out.push_str("5. Recommendation\n");
    out.push_str(&format!(
        "Best gate: {} (selectivity {})\n",
        report.recommendation.gate,
        format_f64_6(report.recommendation.score)
    ));
    out.push_str(&format!("{}\n", report.recommendation.explanation));
    out.push_str(&format!("Safety: {}\n", report.recommendation.safety_note));

    out
}

pub fn render_catalog_text(catalog: &BiomarkerCatalog) -> String {
    let mut out = String::new();

    out.push_str("Biomarker Catalog\n");
    out.push_str("=================\n\n");

    for (category, biomarkers) in catalog.categories_with_biomarkers() {
        out.push_str(&format!("{}\n", category));
        for b in biomarkers {
            out.push_str(&format!("  {} {}\n", b.name, b.indication.symbol()));
        }
        out.push('\n');
    }

    let stats = catalog.stats();
    out.push_str("Summary\n");
    out.push_str(&format!("Total biomarkers: {}\n", stats.total_biomarkers));
    out.push_str(&format!("Categories: {}\n", stats.categories.len()));
    out.push_str(&format!("Oncogenic (↑): {}\n", stats.oncogenic_count));
    out.push_str(&format!("Suppressor (↓): {}\n", stats.suppressor_count));

    out
}

fn name_list(names: &[String]) -> String {
    if names.is_empty() {
        "(none)".to_string()
    } else {
        names.join(", ")
    }
}

fn bit_pattern(inputs: &[u8]) -> String {
    if inputs.is_empty() {
        return "-".to_string();
    }
    inputs.iter().map(|bit| bit.to_string()).collect()
}
