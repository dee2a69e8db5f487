use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Logic-gate selectivity analysis for dual-antigen CAR-T design in PDAC
#[derive(Parser, Debug)]
#[command(name = "immunogate")]
#[command(about = "Logic-gate selectivity analysis for dual-antigen CAR-T strategy design")]
#[command(version)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the selectivity analysis for a set of antigens
    Run(RunArgs),

    /// Print the biomarker catalog with its statistics
    Catalog(CatalogArgs),
}

#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Tumor antigens driving the gate logic (comma separated; gates use the first two)
    #[arg(short, long, required = true, value_delimiter = ',')]
    pub tumor: Vec<String>,

    /// Healthy-context antigens simulated alongside (comma separated)
    #[arg(long, value_delimiter = ',')]
    pub healthy: Vec<String>,

    /// Biomarker catalog file (CSV/TSV, optionally gzipped); builtin PDAC catalog when omitted
    #[arg(short, long)]
    pub catalog: Option<PathBuf>,

    /// Output directory for analysis.json, truth_tables.tsv and report.txt
    #[arg(short, long, default_value = "./out")]
    pub out: PathBuf,

    /// Random seed for reproducible expression draws
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Parser, Debug)]
pub struct CatalogArgs {
    /// Biomarker catalog file (CSV/TSV, optionally gzipped); builtin PDAC catalog when omitted
    #[arg(short, long)]
    pub catalog: Option<PathBuf>,
}

/// Parse CLI arguments
pub fn parse_args() -> Cli {
    Cli::parse()
}

/// Setup logging based on verbosity
pub fn setup_logging(verbose: bool) {
    let filter = if verbose { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}

#[cfg(test)]
#[path = "../tests/src_inline/cli.rs"]
mod tests;
