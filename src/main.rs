use std::path::Path;
use std::process::exit;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use immunogate::catalog::{BiomarkerCatalog, builtin_catalog, load_catalog};
use immunogate::cli::{CatalogArgs, Commands, RunArgs, parse_args, setup_logging};
use immunogate::engine::{AntigenSelection, run_analysis};
use immunogate::model::AnalysisProfile;
use immunogate::report::{render_catalog_text, write_reports};

fn main() {
    let cli = parse_args();
    setup_logging(cli.verbose);

    let result = match cli.command {
        Commands::Run(args) => run_command(args),
        Commands::Catalog(args) => catalog_command(args),
    };

    if let Err(err) = result {
        eprintln!("{err}");
        exit(1);
    }
}

fn run_command(args: RunArgs) -> Result<(), String> {
    let catalog = resolve_catalog(args.catalog.as_deref())?;
    let selection = AntigenSelection::new(args.tumor, args.healthy);
    let profile = AnalysisProfile::default_v1();

    let mut rng = match args.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let report =
        run_analysis(&catalog, &selection, &profile, &mut rng).map_err(|e| e.to_string())?;
    write_reports(&report, args.seed, &args.out).map_err(|e| e.to_string())?;

    info!(
        "best gate {} (selectivity {:.3}), reports written to {}",
        report.recommendation.gate,
        report.recommendation.score,
        args.out.display()
    );
    Ok(())
}

fn catalog_command(args: CatalogArgs) -> Result<(), String> {
    let catalog = resolve_catalog(args.catalog.as_deref())?;
    print!("{}", render_catalog_text(&catalog));
    Ok(())
}

fn resolve_catalog(path: Option<&Path>) -> Result<BiomarkerCatalog, String> {
    match path {
        Some(path) => load_catalog(path).map_err(|e| e.to_string()),
        None => Ok(builtin_catalog()),
    }
}
