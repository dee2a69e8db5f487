use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::catalog::builtin_catalog;
use crate::model::gate_order;

use super::*;

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_empty_tumor_selection_is_rejected() {
    let catalog = builtin_catalog();
    let profile = AnalysisProfile::default_v1();
    let selection = AntigenSelection::new(Vec::new(), names(&["MUC1"]));
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let err = run_analysis(&catalog, &selection, &profile, &mut rng).unwrap_err();
    assert!(matches!(err, EngineError::EmptyTumorSelection));
}

#[test]
fn test_unknown_antigen_rejects_whole_run() {
    let catalog = builtin_catalog();
    let profile = AnalysisProfile::default_v1();
    let mut rng = ChaCha8Rng::seed_from_u64(2);

    let selection = AntigenSelection::new(names(&["GHOST"]), Vec::new());
    let err = run_analysis(&catalog, &selection, &profile, &mut rng).unwrap_err();
    assert!(matches!(err, EngineError::UnknownBiomarker(name) if name == "GHOST"));

    let selection = AntigenSelection::new(names(&["MUC1"]), names(&["GHOST"]));
    let err = run_analysis(&catalog, &selection, &profile, &mut rng).unwrap_err();
    assert!(matches!(err, EngineError::UnknownBiomarker(name) if name == "GHOST"));
}

#[test]
fn test_report_shape_for_dual_antigen_run() {
    let catalog = builtin_catalog();
    let profile = AnalysisProfile::default_v1();
    let selection = AntigenSelection::new(names(&["MUC1", "CEA"]), Vec::new());
    let mut rng = ChaCha8Rng::seed_from_u64(3);

    let report = run_analysis(&catalog, &selection, &profile, &mut rng).unwrap();

    assert_eq!(report.gate_antigens, names(&["MUC1", "CEA"]));
    assert_eq!(report.expression.len(), 2);
    assert_eq!(report.thresholds.len(), 2);

    let gates: Vec<GateType> = report.truth_tables.keys().copied().collect();
    assert_eq!(gates, gate_order().to_vec());
    for table in report.truth_tables.values() {
        assert_eq!(table.rows.len(), 4);
    }

    assert_eq!(report.scores.len(), 5);
    let rec = &report.recommendation;
    assert_eq!(rec.score, report.scores[&rec.gate]);
    let max = report
        .scores
        .values()
        .fold(f64::NEG_INFINITY, |acc, &v| acc.max(v));
    assert_eq!(rec.score, max);
}

#[test]
fn test_extra_tumor_antigens_are_truncated_but_simulated() {
    let catalog = builtin_catalog();
    let profile = AnalysisProfile::default_v1();
    let selection = AntigenSelection::new(names(&["MUC1", "CEA", "MSLN"]), Vec::new());
    let mut rng = ChaCha8Rng::seed_from_u64(4);

    let report = run_analysis(&catalog, &selection, &profile, &mut rng).unwrap();
    assert_eq!(report.gate_antigens, names(&["MUC1", "CEA"]));
    assert!(report.expression.contains_key("MSLN"));
    for table in report.truth_tables.values() {
        assert_eq!(table.antigens, names(&["MUC1", "CEA"]));
    }
}

#[test]
fn test_healthy_antigens_are_simulated_but_never_gate() {
    let catalog = builtin_catalog();
    let profile = AnalysisProfile::default_v1();
    let selection = AntigenSelection::new(names(&["MUC1"]), names(&["SMAD4"]));
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    let report = run_analysis(&catalog, &selection, &profile, &mut rng).unwrap();
    assert_eq!(report.gate_antigens, names(&["MUC1"]));
    assert!(report.expression.contains_key("SMAD4"));
    for table in report.truth_tables.values() {
        assert_eq!(table.antigens, names(&["MUC1"]));
        assert_eq!(table.rows.len(), 2);
    }
}

#[test]
fn test_same_seed_reproduces_full_report() {
    let catalog = builtin_catalog();
    let profile = AnalysisProfile::default_v1();
    let selection = AntigenSelection::new(names(&["MUC1", "CEA"]), names(&["SMAD4"]));

    let mut rng_a = ChaCha8Rng::seed_from_u64(7);
    let mut rng_b = ChaCha8Rng::seed_from_u64(7);
    let a = run_analysis(&catalog, &selection, &profile, &mut rng_a).unwrap();
    let b = run_analysis(&catalog, &selection, &profile, &mut rng_b).unwrap();

    assert_eq!(a.scores, b.scores);
    for (name, record) in &a.expression {
        let other = b.expression.get(name).unwrap();
        assert_eq!(record.tumor_expression, other.tumor_expression);
        assert_eq!(record.healthy_expression, other.healthy_expression);
    }
    assert_eq!(a.recommendation.gate, b.recommendation.gate);

    let mut rng_c = ChaCha8Rng::seed_from_u64(8);
    let c = run_analysis(&catalog, &selection, &profile, &mut rng_c).unwrap();
    assert_ne!(a.scores, c.scores);
}

/// With two independently strong oncogenic markers the AND gate keeps every
/// healthy archetype row off, so it should dominate across random draws.
#[test]
fn test_and_gate_dominates_for_dual_oncogenic_pair() {
    let catalog = builtin_catalog();
    let profile = AnalysisProfile::default_v1();
    let selection = AntigenSelection::new(names(&["MUC1", "CEA"]), Vec::new());

    let runs = 100;
    let mut and_wins = 0;
    for seed in 0..runs {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let report = run_analysis(&catalog, &selection, &profile, &mut rng).unwrap();
        assert!(report.recommendation.score > 0.0);
        if report.recommendation.gate == GateType::And {
            and_wins += 1;
        }
    }
    assert!(
        and_wins * 10 >= runs * 9,
        "AND won only {and_wins} of {runs} runs"
    );
}
