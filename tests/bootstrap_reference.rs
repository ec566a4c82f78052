//! End-to-end bootstrap runs against the 10x10 reference triangle

use approx::assert_relative_eq;
use reserve_bootstrap::chain_ladder::{age_to_age_factors, fitted_triangle, pearson_residuals};
use reserve_bootstrap::{
    load_triangle, run_bootstrap, BootstrapConfig, BootstrapSimulator, ChainLadder, Triangle,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn reference_triangle() -> Triangle {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/reference_triangle.csv");
    load_triangle(path).expect("Failed to load reference triangle")
}

#[test]
fn test_reference_triangle_loads() {
    let tri = reference_triangle();
    assert_eq!(tri.size(), 10);
    assert_eq!(tri.value(0, 0), 1592.0);
    assert_eq!(tri.value(9, 9), 5502.0);
}

#[test]
fn test_deterministic_model_pieces() {
    let tri = reference_triangle();
    let factors = age_to_age_factors(&tri);
    assert_eq!(factors.len(), 9);
    assert!(factors.iter().all(|&f| f > 0.0));

    let fitted = fitted_triangle(&tri, &factors).unwrap();
    assert_eq!(fitted.column(0), tri.column(0));
    for i in 0..10 {
        for j in 0..9 {
            assert_eq!(fitted.value(i, j + 1), fitted.value(i, j) * factors[j]);
        }
    }

    let residuals = pearson_residuals(&tri, &fitted).unwrap();
    assert_eq!(residuals.len(), 45);
    assert!(residuals.iter().all(|r| r.is_finite()));
}

#[test]
fn test_reference_distribution() {
    init_logging();

    let tri = reference_triangle();
    let report = run_bootstrap(&tri, &BootstrapConfig::default()).unwrap();

    assert_eq!(report.simulation.shape(), (1000, 10));

    let summary = &report.ibnr_summary;
    assert_eq!(summary.count, 1000);
    assert!(summary.mean.is_finite());
    assert!(summary.std_dev > 0.0);
    assert!(summary.p5 < summary.p50);
    assert!(summary.p50 < summary.p95);
    assert!(summary.p25 <= summary.p50 && summary.p50 <= summary.p75);
    assert_relative_eq!(summary.cv, summary.std_dev / summary.mean);

    // The simulated mean sits in the neighbourhood of the point estimate
    let point = report.deterministic.total_ibnr();
    assert!(point > 0.0);
    assert!(
        (summary.mean - point).abs() < 0.3 * point,
        "mean {} too far from deterministic {}",
        summary.mean,
        point
    );
}

#[test]
fn test_runs_are_reproducible() {
    let tri = reference_triangle();
    let config = BootstrapConfig::default().with_trials(200);

    let first = run_bootstrap(&tri, &config).unwrap();
    let second = run_bootstrap(&tri, &config).unwrap();
    assert_eq!(first.simulation.ultimates, second.simulation.ultimates);
    assert_eq!(first.simulation.ibnr, second.simulation.ibnr);
    assert_eq!(first.ibnr_summary, second.ibnr_summary);

    let other_seed = run_bootstrap(&tri, &config.clone().with_seed(7)).unwrap();
    assert_ne!(first.simulation.ibnr, other_seed.simulation.ibnr);
}

#[test]
fn test_simulated_triangles_never_negative() {
    let tri = reference_triangle();
    let simulator = BootstrapSimulator::new(&tri, 42).unwrap();

    for k in 0..100 {
        let outcome = simulator.run_trial(k);
        assert_eq!(outcome.factors.len(), 9);
        for row in outcome.simulated.rows() {
            assert!(row.iter().all(|&v| v >= 0.0));
        }
    }
}

#[test]
fn test_single_cell_triangle() {
    let tri = Triangle::new(vec![vec![1234.5]]).unwrap();

    let fit = ChainLadder::fit(&tri).unwrap();
    assert!(fit.factors.is_empty());

    let simulator = BootstrapSimulator::new(&tri, 42).unwrap();
    assert!(simulator.residuals().is_empty());

    let report = run_bootstrap(&tri, &BootstrapConfig::quick().with_trials(10)).unwrap();
    assert_eq!(report.simulation.shape(), (10, 1));
    for (ult, ibnr) in report.simulation.ultimates.iter().zip(&report.simulation.ibnr) {
        assert_eq!(ult, &vec![1234.5]);
        assert_eq!(ibnr, &vec![0.0]);
    }
    assert_eq!(report.ibnr_summary.std_dev, 0.0);
}

#[test]
fn test_invalid_inputs_fail_fast() {
    let tri = reference_triangle();
    assert!(run_bootstrap(&tri, &BootstrapConfig::default().with_trials(0)).is_err());

    let factors = age_to_age_factors(&tri);
    assert!(fitted_triangle(&tri, &factors[..8]).is_err());

    assert!(Triangle::new(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).is_err());
}

#[test]
fn test_report_serializes() {
    let tri = reference_triangle();
    let report = run_bootstrap(&tri, &BootstrapConfig::quick().with_trials(20)).unwrap();

    let json = serde_json::to_value(&report.ibnr_summary).unwrap();
    for key in ["mean", "std_dev", "cv", "p5", "p25", "p50", "p75", "p95"] {
        assert!(json.get(key).is_some(), "missing {}", key);
    }
}
