//! End-to-end loader integration tests
//!
//! Tests point-set loading → solving → result inspection

use geomedian_core::loader::files;
use geomedian_core::*;

/// Helper to load a point set from fixtures
fn load_problem(name: &str) -> PointSetProblem {
    let path = format!("tests/fixtures/point_sets/{}.json", name);
    files::load_problem(&path).expect("Failed to load point set")
}

#[test]
fn test_p01_pair_is_midpoint() {
    let problem = load_problem("p01_pair");
    let center = problem.solve().unwrap();

    let expected = Point2D::new((39.7392 + 39.0997) / 2.0, (-104.9903 + -94.5786) / 2.0);
    assert!(matches!(center, Center::Midpoint { .. }));
    assert!(center.point().distance(&expected) < 1e-12);
}

#[test]
fn test_p02_triangle_median() {
    let problem = load_problem("p02_triangle");
    let center = problem.solve().unwrap();

    assert!(center.is_converged());
    assert!(center.point().distance(&Point2D::new(5.0, 5.0 / 3f64.sqrt())) < 1e-4);
}

#[test]
fn test_p03_coincident_points() {
    let problem = load_problem("p03_coincident");

    match problem.solve().unwrap() {
        Center::Median(solution) => {
            assert_eq!(solution.point, Point2D::new(1.0, 1.0));
            assert_eq!(solution.status, MedianStatus::Coincident);
        }
        other => panic!("expected a median, got {:?}", other),
    }
}

#[test]
fn test_p04_config_override_and_trace() {
    let problem = load_problem("p04_cities");
    let config = problem.solver_config();

    assert_eq!(config.tolerance, 1e-9);
    assert!(config.record_trace);

    let center = problem.solve().unwrap();
    let Center::Median(solution) = center else {
        panic!("five points should give a median");
    };

    assert!(solution.is_converged());
    assert_eq!(solution.trace.len(), solution.iterations);

    // No input city does better than the median.
    let total = geometry::ops::total_distance(&problem.points, solution.point);
    for p in &problem.points {
        assert!(total <= geometry::ops::total_distance(&problem.points, *p) + 1e-9);
    }
}

#[test]
fn test_p05_iteration_cap_surfaces() {
    let problem = load_problem("p05_capped");
    let Center::Median(solution) = problem.solve().unwrap() else {
        panic!("three points should give a median");
    };

    assert_eq!(solution.status, MedianStatus::IterationLimit);
    assert_eq!(solution.iterations, 2);
    assert!(matches!(
        solution.into_converged(),
        Err(SolverError::NonConvergence { iterations: 2, .. })
    ));
}

#[test]
fn test_load_directory_sorted() {
    let problems = files::load_problems("tests/fixtures/point_sets").unwrap();
    let ids: Vec<_> = problems.iter().map(|p| p.id.as_str()).collect();

    assert_eq!(
        ids,
        vec!["p01_pair", "p02_triangle", "p03_coincident", "p04_cities", "p05_capped"]
    );
}

#[test]
fn test_load_directory_skips_broken_files() {
    let problems = files::load_problems("tests/fixtures/broken").unwrap();

    assert_eq!(problems.len(), 1);
    assert_eq!(problems[0].id, "valid");
    assert_eq!(problems[0].points[1], Point2D::new(2.0, 2.0));
}

#[test]
fn test_parse_error_is_reported() {
    let err = files::load_problem("tests/fixtures/broken/not_json.json").unwrap_err();
    assert!(matches!(err, LoadError::ParseError(_)));
}
