//! Randomized properties of the Weiszfeld iteration
//!
//! Seeded so failures reproduce.

use geomedian_core::geometry::ops;
use geomedian_core::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_points(rng: &mut StdRng) -> Vec<Point2D> {
    let n = rng.gen_range(3..12);
    (0..n)
        .map(|_| Point2D::new(rng.gen_range(-90.0..90.0), rng.gen_range(-180.0..180.0)))
        .collect()
}

#[test]
fn test_objective_never_increases() {
    let mut rng = StdRng::seed_from_u64(0x6d65_6469);
    let config = WeiszfeldConfig::default().with_trace(true);

    for _ in 0..50 {
        let points = random_points(&mut rng);
        let solution = GeometricMedianSolver::new(config).solve(&points).unwrap();

        let start = ops::total_distance(&points, ops::centroid(&points).unwrap());
        let mut previous = start;
        for record in &solution.trace {
            assert!(
                record.objective <= previous * (1.0 + 1e-12),
                "objective rose at iteration {} for {:?}",
                record.iteration,
                points
            );
            previous = record.objective;
        }
    }
}

#[test]
fn test_converged_median_beats_inputs_and_centroid() {
    let mut rng = StdRng::seed_from_u64(42);
    let config = WeiszfeldConfig::default().with_max_iterations(10_000);

    let mut checked = 0;
    for _ in 0..50 {
        let points = random_points(&mut rng);
        let solution = GeometricMedianSolver::new(config).solve(&points).unwrap();
        if !solution.is_converged() {
            continue;
        }
        checked += 1;

        if solution.status == MedianStatus::Converged {
            assert!(solution.final_delta <= config.tolerance);
        }

        let total = ops::total_distance(&points, solution.point);
        let slack = 1e-6 * total.max(1.0);
        let centroid = ops::centroid(&points).unwrap();
        assert!(total <= ops::total_distance(&points, centroid) + slack);
        for p in &points {
            assert!(total <= ops::total_distance(&points, *p) + slack);
        }
    }

    assert!(checked >= 25, "only {} of 50 point sets converged", checked);
}

#[test]
fn test_duplicates_match_aggregated_weights() {
    let mut rng = StdRng::seed_from_u64(7);
    let config = WeiszfeldConfig::default();

    for _ in 0..20 {
        let mut points = random_points(&mut rng);
        let dup = points[0];
        points.push(dup);

        let plain = GeometricMedianSolver::new(config).solve(&points).unwrap();
        let weighted = weighted_geometric_median(&aggregate_duplicates(&points), &config).unwrap();

        let plain_total = ops::total_distance(&points, plain.point);
        let weighted_total = ops::total_distance(&points, weighted.point);
        assert!((plain_total - weighted_total).abs() <= 1e-6 * plain_total.max(1.0));
    }
}
