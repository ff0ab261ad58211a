//! Weiszfeld iteration for the geometric median
//!
//! Starts from the (weighted) centroid and repeatedly moves to the
//! distance-reweighted mean of the inputs until the step length drops to the
//! tolerance or the iteration cap is reached.
//!
//! Plain Weiszfeld divides by zero when the estimate lands exactly on an input
//! point. Such points are left out of the weighted sum, and the step is
//! corrected with the Vardi–Zhang rule: with η the total weight sitting on the
//! estimate and `R = |Σ w·(p − y)/d|` over the remaining points, the estimate
//! is optimal when `R <= η`, otherwise the next estimate is
//! `(1 − η/R)·T(y) + (η/R)·y`. With η = 0 this is the ordinary step.
//!
//! The iteration runs in a local frame where coordinates and weights are
//! divided by powers of two, so sums and squared distances cannot overflow
//! and results map back exactly.

use super::config::WeiszfeldConfig;
use super::error::{SolverError, SolverResult};
use super::solution::{IterationRecord, MedianSolution, MedianStatus};
use crate::geometry::{Point2D, WeightedPoint};
use tracing::{debug, warn};

/// Geometric median solver
#[derive(Debug, Clone, Default)]
pub struct GeometricMedianSolver {
    config: WeiszfeldConfig,
}

/// Outcome of a single reweighting step
#[derive(Debug, Clone, Copy, PartialEq)]
enum Step {
    /// The current estimate minimizes the objective
    Optimal,
    /// Move to this estimate
    Move(Point2D),
    /// The weighted sum is not finite
    Breakdown,
}

/// Power-of-two scales applied to coordinates and weights
#[derive(Debug, Clone, Copy, PartialEq)]
struct Frame {
    scale: f64,
    weight_scale: f64,
}

impl Frame {
    fn fit(points: &[WeightedPoint]) -> Self {
        let max_coord = points
            .iter()
            .map(|wp| wp.point.x.abs().max(wp.point.y.abs()))
            .fold(0.0, f64::max);
        let max_weight = points.iter().map(|wp| wp.weight).fold(0.0, f64::max);

        Self {
            scale: power_of_two_near(max_coord),
            weight_scale: power_of_two_near(max_weight),
        }
    }

    fn to_local(&self, wp: &WeightedPoint) -> WeightedPoint {
        WeightedPoint::new(
            Point2D::new(wp.point.x / self.scale, wp.point.y / self.scale),
            wp.weight / self.weight_scale,
        )
    }

    fn to_world(&self, p: Point2D) -> Point2D {
        Point2D::new(p.x * self.scale, p.y * self.scale)
    }
}

/// Largest power of two not above `v` (1.0 for zero)
fn power_of_two_near(v: f64) -> f64 {
    if v == 0.0 || !v.is_finite() {
        return 1.0;
    }
    let k = v.log2().floor().clamp(-1022.0, 1023.0) as i32;
    2f64.powi(k)
}

impl GeometricMedianSolver {
    /// Create a new solver
    pub fn new(config: WeiszfeldConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WeiszfeldConfig {
        &self.config
    }

    /// Geometric median of an unweighted point set (at least two points)
    pub fn solve(&self, points: &[Point2D]) -> SolverResult<MedianSolution> {
        super::check_points(points)?;
        self.config.validate()?;

        let weighted: Vec<WeightedPoint> = points.iter().copied().map(WeightedPoint::unit).collect();
        self.iterate(&weighted)
    }

    /// Geometric median where each point pulls in proportion to its weight
    ///
    /// A single entry is enough when its weight stands for two or more points.
    pub fn solve_weighted(&self, points: &[WeightedPoint]) -> SolverResult<MedianSolution> {
        if points.is_empty() {
            return Err(SolverError::InsufficientPoints { found: 0 });
        }
        for (index, wp) in points.iter().enumerate() {
            if !wp.point.is_finite() {
                return Err(SolverError::NonFiniteCoordinate { index });
            }
            if !wp.weight.is_finite() || wp.weight <= 0.0 {
                return Err(SolverError::InvalidWeight { index });
            }
        }
        let total_weight: f64 = points.iter().map(|wp| wp.weight).sum();
        if points.len() < 2 && total_weight < 2.0 {
            return Err(SolverError::InsufficientPoints { found: points.len() });
        }
        self.config.validate()?;

        self.iterate(points)
    }

    fn iterate(&self, points: &[WeightedPoint]) -> SolverResult<MedianSolution> {
        let frame = Frame::fit(points);
        let local: Vec<WeightedPoint> = points.iter().map(|wp| frame.to_local(wp)).collect();
        let tolerance = self.config.tolerance / frame.scale;

        let mut estimate = weighted_centroid(&local);
        let mut trace = Vec::new();
        let mut delta = 0.0;

        for iteration in 1..=self.config.max_iterations {
            let next = match weiszfeld_step(&local, estimate) {
                Step::Breakdown => {
                    warn!(iteration, "weiszfeld step produced a non-finite estimate");
                    return Err(SolverError::NumericalBreakdown { iteration });
                }
                Step::Optimal => {
                    debug!(
                        iterations = iteration - 1,
                        x = estimate.x,
                        y = estimate.y,
                        "estimate coincides with an optimal input point"
                    );
                    return Ok(MedianSolution {
                        point: frame.to_world(estimate),
                        iterations: iteration - 1,
                        final_delta: delta * frame.scale,
                        status: MedianStatus::Coincident,
                        trace,
                    });
                }
                Step::Move(next) => next,
            };

            delta = estimate.distance(&next);
            estimate = next;

            if self.config.record_trace {
                let world = frame.to_world(estimate);
                trace.push(IterationRecord {
                    iteration,
                    estimate: world,
                    delta: delta * frame.scale,
                    objective: weighted_objective(points, world),
                });
            }

            if delta <= tolerance {
                debug!(iterations = iteration, delta = delta * frame.scale, "weiszfeld converged");
                return Ok(MedianSolution {
                    point: frame.to_world(estimate),
                    iterations: iteration,
                    final_delta: delta * frame.scale,
                    status: MedianStatus::Converged,
                    trace,
                });
            }
        }

        warn!(
            max_iterations = self.config.max_iterations,
            delta = delta * frame.scale,
            tolerance = self.config.tolerance,
            "weiszfeld hit the iteration cap before converging"
        );

        Ok(MedianSolution {
            point: frame.to_world(estimate),
            iterations: self.config.max_iterations,
            final_delta: delta * frame.scale,
            status: MedianStatus::IterationLimit,
            trace,
        })
    }
}

/// Weighted sum of distances from `from` to every point
pub fn weighted_objective(points: &[WeightedPoint], from: Point2D) -> f64 {
    points.iter().map(|wp| wp.weight * wp.point.distance(&from)).sum()
}

fn weighted_centroid(points: &[WeightedPoint]) -> Point2D {
    let (sx, sy, sw) = points.iter().fold((0.0, 0.0, 0.0), |(sx, sy, sw), wp| {
        (sx + wp.weight * wp.point.x, sy + wp.weight * wp.point.y, sw + wp.weight)
    });
    Point2D::new(sx / sw, sy / sw)
}

fn weiszfeld_step(points: &[WeightedPoint], estimate: Point2D) -> Step {
    let (mut num_x, mut num_y, mut den) = (0.0, 0.0, 0.0);
    let mut coincident = 0.0;

    for wp in points {
        let d = estimate.distance(&wp.point);
        if d == 0.0 {
            coincident += wp.weight;
            continue;
        }
        let w = wp.weight / d;
        num_x += w * wp.point.x;
        num_y += w * wp.point.y;
        den += w;
    }

    if den == 0.0 {
        // Only an estimate sitting on every point leaves nothing to weigh.
        return if coincident > 0.0 { Step::Optimal } else { Step::Breakdown };
    }

    let target = Point2D::new(num_x / den, num_y / den);
    if !target.is_finite() {
        return Step::Breakdown;
    }
    if coincident == 0.0 {
        return Step::Move(target);
    }

    // |Σ w·(p − y)/d| = den·|T(y) − y|
    let pull = den * target.distance(&estimate);
    if pull <= coincident {
        return Step::Optimal;
    }

    let keep = coincident / pull;
    Step::Move(Point2D::new(
        (1.0 - keep) * target.x + keep * estimate.x,
        (1.0 - keep) * target.y + keep * estimate.y,
    ))
}
