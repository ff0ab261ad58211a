//! geomedian CLI
//!
//! Computes the midpoint (two points) or geometric median (three or more) of
//! points read from a JSON file and/or `--point LAT,LNG` flags.

use clap::Parser;
use geomedian_core::loader::{files, text};
use geomedian_core::{
    midpoint_halved_sum, representative_point, Center, MarkerSet, Point2D, SolverError,
    WeiszfeldConfig,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, warn, Level};

#[derive(Parser)]
#[command(name = "geomedian-solve")]
#[command(about = "Find the midpoint or geometric median of map points")]
struct Args {
    /// Point-set file (JSON)
    problem: Option<PathBuf>,

    /// Extra point as LAT,LNG (repeatable)
    #[arg(short, long = "point", value_name = "LAT,LNG", allow_hyphen_values = true)]
    points: Vec<String>,

    /// Convergence tolerance, in coordinate units
    #[arg(short, long)]
    tolerance: Option<f64>,

    /// Iteration cap for the geometric median
    #[arg(short = 'n', long)]
    max_iterations: Option<usize>,

    /// Use the legacy midpoint (sum of coordinates divided by 2)
    #[arg(long)]
    legacy_midpoint: bool,

    /// Include the per-iteration trace in JSON output
    #[arg(long)]
    trace: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init();

    match run(&args) {
        Ok(Outcome::Converged) => ExitCode::SUCCESS,
        Ok(Outcome::BestEstimate) => ExitCode::from(2),
        Err(message) => {
            eprintln!("{}", message);
            ExitCode::FAILURE
        }
    }
}

/// Whether the printed point is final
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Converged,
    BestEstimate,
}

fn run(args: &Args) -> Result<Outcome, String> {
    let mut config = WeiszfeldConfig::default();
    let mut markers: MarkerSet<String> = MarkerSet::new();

    if let Some(path) = &args.problem {
        let problem = files::load_problem(path).map_err(|e| e.to_string())?;
        debug!(id = %problem.id, points = problem.points.len(), "loaded point set");
        config = problem.solver_config();
        for (i, p) in problem.points.iter().enumerate() {
            markers.add(*p, format!("{}#{}", problem.id, i));
        }
    }

    for arg in &args.points {
        match text::parse_point_arg(arg) {
            Ok(p) => {
                markers.add(p, arg.clone());
            }
            Err(e) => warn!(point = %arg, error = %e, "skipping point"),
        }
    }

    if let Some(tolerance) = args.tolerance {
        config = config.with_tolerance(tolerance);
    }
    if let Some(max_iterations) = args.max_iterations {
        config = config.with_max_iterations(max_iterations);
    }
    config = config.with_trace(config.record_trace || args.trace);

    let points = markers.points();
    let center = if args.legacy_midpoint {
        midpoint_halved_sum(&points).map(|point| Center::Midpoint { point })
    } else {
        representative_point(&points, &config)
    };

    let center = match center {
        Ok(center) => center,
        Err(SolverError::InsufficientPoints { .. }) => {
            return Err("Must have at least two points!".to_string());
        }
        Err(e) => return Err(e.to_string()),
    };

    print_center(&center, args.json)?;

    if center.is_converged() {
        Ok(Outcome::Converged)
    } else {
        warn!("result is the best estimate; the iteration did not converge");
        Ok(Outcome::BestEstimate)
    }
}

fn print_center(center: &Center, json: bool) -> Result<(), String> {
    if json {
        let out = serde_json::to_string_pretty(center).map_err(|e| e.to_string())?;
        println!("{}", out);
        return Ok(());
    }

    let Point2D { x, y } = center.point();
    println!("Result Point: Latitude {}, Longitude {}", x, y);

    if let Center::Median(solution) = center {
        println!(
            "Geometric median: {:?} after {} iterations (last step {:e})",
            solution.status, solution.iterations, solution.final_delta
        );
    }

    Ok(())
}
