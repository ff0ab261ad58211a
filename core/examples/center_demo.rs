//! Walkthrough of the solver API
//!
//! Run with: cargo run --example center_demo

use geomedian_core::*;

fn main() {
    println!("=== geomedian demo ===\n");

    // 1. Markers as a front end would place them
    println!("1. Placing markers:");
    let mut markers = MarkerSet::new();
    let denver = markers.add(Point2D::new(39.7392, -104.9903), "Denver");
    markers.add(Point2D::new(41.8781, -87.6298), "Chicago");
    println!("   {} markers placed", markers.len());

    let config = WeiszfeldConfig::default();
    match markers.compute(&config) {
        Ok(center) => println!("   Two points -> {:?}\n", center.point()),
        Err(e) => println!("   {}\n", e),
    }

    // 2. A third point switches to the geometric median
    println!("2. Geometric median:");
    markers.add(Point2D::new(29.7604, -95.3698), "Houston");
    if let Ok(Center::Median(solution)) = markers.compute(&config.with_trace(true)) {
        println!(
            "   Result Point: Latitude {}, Longitude {}",
            solution.point.lat(),
            solution.point.lng()
        );
        println!("   Status: {:?} after {} iterations", solution.status, solution.iterations);
        for record in solution.trace.iter().take(3) {
            println!(
                "   iter {:>2}: delta {:.3e}, total distance {:.6}",
                record.iteration, record.delta, record.objective
            );
        }
    }
    println!();

    // 3. Removing a marker
    println!("3. Removing Denver:");
    if let Some(marker) = markers.remove(denver) {
        println!("   Removed {} ({})", marker.handle, marker.id);
    }
    println!("   {} markers left\n", markers.len());

    // 4. Legacy midpoint quirk
    println!("4. Legacy midpoint on three points:");
    let points = [
        Point2D::new(0.0, 0.0),
        Point2D::new(2.0, 0.0),
        Point2D::new(4.0, 0.0),
    ];
    println!("   midpoint:            {:?}", midpoint(&points));
    println!("   midpoint_halved_sum: {:?}", midpoint_halved_sum(&points));
}
