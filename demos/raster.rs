//! Rasterize a triangle to the terminal by classifying pixel centers.
//!
//! Run with: RUST_LOG=debug cargo run --example raster --features tracing

use barysolve::{BarycentricSolver, Containment, Tolerance, Triangle};
use glam::dvec2;
use tracing_subscriber::EnvFilter;

const WIDTH: usize = 48;
const HEIGHT: usize = 24;

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let triangle = Triangle::from([[2.0, 1.0], [45.0, 6.0], [12.0, 22.0]]);
    let tolerance = Tolerance::default().with_boundary(0.02)?;
    let solver = BarycentricSolver::with_tolerance(tolerance);

    let pixels: Vec<_> = (0..HEIGHT)
        .flat_map(|y| (0..WIDTH).map(move |x| dvec2(x as f64 + 0.5, y as f64 + 0.5)))
        .collect();
    let classes = solver.classify_many(&triangle, &pixels)?;

    for row in classes.chunks(WIDTH).rev() {
        let line: String = row
            .iter()
            .map(|c| match c {
                Containment::Inside => '#',
                Containment::Boundary => '+',
                Containment::Outside => '.',
            })
            .collect();
        println!("{line}");
    }

    // Per-vertex attribute blending, as a shader would do per fragment
    let prepared = triangle.prepare(tolerance)?;
    let depth = prepared
        .barycentric(triangle.centroid())
        .interpolate(0.0, 0.5, 1.0);
    tracing::info!(depth, "depth at centroid");

    // A colinear triangle is refused, not turned into NaN
    let flat = Triangle::from([[0.0, 0.0], [10.0, 5.0], [20.0, 10.0]]);
    if let Err(err) = flat.barycentric(dvec2(1.0, 1.0)) {
        println!("{:?}", miette::Report::new(err));
    }

    Ok(())
}
