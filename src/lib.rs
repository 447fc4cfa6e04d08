//! Barycentric coordinates of a point relative to a 2D triangle.
//!
//! Instead of solving the 2x2 system `u·AB + v·AC = AP` directly, each of
//! its two rows is read as an orthogonality condition on `(u, v, 1)`, and
//! the vector satisfying both is found with a single 3D cross product.
//!
//! Zero-area triangles are never turned into NaN: they come back as
//! [`DegenerateTriangleError`].
//!
//! ```
//! use barysolve::compute_barycentric;
//! use glam::dvec2;
//!
//! let coords = compute_barycentric(
//!     dvec2(0.0, 0.0),
//!     dvec2(4.0, 0.0),
//!     dvec2(0.0, 4.0),
//!     dvec2(1.0, 1.0),
//! )?;
//! assert_eq!((coords.u(), coords.v(), coords.w()), (0.25, 0.25, 0.5));
//! # Ok::<(), barysolve::DegenerateTriangleError>(())
//! ```

mod batch;
pub mod defaults;
pub mod errors;
pub mod log;
mod solver;
mod tolerance;
mod triangle;
mod types;

pub use errors::{DegenerateTriangleError, NumericError, ToleranceError};
pub use solver::BarycentricSolver;
pub use tolerance::Tolerance;
pub use triangle::{PreparedTriangle, Triangle};
pub use types::{BarycentricCoordinates, Containment, Point2D, Vector2D};

/// Compute `(u, v, w)` such that `p = w·a + u·b + v·c`, with the default
/// [`Tolerance`].
///
/// Returns [`DegenerateTriangleError`] if `a`, `b`, `c` are colinear or
/// coincident. A non-finite `p` is not an error; see
/// [`BarycentricSolver::solve`].
pub fn compute_barycentric(
    a: Point2D,
    b: Point2D,
    c: Point2D,
    p: Point2D,
) -> Result<BarycentricCoordinates, DegenerateTriangleError> {
    BarycentricSolver::new().solve(a, b, c, p)
}

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct ReadmeDoctests;
