//! Numeric policy: when is a triangle degenerate, and how much slack does a
//! point get on the triangle's boundary.

use crate::defaults;
use crate::errors::{NumericError, ToleranceError};
use crate::types::Vector2D;

/// Tolerances used by [`BarycentricSolver`](crate::BarycentricSolver) and
/// [`PreparedTriangle`](crate::PreparedTriangle).
///
/// Both values are finite and non-negative; constructing one any other way
/// than through [`Tolerance::try_new`] and the `with_*` helpers is not
/// possible.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerance {
    degenerate: f64,
    boundary: f64,
}

impl Tolerance {
    /// No slack at all: only exactly-zero normalizers are degenerate and the
    /// boundary is the exact zero set of u, v, w.
    pub const EXACT: Tolerance = Tolerance {
        degenerate: 0.0,
        boundary: 0.0,
    };

    /// Create a tolerance with validation (rejects NaN, infinite, negative)
    pub fn try_new(degenerate: f64, boundary: f64) -> Result<Self, ToleranceError> {
        Ok(Self {
            degenerate: check("degenerate", degenerate)?,
            boundary: check("boundary", boundary)?,
        })
    }

    /// Replace the relative degeneracy epsilon
    pub fn with_degenerate(self, degenerate: f64) -> Result<Self, ToleranceError> {
        Self::try_new(degenerate, self.boundary)
    }

    /// Replace the boundary epsilon
    pub fn with_boundary(self, boundary: f64) -> Result<Self, ToleranceError> {
        Self::try_new(self.degenerate, boundary)
    }

    /// Relative epsilon applied to `|ABx·ACy| + |ACx·ABy|`.
    #[inline]
    pub fn degenerate(&self) -> f64 {
        self.degenerate
    }

    /// Absolute epsilon applied to each barycentric coordinate.
    #[inline]
    pub fn boundary(&self) -> f64 {
        self.boundary
    }

    /// Threshold `|t|` must strictly exceed for the triangle with edge
    /// vectors `ab`, `ac` to count as non-degenerate.
    ///
    /// Scales with the square of the coordinates, like `t` itself, so the
    /// verdict does not change when the whole configuration is scaled.
    #[inline]
    pub(crate) fn normalizer_bound(&self, ab: Vector2D, ac: Vector2D) -> f64 {
        self.degenerate * ((ab.x * ac.y).abs() + (ac.x * ab.y).abs())
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            degenerate: defaults::DEGENERATE_EPSILON,
            boundary: defaults::BOUNDARY_EPSILON,
        }
    }
}

fn check(field: &'static str, value: f64) -> Result<f64, ToleranceError> {
    NumericError::check_non_negative(value).map_err(|reason| ToleranceError {
        field,
        value,
        reason,
    })
}
