//! Barycentric coordinates via the lifted cross product.
//!
//! `P = (1-u-v)·A + u·B + v·C` rearranges to `u·AB + v·AC + PA = 0`. Read
//! per component, `(u, v, 1)` is orthogonal to both `(ABx, ACx, PAx)` and
//! `(ABy, ACy, PAy)`, so it is proportional to their cross product
//! `(r, s, t)`. Dividing by `t` restores the trailing 1: `u = r/t`,
//! `v = s/t`. `t` is twice the signed area of the triangle and is the only
//! value that is ever divided by.

use glam::{DVec3, dvec3};

use crate::errors::DegenerateTriangleError;
use crate::tolerance::Tolerance;
use crate::types::{BarycentricCoordinates, Containment, Point2D, Vector2D};

/// Cross the two lifted component equations: returns `(r, s, t)`.
///
/// `t = ABx·ACy - ABy·ACx` does not depend on `pa`.
#[inline]
pub(crate) fn lifted_cross(ab: Vector2D, ac: Vector2D, pa: Vector2D) -> DVec3 {
    dvec3(ab.x, ac.x, pa.x).cross(dvec3(ab.y, ac.y, pa.y))
}

/// Edge vectors multiplied by a power of two so that their largest finite
/// component is of order one.
///
/// Every product in the lifted cross and the normalizer bound is then of
/// order one, so neither overflows nor underflows for any finite triangle.
/// Power-of-two scaling is exact: `r/t`, `s/t` and the degeneracy verdict
/// are the same as on the raw edges whenever those don't overflow.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct ScaledEdges {
    pub(crate) ab: Vector2D,
    pub(crate) ac: Vector2D,
    scale: f64,
}

impl ScaledEdges {
    pub(crate) fn new(ab: Vector2D, ac: Vector2D) -> Self {
        let largest = [ab.x, ab.y, ac.x, ac.y]
            .into_iter()
            .filter(|c| c.is_finite())
            .map(f64::abs)
            .fold(0.0, f64::max);
        let scale = if largest > 0.0 {
            pow2(-exponent(largest).clamp(-1022, 1022))
        } else {
            1.0
        };
        Self {
            ab: ab * scale,
            ac: ac * scale,
            scale,
        }
    }

    /// `pa` in the same units as the scaled edges.
    #[inline]
    pub(crate) fn offset(&self, pa: Vector2D) -> Vector2D {
        pa * self.scale
    }

    /// Map an area-like quantity (`t` or its bound) back to input units.
    #[inline]
    pub(crate) fn unscale_area(&self, value: f64) -> f64 {
        value / self.scale / self.scale
    }
}

/// Unbiased binary exponent of `x`; subnormals report -1023.
fn exponent(x: f64) -> i32 {
    ((x.to_bits() >> 52) & 0x7ff) as i32 - 1023
}

/// `2^exp` for `exp` in the normal range `[-1022, 1023]`.
fn pow2(exp: i32) -> f64 {
    f64::from_bits(((exp + 1023) as u64) << 52)
}

/// Accept `t` only if `|t|` exceeds the tolerance's bound for `edges`.
/// NaN fails the comparison and is rejected along with near-zero values.
///
/// A rejection reports the normalizer and bound in input units.
pub(crate) fn checked_normalizer(
    t: f64,
    edges: &ScaledEdges,
    tolerance: &Tolerance,
) -> Result<f64, DegenerateTriangleError> {
    let bound = tolerance.normalizer_bound(edges.ab, edges.ac);
    if t.abs() > bound {
        return Ok(t);
    }
    let err = DegenerateTriangleError {
        normalizer: edges.unscale_area(t),
        bound: edges.unscale_area(bound),
    };
    crate::log::debug!(
        normalizer = err.normalizer,
        bound = err.bound,
        "rejecting degenerate triangle"
    );
    Err(err)
}

/// Computes barycentric coordinates of query points relative to 2D
/// triangles under a fixed [`Tolerance`].
///
/// The solver holds no state besides its tolerance; it is `Copy` and can be
/// shared freely between threads.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BarycentricSolver {
    tolerance: Tolerance,
}

impl BarycentricSolver {
    /// Solver with the crate's default tolerances
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tolerance(tolerance: Tolerance) -> Self {
        Self { tolerance }
    }

    pub fn tolerance(&self) -> Tolerance {
        self.tolerance
    }

    /// Compute `(u, v, w)` such that `p = w·a + u·b + v·c`.
    ///
    /// Fails with [`DegenerateTriangleError`] when `a`, `b`, `c` are
    /// colinear or coincident within the solver's tolerance; no division
    /// happens in that case.
    ///
    /// Only the triangle can make this fail. A NaN or infinite `p` on a
    /// valid triangle gives non-finite coordinates, which
    /// [`classify`](Self::classify) reports as [`Containment::Outside`] and
    /// [`contains`](Self::contains) as `false`.
    pub fn solve(
        &self,
        a: Point2D,
        b: Point2D,
        c: Point2D,
        p: Point2D,
    ) -> Result<BarycentricCoordinates, DegenerateTriangleError> {
        let edges = ScaledEdges::new(b - a, c - a);
        let rst = lifted_cross(edges.ab, edges.ac, edges.offset(a - p));
        let t = checked_normalizer(rst.z, &edges, &self.tolerance)?;

        let coords = BarycentricCoordinates::from_uv(rst.x / t, rst.y / t);
        crate::log::trace!(
            u = coords.u(),
            v = coords.v(),
            w = coords.w(),
            "barycentric coordinates"
        );
        Ok(coords)
    }

    /// Classify `p` against the closed triangle `(a, b, c)` using the
    /// boundary epsilon.
    pub fn classify(
        &self,
        a: Point2D,
        b: Point2D,
        c: Point2D,
        p: Point2D,
    ) -> Result<Containment, DegenerateTriangleError> {
        let coords = self.solve(a, b, c, p)?;
        Ok(coords.containment(self.tolerance.boundary()))
    }

    /// True if `p` lies inside the triangle or on its boundary.
    pub fn contains(
        &self,
        a: Point2D,
        b: Point2D,
        c: Point2D,
        p: Point2D,
    ) -> Result<bool, DegenerateTriangleError> {
        let coords = self.solve(a, b, c, p)?;
        Ok(coords.is_inside(self.tolerance.boundary()))
    }
}
