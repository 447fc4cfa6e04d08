//! Triangles, and triangles prepared for evaluating many query points.

use glam::dvec2;

use crate::errors::DegenerateTriangleError;
use crate::solver::{BarycentricSolver, ScaledEdges, checked_normalizer, lifted_cross};
use crate::tolerance::Tolerance;
use crate::types::{BarycentricCoordinates, Containment, Point2D, Vector2D};

/// A triangle in the plane, vertices in caller-chosen order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub a: Point2D,
    pub b: Point2D,
    pub c: Point2D,
}

impl Triangle {
    pub fn new(a: Point2D, b: Point2D, c: Point2D) -> Self {
        Triangle { a, b, c }
    }

    pub fn vertices(&self) -> [Point2D; 3] {
        [self.a, self.b, self.c]
    }

    /// Signed area: positive for counter-clockwise `a, b, c`.
    pub fn signed_area(&self) -> f64 {
        0.5 * (self.b - self.a).perp_dot(self.c - self.a)
    }

    pub fn centroid(&self) -> Point2D {
        (self.a + self.b + self.c) / 3.0
    }

    /// Map barycentric coordinates back to a point: `w·a + u·b + v·c`.
    pub fn point_at(&self, coords: BarycentricCoordinates) -> Point2D {
        coords.interpolate(self.a, self.b, self.c)
    }

    /// Barycentric coordinates of `p` with the default tolerances.
    pub fn barycentric(&self, p: Point2D) -> Result<BarycentricCoordinates, DegenerateTriangleError> {
        BarycentricSolver::new().solve(self.a, self.b, self.c, p)
    }

    /// Check degeneracy once so that any number of points can be evaluated
    /// without a fallible call per point.
    pub fn prepare(&self, tolerance: Tolerance) -> Result<PreparedTriangle, DegenerateTriangleError> {
        PreparedTriangle::new(*self, tolerance)
    }
}

impl From<[Point2D; 3]> for Triangle {
    fn from([a, b, c]: [Point2D; 3]) -> Self {
        Triangle { a, b, c }
    }
}

impl From<[[f64; 2]; 3]> for Triangle {
    fn from([a, b, c]: [[f64; 2]; 3]) -> Self {
        Triangle {
            a: dvec2(a[0], a[1]),
            b: dvec2(b[0], b[1]),
            c: dvec2(c[0], c[1]),
        }
    }
}

/// A non-degenerate triangle with its edge vectors and normalizer cached.
///
/// Only obtainable through [`Triangle::prepare`] or
/// [`PreparedTriangle::new`], so holding one proves the normalizer passed
/// the degeneracy check. Evaluating a point gives bit-identical results to
/// [`BarycentricSolver::solve`] with the same tolerance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PreparedTriangle {
    triangle: Triangle,
    edges: ScaledEdges,
    /// In the units of `edges`
    normalizer: f64,
    tolerance: Tolerance,
}

impl PreparedTriangle {
    pub fn new(triangle: Triangle, tolerance: Tolerance) -> Result<Self, DegenerateTriangleError> {
        let edges = ScaledEdges::new(triangle.b - triangle.a, triangle.c - triangle.a);
        let t = lifted_cross(edges.ab, edges.ac, Vector2D::ZERO).z;
        let normalizer = checked_normalizer(t, &edges, &tolerance)?;

        Ok(Self {
            triangle,
            edges,
            normalizer,
            tolerance,
        })
    }

    pub fn triangle(&self) -> &Triangle {
        &self.triangle
    }

    pub fn tolerance(&self) -> Tolerance {
        self.tolerance
    }

    /// Twice the signed area, in input units.
    pub fn normalizer(&self) -> f64 {
        self.edges.unscale_area(self.normalizer)
    }

    pub fn barycentric(&self, p: Point2D) -> BarycentricCoordinates {
        let pa = self.edges.offset(self.triangle.a - p);
        let rst = lifted_cross(self.edges.ab, self.edges.ac, pa);
        BarycentricCoordinates::from_uv(rst.x / self.normalizer, rst.y / self.normalizer)
    }

    pub fn classify(&self, p: Point2D) -> Containment {
        self.barycentric(p).containment(self.tolerance.boundary())
    }

    /// Closed containment test
    pub fn contains(&self, p: Point2D) -> bool {
        self.barycentric(p).is_inside(self.tolerance.boundary())
    }
}
