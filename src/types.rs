//! Value types: points, displacements and barycentric coordinates.

use glam::DVec2;
use std::fmt;
use std::ops::{Add, Mul};

/// A position in the plane.
pub type Point2D = DVec2;

/// A displacement between two [`Point2D`]s (`B - A`, `A - P`, ...).
pub type Vector2D = DVec2;

/// Barycentric coordinates `(u, v, w)` of a point relative to a triangle
/// `(A, B, C)`, so that `P = w·A + u·B + v·C`.
///
/// `w` is always derived as `1 - u - v`, so the coordinates sum to one by
/// construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarycentricCoordinates {
    u: f64,
    v: f64,
    w: f64,
}

impl BarycentricCoordinates {
    /// Build coordinates from the weights of `B` and `C`; the weight of `A`
    /// is `1 - u - v`.
    #[inline]
    pub fn from_uv(u: f64, v: f64) -> Self {
        Self { u, v, w: 1.0 - u - v }
    }

    /// Weight of vertex `B`
    #[inline]
    pub fn u(&self) -> f64 {
        self.u
    }

    /// Weight of vertex `C`
    #[inline]
    pub fn v(&self) -> f64 {
        self.v
    }

    /// Weight of vertex `A`
    #[inline]
    pub fn w(&self) -> f64 {
        self.w
    }

    /// Weights in vertex order: `[w, u, v]` for `[A, B, C]`.
    #[inline]
    pub fn weights(&self) -> [f64; 3] {
        [self.w, self.u, self.v]
    }

    /// Blend per-vertex attributes: `w·a + u·b + v·c`.
    ///
    /// With the vertices themselves as attributes this reconstructs the
    /// query point.
    #[inline]
    pub fn interpolate<T>(&self, a: T, b: T, c: T) -> T
    where
        T: Mul<f64, Output = T> + Add<Output = T>,
    {
        a * self.w + b * self.u + c * self.v
    }

    /// Smallest of the three weights. Negative means the point lies outside
    /// the triangle, on the far side of the corresponding edge.
    #[inline]
    pub fn min_weight(&self) -> f64 {
        self.u.min(self.v).min(self.w)
    }

    /// Classify the point against the closed triangle, allowing `eps` of
    /// slack on every weight. NaN weights classify as outside.
    pub fn containment(&self, eps: f64) -> Containment {
        if self.is_strictly_inside(eps) {
            Containment::Inside
        } else if self.is_inside(eps) {
            Containment::Boundary
        } else {
            Containment::Outside
        }
    }

    /// True if the point lies in the closed triangle: `u, v, w >= -eps`.
    #[inline]
    pub fn is_inside(&self, eps: f64) -> bool {
        self.u >= -eps && self.v >= -eps && self.w >= -eps
    }

    /// True if the point lies strictly inside: `u, v, w > eps`.
    #[inline]
    pub fn is_strictly_inside(&self, eps: f64) -> bool {
        self.u > eps && self.v > eps && self.w > eps
    }
}

impl fmt::Display for BarycentricCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(u: {}, v: {}, w: {})", self.u, self.v, self.w)
    }
}

/// Where a point lies relative to a triangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Containment {
    /// Every weight exceeds the boundary epsilon
    Inside,
    /// On an edge or vertex, within the boundary epsilon
    Boundary,
    /// At least one weight is below `-eps`
    Outside,
}

impl Containment {
    /// Inside or on the boundary
    #[inline]
    pub fn is_closed_inside(self) -> bool {
        !matches!(self, Containment::Outside)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    #[test]
    fn from_uv_sums_to_one() {
        let bc = BarycentricCoordinates::from_uv(0.25, 0.25);
        assert_eq!(bc.w(), 0.5);

        let bc = BarycentricCoordinates::from_uv(0.2, 0.3);
        let sum: f64 = bc.weights().iter().sum();
        assert!((sum - 1.0).abs() < 1e-15);
    }

    #[test]
    fn weights_are_in_vertex_order() {
        let bc = BarycentricCoordinates::from_uv(0.25, 0.5);
        assert_eq!(bc.weights(), [0.25, 0.25, 0.5]);
    }

    #[test]
    fn interpolate_scalars() {
        let bc = BarycentricCoordinates::from_uv(0.5, 0.25);
        // 0.25*4 + 0.5*8 + 0.25*16
        assert_eq!(bc.interpolate(4.0, 8.0, 16.0), 9.0);
    }

    #[test]
    fn interpolate_points_reconstructs() {
        let (a, b, c) = (dvec2(0.0, 0.0), dvec2(4.0, 0.0), dvec2(0.0, 4.0));
        let bc = BarycentricCoordinates::from_uv(0.25, 0.25);
        assert_eq!(bc.interpolate(a, b, c), dvec2(1.0, 1.0));
    }

    #[test]
    fn containment_classes() {
        let eps = 1e-9;
        assert_eq!(BarycentricCoordinates::from_uv(0.3, 0.3).containment(eps), Containment::Inside);
        assert_eq!(BarycentricCoordinates::from_uv(0.5, 0.0).containment(eps), Containment::Boundary);
        assert_eq!(BarycentricCoordinates::from_uv(1.0, 0.0).containment(eps), Containment::Boundary);
        assert_eq!(BarycentricCoordinates::from_uv(-0.1, 0.5).containment(eps), Containment::Outside);
        assert_eq!(BarycentricCoordinates::from_uv(0.7, 0.7).containment(eps), Containment::Outside);
    }

    #[test]
    fn boundary_slack_absorbs_tiny_negatives() {
        let bc = BarycentricCoordinates::from_uv(-1e-12, 0.5);
        assert!(bc.is_inside(1e-9));
        assert!(!bc.is_inside(0.0));
        assert!(!bc.is_strictly_inside(1e-9));
        assert_eq!(bc.containment(1e-9), Containment::Boundary);
    }

    #[test]
    fn nan_weights_are_outside() {
        let bc = BarycentricCoordinates::from_uv(f64::NAN, 0.25);
        assert_eq!(bc.containment(1e-9), Containment::Outside);
    }

    #[test]
    fn closed_inside() {
        assert!(Containment::Inside.is_closed_inside());
        assert!(Containment::Boundary.is_closed_inside());
        assert!(!Containment::Outside.is_closed_inside());
    }

    #[test]
    fn display() {
        let bc = BarycentricCoordinates::from_uv(0.25, 0.25);
        insta::assert_snapshot!(bc.to_string(), @"(u: 0.25, v: 0.25, w: 0.5)");
    }
}
