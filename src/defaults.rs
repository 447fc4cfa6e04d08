//! Default numeric policy for the solver

/// Relative slack on the normalizer: `(3 + 16ε)ε`, the forward error bound of
/// a 2x2 orientation determinant evaluated in `f64`.
pub const DEGENERATE_EPSILON: f64 = (3.0 + 16.0 * f64::EPSILON) * f64::EPSILON;

/// Absolute slack on u, v and w when classifying containment.
pub const BOUNDARY_EPSILON: f64 = 1e-9;
