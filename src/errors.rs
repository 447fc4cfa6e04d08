//! Error types with diagnostic codes using miette
//!
//! Degeneracy is never encoded as NaN or infinity: it is always the `Err`
//! side of a `Result` the caller has to look at.

use miette::Diagnostic;
use thiserror::Error;

// ============================================================================
// Solver Errors
// ============================================================================

/// The triangle has (numerically) zero area, so barycentric coordinates
/// relative to it are not unique.
///
/// Raised when the normalizer `t` of the lifted cross product is within
/// `bound` of zero, or is not finite at all.
#[derive(Error, Diagnostic, Debug, Clone, Copy, PartialEq)]
#[error("degenerate triangle: normalizer {normalizer} is within {bound} of zero")]
#[diagnostic(
    code(barysolve::degenerate_triangle),
    help("the vertices are colinear or coincident; decide at the call site how to treat such triangles")
)]
pub struct DegenerateTriangleError {
    /// Third component of the lifted cross product (twice the signed area)
    pub normalizer: f64,
    /// Threshold the normalizer had to exceed in magnitude
    pub bound: f64,
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// Why a numeric configuration value was refused
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericError {
    /// Value is NaN
    #[error("value is NaN")]
    NaN,
    /// Value is infinite
    #[error("value is infinite")]
    Infinite,
    /// Value is negative when non-negative required
    #[error("value is negative")]
    Negative,
}

impl NumericError {
    /// Check that `value` is finite and non-negative.
    pub fn check_non_negative(value: f64) -> Result<f64, NumericError> {
        if value.is_nan() {
            Err(NumericError::NaN)
        } else if value.is_infinite() {
            Err(NumericError::Infinite)
        } else if value < 0.0 {
            Err(NumericError::Negative)
        } else {
            Ok(value)
        }
    }
}

/// A [`Tolerance`](crate::Tolerance) field was given an unusable value
#[derive(Error, Diagnostic, Debug, Clone, Copy, PartialEq)]
#[error("invalid {field} tolerance {value}")]
#[diagnostic(
    code(barysolve::tolerance::invalid),
    help("tolerances must be finite and non-negative")
)]
pub struct ToleranceError {
    pub field: &'static str,
    pub value: f64,
    #[source]
    pub reason: NumericError,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_non_negative_accepts_zero_and_positive() {
        assert_eq!(NumericError::check_non_negative(0.0), Ok(0.0));
        assert_eq!(NumericError::check_non_negative(1e-9), Ok(1e-9));
    }

    #[test]
    fn check_non_negative_rejects_bad_values() {
        assert_eq!(NumericError::check_non_negative(f64::NAN), Err(NumericError::NaN));
        assert_eq!(
            NumericError::check_non_negative(f64::NEG_INFINITY),
            Err(NumericError::Infinite)
        );
        assert_eq!(NumericError::check_non_negative(-1e-12), Err(NumericError::Negative));
    }

    #[test]
    fn degenerate_error_message() {
        let err = DegenerateTriangleError { normalizer: 0.0, bound: 0.0 };
        insta::assert_snapshot!(err.to_string(), @"degenerate triangle: normalizer 0 is within 0 of zero");
    }

    #[test]
    fn degenerate_error_diagnostic_code() {
        let err = DegenerateTriangleError { normalizer: 0.0, bound: 0.0 };
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("barysolve::degenerate_triangle"));
    }

    #[test]
    fn tolerance_error_keeps_reason_as_source() {
        use std::error::Error as _;

        let err = ToleranceError {
            field: "boundary",
            value: -1.0,
            reason: NumericError::Negative,
        };
        insta::assert_snapshot!(err.to_string(), @"invalid boundary tolerance -1");
        assert_eq!(err.source().map(|s| s.to_string()).as_deref(), Some("value is negative"));
    }
}
