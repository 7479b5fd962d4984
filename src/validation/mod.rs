// src/validation/mod.rs

//! Normalization checks for the quantum data pairs supplied by the caller.
//!
//! The pairs are trusted input and never validated at construction; the
//! load-bearing geometry entry points run these checks and propagate
//! failures instead of clamping, since a broken invariant means the
//! upstream data source is defective.

use crate::core::{AmplitudePair, ProbabilityPair, QcatError};

/// Default allowed deviation from 1.0 (can be overridden by caller).
pub const NORM_TOLERANCE: f64 = 1e-6;

/// Checks that |alive|² + |dead|² ≈ 1.0.
///
/// # Arguments
/// * `pair` - The [`AmplitudePair`] to check.
/// * `tolerance` - Allowed deviation from 1.0; defaults to [`NORM_TOLERANCE`].
///
/// # Returns
/// * `Ok(())` if normalized within tolerance.
/// * `Err(QcatError::InvalidInput)` if normalization fails.
pub fn check_amplitude_norm(pair: &AmplitudePair, tolerance: Option<f64>) -> Result<(), QcatError> {
    let effective_tolerance = tolerance.unwrap_or(NORM_TOLERANCE);
    let norm_sqr = pair.norm_sqr();
    if !norm_sqr.is_finite() || (norm_sqr - 1.0).abs() > effective_tolerance {
        Err(QcatError::InvalidInput {
            message: format!(
                "amplitude pair not normalized: |alive|^2 + |dead|^2 = {} (deviation > {})",
                norm_sqr, effective_tolerance
            ),
        })
    } else {
        Ok(())
    }
}

/// Checks that alive + dead ≈ 1.0 and each probability lies in [0, 1].
///
/// # Arguments
/// * `pair` - The [`ProbabilityPair`] to check.
/// * `tolerance` - Allowed deviation from 1.0; defaults to [`NORM_TOLERANCE`].
///
/// # Returns
/// * `Ok(())` if the pair is a valid two-outcome distribution.
/// * `Err(QcatError::InvalidInput)` otherwise.
pub fn check_probability_norm(
    pair: &ProbabilityPair,
    tolerance: Option<f64>,
) -> Result<(), QcatError> {
    let effective_tolerance = tolerance.unwrap_or(NORM_TOLERANCE);
    for (label, p) in [("alive", pair.alive), ("dead", pair.dead)] {
        if !p.is_finite() || !(0.0..=1.0).contains(&p) {
            return Err(QcatError::InvalidInput {
                message: format!("probability '{}' out of range: {}", label, p),
            });
        }
    }
    let total = pair.alive + pair.dead;
    if (total - 1.0).abs() > effective_tolerance {
        Err(QcatError::InvalidInput {
            message: format!(
                "probability pair does not sum to 1: alive + dead = {} (deviation > {})",
                total, effective_tolerance
            ),
        })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex;

    #[test]
    fn normalized_amplitudes_pass() {
        assert!(check_amplitude_norm(&AmplitudePair::equal_superposition(), None).is_ok());
        assert!(check_amplitude_norm(&AmplitudePair::collapsed_dead(), None).is_ok());
    }

    #[test]
    fn unnormalized_amplitudes_fail() {
        let pair = AmplitudePair::new(Complex::new(1.0, 0.0), Complex::new(1.0, 0.0));
        let err = check_amplitude_norm(&pair, None).unwrap_err();
        assert!(matches!(err, QcatError::InvalidInput { .. }));
    }

    #[test]
    fn tolerance_is_caller_overridable() {
        let pair = AmplitudePair::new(Complex::new(0.999, 0.0), Complex::new(0.0, 0.0));
        assert!(check_amplitude_norm(&pair, None).is_err());
        assert!(check_amplitude_norm(&pair, Some(0.01)).is_ok());
    }

    #[test]
    fn probability_range_is_enforced() {
        let err = check_probability_norm(&ProbabilityPair::new(-0.1, 1.1), None).unwrap_err();
        assert!(matches!(err, QcatError::InvalidInput { .. }));
    }

    #[test]
    fn probability_sum_is_enforced() {
        assert!(check_probability_norm(&ProbabilityPair::new(0.5, 0.5), None).is_ok());
        assert!(check_probability_norm(&ProbabilityPair::new(0.5, 0.6), None).is_err());
    }
}
