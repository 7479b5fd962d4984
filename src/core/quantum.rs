// src/core/quantum.rs

// Make sure `num-complex` is in Cargo.toml: `num-complex = "0.4"`
use num_complex::Complex;
use num_traits::Zero;
use std::f64::consts::FRAC_1_SQRT_2;
use std::fmt;

/// The two complex amplitudes of a normalized two-level state, as supplied
/// by the upstream simulator.
///
/// Invariant: |alive|² + |dead|² ≈ 1 within
/// [`NORM_TOLERANCE`](crate::validation::NORM_TOLERANCE). The pair is
/// trusted input: construction does not enforce the invariant; the
/// geometry entry points check it via
/// [`check_amplitude_norm`](crate::validation::check_amplitude_norm) and
/// reject violations instead of clamping them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmplitudePair {
    /// Amplitude of the alive basis state.
    pub alive: Complex<f64>,
    /// Amplitude of the dead basis state.
    pub dead: Complex<f64>,
}

impl AmplitudePair {
    /// Builds a pair from the two amplitudes.
    pub fn new(alive: Complex<f64>, dead: Complex<f64>) -> Self {
        Self { alive, dead }
    }

    /// The fully collapsed alive state, amplitude (1, 0).
    pub fn collapsed_alive() -> Self {
        Self::new(Complex::new(1.0, 0.0), Complex::zero())
    }

    /// The fully collapsed dead state, amplitude (0, 1).
    pub fn collapsed_dead() -> Self {
        Self::new(Complex::zero(), Complex::new(1.0, 0.0))
    }

    /// The equal superposition (1/√2)(alive + dead).
    pub fn equal_superposition() -> Self {
        Self::new(
            Complex::new(FRAC_1_SQRT_2, 0.0),
            Complex::new(FRAC_1_SQRT_2, 0.0),
        )
    }

    /// Sum of squared amplitude magnitudes, 1.0 for a normalized pair.
    pub fn norm_sqr(&self) -> f64 {
        self.alive.norm_sqr() + self.dead.norm_sqr()
    }
}

impl fmt::Display for AmplitudePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[alive: {:.4}, dead: {:.4}]", self.alive, self.dead)
    }
}

/// Measurement probabilities of the two outcomes.
///
/// Invariant: alive + dead ≈ 1 within tolerance, each within [0, 1].
/// Trusted input, validated at the geometry entry points like
/// [`AmplitudePair`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbabilityPair {
    /// Probability of observing the subject alive.
    pub alive: f64,
    /// Probability of observing the subject dead.
    pub dead: f64,
}

impl ProbabilityPair {
    /// Builds a pair from the two probabilities.
    pub fn new(alive: f64, dead: f64) -> Self {
        Self { alive, dead }
    }
}

impl fmt::Display for ProbabilityPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[alive: {:.4}, dead: {:.4}]", self.alive, self.dead)
    }
}
