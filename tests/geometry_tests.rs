// tests/geometry_tests.rs

use num_complex::Complex;
use qcat::geometry::{
    circuit_layout, probability_bars, project_to_sphere, CircuitKind, GateSymbol,
};
use qcat::{AmplitudePair, ProbabilityPair, QcatError};
use std::f64::consts::{FRAC_PI_2, PI};

const TEST_TOLERANCE: f64 = 1e-6;

// Helper asserting scalar closeness with context for better error reporting
fn assert_approx(actual: f64, expected: f64, tolerance: f64, context: &str) {
    assert!(
        (actual - expected).abs() < tolerance,
        "Mismatch - Actual: {}, Expected: {}, Context: {}",
        actual,
        expected,
        context
    );
}

#[test]
fn collapsed_alive_projects_to_the_north_pole() {
    let point = project_to_sphere(&AmplitudePair::collapsed_alive()).expect("normalized pair");
    assert_approx(point.theta, 0.0, TEST_TOLERANCE, "theta at |alive>");
    assert_approx(point.x, 0.0, TEST_TOLERANCE, "x at |alive>");
    assert_approx(point.y, 0.0, TEST_TOLERANCE, "y at |alive>");
    assert_approx(point.z, 1.0, TEST_TOLERANCE, "z at |alive>");
}

#[test]
fn collapsed_dead_projects_to_the_south_pole() {
    let point = project_to_sphere(&AmplitudePair::collapsed_dead()).expect("normalized pair");
    assert_approx(point.theta, PI, TEST_TOLERANCE, "theta at |dead>");
    assert_approx(point.z, -1.0, TEST_TOLERANCE, "z at |dead>");
}

#[test]
fn equal_superposition_sits_on_the_equator() {
    let pair = AmplitudePair::new(Complex::new(0.70710678, 0.0), Complex::new(0.70710678, 0.0));
    let point = project_to_sphere(&pair).expect("pair within tolerance of normalized");
    assert_approx(point.theta, FRAC_PI_2, 1e-3, "theta at equal superposition");
    assert_approx(point.x, 1.0, 1e-3, "x at equal superposition");
    assert_approx(point.z, 0.0, 1e-3, "z at equal superposition");
}

#[test]
fn relative_phase_rotates_the_azimuth() {
    // (1/sqrt(2))(|alive> + i|dead>): phi = atan2(1/sqrt(2), 1/sqrt(2)) = pi/4
    let inv_sqrt2 = std::f64::consts::FRAC_1_SQRT_2;
    let pair = AmplitudePair::new(Complex::new(inv_sqrt2, 0.0), Complex::new(0.0, inv_sqrt2));
    let point = project_to_sphere(&pair).expect("normalized pair");
    assert_approx(point.phi, PI / 4.0, TEST_TOLERANCE, "phi with i phase");
}

#[test]
fn orthographic_projection_drops_depth() {
    let point = project_to_sphere(&AmplitudePair::equal_superposition()).expect("normalized pair");
    let (px, pz) = point.orthographic();
    assert_eq!(px, point.x);
    assert_eq!(pz, point.z);
}

#[test]
fn projection_is_deterministic_across_calls() {
    let pair = AmplitudePair::equal_superposition();
    let first = project_to_sphere(&pair).expect("normalized pair");
    let second = project_to_sphere(&pair).expect("normalized pair");
    assert_eq!(first, second);
}

#[test]
fn unnormalized_amplitudes_are_rejected_not_clamped() {
    let pair = AmplitudePair::new(Complex::new(0.9, 0.0), Complex::new(0.9, 0.0));
    let err = project_to_sphere(&pair).unwrap_err();
    assert!(matches!(err, QcatError::InvalidInput { .. }));
}

#[test]
fn probability_bars_scale_exactly() {
    let bars = probability_bars(&ProbabilityPair::new(0.3, 0.7), 100.0).expect("valid pair");
    assert_eq!(bars.alive, 30.0);
    assert_eq!(bars.dead, 70.0);
}

#[test]
fn probability_bars_cover_the_degenerate_distributions() {
    let all_dead = probability_bars(&ProbabilityPair::new(0.0, 1.0), 250.0).expect("valid pair");
    assert_eq!(all_dead.alive, 0.0);
    assert_eq!(all_dead.dead, 250.0);

    let flat = probability_bars(&ProbabilityPair::new(0.5, 0.5), 0.0).expect("zero-height chart");
    assert_eq!(flat.alive, 0.0);
    assert_eq!(flat.dead, 0.0);
}

#[test]
fn probability_bars_reject_bad_input() {
    assert!(probability_bars(&ProbabilityPair::new(0.6, 0.6), 100.0).is_err());
    assert!(probability_bars(&ProbabilityPair::new(-0.1, 1.1), 100.0).is_err());
    assert!(probability_bars(&ProbabilityPair::new(0.5, 0.5), f64::NAN).is_err());
    assert!(probability_bars(&ProbabilityPair::new(0.5, 0.5), -10.0).is_err());
}

#[test]
fn initialization_layout_marks_the_prepared_state() {
    let layout = circuit_layout(CircuitKind::Initialization);
    assert_eq!(layout.len(), 1);
    assert_eq!(layout[0].symbol, GateSymbol::InitialStateMarker);
    assert_eq!(layout[0].x, 0.0);
}

#[test]
fn superposition_layout_centers_the_hadamard() {
    let layout = circuit_layout(CircuitKind::Superposition);
    assert_eq!(layout.len(), 1);
    assert_eq!(layout[0].symbol, GateSymbol::Hadamard);
    assert_eq!(layout[0].x, 0.5);
}

#[test]
fn measurement_layout_orders_hadamard_before_measurement() {
    let layout = circuit_layout(CircuitKind::Measurement);
    assert_eq!(layout.len(), 2);
    assert_eq!(layout[0].symbol, GateSymbol::Hadamard);
    assert_eq!(layout[1].symbol, GateSymbol::Measurement);
    assert!(layout[0].x < layout[1].x);
}

#[test]
fn unknown_descriptor_falls_back_to_initialization() {
    assert_eq!(CircuitKind::parse("decoherence"), CircuitKind::Initialization);
    assert_eq!(CircuitKind::parse(""), CircuitKind::Initialization);
    assert_eq!(CircuitKind::parse("measurement"), CircuitKind::Measurement);
    assert_eq!(CircuitKind::parse("superposition"), CircuitKind::Superposition);
}
