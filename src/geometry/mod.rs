// src/geometry/mod.rs

//! Pure state-to-geometry functions.
//!
//! Everything here is side-effect free and recomputed on each call; nothing
//! is cached. Unlike the decorative effect path, this output is
//! load-bearing for the display, so invalid quantum input is propagated as
//! [`QcatError::InvalidInput`] instead of being absorbed or clamped.

use crate::core::{AmplitudePair, ProbabilityPair, QcatError};
use crate::validation::{check_amplitude_norm, check_probability_norm};
use std::fmt;

/// Unit-sphere coordinates of a two-amplitude state, plus the spherical
/// angles they were derived from.
///
/// The presentation surface draws the 2D orthographic projection and keeps
/// the angles for labeling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionPoint {
    /// Polar angle, 0 at the alive pole, π at the dead pole.
    pub theta: f64,
    /// Azimuthal (relative phase) angle.
    pub phi: f64,
    /// Cartesian x on the unit sphere.
    pub x: f64,
    /// Cartesian y on the unit sphere (depth, dropped by the projection).
    pub y: f64,
    /// Cartesian z on the unit sphere.
    pub z: f64,
}

impl ProjectionPoint {
    /// The 2D drawing pair: (x, z), discarding depth.
    pub fn orthographic(&self) -> (f64, f64) {
        (self.x, self.z)
    }
}

impl fmt::Display for ProjectionPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(θ={:.4}, φ={:.4}) -> ({:.4}, {:.4}, {:.4})",
            self.theta, self.phi, self.x, self.y, self.z
        )
    }
}

/// Heights of the two probability bars, proportional to their chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarHeights {
    /// Height of the alive bar.
    pub alive: f64,
    /// Height of the dead bar.
    pub dead: f64,
}

/// Symbols placed on the single wire of the gate diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GateSymbol {
    /// The |0⟩ preparation marker at the start of the wire.
    InitialStateMarker,
    /// The Hadamard gate creating the superposition.
    Hadamard,
    /// The measurement gate collapsing it.
    Measurement,
}

impl fmt::Display for GateSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            GateSymbol::InitialStateMarker => "|0⟩",
            GateSymbol::Hadamard => "H",
            GateSymbol::Measurement => "M",
        };
        write!(f, "{}", symbol)
    }
}

/// One symbol and its position along the wire, as a fraction in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GatePlacement {
    /// What to draw.
    pub symbol: GateSymbol,
    /// Position along the wire; time flows left to right.
    pub x: f64,
}

/// The circuit stages the diagram can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CircuitKind {
    /// Bare wire with the prepared |0⟩ state.
    Initialization,
    /// Hadamard applied, subject in superposition.
    Superposition,
    /// Hadamard followed by a measurement.
    Measurement,
}

impl CircuitKind {
    /// Maps a wire descriptor string to a kind. Unknown descriptors fall
    /// back to [`CircuitKind::Initialization`], the bare-wire diagram.
    pub fn parse(descriptor: &str) -> Self {
        match descriptor {
            "superposition" => CircuitKind::Superposition,
            "measurement" => CircuitKind::Measurement,
            _ => CircuitKind::Initialization,
        }
    }
}

/// Projects a normalized amplitude pair onto the unit sphere.
///
/// theta = 2·acos(|a_alive|), phi = atan2(Im a_dead, Re a_alive), then the
/// usual spherical-to-Cartesian mapping. |a_alive| is clamped to [0, 1]
/// before `acos` so a pair normalized within tolerance cannot produce NaN.
///
/// # Errors
/// [`QcatError::InvalidInput`] if the pair violates the normalization
/// invariant beyond tolerance.
pub fn project_to_sphere(pair: &AmplitudePair) -> Result<ProjectionPoint, QcatError> {
    check_amplitude_norm(pair, None)?;

    let theta = 2.0 * pair.alive.norm().clamp(0.0, 1.0).acos();
    let phi = pair.dead.im.atan2(pair.alive.re);

    Ok(ProjectionPoint {
        theta,
        phi,
        x: theta.sin() * phi.cos(),
        y: theta.sin() * phi.sin(),
        z: theta.cos(),
    })
}

/// Scales a probability pair to bar heights: `height = p · graph_height`,
/// exactly proportional.
///
/// # Errors
/// [`QcatError::InvalidInput`] if the pair is not a valid two-outcome
/// distribution, or if `graph_height` is negative or non-finite.
pub fn probability_bars(
    pair: &ProbabilityPair,
    graph_height: f64,
) -> Result<BarHeights, QcatError> {
    check_probability_norm(pair, None)?;
    if !graph_height.is_finite() || graph_height < 0.0 {
        return Err(QcatError::InvalidInput {
            message: format!("graph height must be finite and non-negative, got {}", graph_height),
        });
    }

    Ok(BarHeights {
        alive: pair.alive * graph_height,
        dead: pair.dead * graph_height,
    })
}

/// Lays gate symbols out along the unit wire for a circuit stage.
///
/// The mapping is fixed: Initialization puts the |0⟩ marker at the start,
/// Superposition a Hadamard at the midpoint, Measurement a Hadamard at 1/3
/// and the measurement gate at 2/3.
pub fn circuit_layout(kind: CircuitKind) -> Vec<GatePlacement> {
    match kind {
        CircuitKind::Initialization => vec![GatePlacement {
            symbol: GateSymbol::InitialStateMarker,
            x: 0.0,
        }],
        CircuitKind::Superposition => vec![GatePlacement {
            symbol: GateSymbol::Hadamard,
            x: 0.5,
        }],
        CircuitKind::Measurement => vec![
            GatePlacement {
                symbol: GateSymbol::Hadamard,
                x: 1.0 / 3.0,
            },
            GatePlacement {
                symbol: GateSymbol::Measurement,
                x: 2.0 / 3.0,
            },
        ],
    }
}
