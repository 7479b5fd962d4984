// src/lib.rs

//! `qcat` - animation sequencing and state geometry for a Schrödinger's
//! cat visualizer
//!
//! This library is the in-process engine behind an educational two-state
//! quantum experiment display: a subject that can be shown alive, dead or
//! in superposition inside a container with an openable lid, decorated
//! with short-lived effects, plus the pure functions that turn quantum
//! data into drawable geometry. It links into a presentation surface; it
//! does no drawing, networking or physics of its own.

pub mod core;
pub mod animator;
pub mod effects;
pub mod geometry;
pub mod surface;
pub mod validation;

// Re-export the most common types for easier top-level use
pub use core::{
    AmplitudePair, BoxLifecycle, EntranceStyle, ProbabilityPair, QcatError, RequestOutcome, Ticks,
    VisualState,
};
pub use animator::{AnimationRequest, StateAnimator, Timings};
pub use effects::{Effect, EffectId, EffectKind, EffectSpawner, JitterBounds};
pub use geometry::{
    circuit_layout, probability_bars, project_to_sphere, BarHeights, CircuitKind, GatePlacement,
    GateSymbol, ProjectionPoint,
};
pub use surface::{Anchor, AnchorName, RenderSurface, StaticSurface};
pub use validation::{check_amplitude_norm, check_probability_norm, NORM_TOLERANCE};

// Example 1: Serialized state transitions over a cooperative timeline
// Rapid-fire requests queue behind the in-flight transition and render in
// arrival order while the lid travels on its own timeline.
/// ```
/// use qcat::{Anchor, AnchorName, RequestOutcome, StateAnimator, StaticSurface, VisualState};
///
/// let surface = StaticSurface::new()
///     .with_anchor(AnchorName::QuantumBox, Anchor::new(0.0, 0.0, 300.0, 300.0))
///     .with_anchor(AnchorName::ParticleLayer, Anchor::new(0.0, 0.0, 300.0, 300.0));
/// let mut animator = StateAnimator::new(surface);
///
/// assert_eq!(
///     animator.request_state(VisualState::Superposition),
///     RequestOutcome::Accepted
/// );
/// assert_eq!(
///     animator.request_state(VisualState::Dead),
///     RequestOutcome::Queued
/// );
///
/// animator.open_box();
/// animator.advance(2_000);
///
/// assert_eq!(animator.current_state(), VisualState::Dead);
/// assert!(animator.is_box_open());
/// assert_eq!(animator.queue_len(), 0);
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item

// Example 2: Pure geometry from quantum data
// The equal superposition sits on the sphere's equator; probability bars
// scale exactly; the measurement diagram places H before M.
/// ```
/// use qcat::geometry::{circuit_layout, probability_bars, project_to_sphere, CircuitKind};
/// use qcat::{AmplitudePair, ProbabilityPair};
///
/// let point = project_to_sphere(&AmplitudePair::equal_superposition())?;
/// assert!((point.x - 1.0).abs() < 1e-3);
/// assert!(point.z.abs() < 1e-3);
///
/// let bars = probability_bars(&ProbabilityPair::new(0.3, 0.7), 100.0)?;
/// assert_eq!(bars.alive, 30.0);
/// assert_eq!(bars.dead, 70.0);
///
/// let layout = circuit_layout(CircuitKind::parse("measurement"));
/// assert_eq!(layout.len(), 2);
/// assert!(layout[0].x < layout[1].x);
/// # Ok::<(), qcat::QcatError>(())
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item
