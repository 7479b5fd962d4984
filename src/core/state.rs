// src/core/state.rs

use crate::core::QcatError;
use std::fmt;
use std::str::FromStr;

/// The displayed representation of the simulated subject.
///
/// Exactly one variant is current per engine instance at any instant, and
/// it is mutated only through [`StateAnimator`](crate::animator::StateAnimator)
/// operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisualState {
    /// Nothing shown; the initial and post-reset state.
    Hidden,
    /// The subject rendered alive.
    Alive,
    /// The subject rendered dead.
    Dead,
    /// The unresolved both-at-once rendering.
    Superposition,
}

impl VisualState {
    /// Wire name of the state, matching what the backend payloads carry.
    pub fn as_str(&self) -> &'static str {
        match self {
            VisualState::Hidden => "hidden",
            VisualState::Alive => "alive",
            VisualState::Dead => "dead",
            VisualState::Superposition => "superposition",
        }
    }
}

impl fmt::Display for VisualState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for VisualState {
    type Err = QcatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hidden" => Ok(VisualState::Hidden),
            "alive" => Ok(VisualState::Alive),
            "dead" => Ok(VisualState::Dead),
            "superposition" => Ok(VisualState::Superposition),
            other => Err(QcatError::InvalidState {
                message: format!("unknown visual state '{}'", other),
            }),
        }
    }
}

/// The container lid's own state machine, independent of [`VisualState`].
///
/// The only legal cycle is Closed → Opening → Open → Closing → Closed;
/// the animator never skips a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoxLifecycle {
    /// Lid at rest, shut.
    Closed,
    /// Lid travelling open.
    Opening,
    /// Lid at rest, open.
    Open,
    /// Lid travelling shut.
    Closing,
}

impl fmt::Display for BoxLifecycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BoxLifecycle::Closed => "closed",
            BoxLifecycle::Opening => "opening",
            BoxLifecycle::Open => "open",
            BoxLifecycle::Closing => "closing",
        };
        write!(f, "{}", name)
    }
}

/// How [`StateAnimator::request_state`](crate::animator::StateAnimator::request_state)
/// disposed of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    /// No transition was in flight; this one began immediately.
    Accepted,
    /// A transition was in flight; the request was appended to the queue
    /// and will run in arrival order.
    Queued,
}

/// Entrance animation style of the current visual state, for the
/// presentation surface to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntranceStyle {
    /// Springy scale-up, used by the Alive entrance.
    BounceIn,
    /// Plain opacity ramp, used by the Dead and Superposition entrances.
    FadeIn,
}
