//! Error handling logic

use crate::surface::AnchorName;
use std::fmt;

/// Error types surfaced by the engine.
///
/// Only the load-bearing paths (state-name parsing and geometry input) ever
/// propagate errors to the caller; the decorative effect path absorbs its
/// own failures after logging them, since a missing ring or particle is not
/// worth interrupting the experiment for.
#[derive(Debug, Clone, PartialEq)]
pub enum QcatError {
    /// A visual-state name outside the known set was requested.
    /// The request is dropped without touching the queue.
    InvalidState {
        /// What was requested and why it was rejected.
        message: String,
    },

    /// A rendering anchor required to place an effect is absent from the
    /// presentation surface. Decorative, non-fatal: the spawner logs and
    /// skips the effect.
    MissingAnchor {
        /// The anchor that could not be resolved.
        anchor: AnchorName,
        /// MissingAnchor failure message.
        message: String,
    },

    /// Quantum input data failed a normalization or range invariant beyond
    /// tolerance. Propagated rather than clamped, since it signals a defect
    /// in the upstream data source.
    InvalidInput {
        /// InvalidInput failure message.
        message: String,
    },
}

impl fmt::Display for QcatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QcatError::InvalidState { message } => write!(f, "Invalid State: {}", message),
            QcatError::MissingAnchor { anchor, message } => {
                write!(f, "Missing Anchor ({}): {}", anchor, message)
            }
            QcatError::InvalidInput { message } => write!(f, "Invalid Input: {}", message),
        }
    }
}

impl std::error::Error for QcatError {}
