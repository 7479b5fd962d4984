// src/core/mod.rs

//! Core data structures and types

// Declare modules within core
pub mod error;
pub mod quantum;
pub mod state;

// Re-export public types for convenient access via `qcat::core::TypeName`
pub use error::QcatError;
pub use quantum::{AmplitudePair, ProbabilityPair};
pub use state::{BoxLifecycle, EntranceStyle, RequestOutcome, VisualState};

pub mod constants;
pub use constants::Ticks;
