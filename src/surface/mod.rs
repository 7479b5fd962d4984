// src/surface/mod.rs

//! The presentation-surface capability interface.
//!
//! The engine never talks to a concrete rendering backend. Hosts expose the
//! named rectangles effects attach to through [`RenderSurface`], and the
//! engine resolves anchors against that at spawn time. A surface that
//! cannot resolve an anchor simply loses the decoration; nothing
//! load-bearing goes through here.

use std::collections::HashMap;
use std::fmt;

/// Names of the rectangles a host surface may expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnchorName {
    /// The experiment container.
    QuantumBox,
    /// The container's lid.
    BoxLid,
    /// The region the subject is drawn in.
    CatContainer,
    /// The overlay layer particles and field lines live on.
    ParticleLayer,
    /// The status line beneath the container.
    StatusText,
}

impl fmt::Display for AnchorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AnchorName::QuantumBox => "quantum-box",
            AnchorName::BoxLid => "box-lid",
            AnchorName::CatContainer => "cat-container",
            AnchorName::ParticleLayer => "quantum-particles",
            AnchorName::StatusText => "status-text",
        };
        write!(f, "{}", name)
    }
}

/// A named rectangle on the host surface, in the host's own units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width of the rectangle.
    pub width: f64,
    /// Height of the rectangle.
    pub height: f64,
}

impl Anchor {
    /// Builds an anchor rectangle.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Center point of the rectangle, where effects spawn before jitter.
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Capability interface a host implements to let the engine place effects.
pub trait RenderSurface {
    /// Resolves a named anchor, or `None` if the host does not expose it.
    fn anchor(&self, name: AnchorName) -> Option<Anchor>;
}

/// Map-backed surface for tests and headless hosts.
#[derive(Debug, Clone, Default)]
pub struct StaticSurface {
    anchors: HashMap<AnchorName, Anchor>,
}

impl StaticSurface {
    /// Creates a surface with no anchors; every effect spawn is absorbed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an anchor, returning `self` for method chaining.
    pub fn with_anchor(mut self, name: AnchorName, anchor: Anchor) -> Self {
        self.anchors.insert(name, anchor);
        self
    }

    /// Adds or replaces an anchor in place.
    pub fn set_anchor(&mut self, name: AnchorName, anchor: Anchor) {
        self.anchors.insert(name, anchor);
    }
}

impl RenderSurface for StaticSurface {
    fn anchor(&self, name: AnchorName) -> Option<Anchor> {
        self.anchors.get(&name).copied()
    }
}
