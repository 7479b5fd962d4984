// src/effects/mod.rs

//! Short-lived decorative effects: rings, waves, flashes, particles and
//! field lines.
//!
//! Effects are fire-and-forget. Spawning never blocks and never fails
//! loudly: an unresolvable anchor is logged and absorbed, because a lost
//! decoration must not interrupt the experiment. Every spawned effect is
//! reaped exactly once, never before its time-to-live elapses and never
//! later than the first [`advance_to`](EffectSpawner::advance_to) call
//! after it.
//!
//! Placement and start delay are jittered with a seeded PRNG so that a
//! given seed reproduces the exact same decoration layout, which keeps the
//! visuals assertable under test.

use crate::core::Ticks;
use crate::core::QcatError;
use crate::surface::{AnchorName, RenderSurface};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use std::fmt;
use tracing::{debug, trace};

/// Unique identifier of a live effect within one spawner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EffectId(pub u64);

impl fmt::Display for EffectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Effect({})", self.0)
    }
}

/// The kinds of decoration the animator spawns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectKind {
    /// Expanding ring emitted when the lid opens.
    Ring,
    /// Radial wave emitted by the measurement collapse.
    Wave,
    /// Full-surface flash at the moment of collapse.
    Flash,
    /// Outcome-burst particle.
    Particle,
    /// Drifting ambient field line shown in superposition.
    FieldLine,
}

impl fmt::Display for EffectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EffectKind::Ring => "ring",
            EffectKind::Wave => "wave",
            EffectKind::Flash => "flash",
            EffectKind::Particle => "particle",
            EffectKind::FieldLine => "field-line",
        };
        write!(f, "{}", name)
    }
}

/// Bounds of the randomness applied to a spawned effect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JitterBounds {
    /// Maximum horizontal offset from the anchor center, either direction.
    pub dx: f64,
    /// Maximum vertical offset from the anchor center, either direction.
    pub dy: f64,
    /// Maximum extra start delay.
    pub max_delay: Ticks,
}

impl JitterBounds {
    /// No jitter: the effect starts on schedule at the anchor center.
    pub const NONE: JitterBounds = JitterBounds {
        dx: 0.0,
        dy: 0.0,
        max_delay: 0,
    };

    /// Builds jitter bounds.
    pub fn new(dx: f64, dy: f64, max_delay: Ticks) -> Self {
        Self { dx, dy, max_delay }
    }
}

/// One live decorative effect, owned by the spawner until its
/// time-to-live elapses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Effect {
    /// Identifier, unique within the owning spawner.
    pub id: EffectId,
    /// What to draw.
    pub kind: EffectKind,
    /// The anchor the effect was placed against.
    pub anchor: AnchorName,
    /// Jittered horizontal position, host units.
    pub x: f64,
    /// Jittered vertical position, host units.
    pub y: f64,
    /// Tick the effect becomes visible (spawn tick + stagger + delay jitter).
    pub starts_at: Ticks,
    /// Tick the effect expires, `starts_at` + time-to-live.
    pub expires_at: Ticks,
}

/// Creates and reaps decorative effects on the engine's logical timeline.
pub struct EffectSpawner {
    rng: StdRng,
    next_id: u64,
    pool: Vec<Effect>,
}

impl EffectSpawner {
    /// Creates a spawner with a fixed default seed.
    pub fn new() -> Self {
        Self::with_seed(0)
    }

    /// Creates a spawner whose jitter stream is reproducible from `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            next_id: 0,
            pool: Vec::new(),
        }
    }

    /// Spawns one effect anchored at `anchor`, starting at `now` plus the
    /// delay jitter and expiring `ttl` ticks after it starts.
    ///
    /// Returns `None` when the surface cannot resolve the anchor; the
    /// failure is logged and absorbed since effects are purely decorative.
    pub fn spawn<S: RenderSurface>(
        &mut self,
        surface: &S,
        kind: EffectKind,
        anchor: AnchorName,
        jitter: JitterBounds,
        ttl: Ticks,
        now: Ticks,
    ) -> Option<EffectId> {
        self.spawn_at(surface, kind, anchor, jitter, ttl, now)
    }

    /// Spawns `count` effects of the same kind with starts staggered
    /// `stagger` ticks apart, e.g. 5 field lines at 200-tick intervals or
    /// 20 burst particles at 30-tick intervals.
    ///
    /// Returns the ids actually spawned; an unresolvable anchor yields an
    /// empty batch.
    pub fn spawn_batch<S: RenderSurface>(
        &mut self,
        surface: &S,
        kind: EffectKind,
        anchor: AnchorName,
        count: usize,
        stagger: Ticks,
        jitter: JitterBounds,
        ttl: Ticks,
        now: Ticks,
    ) -> Vec<EffectId> {
        let mut ids = Vec::with_capacity(count);
        for i in 0..count {
            let offset = stagger.saturating_mul(i as Ticks);
            if let Some(id) =
                self.spawn_at(surface, kind, anchor, jitter, ttl, now.saturating_add(offset))
            {
                ids.push(id);
            }
        }
        ids
    }

    fn spawn_at<S: RenderSurface>(
        &mut self,
        surface: &S,
        kind: EffectKind,
        anchor: AnchorName,
        jitter: JitterBounds,
        ttl: Ticks,
        start: Ticks,
    ) -> Option<EffectId> {
        // Jitter is sampled before anchor resolution; the random stream
        // does not depend on which anchors the surface exposes.
        let jx = (self.rng.random::<f64>() * 2.0 - 1.0) * jitter.dx;
        let jy = (self.rng.random::<f64>() * 2.0 - 1.0) * jitter.dy;
        let delay = (self.rng.random::<f64>() * jitter.max_delay as f64) as Ticks;

        let rect = match surface.anchor(anchor) {
            Some(rect) => rect,
            None => {
                let err = QcatError::MissingAnchor {
                    anchor,
                    message: format!("cannot place {} effect", kind),
                };
                debug!(%err, "effect skipped");
                return None;
            }
        };
        let (cx, cy) = rect.center();

        let id = EffectId(self.next_id);
        self.next_id += 1;
        let starts_at = start.saturating_add(delay);
        let effect = Effect {
            id,
            kind,
            anchor,
            x: cx + jx,
            y: cy + jy,
            starts_at,
            expires_at: starts_at.saturating_add(ttl),
        };
        trace!(%id, %kind, starts_at, expires_at = effect.expires_at, "effect spawned");
        self.pool.push(effect);
        Some(id)
    }

    /// Reaps every effect whose time-to-live elapsed at or before `now`.
    /// Each effect is destroyed exactly once; an effect never outlives its
    /// expiry by more than the host's advance cadence.
    pub fn advance_to(&mut self, now: Ticks) {
        let before = self.pool.len();
        self.pool.retain(|e| e.expires_at > now);
        let reaped = before - self.pool.len();
        if reaped > 0 {
            trace!(reaped, now, "expired effects reaped");
        }
    }

    /// Effects that have started and not yet expired at `now`.
    pub fn active(&self, now: Ticks) -> impl Iterator<Item = &Effect> {
        self.pool.iter().filter(move |e| e.starts_at <= now)
    }

    /// All effects still owned by the spawner, including staggered ones
    /// that have not started yet.
    pub fn live_count(&self) -> usize {
        self.pool.len()
    }

    /// Drops every live effect immediately. Used by the engine reset.
    pub fn clear(&mut self) {
        self.pool.clear();
    }
}

impl Default for EffectSpawner {
    fn default() -> Self {
        Self::new()
    }
}
