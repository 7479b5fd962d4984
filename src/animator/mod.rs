// src/animator/mod.rs

//! Serialized animation sequencing for the experiment display.
//!
//! This module contains the [`StateAnimator`] entry point: the single owner
//! of the displayed [`VisualState`], the FIFO request queue, and the
//! container-lid sub-state machine. All durations are logical ticks on one
//! cooperative timeline driven by [`StateAnimator::advance`]; there are no
//! threads and nothing here blocks.
//!
//! Ordering guarantees: visual-state transitions are strictly serialized
//! through the queue (at most one in flight, arrivals never lost, served in
//! arrival order). Lid transitions are serialized on their own timeline.
//! The two timelines are deliberately decoupled and may overlap.

mod timers;

use crate::core::constants::{decoration, timing};
use crate::core::{
    BoxLifecycle, EntranceStyle, QcatError, RequestOutcome, Ticks, VisualState,
};
use crate::effects::{EffectKind, EffectSpawner, JitterBounds};
use crate::surface::{AnchorName, RenderSurface};
use std::collections::VecDeque;
use timers::{TimerEvent, TimerQueue};
use tracing::{debug, trace, warn};

/// Durations of the animator's timed sequences, constructor-injected so a
/// test host can compress time without touching the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// Hold time of a visual-state transition.
    pub transition_hold: Ticks,
    /// Lid travel time, one direction.
    pub lid_travel: Ticks,
    /// Length of the measurement-collapse sequence.
    pub collapse_duration: Ticks,
    /// Delay before the Alive idle pulse.
    pub pulse_delay: Ticks,
    /// Delay before the Dead-entrance shake.
    pub shake_delay: Ticks,
    /// Length of the Dead-entrance shake.
    pub shake_duration: Ticks,
    /// Length of the error flash.
    pub error_flash: Ticks,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            transition_hold: timing::TRANSITION_HOLD,
            lid_travel: timing::LID_TRAVEL,
            collapse_duration: timing::COLLAPSE_DURATION,
            pulse_delay: timing::PULSE_DELAY,
            shake_delay: timing::SHAKE_DELAY,
            shake_duration: timing::SHAKE_DURATION,
            error_flash: timing::ERROR_FLASH,
        }
    }
}

/// A pending display request, immutable once enqueued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationRequest {
    /// The state to render.
    pub target: VisualState,
    /// Arrival index, strictly increasing per animator instance.
    pub enqueue_order: u64,
}

/// The animation sequencing engine.
///
/// One instance per simulator session, owned by the caller; the displayed
/// state and the lid lifecycle are mutated only through the operations
/// below, never by the effect spawner or the geometry functions.
pub struct StateAnimator<S: RenderSurface> {
    surface: S,
    timings: Timings,
    clock: Ticks,
    timers: TimerQueue,
    effects: EffectSpawner,
    queue: VecDeque<AnimationRequest>,
    submitted: u64,
    busy: bool,
    transition_generation: u64,
    current: VisualState,
    entrance: Option<EntranceStyle>,
    lid: BoxLifecycle,
    collapsing: bool,
    pulsing: bool,
    shaking: bool,
    ambient_field: bool,
    error_flash: bool,
}

impl<S: RenderSurface> StateAnimator<S> {
    /// Creates an engine over `surface` with default timings and a fixed
    /// effect-jitter seed.
    pub fn new(surface: S) -> Self {
        Self::with_config(surface, Timings::default(), 0)
    }

    /// Creates an engine with explicit timings and effect-jitter seed.
    pub fn with_config(surface: S, timings: Timings, effect_seed: u64) -> Self {
        Self {
            surface,
            timings,
            clock: 0,
            timers: TimerQueue::new(),
            effects: EffectSpawner::with_seed(effect_seed),
            queue: VecDeque::new(),
            submitted: 0,
            busy: false,
            transition_generation: 0,
            current: VisualState::Hidden,
            entrance: None,
            lid: BoxLifecycle::Closed,
            collapsing: false,
            pulsing: false,
            shaking: false,
            ambient_field: false,
            error_flash: false,
        }
    }

    // ------------------------------------------------------------------
    // Operations
    // ------------------------------------------------------------------

    /// Requests that `target` be displayed.
    ///
    /// Begins immediately when no transition is in flight, otherwise
    /// appends to the FIFO queue. Every queued request is eventually
    /// rendered, even if momentarily, in exact arrival order.
    pub fn request_state(&mut self, target: VisualState) -> RequestOutcome {
        self.submitted += 1;
        if self.busy {
            let request = AnimationRequest {
                target,
                enqueue_order: self.submitted,
            };
            self.queue.push_back(request);
            trace!(state = %target, queued = self.queue.len(), "request queued");
            return RequestOutcome::Queued;
        }
        self.begin_transition(target);
        RequestOutcome::Accepted
    }

    /// Wire-string front door for [`request_state`](Self::request_state).
    ///
    /// # Errors
    /// [`QcatError::InvalidState`] for a name outside the known set; the
    /// request is dropped without touching the queue.
    pub fn request_state_named(&mut self, name: &str) -> Result<RequestOutcome, QcatError> {
        match name.parse::<VisualState>() {
            Ok(state) => Ok(self.request_state(state)),
            Err(err) => {
                warn!(%err, "state request rejected");
                Err(err)
            }
        }
    }

    /// Starts opening the lid. No-op unless the lid is at rest Closed:
    /// the lifecycle never skips a step, so a lid that is Opening, Open or
    /// still Closing is left to finish where it is.
    pub fn open_box(&mut self) {
        match self.lid {
            BoxLifecycle::Closed => {
                self.lid = BoxLifecycle::Opening;
                self.timers
                    .schedule(self.clock + self.timings.lid_travel, TimerEvent::LidOpened);
                self.effects.spawn(
                    &self.surface,
                    EffectKind::Ring,
                    AnchorName::QuantumBox,
                    JitterBounds::NONE,
                    decoration::RING_TTL,
                    self.clock,
                );
                debug!("box opening");
            }
            state => trace!(lid = %state, "open_box ignored"),
        }
    }

    /// Starts closing the lid. Symmetric to [`open_box`](Self::open_box):
    /// no-op unless the lid is at rest Open.
    pub fn close_box(&mut self) {
        match self.lid {
            BoxLifecycle::Open => {
                self.lid = BoxLifecycle::Closing;
                self.timers
                    .schedule(self.clock + self.timings.lid_travel, TimerEvent::LidClosed);
                debug!("box closing");
            }
            state => trace!(lid = %state, "close_box ignored"),
        }
    }

    /// Runs the decorative measurement-collapse sequence: staggered waves
    /// plus a flash, the collapsing flag held for the configured duration,
    /// and the ambient field cleared at completion.
    ///
    /// Independent of the lid timeline and does not change the displayed
    /// state; the caller follows up with
    /// [`request_state`](Self::request_state) for the resolved outcome.
    pub fn perform_measurement_collapse(&mut self) {
        if self.collapsing {
            trace!("collapse already running");
            return;
        }
        self.collapsing = true;
        self.effects.spawn_batch(
            &self.surface,
            EffectKind::Wave,
            AnchorName::QuantumBox,
            decoration::WAVE_COUNT,
            decoration::WAVE_STAGGER,
            JitterBounds::NONE,
            decoration::WAVE_TTL,
            self.clock,
        );
        self.effects.spawn(
            &self.surface,
            EffectKind::Flash,
            AnchorName::QuantumBox,
            JitterBounds::NONE,
            decoration::FLASH_TTL,
            self.clock,
        );
        self.timers.schedule(
            self.clock + self.timings.collapse_duration,
            TimerEvent::CollapseDone,
        );
        debug!("measurement collapse started");
    }

    /// Fires the success-particle burst for a resolved outcome: a larger
    /// burst for Alive than for Dead, staggered starts. Other states have
    /// no burst and are ignored.
    pub fn celebrate_outcome(&mut self, outcome: VisualState) {
        let count = match outcome {
            VisualState::Alive => decoration::ALIVE_BURST_COUNT,
            VisualState::Dead => decoration::DEAD_BURST_COUNT,
            other => {
                trace!(state = %other, "no outcome burst");
                return;
            }
        };
        self.effects.spawn_batch(
            &self.surface,
            EffectKind::Particle,
            AnchorName::QuantumBox,
            count,
            decoration::BURST_STAGGER,
            JitterBounds::new(decoration::BURST_SPREAD, decoration::BURST_SPREAD, 0),
            decoration::BURST_TTL,
            self.clock,
        );
    }

    /// Flags a host-reported failure with a brief container shake.
    pub fn flag_error(&mut self) {
        if self.error_flash {
            return;
        }
        self.error_flash = true;
        self.timers.schedule(
            self.clock + self.timings.error_flash,
            TimerEvent::ErrorFlashEnd,
        );
    }

    /// Unconditionally returns the engine to its initial shape: Hidden,
    /// lid Closed, queue empty, every pending completion cancelled, every
    /// live effect dropped. Idempotent. The clock itself keeps running.
    pub fn reset(&mut self) {
        self.timers.clear();
        self.effects.clear();
        self.queue.clear();
        self.busy = false;
        self.transition_generation += 1;
        self.current = VisualState::Hidden;
        self.entrance = None;
        self.lid = BoxLifecycle::Closed;
        self.collapsing = false;
        self.pulsing = false;
        self.shaking = false;
        self.ambient_field = false;
        self.error_flash = false;
        debug!("animator reset");
    }

    /// Moves the logical clock forward by `dt` ticks, dispatching every
    /// completion that falls due on the way, in (due, schedule) order.
    pub fn advance(&mut self, dt: Ticks) {
        let target = self.clock.saturating_add(dt);
        while let Some((due, event)) = self.timers.pop_due(target) {
            self.clock = due;
            self.dispatch(event);
        }
        self.clock = target;
        self.effects.advance_to(target);
    }

    // ------------------------------------------------------------------
    // Observers
    // ------------------------------------------------------------------

    /// The currently displayed state.
    pub fn current_state(&self) -> VisualState {
        self.current
    }

    /// `true` once the lid is fully open.
    pub fn is_box_open(&self) -> bool {
        self.lid == BoxLifecycle::Open
    }

    /// The lid's own lifecycle state.
    pub fn lid(&self) -> BoxLifecycle {
        self.lid
    }

    /// `true` while a visual-state transition is in flight.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Number of requests waiting behind the in-flight transition.
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// The waiting requests, oldest first.
    pub fn queued(&self) -> impl Iterator<Item = &AnimationRequest> {
        self.queue.iter()
    }

    /// Current logical time.
    pub fn now(&self) -> Ticks {
        self.clock
    }

    /// `true` when nothing is in flight, queued or scheduled; a host may
    /// stop ticking until the next operation.
    pub fn is_idle(&self) -> bool {
        !self.busy && self.queue.is_empty() && self.timers.is_empty()
    }

    /// Entrance style of the current state, for the host to render.
    pub fn entrance_style(&self) -> Option<EntranceStyle> {
        self.entrance
    }

    /// `true` during the measurement-collapse sequence.
    pub fn is_collapsing(&self) -> bool {
        self.collapsing
    }

    /// `true` while the Dead-entrance shake runs.
    pub fn is_shaking(&self) -> bool {
        self.shaking
    }

    /// `true` once the settled Alive subject pulses.
    pub fn is_pulsing(&self) -> bool {
        self.pulsing
    }

    /// `true` while the superposition ambient field glows.
    pub fn has_ambient_field(&self) -> bool {
        self.ambient_field
    }

    /// `true` while the error flash shows.
    pub fn has_error_flash(&self) -> bool {
        self.error_flash
    }

    /// The decorative-effect pool, for the host to draw.
    pub fn effects(&self) -> &EffectSpawner {
        &self.effects
    }

    /// The presentation surface the engine was built over.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn begin_transition(&mut self, target: VisualState) {
        self.busy = true;
        self.transition_generation += 1;
        let generation = self.transition_generation;
        // Hide the current representation and drop its decoration flags;
        // stale decoration timers die on the generation check.
        self.entrance = None;
        self.pulsing = false;
        self.shaking = false;
        self.ambient_field = false;

        match target {
            VisualState::Alive => {
                self.entrance = Some(EntranceStyle::BounceIn);
                self.timers.schedule(
                    self.clock + self.timings.pulse_delay,
                    TimerEvent::PulseStart { generation },
                );
            }
            VisualState::Dead => {
                self.entrance = Some(EntranceStyle::FadeIn);
                self.timers.schedule(
                    self.clock + self.timings.shake_delay,
                    TimerEvent::ShakeStart { generation },
                );
            }
            VisualState::Superposition => {
                self.entrance = Some(EntranceStyle::FadeIn);
                self.ambient_field = true;
                self.effects.spawn_batch(
                    &self.surface,
                    EffectKind::FieldLine,
                    AnchorName::ParticleLayer,
                    decoration::FIELD_LINE_COUNT,
                    decoration::FIELD_LINE_STAGGER,
                    JitterBounds::new(
                        0.0,
                        decoration::FIELD_LINE_SPREAD,
                        decoration::FIELD_LINE_MAX_DELAY,
                    ),
                    decoration::FIELD_LINE_TTL,
                    self.clock,
                );
            }
            VisualState::Hidden => {}
        }

        self.current = target;
        self.timers.schedule(
            self.clock + self.timings.transition_hold,
            TimerEvent::TransitionDone,
        );
        debug!(state = %target, "transition started");
    }

    fn dispatch(&mut self, event: TimerEvent) {
        match event {
            TimerEvent::TransitionDone => {
                self.busy = false;
                debug!(state = %self.current, "transition complete");
                if let Some(request) = self.queue.pop_front() {
                    self.begin_transition(request.target);
                }
            }
            TimerEvent::LidOpened => {
                self.lid = BoxLifecycle::Open;
                debug!("box open");
            }
            TimerEvent::LidClosed => {
                self.lid = BoxLifecycle::Closed;
                debug!("box closed");
            }
            TimerEvent::CollapseDone => {
                self.collapsing = false;
                self.ambient_field = false;
                debug!("measurement collapse complete");
            }
            TimerEvent::PulseStart { generation } => {
                if generation == self.transition_generation {
                    self.pulsing = true;
                }
            }
            TimerEvent::ShakeStart { generation } => {
                if generation == self.transition_generation {
                    self.shaking = true;
                    self.timers.schedule(
                        self.clock + self.timings.shake_duration,
                        TimerEvent::ShakeEnd { generation },
                    );
                }
            }
            TimerEvent::ShakeEnd { generation } => {
                if generation == self.transition_generation {
                    self.shaking = false;
                }
            }
            TimerEvent::ErrorFlashEnd => {
                self.error_flash = false;
            }
        }
    }
}
