//! Logical-time constants shared across the engine.

/// Logical time-unit of the engine's cooperative timeline.
///
/// Every duration in the crate is denominated in ticks; the host decides
/// what a tick means on its wall clock (the reference presentation surface
/// treats one tick as one millisecond).
pub type Ticks = u64;

/// Durations of the serialized animation sequences.
pub mod timing {
    use super::Ticks;

    /// Hold time of a visual-state transition before the next queued
    /// request may begin.
    pub const TRANSITION_HOLD: Ticks = 500;
    /// Travel time of the container lid, one direction.
    pub const LID_TRAVEL: Ticks = 600;
    /// Length of the decorative measurement-collapse sequence.
    pub const COLLAPSE_DURATION: Ticks = 800;
    /// Delay before the settled Alive subject starts its idle pulse.
    pub const PULSE_DELAY: Ticks = 600;
    /// Delay before the container shakes after a Dead entrance.
    pub const SHAKE_DELAY: Ticks = 300;
    /// How long the container shake lasts.
    pub const SHAKE_DURATION: Ticks = 500;
    /// How long the error flash stays on the container.
    pub const ERROR_FLASH: Ticks = 500;
}

/// Parameters of the decorative effect batches.
pub mod decoration {
    use super::Ticks;

    /// Field lines spawned for the Superposition ambient field.
    pub const FIELD_LINE_COUNT: usize = 5;
    /// Stagger between consecutive field-line starts.
    pub const FIELD_LINE_STAGGER: Ticks = 200;
    /// Field-line lifetime.
    pub const FIELD_LINE_TTL: Ticks = 4_000;
    /// Extra random start delay applied per field line.
    pub const FIELD_LINE_MAX_DELAY: Ticks = 2_000;
    /// Vertical spread of field lines around their anchor.
    pub const FIELD_LINE_SPREAD: f64 = 50.0;

    /// Waves emitted by the measurement collapse.
    pub const WAVE_COUNT: usize = 3;
    /// Stagger between consecutive collapse waves.
    pub const WAVE_STAGGER: Ticks = 200;
    /// Collapse-wave lifetime.
    pub const WAVE_TTL: Ticks = 1_500;

    /// Collapse-flash lifetime.
    pub const FLASH_TTL: Ticks = 300;
    /// Lid-opening ring lifetime.
    pub const RING_TTL: Ticks = 1_000;

    /// Particles in the Alive outcome burst.
    pub const ALIVE_BURST_COUNT: usize = 20;
    /// Particles in the Dead outcome burst.
    pub const DEAD_BURST_COUNT: usize = 15;
    /// Stagger between consecutive burst particles.
    pub const BURST_STAGGER: Ticks = 30;
    /// Burst-particle lifetime.
    pub const BURST_TTL: Ticks = 1_000;
    /// Positional spread of burst particles around their anchor.
    pub const BURST_SPREAD: f64 = 75.0;
}
