// tests/animator_tests.rs

// Import necessary types from the qcat crate
use qcat::{
    Anchor, AnchorName, BoxLifecycle, QcatError, RequestOutcome, StateAnimator, StaticSurface,
    Ticks, Timings, VisualState,
};

const HOLD: Ticks = 500;
const LID_TRAVEL: Ticks = 600;
const COLLAPSE: Ticks = 800;

// Helper building the reference surface used across scenarios
fn full_surface() -> StaticSurface {
    StaticSurface::new()
        .with_anchor(AnchorName::QuantumBox, Anchor::new(0.0, 0.0, 300.0, 300.0))
        .with_anchor(AnchorName::BoxLid, Anchor::new(0.0, -20.0, 300.0, 40.0))
        .with_anchor(AnchorName::CatContainer, Anchor::new(75.0, 75.0, 150.0, 150.0))
        .with_anchor(AnchorName::ParticleLayer, Anchor::new(0.0, 0.0, 300.0, 300.0))
}

fn animator() -> StateAnimator<StaticSurface> {
    StateAnimator::new(full_surface())
}

#[test]
fn back_to_back_requests_render_in_submission_order() {
    let mut a = animator();
    let submitted = [
        VisualState::Superposition,
        VisualState::Alive,
        VisualState::Dead,
        VisualState::Hidden,
        VisualState::Alive,
    ];

    assert_eq!(a.request_state(submitted[0]), RequestOutcome::Accepted);
    for target in &submitted[1..] {
        assert_eq!(a.request_state(*target), RequestOutcome::Queued);
    }

    // Step one hold window at a time and record what was rendered.
    let mut rendered = vec![a.current_state()];
    while a.is_busy() || a.queue_len() > 0 {
        a.advance(HOLD);
        if rendered.last() != Some(&a.current_state()) {
            rendered.push(a.current_state());
        }
    }

    assert_eq!(rendered, submitted.to_vec());
    assert_eq!(a.current_state(), VisualState::Alive);
    assert_eq!(a.queue_len(), 0);
}

#[test]
fn alive_then_dead_before_completion_ends_dead_with_empty_queue() {
    let mut a = animator();
    assert_eq!(a.request_state(VisualState::Alive), RequestOutcome::Accepted);
    assert_eq!(a.request_state(VisualState::Dead), RequestOutcome::Queued);

    // The intermediate Alive rendering is not skipped.
    assert_eq!(a.current_state(), VisualState::Alive);
    a.advance(HOLD);
    assert_eq!(a.current_state(), VisualState::Dead);
    a.advance(HOLD);
    assert_eq!(a.current_state(), VisualState::Dead);
    assert_eq!(a.queue_len(), 0);
    assert!(!a.is_busy());
}

#[test]
fn double_open_box_produces_exactly_one_cycle() {
    let mut a = animator();
    a.open_box();
    a.advance(LID_TRAVEL);
    assert!(a.is_box_open());

    // Two more calls while already open: the lid must not re-enter
    // Opening, so it is still Open immediately and after any advance.
    a.open_box();
    a.open_box();
    assert_eq!(a.lid(), BoxLifecycle::Open);
    a.advance(LID_TRAVEL);
    assert!(a.is_box_open());
}

#[test]
fn reset_is_total_and_idempotent() {
    let mut a = animator();
    a.request_state(VisualState::Superposition);
    a.request_state(VisualState::Dead);
    a.open_box();
    a.advance(LID_TRAVEL);
    a.perform_measurement_collapse();

    for _ in 0..2 {
        a.reset();
        assert_eq!(a.current_state(), VisualState::Hidden);
        assert!(!a.is_box_open());
        assert_eq!(a.queue_len(), 0);
        assert!(!a.is_busy());
        assert!(!a.is_collapsing());
        assert_eq!(a.effects().live_count(), 0);
        assert!(a.is_idle());
    }
}

#[test]
fn invalid_wire_name_leaves_engine_untouched() {
    let mut a = animator();
    a.request_state(VisualState::Superposition);

    let err = a.request_state_named("schroedinger").unwrap_err();
    assert!(matches!(err, QcatError::InvalidState { .. }));
    assert_eq!(a.queue_len(), 0);
    assert_eq!(a.current_state(), VisualState::Superposition);

    // Valid wire names still pass through.
    assert_eq!(
        a.request_state_named("dead").expect("known state"),
        RequestOutcome::Queued
    );
}

#[test]
fn measurement_sequence_mirrors_the_experiment_flow() {
    // The flow the UI controller runs: open, collapse, then show the
    // resolved outcome and celebrate it.
    let mut a = animator();
    a.request_state(VisualState::Superposition);
    a.advance(HOLD);

    a.open_box();
    a.advance(LID_TRAVEL);
    assert!(a.is_box_open());

    a.perform_measurement_collapse();
    assert!(a.is_collapsing());
    a.advance(COLLAPSE);
    assert!(!a.is_collapsing());
    assert!(!a.has_ambient_field());

    a.request_state(VisualState::Alive);
    a.celebrate_outcome(VisualState::Alive);
    a.advance(HOLD);
    assert_eq!(a.current_state(), VisualState::Alive);
    assert!(a.effects().live_count() > 0);
}

#[test]
fn collapse_never_changes_the_displayed_state() {
    let mut a = animator();
    a.request_state(VisualState::Superposition);
    a.advance(HOLD);

    a.perform_measurement_collapse();
    a.advance(COLLAPSE);
    assert_eq!(a.current_state(), VisualState::Superposition);
}

#[test]
fn effects_survive_on_an_anchorless_surface_as_no_ops() {
    // A host that exposes no anchors loses every decoration but the
    // sequencing semantics are unaffected.
    let mut a = StateAnimator::new(StaticSurface::new());
    a.request_state(VisualState::Superposition);
    assert_eq!(a.effects().live_count(), 0);

    a.open_box();
    a.perform_measurement_collapse();
    a.celebrate_outcome(VisualState::Alive);
    assert_eq!(a.effects().live_count(), 0);

    a.advance(LID_TRAVEL + COLLAPSE);
    assert!(a.is_box_open());
    assert!(!a.is_collapsing());
    assert_eq!(a.current_state(), VisualState::Superposition);
}

#[test]
fn equal_seeds_reproduce_the_same_decoration_layout() {
    let run = |seed: u64| {
        let mut a = StateAnimator::with_config(full_surface(), Timings::default(), seed);
        a.request_state(VisualState::Superposition);
        a.effects()
            .active(Ticks::MAX / 2)
            .map(|e| (e.x, e.y, e.starts_at))
            .collect::<Vec<_>>()
    };
    assert_eq!(run(99), run(99));
    assert_ne!(run(99), run(100));
}

#[test]
fn queue_is_unbounded_and_fully_drains() {
    let mut a = animator();
    a.request_state(VisualState::Alive);
    for i in 0..50 {
        let target = if i % 2 == 0 {
            VisualState::Dead
        } else {
            VisualState::Alive
        };
        assert_eq!(a.request_state(target), RequestOutcome::Queued);
    }
    assert_eq!(a.queue_len(), 50);

    a.advance(HOLD * 51);
    assert_eq!(a.queue_len(), 0);
    assert!(!a.is_busy());
    // 50 queued, even-indexed last (i = 49 is odd -> Alive).
    assert_eq!(a.current_state(), VisualState::Alive);
}
