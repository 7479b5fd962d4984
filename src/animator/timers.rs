// src/animator/timers.rs

use crate::core::Ticks;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Completion events the animator schedules on its logical timeline.
///
/// Events that decorate a specific transition carry that transition's
/// generation token; the dispatcher drops them if a newer transition has
/// started since, which is what makes `reset` and rapid re-requests safe
/// without true preemption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TimerEvent {
    /// The hold period of the in-flight transition elapsed.
    TransitionDone,
    /// The lid finished travelling open.
    LidOpened,
    /// The lid finished travelling shut.
    LidClosed,
    /// The measurement-collapse sequence finished.
    CollapseDone,
    /// The settled Alive subject starts its idle pulse.
    PulseStart { generation: u64 },
    /// The container starts shaking after a Dead entrance.
    ShakeStart { generation: u64 },
    /// The container stops shaking.
    ShakeEnd { generation: u64 },
    /// The error flash clears.
    ErrorFlashEnd,
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    due: Ticks,
    seq: u64,
    event: TimerEvent,
}

// Ordering is (due, seq) only; seq breaks ties so same-tick events fire in
// schedule order.
impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.due.cmp(&other.due).then(self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.seq == other.seq
    }
}

impl Eq for Entry {}

/// Min-heap of scheduled completions, the single suspension mechanism of
/// the engine.
#[derive(Debug, Default)]
pub(crate) struct TimerQueue {
    heap: BinaryHeap<Reverse<Entry>>,
    seq: u64,
}

impl TimerQueue {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Schedules `event` to fire at `due`.
    pub(crate) fn schedule(&mut self, due: Ticks, event: TimerEvent) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Reverse(Entry { due, seq, event }));
    }

    /// Pops the earliest event due at or before `now`, if any, together
    /// with its due tick.
    pub(crate) fn pop_due(&mut self, now: Ticks) -> Option<(Ticks, TimerEvent)> {
        if matches!(self.heap.peek(), Some(Reverse(entry)) if entry.due <= now) {
            self.heap.pop().map(|Reverse(entry)| (entry.due, entry.event))
        } else {
            None
        }
    }

    /// Cancels every pending completion.
    pub(crate) fn clear(&mut self) {
        self.heap.clear();
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_due_order_with_fifo_ties() {
        let mut timers = TimerQueue::new();
        timers.schedule(500, TimerEvent::TransitionDone);
        timers.schedule(300, TimerEvent::LidOpened);
        timers.schedule(500, TimerEvent::CollapseDone);

        assert_eq!(timers.pop_due(1_000), Some((300, TimerEvent::LidOpened)));
        assert_eq!(timers.pop_due(1_000), Some((500, TimerEvent::TransitionDone)));
        assert_eq!(timers.pop_due(1_000), Some((500, TimerEvent::CollapseDone)));
        assert_eq!(timers.pop_due(1_000), None);
    }

    #[test]
    fn nothing_fires_before_its_due_tick() {
        let mut timers = TimerQueue::new();
        timers.schedule(600, TimerEvent::LidOpened);
        assert_eq!(timers.pop_due(599), None);
        assert_eq!(timers.pop_due(600), Some((600, TimerEvent::LidOpened)));
    }

    #[test]
    fn clear_cancels_everything() {
        let mut timers = TimerQueue::new();
        timers.schedule(100, TimerEvent::ErrorFlashEnd);
        timers.schedule(200, TimerEvent::LidClosed);
        timers.clear();
        assert!(timers.is_empty());
        assert_eq!(timers.pop_due(Ticks::MAX), None);
    }
}
