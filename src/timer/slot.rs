//! Single-slot cancellable timer.
//!
//! The slot holds at most one pending timer. Scheduling into an occupied
//! slot cancels the previous timer first, so there is never a queue and a
//! cancelled timer can never fire.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque reference to a scheduled timer.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct TimerHandle(u64);

impl TimerHandle {
    pub fn as_raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for TimerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

/// A scheduled callback: what to do, and when.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingTimer<A> {
    pub handle: TimerHandle,
    pub due_ms: u64,
    pub action: A,
}

/// Holder of the one live timer.
///
/// # Example
///
/// ```rust
/// use rendersim::timer::TimerSlot;
///
/// let mut slot = TimerSlot::new();
/// let (first, _) = slot.schedule(400, "first");
/// let (second, cancelled) = slot.schedule(800, "second");
///
/// assert_ne!(first, second);
/// assert_eq!(cancelled.unwrap().handle, first);
///
/// assert!(slot.take_due(799).is_none());
/// assert_eq!(slot.take_due(800).unwrap().action, "second");
/// assert!(!slot.is_pending());
/// ```
#[derive(Debug)]
pub struct TimerSlot<A> {
    pending: Option<PendingTimer<A>>,
    next_id: u64,
}

impl<A> TimerSlot<A> {
    pub fn new() -> Self {
        Self {
            pending: None,
            next_id: 1,
        }
    }

    /// Install a timer due at `due_ms`, cancelling any existing one.
    ///
    /// Returns the new handle and the timer that was cancelled, if any.
    pub fn schedule(&mut self, due_ms: u64, action: A) -> (TimerHandle, Option<PendingTimer<A>>) {
        let cancelled = self.pending.take();
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.pending = Some(PendingTimer {
            handle,
            due_ms,
            action,
        });
        (handle, cancelled)
    }

    /// Remove the pending timer without firing it.
    pub fn cancel(&mut self) -> Option<PendingTimer<A>> {
        self.pending.take()
    }

    /// Remove and return the pending timer if it is due at `now_ms`.
    pub fn take_due(&mut self, now_ms: u64) -> Option<PendingTimer<A>> {
        match &self.pending {
            Some(timer) if timer.due_ms <= now_ms => self.pending.take(),
            _ => None,
        }
    }

    pub fn deadline(&self) -> Option<u64> {
        self.pending.as_ref().map(|t| t.due_ms)
    }

    pub fn handle(&self) -> Option<TimerHandle> {
        self.pending.as_ref().map(|t| t.handle)
    }

    pub fn pending(&self) -> Option<&PendingTimer<A>> {
        self.pending.as_ref()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl<A> Default for TimerSlot<A> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_slot_is_empty() {
        let slot: TimerSlot<()> = TimerSlot::new();
        assert!(!slot.is_pending());
        assert_eq!(slot.deadline(), None);
        assert_eq!(slot.handle(), None);
    }

    #[test]
    fn schedule_into_empty_slot_cancels_nothing() {
        let mut slot = TimerSlot::new();
        let (handle, cancelled) = slot.schedule(100, ());

        assert!(cancelled.is_none());
        assert_eq!(slot.handle(), Some(handle));
        assert_eq!(slot.deadline(), Some(100));
    }

    #[test]
    fn schedule_replaces_pending_timer() {
        let mut slot = TimerSlot::new();
        slot.schedule(100, 'a');
        let (_, cancelled) = slot.schedule(50, 'b');

        assert_eq!(cancelled.map(|t| t.action), Some('a'));
        assert_eq!(slot.pending().map(|t| t.action), Some('b'));
        assert_eq!(slot.deadline(), Some(50));
    }

    #[test]
    fn handles_are_never_reused() {
        let mut slot = TimerSlot::new();
        let (a, _) = slot.schedule(1, ());
        slot.cancel();
        let (b, _) = slot.schedule(1, ());
        assert_ne!(a, b);
        assert!(b.as_raw() > a.as_raw());
    }

    #[test]
    fn take_due_fires_at_exact_deadline() {
        let mut slot = TimerSlot::new();
        slot.schedule(300, ());

        assert!(slot.take_due(299).is_none());
        assert!(slot.is_pending());
        assert!(slot.take_due(300).is_some());
        assert!(slot.take_due(10_000).is_none());
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let mut slot = TimerSlot::new();
        slot.schedule(300, ());
        assert!(slot.cancel().is_some());
        assert!(slot.take_due(u64::MAX).is_none());
    }
}
