//! Phase transition history.
//!
//! Provides immutable tracking of the phases a simulation passed through,
//! stamped with both simulated and wall-clock time.

use super::mode::{PageId, RenderMode};
use super::phase::Phase;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single phase change.
///
/// `page` is the page addressed once the transition has been applied, so a
/// full-reload navigation shows the outgoing page on its `WhiteOut` entry and
/// the target page on the final `Settled` entry.
///
/// # Example
///
/// ```rust
/// use rendersim::core::{PageId, Phase, PhaseTransition, RenderMode};
/// use chrono::Utc;
///
/// let transition = PhaseTransition {
///     from: Phase::Settled,
///     to: Phase::WhiteOut,
///     mode: RenderMode::Mpa,
///     page: PageId::Home,
///     at_ms: 0,
///     timestamp: Utc::now(),
/// };
/// assert!(transition.leaves_settled());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhaseTransition {
    /// The phase being left
    pub from: Phase,
    /// The phase being entered
    pub to: Phase,
    /// Active render mode when the transition happened
    pub mode: RenderMode,
    /// Page addressed after the transition
    pub page: PageId,
    /// Simulated time of the transition, in milliseconds
    pub at_ms: u64,
    /// Wall-clock time the transition was recorded
    pub timestamp: DateTime<Utc>,
}

impl PhaseTransition {
    pub fn leaves_settled(&self) -> bool {
        self.from == Phase::Settled && self.to != Phase::Settled
    }

    pub fn returns_to_settled(&self) -> bool {
        self.from != Phase::Settled && self.to == Phase::Settled
    }
}

/// Ordered history of phase transitions.
///
/// `record` returns a new history with the transition added and leaves the
/// original untouched; `push` appends in place.
///
/// # Example
///
/// ```rust
/// use rendersim::core::{PageId, Phase, PhaseHistory, PhaseTransition, RenderMode};
/// use chrono::Utc;
///
/// let history = PhaseHistory::new();
/// let history = history.record(PhaseTransition {
///     from: Phase::Settled,
///     to: Phase::Navigating,
///     mode: RenderMode::Ssr,
///     page: PageId::About,
///     at_ms: 0,
///     timestamp: Utc::now(),
/// });
/// let history = history.record(PhaseTransition {
///     from: Phase::Navigating,
///     to: Phase::Settled,
///     mode: RenderMode::Ssr,
///     page: PageId::About,
///     at_ms: 400,
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(
///     history.path(),
///     vec![Phase::Settled, Phase::Navigating, Phase::Settled]
/// );
/// assert_eq!(history.elapsed_ms(), Some(400));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PhaseHistory {
    transitions: Vec<PhaseTransition>,
}

impl PhaseHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// Does not mutate the existing history.
    pub fn record(&self, transition: PhaseTransition) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Append a transition in place.
    pub fn push(&mut self, transition: PhaseTransition) {
        self.transitions.push(transition);
    }

    /// Get the path of phases traversed.
    ///
    /// Returns the initial phase, then the `to` phase of each transition.
    pub fn path(&self) -> Vec<Phase> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.first() {
            path.push(first.from);
        }
        path.extend(self.transitions.iter().map(|t| t.to));
        path
    }

    /// Simulated time between the first and last transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn elapsed_ms(&self) -> Option<u64> {
        let (first, last) = (self.transitions.first()?, self.transitions.last()?);
        Some(last.at_ms.saturating_sub(first.at_ms))
    }

    /// Wall-clock time between the first and last recorded transition.
    pub fn wall_duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.first()?, self.transitions.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Get all transitions.
    pub fn transitions(&self) -> &[PhaseTransition] {
        &self.transitions
    }

    /// Get the most recent transition.
    pub fn last(&self) -> Option<&PhaseTransition> {
        self.transitions.last()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transition(from: Phase, to: Phase, at_ms: u64) -> PhaseTransition {
        PhaseTransition {
            from,
            to,
            mode: RenderMode::Mpa,
            page: PageId::Home,
            at_ms,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history = PhaseHistory::new();
        assert!(history.is_empty());
        assert!(history.path().is_empty());
        assert_eq!(history.elapsed_ms(), None);
        assert!(history.wall_duration().is_none());
    }

    #[test]
    fn record_does_not_mutate_original() {
        let history = PhaseHistory::new();
        let updated = history.record(transition(Phase::Settled, Phase::WhiteOut, 0));

        assert_eq!(history.len(), 0);
        assert_eq!(updated.len(), 1);
    }

    #[test]
    fn push_appends_in_place() {
        let mut history = PhaseHistory::new();
        history.push(transition(Phase::Settled, Phase::Navigating, 0));
        history.push(transition(Phase::Navigating, Phase::Settled, 400));

        assert_eq!(history.len(), 2);
        assert_eq!(history.last().map(|t| t.at_ms), Some(400));
        assert_eq!(
            history.path(),
            vec![Phase::Settled, Phase::Navigating, Phase::Settled]
        );
    }

    #[test]
    fn path_includes_initial_phase() {
        let history = PhaseHistory::new()
            .record(transition(Phase::Settled, Phase::WhiteOut, 0))
            .record(transition(Phase::WhiteOut, Phase::Settled, 800));

        assert_eq!(
            history.path(),
            vec![Phase::Settled, Phase::WhiteOut, Phase::Settled]
        );
    }

    #[test]
    fn elapsed_uses_simulated_time() {
        let history = PhaseHistory::new()
            .record(transition(Phase::Settled, Phase::InitialLoading, 100))
            .record(transition(Phase::InitialLoading, Phase::Settled, 1600));

        assert_eq!(history.elapsed_ms(), Some(1500));
        assert!(history.wall_duration().is_some());
    }

    #[test]
    fn transition_direction_helpers() {
        let out = transition(Phase::Settled, Phase::Navigating, 0);
        let back = transition(Phase::Navigating, Phase::Settled, 400);
        let swap = transition(Phase::WhiteOut, Phase::InitialLoading, 0);

        assert!(out.leaves_settled());
        assert!(!out.returns_to_settled());
        assert!(back.returns_to_settled());
        assert!(!swap.leaves_settled());
        assert!(!swap.returns_to_settled());
    }

    #[test]
    fn history_serializes_correctly() {
        let history = PhaseHistory::new().record(transition(Phase::Settled, Phase::WhiteOut, 0));
        let json = serde_json::to_string(&history).unwrap();
        let back: PhaseHistory = serde_json::from_str(&json).unwrap();
        assert_eq!(back, history);
    }
}
