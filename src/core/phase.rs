//! Visual phase of the simulated page.
//!
//! A phase is the transient visual state of the viewport, distinct from the
//! page being addressed. Modelling it as a single enum makes combinations such
//! as "white-out while initial-loading" unrepresentable.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Current visual phase of the simulation.
///
/// # Example
///
/// ```rust
/// use rendersim::core::Phase;
///
/// assert!(Phase::Settled.renders_content());
/// assert!(!Phase::WhiteOut.renders_content());
/// assert_eq!(Phase::Navigating.name(), "Navigating");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum Phase {
    /// Content is visible; no transition in flight.
    #[default]
    Settled,
    /// First load of a client- or server-rendered site.
    InitialLoading,
    /// Viewport is blank because a full page load discarded the document.
    WhiteOut,
    /// Address already changed, data for the new page still being fetched.
    Navigating,
}

impl Phase {
    /// Get the phase's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Settled => "Settled",
            Self::InitialLoading => "InitialLoading",
            Self::WhiteOut => "WhiteOut",
            Self::Navigating => "Navigating",
        }
    }

    /// `Settled` is the only phase in which page content is rendered.
    pub fn renders_content(&self) -> bool {
        matches!(self, Self::Settled)
    }

    /// Whether a timer is expected to bring this phase back to `Settled`.
    pub fn is_transient(&self) -> bool {
        !self.renders_content()
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_phase_is_settled() {
        assert_eq!(Phase::default(), Phase::Settled);
    }

    #[test]
    fn only_settled_renders_content() {
        assert!(Phase::Settled.renders_content());
        assert!(!Phase::InitialLoading.renders_content());
        assert!(!Phase::WhiteOut.renders_content());
        assert!(!Phase::Navigating.renders_content());
    }

    #[test]
    fn transient_is_complement_of_settled() {
        assert!(!Phase::Settled.is_transient());
        assert!(Phase::WhiteOut.is_transient());
    }

    #[test]
    fn phase_serializes_correctly() {
        let json = serde_json::to_string(&Phase::WhiteOut).unwrap();
        assert_eq!(json, "\"WhiteOut\"");
        let back: Phase = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Phase::WhiteOut);
    }
}
