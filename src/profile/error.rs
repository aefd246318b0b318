//! Profile table validation errors.

use crate::core::RenderMode;
use thiserror::Error;

/// Errors that can occur when building a custom profile table
#[derive(Debug, Error)]
pub enum ProfileError {
    /// A render mode has no profile
    #[error("No profile defined for render mode {0}")]
    MissingMode(RenderMode),

    /// A render mode has more than one profile
    #[error("Render mode {0} is defined more than once")]
    DuplicateMode(RenderMode),

    /// Full-reload navigation is reserved for multi-page applications
    #[error("Render mode {0} cannot use full-reload navigation, only MPA does")]
    FullReloadOutsideMpa(RenderMode),

    /// Instant navigation schedules no timer, so it cannot carry a delay
    #[error("Render mode {mode} uses instant navigation but sets a {delay_ms}ms navigation delay")]
    InstantWithDelay { mode: RenderMode, delay_ms: u64 },

    /// Only client-side rendering executes a script before first paint
    #[error("Render mode {0} cannot show the client-render spinner, only SPA does")]
    SpinnerOutsideSpa(RenderMode),

    /// Client-side rendering always executes a script before first paint
    #[error("SPA must show the client-render spinner during its initial load")]
    SpinnerMissingForSpa,

    /// Profile JSON could not be parsed
    #[error("Invalid profile table: {0}")]
    Malformed(#[from] serde_json::Error),
}
