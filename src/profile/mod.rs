//! Per-architecture latency and behavior parameters.
//!
//! Each [`RenderMode`] has exactly one [`ModeProfile`] in a [`ProfileTable`].
//! The engine only ever reads profiles; it never changes them.

pub mod error;
mod table;

pub use error::ProfileError;
pub use table::ProfileTable;

use crate::core::RenderMode;
use serde::{Deserialize, Serialize};

/// How an in-app navigation behaves.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationStyle {
    /// The whole document is discarded and fetched again.
    FullReload,
    /// The address changes at once, data for the new page arrives later.
    PartialFetch,
    /// The new page is already available; nothing is fetched.
    Instant,
}

/// Latency profile of one render mode.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeProfile {
    pub mode: RenderMode,

    /// Time from a reload until content is visible.
    pub initial_load_delay_ms: u64,

    pub navigation_style: NavigationStyle,

    /// Delay before a navigated-to page is visible. Zero for `Instant`.
    #[serde(default)]
    pub navigation_delay_ms: u64,

    /// Whether initial load shows the "script executing" indicator instead of
    /// a blank viewport. Must be `true` for SPA and `false` for every other mode.
    #[serde(default)]
    pub shows_client_render_spinner: bool,
}

impl ModeProfile {
    /// Check the shape rules a profile must satisfy for its mode.
    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.navigation_style == NavigationStyle::FullReload && self.mode != RenderMode::Mpa {
            return Err(ProfileError::FullReloadOutsideMpa(self.mode));
        }

        if self.navigation_style == NavigationStyle::Instant && self.navigation_delay_ms != 0 {
            return Err(ProfileError::InstantWithDelay {
                mode: self.mode,
                delay_ms: self.navigation_delay_ms,
            });
        }

        if self.shows_client_render_spinner && self.mode != RenderMode::Spa {
            return Err(ProfileError::SpinnerOutsideSpa(self.mode));
        }

        if self.mode == RenderMode::Spa && !self.shows_client_render_spinner {
            return Err(ProfileError::SpinnerMissingForSpa);
        }

        Ok(())
    }

    /// Descriptive comparison labels for this profile's mode.
    pub fn traits(&self) -> ModeTraits {
        ModeTraits::of(self.mode)
    }
}

/// Qualitative labels a presentation layer shows next to the simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ModeTraits {
    pub first_load: &'static str,
    pub navigation: &'static str,
    pub seo: &'static str,
    pub server_load: &'static str,
}

impl ModeTraits {
    pub fn of(mode: RenderMode) -> Self {
        match mode {
            RenderMode::Mpa => Self {
                first_load: "Average",
                navigation: "Slow (full reload)",
                seo: "Strong",
                server_load: "Low",
            },
            RenderMode::Spa => Self {
                first_load: "Slow (waits for script execution)",
                navigation: "Fast (partial update)",
                seo: "Needs extra work",
                server_load: "Low (API only)",
            },
            RenderMode::Ssr => Self {
                first_load: "Fast (HTML arrives rendered)",
                navigation: "Fast (partial update)",
                seo: "Strong",
                server_load: "High (renders per request)",
            },
            RenderMode::Ssg => Self {
                first_load: "Fastest (prebuilt HTML)",
                navigation: "Instant",
                seo: "Strong",
                server_load: "Lowest (static files)",
            },
        }
    }
}
