//! Builder for configuring a simulation.

use crate::core::RenderMode;
use crate::engine::error::BuildError;
use crate::engine::machine::Simulation;
use crate::profile::ProfileTable;
use crate::timer::SimClock;

/// Builder for constructing simulations with a fluent API.
///
/// Every setting is optional; `SimulationBuilder::new().build()` is
/// equivalent to [`Simulation::new`].
///
/// # Example
///
/// ```rust
/// use rendersim::core::{Phase, RenderMode};
/// use rendersim::engine::SimulationBuilder;
///
/// let json = r#"[
///     {"mode": "mpa", "initial_load_delay_ms": 2000, "navigation_style": "full_reload", "navigation_delay_ms": 1600},
///     {"mode": "spa", "initial_load_delay_ms": 3000, "navigation_style": "partial_fetch", "navigation_delay_ms": 800, "shows_client_render_spinner": true},
///     {"mode": "ssr", "initial_load_delay_ms": 1200, "navigation_style": "partial_fetch", "navigation_delay_ms": 800},
///     {"mode": "ssg", "initial_load_delay_ms": 600, "navigation_style": "instant"}
/// ]"#;
///
/// let mut sim = SimulationBuilder::new()
///     .initial_mode(RenderMode::Ssr)
///     .profiles_json(json)
///     .build()
///     .unwrap();
///
/// sim.reload();
/// sim.advance_by(1200);
/// assert_eq!(sim.phase(), Phase::Settled);
/// ```
#[derive(Debug, Clone)]
pub struct SimulationBuilder {
    initial_mode: RenderMode,
    profiles: Option<ProfileTable>,
    profiles_json: Option<String>,
    record_history: bool,
    start_ms: u64,
}

impl SimulationBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial_mode: RenderMode::Mpa,
            profiles: None,
            profiles_json: None,
            record_history: true,
            start_ms: 0,
        }
    }

    /// Set the mode the simulation starts in (default MPA).
    pub fn initial_mode(mut self, mode: RenderMode) -> Self {
        self.initial_mode = mode;
        self
    }

    /// Use an already-validated profile table.
    pub fn profiles(mut self, table: ProfileTable) -> Self {
        self.profiles = Some(table);
        self
    }

    /// Load the profile table from JSON; validated in `build()`.
    pub fn profiles_json(mut self, json: impl Into<String>) -> Self {
        self.profiles_json = Some(json.into());
        self
    }

    /// Turn phase history recording on or off (default on).
    pub fn record_history(mut self, enabled: bool) -> Self {
        self.record_history = enabled;
        self
    }

    /// Simulated time the clock starts at.
    pub fn start_at(mut self, start_ms: u64) -> Self {
        self.start_ms = start_ms;
        self
    }

    /// Build the simulation.
    /// Returns an error if the profile configuration is invalid.
    pub fn build(self) -> Result<Simulation, BuildError> {
        let profiles = match (self.profiles, self.profiles_json) {
            (Some(_), Some(_)) => return Err(BuildError::ConflictingProfiles),
            (Some(table), None) => table,
            (None, Some(json)) => ProfileTable::from_json(&json)?,
            (None, None) => ProfileTable::builtin(),
        };

        tracing::debug!(
            mode = %self.initial_mode,
            start_ms = self.start_ms,
            record_history = self.record_history,
            "simulation built"
        );

        Ok(Simulation::from_parts(
            profiles,
            self.initial_mode,
            SimClock::at(self.start_ms),
            self.record_history,
        ))
    }
}

impl Default for SimulationBuilder {
    fn default() -> Self {
        Self::new()
    }
}
