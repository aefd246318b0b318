//! The timed state machine.

use crate::core::{PageId, Phase, PhaseHistory, PhaseTransition, RenderMode};
use crate::engine::snapshot::{SessionId, Snapshot};
use crate::profile::{ModeProfile, NavigationStyle, ProfileTable};
use crate::timer::{PendingTimer, SimClock, TimerHandle, TimerSlot};
use chrono::Utc;

/// What the pending timer does when it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TimerAction {
    /// Return to `Settled` on the current page.
    Settle,
    /// Switch to `target`, then return to `Settled`.
    LandOn(PageId),
}

/// Simulation of one page-delivery architecture.
///
/// Owns the current mode, page, phase and the single pending timer. All
/// mutation goes through [`select_mode`](Self::select_mode),
/// [`reload`](Self::reload), [`navigate_to`](Self::navigate_to) and the time
/// advance methods.
///
/// # Example
///
/// ```rust
/// use rendersim::core::{PageId, Phase, RenderMode};
/// use rendersim::engine::Simulation;
///
/// let mut sim = Simulation::new();
/// sim.navigate_to(PageId::About);
/// assert_eq!(sim.phase(), Phase::WhiteOut);
/// assert_eq!(sim.page(), PageId::Home);
///
/// sim.advance_by(800);
/// assert_eq!(sim.phase(), Phase::Settled);
/// assert_eq!(sim.page(), PageId::About);
/// ```
#[derive(Debug)]
pub struct Simulation {
    session: SessionId,
    profiles: ProfileTable,
    mode: RenderMode,
    page: PageId,
    phase: Phase,
    pending: TimerSlot<TimerAction>,
    clock: SimClock,
    history: PhaseHistory,
    record_history: bool,
}

impl Simulation {
    /// Create a simulation in `{Mpa, Home, Settled}` with the builtin profiles.
    pub fn new() -> Self {
        Self::from_parts(ProfileTable::builtin(), RenderMode::Mpa, SimClock::new(), true)
    }

    pub(crate) fn from_parts(
        profiles: ProfileTable,
        mode: RenderMode,
        clock: SimClock,
        record_history: bool,
    ) -> Self {
        Self {
            session: SessionId::new(),
            profiles,
            mode,
            page: PageId::Home,
            phase: Phase::Settled,
            pending: TimerSlot::new(),
            clock,
            history: PhaseHistory::new(),
            record_history,
        }
    }

    /// Get active render mode (pure)
    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    /// Get addressed page (pure)
    pub fn page(&self) -> PageId {
        self.page
    }

    /// Get current phase (pure)
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Get current session id (pure)
    pub fn session(&self) -> SessionId {
        self.session
    }

    /// Get simulated time in milliseconds (pure)
    pub fn now_ms(&self) -> u64 {
        self.clock.now_ms()
    }

    /// Get the profile table (pure)
    pub fn profiles(&self) -> &ProfileTable {
        &self.profiles
    }

    /// Profile of the active mode.
    pub fn profile(&self) -> &ModeProfile {
        self.profiles.lookup(self.mode)
    }

    /// Get phase history (pure)
    pub fn history(&self) -> &PhaseHistory {
        &self.history
    }

    /// Handle of the pending timer, if a transition is in flight.
    pub fn pending_timer(&self) -> Option<TimerHandle> {
        self.pending.handle()
    }

    /// Simulated time at which the pending timer fires.
    pub fn next_deadline(&self) -> Option<u64> {
        self.pending.deadline()
    }

    /// Check if the SPA client-render spinner is showing (pure)
    pub fn is_client_render_spinner_active(&self) -> bool {
        self.phase == Phase::InitialLoading && self.mode == RenderMode::Spa
    }

    /// Get a read-only view for rendering (pure)
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            session: self.session,
            mode: self.mode,
            page: self.page,
            phase: self.phase,
            is_client_render_spinner_active: self.is_client_render_spinner_active(),
            now_ms: self.clock.now_ms(),
            pending_deadline_ms: self.pending.deadline(),
        }
    }

    /// Switch architecture, abandoning anything in flight.
    ///
    /// Always lands on `{new_mode, Home, Settled}`. If a timer was pending the
    /// session is recreated and receives a new [`SessionId`].
    pub fn select_mode(&mut self, new_mode: RenderMode) {
        if let Some(abandoned) = self.pending.cancel() {
            let previous = self.session;
            self.session = SessionId::new();
            tracing::info!(
                previous = %previous,
                session = %self.session,
                timer = %abandoned.handle,
                "abandoned in-flight transition, session reset"
            );
        }

        tracing::info!(from = %self.mode, to = %new_mode, "render mode selected");

        self.mode = new_mode;
        self.page = PageId::Home;
        self.enter(Phase::Settled);
    }

    /// Re-enter the site fresh on the home page.
    ///
    /// MPA blanks the viewport, the other modes show their initial-loading
    /// state. Calling again while pending restarts the delay from zero.
    pub fn reload(&mut self) {
        self.page = PageId::Home;

        let delay_ms = self.profile().initial_load_delay_ms;
        let phase = if self.mode == RenderMode::Mpa {
            Phase::WhiteOut
        } else {
            Phase::InitialLoading
        };

        self.schedule(delay_ms, TimerAction::Settle);
        tracing::debug!(mode = %self.mode, phase = %phase, delay_ms, "reload");
        self.enter(phase);
    }

    /// Navigate within the site.
    ///
    /// Navigating to the page already addressed changes nothing at all.
    pub fn navigate_to(&mut self, target: PageId) {
        if target == self.page {
            tracing::trace!(page = %target, "navigation to current page ignored");
            return;
        }

        let profile = self.profile();
        let (style, delay_ms) = (profile.navigation_style, profile.navigation_delay_ms);

        tracing::debug!(
            mode = %self.mode,
            from = %self.page,
            to = %target,
            ?style,
            delay_ms,
            "navigate"
        );

        match style {
            NavigationStyle::FullReload => {
                // The outgoing page stays addressed until the new one is ready.
                self.schedule(delay_ms, TimerAction::LandOn(target));
                self.enter(Phase::WhiteOut);
            }
            NavigationStyle::PartialFetch => {
                self.page = target;
                self.schedule(delay_ms, TimerAction::Settle);
                self.enter(Phase::Navigating);
            }
            NavigationStyle::Instant => {
                if let Some(cancelled) = self.pending.cancel() {
                    tracing::debug!(timer = %cancelled.handle, "timer cancelled");
                }
                self.page = target;
                self.enter(Phase::Settled);
            }
        }
    }

    /// Move simulated time forward by `delta_ms`, firing the pending timer if
    /// its deadline is reached.
    pub fn advance_by(&mut self, delta_ms: u64) {
        let target = self.clock.deadline_after(delta_ms);
        self.advance_to(target);
    }

    /// Move simulated time forward to `time_ms`. Earlier times are ignored.
    pub fn advance_to(&mut self, time_ms: u64) {
        if time_ms < self.clock.now_ms() {
            tracing::trace!(now_ms = self.clock.now_ms(), time_ms, "ignoring advance into the past");
            return;
        }

        if let Some(due_ms) = self.pending.deadline().filter(|due| *due <= time_ms) {
            self.clock.advance_to(due_ms);
            if let Some(timer) = self.pending.take_due(due_ms) {
                self.fire(timer);
            }
        }

        self.clock.advance_to(time_ms);
    }

    /// Advance to the pending deadline, if any, and return the time waited.
    pub fn run_until_settled(&mut self) -> u64 {
        let start = self.clock.now_ms();
        if let Some(deadline) = self.pending.deadline() {
            self.advance_to(deadline);
        }
        self.clock.now_ms() - start
    }

    fn schedule(&mut self, delay_ms: u64, action: TimerAction) {
        let due_ms = self.clock.deadline_after(delay_ms);
        let (handle, cancelled) = self.pending.schedule(due_ms, action);
        if let Some(cancelled) = cancelled {
            tracing::debug!(timer = %cancelled.handle, "timer cancelled");
        }
        tracing::debug!(timer = %handle, due_ms, "timer scheduled");
    }

    fn fire(&mut self, timer: PendingTimer<TimerAction>) {
        tracing::trace!(timer = %timer.handle, at_ms = timer.due_ms, "timer fired");
        match timer.action {
            TimerAction::Settle => {}
            TimerAction::LandOn(target) => self.page = target,
        }
        self.enter(Phase::Settled);
    }

    fn enter(&mut self, to: Phase) {
        let from = self.phase;
        if from == to {
            return;
        }
        self.phase = to;

        if self.record_history {
            self.history.push(PhaseTransition {
                from,
                to,
                mode: self.mode,
                page: self.page,
                at_ms: self.clock.now_ms(),
                timestamp: Utc::now(),
            });
        }
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}
