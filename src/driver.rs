//! Wall-clock driver for the simulation (feature `runtime`).
//!
//! The engine only knows simulated milliseconds. [`RealtimeDriver`] sleeps on
//! the tokio timer until the pending deadline and then advances the engine
//! to it, so a presentation layer sees transitions happen in real time.

use crate::core::{PageId, RenderMode};
use crate::engine::{Simulation, Snapshot};
use std::time::Duration;
use tokio::time::Instant;

/// Drives a [`Simulation`] with real time.
///
/// Commands are forwarded synchronously; only waiting is async. Simulated
/// time is kept in step with the wall-clock time elapsed since the driver was
/// created, so commands issued between awaits are stamped correctly.
#[derive(Debug)]
pub struct RealtimeDriver {
    sim: Simulation,
    origin: Instant,
    origin_ms: u64,
}

impl RealtimeDriver {
    pub fn new(sim: Simulation) -> Self {
        let origin_ms = sim.now_ms();
        Self {
            sim,
            origin: Instant::now(),
            origin_ms,
        }
    }

    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    pub fn into_inner(self) -> Simulation {
        self.sim
    }

    /// Bring simulated time up to the wall clock, firing anything now due.
    pub fn sync(&mut self) -> Snapshot {
        let elapsed = u64::try_from(self.origin.elapsed().as_millis()).unwrap_or(u64::MAX);
        self.sim.advance_to(self.origin_ms.saturating_add(elapsed));
        self.sim.snapshot()
    }

    pub fn select_mode(&mut self, mode: RenderMode) -> Snapshot {
        self.sync();
        self.sim.select_mode(mode);
        self.sim.snapshot()
    }

    pub fn reload(&mut self) -> Snapshot {
        self.sync();
        self.sim.reload();
        self.sim.snapshot()
    }

    pub fn navigate_to(&mut self, page: PageId) -> Snapshot {
        self.sync();
        self.sim.navigate_to(page);
        self.sim.snapshot()
    }

    /// Wait until the pending transition fires.
    ///
    /// Returns immediately if nothing is pending.
    pub async fn settle(&mut self) -> Snapshot {
        self.sync();
        while let Some(deadline) = self.sim.next_deadline() {
            let wait_ms = deadline.saturating_sub(self.origin_ms);
            tokio::time::sleep_until(self.origin + Duration::from_millis(wait_ms)).await;
            self.sync();
        }
        self.sim.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Phase;

    #[tokio::test(start_paused = true)]
    async fn settle_waits_for_reload_delay() {
        let mut driver = RealtimeDriver::new(Simulation::new());
        let start = Instant::now();

        let snapshot = driver.reload();
        assert_eq!(snapshot.phase, Phase::WhiteOut);

        let snapshot = driver.settle().await;
        assert_eq!(snapshot.phase, Phase::Settled);
        assert_eq!(start.elapsed(), Duration::from_millis(1000));
    }

    #[tokio::test(start_paused = true)]
    async fn wall_clock_time_fires_pending_timer() {
        let mut driver = RealtimeDriver::new(Simulation::new());
        driver.navigate_to(PageId::About);

        tokio::time::sleep(Duration::from_millis(799)).await;
        assert_eq!(driver.sync().page, PageId::Home);

        tokio::time::sleep(Duration::from_millis(1)).await;
        let snapshot = driver.sync();
        assert_eq!(snapshot.page, PageId::About);
        assert_eq!(snapshot.phase, Phase::Settled);
    }

    #[tokio::test(start_paused = true)]
    async fn mode_switch_abandons_wait() {
        let mut driver = RealtimeDriver::new(Simulation::new());
        driver.reload();
        tokio::time::sleep(Duration::from_millis(200)).await;

        let snapshot = driver.select_mode(RenderMode::Ssg);
        assert!(snapshot.is_settled());

        let start = Instant::now();
        driver.settle().await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }
}
