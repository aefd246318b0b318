//! Simulated time and the single pending-timer slot.
//!
//! Timers are cooperative: nothing fires on its own. The engine advances the
//! [`SimClock`] and then drains its [`TimerSlot`].

mod clock;
mod slot;

pub use clock::SimClock;
pub use slot::{PendingTimer, TimerHandle, TimerSlot};
