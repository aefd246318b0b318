//! The simulation engine.
//!
//! [`Simulation`] is the state machine: it owns the current mode, page and
//! phase plus the single pending timer, and exposes the three commands a
//! presentation layer issues (`select_mode`, `reload`, `navigate_to`).
//!
//! # Key Concepts
//!
//! - **Phases**: `Settled` is left by a command and re-entered by a timer
//! - **One timer**: any command that starts a phase cancels the pending timer
//! - **Simulated time**: nothing happens until time is advanced

mod builder;
mod error;
mod machine;
mod snapshot;

pub use builder::SimulationBuilder;
pub use error::BuildError;
pub use machine::Simulation;
pub use snapshot::{SessionId, Snapshot};
