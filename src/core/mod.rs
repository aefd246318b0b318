//! Core value types of the simulation.
//!
//! This module contains the closed vocabulary the engine works with:
//! - Render modes and pages, with boundary parsing
//! - The visual `Phase` of the viewport
//! - Immutable phase history
//!
//! Nothing in here schedules or mutates anything.

mod error;
mod history;
mod mode;
mod phase;

pub use error::ParseError;
pub use history::{PhaseHistory, PhaseTransition};
pub use mode::{PageId, RenderMode};
pub use phase::Phase;
