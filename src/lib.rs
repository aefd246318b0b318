//! Rendersim: perceived-latency simulator for page-delivery architectures
//!
//! Rendersim compares how a multi-page application (MPA), a client-rendered
//! single-page application (SPA), server-side rendering (SSR) and static site
//! generation (SSG) feel to a user who reloads the site or navigates within
//! it. The heart of the crate is a small timed state machine; everything it
//! does is driven by simulated time, so every delay is exactly reproducible.
//!
//! # Core Concepts
//!
//! - **Render mode**: the architecture being simulated, with a fixed latency
//!   `ModeProfile` per mode
//! - **Phase**: the transient visual state of the viewport (`Settled`,
//!   `InitialLoading`, `WhiteOut`, `Navigating`)
//! - **One timer**: at most one transition is ever in flight; a new command
//!   cancels it rather than queueing behind it
//!
//! # Example
//!
//! ```rust
//! use rendersim::core::{PageId, Phase, RenderMode};
//! use rendersim::engine::Simulation;
//!
//! let mut sim = Simulation::new();
//! sim.select_mode(RenderMode::Ssg);
//!
//! sim.navigate_to(PageId::Products);
//! assert_eq!(sim.phase(), Phase::Settled);
//! assert_eq!(sim.page(), PageId::Products);
//!
//! sim.select_mode(RenderMode::Spa);
//! sim.reload();
//! assert!(sim.snapshot().is_client_render_spinner_active);
//! sim.advance_by(1500);
//! assert_eq!(sim.phase(), Phase::Settled);
//! ```

pub mod content;
pub mod core;
#[cfg(feature = "runtime")]
pub mod driver;
pub mod engine;
pub mod profile;
pub mod timer;

// Re-export commonly used types
pub use content::{BuiltinContent, ContentProvider, StaticContent, Viewport};
pub use crate::core::{PageId, Phase, RenderMode};
pub use engine::{Simulation, SimulationBuilder, Snapshot};
pub use profile::{ModeProfile, NavigationStyle, ProfileTable};
