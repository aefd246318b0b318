//! Read-only view of the engine for rendering.

use crate::core::{PageId, Phase, RenderMode};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifies one simulation session.
///
/// A new id is issued when switching modes abandons an in-flight transition.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct SessionId(Uuid);

impl SessionId {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Everything a presentation layer needs to draw the simulated page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub session: SessionId,
    pub mode: RenderMode,
    pub page: PageId,
    pub phase: Phase,
    /// `phase == InitialLoading && mode == Spa`
    pub is_client_render_spinner_active: bool,
    pub now_ms: u64,
    /// When the pending transition will fire, if one is in flight.
    pub pending_deadline_ms: Option<u64>,
}

impl Snapshot {
    pub fn is_settled(&self) -> bool {
        self.phase == Phase::Settled
    }
}
