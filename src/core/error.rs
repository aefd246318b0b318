//! Boundary parsing errors.

use thiserror::Error;

/// Input outside the closed `RenderMode` / `PageId` enums.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown render mode '{0}', expected one of: mpa, spa, ssr, ssg")]
    UnknownRenderMode(String),

    #[error("Unknown page '{0}', expected one of: home, about, products")]
    UnknownPage(String),
}
