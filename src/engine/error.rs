//! Build errors for the simulation builder.

use crate::profile::ProfileError;
use thiserror::Error;

/// Errors that can occur when building a simulation.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Profile table rejected: {0}")]
    Profiles(#[from] ProfileError),

    #[error("Profile table given twice. Call either .profiles(table) or .profiles_json(json)")]
    ConflictingProfiles,
}
