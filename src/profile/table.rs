//! The mode profile registry.

use super::error::ProfileError;
use super::{ModeProfile, NavigationStyle};
use crate::core::RenderMode;
use serde::{Deserialize, Serialize};

/// Read-only table holding exactly one [`ModeProfile`] per [`RenderMode`].
///
/// The invariant is enforced at construction, so [`ProfileTable::lookup`]
/// is total.
///
/// # Example
///
/// ```rust
/// use rendersim::core::RenderMode;
/// use rendersim::profile::{NavigationStyle, ProfileTable};
///
/// let table = ProfileTable::builtin();
/// let ssg = table.lookup(RenderMode::Ssg);
/// assert_eq!(ssg.initial_load_delay_ms, 300);
/// assert_eq!(ssg.navigation_style, NavigationStyle::Instant);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ModeProfile>", into = "Vec<ModeProfile>")]
pub struct ProfileTable {
    // Indexed by `slot(mode)`.
    profiles: [ModeProfile; 4],
}

fn slot(mode: RenderMode) -> usize {
    match mode {
        RenderMode::Mpa => 0,
        RenderMode::Spa => 1,
        RenderMode::Ssr => 2,
        RenderMode::Ssg => 3,
    }
}

impl ProfileTable {
    /// The reference latencies: SSG < SSR < MPA < SPA on first load, and
    /// only MPA reloads the whole page on navigation.
    pub fn builtin() -> Self {
        Self {
            profiles: [
                ModeProfile {
                    mode: RenderMode::Mpa,
                    initial_load_delay_ms: 1000,
                    navigation_style: NavigationStyle::FullReload,
                    navigation_delay_ms: 800,
                    shows_client_render_spinner: false,
                },
                ModeProfile {
                    mode: RenderMode::Spa,
                    initial_load_delay_ms: 1500,
                    navigation_style: NavigationStyle::PartialFetch,
                    navigation_delay_ms: 400,
                    shows_client_render_spinner: true,
                },
                ModeProfile {
                    mode: RenderMode::Ssr,
                    initial_load_delay_ms: 600,
                    navigation_style: NavigationStyle::PartialFetch,
                    navigation_delay_ms: 400,
                    shows_client_render_spinner: false,
                },
                ModeProfile {
                    mode: RenderMode::Ssg,
                    initial_load_delay_ms: 300,
                    navigation_style: NavigationStyle::Instant,
                    navigation_delay_ms: 0,
                    shows_client_render_spinner: false,
                },
            ],
        }
    }

    /// Build a table from one profile per mode, in any order.
    pub fn from_profiles(
        profiles: impl IntoIterator<Item = ModeProfile>,
    ) -> Result<Self, ProfileError> {
        let mut slots: [Option<ModeProfile>; 4] = [None, None, None, None];

        for profile in profiles {
            profile.validate()?;
            let entry = &mut slots[slot(profile.mode)];
            if entry.is_some() {
                return Err(ProfileError::DuplicateMode(profile.mode));
            }
            *entry = Some(profile);
        }

        let take = |mode: RenderMode, slots: &mut [Option<ModeProfile>; 4]| {
            slots[slot(mode)]
                .take()
                .ok_or(ProfileError::MissingMode(mode))
        };

        Ok(Self {
            profiles: [
                take(RenderMode::Mpa, &mut slots)?,
                take(RenderMode::Spa, &mut slots)?,
                take(RenderMode::Ssr, &mut slots)?,
                take(RenderMode::Ssg, &mut slots)?,
            ],
        })
    }

    /// Parse a table from a JSON array of profiles.
    ///
    /// ```rust
    /// use rendersim::profile::ProfileTable;
    ///
    /// let json = serde_json::to_string(&ProfileTable::builtin()).unwrap();
    /// let table = ProfileTable::from_json(&json).unwrap();
    /// assert_eq!(table, ProfileTable::builtin());
    /// ```
    pub fn from_json(json: &str) -> Result<Self, ProfileError> {
        let profiles: Vec<ModeProfile> = serde_json::from_str(json)?;
        Self::from_profiles(profiles)
    }

    /// Look up the profile for a mode. Never fails.
    pub fn lookup(&self, mode: RenderMode) -> &ModeProfile {
        &self.profiles[slot(mode)]
    }

    pub fn iter(&self) -> impl Iterator<Item = &ModeProfile> {
        self.profiles.iter()
    }
}

impl Default for ProfileTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TryFrom<Vec<ModeProfile>> for ProfileTable {
    type Error = ProfileError;

    fn try_from(profiles: Vec<ModeProfile>) -> Result<Self, Self::Error> {
        Self::from_profiles(profiles)
    }
}

impl From<ProfileTable> for Vec<ModeProfile> {
    fn from(table: ProfileTable) -> Self {
        table.profiles.into()
    }
}
