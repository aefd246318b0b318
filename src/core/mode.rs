//! Render modes and page identifiers.
//!
//! Both are closed enums. Text coming from a presentation layer is parsed
//! through `FromStr`, which is the only place an unknown value can be
//! rejected; past that boundary the state machine only ever sees valid values.

use super::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Page-delivery architecture being simulated.
///
/// # Example
///
/// ```rust
/// use rendersim::core::RenderMode;
///
/// let mode: RenderMode = "ssr".parse().unwrap();
/// assert_eq!(mode, RenderMode::Ssr);
/// assert_eq!(mode.name(), "SSR");
/// assert!("php".parse::<RenderMode>().is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Multi-page application: every navigation is a full page load.
    Mpa,
    /// Client-rendered single-page application.
    Spa,
    /// Server-side rendering.
    Ssr,
    /// Static site generation.
    Ssg,
}

impl RenderMode {
    /// All modes, in presentation order.
    pub const ALL: [RenderMode; 4] = [Self::Mpa, Self::Spa, Self::Ssr, Self::Ssg];

    /// Short display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Mpa => "MPA",
            Self::Spa => "SPA",
            Self::Ssr => "SSR",
            Self::Ssg => "SSG",
        }
    }

    /// Long display name.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Mpa => "Multi-Page Application",
            Self::Spa => "Single Page Application (CSR)",
            Self::Ssr => "Server-Side Rendering",
            Self::Ssg => "Static Site Generation",
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RenderMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mpa" => Ok(Self::Mpa),
            "spa" | "csr" => Ok(Self::Spa),
            "ssr" => Ok(Self::Ssr),
            "ssg" => Ok(Self::Ssg),
            _ => Err(ParseError::UnknownRenderMode(s.to_string())),
        }
    }
}

/// Logical page currently addressed by the simulated site.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageId {
    #[default]
    Home,
    About,
    Products,
}

impl PageId {
    /// All pages, in navigation-bar order.
    pub const ALL: [PageId; 3] = [Self::Home, Self::About, Self::Products];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Products => "products",
        }
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PageId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "home" | "/" => Ok(Self::Home),
            "about" | "/about" => Ok(Self::About),
            "products" | "/products" => Ok(Self::Products),
            _ => Err(ParseError::UnknownPage(s.to_string())),
        }
    }
}
