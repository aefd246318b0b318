//! Mapping from a snapshot to what the viewport should show.

use super::{ContentProvider, StaticContent};
use crate::core::Phase;
use crate::engine::Snapshot;
use serde::Serialize;

/// What the simulated browser viewport displays.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Viewport {
    /// Nothing at all: a full page load in progress, or a server-rendered
    /// first load that has not arrived yet.
    Blank,
    /// SPA first load: the shell is there and the script is building the page.
    ClientRenderSpinner,
    /// Address changed, page data still in flight.
    FetchingIndicator,
    Content(StaticContent),
}

impl Viewport {
    /// Decide what to draw. The provider is only consulted when settled.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rendersim::content::{BuiltinContent, Viewport};
    /// use rendersim::core::RenderMode;
    /// use rendersim::engine::Simulation;
    ///
    /// let mut sim = Simulation::new();
    /// sim.select_mode(RenderMode::Spa);
    /// sim.reload();
    /// assert_eq!(
    ///     Viewport::resolve(&sim.snapshot(), &BuiltinContent),
    ///     Viewport::ClientRenderSpinner
    /// );
    /// ```
    pub fn resolve<P: ContentProvider + ?Sized>(snapshot: &Snapshot, provider: &P) -> Self {
        match snapshot.phase {
            Phase::Settled => Self::Content(provider.content(snapshot.page)),
            Phase::Navigating => Self::FetchingIndicator,
            Phase::InitialLoading if snapshot.is_client_render_spinner_active => {
                Self::ClientRenderSpinner
            }
            Phase::InitialLoading | Phase::WhiteOut => Self::Blank,
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Blank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Block, BuiltinContent};
    use crate::core::{PageId, RenderMode};
    use crate::engine::Simulation;
    use std::cell::Cell;

    fn viewport(sim: &Simulation) -> Viewport {
        Viewport::resolve(&sim.snapshot(), &BuiltinContent)
    }

    #[test]
    fn settled_shows_page_content() {
        let sim = Simulation::new();
        match viewport(&sim) {
            Viewport::Content(content) => assert_eq!(content.page, PageId::Home),
            other => panic!("expected content, got {other:?}"),
        }
    }

    #[test]
    fn white_out_is_blank() {
        let mut sim = Simulation::new();
        sim.navigate_to(PageId::About);
        assert!(viewport(&sim).is_blank());
    }

    #[test]
    fn ssr_initial_load_is_blank_not_spinner() {
        let mut sim = Simulation::new();
        sim.select_mode(RenderMode::Ssr);
        sim.reload();
        assert_eq!(viewport(&sim), Viewport::Blank);
    }

    #[test]
    fn navigating_shows_fetching_indicator() {
        let mut sim = Simulation::new();
        sim.select_mode(RenderMode::Spa);
        sim.navigate_to(PageId::Products);
        assert_eq!(viewport(&sim), Viewport::FetchingIndicator);
    }

    #[test]
    fn provider_is_not_consulted_while_loading() {
        let calls = Cell::new(0);
        let provider = |page: PageId| {
            calls.set(calls.get() + 1);
            StaticContent {
                page,
                title: String::new(),
                blocks: vec![Block::Card {
                    label: "x".to_string(),
                }],
            }
        };

        let mut sim = Simulation::new();
        sim.reload();
        Viewport::resolve(&sim.snapshot(), &provider);
        assert_eq!(calls.get(), 0);

        sim.run_until_settled();
        Viewport::resolve(&sim.snapshot(), &provider);
        assert_eq!(calls.get(), 1);
    }
}
