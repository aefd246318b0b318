//! Page content and what the viewport shows.
//!
//! The engine never looks at content. A presentation layer asks a
//! [`ContentProvider`] for the page body once the snapshot is settled, or
//! lets [`Viewport::resolve`] make that decision for it.

mod builtin;
mod view;

pub use builtin::BuiltinContent;
pub use view::Viewport;

use crate::core::PageId;
use serde::{Deserialize, Serialize};

/// Static body of one page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticContent {
    pub page: PageId,
    pub title: String,
    pub blocks: Vec<Block>,
}

/// One piece of a page body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Card { label: String },
    Paragraph { heading: Option<String>, text: String },
    Product { name: String, price: String },
}

/// Pure lookup of page bodies.
///
/// Implementations must be side-effect free: the same page always yields
/// the same content.
pub trait ContentProvider {
    fn content(&self, page: PageId) -> StaticContent;
}

impl<F> ContentProvider for F
where
    F: Fn(PageId) -> StaticContent,
{
    fn content(&self, page: PageId) -> StaticContent {
        self(page)
    }
}
