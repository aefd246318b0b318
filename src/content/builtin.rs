use super::{Block, ContentProvider, StaticContent};
use crate::core::PageId;

/// The demo site: a home page, a company page and a product list.
#[derive(Clone, Copy, Debug, Default)]
pub struct BuiltinContent;

impl ContentProvider for BuiltinContent {
    fn content(&self, page: PageId) -> StaticContent {
        let (title, blocks) = match page {
            PageId::Home => (
                "Home",
                vec![
                    Block::Card {
                        label: "Cafe feature".to_string(),
                    },
                    Block::Card {
                        label: "New articles".to_string(),
                    },
                    Block::Paragraph {
                        heading: None,
                        text: "First paint and page switches feel different depending on \
                               the rendering mode. Pick a mode, reload, then navigate to compare."
                            .to_string(),
                    },
                ],
            ),
            PageId::About => (
                "About us",
                vec![Block::Paragraph {
                    heading: Some("Mission".to_string()),
                    text: "Change the world with technology, putting user experience first \
                           and delivering the best performance."
                        .to_string(),
                }],
            ),
            PageId::Products => (
                "Products",
                (1..=3)
                    .map(|i| Block::Product {
                        name: format!("Lovely product {i}"),
                        price: "¥1,200".to_string(),
                    })
                    .collect(),
            ),
        };

        StaticContent {
            page,
            title: title.to_string(),
            blocks,
        }
    }
}
