//! Catalog gallery: one card per lot

use super::lot::LotCardView;
use super::{templates, Component, Node, UiAction};
use crate::storefront::models::Lot;

pub struct CatalogView {
    container: Node,
}

impl CatalogView {
    pub fn new() -> Self {
        Self {
            container: Node::new("main").with_class("gallery"),
        }
    }

    /// Replace the gallery with the loading placeholder
    pub fn render_loading(&mut self) -> Node {
        self.container.replace_children(vec![templates::loading()]);
        self.container.clone()
    }

    /// Replace the gallery with an error message and a retry button
    pub fn render_error(&mut self, message: &str, retry: UiAction) -> Node {
        self.container
            .replace_children(vec![templates::error(message, retry)]);
        self.container.clone()
    }

    pub fn card_count(&self) -> usize {
        self.container.find_all("card").len()
    }
}

impl Default for CatalogView {
    fn default() -> Self {
        Self::new()
    }
}

impl Component<[Lot]> for CatalogView {
    fn container(&self) -> &Node {
        &self.container
    }

    fn apply(&mut self, items: &[Lot]) {
        tracing::debug!("rendering {} catalog cards", items.len());
        let cards = items
            .iter()
            .map(|lot| LotCardView::new().render(Some(lot)))
            .collect();
        self.container.replace_children(cards);
    }
}
