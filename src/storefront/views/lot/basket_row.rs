//! Basket row for a lot the operator is still bidding on

use crate::storefront::events::StoreEvent;
use crate::storefront::models::Lot;
use crate::storefront::views::format::format_amount;
use crate::storefront::views::{templates, Component, Node, UiAction};

pub struct LotBasketRowView {
    container: Node,
    title: String,
}

impl LotBasketRowView {
    pub fn new() -> Self {
        Self {
            container: templates::bid_row(),
            title: String::new(),
        }
    }
}

impl Default for LotBasketRowView {
    fn default() -> Self {
        Self::new()
    }
}

impl Component<Lot> for LotBasketRowView {
    fn container(&self) -> &Node {
        &self.container
    }

    fn apply(&mut self, lot: &Lot) {
        let open = UiAction::Emit(StoreEvent::CatalogItemClick { id: lot.id.clone() });
        self.container
            .update("bid__open", |button| button.set_action(open));

        self.title = lot.title.clone();
        self.container
            .update("bid__title", |el| el.set_text(&lot.title));
        self.container
            .update("bid__amount", |el| el.set_text(format_amount(lot.price)));

        let alt = self.title.clone();
        self.container
            .update("bid__image", |el| el.set_image(&lot.image, Some(&alt)));
    }
}
