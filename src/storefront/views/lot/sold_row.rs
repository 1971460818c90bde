//! Basket row for a closed lot that can be selected for checkout

use crate::storefront::models::Lot;
use crate::storefront::views::format::format_amount;
use crate::storefront::views::{templates, Component, Node, UiAction};

pub struct LotSoldRowView {
    container: Node,
}

impl LotSoldRowView {
    pub fn new() -> Self {
        Self {
            container: templates::sold_row(),
        }
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.container
            .update("bid__selector-input", |checkbox| checkbox.set_checked(selected));
    }

    /// Render `lot` with its checkbox reflecting `selected`
    pub fn render_selected(&mut self, lot: &Lot, selected: bool) -> Node {
        self.apply(lot);
        self.set_selected(selected);
        self.container.clone()
    }
}

impl Default for LotSoldRowView {
    fn default() -> Self {
        Self::new()
    }
}

impl Component<Lot> for LotSoldRowView {
    fn container(&self) -> &Node {
        &self.container
    }

    fn apply(&mut self, lot: &Lot) {
        let toggle = UiAction::ToggleSelection { id: lot.id.clone() };
        self.container
            .update("bid__selector-input", |checkbox| checkbox.set_action(toggle));
        self.container
            .update("bid__title", |el| el.set_text(&lot.title));
        self.container
            .update("bid__amount", |el| el.set_text(format_amount(lot.price)));
        self.container
            .update("bid__image", |el| el.set_image(&lot.image, Some(&lot.title)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storefront::models::LotStatus;

    fn sold() -> Lot {
        Lot {
            id: "c1".to_string(),
            title: "Картина".to_string(),
            image: "https://cdn/painting.png".to_string(),
            status: LotStatus::Closed,
            price: 1200,
            ..Lot::default()
        }
    }

    #[test]
    fn checkbox_should_toggle_its_lot() {
        let node = LotSoldRowView::new().render_selected(&sold(), true);
        let checkbox = node.find("bid__selector-input").unwrap();

        assert!(checkbox.is_checked());
        assert_eq!(
            checkbox.action(),
            Some(&UiAction::ToggleSelection {
                id: "c1".to_string()
            })
        );
        assert_eq!(node.find("bid__amount").unwrap().text(), "1\u{a0}200");
    }

    #[test]
    fn image_alt_should_be_title() {
        let node = LotSoldRowView::new().render(Some(&sold()));
        let image = node.find("bid__image").unwrap();

        assert_eq!(image.attr("src"), Some("https://cdn/painting.png"));
        assert_eq!(image.attr("alt"), Some("Картина"));
        assert!(!image.is_checked());
    }
}
