//! Header bar rendered from the menu item tree

use super::{Component, Node, UiAction};
use crate::storefront::models::{HeaderItem, HeaderTag};

pub struct HeaderView {
    container: Node,
}

impl HeaderView {
    pub fn new() -> Self {
        Self {
            container: Node::new("header")
                .with_class("header")
                .with_child(Node::new("div").with_class("header__container")),
        }
    }

    /// Show the number of lots in the basket on the header badge
    pub fn set_basket_counter(&mut self, count: usize) {
        self.container
            .update("header__basket-counter", |badge| badge.set_text(count));
    }

    pub fn basket_counter(&self) -> &str {
        self.container
            .find("header__basket-counter")
            .map(Node::text)
            .unwrap_or_default()
    }
}

impl Default for HeaderView {
    fn default() -> Self {
        Self::new()
    }
}

impl Component<[HeaderItem]> for HeaderView {
    fn container(&self) -> &Node {
        &self.container
    }

    fn apply(&mut self, items: &[HeaderItem]) {
        let nodes = items.iter().map(render_item).collect();
        self.container
            .update("header__container", |el| el.replace_children(nodes));
    }
}

/// Build the node for one menu item and, recursively, its children
pub fn render_item(item: &HeaderItem) -> Node {
    let mut node = Node::new(item.tag.as_str()).with_class(&item.class_name);

    if let Some(text) = &item.text {
        node.set_text(text);
    }
    for (key, value) in &item.dataset {
        node.set_attr(&format!("data-{key}"), value);
    }
    match item.tag {
        HeaderTag::A => {
            if let Some(href) = &item.href {
                node.set_attr("href", href);
            }
        }
        HeaderTag::Img => {
            if let Some(src) = &item.src {
                node.set_image(src, item.alt.as_deref());
            }
        }
        _ => {}
    }
    if let Some(event) = &item.on_click {
        node.set_action(UiAction::Emit(event.clone()));
    }

    node.with_children(item.children.iter().map(render_item).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storefront::events::{SimpleEventBus, StoreEvent};
    use crate::storefront::models::{default_header_items, Header};

    fn rendered() -> HeaderView {
        let header = Header::new(default_header_items(), SimpleEventBus::shared());
        let mut view = HeaderView::new();
        view.render(Some(header.items()));
        view
    }

    #[test]
    fn header_should_render_menu_tree() {
        let view = rendered();
        let links = view.container().find_all("header__menu-item");

        assert_eq!(links.len(), 3);
        assert_eq!(links[0].tag(), "a");
        assert_eq!(links[0].attr("href"), Some("/"));
        let logo = view.container().find("header__logo-image").unwrap();
        assert_eq!(logo.attr("alt"), Some("Ono-tebe-nado! logo"));
    }

    #[test]
    fn basket_button_should_open_basket() {
        let view = rendered();
        let button = view.container().find("header__basket").unwrap();

        assert_eq!(button.action(), Some(&UiAction::Emit(StoreEvent::BasketOpen)));
        let badge = view.container().find("header__basket-counter").unwrap();
        assert_eq!(badge.attr("data-component"), Some("basket"));
    }

    #[test]
    fn counter_should_follow_basket_size() {
        let mut view = rendered();
        assert_eq!(view.basket_counter(), "0");

        view.set_basket_counter(4);
        assert_eq!(view.basket_counter(), "4");
    }
}
