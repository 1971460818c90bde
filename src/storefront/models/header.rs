//! Header menu model
//!
//! The header is a static tree of menu items. The storefront appends the
//! basket button, which is the only item that talks to the bus.

use super::observable::Model;
use crate::storefront::events::{SharedEventBus, StoreEvent};
use std::collections::BTreeMap;

/// Element kinds allowed in the header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderTag {
    A,
    Button,
    Img,
    Nav,
    Span,
}

impl HeaderTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            HeaderTag::A => "a",
            HeaderTag::Button => "button",
            HeaderTag::Img => "img",
            HeaderTag::Nav => "nav",
            HeaderTag::Span => "span",
        }
    }
}

/// One node of the header menu tree
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderItem {
    pub tag: HeaderTag,
    pub class_name: String,
    pub text: Option<String>,
    pub href: Option<String>,
    pub src: Option<String>,
    pub alt: Option<String>,
    pub dataset: BTreeMap<String, String>,
    /// Event published when the item is activated
    pub on_click: Option<StoreEvent>,
    pub children: Vec<HeaderItem>,
}

impl HeaderItem {
    pub fn new(tag: HeaderTag, class_name: &str) -> Self {
        Self {
            tag,
            class_name: class_name.to_string(),
            text: None,
            href: None,
            src: None,
            alt: None,
            dataset: BTreeMap::new(),
            on_click: None,
            children: Vec::new(),
        }
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }

    pub fn with_href(mut self, href: &str) -> Self {
        self.href = Some(href.to_string());
        self
    }

    pub fn with_image(mut self, src: &str, alt: &str) -> Self {
        self.src = Some(src.to_string());
        self.alt = Some(alt.to_string());
        self
    }

    pub fn with_data(mut self, key: &str, value: &str) -> Self {
        self.dataset.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_on_click(mut self, event: StoreEvent) -> Self {
        self.on_click = Some(event);
        self
    }

    pub fn with_children(mut self, children: Vec<HeaderItem>) -> Self {
        self.children = children;
        self
    }
}

/// Static menu shown above every page
pub fn default_header_items() -> Vec<HeaderItem> {
    vec![
        HeaderItem::new(HeaderTag::A, "header__logo")
            .with_href("/")
            .with_children(vec![HeaderItem::new(HeaderTag::Img, "header__logo-image")
                .with_image("logo.svg", "Ono-tebe-nado! logo")]),
        HeaderItem::new(HeaderTag::Nav, "header__menu").with_children(vec![
            HeaderItem::new(HeaderTag::A, "header__menu-item")
                .with_href("/")
                .with_text("Главная"),
            HeaderItem::new(HeaderTag::A, "header__menu-item")
                .with_href("/")
                .with_text("Посмотреть лоты"),
            HeaderItem::new(HeaderTag::A, "header__menu-item")
                .with_href("/")
                .with_text("Об аукционе"),
        ]),
    ]
}

/// Button that opens the basket, with its lot counter badge
pub fn basket_button() -> HeaderItem {
    HeaderItem::new(HeaderTag::Button, "header__basket")
        .with_text("Корзина")
        .with_on_click(StoreEvent::BasketOpen)
        .with_children(vec![HeaderItem::new(HeaderTag::Span, "header__basket-counter")
            .with_text("0")
            .with_data("element", "basket")
            .with_data("component", "basket")])
}

/// Header model: configured menu items plus the basket button
pub struct Header {
    model: Model<Vec<HeaderItem>>,
}

impl Header {
    pub fn new(mut items: Vec<HeaderItem>, bus: SharedEventBus) -> Self {
        items.push(basket_button());
        Self {
            model: Model::new(items, bus),
        }
    }

    pub fn items(&self) -> &[HeaderItem] {
        self.model.data()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storefront::events::SimpleEventBus;

    #[test]
    fn header_should_append_basket_button() {
        let header = Header::new(default_header_items(), SimpleEventBus::shared());
        let last = header.items().last().unwrap();

        assert_eq!(last.class_name, "header__basket");
        assert_eq!(last.on_click, Some(StoreEvent::BasketOpen));
        assert_eq!(last.children[0].class_name, "header__basket-counter");
    }

    #[test]
    fn default_menu_should_have_three_links() {
        let items = default_header_items();
        let nav = items.iter().find(|i| i.tag == HeaderTag::Nav).unwrap();
        assert_eq!(nav.children.len(), 3);
    }
}
