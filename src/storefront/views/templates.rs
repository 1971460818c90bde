//! # Templates
//!
//! Fresh node trees for every view. Each call returns a new tree, so a row
//! view built from a template never shares bindings with an earlier render.

use super::actions::UiAction;
use super::node::Node;
use crate::storefront::events::{BasketTab, OrderField};

/// Catalog card
pub fn card() -> Node {
    Node::new("article").with_class("card").with_children(vec![
        Node::new("img").with_class("card__image"),
        Node::new("h2").with_class("card__title"),
        Node::new("p").with_class("card__description"),
        Node::new("span").with_class("card__status"),
        Node::new("button")
            .with_class("card__action")
            .with_text("Подробнее"),
    ])
}

/// Lot detail shown in the modal
pub fn lot_detail() -> Node {
    Node::new("div").with_class("lot").with_children(vec![
        Node::new("img").with_class("lot__image"),
        Node::new("div").with_class("lot__content").with_children(vec![
            Node::new("h2").with_class("lot__title"),
            Node::new("div").with_class("lot__status").with_children(vec![
                Node::new("span").with_class("lot__status-timer"),
                Node::new("span").with_class("lot__status-text"),
            ]),
            Node::new("div").with_class("lot__history").hidden(),
            Node::new("form")
                .with_class("lot__bid")
                .hidden()
                .with_children(vec![
                    Node::new("input")
                        .with_class("lot__bid-input")
                        .with_attr("name", "lot_bid")
                        .with_attr("placeholder", "Ваша ставка")
                        .with_action(UiAction::BidInput),
                    Node::new("button")
                        .with_class("lot__bid-submit")
                        .with_text("Сделать ставку")
                        .with_action(UiAction::SubmitBid),
                ]),
        ]),
    ])
}

/// Basket row for a lot that is still being bid on
pub fn bid_row() -> Node {
    Node::new("article").with_class("bid").with_children(vec![
        Node::new("img").with_class("bid__image"),
        Node::new("span").with_class("bid__title"),
        Node::new("span").with_class("bid__amount"),
        Node::new("button").with_class("bid__open").with_text("Открыть"),
    ])
}

/// Basket row for a closed lot, with its selection checkbox
pub fn sold_row() -> Node {
    Node::new("article").with_class("bid").with_children(vec![
        Node::new("input")
            .with_class("bid__selector-input")
            .with_attr("type", "checkbox")
            .with_text("Выбрать"),
        Node::new("img").with_class("bid__image"),
        Node::new("span").with_class("bid__title"),
        Node::new("span").with_class("bid__amount"),
    ])
}

/// Active / closed tab selectors
pub fn basket_tabs() -> Node {
    Node::new("div").with_class("tabs").with_children(vec![
        Node::new("button")
            .with_class("tabs__button")
            .with_attr("name", BasketTab::Active.as_str())
            .with_text("Активные")
            .with_action(UiAction::SelectTab(BasketTab::Active)),
        Node::new("button")
            .with_class("tabs__button")
            .with_attr("name", BasketTab::Closed.as_str())
            .with_text("Закрытые")
            .with_action(UiAction::SelectTab(BasketTab::Closed)),
    ])
}

/// Basket list with its total and checkout footer
pub fn basket_content() -> Node {
    Node::new("div").with_class("basket").with_children(vec![
        Node::new("ul").with_class("basket__list"),
        Node::new("div").with_class("basket__actions").with_children(vec![
            Node::new("span").with_class("basket__total").with_text("0"),
            Node::new("button")
                .with_class("basket__action")
                .with_text("Оформить")
                .with_action(UiAction::Checkout)
                .disabled(),
        ]),
    ])
}

/// Checkout form
pub fn order_form() -> Node {
    Node::new("form")
        .with_class("form")
        .with_attr("name", "order")
        .with_children(vec![
            Node::new("h2").with_class("form__title").with_text("Оформление"),
            Node::new("input")
                .with_class("form__input")
                .with_attr("name", OrderField::Email.as_str())
                .with_attr("placeholder", "Email")
                .with_action(UiAction::OrderInput(OrderField::Email)),
            Node::new("input")
                .with_class("form__input")
                .with_attr("name", OrderField::Phone.as_str())
                .with_attr("placeholder", "Телефон")
                .with_action(UiAction::OrderInput(OrderField::Phone)),
            Node::new("span").with_class("form__errors"),
            Node::new("button")
                .with_class("form__submit")
                .with_attr("type", "submit")
                .with_text("Оформить")
                .with_action(UiAction::SubmitOrder)
                .disabled(),
        ])
}

/// Order placed confirmation
pub fn success() -> Node {
    Node::new("div").with_class("state").with_children(vec![
        Node::new("h2")
            .with_class("state__title")
            .with_text("Заказ оформлен"),
        Node::new("p")
            .with_class("state__text")
            .with_text("Мы свяжемся с вами в ближайшее время"),
        Node::new("button")
            .with_class("state__action")
            .with_text("На главную")
            .with_action(UiAction::CloseModal),
    ])
}

/// Placeholder while a request is in flight
pub fn loading() -> Node {
    Node::new("div")
        .with_class("loading")
        .with_text("Загрузка...")
}

/// Failed request with a button that repeats it
pub fn error(message: &str, retry: UiAction) -> Node {
    Node::new("div")
        .with_class("state")
        .with_class("state_error")
        .with_children(vec![
            Node::new("p").with_class("state__text").with_text(message),
            Node::new("button")
                .with_class("state__action")
                .with_text("Повторить")
                .with_action(retry),
        ])
}

/// Modal overlay frame
pub fn modal() -> Node {
    Node::new("div")
        .with_class("modal")
        .hidden()
        .with_children(vec![
            Node::new("button")
                .with_class("modal__close")
                .with_text("Закрыть")
                .with_action(UiAction::CloseModal),
            Node::new("div").with_class("modal__content"),
        ])
}
