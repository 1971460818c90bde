//! # Store Events
//!
//! Every message that travels over the storefront event bus. Each topic has
//! exactly one variant carrying a typed payload, so a handler can never see
//! a payload that does not belong to its topic.

use super::types::OrderField;
use crate::storefront::models::Lot;
use std::fmt;

/// Topic names published on the bus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    CatalogItemsChanged,
    CatalogItemClick,
    LotPlaceBid,
    BasketOpen,
    BasketItemsChanged,
    BasketCheckout,
    OrderEmailChange,
    OrderPhoneChange,
    OrderSubmit,
    ModalOpen,
    ModalClose,
}

impl Topic {
    pub const ALL: [Topic; 11] = [
        Topic::CatalogItemsChanged,
        Topic::CatalogItemClick,
        Topic::LotPlaceBid,
        Topic::BasketOpen,
        Topic::BasketItemsChanged,
        Topic::BasketCheckout,
        Topic::OrderEmailChange,
        Topic::OrderPhoneChange,
        Topic::OrderSubmit,
        Topic::ModalOpen,
        Topic::ModalClose,
    ];

    /// Wire name of the topic, used for pattern subscriptions and logging
    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::CatalogItemsChanged => "catalog.items:changed",
            Topic::CatalogItemClick => "catalog.items:click",
            Topic::LotPlaceBid => "lot:placeBid",
            Topic::BasketOpen => "basket:open",
            Topic::BasketItemsChanged => "basket.items:changed",
            Topic::BasketCheckout => "basket:checkout",
            Topic::OrderEmailChange => "order.email:change",
            Topic::OrderPhoneChange => "order.phone:change",
            Topic::OrderSubmit => "order:submit",
            Topic::ModalOpen => "modal:open",
            Topic::ModalClose => "modal:close",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Checkout request emitted by the basket: selected closed lot ids in list
/// order and the sum of their prices
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BasketCheckout {
    pub items: Vec<String>,
    pub total: u64,
}

/// Events published on the storefront bus
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    /// Catalog model was updated
    CatalogItemsChanged { items: Vec<Lot> },

    /// Operator asked for the detail view of a lot
    CatalogItemClick { id: String },

    /// Bid submitted from the lot detail view
    LotPlaceBid { id: String, value: u64 },

    /// Begin the basket fetch and open flow
    BasketOpen,

    /// Basket model was updated
    BasketItemsChanged { items: Vec<Lot> },

    /// Selected closed lots should go to checkout
    BasketCheckout(BasketCheckout),

    /// A checkout form field was edited
    OrderFieldChanged { field: OrderField, value: String },

    /// Checkout form submitted
    OrderSubmit,

    /// Modal overlay became visible
    ModalOpen,

    /// Modal overlay was dismissed
    ModalClose,
}

impl StoreEvent {
    pub fn topic(&self) -> Topic {
        match self {
            StoreEvent::CatalogItemsChanged { .. } => Topic::CatalogItemsChanged,
            StoreEvent::CatalogItemClick { .. } => Topic::CatalogItemClick,
            StoreEvent::LotPlaceBid { .. } => Topic::LotPlaceBid,
            StoreEvent::BasketOpen => Topic::BasketOpen,
            StoreEvent::BasketItemsChanged { .. } => Topic::BasketItemsChanged,
            StoreEvent::BasketCheckout(_) => Topic::BasketCheckout,
            StoreEvent::OrderFieldChanged { field, .. } => match field {
                OrderField::Email => Topic::OrderEmailChange,
                OrderField::Phone => Topic::OrderPhoneChange,
            },
            StoreEvent::OrderSubmit => Topic::OrderSubmit,
            StoreEvent::ModalOpen => Topic::ModalOpen,
            StoreEvent::ModalClose => Topic::ModalClose,
        }
    }
}
