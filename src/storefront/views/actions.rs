//! # UI Actions
//!
//! What happens when the operator activates a node. A node holds at most one
//! action, so re-rendering a view replaces bindings instead of stacking them.

use crate::storefront::events::{BasketTab, OrderField, StoreEvent};

#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    /// Publish the event on the bus as is
    Emit(StoreEvent),
    /// Basket tab selector
    SelectTab(BasketTab),
    /// Closed-lot checkbox in the basket
    ToggleSelection { id: String },
    /// Basket checkout button
    Checkout,
    /// Bid amount input in the lot detail view
    BidInput,
    /// Bid form submit button
    SubmitBid,
    /// Checkout form text input
    OrderInput(OrderField),
    /// Checkout form submit button
    SubmitOrder,
    /// Dismiss the modal overlay
    CloseModal,
    /// Fetch the catalog again after a failed load
    ReloadCatalog,
}

impl UiAction {
    /// Whether the node accepts typed text rather than activation
    pub fn is_text_input(&self) -> bool {
        matches!(self, UiAction::BidInput | UiAction::OrderInput(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_inputs_should_accept_text() {
        assert!(UiAction::BidInput.is_text_input());
        assert!(UiAction::OrderInput(OrderField::Phone).is_text_input());
        assert!(!UiAction::Checkout.is_text_input());
        assert!(!UiAction::Emit(StoreEvent::BasketOpen).is_text_input());
    }
}
