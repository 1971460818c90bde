//! Per-run storefront session state owned by the controller

use crate::storefront::models::OrderState;

/// What the modal currently shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalContent {
    #[default]
    Nothing,
    Loading,
    LotDetail,
    Basket,
    OrderForm,
    Success,
    Error,
}

#[derive(Debug, Default)]
pub struct Session {
    pub order: OrderState,
    /// Set while the basket was opened from the header and should be shown
    /// in the modal once its snapshot arrives
    pub basket_modal_flow: bool,
    pub modal_content: ModalContent,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn showing(&self, content: ModalContent) -> bool {
        self.modal_content == content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_should_show_nothing() {
        let session = Session::new();

        assert!(!session.basket_modal_flow);
        assert!(session.showing(ModalContent::Nothing));
        assert!(!session.order.valid);
    }
}
