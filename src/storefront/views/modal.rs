//! Modal overlay hosting the lot detail, basket, order form and state views

use super::{templates, Node};
use crate::storefront::events::{SharedEventBus, StoreEvent};

pub struct ModalView {
    container: Node,
    bus: SharedEventBus,
    open: bool,
}

impl ModalView {
    pub fn new(bus: SharedEventBus) -> Self {
        Self {
            container: templates::modal(),
            bus,
            open: false,
        }
    }

    /// Show `content`, announcing `modal:open` when the overlay was closed
    pub fn open(&mut self, content: Node) {
        self.replace_content(content);
        if self.open {
            return;
        }

        self.open = true;
        self.container.set_visible();
        tracing::debug!("modal opened");
        self.bus.publish(StoreEvent::ModalOpen);
    }

    /// Swap what the modal shows without changing whether it is open
    pub fn replace_content(&mut self, content: Node) {
        self.container
            .update("modal__content", |slot| slot.replace_children(vec![content]));
    }

    /// Hide the overlay. Closing a closed modal is silent.
    pub fn close(&mut self) {
        if !self.open {
            return;
        }

        self.open = false;
        self.container.set_hidden();
        self.container
            .update("modal__content", |slot| slot.replace_children(Vec::new()));
        tracing::debug!("modal closed");
        self.bus.publish(StoreEvent::ModalClose);
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Root node of the content slot's current view
    pub fn content(&self) -> Option<&Node> {
        self.container
            .find("modal__content")
            .and_then(|slot| slot.children().first())
    }

    pub fn container(&self) -> &Node {
        &self.container
    }
}
