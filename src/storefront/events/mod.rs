//! # Events Module
//!
//! Re-exports the event system: typed store events, topics and the bus that
//! carries them between models, views and the controller.

pub mod event_bus;
pub mod store_events;
pub mod types;

pub use event_bus::{
    CatchAllHandler, EventBus, EventHandler, SharedEventBus, SimpleEventBus, TopicFilter,
};
pub use store_events::{BasketCheckout, StoreEvent, Topic};
pub use types::{BasketTab, OrderField};

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn shared_bus_should_deliver_through_trait_object() {
        let bus: SharedEventBus = SimpleEventBus::shared();
        let received = Arc::new(Mutex::new(false));
        let received_clone = received.clone();

        bus.subscribe(
            Topic::CatalogItemClick.into(),
            Arc::new(move |event: &StoreEvent| {
                if let StoreEvent::CatalogItemClick { id } = event {
                    *received_clone.lock().unwrap() = id == "lot-1";
                }
            }),
        );
        bus.publish(StoreEvent::CatalogItemClick {
            id: "lot-1".to_string(),
        });

        assert!(*received.lock().unwrap());
    }
}
