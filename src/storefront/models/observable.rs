//! Observable models
//!
//! A model is a plain data holder bound to the event bus. Controllers mutate
//! the data and then call `emit_changes`; the model itself performs no
//! validation or derived computation.

use super::lot::Lot;
use crate::storefront::events::{SharedEventBus, StoreEvent};

/// Data snapshot bound to the shared event bus
pub struct Model<T> {
    data: T,
    bus: SharedEventBus,
}

impl<T> Model<T> {
    pub fn new(data: T, bus: SharedEventBus) -> Self {
        Self { data, bus }
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    /// Replace the whole snapshot
    pub fn replace(&mut self, data: T) {
        self.data = data;
    }

    /// Announce a change to every interested subscriber
    pub fn emit_changes(&self, event: StoreEvent) {
        self.bus.publish(event);
    }

    pub fn bus(&self) -> &SharedEventBus {
        &self.bus
    }
}

/// Which list a [`LotCollection`] backs; decides the change topic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionScope {
    Catalog,
    Basket,
}

impl CollectionScope {
    fn changed_event(self, items: Vec<Lot>) -> StoreEvent {
        match self {
            CollectionScope::Catalog => StoreEvent::CatalogItemsChanged { items },
            CollectionScope::Basket => StoreEvent::BasketItemsChanged { items },
        }
    }
}

/// List of lots that announces every replacement
pub struct LotCollection {
    model: Model<Vec<Lot>>,
    scope: CollectionScope,
}

impl LotCollection {
    pub fn new(scope: CollectionScope, bus: SharedEventBus) -> Self {
        Self {
            model: Model::new(Vec::new(), bus),
            scope,
        }
    }

    pub fn items(&self) -> &[Lot] {
        self.model.data()
    }

    pub fn scope(&self) -> CollectionScope {
        self.scope
    }

    /// Replace the list and emit the scope's `items:changed` event
    pub fn set_items(&mut self, items: Vec<Lot>) {
        tracing::debug!("{:?} collection now holds {} lots", self.scope, items.len());
        self.model.replace(items);
        self.model
            .emit_changes(self.scope.changed_event(self.model.data().clone()));
    }

    /// Drop the given ids and re-announce the remaining list
    pub fn remove_ids(&mut self, ids: &[String]) {
        let remaining: Vec<Lot> = self
            .items()
            .iter()
            .filter(|lot| !ids.contains(&lot.id))
            .cloned()
            .collect();
        self.set_items(remaining);
    }
}
