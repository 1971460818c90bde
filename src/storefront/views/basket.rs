//! # Basket
//!
//! Two tabs over the basket snapshot. The active tab lists lots that are
//! still open for bidding; the closed tab lists finished lots with a
//! checkbox each, a running total and the checkout button.
//!
//! Totals are always recomputed over the closed list the checkboxes were
//! rendered from, and the selection is pruned against every new snapshot
//! before anything is drawn.

use super::format::format_amount;
use super::lot::{LotBasketRowView, LotSoldRowView};
use super::{templates, Component, Node, UiAction};
use crate::storefront::events::{BasketCheckout, BasketTab, SharedEventBus, StoreEvent};
use crate::storefront::models::{Lot, LotStatus};
use std::collections::HashSet;

const TAB_ACTIVE_CLASS: &str = "button_active";

pub struct BasketView {
    container: Node,
    bus: SharedEventBus,
    items: Vec<Lot>,
    active_tab: BasketTab,
    selected_closed_ids: HashSet<String>,
    /// Closed lots as rendered into the list; checkbox toggles sum over these
    rendered_closed: Vec<Lot>,
    total: u64,
    header_counter: usize,
    list_renders: usize,
}

impl BasketView {
    pub fn new(bus: SharedEventBus) -> Self {
        let container = Node::new("div")
            .with_class("basket-modal")
            .with_children(vec![templates::basket_tabs(), templates::basket_content()]);

        let mut view = Self {
            container,
            bus,
            items: Vec::new(),
            active_tab: BasketTab::default(),
            selected_closed_ids: HashSet::new(),
            rendered_closed: Vec::new(),
            total: 0,
            header_counter: 0,
            list_renders: 0,
        };
        view.render_current_tab();
        view
    }

    /// Replace the basket snapshot
    pub fn set_items(&mut self, items: Vec<Lot>) {
        self.items = items;
        self.cleanup_selection();
        self.header_counter = self.items.len();

        // Totals follow the snapshot whichever tab is showing
        let closed: Vec<Lot> = self
            .tab_items(BasketTab::Closed)
            .into_iter()
            .cloned()
            .collect();
        self.update_totals_and_action(&closed);
        self.rendered_closed = closed;

        self.render_current_tab();
    }

    pub fn items(&self) -> &[Lot] {
        &self.items
    }

    pub fn active_tab(&self) -> BasketTab {
        self.active_tab
    }

    /// Switch tabs. Selecting the tab already shown does nothing.
    pub fn select_tab(&mut self, tab: BasketTab) -> bool {
        if self.active_tab == tab {
            return false;
        }

        tracing::debug!("basket tab {} -> {}", self.active_tab, tab);
        self.active_tab = tab;
        self.render_current_tab();
        true
    }

    /// Flip the checkbox of a rendered closed lot
    pub fn toggle_selection(&mut self, id: &str) -> bool {
        if !self.rendered_closed.iter().any(|lot| lot.id == id) {
            tracing::warn!("selection toggle for lot {} which is not listed", id);
            return false;
        }

        let selected = if self.selected_closed_ids.remove(id) {
            false
        } else {
            self.selected_closed_ids.insert(id.to_string());
            true
        };
        self.sync_checkbox(id, selected);

        let rendered = std::mem::take(&mut self.rendered_closed);
        self.update_totals_and_action(&rendered);
        self.rendered_closed = rendered;
        true
    }

    /// Publish the selected closed lots. Nothing happens without a selection.
    pub fn checkout(&self) -> bool {
        let chosen: Vec<&Lot> = self
            .tab_items(BasketTab::Closed)
            .into_iter()
            .filter(|lot| self.selected_closed_ids.contains(&lot.id))
            .collect();

        if chosen.is_empty() {
            tracing::debug!("checkout ignored, nothing selected");
            return false;
        }

        let payload = BasketCheckout {
            items: chosen.iter().map(|lot| lot.id.clone()).collect(),
            total: chosen.iter().map(|lot| lot.price).sum(),
        };
        tracing::info!(
            "checkout of {} lots for {}",
            payload.items.len(),
            payload.total
        );
        self.bus.publish(StoreEvent::BasketCheckout(payload));
        true
    }

    /// Forget every selected lot; used once an order went through
    pub fn clear_selection(&mut self) {
        self.selected_closed_ids.clear();
        self.container
            .update_all("bid__selector-input", &mut |checkbox| checkbox.set_checked(false));

        let closed: Vec<Lot> = self
            .tab_items(BasketTab::Closed)
            .into_iter()
            .cloned()
            .collect();
        self.update_totals_and_action(&closed);
    }

    /// Route a basket node action; false for actions owned elsewhere
    pub fn handle_action(&mut self, action: &UiAction) -> bool {
        match action {
            UiAction::SelectTab(tab) => {
                self.select_tab(*tab);
                true
            }
            UiAction::ToggleSelection { id } => {
                self.toggle_selection(id);
                true
            }
            UiAction::Checkout => {
                self.checkout();
                true
            }
            _ => false,
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected_closed_ids.contains(id)
    }

    pub fn selected_count(&self) -> usize {
        self.selected_closed_ids.len()
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn is_checkout_enabled(&self) -> bool {
        self.container
            .find("basket__action")
            .is_some_and(|button| !button.is_disabled())
    }

    /// Lot count for the header badge
    pub fn header_counter(&self) -> usize {
        self.header_counter
    }

    /// How many times the row list was rebuilt
    pub fn list_render_count(&self) -> usize {
        self.list_renders
    }

    fn tab_items(&self, tab: BasketTab) -> Vec<&Lot> {
        let status = match tab {
            BasketTab::Active => LotStatus::Active,
            BasketTab::Closed => LotStatus::Closed,
        };
        self.items.iter().filter(|lot| lot.status == status).collect()
    }

    fn cleanup_selection(&mut self) {
        let closed_ids: HashSet<&str> = self
            .items
            .iter()
            .filter(|lot| lot.status == LotStatus::Closed)
            .map(|lot| lot.id.as_str())
            .collect();

        let before = self.selected_closed_ids.len();
        self.selected_closed_ids
            .retain(|id| closed_ids.contains(id.as_str()));
        let dropped = before - self.selected_closed_ids.len();
        if dropped > 0 {
            tracing::debug!("dropped {} stale basket selections", dropped);
        }
    }

    fn render_current_tab(&mut self) {
        let tab_items: Vec<Lot> = self
            .tab_items(self.active_tab)
            .into_iter()
            .cloned()
            .collect();
        self.update_tab_buttons();
        self.list_renders += 1;

        match self.active_tab {
            BasketTab::Active => {
                self.render_active_items(&tab_items);
                self.container.update("basket__actions", Node::set_hidden);
            }
            BasketTab::Closed => {
                self.render_closed_items(&tab_items);
                self.container.update("basket__actions", Node::set_visible);
                self.update_totals_and_action(&tab_items);
                self.rendered_closed = tab_items;
            }
        }
    }

    fn render_active_items(&mut self, items: &[Lot]) {
        let rows = items
            .iter()
            .map(|lot| LotBasketRowView::new().render(Some(lot)))
            .collect();
        self.container
            .update("basket__list", |list| list.replace_children(rows));
    }

    fn render_closed_items(&mut self, items: &[Lot]) {
        let rows = items
            .iter()
            .map(|lot| {
                let selected = self.selected_closed_ids.contains(&lot.id);
                LotSoldRowView::new().render_selected(lot, selected)
            })
            .collect();
        self.container
            .update("basket__list", |list| list.replace_children(rows));
    }

    fn update_tab_buttons(&mut self) {
        let active = self.active_tab;
        self.container.update_all("tabs__button", &mut |button| {
            let on = button.attr("name") == Some(active.as_str());
            button.toggle_class(TAB_ACTIVE_CLASS, on);
        });
    }

    fn update_totals_and_action(&mut self, closed_items: &[Lot]) {
        self.total = closed_items
            .iter()
            .filter(|lot| self.selected_closed_ids.contains(&lot.id))
            .map(|lot| lot.price)
            .sum();

        let total = self.total;
        self.container
            .update("basket__total", |el| el.set_text(format_amount(total)));
        self.container
            .update("basket__action", |button| button.set_disabled(total == 0));
    }

    fn sync_checkbox(&mut self, id: &str, selected: bool) {
        let toggle = UiAction::ToggleSelection { id: id.to_string() };
        self.container
            .update_all("bid__selector-input", &mut |checkbox| {
                if checkbox.action() == Some(&toggle) {
                    checkbox.set_checked(selected);
                }
            });
    }
}

impl Component<[Lot]> for BasketView {
    fn container(&self) -> &Node {
        &self.container
    }

    fn apply(&mut self, items: &[Lot]) {
        self.set_items(items.to_vec());
    }
}
