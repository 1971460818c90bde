//! Lot detail view shown in the modal
//!
//! | status | timer                 | bid form                 | history            |
//! |--------|-----------------------|--------------------------|--------------------|
//! | wait   | time until open       | hidden                   | shown if non-empty |
//! | active | time until close      | shown if history present | shown if non-empty |
//! | closed | "auction ended"+price | hidden                   | shown if non-empty |
//!
//! Bid amounts are not validated here; the auction API decides whether a
//! bid is acceptable.

use crate::storefront::events::{SharedEventBus, StoreEvent};
use crate::storefront::models::{Lot, LotStatus};
use crate::storefront::views::format::{
    digits_only, format_amount, format_countdown, format_currency, now,
};
use crate::storefront::views::{templates, Component, Node};
use chrono::{DateTime, Utc};

const NO_DATE: &str = "Дата не указана";

pub struct LotDetailView {
    container: Node,
    bus: SharedEventBus,
    id: String,
    title: String,
    status: Option<LotStatus>,
    datetime: Option<DateTime<Utc>>,
    price: u64,
    history: Option<Vec<u64>>,
}

impl LotDetailView {
    pub fn new(bus: SharedEventBus) -> Self {
        Self {
            container: templates::lot_detail(),
            bus,
            id: String::new(),
            title: String::new(),
            status: None,
            datetime: None,
            price: 0,
            history: None,
        }
    }

    pub fn lot_id(&self) -> &str {
        &self.id
    }

    /// Render `lot` with the countdown measured from `now`
    pub fn apply_at(&mut self, lot: &Lot, now: DateTime<Utc>) {
        if self.id != lot.id {
            self.set_bid_value("");
        }
        self.id = lot.id.clone();
        self.set_title(&lot.title);
        self.set_description(lot.long_description());
        self.set_image(&lot.image);

        self.status = Some(lot.status);
        self.datetime = lot.datetime;
        self.price = lot.price;
        self.set_history(lot.history.clone());

        self.sync_status_text(now);
        self.sync_bid_form();
    }

    /// Recompute the timer text; called on every tick while the lot is shown
    pub fn refresh_countdown(&mut self, now: DateTime<Utc>) {
        self.sync_status_text(now);
    }

    /// Operator typed into the bid input; keep digits and regroup them
    pub fn handle_bid_input(&mut self, raw: &str) {
        let digits = digits_only(raw);
        let display = match digits.parse::<u64>() {
            Ok(amount) => format_amount(amount),
            Err(_) => digits,
        };
        self.set_bid_value(&display);
    }

    /// Publish the typed bid and clear the input. Ignored while the form is
    /// hidden.
    pub fn submit_bid(&mut self) -> bool {
        if !self.is_bid_form_visible() {
            tracing::debug!("bid submit ignored, form hidden for lot {}", self.id);
            return false;
        }

        let value = digits_only(self.bid_value()).parse::<u64>().unwrap_or(0);
        self.set_bid_value("");

        tracing::info!("placing bid {} on lot {}", value, self.id);
        self.bus.publish(StoreEvent::LotPlaceBid {
            id: self.id.clone(),
            value,
        });
        true
    }

    pub fn bid_value(&self) -> &str {
        self.container
            .find("lot__bid-input")
            .map(Node::value)
            .unwrap_or_default()
    }

    pub fn is_bid_form_visible(&self) -> bool {
        self.container
            .find("lot__bid")
            .is_some_and(|form| !form.is_hidden())
    }

    fn set_bid_value(&mut self, value: &str) {
        self.container
            .update("lot__bid-input", |input| input.set_value(value));
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
        self.container.update("lot__title", |el| el.set_text(title));
    }

    fn set_description(&mut self, text: &str) {
        let mut paragraphs: Vec<Node> = text
            .split('\n')
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| Node::new("p").with_class("lot__description").with_text(line))
            .collect();
        if paragraphs.is_empty() {
            paragraphs.push(Node::new("p").with_class("lot__description"));
        }

        self.container.update("lot__content", |content| {
            let children = content.children_mut();
            children.retain(|child| !child.has_class("lot__description"));
            let at = children
                .iter()
                .position(|child| child.has_class("lot__title"))
                .map_or(0, |index| index + 1);
            children.splice(at..at, paragraphs);
        });
    }

    fn set_image(&mut self, src: &str) {
        let alt = self.title.clone();
        self.container
            .update("lot__image", |el| el.set_image(src, Some(&alt)));
    }

    fn set_history(&mut self, history: Option<Vec<u64>>) {
        self.history = history;
        let bids = self.history.clone().unwrap_or_default();

        self.container.update("lot__history", |el| {
            if bids.is_empty() {
                el.replace_children(Vec::new());
                el.set_hidden();
                return;
            }

            let items = bids
                .iter()
                .map(|bid| {
                    Node::new("li")
                        .with_class("lot__history-item")
                        .with_text(format_amount(*bid))
                })
                .collect();
            el.replace_children(vec![
                Node::new("span")
                    .with_class("lot__history-caption")
                    .with_text("Последние ставки:"),
                Node::new("ul")
                    .with_class("lot__history-bids")
                    .with_children(items),
            ]);
            el.set_visible();
        });
    }

    fn countdown(&self, now: DateTime<Utc>) -> String {
        match self.datetime {
            Some(target) => format_countdown(target, now),
            None => NO_DATE.to_string(),
        }
    }

    fn sync_status_text(&mut self, now: DateTime<Utc>) {
        let Some(status) = self.status else {
            return;
        };

        let (timer, text) = match status {
            LotStatus::Wait => (self.countdown(now), "До начала аукциона".to_string()),
            LotStatus::Active => (self.countdown(now), "До закрытия лота".to_string()),
            LotStatus::Closed => (
                "Аукцион завершён".to_string(),
                format!("Продано за {}", format_currency(self.price)),
            ),
        };

        self.container
            .update("lot__status-timer", |el| el.set_text(timer));
        self.container
            .update("lot__status-text", |el| el.set_text(text));
    }

    fn sync_bid_form(&mut self) {
        let visible = self.status == Some(LotStatus::Active) && self.history.is_some();
        self.container.update("lot__bid", |form| {
            if visible {
                form.set_visible();
            } else {
                form.set_hidden();
            }
        });
    }
}

impl Component<Lot> for LotDetailView {
    fn container(&self) -> &Node {
        &self.container
    }

    fn apply(&mut self, lot: &Lot) {
        self.apply_at(lot, now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storefront::events::{SimpleEventBus, Topic};
    use chrono::{Duration, TimeZone};
    use std::sync::{Arc, Mutex};

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
    }

    fn lot(status: LotStatus, history: Option<Vec<u64>>) -> Lot {
        Lot {
            id: "lot-7".to_string(),
            title: "Часы".to_string(),
            description: "Первая строка\n\n  Вторая строка  ".to_string(),
            image: "https://cdn/watch.png".to_string(),
            status,
            datetime: Some(fixed_now() + Duration::days(1) + Duration::hours(2)),
            price: 12500,
            min_price: 10000,
            history,
            ..Lot::default()
        }
    }

    fn view_with_events() -> (LotDetailView, Arc<Mutex<Vec<StoreEvent>>>) {
        let bus = SimpleEventBus::shared();
        let received = Arc::new(Mutex::new(Vec::new()));
        let received_clone = received.clone();
        bus.subscribe_all(Arc::new(move |_: Topic, event: &StoreEvent| {
            received_clone.lock().unwrap().push(event.clone());
        }));
        (LotDetailView::new(bus), received)
    }

    fn text_of(view: &LotDetailView, class: &str) -> String {
        view.container().find(class).unwrap().text().to_string()
    }

    #[test]
    fn wait_lot_should_count_down_to_opening_and_hide_form() {
        let (mut view, _) = view_with_events();
        view.apply_at(&lot(LotStatus::Wait, None), fixed_now());

        assert_eq!(text_of(&view, "lot__status-timer"), "1д 2ч 0 мин 0 сек");
        assert_eq!(text_of(&view, "lot__status-text"), "До начала аукциона");
        assert!(!view.is_bid_form_visible());
        assert!(view.container().find("lot__history").unwrap().is_hidden());
    }

    #[test]
    fn active_lot_should_show_form_only_when_history_present() {
        let (mut view, _) = view_with_events();

        view.apply_at(&lot(LotStatus::Active, Some(vec![])), fixed_now());
        assert!(view.is_bid_form_visible());
        assert!(view.container().find("lot__history").unwrap().is_hidden());

        view.apply_at(&lot(LotStatus::Active, None), fixed_now());
        assert!(!view.is_bid_form_visible());
    }

    #[test]
    fn active_lot_with_empty_history_should_offer_bid_form() {
        let (mut view, _) = view_with_events();
        view.apply_at(&lot(LotStatus::Active, Some(Vec::new())), fixed_now());

        assert!(view.is_bid_form_visible());
        assert!(view.container().find("lot__history").unwrap().is_hidden());
        assert!(view.container().find("lot__history-item").is_none());
    }

    #[test]
    fn active_lot_should_list_history() {
        let (mut view, _) = view_with_events();
        view.apply_at(&lot(LotStatus::Active, Some(vec![10000, 12500])), fixed_now());

        let history = view.container().find("lot__history").unwrap();
        assert!(!history.is_hidden());
        let items = history.find_all("lot__history-item");
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].text(), "12\u{a0}500");
        assert_eq!(text_of(&view, "lot__status-text"), "До закрытия лота");
    }

    #[test]
    fn closed_lot_should_show_sale_price() {
        let (mut view, _) = view_with_events();
        view.apply_at(&lot(LotStatus::Closed, Some(vec![12500])), fixed_now());

        assert_eq!(text_of(&view, "lot__status-timer"), "Аукцион завершён");
        assert_eq!(
            text_of(&view, "lot__status-text"),
            "Продано за 12\u{a0}500\u{a0}₽"
        );
        assert!(!view.is_bid_form_visible());
        assert!(!view.container().find("lot__history").unwrap().is_hidden());
    }

    #[test]
    fn missing_date_should_say_so() {
        let (mut view, _) = view_with_events();
        let mut lot = lot(LotStatus::Active, Some(vec![]));
        lot.datetime = None;
        view.apply_at(&lot, fixed_now());

        assert_eq!(text_of(&view, "lot__status-timer"), "Дата не указана");
    }

    #[test]
    fn description_should_split_into_paragraphs_after_title() {
        let (mut view, _) = view_with_events();
        view.apply_at(&lot(LotStatus::Wait, None), fixed_now());
        view.apply_at(&lot(LotStatus::Wait, None), fixed_now());

        let content = view.container().find("lot__content").unwrap();
        let paragraphs = content.find_all("lot__description");
        assert_eq!(paragraphs.len(), 2);
        assert_eq!(paragraphs[0].text(), "Первая строка");
        assert_eq!(paragraphs[1].text(), "Вторая строка");
        assert!(content.children()[1].has_class("lot__description"));
    }

    #[test]
    fn refresh_countdown_should_follow_clock() {
        let (mut view, _) = view_with_events();
        view.apply_at(&lot(LotStatus::Active, Some(vec![])), fixed_now());
        view.refresh_countdown(fixed_now() + Duration::hours(2));

        assert_eq!(text_of(&view, "lot__status-timer"), "1д 0ч 0 мин 0 сек");
    }

    #[test]
    fn bid_input_should_keep_digits_only() {
        let (mut view, _) = view_with_events();
        view.apply_at(&lot(LotStatus::Active, Some(vec![])), fixed_now());

        view.handle_bid_input("15a00b0");
        assert_eq!(view.bid_value(), "15\u{a0}000");

        view.handle_bid_input("abc");
        assert_eq!(view.bid_value(), "");
    }

    #[test]
    fn submit_bid_should_emit_value_and_clear_input() {
        let (mut view, received) = view_with_events();
        view.apply_at(&lot(LotStatus::Active, Some(vec![])), fixed_now());
        view.handle_bid_input("13000");

        assert!(view.submit_bid());

        assert_eq!(view.bid_value(), "");
        assert_eq!(
            *received.lock().unwrap(),
            vec![StoreEvent::LotPlaceBid {
                id: "lot-7".to_string(),
                value: 13000
            }]
        );
    }

    #[test]
    fn submit_bid_should_not_validate_amount() {
        let (mut view, received) = view_with_events();
        view.apply_at(&lot(LotStatus::Active, Some(vec![])), fixed_now());
        view.handle_bid_input("1");

        assert!(view.submit_bid());
        assert_eq!(received.lock().unwrap().len(), 1);
    }

    #[test]
    fn submit_bid_should_be_ignored_when_form_hidden() {
        let (mut view, received) = view_with_events();
        view.apply_at(&lot(LotStatus::Closed, None), fixed_now());

        assert!(!view.submit_bid());
        assert!(received.lock().unwrap().is_empty());
    }
}
