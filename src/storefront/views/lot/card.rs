//! Catalog card for one lot

use crate::storefront::events::StoreEvent;
use crate::storefront::models::{Lot, LotStatus};
use crate::storefront::views::format::format_date;
use crate::storefront::views::{templates, Component, Node, UiAction};
use chrono::{DateTime, Local, Utc};

pub struct LotCardView {
    container: Node,
    title: String,
}

impl LotCardView {
    pub fn new() -> Self {
        Self {
            container: templates::card(),
            title: String::new(),
        }
    }

    fn set_id(&mut self, id: &str) {
        let action = UiAction::Emit(StoreEvent::CatalogItemClick { id: id.to_string() });
        self.container
            .update("card__action", |button| button.set_action(action));
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
        self.container
            .update("card__title", |el| el.set_text(title));
    }

    fn set_about(&mut self, about: &str) {
        self.container
            .update("card__description", |el| el.set_text(about));
    }

    fn set_image(&mut self, src: &str) {
        let alt = self.title.clone();
        self.container
            .update("card__image", |el| el.set_image(src, Some(&alt)));
    }

    fn set_status(&mut self, status: LotStatus, datetime: Option<DateTime<Utc>>) {
        let text = status_text(status, datetime);
        self.container.update("card__status", |el| {
            el.set_text(text);
            el.toggle_class("card__status_active", status == LotStatus::Active);
            el.toggle_class("card__status_closed", status == LotStatus::Closed);
        });
    }
}

impl Default for LotCardView {
    fn default() -> Self {
        Self::new()
    }
}

impl Component<Lot> for LotCardView {
    fn container(&self) -> &Node {
        &self.container
    }

    fn apply(&mut self, lot: &Lot) {
        self.set_id(&lot.id);
        self.set_title(&lot.title);
        self.set_about(&lot.about);
        self.set_image(&lot.image);
        self.set_status(lot.status, lot.datetime);
    }
}

/// Card status line: when the auction opens, closes or closed
pub fn status_text(status: LotStatus, datetime: Option<DateTime<Utc>>) -> String {
    let date = datetime.map(|d| format_date(&d.with_timezone(&Local)));
    let prefix = match status {
        LotStatus::Wait => "Откроется",
        LotStatus::Active => "Открыто до",
        LotStatus::Closed => "Закрыто",
    };

    match date {
        Some(date) => format!("{prefix} {date}"),
        None => format!("{prefix} (дата не указана)"),
    }
}
