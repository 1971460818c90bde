//! Shared fixtures for the storefront integration tests

#![allow(dead_code)]

use chrono::{Duration, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use lotline::io::{MockEventStream, MockRenderHandle, MockRenderStream};
use lotline::models::{Lot, LotStatus};
use lotline::services::MockAuctionApi;
use lotline::AppController;

pub type TestController = AppController<MockAuctionApi, MockEventStream, MockRenderStream>;

pub fn lot(id: &str, title: &str, status: LotStatus, price: u64) -> Lot {
    Lot {
        id: id.to_string(),
        title: title.to_string(),
        about: format!("{title}, кратко"),
        description: format!("{title}, подробно\nВторой абзац"),
        image: format!("/{id}.jpg"),
        status,
        datetime: Some(Utc::now() + Duration::hours(2)),
        price,
        min_price: 100,
        history: None,
    }
}

/// Two closed lots, one open for bidding and one not started yet
pub fn auction_lots() -> Vec<Lot> {
    vec![
        Lot {
            history: Some(vec![900, 1000]),
            ..lot("a1", "Часы", LotStatus::Active, 1000)
        },
        lot("w1", "Ваза", LotStatus::Wait, 0),
        lot("c1", "Картина", LotStatus::Closed, 5000),
        lot("c2", "Кресло", LotStatus::Closed, 7000),
    ]
}

pub fn controller_with(api: &MockAuctionApi, events: MockEventStream) -> (TestController, MockRenderHandle) {
    let render_stream = MockRenderStream::with_size((100, 40));
    let handle = render_stream.handle();
    let controller = AppController::with_io_streams(api.clone(), events, render_stream)
        .expect("controller should build");
    (controller, handle)
}

/// Controller with the catalog already loaded
pub async fn started(api: &MockAuctionApi) -> (TestController, MockRenderHandle) {
    let (mut controller, handle) = controller_with(api, MockEventStream::empty());
    controller.start().await.expect("start should succeed");
    (controller, handle)
}

pub fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// Type `text` into whatever input has focus
pub async fn type_text(controller: &mut TestController, text: &str) {
    for ch in text.chars() {
        controller
            .process_key_event(press(KeyCode::Char(ch)))
            .await
            .expect("key should be handled");
    }
}
