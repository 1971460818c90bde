//! # Storefront Application Controller
//!
//! Owns the models, views and session, and wires them to the event bus.
//! Bus handlers only enqueue; every event is then handled by one typed
//! `match` in [`AppController::dispatch`], so network calls run one at a
//! time and in the order their events were published.

use super::input::{map_key, InputCommand};
use super::session::{ModalContent, Session};
use crate::storefront::events::{
    EventHandler, SharedEventBus, SimpleEventBus, StoreEvent, Topic,
};
use crate::storefront::io::{EventStream, RenderStream};
use crate::storefront::models::{
    default_header_items, CollectionScope, Header, Lot, LotCollection,
};
use crate::storefront::services::AuctionApi;
use crate::storefront::views::format::now;
use crate::storefront::views::{
    layout, templates, BasketView, CatalogView, Component, Focusable, HeaderView,
    LotDetailView, ModalView, Node, OrderFormData, OrderFormView, PageLayout, TerminalRenderer,
    UiAction, ViewRenderer,
};
use anyhow::Result;
use chrono::{DateTime, Utc};
use crossterm::event::{Event, KeyEvent};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::time::Instant;

pub const ERROR_LOAD_FAILED: &str = "Не удалось загрузить данные";

const POLL_INTERVAL: Duration = Duration::from_millis(100);
const TICK_INTERVAL: Duration = Duration::from_secs(1);

pub struct AppController<A: AuctionApi, ES: EventStream, RS: RenderStream> {
    api: A,
    bus: SharedEventBus,
    events: UnboundedReceiver<StoreEvent>,
    session: Session,
    catalog: LotCollection,
    basket: LotCollection,
    header_view: HeaderView,
    catalog_view: CatalogView,
    basket_view: BasketView,
    lot_view: LotDetailView,
    order_view: OrderFormView,
    modal: ModalView,
    view_renderer: TerminalRenderer<RS>,
    event_stream: ES,
    page: PageLayout,
    focus: Option<usize>,
    /// Overlay state the current focus belongs to
    focus_scope: (bool, ModalContent),
    should_quit: bool,
}

impl<A: AuctionApi, ES: EventStream, RS: RenderStream> AppController<A, ES, RS> {
    /// Create the controller with injected API and I/O streams
    pub fn with_io_streams(api: A, event_stream: ES, render_stream: RS) -> Result<Self> {
        let bus = SimpleEventBus::shared();
        let (sender, events) = mpsc::unbounded_channel();
        Self::wire_bus(&bus, sender);

        let header = Header::new(default_header_items(), bus.clone());
        let mut header_view = HeaderView::new();
        header_view.render(Some(header.items()));

        let view_renderer = TerminalRenderer::with_render_stream(render_stream)?;

        Ok(Self {
            api,
            catalog: LotCollection::new(CollectionScope::Catalog, bus.clone()),
            basket: LotCollection::new(CollectionScope::Basket, bus.clone()),
            header_view,
            catalog_view: CatalogView::new(),
            basket_view: BasketView::new(bus.clone()),
            lot_view: LotDetailView::new(bus.clone()),
            order_view: OrderFormView::new(bus.clone()),
            modal: ModalView::new(bus.clone()),
            bus,
            events,
            session: Session::new(),
            view_renderer,
            event_stream,
            page: PageLayout::default(),
            focus: None,
            focus_scope: (false, ModalContent::Nothing),
            should_quit: false,
        })
    }

    /// Log every event and forward each topic into the controller queue
    fn wire_bus(bus: &SharedEventBus, sender: UnboundedSender<StoreEvent>) {
        bus.subscribe_all(Arc::new(|topic: Topic, event: &StoreEvent| {
            tracing::debug!(%topic, ?event, "bus event");
        }));

        let forward: EventHandler = Arc::new(move |event: &StoreEvent| {
            if sender.send(event.clone()).is_err() {
                tracing::warn!("controller queue closed, dropping {}", event.topic());
            }
        });
        for topic in Topic::ALL {
            bus.subscribe(topic.into(), forward.clone());
        }
    }

    /// Run the main application loop
    pub async fn run(&mut self) -> Result<()> {
        self.view_renderer.initialize()?;
        let result = self.event_loop().await;
        self.view_renderer.cleanup()?;
        result
    }

    async fn event_loop(&mut self) -> Result<()> {
        self.start().await?;
        let mut last_tick = Instant::now();

        while !self.should_quit {
            if self.event_stream.poll(POLL_INTERVAL)? {
                match self.event_stream.read()? {
                    Event::Key(key_event) => self.process_key_event(key_event).await?,
                    Event::Resize(width, height) => {
                        self.view_renderer.update_size(width, height);
                        self.refresh()?;
                    }
                    _ => {}
                }
            }

            if last_tick.elapsed() >= TICK_INTERVAL {
                last_tick = Instant::now();
                self.tick(now())?;
            }
        }

        Ok(())
    }

    /// Initial catalog load and first frame
    pub async fn start(&mut self) -> Result<()> {
        self.load_catalog().await?;
        self.refresh()
    }

    pub async fn load_catalog(&mut self) -> Result<()> {
        self.catalog_view.render_loading();
        self.refresh()?;

        match self.api.get_lot_list().await {
            Ok(items) => {
                tracing::info!("catalog loaded with {} lots", items.len());
                self.catalog.set_items(items);
            }
            Err(error) => {
                tracing::error!("Failed to load catalog: {error:#}");
                self.catalog_view
                    .render_error(ERROR_LOAD_FAILED, UiAction::ReloadCatalog);
            }
        }

        self.process_pending_events().await
    }

    /// Handle queued bus events until the queue is empty
    pub async fn process_pending_events(&mut self) -> Result<()> {
        while let Ok(event) = self.events.try_recv() {
            self.dispatch(event).await?;
        }
        Ok(())
    }

    async fn dispatch(&mut self, event: StoreEvent) -> Result<()> {
        match event {
            StoreEvent::CatalogItemsChanged { items } => {
                self.catalog_view.render(Some(items.as_slice()));
            }
            StoreEvent::CatalogItemClick { ref id } => {
                self.show_loading()?;
                match self.api.get_lot_item(id).await {
                    Ok(lot) => self.show_lot(&lot),
                    Err(error) => self.show_error(error, event.clone()),
                }
            }
            StoreEvent::LotPlaceBid { ref id, value } => {
                self.show_loading()?;
                match self.api.place_bid(id, value).await {
                    Ok(lot) => self.show_lot(&lot),
                    Err(error) => self.show_error(error, event.clone()),
                }
            }
            StoreEvent::BasketOpen => {
                self.session.basket_modal_flow = true;
                self.show_loading()?;
                match self.api.get_lot_list().await {
                    Ok(items) => self.basket.set_items(items),
                    Err(error) => self.show_error(error, StoreEvent::BasketOpen),
                }
            }
            StoreEvent::BasketItemsChanged { items } => {
                self.basket_view.set_items(items);
                self.header_view
                    .set_basket_counter(self.basket_view.header_counter());

                if self.session.basket_modal_flow {
                    let content = self.basket_view.container().clone();
                    self.open_modal(content, ModalContent::Basket);
                }
            }
            StoreEvent::BasketCheckout(checkout) => {
                self.session
                    .order
                    .reset_for_checkout(checkout.items, checkout.total);
                self.order_view = OrderFormView::new(self.bus.clone());
                self.session.order.validate();
                self.sync_order_form();

                let content = self.order_view.container().clone();
                self.open_modal(content, ModalContent::OrderForm);
            }
            StoreEvent::OrderFieldChanged { field, value } => {
                self.session.order.set_field(field, value);
                self.session.order.validate();
                self.sync_order_form();
            }
            StoreEvent::OrderSubmit => self.submit_order().await?,
            StoreEvent::ModalClose => {
                self.session.basket_modal_flow = false;
                self.session.modal_content = ModalContent::Nothing;
            }
            StoreEvent::ModalOpen => {}
        }

        Ok(())
    }

    async fn submit_order(&mut self) -> Result<()> {
        self.session.order.validate();
        self.sync_order_form();
        if !self.session.order.valid {
            tracing::debug!("order not submitted: {}", self.session.order.errors);
            return Ok(());
        }

        let request = self.session.order.to_request();
        self.show_loading()?;

        match self.api.order_lots(&request).await {
            Ok(()) => {
                self.session.basket_modal_flow = false;
                self.basket_view.clear_selection();

                self.basket.remove_ids(&request.items);

                self.open_modal(templates::success(), ModalContent::Success);
            }
            Err(error) => {
                tracing::error!("Failed to place order: {error:#}");
                self.session.order.mark_submit_failed();
                self.sync_order_form();

                let content = self.order_view.container().clone();
                self.open_modal(content, ModalContent::OrderForm);
            }
        }

        Ok(())
    }

    fn open_modal(&mut self, content: Node, kind: ModalContent) {
        self.modal.open(content);
        self.session.modal_content = kind;
    }

    /// Put the loading placeholder in the modal and draw it before a request
    fn show_loading(&mut self) -> Result<()> {
        self.open_modal(templates::loading(), ModalContent::Loading);
        self.refresh()
    }

    fn show_lot(&mut self, lot: &Lot) {
        self.lot_view.apply_at(lot, now());
        let content = self.lot_view.container().clone();
        self.open_modal(content, ModalContent::LotDetail);
    }

    /// Replace the loading placeholder with an error offering to repeat `retry`
    fn show_error(&mut self, error: anyhow::Error, retry: StoreEvent) {
        tracing::error!("{} failed: {error:#}", retry.topic());
        let content = templates::error(ERROR_LOAD_FAILED, UiAction::Emit(retry));
        self.open_modal(content, ModalContent::Error);
    }

    fn sync_order_form(&mut self) {
        let data = OrderFormData::from(&self.session.order);
        self.order_view.render(Some(&data));
        if self.session.showing(ModalContent::OrderForm) {
            self.modal
                .replace_content(self.order_view.container().clone());
        }
    }

    fn sync_lot_detail(&mut self) {
        if self.session.showing(ModalContent::LotDetail) {
            self.modal
                .replace_content(self.lot_view.container().clone());
        }
    }

    fn sync_basket(&mut self) {
        if self.session.showing(ModalContent::Basket) {
            self.modal
                .replace_content(self.basket_view.container().clone());
        }
    }

    /// Activate a node action, then settle the resulting events and redraw
    pub async fn perform_action(&mut self, action: UiAction) -> Result<()> {
        self.apply_action(action).await?;
        self.process_pending_events().await?;
        self.refresh()
    }

    async fn apply_action(&mut self, action: UiAction) -> Result<()> {
        tracing::debug!("activating {:?}", action);
        match action {
            UiAction::Emit(event) => self.bus.publish(event),
            UiAction::SelectTab(_) | UiAction::ToggleSelection { .. } | UiAction::Checkout => {
                self.basket_view.handle_action(&action);
                self.sync_basket();
            }
            UiAction::BidInput => {}
            UiAction::SubmitBid => {
                if self.lot_view.submit_bid() {
                    self.sync_lot_detail();
                }
            }
            UiAction::OrderInput(_) => {}
            UiAction::SubmitOrder => self.order_view.submit(),
            UiAction::CloseModal => self.modal.close(),
            UiAction::ReloadCatalog => self.load_catalog().await?,
        }
        Ok(())
    }

    /// Process a single key event without running the full event loop
    pub async fn process_key_event(&mut self, key_event: KeyEvent) -> Result<()> {
        let focused = self.focused().cloned();
        let editing = focused
            .as_ref()
            .is_some_and(|focusable| focusable.action.is_text_input());

        match map_key(key_event, editing) {
            InputCommand::FocusNext => self.move_focus(1),
            InputCommand::FocusPrevious => self.move_focus(-1),
            InputCommand::Activate => {
                if let Some(focusable) = focused {
                    self.activate(focusable).await?;
                }
            }
            InputCommand::Type(ch) => self.edit_focused(|value| value.push(ch)),
            InputCommand::Backspace => self.edit_focused(|value| {
                value.pop();
            }),
            InputCommand::CloseModal => self.modal.close(),
            InputCommand::Quit => {
                tracing::info!("quit requested");
                self.should_quit = true;
            }
            InputCommand::Ignore => {}
        }

        self.process_pending_events().await?;
        self.refresh()
    }

    async fn activate(&mut self, focusable: Focusable) -> Result<()> {
        if focusable.disabled {
            tracing::debug!("ignoring disabled {:?}", focusable.action);
            return Ok(());
        }

        match focusable.action {
            UiAction::BidInput => self.apply_action(UiAction::SubmitBid).await,
            UiAction::OrderInput(_) => {
                self.move_focus(1);
                Ok(())
            }
            action => self.apply_action(action).await,
        }
    }

    /// Edit the focused text input and feed the new value to its view
    fn edit_focused(&mut self, edit: impl FnOnce(&mut String)) {
        let Some(focusable) = self.focused().cloned() else {
            return;
        };
        let mut value = focusable.value;
        edit(&mut value);

        match focusable.action {
            UiAction::BidInput => {
                self.lot_view.handle_bid_input(&value);
                self.sync_lot_detail();
            }
            UiAction::OrderInput(field) => self.order_view.handle_input(field, &value),
            _ => {}
        }
    }

    fn focused(&self) -> Option<&Focusable> {
        self.focus.and_then(|index| self.page.focusables.get(index))
    }

    fn move_focus(&mut self, delta: isize) {
        let count = self.page.focusables.len();
        if count == 0 {
            self.focus = None;
            return;
        }

        let current = self.focus.unwrap_or(0) as isize;
        self.focus = Some((current + delta).rem_euclid(count as isize) as usize);
    }

    /// Countdown tick; redraws only while a lot detail is on screen
    pub fn tick(&mut self, now: DateTime<Utc>) -> Result<()> {
        if !self.session.showing(ModalContent::LotDetail) {
            return Ok(());
        }

        self.lot_view.refresh_countdown(now);
        self.sync_lot_detail();
        self.refresh()
    }

    fn compose_page(&self) -> Node {
        let page = Node::new("div").with_class("page");
        if self.modal.is_open() {
            page.with_child(self.modal.container().clone())
        } else {
            page.with_child(self.header_view.container().clone())
                .with_child(self.catalog_view.container().clone())
        }
    }

    /// Lay out the current page and draw it
    pub fn refresh(&mut self) -> Result<()> {
        self.page = layout(&self.compose_page());

        let scope = (self.modal.is_open(), self.session.modal_content);
        if scope != self.focus_scope {
            self.focus_scope = scope;
            self.focus = None;
        }

        let count = self.page.focusables.len();
        self.focus = match self.focus {
            Some(index) if index < count => Some(index),
            _ if count == 0 => None,
            _ => Some(
                self.page
                    .focusables
                    .iter()
                    .position(|focusable| !focusable.disabled)
                    .unwrap_or(0),
            ),
        };

        self.view_renderer.render_page(&self.page, self.focus)
    }

    /// Move focus to the first node carrying `action`
    pub fn focus_action(&mut self, action: &UiAction) -> bool {
        match self.page.focus_of(action) {
            Some(index) => {
                self.focus = Some(index);
                true
            }
            None => false,
        }
    }

    pub fn bus(&self) -> &SharedEventBus {
        &self.bus
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn page(&self) -> &PageLayout {
        &self.page
    }

    pub fn focus(&self) -> Option<usize> {
        self.focus
    }

    pub fn modal(&self) -> &ModalView {
        &self.modal
    }

    pub fn catalog_view(&self) -> &CatalogView {
        &self.catalog_view
    }

    pub fn basket_view(&self) -> &BasketView {
        &self.basket_view
    }

    pub fn lot_view(&self) -> &LotDetailView {
        &self.lot_view
    }

    pub fn order_view(&self) -> &OrderFormView {
        &self.order_view
    }

    pub fn header_view(&self) -> &HeaderView {
        &self.header_view
    }

    pub fn basket_items(&self) -> &[Lot] {
        self.basket.items()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
