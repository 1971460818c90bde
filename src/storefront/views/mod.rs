//! # Views Module
//!
//! Views own node subtrees and write model data into them. Controllers
//! compose their containers into a page which the terminal renderer draws.

pub mod actions;
pub mod basket;
pub mod catalog;
pub mod component;
pub mod format;
pub mod header;
pub mod layout;
pub mod lot;
pub mod modal;
pub mod node;
pub mod order_form;
pub mod templates;
pub mod terminal_renderer;

pub use actions::UiAction;
pub use basket::BasketView;
pub use catalog::CatalogView;
pub use component::Component;
pub use header::HeaderView;
pub use layout::{layout, Focusable, LineStyle, PageLayout, ScreenLine};
pub use lot::{LotBasketRowView, LotCardView, LotDetailView, LotSoldRowView};
pub use modal::ModalView;
pub use node::Node;
pub use order_form::{OrderFormData, OrderFormView};
pub use terminal_renderer::{TerminalRenderer, ViewRenderer};
