//! # Models Module
//!
//! Plain data holders: lots, observable collections, checkout order state
//! and the header menu configuration.

pub mod header;
pub mod lot;
pub mod observable;
pub mod order;

pub use header::{default_header_items, Header, HeaderItem, HeaderTag};
pub use lot::{parse_datetime, Lot, LotStatus};
pub use observable::{CollectionScope, LotCollection, Model};
pub use order::{is_valid_email, is_valid_phone, OrderRequest, OrderState};
