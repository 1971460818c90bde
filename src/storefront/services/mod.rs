//! # Services
//!
//! Network collaborators of the storefront.

pub mod api;
pub mod mock_api;

pub use api::{AuctionApi, HttpAuctionApi, DEFAULT_TIMEOUT_SECS};
pub use mock_api::{ApiCall, ApiMethod, MockAuctionApi};
