//! # lotline - Terminal Auction Storefront
//!
//! Browse auction lots, place bids, and check out won lots from a terminal.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────┐  items:changed  ┌──────────────┐   render   ┌──────────┐
//! │  Models  │────────────────►│  Event bus   │───────────►│  Views   │
//! │          │                 │              │            │          │
//! │ - Lots   │                 │ - Topics     │            │ - Nodes  │
//! │ - Order  │                 │ - Patterns   │            │ - Layout │
//! └──────────┘                 └──────────────┘            └──────────┘
//!       ▲                             ▲ │                        │
//!       │ set_items                   │ │ dispatch               │ actions
//!       │                             │ ▼                        ▼
//!       │                      ┌──────────────┐            ┌──────────┐
//!       └──────────────────────│  Controller  │◄───────────│ Terminal │
//!                              │ - Auction API│    keys    │          │
//!                              └──────────────┘            └──────────┘
//! ```

pub mod cmd_args;
pub mod config;
pub mod storefront;

// Re-export main types for easy access
pub use storefront::*;
