//! # Controllers Module
//!
//! The application controller drives the storefront: it owns the session,
//! turns key presses into view actions and handles every bus event.

pub mod app_controller;
pub mod input;
pub mod session;

pub use app_controller::{AppController, ERROR_LOAD_FAILED};
pub use input::{map_key, InputCommand};
pub use session::{ModalContent, Session};
