//! # Storefront
//!
//! Models publish on a shared event bus, views render into node trees and
//! the controller glues both to the auction API and the terminal.

pub mod controllers;
pub mod events;
pub mod io;
pub mod models;
pub mod services;
pub mod views;

pub use controllers::AppController;
