//! Checkout order state
//!
//! Transient form-backing state recomputed on every field change. It lives
//! in the controller session for one checkout and is never persisted.

use crate::storefront::events::OrderField;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const ERROR_FILL_FIELDS: &str = "Заполните поля";
pub const ERROR_EMAIL: &str = "Проверьте email";
pub const ERROR_PHONE: &str = "Проверьте телефон";
pub const ERROR_NO_LOTS: &str = "Выберите лоты";
pub const ERROR_ORDER_FAILED: &str = "Не удалось оформить заказ, попробуйте снова";

const MIN_PHONE_DIGITS: usize = 10;

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"))
}

/// `local@domain.tld` with no whitespace, checked on the trimmed value
pub fn is_valid_email(value: &str) -> bool {
    let value = value.trim();
    !value.is_empty() && email_pattern().is_match(value)
}

/// At least ten digits, whatever the formatting around them
pub fn is_valid_phone(value: &str) -> bool {
    value.chars().filter(|c| c.is_ascii_digit()).count() >= MIN_PHONE_DIGITS
}

/// Order body sent to the auction API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub email: String,
    pub phone: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderState {
    pub email: String,
    pub phone: String,
    pub items: Vec<String>,
    pub total: u64,
    pub valid: bool,
    pub errors: String,
}

impl OrderState {
    pub fn new() -> Self {
        Self {
            email: String::new(),
            phone: String::new(),
            items: Vec::new(),
            total: 0,
            valid: false,
            errors: ERROR_FILL_FIELDS.to_string(),
        }
    }

    /// Start a fresh checkout for the given lots
    pub fn reset_for_checkout(&mut self, items: Vec<String>, total: u64) {
        *self = Self {
            items,
            total,
            ..Self::new()
        };
    }

    pub fn set_field(&mut self, field: OrderField, value: String) {
        match field {
            OrderField::Email => self.email = value,
            OrderField::Phone => self.phone = value,
        }
    }

    /// Recompute `valid` and the joined error message
    pub fn validate(&mut self) -> bool {
        let mut errors = Vec::new();

        if !is_valid_email(&self.email) {
            errors.push(ERROR_EMAIL);
        }
        if self.phone.trim().is_empty() || !is_valid_phone(&self.phone) {
            errors.push(ERROR_PHONE);
        }
        if self.items.is_empty() {
            errors.push(ERROR_NO_LOTS);
        }

        self.valid = errors.is_empty();
        self.errors = errors.join(", ");
        self.valid
    }

    /// Mark a submission failure while keeping the form usable
    pub fn mark_submit_failed(&mut self) {
        self.valid = true;
        self.errors = ERROR_ORDER_FAILED.to_string();
    }

    pub fn to_request(&self) -> OrderRequest {
        OrderRequest {
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            items: self.items.clone(),
        }
    }
}

impl Default for OrderState {
    fn default() -> Self {
        Self::new()
    }
}
