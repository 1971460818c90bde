//! # Event Types
//!
//! Small value types shared by events, views and controllers.

use std::fmt;

/// The two mutually exclusive basket tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BasketTab {
    /// Lots the operator is still bidding on
    #[default]
    Active,
    /// Lots whose auction has ended and can be checked out
    Closed,
}

impl BasketTab {
    pub fn as_str(&self) -> &'static str {
        match self {
            BasketTab::Active => "active",
            BasketTab::Closed => "closed",
        }
    }

    /// The other tab
    pub fn opposite(&self) -> Self {
        match self {
            BasketTab::Active => BasketTab::Closed,
            BasketTab::Closed => BasketTab::Active,
        }
    }
}

impl fmt::Display for BasketTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Editable fields of the checkout form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderField {
    Email,
    Phone,
}

impl OrderField {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderField::Email => "email",
            OrderField::Phone => "phone",
        }
    }
}

impl fmt::Display for OrderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
