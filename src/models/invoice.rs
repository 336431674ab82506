//! Invoice and line-item models
//!
//! An invoice is a customer name, an optional phone number, a date, a short
//! invoice number, and the list of line items. Totals are always derived
//! from the items rather than stored, so they cannot drift.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{InvoiceId, InvoiceNumber};
use super::money::Money;

/// Maximum length accepted for a customer or item name
pub const MAX_NAME_LEN: usize = 100;

/// A single line on an invoice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Item name as entered (usually picked from the suggestion list)
    pub name: String,
    /// Price per unit
    pub unit_price: Money,
    /// Number of units
    pub quantity: u32,
}

impl LineItem {
    /// Create a new line item
    pub fn new(name: impl Into<String>, unit_price: Money, quantity: u32) -> Self {
        Self {
            name: name.into(),
            unit_price,
            quantity,
        }
    }

    /// Total for this line (unit price times quantity)
    pub fn line_total(&self) -> Money {
        self.unit_price * self.quantity
    }

    /// Validate the line item
    pub fn validate(&self) -> Result<(), InvoiceValidationError> {
        if self.name.trim().is_empty() {
            return Err(InvoiceValidationError::EmptyItemName);
        }
        if self.name.len() > MAX_NAME_LEN {
            return Err(InvoiceValidationError::NameTooLong(self.name.len()));
        }
        if self.quantity == 0 {
            return Err(InvoiceValidationError::ZeroQuantity(self.name.clone()));
        }
        if self.unit_price.is_negative() {
            return Err(InvoiceValidationError::NegativePrice(self.name.clone()));
        }
        Ok(())
    }
}

/// A complete invoice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    /// Internal identity
    #[serde(default)]
    pub id: InvoiceId,
    /// Short human-facing code shown on the printed invoice
    pub number: InvoiceNumber,
    /// Customer the invoice is made out to
    pub customer_name: String,
    /// Optional contact number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// Issue date
    pub date: NaiveDate,
    /// Line items
    pub items: Vec<LineItem>,
}

impl Invoice {
    /// Create a new invoice with a fresh id
    pub fn new(
        number: InvoiceNumber,
        customer_name: impl Into<String>,
        date: NaiveDate,
        items: Vec<LineItem>,
    ) -> Self {
        Self {
            id: InvoiceId::new(),
            number,
            customer_name: customer_name.into(),
            phone_number: None,
            date,
            items,
        }
    }

    /// Grand total across all line items
    pub fn total(&self) -> Money {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Validate the invoice
    ///
    /// Mirrors the checks the entry form applies before an invoice can move
    /// on to preview: a customer name is required and at least one item must
    /// be present.
    pub fn validate(&self) -> Result<(), InvoiceValidationError> {
        if self.customer_name.trim().is_empty() {
            return Err(InvoiceValidationError::EmptyCustomerName);
        }
        if self.customer_name.len() > MAX_NAME_LEN {
            return Err(InvoiceValidationError::NameTooLong(self.customer_name.len()));
        }
        if self.items.is_empty() {
            return Err(InvoiceValidationError::NoItems);
        }
        for item in &self.items {
            item.validate()?;
        }
        Ok(())
    }

    /// Check if either the customer name or the invoice number contains the
    /// query, case-insensitively (the history search rule)
    pub fn matches_search(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.customer_name.to_lowercase().contains(&query)
            || self.number.as_str().to_lowercase().contains(&query)
    }
}

impl fmt::Display for Invoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} ({}, {} items)",
            self.number,
            self.customer_name,
            self.date,
            self.items.len()
        )
    }
}

/// Validation errors for invoices and line items
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvoiceValidationError {
    EmptyCustomerName,
    NoItems,
    EmptyItemName,
    NameTooLong(usize),
    ZeroQuantity(String),
    NegativePrice(String),
}

impl fmt::Display for InvoiceValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCustomerName => write!(f, "Customer name cannot be empty"),
            Self::NoItems => write!(f, "Invoice must contain at least one item"),
            Self::EmptyItemName => write!(f, "Item name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Name too long ({} chars, max {})", len, MAX_NAME_LEN)
            }
            Self::ZeroQuantity(name) => write!(f, "Quantity must be positive for '{}'", name),
            Self::NegativePrice(name) => write!(f, "Price cannot be negative for '{}'", name),
        }
    }
}

impl std::error::Error for InvoiceValidationError {}
