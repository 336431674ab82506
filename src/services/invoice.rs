//! Invoice draft assembly
//!
//! The entry form builds an invoice incrementally: the user names the
//! customer, then adds items one at a time through a small add-item dialog.
//! [`InvoiceDraft`] is that in-progress state; `finish` turns it into a
//! validated [`Invoice`].

use chrono::NaiveDate;

use crate::error::{FatoraError, FatoraResult};
use crate::models::{Invoice, InvoiceNumber, LineItem, Money};
use crate::suggest::Catalog;

/// An invoice being assembled, owned by the caller for the duration of entry
#[derive(Debug, Clone, Default)]
pub struct InvoiceDraft {
    customer_name: String,
    phone_number: Option<String>,
    items: Vec<LineItem>,
}

impl InvoiceDraft {
    /// Start an empty draft
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the customer name
    pub fn set_customer(&mut self, name: impl Into<String>) {
        self.customer_name = name.into();
    }

    /// Set the optional phone number
    pub fn set_phone(&mut self, phone: impl Into<String>) {
        let phone = phone.into();
        self.phone_number = if phone.trim().is_empty() {
            None
        } else {
            Some(phone)
        };
    }

    /// Add an item from the raw text the add-item dialog collects
    ///
    /// All three fields are required; price and quantity must parse and the
    /// resulting line item must pass validation.
    pub fn add_item(&mut self, name: &str, price_text: &str, quantity_text: &str) -> FatoraResult<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(FatoraError::Validation("Item name cannot be empty".into()));
        }

        let unit_price = Money::parse(price_text)
            .map_err(|e| FatoraError::Parse(format!("Invalid price '{}': {}", price_text, e)))?;
        let quantity: u32 = quantity_text
            .trim()
            .parse()
            .map_err(|_| FatoraError::Parse(format!("Invalid quantity '{}'", quantity_text)))?;

        self.push_item(LineItem::new(name, unit_price, quantity))
    }

    /// Add an already-constructed line item
    pub fn push_item(&mut self, item: LineItem) -> FatoraResult<()> {
        item.validate()
            .map_err(|e| FatoraError::Validation(e.to_string()))?;
        self.items.push(item);
        Ok(())
    }

    /// Remove the item at `index`, returning it
    pub fn remove_item(&mut self, index: usize) -> FatoraResult<LineItem> {
        if index >= self.items.len() {
            return Err(FatoraError::Validation(format!(
                "No item at position {} (draft has {})",
                index,
                self.items.len()
            )));
        }
        Ok(self.items.remove(index))
    }

    /// Items added so far
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Running total across the items added so far
    pub fn total(&self) -> Money {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Suggestions for the item-name field as currently typed
    ///
    /// Pass-through to the catalog matcher; called on every keystroke of the
    /// name field.
    pub fn suggest_item_names<'a>(&self, typed: &str, catalog: &'a Catalog) -> Vec<&'a str> {
        catalog.suggest(typed)
    }

    /// Finalize the draft into a validated invoice with a fresh number
    pub fn finish(self, date: NaiveDate) -> FatoraResult<Invoice> {
        self.finish_with_number(date, InvoiceNumber::generate())
    }

    /// Finalize with a caller-supplied invoice number
    pub fn finish_with_number(self, date: NaiveDate, number: InvoiceNumber) -> FatoraResult<Invoice> {
        let mut invoice = Invoice::new(number, self.customer_name, date, self.items);
        invoice.phone_number = self.phone_number;
        invoice
            .validate()
            .map_err(|e| FatoraError::Validation(e.to_string()))?;
        Ok(invoice)
    }
}
