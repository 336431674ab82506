//! Core data models for Fatora
//!
//! This module contains the data structures that represent the invoicing
//! domain: money amounts, invoice identifiers, invoices and their line items.

pub mod ids;
pub mod invoice;
pub mod money;

pub use ids::{InvoiceId, InvoiceNumber};
pub use invoice::{Invoice, InvoiceValidationError, LineItem};
pub use money::Money;
