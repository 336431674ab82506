//! Service layer for Fatora
//!
//! Business logic on top of the models: assembling invoice drafts the way
//! the entry form does, and querying invoice history for display.

pub mod history;
pub mod invoice;

pub use history::{DateWindow, HistoryFilter, SortOrder};
pub use invoice::InvoiceDraft;
