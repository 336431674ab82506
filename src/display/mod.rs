//! Terminal output formatting
//!
//! Formats invoices, history tables, and suggestion lists for terminal
//! output. All functions return strings; printing is left to the CLI layer.

pub mod history;
pub mod invoice;
pub mod suggestions;

pub use history::format_history_list;
pub use invoice::format_invoice;
pub use suggestions::format_suggestions;
