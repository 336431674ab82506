//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod catalog;
pub mod history;
pub mod invoice;
pub mod suggest;

pub use catalog::handle_catalog_command;
pub use history::{handle_history_command, HistoryArgs};
pub use invoice::{handle_invoice_command, InvoiceCommands};
pub use suggest::handle_suggest_command;
