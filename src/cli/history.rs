//! History CLI command
//!
//! Filters and sorts a JSON file of invoices and prints a summary table.

use std::path::PathBuf;

use chrono::Local;
use clap::Args;

use crate::config::Settings;
use crate::display::format_history_list;
use crate::error::{FatoraError, FatoraResult};
use crate::models::Invoice;
use crate::services::history::{query, DateWindow, HistoryFilter, SortOrder};

/// Arguments for the history command
#[derive(Args)]
pub struct HistoryArgs {
    /// Path to a JSON file containing an array of invoices
    pub file: PathBuf,

    /// Only show invoices whose customer or number contains this text
    #[arg(short, long)]
    pub search: Option<String>,

    /// Recency window: all, week, month
    #[arg(short, long, default_value = "all")]
    pub window: String,

    /// Sort order: date-desc, date-asc, name, most-invoices
    #[arg(long, default_value = "date-desc")]
    pub sort: String,
}

/// Handle the history command
pub fn handle_history_command(settings: &Settings, args: HistoryArgs) -> FatoraResult<()> {
    let window = DateWindow::parse(&args.window).ok_or_else(|| {
        FatoraError::Parse(format!(
            "Invalid window '{}'. Valid windows: all, week, month",
            args.window
        ))
    })?;
    let sort = SortOrder::parse(&args.sort).ok_or_else(|| {
        FatoraError::Parse(format!(
            "Invalid sort '{}'. Valid sorts: date-desc, date-asc, name, most-invoices",
            args.sort
        ))
    })?;

    let contents = std::fs::read_to_string(&args.file).map_err(|e| {
        FatoraError::Io(format!("Failed to read {}: {}", args.file.display(), e))
    })?;
    let invoices: Vec<Invoice> = serde_json::from_str(&contents)?;

    let filter = HistoryFilter {
        search: args.search,
        window,
    };
    let matched = query(&invoices, &filter, sort, Local::now().date_naive());

    println!("{}", format_history_list(&matched, &settings.currency_label));
    Ok(())
}
