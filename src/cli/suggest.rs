//! Suggest CLI command
//!
//! Runs the item-name matcher against the effective catalog and prints the
//! ranked list.

use crate::config::Settings;
use crate::display::format_suggestions;
use crate::error::FatoraResult;

/// Handle the suggest command
pub fn handle_suggest_command(settings: &Settings, query: &str) -> FatoraResult<()> {
    let catalog = settings.catalog();
    let suggestions = catalog.suggest(query);
    println!("{}", format_suggestions(query, &suggestions));
    Ok(())
}
