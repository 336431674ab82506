//! Catalog CLI command
//!
//! Lists the effective item catalog, optionally narrowed to names
//! containing a search string.

use crate::config::Settings;
use crate::error::FatoraResult;

/// Handle the catalog command
pub fn handle_catalog_command(settings: &Settings, search: Option<&str>) -> FatoraResult<()> {
    let catalog = settings.catalog();

    let mut shown = 0usize;
    for name in catalog.iter() {
        if let Some(needle) = search {
            if !name.contains(needle) {
                continue;
            }
        }
        println!("{}", name);
        shown += 1;
    }

    if shown == 0 {
        match search {
            Some(needle) => println!("No catalog entries contain '{}'.", needle),
            None => println!("Catalog is empty."),
        }
    } else {
        println!("\n{} of {} entries", shown, catalog.len());
    }

    Ok(())
}
