//! Invoice CLI commands
//!
//! Builds invoices from command-line item specs and previews invoice JSON
//! files.

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_invoice;
use crate::error::{FatoraError, FatoraResult};
use crate::models::Invoice;
use crate::services::InvoiceDraft;

/// Invoice subcommands
#[derive(Subcommand)]
pub enum InvoiceCommands {
    /// Build a new invoice and print its preview
    New {
        /// Customer name
        #[arg(short, long)]
        customer: String,
        /// Customer phone number
        #[arg(short, long)]
        phone: Option<String>,
        /// Issue date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Line item as "name:price:quantity"; repeat for multiple items
        #[arg(short, long = "item", value_name = "ITEM")]
        items: Vec<String>,
        /// Write the invoice as JSON to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Validate and preview an invoice JSON file
    Preview {
        /// Path to the invoice JSON file
        file: PathBuf,
    },
}

/// Handle an invoice command
pub fn handle_invoice_command(settings: &Settings, cmd: InvoiceCommands) -> FatoraResult<()> {
    match cmd {
        InvoiceCommands::New {
            customer,
            phone,
            date,
            items,
            output,
        } => {
            let date = match date {
                Some(text) => parse_date(&text)?,
                None => Local::now().date_naive(),
            };

            let mut draft = InvoiceDraft::new();
            draft.set_customer(customer);
            if let Some(phone) = phone {
                draft.set_phone(phone);
            }
            for spec in &items {
                let (name, price, quantity) = split_item_spec(spec)?;
                draft.add_item(name, price, quantity)?;
            }

            let invoice = draft.finish(date)?;
            println!("{}", format_invoice(&invoice, &settings.currency_label));

            if let Some(path) = output {
                let json = serde_json::to_string_pretty(&invoice)?;
                std::fs::write(&path, json)?;
                println!("Saved to {}", path.display());
            }
        }
        InvoiceCommands::Preview { file } => {
            let contents = std::fs::read_to_string(&file)
                .map_err(|e| FatoraError::Io(format!("Failed to read {}: {}", file.display(), e)))?;
            let invoice: Invoice = serde_json::from_str(&contents)?;
            invoice
                .validate()
                .map_err(|e| FatoraError::Validation(e.to_string()))?;
            println!("{}", format_invoice(&invoice, &settings.currency_label));
        }
    }

    Ok(())
}

/// Split "name:price:quantity" from the right, so names may contain colons
fn split_item_spec(spec: &str) -> FatoraResult<(&str, &str, &str)> {
    let mut parts = spec.rsplitn(3, ':');
    let quantity = parts.next();
    let price = parts.next();
    let name = parts.next();

    match (name, price, quantity) {
        (Some(name), Some(price), Some(quantity)) => Ok((name, price, quantity)),
        _ => Err(FatoraError::Parse(format!(
            "Invalid item spec '{}': expected name:price:quantity",
            spec
        ))),
    }
}

fn parse_date(text: &str) -> FatoraResult<NaiveDate> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map_err(|_| FatoraError::Parse(format!("Invalid date '{}': expected YYYY-MM-DD", text)))
}
