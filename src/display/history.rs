//! History display formatting
//!
//! Renders a filtered invoice list as a summary table.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Invoice;

#[derive(Tabled)]
struct HistoryRow {
    #[tabled(rename = "Number")]
    number: String,
    #[tabled(rename = "Customer")]
    customer: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Items")]
    items: usize,
    #[tabled(rename = "Total")]
    total: String,
}

impl HistoryRow {
    fn from_invoice(invoice: &Invoice, currency_label: &str) -> Self {
        Self {
            number: invoice.number.to_string(),
            customer: invoice.customer_name.clone(),
            date: invoice.date.to_string(),
            items: invoice.items.len(),
            total: invoice.total().format_with_label(currency_label),
        }
    }
}

/// Format a list of invoices as a table
pub fn format_history_list(invoices: &[&Invoice], currency_label: &str) -> String {
    if invoices.is_empty() {
        return "No invoices found.".to_string();
    }

    let mut table = Table::new(
        invoices
            .iter()
            .map(|invoice| HistoryRow::from_invoice(invoice, currency_label)),
    );
    table.with(Style::sharp());

    format!("{}\n\n{} invoice(s)\n", table, invoices.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{InvoiceNumber, LineItem, Money};
    use chrono::NaiveDate;

    fn sample_invoice(number: &str, customer: &str) -> Invoice {
        Invoice::new(
            InvoiceNumber::from(number),
            customer,
            NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
            vec![LineItem::new("برشام كيلو", Money::from_piasters(15000), 1)],
        )
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(format_history_list(&[], "جنيه"), "No invoices found.");
    }

    #[test]
    fn test_table_contains_rows_and_count() {
        let a = sample_invoice("A1B2C3", "محمد أحمد");
        let b = sample_invoice("D4E5F6", "سارة علي");
        let output = format_history_list(&[&a, &b], "جنيه");

        assert!(output.contains("A1B2C3"));
        assert!(output.contains("سارة علي"));
        assert!(output.contains("150.00 جنيه"));
        assert!(output.contains("2 invoice(s)"));
    }
}
