//! Invoice display formatting
//!
//! Renders a single invoice as a terminal preview: header fields, an items
//! table, and the grand total.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Invoice, LineItem};

#[derive(Tabled)]
struct ItemRow {
    #[tabled(rename = "Item")]
    name: String,
    #[tabled(rename = "Qty")]
    quantity: u32,
    #[tabled(rename = "Unit price")]
    unit_price: String,
    #[tabled(rename = "Total")]
    total: String,
}

impl ItemRow {
    fn from_item(item: &LineItem) -> Self {
        Self {
            name: item.name.clone(),
            quantity: item.quantity,
            unit_price: item.unit_price.to_string(),
            total: item.line_total().to_string(),
        }
    }
}

/// Format an invoice preview for terminal output
pub fn format_invoice(invoice: &Invoice, currency_label: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Invoice:  {}\n", invoice.number));
    output.push_str(&format!("Customer: {}\n", invoice.customer_name));
    if let Some(phone) = &invoice.phone_number {
        output.push_str(&format!("Phone:    {}\n", phone));
    }
    output.push_str(&format!("Date:     {}\n\n", invoice.date));

    let mut table = Table::new(invoice.items.iter().map(ItemRow::from_item));
    table.with(Style::sharp());
    output.push_str(&table.to_string());

    output.push_str(&format!(
        "\n\nTotal: {}\n",
        invoice.total().format_with_label(currency_label)
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{InvoiceNumber, Money};
    use chrono::NaiveDate;

    fn sample_invoice() -> Invoice {
        let mut invoice = Invoice::new(
            InvoiceNumber::from("K3M9XQ"),
            "محمد أحمد",
            NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
            vec![LineItem::new(
                "جلبة سوستة سوزوكي",
                Money::from_piasters(2550),
                2,
            )],
        );
        invoice.phone_number = Some("01001234567".to_string());
        invoice
    }

    #[test]
    fn test_format_contains_header_fields() {
        let output = format_invoice(&sample_invoice(), "جنيه");
        assert!(output.contains("K3M9XQ"));
        assert!(output.contains("محمد أحمد"));
        assert!(output.contains("01001234567"));
        assert!(output.contains("2025-03-14"));
    }

    #[test]
    fn test_format_contains_items_and_total() {
        let output = format_invoice(&sample_invoice(), "جنيه");
        assert!(output.contains("جلبة سوستة سوزوكي"));
        assert!(output.contains("25.50"));
        assert!(output.contains("Total: 51.00 جنيه"));
    }

    #[test]
    fn test_format_omits_missing_phone() {
        let mut invoice = sample_invoice();
        invoice.phone_number = None;
        let output = format_invoice(&invoice, "جنيه");
        assert!(!output.contains("Phone:"));
    }
}
