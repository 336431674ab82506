//! Invoice history queries
//!
//! Pure filter and sort logic for the history view: free-text search over
//! customer name and invoice number, a recency window, and a handful of
//! sort orders. Callers supply the invoice set and today's date; nothing
//! here touches storage or the network.

use chrono::NaiveDate;

use crate::models::Invoice;

/// How far back the history view reaches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateWindow {
    /// Every invoice
    #[default]
    All,
    /// Invoices issued within the last 7 days
    LastWeek,
    /// Invoices issued within the last 30 days
    LastMonth,
}

impl DateWindow {
    /// Parse a window name (all, week, month)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "all" => Some(Self::All),
            "week" => Some(Self::LastWeek),
            "month" => Some(Self::LastMonth),
            _ => None,
        }
    }

    fn admits(&self, date: NaiveDate, today: NaiveDate) -> bool {
        let days = (today - date).num_days();
        match self {
            Self::All => true,
            Self::LastWeek => days <= 7,
            Self::LastMonth => days <= 30,
        }
    }
}

/// Order in which matching invoices are listed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Newest first (the default)
    #[default]
    DateDesc,
    /// Oldest first
    DateAsc,
    /// Alphabetical by customer name
    CustomerName,
    /// Customers with the most invoices first, counted over the full
    /// unfiltered set
    MostInvoices,
}

impl SortOrder {
    /// Parse a sort name (date-desc, date-asc, name, most-invoices)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "date-desc" => Some(Self::DateDesc),
            "date-asc" => Some(Self::DateAsc),
            "name" => Some(Self::CustomerName),
            "most-invoices" => Some(Self::MostInvoices),
            _ => None,
        }
    }
}

/// Search and recency criteria for a history query
#[derive(Debug, Clone, Default)]
pub struct HistoryFilter {
    /// Case-insensitive text matched against customer name or invoice number
    pub search: Option<String>,
    /// Recency window relative to `today`
    pub window: DateWindow,
}

/// Filter and sort invoices for display
///
/// The `MostInvoices` order ranks by each customer's invoice count across
/// the whole input set, not just the filtered subset, so a frequent
/// customer stays on top even when the current search hides most of their
/// invoices. Sorting is stable, so equal keys keep input order.
pub fn query<'a>(
    invoices: &'a [Invoice],
    filter: &HistoryFilter,
    order: SortOrder,
    today: NaiveDate,
) -> Vec<&'a Invoice> {
    let mut matched: Vec<&Invoice> = invoices
        .iter()
        .filter(|invoice| {
            let search_ok = match &filter.search {
                Some(text) => invoice.matches_search(text),
                None => true,
            };
            search_ok && filter.window.admits(invoice.date, today)
        })
        .collect();

    match order {
        SortOrder::DateDesc => matched.sort_by(|a, b| b.date.cmp(&a.date)),
        SortOrder::DateAsc => matched.sort_by(|a, b| a.date.cmp(&b.date)),
        SortOrder::CustomerName => {
            matched.sort_by(|a, b| a.customer_name.cmp(&b.customer_name))
        }
        SortOrder::MostInvoices => {
            let count = |name: &str| {
                invoices
                    .iter()
                    .filter(|inv| inv.customer_name == name)
                    .count()
            };
            matched.sort_by(|a, b| count(&b.customer_name).cmp(&count(&a.customer_name)));
        }
    }

    matched
}
