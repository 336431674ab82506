//! Suggestion display formatting
//!
//! Renders a ranked suggestion list the way the dropdown would show it,
//! marking whether the names matched the query directly or are
//! nearest-by-distance fallbacks.

/// Format a suggestion list for terminal output
///
/// A fallback suggestion never contains the query (if any entry did, the
/// direct branch would have produced the result), so containment of the
/// first entry tells the two branches apart.
pub fn format_suggestions(query: &str, suggestions: &[&str]) -> String {
    if suggestions.is_empty() {
        return format!("No suggestions for '{}'.", query);
    }

    let direct = suggestions[0].contains(query);
    let mut output = if direct {
        format!("Matches for '{}':\n", query)
    } else {
        format!("Close matches for '{}':\n", query)
    };

    for (i, name) in suggestions.iter().enumerate() {
        output.push_str(&format!("{:>3}. {}\n", i + 1, name));
    }

    output
}
