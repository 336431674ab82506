//! Item-name suggestion matching
//!
//! The entry form calls [`suggest`] on every keystroke. Matching is two
//! stage: entries containing or starting with the raw query win outright;
//! only when nothing matches directly does the matcher fall back to ranking
//! the whole catalog by edit distance and offering the closest few names.

/// Number of nearest-match suggestions offered when no entry contains the
/// query directly. Direct matches are returned uncapped.
pub const FALLBACK_LIMIT: usize = 5;

/// Levenshtein edit distance between two strings, over Unicode scalar values
///
/// Classic dynamic-programming formulation: a `(len(b)+1) x (len(a)+1)` grid
/// whose first row and column equal their index, filled with the usual
/// carry-the-diagonal-on-match / `1 + min` recurrence. Symmetric and total;
/// the distance from the empty string to `x` is the character count of `x`.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let mut grid = vec![vec![0usize; a.len() + 1]; b.len() + 1];
    for (i, row) in grid.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in grid[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=b.len() {
        for j in 1..=a.len() {
            grid[i][j] = if b[i - 1] == a[j - 1] {
                grid[i - 1][j - 1]
            } else {
                1 + grid[i - 1][j - 1]
                    .min(grid[i][j - 1])
                    .min(grid[i - 1][j])
            };
        }
    }

    grid[b.len()][a.len()]
}

/// Rank catalog entries against a user-typed query
///
/// Behavior:
/// 1. An empty query yields no suggestions (the dropdown stays hidden).
/// 2. Entries that contain or start with the query as typed, case-sensitive,
///    are returned in catalog order — all of them, uncapped.
/// 3. Only if no entry matches directly, every entry is scored by the edit
///    distance between the lowercased query and the lowercased entry, and
///    the closest [`FALLBACK_LIMIT`] are returned. The sort is stable, so
///    equal distances keep catalog order.
///
/// The result is always a subset of `catalog`; the matcher holds no state.
pub fn suggest<'a, S: AsRef<str>>(query: &str, catalog: &'a [S]) -> Vec<&'a str> {
    if query.is_empty() {
        return Vec::new();
    }

    let direct: Vec<&str> = catalog
        .iter()
        .map(|entry| entry.as_ref())
        .filter(|entry| entry.contains(query) || entry.starts_with(query))
        .collect();

    if !direct.is_empty() {
        return direct;
    }

    let query_lower = query.to_lowercase();
    let mut scored: Vec<(&str, usize)> = catalog
        .iter()
        .map(|entry| entry.as_ref())
        .map(|entry| (entry, edit_distance(&query_lower, &entry.to_lowercase())))
        .collect();

    scored.sort_by_key(|&(_, distance)| distance);
    scored
        .into_iter()
        .take(FALLBACK_LIMIT)
        .map(|(entry, _)| entry)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_identical() {
        assert_eq!(edit_distance("abc", "abc"), 0);
        assert_eq!(edit_distance("", ""), 0);
        assert_eq!(edit_distance("شاي", "شاي"), 0);
    }

    #[test]
    fn test_distance_from_empty() {
        assert_eq!(edit_distance("", "abc"), 3);
        assert_eq!(edit_distance("abc", ""), 3);
        // One scalar value per Arabic letter, not per byte
        assert_eq!(edit_distance("", "شاي"), 3);
    }

    #[test]
    fn test_distance_kitten_sitting() {
        assert_eq!(edit_distance("kitten", "sitting"), 3);
    }

    #[test]
    fn test_distance_symmetry() {
        let pairs = [("kitten", "sitting"), ("شاي", "قهوة"), ("", "xyz"), ("ab", "ba")];
        for (x, y) in pairs {
            assert_eq!(edit_distance(x, y), edit_distance(y, x));
        }
    }

    #[test]
    fn test_distance_single_edits() {
        assert_eq!(edit_distance("abc", "abd"), 1); // substitution
        assert_eq!(edit_distance("abc", "ab"), 1); // deletion
        assert_eq!(edit_distance("abc", "abcd"), 1); // insertion
    }

    #[test]
    fn test_empty_query_yields_nothing() {
        let catalog = ["شاي", "قهوة", "سكر"];
        assert!(suggest("", &catalog).is_empty());
    }

    #[test]
    fn test_direct_match_returns_containing_entries() {
        let catalog = ["شاي", "قهوة", "سكر"];
        assert_eq!(suggest("شاي", &catalog), vec!["شاي"]);
    }

    #[test]
    fn test_direct_match_preserves_catalog_order() {
        let catalog = ["جلبة سوستة سوزوكي", "أفيز رباط سوزوكي", "برشام كيلو"];
        assert_eq!(
            suggest("سوزوكي", &catalog),
            vec!["جلبة سوستة سوزوكي", "أفيز رباط سوزوكي"]
        );
    }

    #[test]
    fn test_direct_match_is_uncapped() {
        // Seven entries all contain the query; all seven come back, unlike
        // the fallback path which stops at FALLBACK_LIMIT.
        let catalog: Vec<String> = (0..7).map(|i| format!("item {}", i)).collect();
        assert_eq!(suggest("item", &catalog).len(), 7);
    }

    #[test]
    fn test_direct_match_is_case_sensitive() {
        // "ITEM" does not contain "item" as typed, so the fallback kicks in
        let catalog = ["ITEM ONE"];
        let result = suggest("item one", &catalog);
        // Fallback still finds it as the nearest entry
        assert_eq!(result, vec!["ITEM ONE"]);
    }

    #[test]
    fn test_fallback_caps_at_limit() {
        let catalog = ["شاي", "قهوة", "سكر", "أرز", "زيت", "دقيق"];
        let result = suggest("xyz", &catalog);
        assert_eq!(result.len(), FALLBACK_LIMIT);
    }

    #[test]
    fn test_fallback_sorted_by_distance_with_stable_ties() {
        let catalog = ["شاي", "قهوة", "سكر", "أرز", "زيت", "دقيق"];
        let result = suggest("xyz", &catalog);

        let distances: Vec<usize> = result
            .iter()
            .map(|entry| edit_distance("xyz", &entry.to_lowercase()))
            .collect();
        assert!(distances.windows(2).all(|w| w[0] <= w[1]));

        // Among equal distances, catalog order decides
        for pair in result.windows(2) {
            let da = edit_distance("xyz", &pair[0].to_lowercase());
            let db = edit_distance("xyz", &pair[1].to_lowercase());
            if da == db {
                let ia = catalog.iter().position(|e| e == &pair[0]).unwrap();
                let ib = catalog.iter().position(|e| e == &pair[1]).unwrap();
                assert!(ia < ib);
            }
        }
    }

    #[test]
    fn test_fallback_is_case_insensitive() {
        let catalog = ["Kitten"];
        let result = suggest("kitten", &catalog);
        assert_eq!(result, vec!["Kitten"]);
        assert_eq!(edit_distance("kitten", "kitten"), 0);
    }

    #[test]
    fn test_result_is_subset_of_catalog() {
        let catalog = ["شاي", "قهوة", "سكر", "أرز"];
        for query in ["شاي", "xyz", "ق", "zzzzzz"] {
            for entry in suggest(query, &catalog) {
                assert!(catalog.contains(&entry));
            }
        }
    }

    #[test]
    fn test_empty_catalog() {
        let catalog: [&str; 0] = [];
        assert!(suggest("anything", &catalog).is_empty());
    }

    #[test]
    fn test_substring_entries_always_included() {
        let catalog = ["أفيز رباط أمامي جامبو طويل", "أفيز سوستة سوزوكي"];
        let result = suggest("جامبو", &catalog);
        assert!(result.contains(&"أفيز رباط أمامي جامبو طويل"));
    }
}
