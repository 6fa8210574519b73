//! Subsequence fuzzy matching for hero names
//!
//! A query matches a candidate when every query character appears in the
//! candidate in order. The score counts candidate characters skipped before
//! the subsequence completes, so lower is tighter. Matching is case-insensitive.

/// Score `query` against `candidate`.
///
/// Returns `Some(0)` for an empty query, `Some(skipped)` once the first full
/// subsequence match completes, and `None` when the candidate runs out first.
pub fn score(query: &str, candidate: &str) -> Option<u32> {
    if query.is_empty() {
        return Some(0);
    }

    let query: Vec<char> = query.chars().flat_map(char::to_lowercase).collect();
    let mut query_pos = 0;
    let mut skipped = 0u32;

    for ch in candidate.chars().flat_map(char::to_lowercase) {
        if ch == query[query_pos] {
            query_pos += 1;
            if query_pos == query.len() {
                return Some(skipped);
            }
            continue;
        }
        skipped += 1;
    }

    None
}

#[cfg(test)]
#[path = "fuzzy_tests.rs"]
mod fuzzy_tests;
