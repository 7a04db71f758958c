//! The query engine: derives the visible subset from the full record set.
//!
//! `compute_visible` is a pure function of (records, search term, filters).
//! It is recomputed on every query and never cached, so no stale view can be
//! observed after an input changes.

use rolodex_core::types::{FilterSet, Record};

/// Compute the visible subset of `records` under a global search term and a
/// set of per-field filters.
///
/// - A non-empty `search` retains records where at least one field value,
///   rendered as text, contains the term as a case-insensitive substring.
/// - Each non-empty filter entry retains records whose named field, rendered
///   as text (missing field = empty text), contains the fragment
///   case-insensitively.
/// - All constraints compose as logical AND; evaluation order does not
///   affect the result.
///
/// Fetch order is preserved. Total: no errors, no partial results.
pub fn compute_visible<'a>(
    records: &'a [Record],
    search: &str,
    filters: &FilterSet,
) -> Vec<&'a Record> {
    records
        .iter()
        .filter(|r| matches_search(r, search) && matches_filters(r, filters))
        .collect()
}

/// Whether any field value of `record` contains `search` case-insensitively.
/// An empty search term matches everything.
fn matches_search(record: &Record, search: &str) -> bool {
    let term = search.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }
    record
        .fields
        .iter()
        .any(|f| f.value.render().to_lowercase().contains(&term))
}

/// Whether `record` satisfies every non-empty filter entry.
fn matches_filters(record: &Record, filters: &FilterSet) -> bool {
    filters.iter().all(|(name, fragment)| {
        let fragment = fragment.trim().to_lowercase();
        if fragment.is_empty() {
            return true;
        }
        record.field_text(name).to_lowercase().contains(&fragment)
    })
}

// =============================================================================
// Tests
// =============================================================================
