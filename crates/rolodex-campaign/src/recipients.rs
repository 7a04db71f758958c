//! Recipient derivation from the visible record subset.

use rolodex_core::types::Record;
use rolodex_records::FieldResolver;

use crate::types::Recipient;

/// Extract one recipient per visible record that has a resolvable, non-empty
/// email field.
///
/// Records without such a field are silently skipped; that is the expected
/// shape of real-world tables, not an error condition.
pub fn extract_recipients<R: FieldResolver + ?Sized>(
    visible: &[&Record],
    resolver: &R,
) -> Vec<Recipient> {
    visible
        .iter()
        .filter_map(|record| {
            resolver.email(record).map(|email| Recipient {
                name: resolver.display_name(record),
                email,
                record: (*record).clone(),
            })
        })
        .collect()
}

/// Names of visible records mentioned in a free-text prompt.
///
/// A record counts as mentioned when its resolved display name occurs in the
/// prompt as a case-insensitive substring. An empty result means the prompt
/// named nobody and no narrowing should occur.
pub fn narrow_by_mentioned_names<R: FieldResolver + ?Sized>(
    prompt: &str,
    visible: &[&Record],
    resolver: &R,
) -> Vec<String> {
    let prompt_lower = prompt.to_lowercase();
    visible
        .iter()
        .map(|record| resolver.display_name(record))
        .filter(|name| {
            !name.trim().is_empty() && prompt_lower.contains(&name.to_lowercase())
        })
        .collect()
}

// =============================================================================
// Tests
// =============================================================================
