//! Parsing of structured campaign generations.
//!
//! The service is instructed to answer with a bare JSON object, but real
//! completions often arrive wrapped in a markdown code fence or surrounded
//! by prose. Parsing strips the fence, extracts the outermost object, and
//! deserializes; anything that still fails is a hard failure surfaced to the
//! user.

use rolodex_campaign::GeneratedContent;

use crate::error::AssistantError;

/// Parse a raw completion into generated campaign content.
pub fn parse_generated(raw: &str) -> Result<GeneratedContent, AssistantError> {
    let stripped = strip_code_fence(raw);
    let object = extract_object(stripped).ok_or_else(|| {
        AssistantError::MalformedGeneration("no JSON object in completion".to_string())
    })?;
    serde_json::from_str(object)
        .map_err(|e| AssistantError::MalformedGeneration(e.to_string()))
}

/// Remove a surrounding markdown code fence (``` or ```json) if present.
fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string ("json") up to the first newline.
    let body = match rest.find('\n') {
        Some(idx) => &rest[idx + 1..],
        None => rest,
    };
    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}

/// The outermost `{...}` span of the input, if any.
fn extract_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

// =============================================================================
// Tests
// =============================================================================
