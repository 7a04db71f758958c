//! Campaign assembly.
//!
//! Combines externally generated content with the recipients derived from
//! the visible subset. No text generation happens here.

use tracing::debug;

use rolodex_core::types::Record;
use rolodex_records::FieldResolver;

use crate::error::CampaignError;
use crate::recipients::{extract_recipients, narrow_by_mentioned_names};
use crate::types::{Campaign, GeneratedContent};

/// Build a campaign from a prompt, the visible subset, and generated content.
///
/// Candidate recipients come from [`extract_recipients`]. If the prompt
/// mentions any visible record by name, the recipient list narrows to those
/// whose display name contains a mentioned name (case-insensitive);
/// otherwise the full candidate list is used. Zero remaining recipients is
/// the [`CampaignError::NoRecipients`] condition — callers surface it as a
/// user-facing message, not a crash.
pub fn build_campaign<R: FieldResolver + ?Sized>(
    prompt: &str,
    visible: &[&Record],
    generated: GeneratedContent,
    resolver: &R,
) -> Result<Campaign, CampaignError> {
    let mut recipients = extract_recipients(visible, resolver);

    let mentioned = narrow_by_mentioned_names(prompt, visible, resolver);
    if !mentioned.is_empty() {
        let mentioned_lower: Vec<String> =
            mentioned.iter().map(|m| m.to_lowercase()).collect();
        recipients.retain(|r| {
            let name = r.name.to_lowercase();
            mentioned_lower.iter().any(|m| name.contains(m))
        });
    }

    if recipients.is_empty() {
        return Err(CampaignError::NoRecipients);
    }

    debug!(
        recipients = recipients.len(),
        narrowed = !mentioned.is_empty(),
        "Campaign assembled"
    );

    Ok(Campaign {
        subject: generated.subject,
        body: generated.body,
        use_personalization: generated.use_personalization,
        recipients,
    })
}

// =============================================================================
// Tests
// =============================================================================
