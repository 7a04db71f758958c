use serde::{Deserialize, Serialize};

use rolodex_core::types::Record;

/// Placeholder the generated body may carry for per-recipient greeting.
pub const NAME_PLACEHOLDER: &str = "{{name}}";

/// One addressable campaign recipient, derived from a visible record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recipient {
    /// Resolved display name.
    pub name: String,
    /// Resolved email address.
    pub email: String,
    /// The source record with its full field mapping.
    pub record: Record,
}

/// Generated subject/body/personalization triple.
///
/// Produced by the assistant gateway; the campaign builder only assembles
/// it, it never generates text itself.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeneratedContent {
    pub subject: String,
    pub body: String,
    #[serde(rename = "usePersonalization", default)]
    pub use_personalization: bool,
}

/// A draft email campaign: generated content plus the recipient list it was
/// built against. Subject and body stay editable until handoff.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub subject: String,
    pub body: String,
    pub use_personalization: bool,
    pub recipients: Vec<Recipient>,
}

impl Campaign {
    /// The body with the `{{name}}` placeholder substituted for one
    /// recipient, when personalization is on.
    pub fn personalized_body(&self, recipient: &Recipient) -> String {
        if self.use_personalization {
            self.body.replace(NAME_PLACEHOLDER, &recipient.name)
        } else {
            self.body.clone()
        }
    }
}
