//! Assistant orchestrator: validates messages, classifies intent, and routes
//! between free-form completion and campaign generation.
//!
//! Requests are serialized: the transcript lock is held across the backend
//! call, so overlapping chat requests queue in arrival order. A failed
//! backend call appends an error notice to the transcript and leaves every
//! other piece of state untouched.

use std::sync::LazyLock;

use regex::Regex;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use rolodex_campaign::{build_campaign, CampaignError};
use rolodex_core::config::AssistantConfig;
use rolodex_records::{FieldResolver, HeuristicResolver};

use crate::context::{build_campaign_instruction, build_system_context, RecordView, Transcript};
use crate::error::AssistantError;
use crate::gateway::CompletionBackend;
use crate::parse::parse_generated;
use crate::types::{AssistantReply, ChatMessage, ChatRole};

/// Patterns that mark a message as a campaign request.
static CAMPAIGN_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)\bemail campaign\b",
        r"(?i)\bsend\s+(?:an?\s+)?email\b",
        r"(?i)\bsend\s+\S+(?:\s+\S+)*\s+an?\s+email\b",
        r"(?i)\bwrite\s+(?:an?\s+)?email\b",
        r"(?i)\bdraft\s+(?:an?\s+)?email\b",
        r"(?i)\bemail\s+(?:them|everyone|all)\b",
        r"(?i)\bcompose\s+(?:an?\s+)?email\b",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("Invalid campaign intent regex"))
    .collect()
});

/// Whether a message asks for an email campaign rather than an answer.
pub fn is_campaign_request(message: &str) -> bool {
    CAMPAIGN_PATTERNS.iter().any(|re| re.is_match(message))
}

/// Central assistant coordinator.
pub struct Orchestrator<B: CompletionBackend> {
    backend: B,
    resolver: Box<dyn FieldResolver>,
    transcript: Mutex<Transcript>,
}

impl<B: CompletionBackend> Orchestrator<B> {
    /// Create an orchestrator with the shipped field resolver.
    pub fn new(backend: B, context_turns: usize) -> Self {
        Self {
            backend,
            resolver: Box::new(HeuristicResolver),
            transcript: Mutex::new(Transcript::new(context_turns)),
        }
    }

    /// Replace the field resolver (alternate schemas).
    pub fn with_resolver(mut self, resolver: Box<dyn FieldResolver>) -> Self {
        self.resolver = resolver;
        self
    }

    /// Handle one user message against the current record view.
    pub async fn handle_message(
        &self,
        settings: &AssistantConfig,
        message: &str,
        view: &RecordView<'_>,
    ) -> Result<AssistantReply, AssistantError> {
        if message.trim().is_empty() {
            return Err(AssistantError::EmptyMessage);
        }
        if message.chars().count() > settings.max_message_length {
            return Err(AssistantError::MessageTooLong(settings.max_message_length));
        }
        if !settings.enabled() {
            return Err(AssistantError::Disabled);
        }

        // Serialize requests on the transcript for their whole duration.
        let mut transcript = self.transcript.lock().await;
        transcript.push(ChatRole::User, message);

        let reply = if is_campaign_request(message) {
            self.handle_campaign(settings, message, view, &transcript)
                .await
        } else {
            let system = build_system_context(view);
            self.backend
                .complete(settings, &system, &transcript.wire_messages())
                .await
                .map(|text| AssistantReply::Answer { text })
        };

        match reply {
            Ok(reply) => {
                transcript.push(ChatRole::Assistant, reply_summary(&reply));
                Ok(reply)
            }
            Err(e) => {
                warn!(error = %e, "Assistant request failed");
                transcript.push(ChatRole::Assistant, format!("(error: {})", e));
                Err(e)
            }
        }
    }

    /// Generate, parse, and assemble a campaign for one prompt.
    async fn handle_campaign(
        &self,
        settings: &AssistantConfig,
        message: &str,
        view: &RecordView<'_>,
        transcript: &Transcript,
    ) -> Result<AssistantReply, AssistantError> {
        let instruction = build_campaign_instruction(view);
        let raw = self
            .backend
            .complete(settings, &instruction, &transcript.wire_messages())
            .await?;
        let generated = parse_generated(&raw)?;

        match build_campaign(message, view.visible, generated, self.resolver.as_ref()) {
            Ok(campaign) => {
                debug!(recipients = campaign.recipients.len(), "Campaign drafted");
                Ok(AssistantReply::Campaign { campaign })
            }
            Err(CampaignError::NoRecipients) => Ok(AssistantReply::Notice {
                text: CampaignError::NoRecipients.to_string(),
            }),
        }
    }

    /// Snapshot of the transcript window.
    pub async fn history(&self) -> Vec<ChatMessage> {
        self.transcript.lock().await.messages().to_vec()
    }

    /// Drop the conversation.
    pub async fn clear_history(&self) {
        self.transcript.lock().await.clear();
    }
}

/// What lands in the transcript for a given reply.
fn reply_summary(reply: &AssistantReply) -> String {
    match reply {
        AssistantReply::Answer { text } => text.clone(),
        AssistantReply::Campaign { campaign } => format!(
            "Drafted campaign \"{}\" for {} recipient(s).",
            campaign.subject,
            campaign.recipients.len()
        ),
        AssistantReply::Notice { text } => text.clone(),
    }
}

// =============================================================================
// Tests
// =============================================================================
