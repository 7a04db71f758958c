//! Thin pass-through to the external chat-completion service.
//!
//! The backend is a trait so the orchestrator can be exercised without a
//! network; the shipped implementation POSTs an OpenAI-style payload with a
//! bearer token and returns the first choice's message content.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use rolodex_core::config::AssistantConfig;

use crate::error::AssistantError;
use crate::types::ChatRole;

/// Produces one completion for a system instruction plus a message list.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(
        &self,
        settings: &AssistantConfig,
        system: &str,
        messages: &[(ChatRole, String)],
    ) -> Result<String, AssistantError>;
}

/// HTTP chat-completion backend.
#[derive(Debug, Clone, Default)]
pub struct HttpBackend {
    http: reqwest::Client,
}

impl HttpBackend {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage>,
}

#[derive(Debug, Serialize, Deserialize)]
struct WireMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: WireMessage,
}

#[async_trait]
impl CompletionBackend for HttpBackend {
    async fn complete(
        &self,
        settings: &AssistantConfig,
        system: &str,
        messages: &[(ChatRole, String)],
    ) -> Result<String, AssistantError> {
        if !settings.enabled() {
            return Err(AssistantError::Disabled);
        }

        let mut wire = Vec::with_capacity(messages.len() + 1);
        wire.push(WireMessage {
            role: "system".to_string(),
            content: system.to_string(),
        });
        wire.extend(messages.iter().map(|(role, content)| WireMessage {
            role: role.as_str().to_string(),
            content: content.clone(),
        }));

        let request = CompletionRequest {
            model: &settings.model,
            messages: wire,
        };

        debug!(model = %settings.model, messages = request.messages.len(), "Requesting completion");

        let response = self
            .http
            .post(&settings.api_url)
            .bearer_auth(&settings.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AssistantError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AssistantError::Http {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("").to_string(),
            });
        }

        let completion: CompletionResponse = response
            .json()
            .await
            .map_err(|e| AssistantError::Transport(e.to_string()))?;

        let text = completion
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(AssistantError::EmptyCompletion);
        }

        Ok(text)
    }
}

// =============================================================================
// Tests
// =============================================================================
