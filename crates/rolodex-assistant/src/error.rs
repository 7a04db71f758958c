//! Error types for the assistant gateway.

use thiserror::Error;

/// Errors from the assistant layer.
#[derive(Debug, Error)]
pub enum AssistantError {
    /// No assistant API key is configured.
    #[error("assistant is not configured (no API key)")]
    Disabled,

    /// The chat message was empty.
    #[error("message cannot be empty")]
    EmptyMessage,

    /// The chat message exceeded the configured length.
    #[error("message exceeds maximum length of {0} characters")]
    MessageTooLong(usize),

    /// The completion request never produced a response.
    #[error("assistant request failed: {0}")]
    Transport(String),

    /// The completion endpoint answered with a non-success status.
    #[error("assistant HTTP {status} {reason}")]
    Http { status: u16, reason: String },

    /// The completion arrived but carried no text.
    #[error("assistant returned an empty completion")]
    EmptyCompletion,

    /// A structured campaign payload failed to parse. Hard failure.
    #[error("malformed campaign generation: {0}")]
    MalformedGeneration(String),
}
