use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use rolodex_campaign::Campaign;

/// Who authored a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    /// Wire name used by the chat-completion API.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        }
    }
}

/// One transcript entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: ChatRole,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    /// Create a message stamped with the current time.
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            content: content.into(),
            created_at: Utc::now(),
        }
    }
}

/// What the orchestrator hands back for one user message.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AssistantReply {
    /// Free-form answer text.
    Answer { text: String },
    /// A drafted campaign ready for preview and editing.
    Campaign { campaign: Campaign },
    /// An assistant-channel notice (e.g. no matching recipients).
    Notice { text: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_names() {
        assert_eq!(ChatRole::User.as_str(), "user");
        assert_eq!(ChatRole::Assistant.as_str(), "assistant");
    }

    #[test]
    fn test_message_new_stamps_identity() {
        let a = ChatMessage::new(ChatRole::User, "hi");
        let b = ChatMessage::new(ChatRole::User, "hi");
        assert_ne!(a.id, b.id);
        assert_eq!(a.content, "hi");
    }

    #[test]
    fn test_reply_serializes_tagged() {
        let reply = AssistantReply::Notice {
            text: "nobody matched".to_string(),
        };
        let json = serde_json::to_value(&reply).unwrap();
        assert_eq!(json["kind"], "notice");
        assert_eq!(json["text"], "nobody matched");
    }
}
