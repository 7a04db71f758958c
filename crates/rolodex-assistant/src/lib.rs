//! Assistant layer for Rolodex.
//!
//! A thin gateway to an external chat-completion service plus the
//! orchestration around it: bounded record context, transcript management,
//! campaign-intent routing, and structured-generation parsing.

pub mod context;
pub mod error;
pub mod gateway;
pub mod orchestrator;
pub mod parse;
pub mod types;

pub use context::{build_campaign_instruction, build_system_context, RecordView, Transcript};
pub use error::AssistantError;
pub use gateway::{CompletionBackend, HttpBackend};
pub use orchestrator::{is_campaign_request, Orchestrator};
pub use parse::parse_generated;
pub use types::{AssistantReply, ChatMessage, ChatRole};
