//! Campaign builder for Rolodex.
//!
//! Derives recipients from the visible record subset, narrows them by names
//! mentioned in free-text prompts, assembles draft campaigns, and builds the
//! `mailto:` handoff URI.

pub mod builder;
pub mod error;
pub mod mailto;
pub mod recipients;
pub mod types;

pub use builder::build_campaign;
pub use error::CampaignError;
pub use mailto::mailto_uri;
pub use recipients::{extract_recipients, narrow_by_mentioned_names};
pub use types::{Campaign, GeneratedContent, Recipient, NAME_PLACEHOLDER};
