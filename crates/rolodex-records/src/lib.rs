//! Record store and query engine for Rolodex.
//!
//! Provides the tabular-data API client, the in-memory record store, the
//! visible-subset query engine, and the heuristic field resolver.

pub mod client;
pub mod error;
pub mod query;
pub mod resolver;
pub mod store;

pub use client::TableClient;
pub use error::RecordsError;
pub use query::compute_visible;
pub use resolver::{FieldResolver, HeuristicResolver, DEFAULT_DISPLAY_NAME};
pub use store::RecordStore;
