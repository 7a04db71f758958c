//! Application state shared across all route handlers.
//!
//! AppState holds references to all services and shared resources.
//! It is passed to handlers via axum's State extractor.

use std::path::PathBuf;
use std::sync::atomic::AtomicU64;
use std::sync::{Arc, Mutex};
use std::time::Instant;

use rolodex_assistant::{HttpBackend, Orchestrator};
use rolodex_campaign::Campaign;
use rolodex_core::config::RolodexConfig;
use rolodex_records::{RecordStore, TableClient};

/// Shared application state.
///
/// All fields use `Arc` for cheap cloning across handler tasks.
/// Mutable state is protected by `Mutex`.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<Mutex<RolodexConfig>>,
    /// Where configuration edits are persisted.
    pub config_path: Arc<PathBuf>,
    /// The fetched record set. The visible subset is derived per request.
    pub store: Arc<Mutex<RecordStore>>,
    /// Client for the upstream tabular-data API.
    pub client: Arc<TableClient>,
    /// Assistant orchestrator (chat + campaign generation).
    pub orchestrator: Arc<Orchestrator<HttpBackend>>,
    /// The current draft campaign, if one has been generated.
    pub campaign: Arc<Mutex<Option<Campaign>>>,
    /// Fetch supersession counter: a refresh commits only while current.
    pub fetch_seq: Arc<AtomicU64>,
    /// Server start time for uptime calculation.
    pub start_time: Instant,
}

impl AppState {
    /// Create a new AppState from loaded configuration.
    pub fn new(config: RolodexConfig, config_path: PathBuf) -> Self {
        let context_turns = config.assistant.context_turns;
        Self {
            config: Arc::new(Mutex::new(config)),
            config_path: Arc::new(config_path),
            store: Arc::new(Mutex::new(RecordStore::new())),
            client: Arc::new(TableClient::new()),
            orchestrator: Arc::new(Orchestrator::new(HttpBackend::new(), context_turns)),
            campaign: Arc::new(Mutex::new(None)),
            fetch_seq: Arc::new(AtomicU64::new(0)),
            start_time: Instant::now(),
        }
    }
}
