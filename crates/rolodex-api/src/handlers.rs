//! Route handler functions for all API endpoints.
//!
//! Each handler extracts parameters via axum extractors, interacts with
//! AppState, and returns JSON responses. The visible subset is recomputed
//! from its inputs on every request; it is never cached.

use std::sync::atomic::Ordering;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use rolodex_assistant::{AssistantReply, ChatMessage, RecordView};
use rolodex_campaign::{mailto_uri, Campaign};
use rolodex_core::types::{FilterSet, Record};
use rolodex_records::compute_visible;

use crate::error::ApiError;
use crate::state::AppState;

// =============================================================================
// Request types
// =============================================================================

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct QueryRequest {
    /// Global search term matched against every field value.
    pub search: String,
    /// Per-field substring filters.
    pub filters: FilterSet,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    /// The view inputs the chat runs against.
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub filters: FilterSet,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct CampaignEdit {
    pub subject: Option<String>,
    pub body: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct ConfigUpdate {
    pub records: Option<RecordsUpdate>,
    pub assistant: Option<AssistantUpdate>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct RecordsUpdate {
    pub api_url: Option<String>,
    pub api_key: Option<String>,
    pub base_id: Option<String>,
    pub table: Option<String>,
    pub sample_size: Option<usize>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct AssistantUpdate {
    pub api_url: Option<String>,
    pub api_key: Option<String>,
    pub model: Option<String>,
}

// =============================================================================
// Response types
// =============================================================================

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
    pub record_count: usize,
}

#[derive(Debug, Serialize)]
pub struct RecordsResponse {
    pub records: Vec<Record>,
    pub field_names: Vec<String>,
    pub fetched_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
pub struct QueryResponse {
    pub total: usize,
    pub visible_count: usize,
    pub records: Vec<Record>,
}

#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    pub fetched: usize,
    /// True when a newer refresh started meanwhile and this result was
    /// discarded (last request wins).
    pub superseded: bool,
}

#[derive(Debug, Serialize)]
pub struct MailtoResponse {
    pub uri: String,
}

/// Connection settings with secrets reduced to a presence flag.
#[derive(Debug, Serialize)]
pub struct ConfigView {
    pub log_level: String,
    pub port: u16,
    pub records: RecordsView,
    pub assistant: AssistantView,
}

#[derive(Debug, Serialize)]
pub struct RecordsView {
    pub api_url: String,
    pub api_key_set: bool,
    pub base_id: String,
    pub table: String,
    pub sample_size: usize,
}

#[derive(Debug, Serialize)]
pub struct AssistantView {
    pub api_url: String,
    pub api_key_set: bool,
    pub model: String,
    pub context_turns: usize,
    pub max_message_length: usize,
}

// =============================================================================
// Handler functions
// =============================================================================

/// GET /health - liveness plus a few basic counters.
pub async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    let record_count = state
        .store
        .lock()
        .map_err(|_| ApiError::Internal("store lock poisoned".to_string()))?
        .len();
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
        record_count,
    }))
}

/// GET /ui - the embedded dashboard.
pub async fn ui() -> Html<&'static str> {
    Html(rolodex_ui::DASHBOARD_HTML)
}

/// POST /records/refresh - fetch the record set from the tabular API.
///
/// Last request wins: the handler claims a sequence number before awaiting
/// the upstream call and commits its result only if no newer refresh has
/// started since. A failed or superseded fetch leaves the prior set intact.
pub async fn refresh(State(state): State<AppState>) -> Result<Json<RefreshResponse>, ApiError> {
    let settings = state
        .config
        .lock()
        .map_err(|_| ApiError::Internal("config lock poisoned".to_string()))?
        .records
        .clone();

    let seq = state.fetch_seq.fetch_add(1, Ordering::SeqCst) + 1;
    let records = state.client.fetch_records(&settings).await?;

    Ok(Json(commit_refresh(&state, seq, records)?))
}

/// Commit a completed fetch unless a newer refresh claimed a sequence number
/// meanwhile; a stale result is discarded without touching the store.
fn commit_refresh(
    state: &AppState,
    seq: u64,
    records: Vec<Record>,
) -> Result<RefreshResponse, ApiError> {
    if state.fetch_seq.load(Ordering::SeqCst) != seq {
        debug!(seq, "Refresh superseded by a newer request; discarding");
        return Ok(RefreshResponse {
            fetched: records.len(),
            superseded: true,
        });
    }

    let fetched = records.len();
    state
        .store
        .lock()
        .map_err(|_| ApiError::Internal("store lock poisoned".to_string()))?
        .replace(records);
    info!(fetched, "Record set replaced");

    Ok(RefreshResponse {
        fetched,
        superseded: false,
    })
}

/// GET /records - the full fetched set plus the union of field names.
pub async fn list_records(
    State(state): State<AppState>,
) -> Result<Json<RecordsResponse>, ApiError> {
    let store = state
        .store
        .lock()
        .map_err(|_| ApiError::Internal("store lock poisoned".to_string()))?;
    Ok(Json(RecordsResponse {
        records: store.records().to_vec(),
        field_names: store.field_names(),
        fetched_at: store.last_fetched(),
    }))
}

/// POST /records/query - recompute the visible subset for (search, filters).
pub async fn query_records(
    State(state): State<AppState>,
    Json(request): Json<QueryRequest>,
) -> Result<Json<QueryResponse>, ApiError> {
    let store = state
        .store
        .lock()
        .map_err(|_| ApiError::Internal("store lock poisoned".to_string()))?;
    let visible = compute_visible(store.records(), &request.search, &request.filters);
    let records: Vec<Record> = visible.into_iter().cloned().collect();
    Ok(Json(QueryResponse {
        total: store.len(),
        visible_count: records.len(),
        records,
    }))
}

/// POST /chat - route one user message through the assistant orchestrator.
///
/// The message runs against the visible subset derived from the request's
/// search and filters. A drafted campaign becomes the current campaign.
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<AssistantReply>, ApiError> {
    let (assistant_settings, sample_size) = {
        let config = state
            .config
            .lock()
            .map_err(|_| ApiError::Internal("config lock poisoned".to_string()))?;
        (config.assistant.clone(), config.records.sample_size)
    };

    // Snapshot the records so no lock is held across the backend call.
    let (records, field_names) = {
        let store = state
            .store
            .lock()
            .map_err(|_| ApiError::Internal("store lock poisoned".to_string()))?;
        (store.records().to_vec(), store.field_names())
    };

    let visible = compute_visible(&records, &request.search, &request.filters);
    let view = RecordView {
        total: records.len(),
        visible: &visible,
        field_names: &field_names,
        sample_size,
    };

    let reply = state
        .orchestrator
        .handle_message(&assistant_settings, &request.message, &view)
        .await?;

    if let AssistantReply::Campaign { campaign } = &reply {
        *state
            .campaign
            .lock()
            .map_err(|_| ApiError::Internal("campaign lock poisoned".to_string()))? =
            Some(campaign.clone());
    }

    Ok(Json(reply))
}

/// GET /chat/history - the transcript window.
pub async fn chat_history(State(state): State<AppState>) -> Json<Vec<ChatMessage>> {
    Json(state.orchestrator.history().await)
}

/// DELETE /chat/history - drop the conversation.
pub async fn clear_chat_history(State(state): State<AppState>) -> StatusCode {
    state.orchestrator.clear_history().await;
    StatusCode::NO_CONTENT
}

/// GET /campaign - the current draft campaign.
pub async fn get_campaign(State(state): State<AppState>) -> Result<Json<Campaign>, ApiError> {
    let campaign = state
        .campaign
        .lock()
        .map_err(|_| ApiError::Internal("campaign lock poisoned".to_string()))?
        .clone()
        .ok_or_else(|| ApiError::NotFound("no campaign has been generated".to_string()))?;
    Ok(Json(campaign))
}

/// PUT /campaign - edit the current campaign's subject and/or body.
pub async fn update_campaign(
    State(state): State<AppState>,
    Json(edit): Json<CampaignEdit>,
) -> Result<Json<Campaign>, ApiError> {
    let mut guard = state
        .campaign
        .lock()
        .map_err(|_| ApiError::Internal("campaign lock poisoned".to_string()))?;
    let campaign = guard
        .as_mut()
        .ok_or_else(|| ApiError::NotFound("no campaign has been generated".to_string()))?;
    if let Some(subject) = edit.subject {
        campaign.subject = subject;
    }
    if let Some(body) = edit.body {
        campaign.body = body;
    }
    Ok(Json(campaign.clone()))
}

/// GET /campaign/mailto - the mail-client handoff URI.
pub async fn campaign_mailto(
    State(state): State<AppState>,
) -> Result<Json<MailtoResponse>, ApiError> {
    let guard = state
        .campaign
        .lock()
        .map_err(|_| ApiError::Internal("campaign lock poisoned".to_string()))?;
    let campaign = guard
        .as_ref()
        .ok_or_else(|| ApiError::NotFound("no campaign has been generated".to_string()))?;
    Ok(Json(MailtoResponse {
        uri: mailto_uri(campaign),
    }))
}

/// GET /config - connection settings with secrets redacted.
pub async fn get_config(State(state): State<AppState>) -> Result<Json<ConfigView>, ApiError> {
    let config = state
        .config
        .lock()
        .map_err(|_| ApiError::Internal("config lock poisoned".to_string()))?;
    Ok(Json(render_config(&config)))
}

/// PUT /config - update connection settings and persist them.
pub async fn update_config(
    State(state): State<AppState>,
    Json(update): Json<ConfigUpdate>,
) -> Result<Json<ConfigView>, ApiError> {
    let snapshot = {
        let mut config = state
            .config
            .lock()
            .map_err(|_| ApiError::Internal("config lock poisoned".to_string()))?;

        if let Some(records) = update.records {
            if let Some(api_url) = records.api_url {
                config.records.api_url = api_url;
            }
            if let Some(api_key) = records.api_key {
                config.records.api_key = api_key;
            }
            if let Some(base_id) = records.base_id {
                config.records.base_id = base_id;
            }
            if let Some(table) = records.table {
                config.records.table = table;
            }
            if let Some(sample_size) = records.sample_size {
                config.records.sample_size = sample_size;
            }
        }
        if let Some(assistant) = update.assistant {
            if let Some(api_url) = assistant.api_url {
                config.assistant.api_url = api_url;
            }
            if let Some(api_key) = assistant.api_key {
                config.assistant.api_key = api_key;
            }
            if let Some(model) = assistant.model {
                config.assistant.model = model;
            }
        }
        config.clone()
    };

    snapshot
        .save(&state.config_path)
        .map_err(|e| ApiError::Internal(format!("failed to persist config: {}", e)))?;

    Ok(Json(render_config(&snapshot)))
}

/// Build the redacted config view.
fn render_config(config: &rolodex_core::config::RolodexConfig) -> ConfigView {
    ConfigView {
        log_level: config.general.log_level.clone(),
        port: config.server.port,
        records: RecordsView {
            api_url: config.records.api_url.clone(),
            api_key_set: !config.records.api_key.trim().is_empty(),
            base_id: config.records.base_id.clone(),
            table: config.records.table.clone(),
            sample_size: config.records.sample_size,
        },
        assistant: AssistantView {
            api_url: config.assistant.api_url.clone(),
            api_key_set: !config.assistant.api_key.trim().is_empty(),
            model: config.assistant.model.clone(),
            context_turns: config.assistant.context_turns,
            max_message_length: config.assistant.max_message_length,
        },
    }
}

// =============================================================================
// Tests
// =============================================================================
