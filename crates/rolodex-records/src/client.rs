//! HTTP client for the upstream tabular-data API.
//!
//! One GET per refresh: `{api_url}/{base_id}/{table}` with a bearer token.
//! The response is a JSON object carrying a `records` array of
//! `{id, fields}` objects. Cell values arrive loosely typed and are
//! normalized into [`FieldValue`] at decode time.

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use rolodex_core::config::RecordsConfig;
use rolodex_core::types::{Field, FieldValue, Record};

use crate::error::RecordsError;

/// Client for the tabular-data API.
#[derive(Debug, Clone, Default)]
pub struct TableClient {
    http: reqwest::Client,
}

/// Wire shape of a fetch response.
#[derive(Debug, Deserialize)]
struct TablePage {
    #[serde(default)]
    records: Vec<RawRecord>,
}

/// Wire shape of a single record.
#[derive(Debug, Deserialize)]
struct RawRecord {
    id: String,
    #[serde(default)]
    fields: serde_json::Map<String, Value>,
}

impl TableClient {
    /// Create a new client with default transport settings.
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }

    /// Fetch the full record set for the configured base and table.
    ///
    /// Checks connection completeness before any network activity. A
    /// non-success response surfaces its HTTP status and reason verbatim;
    /// the caller keeps whatever record set it already holds.
    pub async fn fetch_records(
        &self,
        settings: &RecordsConfig,
    ) -> Result<Vec<Record>, RecordsError> {
        let missing = settings.missing_fields();
        if !missing.is_empty() {
            return Err(RecordsError::ConfigIncomplete(
                missing.iter().map(|s| s.to_string()).collect(),
            ));
        }

        let url = format!(
            "{}/{}/{}",
            settings.api_url.trim_end_matches('/'),
            settings.base_id,
            settings.table
        );
        debug!(url = %url, "Fetching records");

        let response = self
            .http
            .get(&url)
            .bearer_auth(&settings.api_key)
            .send()
            .await
            .map_err(|e| RecordsError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RecordsError::Http {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("").to_string(),
            });
        }

        let page: TablePage = response
            .json()
            .await
            .map_err(|e| RecordsError::Decode(e.to_string()))?;

        let records: Vec<Record> = page.records.into_iter().map(into_record).collect();
        debug!(count = records.len(), "Records fetched");
        Ok(records)
    }
}

/// Convert a wire record into the domain shape, preserving field order.
fn into_record(raw: RawRecord) -> Record {
    let fields = raw
        .fields
        .into_iter()
        .filter_map(|(name, value)| {
            normalize_value(value).map(|value| Field { name, value })
        })
        .collect();
    Record { id: raw.id, fields }
}

/// Normalize a loosely typed JSON cell into a [`FieldValue`].
///
/// Text, numbers, and arrays map directly; other shapes collapse to their
/// text rendering. A null cell is treated as absent.
fn normalize_value(value: Value) -> Option<FieldValue> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(FieldValue::Text(s)),
        Value::Number(n) => n.as_f64().map(FieldValue::Number),
        Value::Bool(b) => Some(FieldValue::Text(b.to_string())),
        Value::Array(items) => Some(FieldValue::MultiSelect(
            items
                .into_iter()
                .map(|item| match item {
                    Value::String(s) => s,
                    other => other.to_string(),
                })
                .collect(),
        )),
        other @ Value::Object(_) => Some(FieldValue::Text(other.to_string())),
    }
}

// =============================================================================
// Tests
// =============================================================================
