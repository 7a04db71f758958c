//! In-memory record store.
//!
//! Holds the full fetched record set. The visible subset is never stored
//! here; it is derived on demand by [`crate::query::compute_visible`].

use chrono::{DateTime, Utc};

use rolodex_core::types::Record;

/// Owner of the fetched record set.
///
/// Records are replaced wholesale on refresh and never mutated in place.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<Record>,
    last_fetched: Option<DateTime<Utc>>,
}

impl RecordStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the record set with a freshly fetched one.
    pub fn replace(&mut self, records: Vec<Record>) {
        self.records = records;
        self.last_fetched = Some(Utc::now());
    }

    /// The full fetched record set, in fetch order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of fetched records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// When the current record set was fetched, if ever.
    pub fn last_fetched(&self) -> Option<DateTime<Utc>> {
        self.last_fetched
    }

    /// Union of field names across all records, in first-seen order.
    pub fn field_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for record in &self.records {
            for field in &record.fields {
                if !names.contains(&field.name) {
                    names.push(field.name.clone());
                }
            }
        }
        names
    }
}

// =============================================================================
// Tests
// =============================================================================
