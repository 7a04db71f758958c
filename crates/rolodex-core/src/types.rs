use std::collections::HashMap;

use serde::{Deserialize, Serialize};

// =============================================================================
// Field values
// =============================================================================

/// A single value held by a record field.
///
/// The upstream tabular API delivers loosely typed cells; everything the
/// viewer cares about collapses into these three shapes. Any other JSON shape
/// is converted to its text rendering at decode time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Free text.
    Text(String),
    /// Numeric cell (integers and floats share one representation).
    Number(f64),
    /// Multi-select cell: an ordered sequence of option labels.
    MultiSelect(Vec<String>),
}

impl FieldValue {
    /// Render the value as display text.
    ///
    /// This rendering is the one the query engine matches against: text
    /// verbatim, numbers in minimal decimal form (no trailing `.0` for
    /// integral values), multi-select options joined with `", "`.
    pub fn render(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Number(n) => render_number(*n),
            FieldValue::MultiSelect(opts) => opts.join(", "),
        }
    }
}

/// Format a number without a trailing `.0` when it is integral.
fn render_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

// =============================================================================
// Records
// =============================================================================

/// One named field of a record, in upstream order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub value: FieldValue,
}

/// A single fetched record: an opaque identifier plus its field mapping.
///
/// Records are immutable once fetched; a refresh replaces the whole set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Opaque identifier, unique within a fetch.
    pub id: String,
    /// Field mapping in the order the upstream API delivered it.
    pub fields: Vec<Field>,
}

impl Record {
    /// Look up a field by exact name.
    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| &f.value)
    }

    /// Render a named field as text; a missing field renders as empty text.
    pub fn field_text(&self, name: &str) -> String {
        self.field(name).map(FieldValue::render).unwrap_or_default()
    }
}

/// Per-field filter fragments. Absent or empty entries impose no constraint;
/// entry order is irrelevant.
pub type FilterSet = HashMap<String, String>;

// =============================================================================
// Tests
// =============================================================================
