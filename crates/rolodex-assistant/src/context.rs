//! Bounded context assembly and transcript management.
//!
//! The external service never sees the full record set: the system context
//! carries counts, field names, and a small sample of field mappings. The
//! transcript keeps a rolling window of recent turns.

use rolodex_core::types::Record;

use crate::types::{ChatMessage, ChatRole};

/// Snapshot of the record view an assistant request runs against.
#[derive(Clone, Copy, Debug)]
pub struct RecordView<'a> {
    /// Size of the full fetched record set.
    pub total: usize,
    /// The currently visible subset.
    pub visible: &'a [&'a Record],
    /// Union of known field names.
    pub field_names: &'a [String],
    /// Cap on the number of sample records sent upstream.
    pub sample_size: usize,
}

/// Render the bounded system context for a free-form question.
pub fn build_system_context(view: &RecordView<'_>) -> String {
    let mut context = String::new();
    context.push_str(
        "You are an assistant embedded in a client-record viewer. \
         Answer questions about the user's records concisely.\n",
    );
    context.push_str(&format!(
        "Records: {} total, {} currently visible.\n",
        view.total,
        view.visible.len()
    ));
    if !view.field_names.is_empty() {
        context.push_str(&format!("Fields: {}.\n", view.field_names.join(", ")));
    }

    let sample: Vec<String> = view
        .visible
        .iter()
        .take(view.sample_size)
        .map(|r| render_record(r))
        .collect();
    if !sample.is_empty() {
        context.push_str("Sample of visible records:\n");
        for line in sample {
            context.push_str(&format!("- {}\n", line));
        }
    }
    context
}

/// Render the campaign-generation instruction.
///
/// The service must answer with a single JSON object; anything else is
/// rejected downstream as a malformed generation.
pub fn build_campaign_instruction(view: &RecordView<'_>) -> String {
    let mut instruction = build_system_context(view);
    instruction.push_str(
        "\nThe user is asking for an email campaign. Respond with ONLY a JSON \
         object of the shape {\"subject\": string, \"body\": string, \
         \"usePersonalization\": boolean}. The body may greet each recipient \
         with the literal placeholder {{name}}. No prose outside the JSON.\n",
    );
    instruction
}

/// One record rendered as a single context line.
fn render_record(record: &Record) -> String {
    let fields: Vec<String> = record
        .fields
        .iter()
        .map(|f| format!("{}: {}", f.name, f.value.render()))
        .collect();
    fields.join("; ")
}

// =============================================================================
// Transcript
// =============================================================================

/// Rolling window of chat turns.
///
/// A turn is one user message plus one assistant message; the window keeps
/// the most recent `context_turns` turns.
#[derive(Debug)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
    context_turns: usize,
}

impl Transcript {
    /// Create an empty transcript with the given window size.
    pub fn new(context_turns: usize) -> Self {
        Self {
            messages: Vec::new(),
            context_turns,
        }
    }

    /// Append a message and trim the window.
    pub fn push(&mut self, role: ChatRole, content: impl Into<String>) {
        self.messages.push(ChatMessage::new(role, content));
        let max = self.context_turns * 2;
        while self.messages.len() > max {
            self.messages.remove(0);
        }
    }

    /// All messages currently in the window, oldest first.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// The window as (role, content) pairs for the completion request.
    pub fn wire_messages(&self) -> Vec<(ChatRole, String)> {
        self.messages
            .iter()
            .map(|m| (m.role, m.content.clone()))
            .collect()
    }

    /// Drop all messages.
    pub fn clear(&mut self) {
        self.messages.clear();
    }
}

// =============================================================================
// Tests
// =============================================================================
