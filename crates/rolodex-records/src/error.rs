use thiserror::Error;

/// Errors from the record store and the tabular-data client.
#[derive(Debug, Error)]
pub enum RecordsError {
    /// Required connection settings are blank; nothing was sent upstream.
    #[error("connection settings incomplete: missing {}", .0.join(", "))]
    ConfigIncomplete(Vec<String>),

    /// The upstream API answered with a non-success status.
    #[error("HTTP {status} {reason}")]
    Http { status: u16, reason: String },

    /// The request never produced a response (DNS, TLS, connect, ...).
    #[error("request failed: {0}")]
    Transport(String),

    /// The response body did not match the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),
}
