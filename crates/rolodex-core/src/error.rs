use thiserror::Error;

/// Top-level error type for the Rolodex system.
///
/// Subsystem crates define their own error enums and convert into this type
/// (or into the API envelope) at the boundary where the error is reported.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RolodexError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for RolodexError {
    fn from(err: toml::de::Error) -> Self {
        RolodexError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for RolodexError {
    fn from(err: toml::ser::Error) -> Self {
        RolodexError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for RolodexError {
    fn from(err: serde_json::Error) -> Self {
        RolodexError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for Rolodex operations.
pub type Result<T> = std::result::Result<T, RolodexError>;
