use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{Result, RolodexError};

/// Top-level configuration for the Rolodex application.
///
/// Loaded from `~/.rolodex/config.toml` by default. Each section corresponds
/// to a bounded context or cross-cutting concern.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RolodexConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub records: RecordsConfig,
    #[serde(default)]
    pub assistant: AssistantConfig,
}

impl RolodexConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: RolodexConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| RolodexError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// HTTP server settings. The server always binds to 127.0.0.1.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// API/dashboard port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: 4400 }
    }
}

/// Connection settings for the upstream tabular-data API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordsConfig {
    /// Base URL of the tabular-data API.
    pub api_url: String,
    /// Bearer token for the tabular-data API.
    pub api_key: String,
    /// Base identifier addressing the data set.
    pub base_id: String,
    /// Table identifier (name or id) within the base.
    pub table: String,
    /// Number of sample records included in assistant context.
    pub sample_size: usize,
}

impl Default for RecordsConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.airtable.com/v0".to_string(),
            api_key: String::new(),
            base_id: String::new(),
            table: String::new(),
            sample_size: 5,
        }
    }
}

impl RecordsConfig {
    /// Names of required connection fields that are still blank.
    ///
    /// All three of api_key, base_id, and table must be set before any
    /// fetch is attempted.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.api_key.trim().is_empty() {
            missing.push("api_key");
        }
        if self.base_id.trim().is_empty() {
            missing.push("base_id");
        }
        if self.table.trim().is_empty() {
            missing.push("table");
        }
        missing
    }

    /// Whether all required connection fields are present.
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

/// Settings for the external chat-completion assistant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    /// Chat-completion endpoint URL.
    pub api_url: String,
    /// Bearer token for the assistant service. Blank disables the assistant.
    pub api_key: String,
    /// Model identifier sent with each completion request.
    pub model: String,
    /// Maximum conversation turns kept in the rolling transcript window.
    pub context_turns: usize,
    /// Maximum chat message length in characters.
    pub max_message_length: usize,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.openai.com/v1/chat/completions".to_string(),
            api_key: String::new(),
            model: "gpt-4o-mini".to_string(),
            context_turns: 10,
            max_message_length: 2000,
        }
    }
}

impl AssistantConfig {
    /// Whether the assistant is usable (an API key is configured).
    pub fn enabled(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = RolodexConfig::default();
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.server.port, 4400);
        assert_eq!(config.records.api_url, "https://api.airtable.com/v0");
        assert!(config.records.api_key.is_empty());
        assert_eq!(config.records.sample_size, 5);
        assert_eq!(config.assistant.model, "gpt-4o-mini");
        assert_eq!(config.assistant.context_turns, 10);
        assert_eq!(config.assistant.max_message_length, 2000);
    }

    #[test]
    fn test_load_valid_config() {
        let content = r#"
[general]
log_level = "debug"

[server]
port = 9000

[records]
api_key = "key_abc"
base_id = "appXYZ"
table = "Clients"

[assistant]
api_key = "sk-test"
model = "gpt-4o"
"#;
        let file = create_temp_config(content);
        let config = RolodexConfig::load(file.path()).unwrap();
        assert_eq!(config.general.log_level, "debug");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.records.api_key, "key_abc");
        assert_eq!(config.records.base_id, "appXYZ");
        assert_eq!(config.records.table, "Clients");
        assert_eq!(config.assistant.model, "gpt-4o");
        // Unspecified fields fall back to defaults.
        assert_eq!(config.records.api_url, "https://api.airtable.com/v0");
        assert_eq!(config.assistant.context_turns, 10);
    }

    #[test]
    fn test_load_partial_config_uses_defaults() {
        let content = r#"
[general]
log_level = "warn"
"#;
        let file = create_temp_config(content);
        let config = RolodexConfig::load(file.path()).unwrap();
        assert_eq!(config.general.log_level, "warn");
        assert_eq!(config.server.port, 4400);
        assert_eq!(config.records.sample_size, 5);
    }

    #[test]
    fn test_load_empty_toml_uses_all_defaults() {
        let file = create_temp_config("");
        let config = RolodexConfig::load(file.path()).unwrap();
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.server.port, 4400);
    }

    #[test]
    fn test_load_invalid_toml() {
        let file = create_temp_config("this is {{ not valid TOML");
        assert!(RolodexConfig::load(file.path()).is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = RolodexConfig::load_or_default(Path::new("/nonexistent/config.toml"));
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.server.port, 4400);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = RolodexConfig::default();
        config.records.api_key = "key_123".to_string();
        config.save(&path).unwrap();

        let reloaded = RolodexConfig::load(&path).unwrap();
        assert_eq!(reloaded.records.api_key, "key_123");
        assert_eq!(reloaded.server.port, config.server.port);
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sub").join("dir").join("config.toml");

        RolodexConfig::default().save(&path).unwrap();
        assert!(path.exists());
    }

    // ---- Connection completeness ----

    #[test]
    fn test_missing_fields_all_blank() {
        let records = RecordsConfig::default();
        assert_eq!(records.missing_fields(), vec!["api_key", "base_id", "table"]);
        assert!(!records.is_complete());
    }

    #[test]
    fn test_missing_fields_partial() {
        let records = RecordsConfig {
            api_key: "k".to_string(),
            table: "Clients".to_string(),
            ..RecordsConfig::default()
        };
        assert_eq!(records.missing_fields(), vec!["base_id"]);
    }

    #[test]
    fn test_missing_fields_whitespace_counts_as_blank() {
        let records = RecordsConfig {
            api_key: "   ".to_string(),
            base_id: "app1".to_string(),
            table: "t".to_string(),
            ..RecordsConfig::default()
        };
        assert_eq!(records.missing_fields(), vec!["api_key"]);
    }

    #[test]
    fn test_complete_connection() {
        let records = RecordsConfig {
            api_key: "k".to_string(),
            base_id: "app1".to_string(),
            table: "Clients".to_string(),
            ..RecordsConfig::default()
        };
        assert!(records.is_complete());
    }

    // ---- Assistant gating ----

    #[test]
    fn test_assistant_disabled_without_key() {
        assert!(!AssistantConfig::default().enabled());
    }

    #[test]
    fn test_assistant_enabled_with_key() {
        let assistant = AssistantConfig {
            api_key: "sk-test".to_string(),
            ..AssistantConfig::default()
        };
        assert!(assistant.enabled());
    }
}
