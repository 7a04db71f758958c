//! CLI argument definitions for the Rolodex application.
//!
//! Uses `clap` with derive macros for ergonomic argument parsing.
//! Priority resolution: CLI args > env vars > config file > defaults.

use clap::Parser;
use std::path::PathBuf;

/// Rolodex — a local client-record viewer with an assistant layer.
#[derive(Parser, Debug)]
#[command(name = "rolodex", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Dashboard/API port.
    #[arg(short = 'p', long = "port")]
    pub port: Option<u16>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > ROLODEX_CONFIG env var > platform default
    /// (~/.rolodex/config.toml).
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Ok(p) = std::env::var("ROLODEX_CONFIG") {
            return PathBuf::from(p);
        }
        default_config_path()
    }

    /// Resolve the server port.
    ///
    /// Priority: --port flag > ROLODEX_PORT env var > config file value.
    pub fn resolve_port(&self, config_port: u16) -> u16 {
        if let Some(p) = self.port {
            return p;
        }
        if let Ok(val) = std::env::var("ROLODEX_PORT") {
            if let Ok(p) = val.parse::<u16>() {
                return p;
            }
        }
        config_port
    }

    /// Resolve the log level.
    ///
    /// Priority: --log-level flag > config file value.
    pub fn resolve_log_level(&self, config_level: &str) -> String {
        self.log_level
            .clone()
            .unwrap_or_else(|| config_level.to_string())
    }
}

/// Platform default config path: ~/.rolodex/config.toml.
fn default_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    if let Ok(home) = std::env::var("USERPROFILE") {
        return PathBuf::from(home).join(".rolodex").join("config.toml");
    }
    #[cfg(not(target_os = "windows"))]
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".rolodex").join("config.toml");
    }
    PathBuf::from("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> CliArgs {
        CliArgs {
            config: None,
            port: None,
            log_level: None,
        }
    }

    #[test]
    fn test_flag_beats_config_port() {
        let cli = CliArgs {
            port: Some(9999),
            ..args()
        };
        assert_eq!(cli.resolve_port(4400), 9999);
    }

    #[test]
    fn test_config_port_used_without_flag() {
        assert_eq!(args().resolve_port(4567), 4567);
    }

    #[test]
    fn test_explicit_config_path_wins() {
        let cli = CliArgs {
            config: Some(PathBuf::from("/tmp/custom.toml")),
            ..args()
        };
        assert_eq!(cli.resolve_config_path(), PathBuf::from("/tmp/custom.toml"));
    }

    #[test]
    fn test_log_level_falls_back_to_config() {
        assert_eq!(args().resolve_log_level("warn"), "warn");
        let cli = CliArgs {
            log_level: Some("trace".to_string()),
            ..args()
        };
        assert_eq!(cli.resolve_log_level("warn"), "trace");
    }
}
