//! Configuration loading and validation for the chat server
//!
//! This module parses a TOML configuration into [`ServerConfig`], applies
//! defaults, and performs validation with field-path error messages.

use crate::error::{ChatError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Runtime configuration for the chat server
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerConfig {
    /// Host to bind the listener to
    pub host: String,
    /// Port to bind the listener to
    pub port: u16,
    /// Log level for the process
    pub log_level: String,
    /// Optional path to the HTML template shell; embedded default when absent
    pub template_path: Option<PathBuf>,
    /// Optional per-connection read deadline in seconds; no deadline when absent
    pub read_timeout_secs: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 9000,
            log_level: "info".to_string(),
            template_path: None,
            read_timeout_secs: None,
        }
    }
}

impl ServerConfig {
    /// Validate the configuration and return `Result<()>` with field-path errors
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(ChatError::Configuration(
                "host: cannot be empty".to_string(),
            ));
        }
        if self.port == 0 {
            return Err(ChatError::Configuration(
                "port: must be 1..=65535".to_string(),
            ));
        }
        if let Some(secs) = self.read_timeout_secs {
            if secs == 0 {
                return Err(ChatError::Configuration(
                    "readTimeoutSecs: must be > 0".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// Load server config from a TOML file path
pub fn load_config_from_toml_path(path: impl AsRef<Path>) -> Result<ServerConfig> {
    let data = fs::read_to_string(&path).map_err(|e| {
        ChatError::Configuration(format!("Failed to read config {:?}: {}", path.as_ref(), e))
    })?;
    load_config_from_toml_str(&data)
}

/// Load server config from a TOML string
pub fn load_config_from_toml_str(input: &str) -> Result<ServerConfig> {
    let config: ServerConfig = toml::from_str(input)
        .map_err(|e| ChatError::Configuration(format!("TOML parse error: {}", e)))?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9000);
        assert_eq!(config.log_level, "info");
        assert!(config.template_path.is_none());
        assert!(config.read_timeout_secs.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parses_full_config() {
        let input = r#"
        host = "127.0.0.1"
        port = 9100
        logLevel = "debug"
        templatePath = "templates/index.html"
        readTimeoutSecs = 30
        "#;
        let config = load_config_from_toml_str(input).expect("should parse");
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9100);
        assert_eq!(config.log_level, "debug");
        assert_eq!(
            config.template_path,
            Some(PathBuf::from("templates/index.html"))
        );
        assert_eq!(config.read_timeout_secs, Some(30));
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let config = load_config_from_toml_str("port = 9001").unwrap();
        assert_eq!(config.port, 9001);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_errors_on_empty_host() {
        let err = load_config_from_toml_str(r#"host = """#).unwrap_err();
        assert!(format!("{}", err).contains("host: cannot be empty"));
    }

    #[test]
    fn test_errors_on_zero_port() {
        let err = load_config_from_toml_str("port = 0").unwrap_err();
        assert!(format!("{}", err).contains("port: must be 1..=65535"));
    }

    #[test]
    fn test_errors_on_zero_read_timeout() {
        let err = load_config_from_toml_str("readTimeoutSecs = 0").unwrap_err();
        assert!(format!("{}", err).contains("readTimeoutSecs: must be > 0"));
    }

    #[test]
    fn test_errors_on_invalid_toml() {
        let err = load_config_from_toml_str("port = ").unwrap_err();
        assert!(format!("{}", err).contains("TOML parse error"));
    }

    #[test]
    fn test_load_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tertulia.toml");
        std::fs::write(&path, "port = 9002\nlogLevel = \"warn\"").unwrap();

        let config = load_config_from_toml_path(&path).unwrap();
        assert_eq!(config.port, 9002);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_load_from_missing_path() {
        let err = load_config_from_toml_path("/nope/tertulia.toml").unwrap_err();
        assert_eq!(err.code(), "CHAT004");
    }
}
