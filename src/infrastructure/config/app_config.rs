//! Application configuration.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::args::CliArgs;

pub(super) const APP_NAME: &str = "session-manager";
pub(super) const APP_QUALIFIER: &str = "com";
pub(super) const APP_ORGANIZATION: &str = "rradzzio";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Where login tokens are persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// JSON file in the data directory.
    #[default]
    File,
    /// Process memory; lost on exit.
    Memory,
    /// System keyring.
    Keyring,
}

/// Authentication server settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Server base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Login endpoint, relative to `base_url`.
    #[serde(default = "default_login_path")]
    pub login_path: String,

    /// Registration endpoint, relative to `base_url`.
    #[serde(default = "default_register_path")]
    pub register_path: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            login_path: default_login_path(),
            register_path: default_register_path(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Token store settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store backend.
    #[serde(default)]
    pub backend: StoreBackend,

    /// File store location; defaults to the data directory.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

fn default_base_url() -> String {
    "http://localhost:8000/api".to_string()
}

fn default_login_path() -> String {
    "login".to_string()
}

fn default_register_path() -> String {
    "register".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

/// Application configuration from file and CLI.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Authentication server.
    #[serde(default)]
    pub api: ApiConfig,

    /// Token store.
    #[serde(default)]
    pub store: StoreConfig,
}

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: &CliArgs) {
        if let Some(config_path) = &args.config {
            self.config = Some(config_path.clone());
        }
        if let Some(log_path) = &args.log_path {
            self.log_path = Some(log_path.clone());
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(base_url) = &args.base_url {
            self.api.base_url.clone_from(base_url);
        }
        if let Some(backend) = args.store {
            self.store.backend = backend;
        }
        if let Some(store_path) = &args.store_path {
            self.store.path = Some(store_path.clone());
        }
    }

    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
    }

    /// Returns default config directory.
    #[must_use]
    pub fn default_config_dir() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_dir().join("session-manager.log"))
    }

    /// Returns default token store file path.
    #[must_use]
    pub fn default_store_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_dir().join("auth_tokens.json"))
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }

    /// Returns effective token store file path.
    #[must_use]
    pub fn effective_store_path(&self) -> Option<PathBuf> {
        self.store.path.clone().or_else(Self::default_store_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_config_with_sections() {
        let toml_content = r#"
            log_level = "debug"

            [api]
            base_url = "https://auth.example.com"
            timeout_secs = 5

            [store]
            backend = "memory"
        "#;

        let config: AppConfig = toml::from_str(toml_content).expect("Failed to parse config");

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.api.base_url, "https://auth.example.com");
        assert_eq!(config.api.login_path, "login");
        assert_eq!(config.api.timeout_secs, 5);
        assert_eq!(config.store.backend, StoreBackend::Memory);
        assert!(config.store.path.is_none());
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.api, ApiConfig::default());
        assert_eq!(config.store.backend, StoreBackend::File);
    }

    #[test]
    fn test_cli_args_override_file_values() {
        let mut config = AppConfig::default();
        let args = CliArgs::parse_from([
            "session-manager",
            "--base-url",
            "http://127.0.0.1:9000",
            "--store",
            "keyring",
            "--log-level",
            "trace",
            "session",
            "--email",
            "a@b.com",
        ]);

        config.merge_with_args(&args);

        assert_eq!(config.api.base_url, "http://127.0.0.1:9000");
        assert_eq!(config.store.backend, StoreBackend::Keyring);
        assert_eq!(config.log_level, LogLevel::Trace);
    }
}
