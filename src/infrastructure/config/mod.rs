//! Application configuration.

pub mod app_config;
pub mod args;
pub mod loader;

pub use app_config::{ApiConfig, AppConfig, LogLevel, StoreBackend, StoreConfig};
pub use args::{CliArgs, Command};
pub use loader::{ConfigError, ConfigManager};
