//! Infrastructure layer with external service adapters.

/// Application configuration.
pub mod config;
/// Authentication server client.
pub mod remote;
/// Token store adapters.
pub mod storage;

pub use config::{AppConfig, CliArgs, Command, ConfigManager, LogLevel, StoreBackend};
pub use remote::HttpAuthRemote;
#[cfg(feature = "keyring")]
pub use storage::KeyringAuthTokenStore;
pub use storage::{FileAuthTokenStore, InMemoryAuthTokenStore};
