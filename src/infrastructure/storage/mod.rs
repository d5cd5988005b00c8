//! Token store adapters.

mod file_store;
#[cfg(feature = "keyring")]
mod keyring_store;
mod memory_store;

pub use file_store::FileAuthTokenStore;
#[cfg(feature = "keyring")]
pub use keyring_store::KeyringAuthTokenStore;
pub use memory_store::InMemoryAuthTokenStore;
