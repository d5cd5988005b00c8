//! Domain error types.

mod auth_error;
mod storage_error;

pub use auth_error::AuthError;
pub use storage_error::StorageError;
