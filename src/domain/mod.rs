//! Domain layer with core entities and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;

pub use entities::{AuthToken, AuthTokenRecord, Resource, ResponseType, StateResponse};
pub use errors::{AuthError, StorageError};
pub use ports::{AuthRemotePort, AuthTokenStorePort};
