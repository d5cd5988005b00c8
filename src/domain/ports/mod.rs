//! Ports implemented by infrastructure adapters.

mod auth_remote_port;
mod auth_token_store_port;

pub use auth_remote_port::{AuthRemotePort, AuthTokenDto, RawResponse};
pub use auth_token_store_port::AuthTokenStorePort;
