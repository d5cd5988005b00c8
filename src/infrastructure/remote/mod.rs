//! Authentication server client.

mod http_client;

pub use http_client::HttpAuthRemote;
