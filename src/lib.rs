//! Session manager - authentication repository for client applications.
//!
//! Logs in or registers against a remote auth server, keeps the issued
//! token in a local store and hands the UI a uniform [`Resource`] result.
//!
//! [`Resource`]: domain::Resource

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing use cases, services and DTOs.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing adapters for external services.
pub mod infrastructure;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "session-manager";
