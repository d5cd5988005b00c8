//! Data transfer objects for the application layer.

mod auth_token_mapper;

pub use auth_token_mapper::AuthTokenDtoMapper;
