//! Application layer with use cases, services and DTOs.

/// Data transfer objects.
pub mod dto;
/// Response normalization.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use dto::AuthTokenDtoMapper;
pub use services::AuthResultNormalizer;
pub use use_cases::{LoginUseCase, RegisterUseCase, ResolveSessionUseCase};
