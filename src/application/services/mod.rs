//! Application services.

mod auth_result_normalizer;

pub use auth_result_normalizer::{
    AuthResultNormalizer, UNKNOWN_ERROR_MESSAGE, parse_error_message, unknown_error,
};
