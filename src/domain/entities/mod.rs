//! Domain entities.

mod auth_request;
mod auth_token;
mod auth_token_record;
mod resource;

pub use auth_request::{AuthLoginRequest, AuthRegistrationRequest};
pub use auth_token::{AuthToken, ResponseType, StateResponse};
pub use auth_token_record::AuthTokenRecord;
pub use resource::Resource;
