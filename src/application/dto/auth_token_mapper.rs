//! Wire-to-domain mapping for token payloads.

use crate::domain::entities::AuthToken;
use crate::domain::ports::AuthTokenDto;

/// Maps [`AuthTokenDto`] into the domain [`AuthToken`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthTokenDtoMapper;

impl AuthTokenDtoMapper {
    /// Maps a server token payload.
    #[must_use]
    pub fn map_to_domain_model(&self, dto: &AuthTokenDto) -> AuthToken {
        AuthToken::new(dto.token.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maps_token_without_error() {
        let dto = AuthTokenDto {
            token: "abc123".to_string(),
        };

        let token = AuthTokenDtoMapper.map_to_domain_model(&dto);

        assert_eq!(token.as_str(), "abc123");
        assert!(token.error_response().is_none());
    }
}
