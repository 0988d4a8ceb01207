//! HS256 bearer-token claims resolver.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::Deserialize;

use crate::domain::collaborators::{JwtClaimsResolver, JwtError};

#[derive(Debug, Deserialize)]
struct Claims {
    #[serde(rename = "userId")]
    user_id: i64,
    #[allow(dead_code)]
    exp: usize,
}

/// Resolves user ids from `Authorization: Bearer <jwt>` headers signed with a
/// shared HS256 secret.
pub struct HsJwtResolver {
    key: DecodingKey,
    validation: Validation,
}

impl HsJwtResolver {
    pub fn new(secret: &str) -> Self {
        Self {
            key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
        }
    }
}

impl JwtClaimsResolver for HsJwtResolver {
    fn user_id_from_authorization_header(&self, header: Option<&str>) -> Result<i64, JwtError> {
        let header = header.ok_or(JwtError::MissingHeader)?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or_else(|| JwtError::InvalidToken("expected bearer scheme".to_string()))?;

        let data = decode::<Claims>(token, &self.key, &self.validation)
            .map_err(|e| JwtError::InvalidToken(e.to_string()))?;

        Ok(data.claims.user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{EncodingKey, Header, encode};
    use serde::Serialize;
    use std::time::{SystemTime, UNIX_EPOCH};

    const SECRET: &str = "test-jwt-secret";

    #[derive(Serialize)]
    struct TestClaims {
        #[serde(rename = "userId")]
        user_id: i64,
        exp: usize,
    }

    fn token_for(user_id: i64, exp_offset_secs: i64) -> String {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs() as i64;
        let claims = TestClaims {
            user_id,
            exp: (now + exp_offset_secs) as usize,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn test_resolves_user_id_from_valid_header() {
        let resolver = HsJwtResolver::new(SECRET);
        let header = format!("Bearer {}", token_for(7215545078541, 3600));

        let user_id = resolver
            .user_id_from_authorization_header(Some(&header))
            .unwrap();

        assert_eq!(user_id, 7215545078541);
    }

    #[test]
    fn test_missing_header_fails() {
        let resolver = HsJwtResolver::new(SECRET);

        assert!(matches!(
            resolver.user_id_from_authorization_header(None),
            Err(JwtError::MissingHeader)
        ));
    }

    #[test]
    fn test_non_bearer_scheme_fails() {
        let resolver = HsJwtResolver::new(SECRET);

        assert!(matches!(
            resolver.user_id_from_authorization_header(Some("Basic dXNlcjpwYXNz")),
            Err(JwtError::InvalidToken(_))
        ));
    }

    #[test]
    fn test_expired_token_fails() {
        let resolver = HsJwtResolver::new(SECRET);
        let header = format!("Bearer {}", token_for(42, -3600));

        assert!(matches!(
            resolver.user_id_from_authorization_header(Some(&header)),
            Err(JwtError::InvalidToken(_))
        ));
    }

    #[test]
    fn test_wrong_secret_fails() {
        let resolver = HsJwtResolver::new("a-different-secret");
        let header = format!("Bearer {}", token_for(42, 3600));

        assert!(matches!(
            resolver.user_id_from_authorization_header(Some(&header)),
            Err(JwtError::InvalidToken(_))
        ));
    }
}
