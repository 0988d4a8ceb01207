//! JWT claims resolution contract.

use thiserror::Error;

/// Failure resolving a user identity from an `Authorization` header.
#[derive(Debug, Error)]
pub enum JwtError {
    #[error("missing Authorization header")]
    MissingHeader,

    #[error("invalid bearer token: {0}")]
    InvalidToken(String),
}

/// Resolves the authenticated user id from a raw `Authorization` header.
#[cfg_attr(test, mockall::automock)]
pub trait JwtClaimsResolver: Send + Sync {
    /// Numeric user id carried in the header's bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`JwtError`] when the header is absent, malformed, or its
    /// token fails validation.
    fn user_id_from_authorization_header<'a>(
        &self,
        header: Option<&'a str>,
    ) -> Result<i64, JwtError>;
}
