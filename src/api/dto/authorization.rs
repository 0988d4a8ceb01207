//! DTOs for authorization endpoints.

use serde::Deserialize;

/// Query parameters of the user-session endpoint.
#[derive(Debug, Deserialize)]
pub struct UserSessionQuery {
    /// Integration URL the caller wants authorization state for.
    pub url: String,
}
