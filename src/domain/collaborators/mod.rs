//! Collaborator trait definitions for the domain layer.
//!
//! These traits abstract the external systems the core depends on: outbound
//! HTTP, the integration registry, session management, the remote
//! authorization store, JWT claims resolution, and message lookup. Concrete
//! implementations live in `crate::infrastructure`; mocks are auto-generated
//! via `mockall` for unit tests.

pub mod auth_store;
pub mod fetcher;
pub mod jwt;
pub mod messages;
pub mod registry;
pub mod sessions;

pub use auth_store::AuthorizationStore;
pub use fetcher::{FetchError, HttpFetcher};
pub use jwt::{JwtClaimsResolver, JwtError};
pub use messages::MessageSource;
pub use registry::{Integration, IntegrationRegistry, UnauthorizedUserError};
pub use sessions::{SessionError, SessionProvider};

#[cfg(test)]
pub use auth_store::MockAuthorizationStore;
#[cfg(test)]
pub use fetcher::MockHttpFetcher;
#[cfg(test)]
pub use jwt::MockJwtClaimsResolver;
#[cfg(test)]
pub use messages::MockMessageSource;
#[cfg(test)]
pub use registry::{MockIntegration, MockIntegrationRegistry};
#[cfg(test)]
pub use sessions::MockSessionProvider;
