//! Infrastructure layer: concrete collaborator implementations.
//!
//! Implements the contracts defined in `crate::domain::collaborators` against
//! real external systems.
//!
//! # Modules
//!
//! - [`http_fetcher`] - reqwest client with enforced timeouts
//! - [`auth_store`] - remote authorization store client
//! - [`jwt_resolver`] - HS256 bearer-token claims resolution
//! - [`messages`] - static message catalogue
//! - [`registry`] - empty integration registry placeholder
//! - [`sessions`] - configuration-backed session provider

pub mod auth_store;
pub mod http_fetcher;
pub mod jwt_resolver;
pub mod messages;
pub mod registry;
pub mod sessions;

pub use auth_store::RemoteAuthorizationStore;
pub use http_fetcher::ReqwestFetcher;
pub use jwt_resolver::HsJwtResolver;
pub use messages::StaticMessageSource;
pub use registry::NullIntegrationRegistry;
pub use sessions::StaticSessionProvider;
