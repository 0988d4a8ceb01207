//! # Integration Bridge
//!
//! Service health monitoring and application authorization core for a
//! messaging integration bridge, built with Axum.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer
//! separation:
//!
//! - **Domain Layer** ([`domain`]) - Core entities and collaborator traits
//! - **Application Layer** ([`application`]) - Health check pipeline and
//!   authorization orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - HTTP client, JWT
//!   resolution, and other external integrations
//! - **API Layer** ([`api`]) - REST API handlers and DTOs
//!
//! ## Features
//!
//! - Periodic liveness polling of dependent services with aggregated-endpoint
//!   fallback
//! - Per-user, per-integration authorization verification with structured
//!   401 responses carrying handshake state
//! - Trait-based collaborator seams, mockable without a DI container
//!
//! ## Quick Start
//!
//! ```bash
//! # Set required environment variables
//! export SYMPHONY_URL="https://pod.example.com"
//! export JWT_SIGNING_SECRET="change-me"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        AuthorizationService, HealthCheckInvoker, HealthMonitor, ServiceCheckConfig,
    };
    pub use crate::domain::entities::{Connectivity, ServiceInfo, UserAuthorizationData};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
