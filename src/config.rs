//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts.
//!
//! ## Required Variables
//!
//! - `SYMPHONY_URL` - base URL of the primary platform, hosting the
//!   aggregated health endpoint
//! - `JWT_SIGNING_SECRET` - HS256 secret used to validate bearer tokens
//!
//! ## Optional Variables
//!
//! - `POD_API_URL` - authorization store API base (default: `{SYMPHONY_URL}/pod`)
//! - `KEY_MANAGER_URL` - enables the key-manager health check when set
//! - `KEY_MANAGER_AUTH_MIN_VERSION` - minimum supported key-manager version
//! - `AGENT_URL` - enables the agent health check when set
//! - `AGENT_MIN_VERSION` - minimum supported agent version
//! - `SESSION_TOKEN` - pre-established session token for platform API calls
//! - `LISTEN` - bind address (default: `0.0.0.0:8080`)
//! - `RUST_LOG` - log level (default: `info`)
//! - `HEALTH_POLL_INTERVAL` - seconds between health check rounds (default: 30)
//! - `HEALTH_FETCH_TIMEOUT` - per-request health fetch timeout in seconds (default: 10)

use anyhow::{Context, Result};
use std::env;

use crate::application::services::ServiceCheckConfig;

/// Boolean field identifying the key-manager flag in health payloads.
const KM_AUTH_SERVICE_FIELD: &str = "keyauth";
/// Boolean field identifying the agent flag in health payloads.
const AGENT_SERVICE_FIELD: &str = "agentservice";
/// Boolean field identifying the pod flag in the aggregated payload.
const POD_SERVICE_FIELD: &str = "pod";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    /// Base URL of the primary platform.
    pub symphony_url: String,
    /// Base URL of the authorization store API.
    pub pod_api_url: String,
    pub key_manager_url: Option<String>,
    pub key_manager_auth_min_version: Option<String>,
    pub agent_url: Option<String>,
    pub agent_min_version: Option<String>,
    /// Pre-established session token handed to the session provider.
    pub session_token: Option<String>,
    /// HS256 secret used to validate bearer tokens on incoming requests.
    pub jwt_signing_secret: String,
    /// Seconds between health check rounds.
    pub health_poll_interval: u64,
    /// Per-request timeout for outbound health and store fetches, in seconds.
    pub health_fetch_timeout: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing.
    pub fn from_env() -> Result<Self> {
        let symphony_url = env::var("SYMPHONY_URL").context("SYMPHONY_URL must be set")?;

        let pod_api_url =
            env::var("POD_API_URL").unwrap_or_else(|_| format!("{symphony_url}/pod"));

        let jwt_signing_secret =
            env::var("JWT_SIGNING_SECRET").context("JWT_SIGNING_SECRET must be set")?;

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        let health_poll_interval = env::var("HEALTH_POLL_INTERVAL")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        let health_fetch_timeout = env::var("HEALTH_FETCH_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        Ok(Self {
            listen_addr,
            log_level,
            symphony_url,
            pod_api_url,
            key_manager_url: env::var("KEY_MANAGER_URL").ok(),
            key_manager_auth_min_version: env::var("KEY_MANAGER_AUTH_MIN_VERSION").ok(),
            agent_url: env::var("AGENT_URL").ok(),
            agent_min_version: env::var("AGENT_MIN_VERSION").ok(),
            session_token: env::var("SESSION_TOKEN").ok(),
            jwt_signing_secret,
            health_poll_interval,
            health_fetch_timeout,
        })
    }

    /// The monitored service table.
    ///
    /// One entry per dependent service with a configured URL; the primary
    /// platform itself is always monitored through its aggregated endpoint.
    pub fn service_checks(&self) -> Vec<ServiceCheckConfig> {
        let mut checks = vec![ServiceCheckConfig {
            service_name: "pod".to_string(),
            display_name: "POD".to_string(),
            base_url: self.symphony_url.clone(),
            health_path: "/webcontroller/HealthCheck/aggregated".to_string(),
            field_name: POD_SERVICE_FIELD.to_string(),
            min_version: None,
        }];

        if let Some(key_manager_url) = &self.key_manager_url {
            checks.push(ServiceCheckConfig {
                service_name: "key-manager-auth".to_string(),
                display_name: "Key Manager Authentication".to_string(),
                base_url: key_manager_url.clone(),
                health_path: "/HealthCheck/aggregated".to_string(),
                field_name: KM_AUTH_SERVICE_FIELD.to_string(),
                min_version: self.key_manager_auth_min_version.clone(),
            });
        }

        if let Some(agent_url) = &self.agent_url {
            checks.push(ServiceCheckConfig {
                service_name: "agent".to_string(),
                display_name: "Agent".to_string(),
                base_url: agent_url.clone(),
                health_path: "/agent/v1/HealthCheck".to_string(),
                field_name: AGENT_SERVICE_FIELD.to_string(),
                min_version: self.agent_min_version.clone(),
            });
        }

        checks
    }
}
