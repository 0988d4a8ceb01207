//! HTTP server initialization and runtime setup.
//!
//! Wires collaborators, spawns the health polling loop, and runs the Axum
//! server lifecycle.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;

use crate::application::services::{AuthorizationService, HealthCheckInvoker, HealthMonitor};
use crate::config::Config;
use crate::domain::collaborators::{HttpFetcher, MessageSource};
use crate::infrastructure::{
    HsJwtResolver, NullIntegrationRegistry, RemoteAuthorizationStore, ReqwestFetcher,
    StaticMessageSource, StaticSessionProvider,
};
use crate::routes::app_router;
use crate::state::AppState;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - the shared HTTP fetcher with enforced timeouts
/// - the health monitor and its background polling loop
/// - the authorization service and its collaborators
/// - the Axum HTTP server
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built, the bind address is
/// invalid, or the server fails at runtime.
pub async fn run(config: Config) -> Result<()> {
    let fetcher: Arc<dyn HttpFetcher> = Arc::new(ReqwestFetcher::new(Duration::from_secs(
        config.health_fetch_timeout,
    ))?);
    let messages: Arc<dyn MessageSource> = Arc::new(StaticMessageSource);

    let invoker = HealthCheckInvoker::new(
        fetcher.clone(),
        messages.clone(),
        config.symphony_url.clone(),
    );
    let monitor = Arc::new(HealthMonitor::new(invoker, config.service_checks()));
    tokio::spawn(
        monitor
            .clone()
            .run(Duration::from_secs(config.health_poll_interval)),
    );

    let authorization = Arc::new(AuthorizationService::new(
        Arc::new(NullIntegrationRegistry::new()),
        Arc::new(StaticSessionProvider::new(config.session_token.clone())),
        Arc::new(RemoteAuthorizationStore::new(
            fetcher.clone(),
            config.pod_api_url.clone(),
        )),
        Arc::new(HsJwtResolver::new(&config.jwt_signing_secret)),
        messages,
    ));

    let state = AppState::new(authorization, monitor);
    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
