#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

use integration_bridge::application::services::{
    AuthorizationService, HealthCheckInvoker, HealthMonitor, ServiceCheckConfig,
};
use integration_bridge::domain::collaborators::{
    AuthorizationStore, FetchError, HttpFetcher, Integration, IntegrationRegistry,
    JwtClaimsResolver, JwtError, MessageSource, SessionError, SessionProvider,
    UnauthorizedUserError,
};
use integration_bridge::domain::entities::{AppAuthorizationModel, UserAuthorizationData};
use integration_bridge::infrastructure::StaticMessageSource;
use integration_bridge::state::AppState;

pub const TEST_USER_ID: i64 = 7215545078541;

/// Fetcher serving canned bodies for exact URLs; everything else fails.
pub struct FakeFetcher {
    responses: HashMap<String, String>,
}

impl FakeFetcher {
    pub fn new(responses: HashMap<String, String>) -> Self {
        Self { responses }
    }

    pub fn empty() -> Self {
        Self {
            responses: HashMap::new(),
        }
    }
}

#[async_trait]
impl HttpFetcher for FakeFetcher {
    async fn fetch(&self, url: &str, _headers: &[(String, String)]) -> Result<String, FetchError> {
        self.responses
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::Network(format!("no route for {url}")))
    }
}

/// Claims resolver that accepts any header and returns a fixed user id.
pub struct FakeJwtResolver;

impl JwtClaimsResolver for FakeJwtResolver {
    fn user_id_from_authorization_header(&self, _header: Option<&str>) -> Result<i64, JwtError> {
        Ok(TEST_USER_ID)
    }
}

pub struct FakeSessionProvider;

#[async_trait]
impl SessionProvider for FakeSessionProvider {
    async fn session_token(&self, _service_type: &str) -> Result<String, SessionError> {
        Ok("session-token".to_string())
    }
}

/// Store holding at most one record, returned for every lookup.
pub struct FakeAuthorizationStore {
    record: Option<UserAuthorizationData>,
}

impl FakeAuthorizationStore {
    pub fn new(record: Option<UserAuthorizationData>) -> Self {
        Self { record }
    }
}

#[async_trait]
impl AuthorizationStore for FakeAuthorizationStore {
    async fn user_auth_data(
        &self,
        _session_token: &str,
        _configuration_id: &str,
        _user_id: i64,
        _url: &str,
    ) -> Result<Option<UserAuthorizationData>, FetchError> {
        Ok(self.record.clone())
    }
}

pub struct FakeIntegration {
    pub model: Option<AppAuthorizationModel>,
    pub reject_with: Option<String>,
}

#[async_trait]
impl Integration for FakeIntegration {
    fn authorization_model(&self) -> Option<AppAuthorizationModel> {
        self.model.clone()
    }

    fn integration_type(&self) -> String {
        "pod".to_string()
    }

    async fn verify_user_authorization_data(
        &self,
        _data: &UserAuthorizationData,
    ) -> Result<(), UnauthorizedUserError> {
        match &self.reject_with {
            Some(message) => Err(UnauthorizedUserError::new(message)),
            None => Ok(()),
        }
    }
}

pub struct FakeRegistry {
    integrations: HashMap<String, Arc<dyn Integration>>,
}

impl FakeRegistry {
    pub fn empty() -> Self {
        Self {
            integrations: HashMap::new(),
        }
    }

    pub fn with(configuration_id: &str, integration: FakeIntegration) -> Self {
        let mut integrations: HashMap<String, Arc<dyn Integration>> = HashMap::new();
        integrations.insert(configuration_id.to_string(), Arc::new(integration));
        Self { integrations }
    }
}

#[async_trait]
impl IntegrationRegistry for FakeRegistry {
    async fn integration_by_id(&self, configuration_id: &str) -> Option<Arc<dyn Integration>> {
        self.integrations.get(configuration_id).cloned()
    }
}

/// Monitored-service table used by the health tests.
pub fn test_service_checks() -> Vec<ServiceCheckConfig> {
    vec![
        ServiceCheckConfig {
            service_name: "key-manager-auth".to_string(),
            display_name: "Key Manager Authentication".to_string(),
            base_url: "https://km.example.com".to_string(),
            health_path: "/HealthCheck/aggregated".to_string(),
            field_name: "keyauth".to_string(),
            min_version: Some("1.55.0".to_string()),
        },
        ServiceCheckConfig {
            service_name: "agent".to_string(),
            display_name: "Agent".to_string(),
            base_url: "https://agent.example.com".to_string(),
            health_path: "/agent/v1/HealthCheck".to_string(),
            field_name: "agentservice".to_string(),
            min_version: None,
        },
    ]
}

pub fn test_monitor(responses: HashMap<String, String>) -> Arc<HealthMonitor> {
    let invoker = HealthCheckInvoker::new(
        Arc::new(FakeFetcher::new(responses)),
        Arc::new(StaticMessageSource),
        "https://pod.example.com",
    );
    Arc::new(HealthMonitor::new(invoker, test_service_checks()))
}

pub fn test_authorization(
    registry: FakeRegistry,
    record: Option<UserAuthorizationData>,
) -> Arc<AuthorizationService> {
    Arc::new(AuthorizationService::new(
        Arc::new(registry),
        Arc::new(FakeSessionProvider),
        Arc::new(FakeAuthorizationStore::new(record)),
        Arc::new(FakeJwtResolver),
        Arc::new(StaticMessageSource),
    ))
}

/// State with the given authorization service and an idle monitor.
pub fn test_state(authorization: Arc<AuthorizationService>) -> AppState {
    AppState::new(authorization, test_monitor(HashMap::new()))
}

/// State with the given monitor and an empty-registry authorization service.
pub fn test_state_with_monitor(monitor: Arc<HealthMonitor>) -> AppState {
    AppState::new(test_authorization(FakeRegistry::empty(), None), monitor)
}
