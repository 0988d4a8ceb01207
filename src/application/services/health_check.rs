//! Health check pipeline for dependent bridge services.
//!
//! Each monitored service is described by a [`ServiceCheckConfig`] entry;
//! a single [`HealthCheckInvoker`] runs the same two-step strategy for every
//! entry: fetch the service's own health endpoint, fall back to the
//! platform's aggregated endpoint when that yields no payload, then derive a
//! connectivity verdict from the designated boolean field.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, error, warn};

use crate::domain::collaborators::{HttpFetcher, MessageSource};
use crate::domain::entities::Connectivity;

/// Message key logged when a health payload cannot be parsed.
pub const HEALTH_PARSE_FAILURE: &str = "integration.healthcheck.parse.failure";

/// Path of the aggregated health endpoint on the primary platform.
const AGGREGATED_HC_PATH: &str = "/webcontroller/HealthCheck/aggregated";

/// Static description of one monitored service check.
///
/// One table of these, built from configuration, replaces a per-service
/// invoker hierarchy: every field a service used to override is data here.
#[derive(Debug, Clone)]
pub struct ServiceCheckConfig {
    /// Canonical service identifier, used as the record key and in logs.
    pub service_name: String,
    /// Friendly name shown in health reports.
    pub display_name: String,
    /// Base URL of the service.
    pub base_url: String,
    /// Suffix appended to the base URL for the primary check.
    pub health_path: String,
    /// Boolean field read from the health payload.
    pub field_name: String,
    /// Minimum supported version, reported once a current version is known.
    pub min_version: Option<String>,
}

impl ServiceCheckConfig {
    /// URL of the service's own health endpoint.
    pub fn health_check_url(&self) -> String {
        format!("{}{}", self.base_url, self.health_path)
    }
}

/// Parses a raw health payload into a JSON tree.
///
/// Malformed input yields `None` after an error log naming the affected
/// service; there is no partial-parse recovery.
pub fn parse_health_payload(
    raw: &str,
    service_name: &str,
    messages: &dyn MessageSource,
) -> Option<Value> {
    match serde_json::from_str(raw) {
        Ok(node) => Some(node),
        Err(_) => {
            error!(
                "{}",
                messages.message(HEALTH_PARSE_FAILURE, &[service_name.to_string()])
            );
            None
        }
    }
}

/// Derives a connectivity verdict from a parsed health payload.
///
/// Pure and total: an absent payload, a missing field, or anything other
/// than boolean `true` resolves to `Down`.
pub fn resolve_connectivity(node: Option<&Value>, field_name: &str) -> Connectivity {
    match node.and_then(|n| n.get(field_name)).and_then(Value::as_bool) {
        Some(true) => Connectivity::Up,
        _ => Connectivity::Down,
    }
}

/// Runs the two-step health check strategy for monitored services.
pub struct HealthCheckInvoker {
    fetcher: Arc<dyn HttpFetcher>,
    messages: Arc<dyn MessageSource>,
    /// Base URL of the primary platform hosting the aggregated endpoint.
    symphony_url: String,
}

impl HealthCheckInvoker {
    pub fn new(
        fetcher: Arc<dyn HttpFetcher>,
        messages: Arc<dyn MessageSource>,
        symphony_url: impl Into<String>,
    ) -> Self {
        Self {
            fetcher,
            messages,
            symphony_url: symphony_url.into(),
        }
    }

    /// Checks one service and returns its connectivity verdict.
    ///
    /// Tries the service's own health endpoint first. When that fetch fails
    /// or its body does not parse, exactly one fallback fetch of the
    /// aggregated endpoint is attempted before resolving. Every failure mode
    /// degrades to [`Connectivity::Down`]; this never errors or panics, so a
    /// stalled or broken service cannot take the polling loop down with it.
    pub async fn check(&self, config: &ServiceCheckConfig) -> Connectivity {
        let payload = match self
            .fetch_payload(&config.health_check_url(), &config.service_name)
            .await
        {
            Some(node) => Some(node),
            None => self.read_aggregated(&config.service_name).await,
        };

        let status = resolve_connectivity(payload.as_ref(), &config.field_name);
        debug!(
            service = %config.service_name,
            field = %config.field_name,
            ?status,
            "health check resolved"
        );
        status
    }

    async fn fetch_payload(&self, url: &str, service_name: &str) -> Option<Value> {
        match self.fetcher.fetch(url, &[]).await {
            Ok(body) => parse_health_payload(&body, service_name, self.messages.as_ref()),
            Err(e) => {
                warn!(service = %service_name, url = %url, "health fetch failed: {e}");
                None
            }
        }
    }

    /// Reads the aggregated health check on the primary platform.
    async fn read_aggregated(&self, service_name: &str) -> Option<Value> {
        let url = format!("{}{}", self.symphony_url, AGGREGATED_HC_PATH);
        self.fetch_payload(&url, service_name).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::collaborators::{FetchError, MockHttpFetcher, MockMessageSource};
    use serde_json::json;

    fn echo_messages() -> MockMessageSource {
        let mut messages = MockMessageSource::new();
        messages
            .expect_message()
            .returning(|key, _| key.to_string());
        messages
    }

    fn km_auth_config() -> ServiceCheckConfig {
        ServiceCheckConfig {
            service_name: "key-manager-auth".to_string(),
            display_name: "Key Manager Authentication".to_string(),
            base_url: "https://km.example.com".to_string(),
            health_path: "/HealthCheck/aggregated".to_string(),
            field_name: "keyauth".to_string(),
            min_version: None,
        }
    }

    fn invoker(fetcher: MockHttpFetcher) -> HealthCheckInvoker {
        HealthCheckInvoker::new(
            Arc::new(fetcher),
            Arc::new(echo_messages()),
            "https://pod.example.com",
        )
    }

    #[test]
    fn test_parse_rejects_malformed_payloads() {
        let messages = echo_messages();

        for raw in ["", "not json", "{\"keyauth\": tru", "<html></html>", "}{"] {
            assert!(parse_health_payload(raw, "key-manager-auth", &messages).is_none());
        }
    }

    #[test]
    fn test_parse_accepts_valid_payload() {
        let messages = echo_messages();

        let node = parse_health_payload("{\"keyauth\": true}", "key-manager-auth", &messages)
            .expect("valid JSON should parse");
        assert_eq!(node["keyauth"], json!(true));
    }

    #[test]
    fn test_resolve_absent_payload_is_down() {
        assert_eq!(resolve_connectivity(None, "keyauth"), Connectivity::Down);
    }

    #[test]
    fn test_resolve_true_field_is_up() {
        let node = json!({"keyauth": true});
        assert_eq!(
            resolve_connectivity(Some(&node), "keyauth"),
            Connectivity::Up
        );
    }

    #[test]
    fn test_resolve_anything_else_is_down() {
        for node in [
            json!({"keyauth": false}),
            json!({"other": true}),
            json!({"keyauth": "true"}),
            json!({"keyauth": 1}),
            json!({"keyauth": null}),
            json!([true]),
        ] {
            assert_eq!(
                resolve_connectivity(Some(&node), "keyauth"),
                Connectivity::Down,
                "payload {node} must resolve to DOWN"
            );
        }
    }

    #[tokio::test]
    async fn test_primary_success_skips_fallback() {
        let mut fetcher = MockHttpFetcher::new();
        fetcher
            .expect_fetch()
            .withf(|url, _| url == "https://km.example.com/HealthCheck/aggregated")
            .times(1)
            .returning(|_, _| Ok("{\"keyauth\": true}".to_string()));

        let status = invoker(fetcher).check(&km_auth_config()).await;

        assert_eq!(status, Connectivity::Up);
    }

    #[tokio::test]
    async fn test_fetch_failure_falls_back_to_aggregated() {
        let mut fetcher = MockHttpFetcher::new();
        fetcher
            .expect_fetch()
            .withf(|url, _| url.starts_with("https://km.example.com"))
            .times(1)
            .returning(|_, _| Err(FetchError::Network("connection refused".to_string())));
        fetcher
            .expect_fetch()
            .withf(|url, _| url == "https://pod.example.com/webcontroller/HealthCheck/aggregated")
            .times(1)
            .returning(|_, _| Ok("{\"keyauth\": false}".to_string()));

        let status = invoker(fetcher).check(&km_auth_config()).await;

        assert_eq!(status, Connectivity::Down);
    }

    #[tokio::test]
    async fn test_parse_failure_falls_back_to_aggregated() {
        let mut fetcher = MockHttpFetcher::new();
        fetcher
            .expect_fetch()
            .withf(|url, _| url.starts_with("https://km.example.com"))
            .times(1)
            .returning(|_, _| Ok("<html>gateway error</html>".to_string()));
        fetcher
            .expect_fetch()
            .withf(|url, _| url.starts_with("https://pod.example.com"))
            .times(1)
            .returning(|_, _| Ok("{\"keyauth\": true}".to_string()));

        let status = invoker(fetcher).check(&km_auth_config()).await;

        assert_eq!(status, Connectivity::Up);
    }

    #[tokio::test]
    async fn test_both_failures_resolve_down() {
        let mut fetcher = MockHttpFetcher::new();
        // Exactly two fetches: primary plus one fallback, never more.
        fetcher
            .expect_fetch()
            .times(2)
            .returning(|_, _| Err(FetchError::Timeout(10)));

        let status = invoker(fetcher).check(&km_auth_config()).await;

        assert_eq!(status, Connectivity::Down);
    }

    #[tokio::test]
    async fn test_check_is_idempotent_against_unchanged_remote() {
        let mut fetcher = MockHttpFetcher::new();
        fetcher
            .expect_fetch()
            .times(2)
            .returning(|_, _| Ok("{\"keyauth\": true}".to_string()));

        let invoker = invoker(fetcher);
        let config = km_auth_config();

        let first = invoker.check(&config).await;
        let second = invoker.check(&config).await;

        assert_eq!(first, second);
    }
}
