//! Shared registry of service health records and the polling loop.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::{debug, info};

use super::health_check::{HealthCheckInvoker, ServiceCheckConfig};
use crate::domain::entities::ServiceInfo;

struct MonitoredService {
    config: ServiceCheckConfig,
    info: RwLock<ServiceInfo>,
}

/// Owns one health record per monitored service.
///
/// Records are disjoint: each service's check is the only writer of its
/// record, while readers may snapshot at any time. No cross-service locking.
pub struct HealthMonitor {
    invoker: HealthCheckInvoker,
    services: Vec<MonitoredService>,
}

impl HealthMonitor {
    pub fn new(invoker: HealthCheckInvoker, configs: Vec<ServiceCheckConfig>) -> Self {
        let services = configs
            .into_iter()
            .map(|config| MonitoredService {
                info: RwLock::new(ServiceInfo::new(&config.service_name, &config.display_name)),
                config,
            })
            .collect();

        Self { invoker, services }
    }

    /// Runs one check for every monitored service, concurrently.
    ///
    /// A stalled check only delays its own service; the others resolve
    /// independently.
    pub async fn check_all(&self) {
        let checks = self.services.iter().map(|svc| self.check_service(svc));
        futures::future::join_all(checks).await;
    }

    async fn check_service(&self, svc: &MonitoredService) {
        let status = self.invoker.check(&svc.config).await;

        let mut info = svc.info.write().await;
        info.connectivity = status;
        debug!(service = %svc.config.service_name, ?status, "health record updated");
    }

    /// Establishes a service's current version, enabling min-version
    /// reporting for it. Until this is called, the record reports no minimum
    /// version rather than guessing.
    pub async fn report_version(&self, service_name: &str, version: &str) {
        let Some(svc) = self
            .services
            .iter()
            .find(|svc| svc.config.service_name == service_name)
        else {
            return;
        };

        let mut info = svc.info.write().await;
        info.current_version = Some(version.to_string());
        info.min_version = svc.config.min_version.clone();
    }

    /// Current health records for all monitored services.
    pub async fn snapshot(&self) -> Vec<ServiceInfo> {
        let mut records = Vec::with_capacity(self.services.len());
        for svc in &self.services {
            records.push(svc.info.read().await.clone());
        }
        records
    }

    /// Polling loop, intended to be spawned as a background task.
    pub async fn run(self: Arc<Self>, interval: Duration) {
        info!(
            services = self.services.len(),
            interval_secs = interval.as_secs(),
            "health monitor started"
        );

        let mut ticker = tokio::time::interval(interval);
        loop {
            ticker.tick().await;
            self.check_all().await;
        }
    }
}
