//! DTOs for the service health endpoint.

use serde::Serialize;

use crate::domain::entities::{Connectivity, ServiceInfo};

/// Health report for all monitored services.
#[derive(Debug, Serialize)]
pub struct ServicesHealthResponse {
    pub services: Vec<ServiceHealth>,
}

/// Health of one monitored service as exposed to the aggregate reporter.
///
/// The internally-tracked current version stays internal; only the verdict
/// and the minimum supported version (when known) go on the wire.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceHealth {
    pub service_name: String,
    pub display_name: String,
    pub connectivity: Connectivity,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_version: Option<String>,
}

impl From<ServiceInfo> for ServiceHealth {
    fn from(info: ServiceInfo) -> Self {
        Self {
            service_name: info.service_name,
            display_name: info.display_name,
            connectivity: info.connectivity,
            min_version: info.min_version,
        }
    }
}
