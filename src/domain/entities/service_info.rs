//! Health record for a monitored bridge dependency.

use serde::Serialize;

/// Connectivity verdict for a dependent service.
///
/// `Up` is only ever derived from a health payload whose designated boolean
/// field was `true`; every failure mode (fetch, parse, field absent or not
/// `true`) resolves to `Down`. Records start as `Unknown` until their first
/// check completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Connectivity {
    Up,
    Down,
    Unknown,
}

/// Mutable per-service health record.
///
/// Written only by that service's own health check; read by anyone reporting
/// aggregate bridge health. No history is kept — each check overwrites the
/// previous verdict.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceInfo {
    /// Canonical service identifier.
    pub service_name: String,
    /// Friendly name shown in health reports.
    pub display_name: String,
    pub connectivity: Connectivity,
    /// Version reported by the service itself, established out-of-band.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_version: Option<String>,
    /// Minimum supported version. Populated only once a current version is
    /// known; absent otherwise, never guessed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_version: Option<String>,
}

impl ServiceInfo {
    pub fn new(service_name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            display_name: display_name.into(),
            connectivity: Connectivity::Unknown,
            current_version: None,
            min_version: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_starts_unknown() {
        let info = ServiceInfo::new("agent", "Agent");

        assert_eq!(info.connectivity, Connectivity::Unknown);
        assert!(info.current_version.is_none());
        assert!(info.min_version.is_none());
    }

    #[test]
    fn test_connectivity_serializes_uppercase() {
        assert_eq!(
            serde_json::to_string(&Connectivity::Up).unwrap(),
            "\"UP\""
        );
        assert_eq!(
            serde_json::to_string(&Connectivity::Down).unwrap(),
            "\"DOWN\""
        );
        assert_eq!(
            serde_json::to_string(&Connectivity::Unknown).unwrap(),
            "\"UNKNOWN\""
        );
    }
}
