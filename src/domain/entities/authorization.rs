//! Authorization records exchanged between the bridge and its integrations.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Per-user, per-integration authorization record.
///
/// Created with empty properties on a user's first authorization attempt and
/// persisted by the remote authorization store once the flow completes; never
/// created twice for the same `(user, integration URL)` pair after that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAuthorizationData {
    pub user_id: i64,
    /// Integration URL this record applies to.
    pub url: String,
    /// Opaque authorization properties owned by the integration
    /// (e.g. OAuth state accumulated across handshake steps).
    #[serde(default)]
    pub properties: Map<String, Value>,
}

impl UserAuthorizationData {
    /// Fresh record for a user who has not completed the authorization flow.
    pub fn new(user_id: i64, url: impl Into<String>) -> Self {
        Self {
            user_id,
            url: url.into(),
            properties: Map::new(),
        }
    }
}

/// Declared authorization scheme of an integration application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppAuthorizationModel {
    pub application_name: String,
    pub application_url: String,
    #[serde(default)]
    pub properties: Map<String, Value>,
}
