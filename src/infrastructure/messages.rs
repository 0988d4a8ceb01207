//! Static message catalogue.

use crate::application::services::authorization_service::{
    INTEGRATION_UNAVAILABLE, INTEGRATION_UNAVAILABLE_SOLUTION,
};
use crate::application::services::health_check::HEALTH_PARSE_FAILURE;
use crate::domain::collaborators::MessageSource;

const CATALOGUE: &[(&str, &str)] = &[
    (
        INTEGRATION_UNAVAILABLE,
        "Integration {} is unavailable or not yet bootstrapped",
    ),
    (
        INTEGRATION_UNAVAILABLE_SOLUTION,
        "Verify the integration is deployed and its configuration identifier is correct",
    ),
    (
        HEALTH_PARSE_FAILURE,
        "Unexpected I/O error reading the {} health check response",
    ),
];

/// In-crate message table behind the [`MessageSource`] contract.
///
/// Stands in for a localized message bundle; the keys match the platform's
/// message catalogue so a real bundle can be swapped in without touching the
/// core.
pub struct StaticMessageSource;

impl MessageSource for StaticMessageSource {
    fn message(&self, key: &str, args: &[String]) -> String {
        let template = CATALOGUE
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, template)| *template)
            .unwrap_or(key);

        let mut message = template.to_string();
        for arg in args {
            message = message.replacen("{}", arg, 1);
        }
        message
    }
}
