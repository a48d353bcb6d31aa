//! Store status port - diagnostic view of the idea store.

use async_trait::async_trait;
use serde::Serialize;

/// Reports whether the backing store is configured and answering.
///
/// Implementations never fail; problems are captured in the report.
#[async_trait]
pub trait StoreStatusProbe: Send + Sync {
    async fn check(&self) -> StoreStatus;
}

/// Maximum length of an error message carried in a status report.
pub const STATUS_ERROR_MAX_CHARS: usize = 50;

/// Snapshot of store connectivity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StoreStatus {
    pub configured: bool,
    pub connected: bool,
    /// Up to ten collection (table) names.
    pub collections: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StoreStatus {
    pub fn not_configured() -> Self {
        Self::default()
    }

    pub fn connected(collections: Vec<String>) -> Self {
        Self {
            configured: true,
            connected: true,
            collections,
            error: None,
        }
    }

    /// Configured but failing; the message is truncated to
    /// [`STATUS_ERROR_MAX_CHARS`] characters.
    pub fn failing(message: impl AsRef<str>) -> Self {
        Self {
            configured: true,
            connected: false,
            collections: Vec::new(),
            error: Some(message.as_ref().chars().take(STATUS_ERROR_MAX_CHARS).collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failing_truncates_long_messages() {
        let status = StoreStatus::failing("x".repeat(200));
        assert_eq!(status.error.unwrap().chars().count(), STATUS_ERROR_MAX_CHARS);
        assert!(status.configured);
        assert!(!status.connected);
    }

    #[test]
    fn not_configured_omits_error() {
        let json = serde_json::to_value(StoreStatus::not_configured()).unwrap();
        assert_eq!(json["configured"], false);
        assert!(json.get("error").is_none());
    }
}
