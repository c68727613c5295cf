//! Error types for topology enumeration.

use thiserror::Error;

/// Errors that can occur while walking the account topology.
///
/// Every upstream failure — authentication, authorization, throttling,
/// transient network faults, resource-not-found — is surfaced as the single
/// [`TopologyError::UpstreamUnavailable`] kind. The walker does not classify,
/// retry, or isolate failures: the first error aborts the whole walk.
#[derive(Debug, Error)]
pub enum TopologyError {
    /// An upstream API call failed.
    #[error("upstream unavailable during {operation} ({scope}): {message}")]
    UpstreamUnavailable {
        /// The operation that was being performed (e.g. `list_services`).
        operation: &'static str,
        /// The identifiers involved (cluster, service, interface ids).
        scope: String,
        /// The upstream failure message.
        message: String,
    },
}

impl TopologyError {
    /// Builds an [`TopologyError::UpstreamUnavailable`] for a failed call.
    pub fn upstream(
        operation: &'static str,
        scope: impl Into<String>,
        message: impl ToString,
    ) -> Self {
        Self::UpstreamUnavailable {
            operation,
            scope: scope.into(),
            message: message.to_string(),
        }
    }
}

/// Result type for topology operations.
pub type Result<T> = std::result::Result<T, TopologyError>;
