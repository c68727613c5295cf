//! CLI error types.

use thiserror::Error;

use ecsmap_core::TopologyError;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Topology enumeration failed upstream.
    #[error(transparent)]
    Topology(#[from] TopologyError),

    /// Output serialization failed.
    #[error("JSON serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topology_errors_pass_through_unchanged() {
        let err = CliError::from(TopologyError::upstream(
            "list_clusters",
            "account",
            "expired token",
        ));
        assert_eq!(
            err.to_string(),
            "upstream unavailable during list_clusters (account): expired token"
        );
    }

    #[test]
    fn io_errors_are_prefixed() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        assert!(CliError::from(io_err).to_string().starts_with("IO error:"));
    }
}
