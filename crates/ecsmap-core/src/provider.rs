//! Capability traits for the upstream read-only APIs.
//!
//! The walker consumes two collaborators: the container orchestration API
//! (clusters, services, tasks) and the virtual networking API (network
//! interfaces). Both are injected at construction so every resolver step is
//! independently testable with a stub.

use crate::error::Result;
use crate::types::{ClusterRef, InterfaceAddress, ServiceRef, TaskRecord, TaskRef};

/// Read-only view of the container orchestration API.
///
/// Listing operations drain pagination fully before returning: callers never
/// see a partial list due to page truncation, and pagination tokens never
/// escape the implementation.
pub trait ContainerApi {
    /// Lists every cluster visible to the account, unfiltered.
    async fn list_clusters(&self) -> Result<Vec<ClusterRef>>;

    /// Lists the services in one cluster. An empty result is valid.
    async fn list_services(&self, cluster: &ClusterRef) -> Result<Vec<ServiceRef>>;

    /// Lists the running tasks of one service. An empty result is valid.
    async fn list_tasks(
        &self,
        cluster: &ClusterRef,
        service: &ServiceRef,
    ) -> Result<Vec<TaskRef>>;

    /// Fetches full task records for a non-empty batch of task refs.
    ///
    /// Callers must not invoke this with an empty batch; the walker
    /// short-circuits beforehand.
    async fn describe_tasks(
        &self,
        cluster: &ClusterRef,
        refs: &[TaskRef],
    ) -> Result<Vec<TaskRecord>>;
}

/// Read-only view of the virtual networking API.
pub trait NetworkApi {
    /// Resolves a non-empty batch of interface ids to their private IPs.
    ///
    /// The result order is collaborator-defined and may differ from the
    /// request order. Callers must not invoke this with an empty batch; the
    /// walker short-circuits beforehand.
    async fn describe_network_interfaces(&self, ids: &[String]) -> Result<Vec<InterfaceAddress>>;
}
