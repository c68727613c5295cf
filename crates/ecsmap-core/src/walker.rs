//! The topology walker: four resolver steps composed in a fixed pipeline.
//!
//! Cluster Lister → Service Lister → Task Resolver → Interface Resolver, all
//! sequential and read-only. Each step's output is consumed once by the next
//! step; the first upstream failure aborts the whole walk.

use tracing::{debug, info};

use crate::error::Result;
use crate::provider::{ContainerApi, NetworkApi};
use crate::report::Report;
use crate::types::{
    ClusterRef, ClusterTopology, InterfaceAddress, ServiceRef, ServiceTopology, TaskInfo,
    TaskTopology, TopologySnapshot,
};

/// Walks the cluster → service → task → interface hierarchy.
///
/// Both upstream collaborators are injected at construction, so the walker
/// carries no ambient state and is testable with stubs.
#[derive(Debug)]
pub struct TopologyWalker<C, N> {
    containers: C,
    network: N,
}

impl<C, N> TopologyWalker<C, N>
where
    C: ContainerApi,
    N: NetworkApi,
{
    /// Creates a walker over the given collaborators.
    pub fn new(containers: C, network: N) -> Self {
        Self { containers, network }
    }

    /// Enumerates every cluster in the account, in listing order.
    pub async fn clusters(&self) -> Result<Vec<ClusterRef>> {
        let clusters = self.containers.list_clusters().await?;
        debug!(count = clusters.len(), "listed clusters");
        Ok(clusters)
    }

    /// Enumerates the services of one cluster, in listing order.
    pub async fn services(&self, cluster: &ClusterRef) -> Result<Vec<ServiceRef>> {
        let services = self.containers.list_services(cluster).await?;
        debug!(cluster = %cluster, count = services.len(), "listed services");
        Ok(services)
    }

    /// Enumerates the running tasks of one service and derives a [`TaskInfo`]
    /// for each.
    ///
    /// A service with zero running tasks short-circuits to an empty result
    /// without issuing the describe batch. Tasks without qualifying network
    /// attachments are retained with an empty interface list, never dropped.
    pub async fn task_infos(
        &self,
        cluster: &ClusterRef,
        service: &ServiceRef,
    ) -> Result<Vec<TaskInfo>> {
        let refs = self.containers.list_tasks(cluster, service).await?;
        if refs.is_empty() {
            debug!(cluster = %cluster, service = %service, "no running tasks");
            return Ok(Vec::new());
        }

        let records = self.containers.describe_tasks(cluster, &refs).await?;
        debug!(
            cluster = %cluster,
            service = %service,
            tasks = records.len(),
            "described tasks"
        );
        Ok(records.iter().map(TaskInfo::from).collect())
    }

    /// Resolves a batch of interface ids to their private addresses.
    ///
    /// An empty id set returns an empty result without contacting the
    /// collaborator. Result order is collaborator-defined; correlate by
    /// value, not position.
    pub async fn resolve_addresses(&self, ids: &[String]) -> Result<Vec<InterfaceAddress>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        self.network.describe_network_interfaces(ids).await
    }

    /// Collects the full point-in-time topology, in traversal order.
    ///
    /// The traversal is strictly sequential: clusters in listing order, then
    /// each cluster's services, then each service's tasks, then each task's
    /// interface resolution. The first upstream failure aborts the walk with
    /// no partial result.
    pub async fn snapshot(&self) -> Result<TopologySnapshot> {
        let mut snapshot = TopologySnapshot::default();

        for cluster in self.clusters().await? {
            let mut services = Vec::new();
            for service in self.services(&cluster).await? {
                let mut tasks = Vec::new();
                for info in self.task_infos(&cluster, &service).await? {
                    let addresses = self.resolve_addresses(&info.network_interface_ids).await?;
                    tasks.push(TaskTopology { info, addresses });
                }
                services.push(ServiceTopology { service, tasks });
            }
            snapshot.clusters.push(ClusterTopology { cluster, services });
        }

        info!(clusters = snapshot.clusters.len(), "topology walk complete");
        Ok(snapshot)
    }

    /// Collects the topology and renders it as printable report lines.
    pub async fn produce_report(&self) -> Result<Report> {
        Ok(Report::render(&self.snapshot().await?))
    }
}
