//! Core types for the topology data model.
//!
//! Everything here is a transient, request-scoped value record: each is
//! produced once by a resolver step and consumed once by the next step or by
//! the presentation layer. Nothing is persisted or mutated after creation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Attachment detail name that carries an elastic network interface id.
pub const NETWORK_INTERFACE_ID: &str = "networkInterfaceId";

/// Opaque identifier for a cluster.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClusterRef(String);

impl ClusterRef {
    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ClusterRef {
    fn from(arn: String) -> Self {
        Self(arn)
    }
}

impl From<&str> for ClusterRef {
    fn from(arn: &str) -> Self {
        Self(arn.to_string())
    }
}

impl fmt::Display for ClusterRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque identifier for a service, scoped to one cluster.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceRef(String);

impl ServiceRef {
    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ServiceRef {
    fn from(arn: String) -> Self {
        Self(arn)
    }
}

impl From<&str> for ServiceRef {
    fn from(arn: &str) -> Self {
        Self(arn.to_string())
    }
}

impl fmt::Display for ServiceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque identifier for a running task, scoped to one (cluster, service).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskRef(String);

impl TaskRef {
    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for TaskRef {
    fn from(arn: String) -> Self {
        Self(arn)
    }
}

impl From<&str> for TaskRef {
    fn from(arn: &str) -> Self {
        Self(arn.to_string())
    }
}

impl fmt::Display for TaskRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One name/value entry within a task attachment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentDetail {
    /// Detail name (e.g. `networkInterfaceId`, `subnetId`).
    pub name: String,
    /// Detail value.
    pub value: String,
}

impl AttachmentDetail {
    /// Creates a detail entry.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A resource attachment on a task record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskAttachment {
    /// Ordered detail entries for this attachment.
    pub details: Vec<AttachmentDetail>,
}

/// Raw task record as returned by the container orchestration API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    /// ARN of the task instance.
    pub task_arn: String,
    /// ARN of the task definition the task runs.
    pub task_definition_arn: String,
    /// Ordered resource attachments.
    pub attachments: Vec<TaskAttachment>,
}

impl TaskRecord {
    /// Extracts the elastic network interface ids attached to this task.
    ///
    /// Walks every attachment and every detail entry within it, in order,
    /// keeping the values of entries named [`NETWORK_INTERFACE_ID`]. The
    /// result preserves encounter order and is not deduplicated. An empty
    /// result means the task uses a network mode that attaches no interfaces
    /// (non-awsvpc) — a valid state, not an error.
    #[must_use]
    pub fn network_interface_ids(&self) -> Vec<String> {
        self.attachments
            .iter()
            .flat_map(|attachment| &attachment.details)
            .filter(|detail| detail.name == NETWORK_INTERFACE_ID)
            .map(|detail| detail.value.clone())
            .collect()
    }
}

/// Derived task view: identity plus attached interface ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskInfo {
    /// ARN of the task instance.
    pub task_arn: String,
    /// ARN of the task definition the task runs.
    pub task_definition_arn: String,
    /// Attached interface ids, in attachment order. Empty for non-awsvpc.
    pub network_interface_ids: Vec<String>,
}

impl From<&TaskRecord> for TaskInfo {
    fn from(record: &TaskRecord) -> Self {
        Self {
            task_arn: record.task_arn.clone(),
            task_definition_arn: record.task_definition_arn.clone(),
            network_interface_ids: record.network_interface_ids(),
        }
    }
}

/// A resolved (interface id, private IP) pair.
///
/// The resolver may return these in any order, so consumers must correlate
/// by `interface_id`, never by position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceAddress {
    /// Elastic network interface id.
    pub interface_id: String,
    /// Private IP address assigned to the interface.
    pub private_ip: String,
}

/// One task with its resolved addresses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskTopology {
    /// Task identity and interface ids.
    #[serde(flatten)]
    pub info: TaskInfo,
    /// Resolved addresses, in resolver order. Empty when the task attaches
    /// no interfaces.
    pub addresses: Vec<InterfaceAddress>,
}

/// One service with its running tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceTopology {
    /// Service identifier.
    pub service: ServiceRef,
    /// Running tasks. Empty when the service has no tasks.
    pub tasks: Vec<TaskTopology>,
}

/// One cluster with its services.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterTopology {
    /// Cluster identifier.
    pub cluster: ClusterRef,
    /// Services in the cluster, in listing order.
    pub services: Vec<ServiceTopology>,
}

/// Point-in-time inventory of the whole account/region.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopologySnapshot {
    /// Clusters, in listing order.
    pub clusters: Vec<ClusterTopology>,
}
