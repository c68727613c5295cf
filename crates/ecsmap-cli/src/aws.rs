//! AWS SDK adapters for the core provider traits.
//!
//! Each listing call drains its paginator fully before returning, so
//! pagination tokens never escape this module. Every SDK failure maps to the
//! single `UpstreamUnavailable` error kind with the operation name and the
//! identifiers involved.

use aws_sdk_ec2::types::NetworkInterface;
use aws_sdk_ecs::types::{DesiredStatus, Task};
use tracing::trace;

use ecsmap_core::{
    AttachmentDetail, ClusterRef, ContainerApi, InterfaceAddress, NetworkApi, Result, ServiceRef,
    TaskAttachment, TaskRecord, TaskRef, TopologyError,
};

/// ECS caps `DescribeTasks` batches at 100 task ARNs.
const DESCRIBE_TASKS_BATCH: usize = 100;

/// Container orchestration provider backed by the ECS API.
#[derive(Debug, Clone)]
pub struct EcsContainerApi {
    client: aws_sdk_ecs::Client,
}

impl EcsContainerApi {
    /// Wraps an ECS client.
    #[must_use]
    pub fn new(client: aws_sdk_ecs::Client) -> Self {
        Self { client }
    }

    /// Builds the adapter from a shared AWS configuration.
    #[must_use]
    pub fn from_config(config: &aws_config::SdkConfig) -> Self {
        Self::new(aws_sdk_ecs::Client::new(config))
    }
}

impl ContainerApi for EcsContainerApi {
    async fn list_clusters(&self) -> Result<Vec<ClusterRef>> {
        let mut pages = self.client.list_clusters().into_paginator().send();
        let mut clusters = Vec::new();
        while let Some(page) = pages.next().await {
            let page = page.map_err(|err| {
                TopologyError::upstream(
                    "list_clusters",
                    "account",
                    aws_sdk_ecs::error::DisplayErrorContext(&err),
                )
            })?;
            clusters.extend(page.cluster_arns().iter().cloned().map(ClusterRef::from));
        }
        trace!(count = clusters.len(), "drained cluster pages");
        Ok(clusters)
    }

    async fn list_services(&self, cluster: &ClusterRef) -> Result<Vec<ServiceRef>> {
        let mut pages = self
            .client
            .list_services()
            .cluster(cluster.as_str())
            .into_paginator()
            .send();
        let mut services = Vec::new();
        while let Some(page) = pages.next().await {
            let page = page.map_err(|err| {
                TopologyError::upstream(
                    "list_services",
                    format!("cluster={cluster}"),
                    aws_sdk_ecs::error::DisplayErrorContext(&err),
                )
            })?;
            services.extend(page.service_arns().iter().cloned().map(ServiceRef::from));
        }
        Ok(services)
    }

    async fn list_tasks(
        &self,
        cluster: &ClusterRef,
        service: &ServiceRef,
    ) -> Result<Vec<TaskRef>> {
        let mut pages = self
            .client
            .list_tasks()
            .cluster(cluster.as_str())
            .service_name(service.as_str())
            .desired_status(DesiredStatus::Running)
            .into_paginator()
            .send();
        let mut tasks = Vec::new();
        while let Some(page) = pages.next().await {
            let page = page.map_err(|err| {
                TopologyError::upstream(
                    "list_tasks",
                    format!("cluster={cluster}, service={service}"),
                    aws_sdk_ecs::error::DisplayErrorContext(&err),
                )
            })?;
            tasks.extend(page.task_arns().iter().cloned().map(TaskRef::from));
        }
        Ok(tasks)
    }

    async fn describe_tasks(
        &self,
        cluster: &ClusterRef,
        refs: &[TaskRef],
    ) -> Result<Vec<TaskRecord>> {
        let mut records = Vec::with_capacity(refs.len());
        for batch in refs.chunks(DESCRIBE_TASKS_BATCH) {
            let output = self
                .client
                .describe_tasks()
                .cluster(cluster.as_str())
                .set_tasks(Some(
                    batch.iter().map(|r| r.as_str().to_string()).collect(),
                ))
                .send()
                .await
                .map_err(|err| {
                    TopologyError::upstream(
                        "describe_tasks",
                        format!("cluster={cluster}, tasks={}", batch.len()),
                        aws_sdk_ecs::error::DisplayErrorContext(&err),
                    )
                })?;
            records.extend(output.tasks().iter().map(task_record_from));
        }
        Ok(records)
    }
}

/// Virtual networking provider backed by the EC2 API.
#[derive(Debug, Clone)]
pub struct Ec2NetworkApi {
    client: aws_sdk_ec2::Client,
}

impl Ec2NetworkApi {
    /// Wraps an EC2 client.
    #[must_use]
    pub fn new(client: aws_sdk_ec2::Client) -> Self {
        Self { client }
    }

    /// Builds the adapter from a shared AWS configuration.
    #[must_use]
    pub fn from_config(config: &aws_config::SdkConfig) -> Self {
        Self::new(aws_sdk_ec2::Client::new(config))
    }
}

impl NetworkApi for Ec2NetworkApi {
    async fn describe_network_interfaces(&self, ids: &[String]) -> Result<Vec<InterfaceAddress>> {
        let output = self
            .client
            .describe_network_interfaces()
            .set_network_interface_ids(Some(ids.to_vec()))
            .send()
            .await
            .map_err(|err| {
                TopologyError::upstream(
                    "describe_network_interfaces",
                    format!("ids={}", ids.join(",")),
                    aws_sdk_ec2::error::DisplayErrorContext(&err),
                )
            })?;
        Ok(output
            .network_interfaces()
            .iter()
            .map(interface_address_from)
            .collect())
    }
}

/// Maps an SDK task into the core record shape.
///
/// Every SDK field is optional; missing ARNs become empty strings so the
/// record is still reported rather than dropped.
fn task_record_from(task: &Task) -> TaskRecord {
    TaskRecord {
        task_arn: task.task_arn().unwrap_or_default().to_string(),
        task_definition_arn: task.task_definition_arn().unwrap_or_default().to_string(),
        attachments: task
            .attachments()
            .iter()
            .map(|attachment| TaskAttachment {
                details: attachment
                    .details()
                    .iter()
                    .map(|kv| {
                        AttachmentDetail::new(
                            kv.name().unwrap_or_default(),
                            kv.value().unwrap_or_default(),
                        )
                    })
                    .collect(),
            })
            .collect(),
    }
}

fn interface_address_from(eni: &NetworkInterface) -> InterfaceAddress {
    InterfaceAddress {
        interface_id: eni.network_interface_id().unwrap_or_default().to_string(),
        private_ip: eni.private_ip_address().unwrap_or_default().to_string(),
    }
}
