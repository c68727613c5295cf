//! # ecsmap-core
//!
//! Topology enumeration for containerized workloads on AWS ECS.
//!
//! The crate walks the cluster → service → task hierarchy, resolves each
//! running task's network attachments to elastic network interfaces, and
//! resolves each interface to its private IP address. The result is either a
//! structured [`TopologySnapshot`] or a printable indented-tree [`Report`].
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//! │   Cluster    │───▶│   Service    │───▶│     Task     │───▶│  Interface   │
//! │    Lister    │    │    Lister    │    │   Resolver   │    │   Resolver   │
//! └──────────────┘    └──────────────┘    └──────────────┘    └──────────────┘
//!        │                   │                   │                   │
//!        └───────────────────┴───────┬───────────┴───────────────────┘
//!                                    ▼
//!                          ┌──────────────────┐
//!                          │  TopologyWalker  │──▶ snapshot / report
//!                          └──────────────────┘
//! ```
//!
//! The upstream APIs are abstracted behind the [`ContainerApi`] and
//! [`NetworkApi`] traits so every step is testable with stubs; the AWS SDK
//! adapters live in the `ecsmap-cli` crate.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![allow(async_fn_in_trait)]

pub mod error;
pub mod provider;
pub mod report;
pub mod types;
pub mod walker;

pub use error::{Result, TopologyError};
pub use provider::{ContainerApi, NetworkApi};
pub use report::Report;
pub use types::{
    AttachmentDetail, ClusterRef, ClusterTopology, InterfaceAddress, ServiceRef, ServiceTopology,
    TaskAttachment, TaskInfo, TaskRecord, TaskRef, TaskTopology, TopologySnapshot,
};
pub use walker::TopologyWalker;
