//! # ecsmap-cli
//!
//! Command-line interface for the ECS topology inventory.
//!
//! Wires the AWS SDK clients (ECS and EC2) to the provider traits of
//! `ecsmap-core` and prints the resulting inventory as an indented text tree
//! or as a JSON snapshot. Credential and region resolution follow the
//! standard AWS environment (profiles, environment variables, IMDS), with
//! `--region`/`--profile` overrides.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod aws;
pub mod cli;
pub mod error;

pub use aws::{Ec2NetworkApi, EcsContainerApi};
pub use cli::{Cli, Format};
pub use error::CliError;
