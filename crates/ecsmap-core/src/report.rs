//! Report rendering: the four-level indented inventory tree.

use std::fmt;

use crate::types::{TaskTopology, TopologySnapshot};

/// Marker emitted for a service with zero running tasks.
pub const NO_TASKS_MARKER: &str = "No tasks found.";

/// Marker emitted for a task that attaches no network interfaces.
pub const NO_INTERFACES_MARKER: &str = "No ENIs found (non-awsvpc network mode).";

/// A rendered inventory report: one printable line per entry, in traversal
/// order (cluster / service / task definition / addresses-or-marker).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report(Vec<String>);

impl Report {
    /// Renders a topology snapshot into report lines.
    #[must_use]
    pub fn render(snapshot: &TopologySnapshot) -> Self {
        let mut lines = Vec::new();

        for cluster in &snapshot.clusters {
            lines.push(format!("Cluster: {}", cluster.cluster));

            for service in &cluster.services {
                lines.push(format!("  Service: {}", service.service));

                if service.tasks.is_empty() {
                    lines.push(format!("    {NO_TASKS_MARKER}"));
                    continue;
                }

                for task in &service.tasks {
                    render_task(&mut lines, task);
                }
            }
        }

        Self(lines)
    }

    /// Returns the report lines.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.0
    }

    /// Consumes the report, returning its lines.
    #[must_use]
    pub fn into_lines(self) -> Vec<String> {
        self.0
    }
}

fn render_task(lines: &mut Vec<String>, task: &TaskTopology) {
    lines.push(format!("    Task Definition: {}", task.info.task_definition_arn));

    if task.info.network_interface_ids.is_empty() {
        lines.push(format!("      {NO_INTERFACES_MARKER}"));
    } else {
        let ips: Vec<&str> = task
            .addresses
            .iter()
            .map(|address| address.private_ip.as_str())
            .collect();
        lines.push(format!("      IP Addresses: {}", ips.join(", ")));
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.0 {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        ClusterRef, ClusterTopology, InterfaceAddress, ServiceRef, ServiceTopology, TaskInfo,
    };

    fn task(taskdef: &str, enis: &[&str], ips: &[&str]) -> TaskTopology {
        TaskTopology {
            info: TaskInfo {
                task_arn: format!("{taskdef}-instance"),
                task_definition_arn: taskdef.to_string(),
                network_interface_ids: enis.iter().map(ToString::to_string).collect(),
            },
            addresses: enis
                .iter()
                .zip(ips)
                .map(|(eni, ip)| InterfaceAddress {
                    interface_id: (*eni).to_string(),
                    private_ip: (*ip).to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn renders_full_tree_in_traversal_order() {
        let snapshot = TopologySnapshot {
            clusters: vec![ClusterTopology {
                cluster: ClusterRef::from("prod"),
                services: vec![ServiceTopology {
                    service: ServiceRef::from("web"),
                    tasks: vec![
                        task("webdef:3", &["eni-1", "eni-2"], &["10.0.0.5", "10.0.0.6"]),
                        task("hostdef:1", &[], &[]),
                    ],
                }],
            }],
        };

        let report = Report::render(&snapshot);
        assert_eq!(
            report.lines(),
            [
                "Cluster: prod",
                "  Service: web",
                "    Task Definition: webdef:3",
                "      IP Addresses: 10.0.0.5, 10.0.0.6",
                "    Task Definition: hostdef:1",
                "      No ENIs found (non-awsvpc network mode).",
            ]
        );
    }

    #[test]
    fn empty_service_gets_the_no_tasks_marker() {
        let snapshot = TopologySnapshot {
            clusters: vec![ClusterTopology {
                cluster: ClusterRef::from("prod"),
                services: vec![ServiceTopology {
                    service: ServiceRef::from("empty-svc"),
                    tasks: Vec::new(),
                }],
            }],
        };

        let report = Report::render(&snapshot);
        assert_eq!(
            report.lines(),
            ["Cluster: prod", "  Service: empty-svc", "    No tasks found."]
        );
    }

    #[test]
    fn cluster_with_no_services_renders_only_the_cluster_line() {
        let snapshot = TopologySnapshot {
            clusters: vec![ClusterTopology {
                cluster: ClusterRef::from("idle"),
                services: Vec::new(),
            }],
        };

        let report = Report::render(&snapshot);
        assert_eq!(report.lines(), ["Cluster: idle"]);
    }

    #[test]
    fn display_joins_lines_with_newlines() {
        let snapshot = TopologySnapshot {
            clusters: vec![ClusterTopology {
                cluster: ClusterRef::from("prod"),
                services: Vec::new(),
            }],
        };

        assert_eq!(Report::render(&snapshot).to_string(), "Cluster: prod\n");
    }
}
