//! Command-line argument parsing with clap.

use clap::{Parser, ValueEnum};

/// ecsmap - ECS cluster/service/task/ENI inventory.
///
/// Walks every cluster the account can see, lists each cluster's services
/// and running tasks, and resolves each task's network interfaces to their
/// private IP addresses.
#[derive(Parser, Debug, Clone)]
#[command(name = "ecsmap")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// AWS region to query (defaults to the environment's region).
    #[arg(short, long, env = "AWS_REGION")]
    pub region: Option<String>,

    /// AWS credentials profile to use.
    #[arg(short, long, env = "AWS_PROFILE")]
    pub profile: Option<String>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Returns the tracing filter directive for the selected verbosity.
    #[must_use]
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info,ecsmap_core=debug,ecsmap_cli=debug",
            _ => "debug,ecsmap_core=trace,ecsmap_cli=trace",
        }
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum Format {
    /// Human-readable indented tree.
    #[default]
    Text,
    /// JSON snapshot for scripting.
    Json,
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test]
    fn defaults_to_text_format_and_quiet_logs() {
        let cli = Cli::try_parse_from(["ecsmap"]).ok();
        let cli = match cli {
            Some(cli) => cli,
            None => panic!("default invocation must parse"),
        };
        assert_eq!(cli.format, Format::Text);
        assert_eq!(cli.log_filter(), "warn");
        assert!(cli.region.is_none());
    }

    #[test]
    fn parses_region_profile_and_json_format() {
        let cli = Cli::try_parse_from([
            "ecsmap",
            "--region",
            "eu-west-1",
            "--profile",
            "ops",
            "--format",
            "json",
        ])
        .ok();
        let cli = match cli {
            Some(cli) => cli,
            None => panic!("flags must parse"),
        };
        assert_eq!(cli.region.as_deref(), Some("eu-west-1"));
        assert_eq!(cli.profile.as_deref(), Some("ops"));
        assert_eq!(cli.format, Format::Json);
    }

    #[test_case(0, "warn"; "quiet by default")]
    #[test_case(1, "info,ecsmap_core=debug,ecsmap_cli=debug"; "one v is debug")]
    #[test_case(2, "debug,ecsmap_core=trace,ecsmap_cli=trace"; "two v is trace")]
    #[test_case(5, "debug,ecsmap_core=trace,ecsmap_cli=trace"; "extra v saturates")]
    fn verbosity_raises_the_filter(verbose: u8, expected: &str) {
        let cli = Cli {
            region: None,
            profile: None,
            format: Format::Text,
            verbose,
        };
        assert_eq!(cli.log_filter(), expected);
    }
}
