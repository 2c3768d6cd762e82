//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use rds_compare::{GroupKind, ReportFormat};

use crate::config::Overrides;

/// Compare two RDS parameter groups
#[derive(Parser, Debug)]
#[command(name = "rds-params")]
#[command(author, version, about = "Compare two AWS RDS parameter groups and write a report", long_about = None)]
pub struct Args {
    /// First parameter group name (skips the interactive picker)
    #[arg(long, requires = "second")]
    pub first: Option<String>,

    /// Kind of the first group (instance or cluster), when the name is ambiguous
    #[arg(long, requires = "first")]
    pub first_kind: Option<GroupKind>,

    /// Second parameter group name
    #[arg(long, requires = "first")]
    pub second: Option<String>,

    /// Kind of the second group (instance or cluster)
    #[arg(long, requires = "second")]
    pub second_kind: Option<GroupKind>,

    /// Report format (text, html, json)
    #[arg(short = 'f', long)]
    pub format: Option<ReportFormat>,

    /// Directory the report is written to
    #[arg(short = 'o', long)]
    pub output_dir: Option<PathBuf>,

    /// AWS region
    #[arg(long)]
    pub region: Option<String>,

    /// AWS shared config profile
    #[arg(long)]
    pub profile: Option<String>,

    /// Config file (default: <config dir>/rds-params/config.json)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Read groups from a JSON fixture instead of the RDS API
    #[arg(long)]
    pub fixture: Option<PathBuf>,

    /// List the available parameter groups and exit
    #[arg(long)]
    pub list: bool,

    /// Debug logging
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

impl Args {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            region: self.region.clone(),
            profile: self.profile.clone(),
            format: self.format,
            output_dir: self.output_dir.clone(),
        }
    }

    /// Both group names, when given on the command line.
    pub fn named_groups(&self) -> Option<((&str, Option<GroupKind>), (&str, Option<GroupKind>))> {
        match (&self.first, &self.second) {
            (Some(a), Some(b)) => Some(((a.as_str(), self.first_kind), (b.as_str(), self.second_kind))),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named_groups() {
        let args = Args::try_parse_from([
            "rds-params",
            "--first",
            "mysql-a",
            "--second",
            "shared",
            "--second-kind",
            "cluster",
            "-f",
            "json",
        ])
        .unwrap();

        let ((a, a_kind), (b, b_kind)) = args.named_groups().unwrap();
        assert_eq!((a, a_kind), ("mysql-a", None));
        assert_eq!((b, b_kind), ("shared", Some(GroupKind::Cluster)));
        assert_eq!(args.overrides().format, Some(ReportFormat::Json));
    }

    #[test]
    fn test_first_requires_second() {
        assert!(Args::try_parse_from(["rds-params", "--first", "a"]).is_err());
        assert!(Args::try_parse_from(["rds-params", "--second", "b"]).is_err());
    }

    #[test]
    fn test_rejects_unknown_kind_and_format() {
        assert!(
            Args::try_parse_from(["rds-params", "--first", "a", "--second", "b", "--first-kind", "aurora"])
                .is_err()
        );
        assert!(Args::try_parse_from(["rds-params", "--format", "pdf"]).is_err());
    }

    #[test]
    fn test_no_names_means_interactive() {
        let args = Args::try_parse_from(["rds-params", "--list", "-v"]).unwrap();
        assert!(args.named_groups().is_none());
        assert!(args.list);
        assert!(args.verbose);
    }
}
