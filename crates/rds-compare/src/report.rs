//! Report summaries and report file output.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::diff::ComparisonReport;
use crate::render::{ReportFormat, render};

/// Report output errors
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error writing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Entry counts of a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub matching: usize,
    pub non_matching: usize,
    pub exclusive_to_first: usize,
    pub exclusive_to_second: usize,
}

impl ReportSummary {
    pub fn of(report: &ComparisonReport) -> Self {
        Self {
            matching: report.matching.len(),
            non_matching: report.non_matching.len(),
            exclusive_to_first: report.exclusive_to_first.len(),
            exclusive_to_second: report.exclusive_to_second.len(),
        }
    }

    /// Distinct parameter names across both groups.
    pub fn total(&self) -> usize {
        self.matching + self.non_matching + self.exclusive_to_first + self.exclusive_to_second
    }

    /// True if no parameter differs.
    pub fn identical(&self) -> bool {
        self.non_matching == 0 && self.exclusive_to_first == 0 && self.exclusive_to_second == 0
    }
}

impl core::fmt::Display for ReportSummary {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} parameters: {} matching, {} non-matching, {} only in first, {} only in second",
            self.total(),
            self.matching,
            self.non_matching,
            self.exclusive_to_first,
            self.exclusive_to_second
        )
    }
}

/// File name of the report comparing the two groups of `report`.
pub fn report_file_name(report: &ComparisonReport, format: ReportFormat) -> String {
    format!(
        "rds-parameter-comparison-{}-vs-{}.{}",
        report.first.name,
        report.second.name,
        format.extension()
    )
}

/// Render `report` and write it into `dir`, creating the directory if
/// needed. Returns the path of the written file.
pub fn write_report(
    report: &ComparisonReport,
    format: ReportFormat,
    dir: impl AsRef<Path>,
    generated_at: DateTime<Utc>,
) -> Result<PathBuf, ReportError> {
    let dir = dir.as_ref();
    let content = render(report, format, generated_at)?;

    std::fs::create_dir_all(dir).map_err(|source| ReportError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = dir.join(report_file_name(report, format));
    std::fs::write(&path, content).map_err(|source| ReportError::Io {
        path: path.clone(),
        source,
    })?;

    tracing::info!(path = %path.display(), %format, "wrote comparison report");
    Ok(path)
}
