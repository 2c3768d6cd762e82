//! Comparison framework for RDS parameter groups.
//!
//! Provides the parameter set model, the four-way parameter diff, and text,
//! HTML and JSON reporting.

pub mod diff;
pub mod params;
pub mod render;
pub mod report;

pub use diff::{ComparisonReport, ValueMismatch, compare};
pub use params::{GroupKind, Parameter, ParameterGroup, ParameterSet};
pub use render::ReportFormat;
pub use report::{ReportError, ReportSummary, report_file_name, write_report};
