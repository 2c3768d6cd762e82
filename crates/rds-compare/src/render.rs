//! Report rendering: plain text, HTML tables, and JSON.
//!
//! Unset values are shown as an empty cell or an empty string. The
//! comparison itself keeps them distinct from empty strings.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::diff::ComparisonReport;
use crate::params::Parameter;

const TEXT_RULE: &str = "===============================================================";

/// Output format of a comparison report.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[strum(to_string = "text", serialize = "txt")]
    #[serde(alias = "txt")]
    Text,
    #[default]
    Html,
    Json,
}

impl ReportFormat {
    /// File extension used for reports in this format.
    pub fn extension(self) -> &'static str {
        match self {
            ReportFormat::Text => "txt",
            ReportFormat::Html => "html",
            ReportFormat::Json => "json",
        }
    }
}

/// Render `report` in the requested format.
pub fn render(
    report: &ComparisonReport,
    format: ReportFormat,
    generated_at: DateTime<Utc>,
) -> Result<String, serde_json::Error> {
    match format {
        ReportFormat::Text => Ok(render_text(report, generated_at)),
        ReportFormat::Html => Ok(render_html(report, generated_at)),
        ReportFormat::Json => render_json(report),
    }
}

fn display_value(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

fn timestamp(generated_at: DateTime<Utc>) -> String {
    generated_at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Plain text report with four numbered sections.
pub fn render_text(report: &ComparisonReport, generated_at: DateTime<Utc>) -> String {
    let first = &report.first.name;
    let second = &report.second.name;
    let mut out = String::new();

    out.push_str(&format!(
        "Comparison between RDS Parameter Groups: {} and {}\n",
        first, second
    ));
    out.push_str(TEXT_RULE);
    out.push('\n');
    out.push_str(&format!("Generated: {}\n", timestamp(generated_at)));

    text_section(&mut out, "1. Matching Parameters:", &report.matching);

    out.push_str("\n2. Non-Matching Parameters:\n");
    if report.non_matching.is_empty() {
        out.push_str("(none)\n");
    }
    for m in &report.non_matching {
        out.push_str(&format!(
            "{}: {}: {}, {}: {}\n",
            m.name,
            first,
            display_value(&m.first),
            second,
            display_value(&m.second)
        ));
    }

    text_section(
        &mut out,
        &format!("3. Exclusive to {}:", first),
        &report.exclusive_to_first,
    );
    text_section(
        &mut out,
        &format!("4. Exclusive to {}:", second),
        &report.exclusive_to_second,
    );

    out
}

fn text_section(out: &mut String, title: &str, params: &[Parameter]) {
    out.push('\n');
    out.push_str(title);
    out.push('\n');
    if params.is_empty() {
        out.push_str("(none)\n");
    }
    for p in params {
        out.push_str(&format!("{}: {}\n", p.name, display_value(&p.value)));
    }
}

/// Standalone HTML document with one table per section.
pub fn render_html(report: &ComparisonReport, generated_at: DateTime<Utc>) -> String {
    let first = escape_html(&report.first.name);
    let second = escape_html(&report.second.name);

    let matching = html_table(
        "Matching Parameters",
        &["name", "value"],
        report
            .matching
            .iter()
            .map(|p| vec![p.name.as_str(), display_value(&p.value)]),
    );
    let non_matching = html_table(
        "Non-Matching Parameters",
        &["name", report.first.name.as_str(), report.second.name.as_str()],
        report.non_matching.iter().map(|m| {
            vec![
                m.name.as_str(),
                display_value(&m.first),
                display_value(&m.second),
            ]
        }),
    );
    let only_first = html_table(
        &format!("Exclusive to {}", report.first.name),
        &["name", "value"],
        report
            .exclusive_to_first
            .iter()
            .map(|p| vec![p.name.as_str(), display_value(&p.value)]),
    );
    let only_second = html_table(
        &format!("Exclusive to {}", report.second.name),
        &["name", "value"],
        report
            .exclusive_to_second
            .iter()
            .map(|p| vec![p.name.as_str(), display_value(&p.value)]),
    );

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>RDS Parameter Group Comparison</title>
  <style>
    body {{ font-family: Arial, sans-serif; }}
    table {{ width: 100%; border-collapse: collapse; }}
    th, td {{ padding: 8px; text-align: left; }}
    th {{ background-color: #f2f2f2; }}
  </style>
</head>
<body>
  <h1>Comparison between RDS Parameter Groups: {first} and {second}</h1>
  <p>Generated: {generated}</p>
{matching}{non_matching}{only_first}{only_second}</body>
</html>
"#,
        generated = timestamp(generated_at),
    )
}

fn html_table<'a, I>(title: &str, columns: &[&str], rows: I) -> String
where
    I: Iterator<Item = Vec<&'a str>>,
{
    let mut out = String::new();
    out.push_str(&format!("  <h2>{}</h2>\n", escape_html(title)));
    out.push_str("  <table border=\"1\" cellpadding=\"5\" cellspacing=\"0\">\n");
    out.push_str("    <thead>\n      <tr>");
    for col in columns {
        out.push_str(&format!("<th>{}</th>", escape_html(col)));
    }
    out.push_str("</tr>\n    </thead>\n    <tbody>\n");
    for row in rows {
        out.push_str("      <tr>");
        for cell in row {
            out.push_str(&format!("<td>{}</td>", escape_html(cell)));
        }
        out.push_str("</tr>\n");
    }
    out.push_str("    </tbody>\n  </table>\n");
    out
}

/// Pretty-printed JSON form of the report.
pub fn render_json(report: &ComparisonReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

/// Escape text for inclusion in HTML element content or attribute values.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
