//! Report rendering.
//!
//! Every run writes a structured JSON report plus one human-readable report:
//!
//! | Artifact | Module | Use case |
//! |----------|--------|----------|
//! | `message_report.json` | [`json`] | Automation / diffing between runs |
//! | `message_report.html` | [`html`] | Browsing in a web browser |
//! | `message_report.txt`  | [`text`] | Reading in a terminal or editor |
//!
//! [`pretty`] renders the coloured console summary printed at the end of a run.

pub mod html;
pub mod json;
pub mod pretty;
pub mod text;

use crate::finding::LintReport;

/// Human-readable report written next to the JSON report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Static HTML page, one block per message group.
    #[default]
    Html,
    /// Plain text, one block per message group.
    Text,
}

impl ReportFormat {
    /// File extension of the rendered artifact.
    pub fn extension(self) -> &'static str {
        match self {
            ReportFormat::Html => "html",
            ReportFormat::Text => "txt",
        }
    }
}

/// Renders the human-readable report in the requested [`ReportFormat`].
///
/// # Examples
///
/// ```rust,no_run
/// use message_lint::output::{format_human, ReportFormat};
/// # use message_lint::finding::LintReport;
/// # fn example(report: &LintReport) {
/// let html = format_human(report, ReportFormat::Html);
/// std::fs::write("message_report.html", html).unwrap();
/// # }
/// ```
pub fn format_human(report: &LintReport, format: ReportFormat) -> String {
    match format {
        ReportFormat::Html => html::format(report),
        ReportFormat::Text => text::format(report),
    }
}
