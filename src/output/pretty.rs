//! Coloured console summary.
//!
//! Printed after the per-record issue lines: a header with the input file and
//! timestamp, how many groups tripped each flag, and a one-line result.

use crate::finding::{GroupStats, LintReport, LintStatus};
use colored::Colorize;

/// Formats the end-of-run summary for a [`LintReport`].
pub fn format(report: &LintReport) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "\n{}\n",
        format!("  Message Lint: {}  ", report.source.display())
            .bold()
            .on_blue()
            .white()
    ));
    out.push_str(&format!("  Timestamp: {}\n\n", report.linted_at));

    out.push_str(&format!("{}\n", "Groups".bold().underline()));
    out.push_str(&format!("  {:<24} {}\n", "scanned", report.groups().len()));
    out.push_str(&format!("  {:<24} {}\n", "messages", report.message_count()));
    out.push_str(&flag_line(
        "missing messages",
        groups_where(report, |g| g.missing_messages),
        false,
    ));
    out.push_str(&flag_line(
        "contain colour",
        groups_where(report, |g| g.contains_colour),
        false,
    ));
    out.push_str(&flag_line(
        "possible colour bleed",
        groups_where(report, |g| g.possible_colour_bleed),
        true,
    ));
    out.push_str(&flag_line(
        "long messages",
        groups_where(report, |g| g.long_messages),
        true,
    ));
    out.push_str(&flag_line(
        "short messages",
        groups_where(report, |g| g.short_messages),
        true,
    ));
    out.push('\n');

    let status_str = match report.status() {
        LintStatus::Passed => "PASSED".green().bold().to_string(),
        LintStatus::Warning => "WARNING".yellow().bold().to_string(),
        LintStatus::Failed => "FAILED".red().bold().to_string(),
    };

    let (errors, warnings, info) = report.count_by_severity();
    out.push_str(&format!(
        "Result: {status_str}  |  {} errors, {} warnings, {} info\n",
        errors, warnings, info,
    ));

    out
}

fn flag_line(label: &str, n: usize, highlight: bool) -> String {
    let value = if highlight && n > 0 {
        n.to_string().yellow().bold().to_string()
    } else {
        n.to_string()
    };
    format!("  {label:<24} {value}\n")
}

fn groups_where(report: &LintReport, pred: impl Fn(&GroupStats) -> bool) -> usize {
    report.groups().iter().filter(|g| pred(*g)).count()
}
