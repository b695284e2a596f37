//! Plain-text report formatter.
//!
//! Same per-group layout as the HTML report, without markup or colour.
//! Bleed, long, and short lines are suffixed with `<-- check` when set.

use crate::finding::{GroupStats, LintReport};

/// Formats a [`LintReport`] as plain text.
pub fn format(report: &LintReport) -> String {
    let mut out = String::new();
    for (label, group) in report.labelled_groups() {
        render_group(&mut out, &label, group);
    }
    out
}

fn render_group(out: &mut String, label: &str, group: &GroupStats) {
    out.push_str(&format!("== {label} ==\n"));
    out.push_str(&format!("  Number of messages:    {}\n", group.num_messages));
    out.push_str(&format!("  Missing messages:      {}\n", group.missing_messages));
    out.push_str(&format!("  Contains colour:       {}\n", group.contains_colour));
    out.push_str(&flagged("Possible colour bleed: ", group.possible_colour_bleed));
    out.push_str(&flagged("Long messages:         ", group.long_messages));
    out.push_str(&flagged("Short messages:        ", group.short_messages));

    if group.issues.is_empty() {
        out.push_str("  Issues: none\n");
    } else {
        out.push_str("  Issues:\n");
        for issue in &group.issues {
            out.push_str(&format!("    - {issue}\n"));
        }
    }
    out.push('\n');
}

fn flagged(label: &str, value: bool) -> String {
    if value {
        format!("  {label}{value}  <-- check\n")
    } else {
        format!("  {label}{value}\n")
    }
}
