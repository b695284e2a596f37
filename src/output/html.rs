//! HTML report formatter.
//!
//! Renders a static Bootstrap page with one card per message group. Message
//! text is arbitrary user content, so every dynamic value goes through
//! [`escape_html`] before it is interpolated.

use crate::finding::{GroupStats, LintReport};
use std::fmt::Display;

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html>
    <head>
        <meta charset="utf-8">
        <meta http-equiv="X-UA-Compatible" content="IE=edge">
        <title>Messages Report</title>
        <meta name="viewport" content="width=device-width, initial-scale=1">
        <link href="https://cdn.jsdelivr.net/npm/bootstrap@5.2.3/dist/css/bootstrap.min.css" rel="stylesheet" integrity="sha384-rbsA2VBKQhggwzxH7pPCaAqO46MgnOM80zW1RWuH61DGLwZJEdK2Kadq2F9CUG65" crossorigin="anonymous">
    </head>
    <body class="bg-dark text-light">
        <div class="container">
"#;

const PAGE_TAIL: &str = r#"        </div>
        <script src="https://cdn.jsdelivr.net/npm/bootstrap@5.2.3/dist/js/bootstrap.bundle.min.js" integrity="sha384-kenU1KFdBIe4zVF0s0G1M5b4hcpxyD9F7jL+jjXkk+Q2h455rYXK/7HAuoJl+0I4" crossorigin="anonymous"></script>
    </body>
</html>
"#;

/// Formats a [`LintReport`] as a standalone HTML page.
pub fn format(report: &LintReport) -> String {
    let mut out = String::from(PAGE_HEAD);
    for (label, group) in report.labelled_groups() {
        out.push_str(&render_group(&label, group));
    }
    out.push_str(PAGE_TAIL);
    out
}

fn render_group(label: &str, group: &GroupStats) -> String {
    let errors: String = group
        .issues
        .iter()
        .map(|issue| format!("<li>{}</li>", escape_html(&issue.message)))
        .collect();

    format!(
        r#"        <div class="border rounded border-light shadow my-2">
        <h2 class="display-5 text-center bg-light text-dark">{name}</h2>
        <ul>
        <li>{num}</li>
        <li>{missing}</li>
        <li>{colour}</li>
        <li>{bleed}</li>
        <li>{long}</li>
        <li>{short}</li>
        </ul>
        <div class="p-2 m-3 border rounded border-danger">
        <h6 class="display-6 text-warning">Issues</h6>
        <ul class="bg-warning bg-opacity-50 rounded text-dark">{errors}</ul>
        </div>
        </div>
"#,
        name = escape_html(label),
        num = stat("Number of messages", group.num_messages),
        missing = stat("Missing Messages", group.missing_messages),
        colour = stat("Contains Color?", group.contains_colour),
        bleed = flagged_stat("Possible Color Bleed?", group.possible_colour_bleed),
        long = flagged_stat("Long Message?", group.long_messages),
        short = flagged_stat("Short Message?", group.short_messages),
    )
}

fn stat(label: &str, value: impl Display) -> String {
    format!("<strong>{label}</strong> {value}")
}

fn flagged_stat(label: &str, value: bool) -> String {
    let class = if value { "text-danger" } else { "" };
    format!("<strong class=\"{class}\">{label}</strong> {value}")
}

/// Escapes the five characters that are significant in HTML text and
/// attribute values.
///
/// # Examples
///
/// ```
/// use message_lint::output::html::escape_html;
///
/// assert_eq!(escape_html("<b>\"Tom\" & 'Jerry'</b>"),
///            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;");
/// ```
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
