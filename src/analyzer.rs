//! Message analysis.
//!
//! [`analyze`] walks groups, message records, and texts in input order,
//! folds every [`TextCheck`](crate::rules::TextCheck) into its group's
//! [`GroupStats`](crate::finding::GroupStats), and hands each record's issues
//! to an [`IssueSink`] as soon as the record has been checked.

use crate::finding::{GroupKey, Issue, LintReport};
use crate::loader::MessageGroup;
use crate::rules::RuleSet;
use colored::Colorize;
use std::path::Path;

/// Receives issues while the analysis is still running.
pub trait IssueSink {
    /// Called once for every message record that produced at least one issue.
    ///
    /// `label` is the group's unique display label, the same one the reports
    /// use as its key.
    fn record(&mut self, label: &str, issues: &[Issue]);
}

/// Prints each batch to stdout, preceded by a blank line.
pub struct ConsoleSink;

impl IssueSink for ConsoleSink {
    fn record(&mut self, label: &str, issues: &[Issue]) {
        println!();
        for issue in issues {
            println!("{}: {}", label.bold(), issue);
        }
    }
}

/// Discards everything.
pub struct NullSink;

impl IssueSink for NullSink {
    fn record(&mut self, _label: &str, _issues: &[Issue]) {}
}

/// Collects the lines [`ConsoleSink`] would print, uncoloured.
impl IssueSink for Vec<String> {
    fn record(&mut self, label: &str, issues: &[Issue]) {
        self.push(String::new());
        self.extend(issues.iter().map(|issue| format!("{label}: {issue}")));
    }
}

/// Checks every message text in `groups` and aggregates the results per group.
///
/// `num_messages` counts message records, not individual texts. A group with
/// no `messages` still gets an (empty) entry.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use message_lint::analyzer::{analyze, NullSink};
/// use message_lint::config::Config;
/// use message_lint::loader::parse_groups;
/// use message_lint::rules::RuleSet;
///
/// let doc = serde_json::json!([{"type": "SPELL", "name": "Fireball", "messages": [{"en": "Hit"}]}]);
/// let groups = parse_groups(doc).unwrap();
/// let rules = RuleSet::from_config(&Config::default());
/// let report = analyze(Path::new("messages.json"), &groups, &rules, &mut NullSink);
///
/// let fireball = report.group("SPELL", Some("Fireball")).unwrap();
/// assert_eq!(fireball.num_messages, 1);
/// assert!(fireball.short_messages);
/// ```
pub fn analyze(
    source: &Path,
    groups: &[MessageGroup],
    rules: &RuleSet,
    sink: &mut dyn IssueSink,
) -> LintReport {
    let mut report = LintReport::new(source);

    for group in groups {
        let stats = report.group_mut(GroupKey::new(&group.kind, group.name.as_deref()));

        for record in &group.messages {
            stats.num_messages += 1;
            let seen = stats.issues.len();

            for text in record.texts() {
                stats.absorb(rules.check(text));
            }

            if stats.issues.len() > seen {
                sink.record(&stats.label, &stats.issues[seen..]);
            }
        }
    }

    tracing::debug!(
        groups = report.groups().len(),
        messages = report.message_count(),
        issues = report.issue_count(),
        "analysis complete"
    );
    report
}
