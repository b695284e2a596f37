use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::{Path, PathBuf};

/// Placeholder used when a message group has no `name`.
pub const NO_NAME: &str = "No Name";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// A single rule violation found in one message text.
///
/// Serializes as its bare `message` string so the JSON report keeps a flat
/// `errors: [string]` list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub rule_id: &'static str,
    pub severity: Severity,
    pub message: String,
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl serde::Serialize for Issue {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.message)
    }
}

/// Composite identity of a message group.
///
/// The display form `"{kind}) {name}"` is only a label; two keys that render
/// the same are still distinct groups.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupKey {
    /// The record's `type` field.
    pub kind: String,
    /// The record's `name` field, or [`NO_NAME`].
    pub name: String,
}

impl GroupKey {
    pub fn new(kind: &str, name: Option<&str>) -> Self {
        GroupKey {
            kind: kind.to_string(),
            name: name.unwrap_or(NO_NAME).to_string(),
        }
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}) {}", self.kind, self.name)
    }
}

/// Aggregated statistics for one message group.
///
/// Flags only ever flip from `false` to `true`, counters only grow, and
/// issues are only appended.
#[derive(Debug, Clone, serde::Serialize)]
pub struct GroupStats {
    #[serde(skip)]
    pub key: GroupKey,
    /// Unique display label, see [`LintReport::labelled_groups`].
    #[serde(skip)]
    pub label: String,
    pub num_messages: usize,
    pub missing_messages: bool,
    pub contains_colour: bool,
    pub possible_colour_bleed: bool,
    pub long_messages: bool,
    pub short_messages: bool,
    #[serde(rename = "errors")]
    pub issues: Vec<Issue>,
}

impl GroupStats {
    pub fn new(key: GroupKey) -> Self {
        GroupStats {
            label: key.to_string(),
            key,
            num_messages: 0,
            missing_messages: false,
            contains_colour: false,
            possible_colour_bleed: false,
            long_messages: false,
            short_messages: false,
            issues: Vec::new(),
        }
    }

    /// Folds the outcome of checking one text into the group.
    pub fn absorb(&mut self, check: crate::rules::TextCheck) {
        self.missing_messages |= check.missing;
        self.short_messages |= check.short;
        self.contains_colour |= check.colour;
        self.possible_colour_bleed |= check.bleed;
        self.long_messages |= check.long;
        self.issues.extend(check.issues);
    }
}

/// Result of linting one messages file.
///
/// Groups keep the order in which their key first appeared in the input.
#[derive(Debug)]
pub struct LintReport {
    pub source: PathBuf,
    pub linted_at: String,
    groups: Vec<GroupStats>,
    index: HashMap<GroupKey, usize>,
    labels: HashSet<String>,
}

impl LintReport {
    pub fn new(source: &Path) -> Self {
        LintReport {
            source: source.to_path_buf(),
            linted_at: chrono::Utc::now().to_rfc3339(),
            groups: Vec::new(),
            index: HashMap::new(),
            labels: HashSet::new(),
        }
    }

    /// Returns the statistics for `key`, creating an empty entry on first use.
    pub fn group_mut(&mut self, key: GroupKey) -> &mut GroupStats {
        let idx = match self.index.get(&key) {
            Some(&idx) => idx,
            None => {
                let idx = self.groups.len();
                let mut stats = GroupStats::new(key.clone());
                stats.label = self.unique_label(&key);
                self.index.insert(key, idx);
                self.groups.push(stats);
                idx
            }
        };
        &mut self.groups[idx]
    }

    pub fn group(&self, kind: &str, name: Option<&str>) -> Option<&GroupStats> {
        self.index
            .get(&GroupKey::new(kind, name))
            .map(|&idx| &self.groups[idx])
    }

    pub fn groups(&self) -> &[GroupStats] {
        &self.groups
    }

    /// Pairs every group with a unique display label.
    ///
    /// Normally the label is the key's display form. When two distinct keys
    /// render identically (e.g. `type = "A) B", name = "C"` and
    /// `type = "A", name = "B) C"`), later groups get a ` (2)`, ` (3)`, …
    /// suffix so report keys stay unique. Labels are fixed when the group is
    /// first seen, so the console and the reports agree.
    pub fn labelled_groups(&self) -> Vec<(String, &GroupStats)> {
        self.groups
            .iter()
            .map(|group| (group.label.clone(), group))
            .collect()
    }

    fn unique_label(&mut self, key: &GroupKey) -> String {
        let base = key.to_string();
        let mut label = base.clone();
        let mut n = 1;
        while !self.labels.insert(label.clone()) {
            n += 1;
            label = format!("{base} ({n})");
        }
        label
    }

    pub fn message_count(&self) -> usize {
        self.groups.iter().map(|g| g.num_messages).sum()
    }

    pub fn issue_count(&self) -> usize {
        self.groups.iter().map(|g| g.issues.len()).sum()
    }

    pub fn has_issues(&self) -> bool {
        self.groups.iter().any(|g| !g.issues.is_empty())
    }

    /// Count errors, warnings, and info issues in a single pass.
    ///
    /// Returns `(errors, warnings, info)`.
    pub fn count_by_severity(&self) -> (usize, usize, usize) {
        self.groups
            .iter()
            .flat_map(|g| g.issues.iter())
            .fold((0, 0, 0), |(e, w, i), issue| match issue.severity {
                Severity::Error => (e + 1, w, i),
                Severity::Warning => (e, w + 1, i),
                Severity::Info => (e, w, i + 1),
            })
    }

    /// Overall outcome: any error fails, any warning warns.
    pub fn status(&self) -> LintStatus {
        let (errors, warnings, _) = self.count_by_severity();
        if errors > 0 {
            LintStatus::Failed
        } else if warnings > 0 {
            LintStatus::Warning
        } else {
            LintStatus::Passed
        }
    }
}

/// Overall outcome of a lint run, derived from issue severities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LintStatus {
    Passed,
    Warning,
    Failed,
}
