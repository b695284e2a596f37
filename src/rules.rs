//! Message rules.
//!
//! Every message text is checked by four independent rules; more than one may
//! fire for the same text.
//!
//! | ID | Sev | What it checks |
//! |----|-----|----------------|
//! | `message/missing` | Info | Text is empty or the `#` placeholder (flag only) |
//! | `message/too-short` | Warning | Non-missing text shorter than `min_length` |
//! | `message/colour-markup` | Info | Text contains the colour marker (flag only) |
//! | `message/colour-bleed` | Error | Colour marker left unterminated |
//! | `message/too-long` | Warning | Text longer than `max_length` |
//!
//! Lengths are counted in characters, not bytes.

use crate::config::{ColourRule, Config};
use crate::finding::{Issue, Severity};

pub const MISSING: &str = "message/missing";
pub const TOO_SHORT: &str = "message/too-short";
pub const COLOUR_MARKUP: &str = "message/colour-markup";
pub const COLOUR_BLEED: &str = "message/colour-bleed";
pub const TOO_LONG: &str = "message/too-long";

/// Text meaning "intentionally left blank".
pub const MISSING_SENTINEL: &str = "#";

/// The thresholds and colour convention every text is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleSet {
    pub min_length: usize,
    pub max_length: usize,
    pub colour: ColourRule,
}

/// What the rules found in one text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextCheck {
    pub missing: bool,
    pub short: bool,
    pub colour: bool,
    pub bleed: bool,
    pub long: bool,
    pub issues: Vec<Issue>,
}

impl RuleSet {
    pub fn from_config(config: &Config) -> Self {
        RuleSet {
            min_length: config.thresholds.min_length,
            max_length: config.thresholds.max_length,
            colour: config.colour.resolve(),
        }
    }

    /// Runs every rule against `text`.
    ///
    /// Issues are produced in a fixed order: short, colour bleed, long.
    ///
    /// # Examples
    ///
    /// ```
    /// use message_lint::config::Config;
    /// use message_lint::rules::RuleSet;
    ///
    /// let rules = RuleSet::from_config(&Config::default());
    /// let check = rules.check("Hit");
    /// assert!(check.short);
    /// assert_eq!(check.issues[0].message, "too short (min 20): Hit (3)");
    /// ```
    pub fn check(&self, text: &str) -> TextCheck {
        let mut check = TextCheck::default();
        let length = text.chars().count();

        if is_missing(text) {
            check.missing = true;
        } else if length < self.min_length {
            check.short = true;
            check.issues.push(Issue {
                rule_id: TOO_SHORT,
                severity: Severity::Warning,
                message: format!("too short (min {}): {} ({})", self.min_length, text, length),
            });
        }

        if text.contains(self.colour.marker) {
            check.colour = true;
            if has_colour_bleed(text, &self.colour) {
                check.bleed = true;
                check.issues.push(Issue {
                    rule_id: COLOUR_BLEED,
                    severity: Severity::Error,
                    message: format!("colour bleed: {text}"),
                });
            }
        }

        if length > self.max_length {
            check.long = true;
            check.issues.push(Issue {
                rule_id: TOO_LONG,
                severity: Severity::Warning,
                message: format!("too long (max {}): {} ({})", self.max_length, text, length),
            });
        }

        check
    }
}

/// Returns `true` for empty text and the `#` placeholder.
pub fn is_missing(text: &str) -> bool {
    text.is_empty() || text == MISSING_SENTINEL
}

/// Returns `true` if `text` does not close its colour markup.
///
/// The caller is responsible for checking that the marker is present; this
/// only inspects the tail of the string.
pub fn has_colour_bleed(text: &str, rule: &ColourRule) -> bool {
    if text.chars().count() <= rule.continuation_offset {
        return false;
    }
    let from_end = rule
        .continuation_offset
        .checked_sub(1)
        .and_then(|n| text.chars().rev().nth(n));
    let last = text.chars().next_back();
    from_end != Some(rule.continuation) && last != Some(rule.terminator)
}

/// Metadata for a single rule.
///
/// Used by the `list-rules` and `explain` CLI commands.
pub struct RuleInfo {
    pub id: &'static str,
    pub severity: Severity,
    /// Whether a violation adds an entry to the group's `errors` list, or only
    /// sets a flag.
    pub reports_issue: bool,
    pub message: &'static str,
    pub remediation: &'static str,
}

/// Every rule, in evaluation order.
pub fn all_rules() -> Vec<RuleInfo> {
    vec![
        RuleInfo {
            id: MISSING,
            severity: Severity::Info,
            reports_issue: false,
            message: "Message text is empty or the '#' placeholder",
            remediation: "Write the message, or leave '#' if it is intentionally blank",
        },
        RuleInfo {
            id: TOO_SHORT,
            severity: Severity::Warning,
            reports_issue: true,
            message: "Message is shorter than the recommended minimum length",
            remediation: "Expand the message or lower thresholds.min_length",
        },
        RuleInfo {
            id: COLOUR_MARKUP,
            severity: Severity::Info,
            reports_issue: false,
            message: "Message contains a colour-escape marker",
            remediation: "No action needed; this only marks groups that use colour",
        },
        RuleInfo {
            id: COLOUR_BLEED,
            severity: Severity::Error,
            reports_issue: true,
            message: "Colour markup is not terminated before the message ends",
            remediation: "End the message with the colour reset code so the colour does not bleed into following text",
        },
        RuleInfo {
            id: TOO_LONG,
            severity: Severity::Warning,
            reports_issue: true,
            message: "Message is longer than the recommended maximum length",
            remediation: "Shorten the message or raise thresholds.max_length",
        },
    ]
}
