use std::path::Path;

use message_lint::analyzer::{analyze, NullSink};
use message_lint::config::{ColourConvention, Config};
use message_lint::finding::LintReport;
use message_lint::loader::{load_messages, parse_groups};
use message_lint::output::{self, ReportFormat};
use message_lint::rules::RuleSet;
use serde_json::json;

fn rules() -> RuleSet {
    let mut config = Config::default();
    config.colour.convention = Some(ColourConvention::Tab);
    RuleSet::from_config(&config)
}

fn get_fixture_report() -> LintReport {
    let path = Path::new("tests/fixtures/messages.json");
    let groups = load_messages(path).unwrap();
    analyze(path, &groups, &rules(), &mut NullSink)
}

fn report_from(doc: serde_json::Value) -> LintReport {
    let groups = parse_groups(doc).unwrap();
    analyze(Path::new("messages.json"), &groups, &rules(), &mut NullSink)
}

// ---------------------------------------------------------------------------
// JSON
// ---------------------------------------------------------------------------

#[test]
fn json_output_has_expected_shape() {
    let json = output::json::format(&get_fixture_report());
    let parsed: serde_json::Value = serde_json::from_str(&json).expect("JSON should be valid");

    let fireball = &parsed["spells"]["SPELL) Fireball"];
    assert_eq!(fireball["num_messages"], 2);
    assert_eq!(fireball["missing_messages"], false);
    assert_eq!(fireball["contains_colour"], false);
    assert_eq!(fireball["possible_colour_bleed"], false);
    assert_eq!(fireball["long_messages"], false);
    assert_eq!(fireball["short_messages"], true);
    assert_eq!(fireball["errors"], json!(["too short (min 20): Hit (3)"]));

    let social = &parsed["spells"]["SOCIAL) No Name"];
    assert_eq!(social["errors"], json!([]));
}

#[test]
fn json_field_and_group_order_is_stable() {
    let json = output::json::format(&get_fixture_report());
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

    let groups: Vec<_> = parsed["spells"].as_object().unwrap().keys().cloned().collect();
    assert_eq!(
        groups,
        vec!["SPELL) Fireball", "SPELL) Ice Storm", "SOCIAL) No Name", "SKILL) Bash"]
    );

    let fields: Vec<_> = parsed["spells"]["SKILL) Bash"]
        .as_object()
        .unwrap()
        .keys()
        .cloned()
        .collect();
    assert_eq!(
        fields,
        vec![
            "num_messages",
            "missing_messages",
            "contains_colour",
            "possible_colour_bleed",
            "long_messages",
            "short_messages",
            "errors"
        ]
    );
}

#[test]
fn json_uses_four_space_indent() {
    let json = output::json::format(&report_from(json!([{ "type": "SOCIAL" }])));
    assert!(json.starts_with("{\n    \"spells\": {\n        \"SOCIAL) No Name\": {\n"));
    assert!(!json.contains("timestamp"));
}

#[test]
fn colliding_labels_stay_separate() {
    let report = report_from(json!([
        { "type": "A) B", "name": "C", "messages": [ { "en": "Hit" } ] },
        { "type": "A", "name": "B) C", "messages": [ { "en": "Miss" } ] }
    ]));
    assert_eq!(report.groups().len(), 2);

    let parsed: serde_json::Value =
        serde_json::from_str(&output::json::format(&report)).unwrap();
    let spells = parsed["spells"].as_object().unwrap();
    assert_eq!(spells.len(), 2);
    assert_eq!(spells["A) B) C"]["errors"], json!(["too short (min 20): Hit (3)"]));
    assert_eq!(spells["A) B) C (2)"]["errors"], json!(["too short (min 20): Miss (4)"]));
}

// ---------------------------------------------------------------------------
// HTML
// ---------------------------------------------------------------------------

#[test]
fn html_contains_a_block_per_group() {
    let html = output::format_human(&get_fixture_report(), ReportFormat::Html);
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.trim_end().ends_with("</html>"));
    assert_eq!(html.matches("<h2 ").count(), 4);
    assert!(html.contains("SPELL) Fireball"));
    assert!(html.contains("<li>too short (min 20): Hit (3)</li>"));
}

#[test]
fn html_flags_true_statistics() {
    let html = output::format_human(&get_fixture_report(), ReportFormat::Html);
    assert!(html.contains("<strong class=\"text-danger\">Short Message?</strong> true"));
    assert!(html.contains("<strong class=\"\">Short Message?</strong> false"));
    assert!(html.contains("<strong>Missing Messages</strong> true"));
}

#[test]
fn html_escapes_message_text_and_names() {
    let report = report_from(json!([
        { "type": "SPELL", "name": "<Evil & Co>", "messages": [ { "en": "<script>alert('x')</script>" } ] }
    ]));
    let html = output::format_human(&report, ReportFormat::Html);

    assert!(!html.contains("<script>alert"));
    assert!(!html.contains("<Evil"));
    assert!(html.contains("SPELL) &lt;Evil &amp; Co&gt;"));
    assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
}

// ---------------------------------------------------------------------------
// Text
// ---------------------------------------------------------------------------

#[test]
fn text_report_lists_statistics_and_issues() {
    let text = output::format_human(&get_fixture_report(), ReportFormat::Text);
    assert!(text.contains("== SPELL) Fireball ==\n"));
    assert!(text.contains("  Number of messages:    2\n"));
    assert!(text.contains("  Short messages:        true  <-- check\n"));
    assert!(text.contains("    - too short (min 20): Hit (3)\n"));
    assert!(text.contains("== SOCIAL) No Name ==\n"));
    assert!(text.contains("  Issues: none\n"));
}

#[test]
fn report_format_extensions() {
    assert_eq!(ReportFormat::Html.extension(), "html");
    assert_eq!(ReportFormat::Text.extension(), "txt");
}

// ---------------------------------------------------------------------------
// Console summary
// ---------------------------------------------------------------------------

#[test]
fn pretty_summary_reports_result() {
    colored::control::set_override(false);
    let pretty = output::pretty::format(&get_fixture_report());
    assert!(pretty.contains("messages.json"));
    assert!(pretty.contains("Result: FAILED"));
    assert!(pretty.contains("1 errors, 2 warnings, 0 info"));
}
