//! Lint orchestration.
//!
//! [`run_lint`] is the main entry-point: it loads the messages file named in
//! the [`Config`], runs the [`analyzer`](crate::analyzer) over it, and
//! returns the finished [`LintReport`]. [`write_reports`] then persists the
//! JSON report and the configured human-readable report.

use crate::analyzer::{self, IssueSink};
use crate::config::Config;
use crate::error::LintError;
use crate::finding::LintReport;
use crate::loader;
use crate::output;
use crate::rules::RuleSet;
use std::path::{Path, PathBuf};

/// Lints the messages file configured in `config.paths.input`.
///
/// # Pipeline
///
/// 1. Loads and validates the input with [`loader::load_messages`].
/// 2. Builds the [`RuleSet`] from the configured thresholds and colour
///    convention.
/// 3. Runs [`analyzer::analyze`], streaming issues to `sink`.
///
/// Nothing is written to disk; call [`write_reports`] for that.
///
/// # Errors
///
/// Returns [`LintError::InputNotFound`] when the input file is absent, and
/// the other loader errors for unreadable or malformed input.
///
/// # Examples
///
/// ```rust,no_run
/// use message_lint::{analyzer::ConsoleSink, config::Config, lint};
///
/// let config = Config::load(None).unwrap();
/// let report = lint::run_lint(&config, &mut ConsoleSink).unwrap();
/// lint::write_reports(&report, &config).unwrap();
/// ```
pub fn run_lint(config: &Config, sink: &mut dyn IssueSink) -> Result<LintReport, LintError> {
    let input = &config.paths.input;
    tracing::debug!(input = %input.display(), "linting messages");

    let groups = loader::load_messages(input)?;
    let rules = RuleSet::from_config(config);
    tracing::debug!(?rules, "rules resolved");

    Ok(analyzer::analyze(input, &groups, &rules, sink))
}

/// Writes `message_report.json` and the human-readable report into
/// `config.paths.output_dir`, overwriting earlier runs.
///
/// Returns the paths written, JSON first.
///
/// # Errors
///
/// Returns [`LintError::Write`] if the output directory cannot be created or a
/// file cannot be written.
pub fn write_reports(report: &LintReport, config: &Config) -> Result<Vec<PathBuf>, LintError> {
    let dir = &config.paths.output_dir;
    std::fs::create_dir_all(dir).map_err(|source| LintError::Write {
        path: dir.clone(),
        source,
    })?;

    let json_path = config.json_report_path();
    write_artifact(&json_path, &output::json::format(report))?;

    let human_path = config.human_report_path();
    write_artifact(
        &human_path,
        &output::format_human(report, config.report.format),
    )?;

    Ok(vec![json_path, human_path])
}

fn write_artifact(path: &Path, content: &str) -> Result<(), LintError> {
    std::fs::write(path, content).map_err(|source| LintError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), bytes = content.len(), "report written");
    Ok(())
}
