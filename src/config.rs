//! Configuration loading and management.
//!
//! Every knob of a lint run lives here: where the messages file is read from,
//! where reports are written, the length thresholds, the colour-markup
//! convention, the human report format, and strict mode.
//!
//! # Configuration file
//!
//! The default configuration file is `message-lint.toml` in the current
//! working directory. Use [`Config::load`] to read it:
//!
//! ```rust,no_run
//! use message_lint::config::Config;
//!
//! let config = Config::load(None).expect("failed to load config");
//! assert_eq!(config.thresholds.min_length, 20);
//! ```
//!
//! # Colour conventions
//!
//! Message data in the wild uses two incompatible colour-escape conventions.
//! Neither is assumed silently: pick one with `[colour] convention`, and
//! override individual characters if your data differs from both presets.
//!
//! ```toml
//! [colour]
//! convention = "at"
//! terminator = "x"
//! ```

use crate::error::LintError;
use crate::output::ReportFormat;
use std::path::{Path, PathBuf};

/// Name of the config file picked up from the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "message-lint.toml";

/// Main configuration for a lint run.
///
/// All fields carry defaults that reproduce the historical behaviour, so the
/// config file can be omitted entirely.
#[derive(Debug, Clone, Default, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Config {
    /// Input file and output directory.
    pub paths: PathsConfig,
    /// Minimum and maximum recommended message lengths.
    pub thresholds: ThresholdsConfig,
    /// Colour-escape convention used by the bleed check.
    pub colour: ColourConfig,
    /// Which human-readable report accompanies the JSON report.
    pub report: ReportConfig,
    /// When strict mode is enabled, any issue fails the run.
    pub strict: StrictConfig,
}

#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Messages file to lint.
    pub input: PathBuf,
    /// Directory that receives `message_report.*`.
    pub output_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        PathsConfig {
            input: PathBuf::from("../lib/misc/messages.json"),
            output_dir: PathBuf::from("."),
        }
    }
}

/// Length thresholds, counted in characters.
///
/// These are soft recommendations meant to keep combat messages a
/// consistent size, not hard engine limits.
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct ThresholdsConfig {
    /// Non-missing messages shorter than this are reported.
    pub min_length: usize,
    /// Messages longer than this are reported.
    pub max_length: usize,
}

impl Default for ThresholdsConfig {
    fn default() -> Self {
        ThresholdsConfig {
            min_length: 20,
            max_length: 75,
        }
    }
}

/// Named colour-escape conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColourConvention {
    /// Tab-prefixed codes, terminated by a `\` three characters from the end
    /// or a trailing `n`.
    Tab,
    /// `@`-prefixed codes, terminated by `@n`.
    At,
}

impl ColourConvention {
    /// Returns the preset [`ColourRule`] for this convention.
    pub fn rule(self) -> ColourRule {
        match self {
            ColourConvention::Tab => ColourRule {
                marker: '\t',
                continuation: '\\',
                continuation_offset: 3,
                terminator: 'n',
            },
            ColourConvention::At => ColourRule {
                marker: '@',
                continuation: '@',
                continuation_offset: 2,
                terminator: 'n',
            },
        }
    }
}

impl std::fmt::Display for ColourConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColourConvention::Tab => write!(f, "tab"),
            ColourConvention::At => write!(f, "at"),
        }
    }
}

/// `[colour]` section: a convention preset plus per-field overrides.
#[derive(Debug, Clone, Default, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct ColourConfig {
    /// Preset to start from. `None` means "not chosen"; `tab` is used and the
    /// caller is expected to tell the user.
    pub convention: Option<ColourConvention>,
    pub marker: Option<char>,
    pub continuation: Option<char>,
    pub continuation_offset: Option<usize>,
    pub terminator: Option<char>,
}

/// Fully resolved colour-bleed parameters.
///
/// A message containing `marker` bleeds when it is longer than
/// `continuation_offset` characters, the character `continuation_offset`
/// positions from the end is not `continuation`, and the last character is
/// not `terminator`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColourRule {
    pub marker: char,
    pub continuation: char,
    pub continuation_offset: usize,
    pub terminator: char,
}

impl ColourConfig {
    /// Returns `true` when a convention was named in the config or on the
    /// command line.
    pub fn is_explicit(&self) -> bool {
        self.convention.is_some()
    }

    /// Applies the per-field overrides on top of the chosen preset.
    pub fn resolve(&self) -> ColourRule {
        let base = self.convention.unwrap_or(ColourConvention::Tab).rule();
        ColourRule {
            marker: self.marker.unwrap_or(base.marker),
            continuation: self.continuation.unwrap_or(base.continuation),
            continuation_offset: self
                .continuation_offset
                .unwrap_or(base.continuation_offset),
            terminator: self.terminator.unwrap_or(base.terminator),
        }
    }
}

#[derive(Debug, Clone, Default, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Human-readable artifact written next to `message_report.json`.
    pub format: ReportFormat,
}

/// Strict-mode configuration.
///
/// When [`enabled`](StrictConfig::enabled) is `true`, a run that finds any
/// issue exits with status `1`.
#[derive(Debug, Clone, Default, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct StrictConfig {
    pub enabled: bool,
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// Resolution order:
    /// 1. If `path` is `Some`, load from that file (error if missing).
    /// 2. If `path` is `None`, try `message-lint.toml` in the current directory.
    /// 3. If that file does not exist either, return [`Config::default()`].
    ///
    /// The loaded values are checked with [`Config::validate`].
    ///
    /// # Errors
    ///
    /// Returns [`LintError::Config`] when the explicit path does not exist,
    /// the file cannot be read, the TOML fails to parse, or a value is out of
    /// range.
    pub fn load(path: Option<&Path>) -> Result<Config, LintError> {
        let config_path = match path {
            Some(p) if p.exists() => Some(p.to_path_buf()),
            Some(p) => {
                return Err(LintError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )))
            }
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                default_path.exists().then(|| default_path.to_path_buf())
            }
        };

        let config = match config_path {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading config");
                let content = std::fs::read_to_string(&path).map_err(|e| {
                    LintError::Config(format!("Failed to read config {}: {}", path.display(), e))
                })?;
                toml::from_str(&content).map_err(|e| {
                    LintError::Config(format!("Failed to parse config {}: {}", path.display(), e))
                })?
            }
            None => Config::default(),
        };

        config.validate()?;
        Ok(config)
    }

    /// Parses and validates a config from TOML text without touching the
    /// filesystem.
    pub fn from_toml(content: &str) -> Result<Config, LintError> {
        let config: Config = toml::from_str(content)
            .map_err(|e| LintError::Config(format!("Failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects combinations that would make the rules meaningless.
    ///
    /// # Examples
    ///
    /// ```
    /// use message_lint::config::Config;
    ///
    /// let mut config = Config::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.thresholds.min_length = 100;
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), LintError> {
        let t = &self.thresholds;
        if t.min_length > t.max_length {
            return Err(LintError::Config(format!(
                "thresholds.min_length ({}) must not exceed thresholds.max_length ({})",
                t.min_length, t.max_length
            )));
        }
        if self.colour.resolve().continuation_offset == 0 {
            return Err(LintError::Config(
                "colour.continuation_offset must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Path of the JSON report inside the output directory.
    pub fn json_report_path(&self) -> PathBuf {
        self.paths.output_dir.join("message_report.json")
    }

    /// Path of the human report inside the output directory.
    pub fn human_report_path(&self) -> PathBuf {
        self.paths
            .output_dir
            .join(format!("message_report.{}", self.report.format.extension()))
    }
}
