use clap::{Args, Parser, Subcommand};
use message_lint::config::{ColourConvention, Config};
use message_lint::output::ReportFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "message-lint",
    version,
    about = "Lints game message data for missing, short, long, and colour-bleeding messages"
)]
pub struct Cli {
    /// Defaults to `lint` with configured settings when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Lint a messages file and write message_report.json plus an HTML or text report
    Lint(LintArgs),

    /// List all built-in rules with descriptions
    ListRules,

    /// Show full explanation for a rule
    Explain {
        /// Rule ID (e.g., "message/colour-bleed")
        rule_id: String,
    },
}

#[derive(Args, Default)]
pub struct LintArgs {
    /// Messages file (defaults to ../lib/misc/messages.json)
    pub input: Option<PathBuf>,

    /// Directory for message_report.* (defaults to the current directory)
    #[arg(long, short)]
    pub output_dir: Option<PathBuf>,

    /// Human-readable report format
    #[arg(long, short, value_enum)]
    pub format: Option<ReportFormat>,

    /// Colour-escape convention used for the bleed check
    #[arg(long, value_enum)]
    pub convention: Option<ColourConvention>,

    /// Exit with status 1 when any issue is found
    #[arg(long)]
    pub strict: bool,

    /// Custom config file path
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(long, short)]
    pub verbose: bool,
}

impl LintArgs {
    /// Applies command-line overrides on top of the loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(ref input) = self.input {
            config.paths.input = input.clone();
        }
        if let Some(ref dir) = self.output_dir {
            config.paths.output_dir = dir.clone();
        }
        if let Some(format) = self.format {
            config.report.format = format;
        }
        if let Some(convention) = self.convention {
            config.colour.convention = Some(convention);
        }
        if self.strict {
            config.strict.enabled = true;
        }
    }
}
