//! # message-lint
//!
//! Lints a game's dialogue/message data.
//!
//! `message-lint` reads a JSON file of categorized messages (spells, socials,
//! combat messages, …), checks every message text for missing entries,
//! length problems, and colour markup that bleeds past the end of the string,
//! and writes a JSON report plus an HTML or plain-text report.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use message_lint::{analyzer::ConsoleSink, config::Config, lint, output};
//!
//! let config = Config::load(None).expect("failed to load config");
//! let report = lint::run_lint(&config, &mut ConsoleSink).expect("lint failed");
//! lint::write_reports(&report, &config).expect("failed to write reports");
//! print!("{}", output::pretty::format(&report));
//! ```
//!
//! ## Architecture
//!
//! The crate is organized around a one-way pipeline:
//!
//! 1. **[`config`]** — load thresholds, paths, and the colour convention from TOML.
//! 2. **[`loader`]** — read and validate the messages file.
//! 3. **[`analyzer`]** — apply the [`rules`] to every text and aggregate
//!    per-group statistics ([`finding::GroupStats`]).
//! 4. **[`output`]** — render the JSON, HTML, text, and console reports.
//!
//! [`lint`] ties the stages together and [`error::LintError`] is the single
//! error type they share.

pub mod analyzer;
pub mod config;
pub mod error;
pub mod finding;
pub mod lint;
pub mod loader;
pub mod output;
pub mod rules;
