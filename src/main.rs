mod cli;

use clap::Parser;
use cli::{Cli, Commands, LintArgs};
use colored::Colorize;
use message_lint::analyzer::ConsoleSink;
use message_lint::config::{ColourConvention, Config};
use message_lint::error::LintError;
use message_lint::finding::Severity;
use message_lint::{lint, output, rules};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    match cli.command {
        None => lint_command(LintArgs::default()),
        Some(Commands::Lint(args)) => lint_command(args),

        Some(Commands::ListRules) => {
            let rules = rules::all_rules();
            println!("{}", "Built-in Rules".bold().underline());
            println!();

            for rule in &rules {
                let kind = if rule.reports_issue { "issue" } else { "flag " };
                println!(
                    "  [{severity}] {kind} {id:<24} {message}",
                    severity = severity_label(rule.severity),
                    id = rule.id,
                    message = rule.message,
                );
            }

            println!();
            println!("  Total: {} rules", rules.len());
        }

        Some(Commands::Explain { rule_id }) => {
            let rules = rules::all_rules();
            match rules.iter().find(|r| r.id == rule_id) {
                Some(rule) => {
                    println!("{}", rule.id.bold());
                    println!();
                    println!("  Severity:     {}", rule.severity);
                    println!(
                        "  Reported as:  {}",
                        if rule.reports_issue {
                            "issue (listed under errors)"
                        } else {
                            "flag only"
                        }
                    );
                    println!("  Description:  {}", rule.message);
                    println!("  Remediation:  {}", rule.remediation);
                }
                None => {
                    eprintln!("Unknown rule: {rule_id}");
                    eprintln!("Use 'message-lint list-rules' to see all available rules.");
                    std::process::exit(2);
                }
            }
        }
    }
}

fn lint_command(args: LintArgs) {
    init_logging(args.verbose);

    let mut config = Config::load(args.config.as_deref()).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(2);
    });
    args.apply(&mut config);

    if !config.colour.is_explicit() {
        eprintln!(
            "{} no colour convention configured; using the '{}' convention. \
             Set [colour] convention in message-lint.toml or pass --convention tab|at.",
            "Note:".yellow().bold(),
            ColourConvention::Tab
        );
    }

    let report = match lint::run_lint(&config, &mut ConsoleSink) {
        Ok(report) => report,
        Err(LintError::InputNotFound(path)) => {
            println!("No messages file found at {}.", path.display());
            std::process::exit(0);
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    };

    let written = lint::write_reports(&report, &config).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(2);
    });

    print!("{}", output::pretty::format(&report));
    for path in &written {
        eprintln!("Output written to {}", path.display());
    }

    let failed = config.strict.enabled && report.has_issues();
    std::process::exit(if failed { 1 } else { 0 });
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("message_lint=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn severity_label(severity: Severity) -> String {
    match severity {
        Severity::Error => "ERROR".red().bold().to_string(),
        Severity::Warning => " WARN".yellow().bold().to_string(),
        Severity::Info => " INFO".blue().to_string(),
    }
}
