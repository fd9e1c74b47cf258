mod analyze;
mod cli;
mod config;
mod error;
mod report;
mod request;
mod scan;
mod types;

use crate::error::AuditError;
use crate::types::scoring::CategoryScore;
use clap::Parser;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const SHORTFALLS: i32 = 1;
    pub const BELOW_THRESHOLD: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_logging(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn config_dir(input: &Path) -> &Path {
    input
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."))
}

fn print_category(label: &str, category: &CategoryScore) -> i32 {
    println!("{label}: {}/100", category.score);
    for insight in &category.insights {
        println!("- {insight}");
    }
    if category.insights.is_empty() {
        exit_code::SUCCESS
    } else {
        exit_code::SHORTFALLS
    }
}

fn run() -> Result<i32, AuditError> {
    let cli = cli::Cli::parse();
    init_logging(cli.verbose, cli.quiet);
    info!("localscore v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        cli::Commands::Score(cmd) => {
            let loaded = config::load_config(config_dir(&cmd.input))?;
            let mut audit_request = request::load_request(&cmd.input)?;

            if let Some(html_path) = &cmd.html {
                if !html_path.exists() {
                    return Err(AuditError::InputNotFound(html_path.display().to_string()));
                }
                let document = std::fs::read_to_string(html_path)?;
                let profile = &audit_request.profile;
                let extracted = scan::extract_signals(
                    &document,
                    &scan::ScanTarget {
                        website: &profile.website,
                        city: &profile.city,
                        category: &profile.category,
                    },
                );
                scan::merge_into_bundle(extracted, &mut audit_request.signals);
            }

            let audit_report = analyze::analyze(&audit_request, &loaded);
            let output_format = match cmd.format {
                cli::ReportFormat::Json => report::OutputFormat::Json,
                cli::ReportFormat::Md => report::OutputFormat::Md,
                cli::ReportFormat::Html => report::OutputFormat::Html,
            };
            let rendered = report::render(&audit_report, &loaded.branding(), output_format)?;
            println!("{rendered}");

            if audit_report.result.combined < loaded.pass_score() {
                eprintln!(
                    "warning: combined score {} is below pass score {}",
                    audit_report.result.combined,
                    loaded.pass_score()
                );
                Ok(exit_code::BELOW_THRESHOLD)
            } else if audit_report.result.has_shortfalls() {
                Ok(exit_code::SHORTFALLS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Local(cmd) => {
            let loaded = config::load_config(config_dir(&cmd.input))?;
            let audit_request = request::load_request(&cmd.input)?;
            let audit_report = analyze::analyze(&audit_request, &loaded);
            Ok(print_category("local", &audit_report.result.local))
        }
        cli::Commands::Onsite(cmd) => {
            let loaded = config::load_config(config_dir(&cmd.input))?;
            let audit_request = request::load_request(&cmd.input)?;
            let audit_report = analyze::analyze(&audit_request, &loaded);
            Ok(print_category("onsite", &audit_report.result.onsite))
        }
        cli::Commands::Scan(cmd) => {
            if !cmd.html.exists() {
                return Err(AuditError::InputNotFound(cmd.html.display().to_string()));
            }
            let document = std::fs::read_to_string(&cmd.html)?;
            let signals = scan::extract_signals(
                &document,
                &scan::ScanTarget {
                    website: &cmd.website,
                    city: &cmd.city,
                    category: &cmd.category,
                },
            );
            println!("{}", serde_json::to_string_pretty(&signals)?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Phone(cmd) => match analyze::phone::format_us_phone(&cmd.number) {
            Some(formatted) => {
                println!("valid: {formatted}");
                Ok(exit_code::SUCCESS)
            }
            None => Err(AuditError::InvalidPhone(cmd.number)),
        },
        cli::Commands::Init(cmd) => {
            let path = request::write_template(&cmd.path, cmd.force)?;
            println!("wrote {}", path.display());
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
