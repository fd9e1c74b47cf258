use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "localscore",
    version,
    about = "Local SEO audit scoring and report CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score an audit request and render the full report
    Score(ScoreCommand),
    /// Print the local SEO sub-score and its insights
    Local(InputCommand),
    /// Print the on-site SEO sub-score and its insights
    Onsite(InputCommand),
    /// Extract page signals from a saved homepage
    Scan(ScanCommand),
    /// Check a phone number against the US format
    Phone(PhoneCommand),
    /// Write an example audit request
    Init(InitCommand),
}

#[derive(Args)]
pub struct ScoreCommand {
    pub input: PathBuf,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    /// Homepage HTML used to fill missing page signals
    #[arg(long)]
    pub html: Option<PathBuf>,
}

#[derive(Args)]
pub struct InputCommand {
    pub input: PathBuf,
}

#[derive(Args)]
pub struct ScanCommand {
    pub html: PathBuf,
    #[arg(long)]
    pub website: String,
    #[arg(long, default_value = "")]
    pub city: String,
    #[arg(long, default_value = "")]
    pub category: String,
}

#[derive(Args)]
pub struct PhoneCommand {
    pub number: String,
}

#[derive(Args)]
pub struct InitCommand {
    pub path: PathBuf,
    #[arg(long)]
    pub force: bool,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
    Html,
}
