use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "spamscore",
    version,
    about = "Rule-based spam scoring for comment text"
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
    /// Classify text from a file or stdin
    Check(CheckCommand),
    /// Print the effective rule configuration
    Rules(RulesCommand),
}

#[derive(Args)]
pub struct CheckCommand {
    /// File to read; stdin when omitted
    pub file: Option<PathBuf>,

    /// Rules file (TOML); built-in defaults when omitted
    #[arg(short, long)]
    pub rules: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Args)]
pub struct RulesCommand {
    /// Rules file (TOML); built-in defaults when omitted
    #[arg(short, long)]
    pub rules: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
