//! CLI argument definitions using clap derive
//!
//! Defines all command-line arguments and subcommands.

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Telegram alarm callback
///
/// Deliver monitoring alerts to a tg-cli style recipient daemon.
#[derive(Parser, Debug)]
#[command(name = "tgalarm")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "TGALARM_CONFIG")]
    pub config: Option<String>,

    /// Recipients, separated by commas or spaces
    #[arg(long, global = true)]
    pub nicks: Option<String>,

    /// Recipient daemon host
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Recipient daemon port
    #[arg(long, global = true, value_parser = clap::value_parser!(u16).range(1..))]
    pub port: Option<u16>,

    /// Debug log file path
    #[arg(long, global = true, conflicts_with = "no_filelog")]
    pub filelog: Option<String>,

    /// Disable the debug log file
    #[arg(long, global = true)]
    pub no_filelog: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fire a single alert through the callback
    Send(SendArgs),

    /// Validate the configuration and show the effective settings
    Check,

    /// Show the configuration fields the callback requests
    Fields,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for the send command
#[derive(Parser, Debug)]
pub struct SendArgs {
    /// Alert result description; the first "Stream" is replaced by the title
    #[arg(short, long)]
    pub description: String,

    /// Stream title
    #[arg(short, long)]
    pub title: Option<String>,

    /// Number of matching messages
    #[arg(long, default_value = "0")]
    pub count: usize,
}

/// Output format
#[derive(ValueEnum, Debug, Clone, Copy, Default)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format for machine parsing
    Json,
}

/// Generate shell completions and print to stdout
pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
}
