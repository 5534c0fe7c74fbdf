//! tgalarm - Telegram alarm callback tool
//!
//! A command-line host for the Telegram alarm callback: validate the
//! configuration, list its fields, or fire a test alert at the daemon.

use clap::Parser;
use tgalarm::cli::args::{generate_completions, Cli, Commands};
use tgalarm::commands::{run_check, run_fields, run_send};
use tgalarm::error::{AppError, ConfigError};

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Set log level based on verbose flag
    if cli.verbose {
        log::set_max_level(log::LevelFilter::Debug);
    }

    // Run the appropriate command
    let result = run(&cli);

    if let Err(e) = result {
        log::error!("{}", e);
        print_error(&e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    match &cli.command {
        Commands::Send(args) => run_send(cli, args),

        Commands::Check => run_check(cli),

        Commands::Fields => run_fields(cli.format),

        Commands::Completions { shell } => {
            generate_completions(*shell);
            Ok(())
        }
    }
}

fn print_error(err: &AppError) {
    eprintln!("Error: {}", err);

    // Print helpful hints for common errors
    match err {
        AppError::Config(ConfigError::MissingField(field)) => {
            eprintln!();
            eprintln!("Hint: Set '{}' in the [callback] table of the config file", field);
            eprintln!("      or pass --{} on the command line.", field);
        }
        AppError::Config(ConfigError::FileNotFound(_)) => {
            eprintln!();
            eprintln!("Hint: Check the --config path or the TGALARM_CONFIG variable.");
        }
        _ => {}
    }
}
