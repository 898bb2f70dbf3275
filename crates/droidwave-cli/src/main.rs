//! Droidwave CLI - render droid speech to WAV files
//!
//! This binary decorates a data-over-audio style tone stream with droid
//! voice characteristics and writes the result as a WAV file.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;

use droidwave_cli::cli_args::SayArgs;
use droidwave_cli::commands;

/// Droidwave - droid voice rendering for data-over-audio waveforms
#[derive(Parser)]
#[command(name = "droidwave")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a message to a WAV file with droid voice effects
    Say(SayArgs),

    /// List the available effect kinds
    Effects,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Say(args) => commands::say::run(args),
        Commands::Effects => Ok(commands::effects::run()),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
