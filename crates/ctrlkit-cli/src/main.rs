//! loopctl - ctrlkit control-loop CLI
//!
//! Runs controller profiles against a simulated plant, runs filter specs over
//! sample sequences, and validates profile files.

#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

mod commands;
mod completion;
mod error;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::{FilterArgs, SimulateArgs, ValidateArgs};
use crate::error::CliError;

#[derive(Parser)]
#[command(name = "loopctl")]
#[command(about = "ctrlkit control-loop CLI - simulate PID profiles and run filters")]
#[command(version)]
#[command(long_about = "
loopctl drives the ctrlkit PID controllers and filters from the command line.
It can run a controller profile against a first-order plant, pass samples
through any filter primitive, and validate profile files before deployment.

Use --json for machine-readable output suitable for scripting.
")]
struct Cli {
    /// Output format (human-readable or JSON)
    #[arg(
        long,
        global = true,
        help = "Output in JSON format for machine parsing"
    )]
    json: bool,

    /// Verbose logging
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a controller profile against a first-order plant
    Simulate(SimulateArgs),

    /// Run a filter spec over a sequence of samples
    Filter(FilterArgs),

    /// Check that a profile file parses and builds
    Validate(ValidateArgs),

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completion for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("loopctl={log_level},ctrlkit_pid={log_level},ctrlkit_filters={log_level}")
                    .into()
            }),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute_command(&cli) {
        if cli.json {
            output::print_error_json(&e);
        } else {
            output::print_error_human(&e);
        }

        let exit_code = e.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
        std::process::exit(exit_code);
    }
}

fn execute_command(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Simulate(args) => commands::simulate::execute(args, cli.json),
        Commands::Filter(args) => commands::filter::execute(args, cli.json),
        Commands::Validate(args) => commands::validate::execute(args, cli.json),
        Commands::Completion { shell } => {
            completion::generate_completion(*shell);
            Ok(())
        }
    }
}
