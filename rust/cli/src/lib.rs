//! # dealkit CLI Library
//!
//! Command-line surface over `dealkit-engine`: deal shuffled hands, inspect
//! deck definitions and show the resolved configuration.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ```
//! let args = vec!["dealkit", "deal", "--players", "2", "--cards", "5", "--seed", "42"];
//! let mut out = Vec::new();
//! let code = dealkit_cli::run(args, &mut out, &mut std::io::sink());
//! assert_eq!(code, 0);
//! assert_eq!(String::from_utf8(out).unwrap().lines().count(), 2);
//! ```
//!
//! ## Available Subcommands
//!
//! - `deal`: Load, shuffle and deal a deck
//! - `decks`: List deck ids or print a definition
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;
pub mod cli;
mod commands;
mod config;
mod error;
pub mod exit_code;
pub mod logging;
pub mod ui;

use cli::{Commands, DealkitCli};
use commands::{DealArgs, handle_cfg_command, handle_deal_command, handle_decks_command};

pub use error::CliError;

/// Main entry point for the CLI application.
///
/// Parses `args` (including the program name) and dispatches to a command
/// handler. Returns the process exit code: [`exit_code::SUCCESS`] or
/// [`exit_code::ERROR`]. Errors are written to `err` with an `Error:` prefix.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match DealkitCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version go to stdout and succeed
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    let _ = write!(err, "{}", e);
                    exit_code::ERROR
                }
            };
        }
    };

    let result = match cli.cmd {
        Commands::Deal {
            deck,
            players,
            cards,
            seed,
            json,
        } => handle_deal_command(
            DealArgs {
                deck,
                players: players.map(usize::from),
                cards: cards.map(usize::from),
                seed,
                json,
            },
            out,
        ),
        Commands::Decks { id } => handle_decks_command(id, out),
        Commands::Cfg => handle_cfg_command(out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}
