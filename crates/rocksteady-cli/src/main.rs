//! # rocksteady — CI build & deploy helper
//!
//! Builds a container image from the working directory, tags it from the CI
//! environment, pushes every tag to an ECR-style registry, and notifies a
//! deploy coordination server over a webhook.
//!
//! Exit codes: 0 success/help, 1 external failure or unknown subcommand,
//! 2 missing configuration, 3 missing dependency.

mod commands;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use rocksteady_common::RocksteadyError;

use crate::commands::Cli;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = parse_exit_code(&err);
            let _ = err.print();
            std::process::exit(code);
        }
    };

    if let Err(err) = commands::execute(cli) {
        eprintln!("{err}");
        if matches!(err, RocksteadyError::MissingConfiguration { .. }) {
            eprintln!();
            eprintln!("{}", Cli::command().render_help());
        }
        std::process::exit(err.exit_code());
    }
}

/// Maps a clap parse outcome onto the exit-code contract: help paths exit 0,
/// everything else (unknown subcommand included) exits 1.
fn parse_exit_code(err: &clap::Error) -> i32 {
    match err.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => 0,
        _ => 1,
    }
}
