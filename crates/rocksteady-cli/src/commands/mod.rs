//! CLI command definitions and dispatch.

pub mod build;
pub mod deploy;

use clap::{Parser, Subcommand};

/// Rocksteady — build container images in CI and announce deploys.
#[derive(Parser, Debug)]
#[command(
    name = rocksteady_common::constants::BIN_NAME,
    version,
    about,
    long_about = None,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build the container image, tag it from the CI environment, and push
    /// every tag to the registry.
    Build,
    /// Notify the deploy coordination server that a build is available.
    Deploy(deploy::DeployArgs),
}

/// Dispatches the parsed CLI command to its handler.
///
/// # Errors
///
/// Returns an error when configuration is missing, a required dependency is
/// absent, or an external operation fails.
pub fn execute(cli: Cli) -> rocksteady_common::Result<()> {
    match cli.command {
        Command::Build => build::execute(),
        Command::Deploy(args) => deploy::execute(args),
    }
}
