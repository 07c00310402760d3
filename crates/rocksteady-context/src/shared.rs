//! Context fields common to every subcommand.

use rocksteady_common::constants;
use rocksteady_common::env::{self, ConfigSource};
use rocksteady_common::error::Result;

/// Configuration every subcommand needs, resolved from the CI environment.
///
/// All fields are validated non-empty at construction; resolution is
/// fail-fast, so the first missing field is reported and no later field is
/// consulted.
#[derive(Debug, Clone)]
pub struct SharedContext {
    /// Name of the project being built.
    pub project_name: String,
    /// CI build number for this invocation.
    pub build_number: String,
    /// Branch under build.
    pub branch: String,
}

impl SharedContext {
    /// Resolves the shared context from a configuration source.
    ///
    /// # Errors
    ///
    /// Returns `MissingConfiguration` for the first field whose fallback
    /// chain resolves empty, naming every variable in that chain.
    pub fn from_source(source: &dyn ConfigSource) -> Result<Self> {
        let project_name = env::require(
            source,
            &[constants::ROCKSTEADY_PROJECT, constants::CIRCLE_PROJECT_REPONAME],
        )?;
        let build_number = env::require(source, &[constants::CIRCLE_BUILD_NUM])?;
        let branch = env::require(source, &[constants::CIRCLE_BRANCH])?;

        tracing::debug!(%project_name, %build_number, %branch, "resolved shared context");

        Ok(Self {
            project_name,
            build_number,
            branch,
        })
    }
}
