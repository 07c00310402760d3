//! # rocksteady-registry
//!
//! Container registry operations for the `build` subcommand.
//!
//! The [`ImageRegistry`] trait is the seam between command orchestration and
//! the external tooling: production wiring shells out to `docker` (and the
//! AWS CLI for ECR login) via [`docker::DockerCli`], while tests substitute
//! an in-memory fake.

pub mod docker;

use rocksteady_common::error::Result;
use rocksteady_context::BuildContext;

/// Capability interface over a container image registry.
///
/// Every operation is opaque and fallible; failures propagate as
/// [`rocksteady_common::RocksteadyError`] with exit code 1.
pub trait ImageRegistry {
    /// Authenticates the local image tooling against the registry.
    ///
    /// # Errors
    ///
    /// Returns an error if the login mechanism cannot be invoked or rejects
    /// the credentials.
    fn login(&self, ctx: &BuildContext) -> Result<()>;

    /// Builds the image from the current directory with every derived tag
    /// attached.
    ///
    /// # Errors
    ///
    /// Returns an error if the build tool cannot be invoked or the build
    /// fails.
    fn build(&self, ctx: &BuildContext) -> Result<()>;

    /// Pushes a single tag to the registry.
    ///
    /// # Errors
    ///
    /// Returns an error if the push tool cannot be invoked or the push is
    /// rejected.
    fn push(&self, tag: &str) -> Result<()>;
}
