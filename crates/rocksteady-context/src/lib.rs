//! # rocksteady-context
//!
//! Per-invocation context resolution for the Rocksteady CI helper.
//!
//! Every subcommand starts from a [`SharedContext`] resolved out of the CI
//! environment, extended into a [`BuildContext`] (registry coordinates,
//! credentials, image tags) or a [`DeployContext`] (deploy server URL and
//! gateway credentials). Contexts are constructed fresh per invocation, used
//! immediately, and discarded; nothing is cached across runs.

pub mod build;
pub mod deploy;
pub mod shared;
pub mod tag;

pub use build::BuildContext;
pub use deploy::DeployContext;
pub use shared::SharedContext;
