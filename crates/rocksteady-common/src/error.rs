//! Unified error types for the Rocksteady workspace.
//!
//! Every failure the tool can report maps onto one of these variants, and
//! each variant carries a fixed process exit code so the CLI surface stays
//! predictable for CI pipelines that script against it.

use thiserror::Error;

/// Exit code for a general runtime failure (external tool or HTTP request).
pub const EXIT_FAILURE: i32 = 1;
/// Exit code for missing required configuration.
pub const EXIT_MISSING_CONFIG: i32 = 2;
/// Exit code for a missing external dependency.
pub const EXIT_MISSING_DEPENDENCY: i32 = 3;

/// Top-level error type shared across the workspace.
#[derive(Debug, Error)]
pub enum RocksteadyError {
    /// A required configuration value was empty across its entire fallback
    /// chain. `names` lists every environment variable consulted, in order.
    #[error("missing required configuration: set one of {}", names.join(", "))]
    MissingConfiguration {
        /// Environment variables tried, highest priority first.
        names: Vec<&'static str>,
    },

    /// A required external tool is not installed or not invocable.
    #[error("required dependency `{tool}` is not available on PATH")]
    MissingDependency {
        /// Name of the missing tool.
        tool: String,
    },

    /// An external process could not be spawned at all.
    #[error("failed to invoke `{program}`: {source}")]
    Spawn {
        /// Program that failed to start.
        program: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// An external process ran but exited unsuccessfully.
    #[error("`{program}` exited with {}", code.map_or_else(|| "signal".to_string(), |c| format!("status {c}")))]
    CommandFailed {
        /// Program that failed.
        program: String,
        /// Exit code, if the process exited normally.
        code: Option<i32>,
    },

    /// The deploy webhook request failed (transport error or non-2xx).
    #[error("webhook request to {url} failed: {message}")]
    Webhook {
        /// Endpoint the request was sent to.
        url: String,
        /// Description of the failure.
        message: String,
    },
}

impl RocksteadyError {
    /// Returns the process exit code this error maps to.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::MissingConfiguration { .. } => EXIT_MISSING_CONFIG,
            Self::MissingDependency { .. } => EXIT_MISSING_DEPENDENCY,
            Self::Spawn { .. } | Self::CommandFailed { .. } | Self::Webhook { .. } => EXIT_FAILURE,
        }
    }
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, RocksteadyError>;
