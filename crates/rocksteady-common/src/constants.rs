//! Environment-variable names and workspace-wide constants.
//!
//! The variable names mirror the CircleCI build environment plus the
//! `ROCKSTEADY_*` overrides this tool understands. Fallback chains are
//! assembled from these constants by the context crates.

/// Binary name for the CLI.
pub const BIN_NAME: &str = "rocksteady";

/// Project name override, preferred over the CI-provided repository name.
pub const ROCKSTEADY_PROJECT: &str = "ROCKSTEADY_PROJECT";
/// Repository name provided by CircleCI.
pub const CIRCLE_PROJECT_REPONAME: &str = "CIRCLE_PROJECT_REPONAME";
/// Monotonic build number provided by CircleCI.
pub const CIRCLE_BUILD_NUM: &str = "CIRCLE_BUILD_NUM";
/// Branch under build, provided by CircleCI.
pub const CIRCLE_BRANCH: &str = "CIRCLE_BRANCH";
/// Commit SHA under build, provided by CircleCI.
pub const CIRCLE_SHA1: &str = "CIRCLE_SHA1";

/// ECR repository name override.
pub const ECR_REPO: &str = "ECR_REPO";
/// Registry base URL, e.g. `123456789.dkr.ecr.us-east-1.amazonaws.com`.
pub const ECR_BASE: &str = "ECR_BASE";
/// Registry-specific AWS access key, preferred over the ambient one.
pub const ECR_AWS_ACCESS_KEY_ID: &str = "ECR_AWS_ACCESS_KEY_ID";
/// Ambient AWS access key.
pub const AWS_ACCESS_KEY_ID: &str = "AWS_ACCESS_KEY_ID";
/// Registry-specific AWS secret key, preferred over the ambient one.
pub const ECR_AWS_SECRET_ACCESS_KEY: &str = "ECR_AWS_SECRET_ACCESS_KEY";
/// Ambient AWS secret key.
pub const AWS_SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";
/// AWS region the registry lives in.
pub const ECR_AWS_REGION: &str = "ECR_AWS_REGION";

/// Deploy coordination server base URL fallback.
pub const ROCKSTEADY_SERVER: &str = "ROCKSTEADY_SERVER";
/// Cloudflare Access client ID for the deploy server gateway (optional).
pub const CF_ACCESSC_ID: &str = "CF_ACCESSC_ID";
/// Cloudflare Access client secret for the deploy server gateway (optional).
pub const CF_ACCESS_SECRET: &str = "CF_ACCESS_SECRET";

/// Optional token forwarded verbatim to the image build as a build argument.
pub const SIDEKIQ_PRO_TOKEN: &str = "SIDEKIQ_PRO_TOKEN";
