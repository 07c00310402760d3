//! Context for the `build` subcommand: registry coordinates, credentials,
//! and the derived tag list.

use rocksteady_common::constants;
use rocksteady_common::env::{self, ConfigSource};
use rocksteady_common::error::Result;

use crate::shared::SharedContext;
use crate::tag;

/// Everything the `build` subcommand needs beyond [`SharedContext`].
///
/// Resolution order matches [`BuildContext::from_source`]; each required
/// field is fail-fast.
#[derive(Debug, Clone)]
pub struct BuildContext {
    /// Shared CI fields.
    pub shared: SharedContext,
    /// ECR repository name.
    pub ecr_repo: String,
    /// Registry base URL the tags are qualified with.
    pub ecr_base: String,
    /// AWS access key used for registry login.
    pub aws_access_key_id: String,
    /// AWS secret key used for registry login.
    pub aws_secret_access_key: String,
    /// AWS region the registry lives in.
    pub aws_region: String,
    /// Commit SHA under build.
    pub commit_sha: String,
    /// Optional token forwarded verbatim to the image build.
    pub sidekiq_pro_token: Option<String>,
    /// Fully qualified image tags, in push order.
    pub tags: Vec<String>,
}

impl BuildContext {
    /// Resolves the build context on top of an already-resolved shared
    /// context.
    ///
    /// # Errors
    ///
    /// Returns `MissingConfiguration` for the first required field whose
    /// fallback chain resolves empty.
    pub fn from_source(shared: SharedContext, source: &dyn ConfigSource) -> Result<Self> {
        let ecr_repo = env::require(
            source,
            &[
                constants::ECR_REPO,
                constants::ROCKSTEADY_PROJECT,
                constants::CIRCLE_PROJECT_REPONAME,
            ],
        )?;
        let ecr_base = env::require(source, &[constants::ECR_BASE])?;
        let aws_access_key_id = env::require(
            source,
            &[constants::ECR_AWS_ACCESS_KEY_ID, constants::AWS_ACCESS_KEY_ID],
        )?;
        let aws_secret_access_key = env::require(
            source,
            &[
                constants::ECR_AWS_SECRET_ACCESS_KEY,
                constants::AWS_SECRET_ACCESS_KEY,
            ],
        )?;
        let aws_region = env::require(source, &[constants::ECR_AWS_REGION])?;
        let commit_sha = env::require(source, &[constants::CIRCLE_SHA1])?;
        let sidekiq_pro_token = env::optional(source, constants::SIDEKIQ_PRO_TOKEN);

        let tags = tag::derive_tags(
            &ecr_base,
            &shared.project_name,
            &shared.build_number,
            &shared.branch,
            &commit_sha,
        );

        tracing::debug!(%ecr_repo, %ecr_base, %aws_region, tag_count = tags.len(), "resolved build context");

        Ok(Self {
            shared,
            ecr_repo,
            ecr_base,
            aws_access_key_id,
            aws_secret_access_key,
            aws_region,
            commit_sha,
            sidekiq_pro_token,
            tags,
        })
    }
}
