//! Context for the `deploy` subcommand: target server and gateway
//! credentials.

use rocksteady_common::constants;
use rocksteady_common::env::{self, ConfigSource};
use rocksteady_common::error::Result;

use crate::shared::SharedContext;

/// Everything the `deploy` subcommand needs beyond [`SharedContext`].
#[derive(Debug, Clone)]
pub struct DeployContext {
    /// Shared CI fields.
    pub shared: SharedContext,
    /// Base URL of the deploy coordination server.
    pub server_url: String,
    /// Cloudflare Access client ID, when the server sits behind a gateway.
    pub gateway_client_id: Option<String>,
    /// Cloudflare Access client secret.
    pub gateway_client_secret: Option<String>,
}

impl DeployContext {
    /// Resolves the deploy context on top of an already-resolved shared
    /// context.
    ///
    /// A non-empty explicit `server_url` argument wins over the
    /// `ROCKSTEADY_SERVER` environment fallback.
    ///
    /// # Errors
    ///
    /// Returns `MissingConfiguration` when neither the argument nor the
    /// environment yields a server URL.
    pub fn from_source(
        shared: SharedContext,
        server_url_arg: Option<&str>,
        source: &dyn ConfigSource,
    ) -> Result<Self> {
        let server_url = match server_url_arg.filter(|url| !url.is_empty()) {
            Some(url) => url.to_string(),
            None => env::require(source, &[constants::ROCKSTEADY_SERVER])?,
        };
        let gateway_client_id = env::optional(source, constants::CF_ACCESSC_ID);
        let gateway_client_secret = env::optional(source, constants::CF_ACCESS_SECRET);

        tracing::debug!(
            %server_url,
            gateway = gateway_client_id.is_some(),
            "resolved deploy context"
        );

        Ok(Self {
            shared,
            server_url,
            gateway_client_id,
            gateway_client_secret,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rocksteady_common::error::RocksteadyError;

    use super::*;

    fn base_env() -> HashMap<String, String> {
        [
            ("CIRCLE_PROJECT_REPONAME", "app"),
            ("CIRCLE_BUILD_NUM", "42"),
            ("CIRCLE_BRANCH", "master"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    fn shared(env: &HashMap<String, String>) -> SharedContext {
        SharedContext::from_source(env).expect("shared context failed")
    }

    #[test]
    fn explicit_argument_wins_over_environment() {
        let mut env = base_env();
        drop(env.insert("ROCKSTEADY_SERVER".into(), "https://env.example.com".into()));
        let ctx = DeployContext::from_source(shared(&env), Some("https://arg.example.com"), &env)
            .expect("context failed");
        assert_eq!(ctx.server_url, "https://arg.example.com");
    }

    #[test]
    fn empty_argument_falls_through_to_environment() {
        let mut env = base_env();
        drop(env.insert("ROCKSTEADY_SERVER".into(), "https://env.example.com".into()));
        let ctx =
            DeployContext::from_source(shared(&env), Some(""), &env).expect("context failed");
        assert_eq!(ctx.server_url, "https://env.example.com");
    }

    #[test]
    fn missing_server_url_names_the_fallback_variable() {
        let env = base_env();
        let err =
            DeployContext::from_source(shared(&env), None, &env).expect_err("should be missing");
        match err {
            RocksteadyError::MissingConfiguration { names } => {
                assert_eq!(names, vec!["ROCKSTEADY_SERVER"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn gateway_credentials_are_optional_and_skip_empty() {
        let mut env = base_env();
        drop(env.insert("CF_ACCESSC_ID".into(), "client-id".into()));
        drop(env.insert("CF_ACCESS_SECRET".into(), String::new()));
        let ctx = DeployContext::from_source(shared(&env), Some("https://s.example.com"), &env)
            .expect("context failed");
        assert_eq!(ctx.gateway_client_id.as_deref(), Some("client-id"));
        assert_eq!(ctx.gateway_client_secret, None);
    }
}
