//! `docker`-backed registry implementation.
//!
//! Login pipes `aws ecr get-login-password` into `docker login
//! --password-stdin`; build and push run `docker` directly with inherited
//! stdio so the CI log carries the tool's own output.

use std::io::Write;
use std::process::{Command, Stdio};

use rocksteady_common::error::{Result, RocksteadyError};
use rocksteady_context::BuildContext;

use crate::ImageRegistry;

/// Registry operations implemented by shelling out to the `docker` CLI.
#[derive(Debug, Clone, Copy)]
pub struct DockerCli;

impl DockerCli {
    /// Probes for the `docker` binary and returns the implementation.
    ///
    /// # Errors
    ///
    /// Returns [`RocksteadyError::MissingDependency`] when `docker` is not
    /// on PATH.
    pub fn ensure_available() -> Result<Self> {
        let _ = which::which("docker").map_err(|_| RocksteadyError::MissingDependency {
            tool: "docker".into(),
        })?;
        Ok(Self)
    }
}

impl ImageRegistry for DockerCli {
    fn login(&self, ctx: &BuildContext) -> Result<()> {
        tracing::info!(registry = %ctx.ecr_base, repo = %ctx.ecr_repo, region = %ctx.aws_region, "logging in to registry");

        let output = Command::new("aws")
            .args(["ecr", "get-login-password", "--region", &ctx.aws_region])
            .env("AWS_ACCESS_KEY_ID", &ctx.aws_access_key_id)
            .env("AWS_SECRET_ACCESS_KEY", &ctx.aws_secret_access_key)
            .stderr(Stdio::inherit())
            .output()
            .map_err(|e| RocksteadyError::Spawn {
                program: "aws".into(),
                source: e,
            })?;
        if !output.status.success() {
            return Err(RocksteadyError::CommandFailed {
                program: "aws ecr get-login-password".into(),
                code: output.status.code(),
            });
        }

        let mut child = Command::new("docker")
            .args(["login", "--username", "AWS", "--password-stdin", &ctx.ecr_base])
            .stdin(Stdio::piped())
            .spawn()
            .map_err(|e| RocksteadyError::Spawn {
                program: "docker".into(),
                source: e,
            })?;
        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(&output.stdout)
                .map_err(|e| RocksteadyError::Spawn {
                    program: "docker login".into(),
                    source: e,
                })?;
        }
        let status = child.wait().map_err(|e| RocksteadyError::Spawn {
            program: "docker login".into(),
            source: e,
        })?;
        check_status("docker login", status)
    }

    fn build(&self, ctx: &BuildContext) -> Result<()> {
        let args = build_args(&ctx.tags, ctx.sidekiq_pro_token.as_deref());
        tracing::info!(tag_count = ctx.tags.len(), "building image");

        let status = Command::new("docker")
            .args(&args)
            .status()
            .map_err(|e| RocksteadyError::Spawn {
                program: "docker".into(),
                source: e,
            })?;
        check_status("docker build", status)
    }

    fn push(&self, tag: &str) -> Result<()> {
        tracing::info!(%tag, "pushing tag");

        let status = Command::new("docker")
            .args(["push", tag])
            .status()
            .map_err(|e| RocksteadyError::Spawn {
                program: "docker".into(),
                source: e,
            })?;
        check_status("docker push", status)
    }
}

/// Assembles the `docker build` argument list for a tag set.
///
/// Every tag is attached with `-t`; the optional token is forwarded verbatim
/// as a build argument; the build context is the current directory.
#[must_use]
pub fn build_args(tags: &[String], sidekiq_pro_token: Option<&str>) -> Vec<String> {
    let mut args = vec!["build".to_string()];
    for tag in tags {
        args.push("-t".to_string());
        args.push(tag.clone());
    }
    if let Some(token) = sidekiq_pro_token {
        args.push("--build-arg".to_string());
        args.push(format!("SIDEKIQ_PRO_TOKEN={token}"));
    }
    args.push(".".to_string());
    args
}

fn check_status(program: &str, status: std::process::ExitStatus) -> Result<()> {
    if status.success() {
        Ok(())
    } else {
        Err(RocksteadyError::CommandFailed {
            program: program.into(),
            code: status.code(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags() -> Vec<String> {
        vec![
            "registry.example.com/app:build-42".to_string(),
            "registry.example.com/app:master-latest".to_string(),
        ]
    }

    #[test]
    fn build_args_attach_every_tag_in_order() {
        let args = build_args(&tags(), None);
        assert_eq!(
            args,
            vec![
                "build",
                "-t",
                "registry.example.com/app:build-42",
                "-t",
                "registry.example.com/app:master-latest",
                ".",
            ]
        );
    }

    #[test]
    fn build_args_forward_the_token_verbatim() {
        let args = build_args(&tags(), Some("tok-123"));
        let pos = args
            .iter()
            .position(|a| a == "--build-arg")
            .expect("build-arg missing");
        assert_eq!(args[pos + 1], "SIDEKIQ_PRO_TOKEN=tok-123");
        assert_eq!(args.last().map(String::as_str), Some("."));
    }

    #[test]
    fn build_args_omit_the_token_when_absent() {
        let args = build_args(&tags(), None);
        assert!(!args.iter().any(|a| a == "--build-arg"));
    }
}
