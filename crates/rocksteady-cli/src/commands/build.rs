//! `rocksteady build` — Build, tag, and push the container image.

use rocksteady_common::env::ProcessEnv;
use rocksteady_common::error::Result;
use rocksteady_context::{BuildContext, SharedContext};
use rocksteady_registry::docker::DockerCli;
use rocksteady_registry::ImageRegistry;

const BOLD: &str = "\x1b[1m";
const GREEN: &str = "\x1b[32m";
const RESET: &str = "\x1b[0m";

/// Executes the `build` command against the real environment and registry.
///
/// # Errors
///
/// Returns an error when configuration is missing, `docker` is not on PATH,
/// or login/build/push fails.
pub fn execute() -> Result<()> {
    let env = ProcessEnv;
    let shared = SharedContext::from_source(&env)?;
    let registry = DockerCli::ensure_available()?;
    let ctx = BuildContext::from_source(shared, &env)?;
    run(&registry, &ctx)
}

/// Runs the build pipeline: login, one build with every tag attached, then
/// one push per tag in list order. The first push failure aborts the
/// remainder; already-pushed tags stay pushed.
///
/// # Errors
///
/// Propagates the first failing registry operation.
pub fn run(registry: &impl ImageRegistry, ctx: &BuildContext) -> Result<()> {
    eprintln!(
        "  {BOLD}{}{RESET} build {} ({})",
        ctx.shared.project_name, ctx.shared.build_number, ctx.shared.branch
    );

    registry.login(ctx)?;
    registry.build(ctx)?;
    for tag in &ctx.tags {
        eprintln!("  pushing {tag}");
        registry.push(tag)?;
    }

    eprintln!("  {GREEN}{BOLD}Pushed{RESET} {} tag(s)", ctx.tags.len());
    Ok(())
}
