//! `rocksteady deploy` — Announce a finished build to the deploy server.

use clap::Args;

use rocksteady_common::env::ProcessEnv;
use rocksteady_common::error::Result;
use rocksteady_context::{DeployContext, SharedContext};
use rocksteady_webhook::{Envelope, HttpSink, WebhookSink};

const BOLD: &str = "\x1b[1m";
const GREEN: &str = "\x1b[32m";
const RESET: &str = "\x1b[0m";

/// Arguments for the `deploy` command.
#[derive(Args, Debug)]
pub struct DeployArgs {
    /// Deploy server base URL; falls back to ROCKSTEADY_SERVER when omitted.
    pub server_url: Option<String>,
}

/// Executes the `deploy` command against the real environment and HTTP sink.
///
/// # Errors
///
/// Returns an error when configuration is missing, the HTTP client cannot be
/// constructed, or the webhook request fails.
pub fn execute(args: DeployArgs) -> Result<()> {
    let env = ProcessEnv;
    let shared = SharedContext::from_source(&env)?;
    let sink = HttpSink::ensure_available()?;
    let ctx = DeployContext::from_source(shared, args.server_url.as_deref(), &env)?;
    run(&sink, &ctx)
}

/// Builds the notification payload and delivers it in a single attempt.
///
/// # Errors
///
/// Propagates the webhook delivery failure.
pub fn run(sink: &impl WebhookSink, ctx: &DeployContext) -> Result<()> {
    let envelope = Envelope::build_finished(
        &ctx.shared.build_number,
        &ctx.shared.branch,
        &ctx.shared.project_name,
    );
    sink.post(ctx, &envelope)?;

    eprintln!(
        "  {GREEN}{BOLD}Notified{RESET} {} of {} build {}",
        ctx.server_url, ctx.shared.project_name, ctx.shared.build_number
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use rocksteady_common::error::RocksteadyError;

    use super::*;

    /// Sink fake that records delivered envelopes and optionally fails.
    struct FakeSink {
        delivered: RefCell<Vec<Envelope>>,
        attempts: RefCell<u32>,
        fail: bool,
    }

    impl FakeSink {
        fn new(fail: bool) -> Self {
            Self {
                delivered: RefCell::new(Vec::new()),
                attempts: RefCell::new(0),
                fail,
            }
        }
    }

    impl WebhookSink for FakeSink {
        fn post(&self, ctx: &DeployContext, envelope: &Envelope) -> Result<()> {
            *self.attempts.borrow_mut() += 1;
            if self.fail {
                return Err(RocksteadyError::Webhook {
                    url: format!("{}/webhook", ctx.server_url),
                    message: "server responded with 502 Bad Gateway".into(),
                });
            }
            self.delivered.borrow_mut().push(envelope.clone());
            Ok(())
        }
    }

    fn context() -> DeployContext {
        let env: HashMap<String, String> = [
            ("CIRCLE_PROJECT_REPONAME", "app"),
            ("CIRCLE_BUILD_NUM", "42"),
            ("CIRCLE_BRANCH", "feature/x"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        let shared = SharedContext::from_source(&env).expect("shared context failed");
        DeployContext::from_source(shared, Some("https://deploy.example.com"), &env)
            .expect("deploy context failed")
    }

    #[test]
    fn delivers_the_build_finished_envelope() {
        let sink = FakeSink::new(false);
        let ctx = context();
        run(&sink, &ctx).expect("deploy failed");

        let delivered = sink.delivered.borrow();
        assert_eq!(delivered.len(), 1);
        let payload = &delivered[0].payload;
        assert_eq!(payload.outcome, "success");
        assert_eq!(payload.lifecycle, "finished");
        assert_eq!(payload.build_num, serde_json::Value::from(42u64));
        assert_eq!(payload.branch, "feature/x");
        assert_eq!(payload.repository_name, "app");
    }

    #[test]
    fn delivery_failure_propagates_after_a_single_attempt() {
        let sink = FakeSink::new(true);
        let ctx = context();
        let err = run(&sink, &ctx).expect_err("deploy should fail");
        assert_eq!(err.exit_code(), 1);
        assert_eq!(*sink.attempts.borrow(), 1);
    }
}
