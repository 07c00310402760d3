//! Webhook delivery over blocking HTTP.

use rocksteady_common::error::{Result, RocksteadyError};
use rocksteady_context::DeployContext;

use crate::payload::Envelope;

/// Gateway header carrying the Cloudflare Access client ID.
pub const GATEWAY_ID_HEADER: &str = "CF-Access-Client-Id";
/// Gateway header carrying the Cloudflare Access client secret.
pub const GATEWAY_SECRET_HEADER: &str = "CF-Access-Client-Secret";

/// Capability interface for delivering a deploy notification.
///
/// Production wiring is [`HttpSink`]; tests substitute an in-memory fake.
pub trait WebhookSink {
    /// Delivers the envelope to the server's webhook endpoint. Exactly one
    /// attempt is made.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx response.
    fn post(&self, ctx: &DeployContext, envelope: &Envelope) -> Result<()>;
}

/// Blocking `reqwest`-backed webhook sink.
#[derive(Debug)]
pub struct HttpSink {
    client: reqwest::blocking::Client,
}

impl HttpSink {
    /// Builds the HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`RocksteadyError::MissingDependency`] when the client cannot
    /// be constructed (e.g. TLS backend initialisation failure).
    pub fn ensure_available() -> Result<Self> {
        let client = reqwest::blocking::Client::builder().build().map_err(|_| {
            RocksteadyError::MissingDependency {
                tool: "http client".into(),
            }
        })?;
        Ok(Self { client })
    }
}

impl WebhookSink for HttpSink {
    fn post(&self, ctx: &DeployContext, envelope: &Envelope) -> Result<()> {
        let url = format!("{}/webhook", ctx.server_url);
        tracing::info!(%url, "posting deploy notification");

        let mut request = self.client.post(&url).json(envelope);
        if let Some(id) = &ctx.gateway_client_id {
            request = request.header(GATEWAY_ID_HEADER, id);
        }
        if let Some(secret) = &ctx.gateway_client_secret {
            request = request.header(GATEWAY_SECRET_HEADER, secret);
        }

        let response = request.send().map_err(|e| RocksteadyError::Webhook {
            url: url.clone(),
            message: e.to_string(),
        })?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(status = status.as_u16(), "deploy notification accepted");
            Ok(())
        } else {
            Err(RocksteadyError::Webhook {
                url,
                message: format!("server responded with {status}"),
            })
        }
    }
}
