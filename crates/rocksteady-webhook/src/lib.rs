//! # rocksteady-webhook
//!
//! Deploy notification for the `deploy` subcommand: the JSON payload model
//! and a blocking HTTP sink that delivers it to the deploy coordination
//! server's `/webhook` endpoint. One attempt, no retry.

pub mod client;
pub mod payload;

pub use client::{HttpSink, WebhookSink};
pub use payload::{BuildEvent, Envelope};
