//! # rocksteady-common
//!
//! Shared error definitions, the environment-variable abstraction, and
//! constants used across the entire Rocksteady workspace.
//!
//! This crate is the leaf of the dependency graph — it depends on no other
//! internal crate and provides the foundational primitives that all other
//! crates build upon.

pub mod constants;
pub mod env;
pub mod error;

pub use error::{Result, RocksteadyError};
