//! Environment-variable resolution with ordered fallback chains.
//!
//! The process environment is the tool's only configuration source. It is
//! hidden behind [`ConfigSource`] so resolution stays a pure function of the
//! injected source, which keeps every fallback chain testable with a plain
//! `HashMap`.

use std::collections::HashMap;

use crate::error::{Result, RocksteadyError};

/// A source of named configuration values.
///
/// Production code injects [`ProcessEnv`]; tests inject a `HashMap`.
pub trait ConfigSource {
    /// Returns the raw value for `name`, or `None` if it is unset.
    fn get(&self, name: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl ConfigSource for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl ConfigSource for HashMap<String, String> {
    fn get(&self, name: &str) -> Option<String> {
        HashMap::get(self, name).cloned()
    }
}

/// Resolves a required value from an ordered fallback chain.
///
/// Candidates are consulted in order; the first one whose value is non-empty
/// wins. Unset and empty are treated identically.
///
/// # Errors
///
/// Returns [`RocksteadyError::MissingConfiguration`] naming every candidate
/// tried when the whole chain resolves empty.
pub fn require(source: &dyn ConfigSource, names: &[&'static str]) -> Result<String> {
    names
        .iter()
        .find_map(|name| source.get(name).filter(|value| !value.is_empty()))
        .ok_or_else(|| RocksteadyError::MissingConfiguration {
            names: names.to_vec(),
        })
}

/// Resolves an optional value: `None` when unset or empty.
pub fn optional(source: &dyn ConfigSource, name: &str) -> Option<String> {
    source.get(name).filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn require_prefers_the_first_candidate() {
        let env = source(&[("OVERRIDE", "from-override"), ("DEFAULT", "from-default")]);
        let value = require(&env, &["OVERRIDE", "DEFAULT"]).expect("resolve failed");
        assert_eq!(value, "from-override");
    }

    #[test]
    fn require_falls_back_when_earlier_candidates_are_unset() {
        let env = source(&[("DEFAULT", "from-default")]);
        let value = require(&env, &["OVERRIDE", "DEFAULT"]).expect("resolve failed");
        assert_eq!(value, "from-default");
    }

    #[test]
    fn require_treats_empty_values_as_absent() {
        let env = source(&[("OVERRIDE", ""), ("DEFAULT", "from-default")]);
        let value = require(&env, &["OVERRIDE", "DEFAULT"]).expect("resolve failed");
        assert_eq!(value, "from-default");
    }

    #[test]
    fn require_reports_every_candidate_when_all_are_missing() {
        let env = source(&[]);
        let err = require(&env, &["OVERRIDE", "DEFAULT"]).expect_err("should be missing");
        match err {
            RocksteadyError::MissingConfiguration { names } => {
                assert_eq!(names, vec!["OVERRIDE", "DEFAULT"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn optional_returns_none_for_unset_or_empty() {
        let env = source(&[("EMPTY", "")]);
        assert_eq!(optional(&env, "EMPTY"), None);
        assert_eq!(optional(&env, "UNSET"), None);
    }

    #[test]
    fn optional_returns_nonempty_values() {
        let env = source(&[("TOKEN", "abc123")]);
        assert_eq!(optional(&env, "TOKEN").as_deref(), Some("abc123"));
    }
}
