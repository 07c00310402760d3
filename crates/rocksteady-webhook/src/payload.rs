//! Deploy notification payload model.
//!
//! The wire shape mirrors what the deploy server expects from a CI webhook:
//!
//! ```json
//! {"payload":{"outcome":"success","lifecycle":"finished",
//!   "build_num":42,"branch":"master","repository_name":"app"}}
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Inner build event carried by the webhook envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildEvent {
    /// Build outcome; always `"success"` (failed builds never notify).
    pub outcome: String,
    /// Build lifecycle phase; always `"finished"`.
    pub lifecycle: String,
    /// CI build number. A JSON number when the build number is an integer,
    /// a string otherwise.
    pub build_num: Value,
    /// Branch that was built.
    pub branch: String,
    /// Name of the repository that was built.
    pub repository_name: String,
}

/// Top-level webhook envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// The build event being announced.
    pub payload: BuildEvent,
}

impl Envelope {
    /// Builds the notification for a finished, successful build.
    ///
    /// Pure function of its three inputs; field values are carried through
    /// serde, so branch and project names containing quotes still serialize
    /// to valid JSON.
    #[must_use]
    pub fn build_finished(build_number: &str, branch: &str, project_name: &str) -> Self {
        // CI build numbers are numeric in practice; fall back to a string
        // rather than emitting invalid JSON for an odd value.
        let build_num = build_number
            .parse::<u64>()
            .map_or_else(|_| Value::from(build_number), Value::from);
        Self {
            payload: BuildEvent {
                outcome: "success".to_string(),
                lifecycle: "finished".to_string(),
                build_num,
                branch: branch.to_string(),
                repository_name: project_name.to_string(),
            },
        }
    }
}
