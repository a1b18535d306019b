//! Library release events.
//!
//! A release event is emitted when a new version of the shared library is
//! published to the artifact repository. Only `artifactId` and `version` are
//! needed to trigger an update; the remaining fields are carried for logging.

use serde::{Deserialize, Serialize};

use crate::error::{ConsumerError, ConsumerResult};

/// Marker for pre-release builds that never trigger an update.
pub const SNAPSHOT_MARKER: &str = "SNAPSHOT";

/// A published library version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseEvent {
    /// Package namespace (e.g., "com.amazon.aws.samples").
    #[serde(default)]
    pub group_id: Option<String>,

    /// Package name.
    #[serde(default)]
    pub artifact_id: String,

    /// Published version (e.g., "1.0.1" or "1.0.2-SNAPSHOT").
    #[serde(default)]
    pub version: String,

    /// Clone URL of the downstream repository.
    #[serde(default)]
    pub repo_url: Option<String>,

    /// Region the event originated in.
    #[serde(default)]
    pub region: Option<String>,
}

impl ReleaseEvent {
    pub fn new(artifact_id: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            group_id: None,
            artifact_id: artifact_id.into(),
            version: version.into(),
            repo_url: None,
            region: None,
        }
    }

    /// Parse and validate an event from JSON.
    pub fn from_json(input: &str) -> ConsumerResult<Self> {
        let event: Self =
            serde_json::from_str(input).map_err(|e| ConsumerError::InvalidEvent {
                message: e.to_string(),
            })?;
        event.validate()?;
        Ok(event)
    }

    /// Check that the fields needed to launch an update are present.
    pub fn validate(&self) -> ConsumerResult<()> {
        if self.artifact_id.trim().is_empty() {
            return Err(ConsumerError::InvalidEvent {
                message: "artifactId is required".to_string(),
            });
        }
        if self.version.trim().is_empty() {
            return Err(ConsumerError::InvalidEvent {
                message: "version is required".to_string(),
            });
        }
        Ok(())
    }

    /// Whether this is a snapshot build (case-sensitive substring match).
    pub fn is_snapshot(&self) -> bool {
        self.version.contains(SNAPSHOT_MARKER)
    }

    pub fn with_group_id(mut self, group_id: impl Into<String>) -> Self {
        self.group_id = Some(group_id.into());
        self
    }
}
