//! Release event handling.
//!
//! Handling is split in two: [`plan_release`] decides whether an event needs
//! an update task (and only then asks for the task configuration), and
//! [`ReleasePlan::execute`] hands the request to a launcher.

use serde::Serialize;
use tracing::info;

use crate::config::TaskConfig;
use crate::error::ConsumerResult;
use crate::launcher::{LaunchReceipt, TaskLauncher};
use crate::release::ReleaseEvent;
use crate::task::RunTaskRequest;

/// What happened to a release event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ReleaseOutcome {
    /// Snapshot build; nothing launched.
    Skipped { version: String },

    /// Update task launched.
    Triggered {
        request: RunTaskRequest,
        receipt: LaunchReceipt,
    },
}

impl ReleaseOutcome {
    pub fn is_triggered(&self) -> bool {
        matches!(self, Self::Triggered { .. })
    }
}

/// What should happen to a release event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReleasePlan {
    Skip { version: String },
    Launch(RunTaskRequest),
}

impl ReleasePlan {
    pub fn needs_launch(&self) -> bool {
        matches!(self, Self::Launch(_))
    }

    /// Launch the planned request. A `Skip` plan never touches `launcher`.
    pub async fn execute(self, launcher: &dyn TaskLauncher) -> ConsumerResult<ReleaseOutcome> {
        match self {
            Self::Skip { version } => Ok(ReleaseOutcome::Skipped { version }),
            Self::Launch(request) => {
                let receipt = launcher.launch(&request).await?;
                Ok(ReleaseOutcome::Triggered { request, receipt })
            }
        }
    }
}

/// Validate `event` and decide what to do with it.
///
/// `load_config` is only called for non-snapshot events, so snapshots are
/// skipped even where no task configuration is available.
pub fn plan_release<F>(event: &ReleaseEvent, load_config: F) -> ConsumerResult<ReleasePlan>
where
    F: FnOnce() -> ConsumerResult<TaskConfig>,
{
    event.validate()?;

    if event.is_snapshot() {
        info!(version = %event.version, "skipping SNAPSHOT version");
        return Ok(ReleasePlan::Skip {
            version: event.version.clone(),
        });
    }

    let config = load_config()?;
    info!(
        version = %event.version,
        artifact_id = %event.artifact_id,
        "triggering task to create pull request"
    );

    Ok(ReleasePlan::Launch(RunTaskRequest::for_release(
        &config, event,
    )))
}

/// Launch the update task for `event`, unless it is a snapshot.
pub async fn handle_release(
    event: &ReleaseEvent,
    config: &TaskConfig,
    launcher: &dyn TaskLauncher,
) -> ConsumerResult<ReleaseOutcome> {
    plan_release(event, || Ok(config.clone()))?
        .execute(launcher)
        .await
}
