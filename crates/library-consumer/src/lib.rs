//! Downstream consumer of the shared library.
//!
//! This crate depends on `shared-library` through a normal, statically
//! checked dependency:
//!
//! - a smoke test (`tests/shared_library_smoke.rs`) and [`run_smoke_check`]
//!   that fail when the library's output changes
//! - release handling that launches an update task whenever a new,
//!   non-snapshot library version is published
//!
//! # Quick Start
//!
//! ```no_run
//! use library_consumer::{handle_release, DryRunLauncher, ReleaseEvent, TaskConfig};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = TaskConfig::from_env()?;
//! let event = ReleaseEvent::from_json(r#"{"artifactId": "shared-library", "version": "1.0.1"}"#)?;
//!
//! let outcome = handle_release(&event, &config, &DryRunLauncher).await?;
//! println!("triggered: {}", outcome.is_triggered());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod handler;
pub mod launcher;
pub mod release;
pub mod smoke;
pub mod task;

pub use config::{LauncherConfig, TaskConfig};
pub use error::{ConsumerError, ConsumerResult};
pub use handler::{handle_release, plan_release, ReleaseOutcome, ReleasePlan};
pub use launcher::{DryRunLauncher, HttpTaskLauncher, LaunchReceipt, TaskLauncher};
pub use release::{ReleaseEvent, SNAPSHOT_MARKER};
pub use smoke::{check_greeting, run_smoke_check, SmokeOutcome, EXPECTED_GREETING};
pub use task::{ContainerOverride, EnvironmentVariable, RunTaskRequest, LAUNCH_TYPE};
