//! Task launchers.
//!
//! A [`TaskLauncher`] takes a [`RunTaskRequest`] and starts the update task.
//! [`HttpTaskLauncher`] posts the request to a launch endpoint;
//! [`DryRunLauncher`] only logs it.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, USER_AGENT};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::LauncherConfig;
use crate::error::{ConsumerError, ConsumerResult};
use crate::task::RunTaskRequest;

/// User agent for launch requests.
const USER_AGENT_VALUE: &str = concat!("library-consumer/", env!("CARGO_PKG_VERSION"));

/// Upper bound on a single retry delay.
const MAX_BACKOFF: Duration = Duration::from_secs(30);

/// What a launcher reports back after starting a task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchReceipt {
    pub task_arns: Vec<String>,
}

/// Starts update tasks.
#[async_trait]
pub trait TaskLauncher: Send + Sync {
    async fn launch(&self, request: &RunTaskRequest) -> ConsumerResult<LaunchReceipt>;
}

/// Logs the request and launches nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunLauncher;

#[async_trait]
impl TaskLauncher for DryRunLauncher {
    async fn launch(&self, request: &RunTaskRequest) -> ConsumerResult<LaunchReceipt> {
        info!(
            task_definition = %request.task_definition,
            cluster = %request.cluster,
            "dry run: not launching task"
        );
        Ok(LaunchReceipt::default())
    }
}

/// Response body of the launch endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RunTaskResponse {
    #[serde(default)]
    tasks: Vec<LaunchedTask>,
    #[serde(default)]
    failures: Vec<LaunchFailure>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LaunchedTask {
    task_arn: String,
}

#[derive(Debug, Clone, Deserialize)]
struct LaunchFailure {
    #[serde(default)]
    arn: Option<String>,
    #[serde(default)]
    reason: Option<String>,
}

/// Launches tasks by POSTing to `{url}/run-task`.
#[derive(Debug, Clone)]
pub struct HttpTaskLauncher {
    client: reqwest::Client,
    endpoint: String,
    config: LauncherConfig,
}

impl HttpTaskLauncher {
    pub fn new(config: LauncherConfig) -> ConsumerResult<Self> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(default_headers)
            .build()
            .map_err(|e| ConsumerError::Network {
                message: format!("failed to create HTTP client: {}", e),
            })?;

        let endpoint = format!("{}/run-task", config.url.trim_end_matches('/'));

        Ok(Self {
            client,
            endpoint,
            config,
        })
    }

    pub fn from_env() -> ConsumerResult<Self> {
        Self::new(LauncherConfig::from_env()?)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn backoff(&self, retry: u32) -> Duration {
        let factor = 1u64 << retry.min(16);
        Duration::from_millis(self.config.retry_backoff_ms.saturating_mul(factor)).min(MAX_BACKOFF)
    }

    async fn launch_once(&self, request: &RunTaskRequest) -> ConsumerResult<LaunchReceipt> {
        let mut builder = self.client.post(&self.endpoint).json(request);
        if let Some(token) = &self.config.token {
            builder = builder.header(AUTHORIZATION, format!("Bearer {}", token));
        }

        let response = builder.send().await?;
        let status = response.status();

        match status.as_u16() {
            200..=299 => {}
            401 | 403 => {
                return Err(ConsumerError::Unauthorized {
                    message: format!("launch endpoint returned {}", status),
                })
            }
            429 | 500..=599 => {
                return Err(ConsumerError::Network {
                    message: format!("launch endpoint returned {}", status),
                })
            }
            _ => {
                let body = response.text().await.unwrap_or_default();
                return Err(ConsumerError::Launch {
                    message: format!("launch endpoint returned {}: {}", status, body),
                });
            }
        }

        let body: RunTaskResponse = response.json().await.map_err(|e| ConsumerError::Launch {
            message: format!("invalid launch response: {}", e),
        })?;

        if !body.failures.is_empty() {
            let reasons: Vec<String> = body
                .failures
                .iter()
                .map(|f| {
                    format!(
                        "{}: {}",
                        f.arn.as_deref().unwrap_or("<unknown>"),
                        f.reason.as_deref().unwrap_or("no reason provided")
                    )
                })
                .collect();
            return Err(ConsumerError::Launch {
                message: reasons.join("; "),
            });
        }

        Ok(LaunchReceipt {
            task_arns: body.tasks.into_iter().map(|t| t.task_arn).collect(),
        })
    }
}

#[async_trait]
impl TaskLauncher for HttpTaskLauncher {
    async fn launch(&self, request: &RunTaskRequest) -> ConsumerResult<LaunchReceipt> {
        debug!(endpoint = %self.endpoint, "launching update task");

        let mut retries = 0;
        loop {
            match self.launch_once(request).await {
                Ok(receipt) => return Ok(receipt),
                Err(e) if e.is_retryable() && retries < self.config.max_retries => {
                    retries += 1;
                    let backoff = self.backoff(retries);
                    warn!(
                        error = %e,
                        retry = retries,
                        max_retries = self.config.max_retries,
                        backoff_ms = backoff.as_millis() as u64,
                        "retrying task launch"
                    );
                    tokio::time::sleep(backoff).await;
                }
                Err(e) => return Err(e),
            }
        }
    }
}
