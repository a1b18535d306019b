//! Update task configuration.
//!
//! # Environment
//!
//! | Variable | Description |
//! |----------|-------------|
//! | `TASK_DEFINITION_ARN` | Task definition to run |
//! | `CLUSTER_ARN` | Cluster to run the task in |
//! | `TASK_SUBNETS` | Comma-separated subnet IDs |
//! | `CONTAINER_NAME` | Container to apply overrides to |
//! | `REPO_URL` | Clone URL of the downstream repository |
//! | `REPO_NAME` | Name of the downstream repository |
//! | `REPO_REGION` | Region of the downstream repository |

use serde::{Deserialize, Serialize};

use crate::error::{ConsumerError, ConsumerResult};

/// Where and how the update task is launched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskConfig {
    pub task_definition_arn: String,
    pub cluster_arn: String,
    pub subnets: Vec<String>,
    pub container_name: String,
    pub repo_url: String,
    pub repo_name: String,
    pub repo_region: String,
}

impl TaskConfig {
    /// Load from the process environment.
    pub fn from_env() -> ConsumerResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> ConsumerResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| -> ConsumerResult<String> {
            match lookup(key) {
                Some(value) if !value.trim().is_empty() => Ok(value),
                _ => Err(ConsumerError::Config {
                    message: format!("{} is not set", key),
                }),
            }
        };

        let subnets = parse_subnets(&required("TASK_SUBNETS")?);
        if subnets.is_empty() {
            return Err(ConsumerError::Config {
                message: "TASK_SUBNETS contains no subnet IDs".to_string(),
            });
        }

        Ok(Self {
            task_definition_arn: required("TASK_DEFINITION_ARN")?,
            cluster_arn: required("CLUSTER_ARN")?,
            subnets,
            container_name: required("CONTAINER_NAME")?,
            repo_url: required("REPO_URL")?,
            repo_name: required("REPO_NAME")?,
            repo_region: required("REPO_REGION")?,
        })
    }
}

/// HTTP task launcher configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LauncherConfig {
    /// Base URL of the task launch endpoint.
    pub url: String,

    /// Bearer token.
    #[serde(default)]
    pub token: Option<String>,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Maximum retries for transient failures.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Base delay for exponential backoff, in milliseconds.
    #[serde(default = "default_retry_backoff_ms")]
    pub retry_backoff_ms: u64,
}

fn default_timeout() -> u64 {
    30
}

fn default_max_retries() -> u32 {
    3
}

fn default_retry_backoff_ms() -> u64 {
    1000
}

impl LauncherConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            token: None,
            timeout_secs: default_timeout(),
            max_retries: default_max_retries(),
            retry_backoff_ms: default_retry_backoff_ms(),
        }
    }

    /// Create config from environment variables.
    ///
    /// | Variable | Description |
    /// |----------|-------------|
    /// | `TASK_LAUNCHER_URL` | Launch endpoint base URL (required) |
    /// | `TASK_LAUNCHER_TOKEN` | Bearer token |
    /// | `TASK_LAUNCHER_TIMEOUT` | Request timeout in seconds (default: 30) |
    /// | `TASK_LAUNCHER_MAX_RETRIES` | Max retries (default: 3) |
    /// | `TASK_LAUNCHER_RETRY_BACKOFF_MS` | Base retry delay in milliseconds (default: 1000) |
    pub fn from_env() -> ConsumerResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`LauncherConfig::from_env`], using an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> ConsumerResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup("TASK_LAUNCHER_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConsumerError::Config {
                message: "TASK_LAUNCHER_URL is not set".to_string(),
            })?;

        Ok(Self {
            url,
            token: lookup("TASK_LAUNCHER_TOKEN").filter(|v| !v.is_empty()),
            timeout_secs: lookup("TASK_LAUNCHER_TIMEOUT")
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_timeout),
            max_retries: lookup("TASK_LAUNCHER_MAX_RETRIES")
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_max_retries),
            retry_backoff_ms: lookup("TASK_LAUNCHER_RETRY_BACKOFF_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_retry_backoff_ms),
        })
    }

    /// Set the token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the base URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_retry_backoff_ms(mut self, backoff_ms: u64) -> Self {
        self.retry_backoff_ms = backoff_ms;
        self
    }
}

fn parse_subnets(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
