//! Run-task request types for the update task.

use serde::{Deserialize, Serialize};

use crate::config::TaskConfig;
use crate::release::ReleaseEvent;

/// Launch type used for update tasks.
pub const LAUNCH_TYPE: &str = "FARGATE";

/// Request to run one update task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunTaskRequest {
    pub launch_type: String,
    pub task_definition: String,
    pub cluster: String,
    pub network_configuration: NetworkConfiguration,
    pub overrides: TaskOverrides,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkConfiguration {
    pub awsvpc_configuration: AwsVpcConfiguration,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwsVpcConfiguration {
    pub subnets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskOverrides {
    pub container_overrides: Vec<ContainerOverride>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerOverride {
    pub name: String,
    pub environment: Vec<EnvironmentVariable>,
}

/// A single `name=value` environment override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentVariable {
    pub name: String,
    pub value: String,
}

impl EnvironmentVariable {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl RunTaskRequest {
    /// Build the request that updates the downstream repository to `event`'s version.
    ///
    /// The container receives, in order: `REPO_URL`, `REPO_NAME`,
    /// `REPO_REGION`, `ARTIFACT_VERSION`, `ARTIFACT_ID`.
    pub fn for_release(config: &TaskConfig, event: &ReleaseEvent) -> Self {
        let environment = vec![
            EnvironmentVariable::new("REPO_URL", &config.repo_url),
            EnvironmentVariable::new("REPO_NAME", &config.repo_name),
            EnvironmentVariable::new("REPO_REGION", &config.repo_region),
            EnvironmentVariable::new("ARTIFACT_VERSION", &event.version),
            EnvironmentVariable::new("ARTIFACT_ID", &event.artifact_id),
        ];

        Self {
            launch_type: LAUNCH_TYPE.to_string(),
            task_definition: config.task_definition_arn.clone(),
            cluster: config.cluster_arn.clone(),
            network_configuration: NetworkConfiguration {
                awsvpc_configuration: AwsVpcConfiguration {
                    subnets: config.subnets.clone(),
                },
            },
            overrides: TaskOverrides {
                container_overrides: vec![ContainerOverride {
                    name: config.container_name.clone(),
                    environment,
                }],
            },
        }
    }

    /// Look up an environment override on the first container.
    pub fn env_value(&self, name: &str) -> Option<&str> {
        self.overrides
            .container_overrides
            .first()?
            .environment
            .iter()
            .find(|var| var.name == name)
            .map(|var| var.value.as_str())
    }
}
