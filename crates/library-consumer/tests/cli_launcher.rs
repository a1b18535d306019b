//! CLI release handling against a mock launch endpoint.
//!
//! The binary is run on a blocking thread while wiremock serves requests.

use std::io::Write;
use std::process::Output;

use assert_cmd::Command;
use serde_json::json;
use tempfile::NamedTempFile;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TASK_ENV: [(&str, &str); 7] = [
    ("TASK_DEFINITION_ARN", "arn:task-def/updater:1"),
    ("CLUSTER_ARN", "arn:cluster/consumer"),
    ("TASK_SUBNETS", "subnet-a"),
    ("CONTAINER_NAME", "PullRequestCreatorContainer"),
    ("REPO_URL", "https://git.example.com/DownstreamArtifact"),
    ("REPO_NAME", "DownstreamArtifact"),
    ("REPO_REGION", "eu-west-1"),
];

const LAUNCHER_ENV: [&str; 5] = [
    "TASK_LAUNCHER_URL",
    "TASK_LAUNCHER_TOKEN",
    "TASK_LAUNCHER_TIMEOUT",
    "TASK_LAUNCHER_MAX_RETRIES",
    "TASK_LAUNCHER_RETRY_BACKOFF_MS",
];

fn release_event(version: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"artifactId": "shared-library", "version": "{}"}}"#,
        version
    )
    .unwrap();
    file
}

async fn run_handle_release(event: &NamedTempFile, env: Vec<(&'static str, String)>) -> Output {
    let event_path = event.path().to_path_buf();
    tokio::task::spawn_blocking(move || {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_library-consumer"));
        for key in LAUNCHER_ENV {
            cmd.env_remove(key);
        }
        cmd.envs(TASK_ENV)
            .envs(env)
            .args(["handle-release", "--event"])
            .arg(event_path)
            .output()
            .expect("failed to run binary")
    })
    .await
    .expect("blocking task panicked")
}

#[tokio::test(flavor = "multi_thread")]
async fn launcher_max_retries_zero_sends_one_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/run-task"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let event = release_event("1.0.1");
    let output = run_handle_release(
        &event,
        vec![
            ("TASK_LAUNCHER_URL", mock_server.uri()),
            ("TASK_LAUNCHER_MAX_RETRIES", "0".to_string()),
        ],
    )
    .await;

    assert_eq!(output.status.code(), Some(5));
    assert_eq!(mock_server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn launcher_retry_settings_come_from_env() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/run-task"))
        .respond_with(ResponseTemplate::new(503))
        .expect(2)
        .mount(&mock_server)
        .await;

    let event = release_event("1.0.1");
    let output = run_handle_release(
        &event,
        vec![
            ("TASK_LAUNCHER_URL", mock_server.uri()),
            ("TASK_LAUNCHER_MAX_RETRIES", "1".to_string()),
            ("TASK_LAUNCHER_RETRY_BACKOFF_MS", "1".to_string()),
        ],
    )
    .await;

    assert_eq!(output.status.code(), Some(5));
    assert_eq!(mock_server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test(flavor = "multi_thread")]
async fn launcher_success_prints_task_arns() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/run-task"))
        .and(header("authorization", "Bearer cli-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tasks": [{"taskArn": "arn:task/consumer/cli"}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let event = release_event("1.0.1");
    let output = run_handle_release(
        &event,
        vec![
            ("TASK_LAUNCHER_URL", mock_server.uri()),
            ("TASK_LAUNCHER_TOKEN", "cli-token".to_string()),
        ],
    )
    .await;

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout).unwrap();
    let outcome: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(outcome["outcome"], "triggered");
    assert_eq!(outcome["receipt"]["taskArns"], json!(["arn:task/consumer/cli"]));
}

#[tokio::test(flavor = "multi_thread")]
async fn snapshot_release_never_contacts_launcher() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let event = release_event("1.0.2-SNAPSHOT");
    let output = run_handle_release(&event, vec![("TASK_LAUNCHER_URL", mock_server.uri())]).await;

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("\"outcome\": \"skipped\""));
}
