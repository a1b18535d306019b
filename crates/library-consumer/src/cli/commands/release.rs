use std::io::Read;
use std::path::Path;

use anyhow::Context as _;
use library_consumer::{
    plan_release, ConsumerError, ConsumerResult, DryRunLauncher, HttpTaskLauncher,
    LauncherConfig, ReleaseEvent, ReleaseOutcome, TaskConfig, TaskLauncher,
};

use crate::cli::args::HandleReleaseArgs;
use crate::exit_codes::SUCCESS;

pub async fn run(args: HandleReleaseArgs) -> anyhow::Result<i32> {
    match execute(&args).await {
        Ok(outcome) => {
            println!(
                "{}",
                serde_json::to_string_pretty(&outcome).context("serializing outcome")?
            );
            Ok(SUCCESS)
        }
        Err(e) => {
            eprintln!("error: {e}");
            Ok(e.exit_code())
        }
    }
}

async fn execute(args: &HandleReleaseArgs) -> ConsumerResult<ReleaseOutcome> {
    let event = ReleaseEvent::from_json(&read_event(&args.event)?)?;
    let plan = plan_release(&event, TaskConfig::from_env)?;

    let launcher: Box<dyn TaskLauncher> = if plan.needs_launch() && !args.dry_run {
        Box::new(HttpTaskLauncher::new(launcher_config(args)?)?)
    } else {
        Box::new(DryRunLauncher)
    };
    plan.execute(launcher.as_ref()).await
}

/// Launcher settings from the environment; `--launcher-url` wins over `TASK_LAUNCHER_URL`.
fn launcher_config(args: &HandleReleaseArgs) -> ConsumerResult<LauncherConfig> {
    LauncherConfig::from_lookup(|key| match key {
        "TASK_LAUNCHER_URL" => args
            .launcher_url
            .clone()
            .or_else(|| std::env::var(key).ok()),
        _ => std::env::var(key).ok(),
    })
}

fn read_event(path: &Path) -> ConsumerResult<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path).map_err(|e| ConsumerError::Io {
            message: format!("{}: {}", path.display(), e),
        })
    }
}
