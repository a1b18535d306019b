use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "library-consumer",
    version,
    about = "Downstream consumer of the shared library: smoke checks and release handling"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Check that the shared library still returns the expected greeting
    Smoke(SmokeArgs),
    /// Launch the update task for a library release event
    HandleRelease(HandleReleaseArgs),
}

#[derive(clap::Args, Clone)]
pub struct SmokeArgs {
    /// Print the outcome as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(clap::Args, Clone)]
pub struct HandleReleaseArgs {
    /// Release event JSON file ("-" for stdin)
    #[arg(long)]
    pub event: PathBuf,

    /// Build the request but do not launch anything
    #[arg(long)]
    pub dry_run: bool,

    /// Base URL of the task launch endpoint
    #[arg(long, env = "TASK_LAUNCHER_URL")]
    pub launcher_url: Option<String>,
}
