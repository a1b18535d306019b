use super::args::*;

pub mod release;
pub mod smoke;

pub async fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    match cli.cmd {
        Command::Smoke(args) => smoke::run(args),
        Command::HandleRelease(args) => release::run(args).await,
    }
}
