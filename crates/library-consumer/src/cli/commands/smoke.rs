use library_consumer::{run_smoke_check, SmokeOutcome};

use crate::cli::args::SmokeArgs;
use crate::exit_codes::{SMOKE_FAILED, SUCCESS};

pub fn run(args: SmokeArgs) -> anyhow::Result<i32> {
    let outcome = run_smoke_check();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        match &outcome {
            SmokeOutcome::Passed => println!("shared library smoke check passed"),
            SmokeOutcome::Failed { expected, actual } => {
                println!("shared library smoke check FAILED: expected {expected:?}, got {actual:?}")
            }
        }
    }

    Ok(if outcome.is_passed() {
        SUCCESS
    } else {
        SMOKE_FAILED
    })
}
