//! Runtime smoke check against the shared library.
//!
//! Mirrors the `test_shared_library` integration test but reports a mismatch
//! as a value instead of panicking, so the CLI can print it.

use serde::Serialize;
use shared_library::SharedLibrary;
use tracing::debug;

/// Value the shared library is expected to return.
pub const EXPECTED_GREETING: &str = "Hello World";

/// Result of a smoke check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SmokeOutcome {
    Passed,
    Failed { expected: String, actual: String },
}

impl SmokeOutcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, Self::Passed)
    }
}

/// Compare a greeting against [`EXPECTED_GREETING`] (exact, case-sensitive).
pub fn check_greeting(actual: &str) -> SmokeOutcome {
    if actual == EXPECTED_GREETING {
        SmokeOutcome::Passed
    } else {
        SmokeOutcome::Failed {
            expected: EXPECTED_GREETING.to_string(),
            actual: actual.to_string(),
        }
    }
}

/// Construct the library entry type, call it once, and compare.
pub fn run_smoke_check() -> SmokeOutcome {
    let message = SharedLibrary::new().shared_library_method();
    debug!(message = %message, "shared library responded");
    check_greeting(&message)
}
