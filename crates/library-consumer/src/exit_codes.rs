//! Exit codes for the `library-consumer` binary.
//! Errors from the library map through `ConsumerError::exit_code` (2..=6).

pub const SUCCESS: i32 = 0;
pub const SMOKE_FAILED: i32 = 1; // Shared library returned an unexpected value
pub const INTERNAL_ERROR: i32 = 2;
