//! Shared library published for downstream consumers.
//!
//! The public surface is deliberately small: one entry type with one
//! zero-argument method. Downstream crates call it directly, so renaming or
//! retyping either is a breaking change they will see at compile time.

/// Entry point of the shared library.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SharedLibrary;

impl SharedLibrary {
    pub const fn new() -> Self {
        Self
    }

    /// Returns the library's greeting.
    pub fn shared_library_method(&self) -> String {
        "Hello World".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_new() {
        assert_eq!(SharedLibrary::default(), SharedLibrary::new());
    }

    #[test]
    fn test_method_returns_greeting() {
        assert_eq!(SharedLibrary::new().shared_library_method(), "Hello World");
    }
}
