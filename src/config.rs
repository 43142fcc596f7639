//! Engine configuration
//!
//! Configuration is threaded explicitly into the runner and the operation
//! façade; nothing in the engine reads settings ambiently.

/// Configuration shared by the command runner and the operation façade
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Path or name of the git executable to invoke
    pub git_binary: String,

    /// Echo each invoked command line into its captured output
    ///
    /// Display-only: the echoed line is never re-parsed.
    pub verbose: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            git_binary: "git".to_string(),
            verbose: false,
        }
    }
}

impl EngineConfig {
    /// Create a config with an explicit git binary
    #[must_use]
    pub fn with_binary(binary: impl Into<String>) -> Self {
        Self {
            git_binary: binary.into(),
            ..Self::default()
        }
    }
}
