//! Interaction ports
//!
//! The whole UI boundary of the engine: a confirmation callback and a
//! progress-label sink. Callers plug in whatever surface they have - a
//! terminal prompt, an editor dialog, or a scripted answer in tests.

/// Blocking confirmation port
pub trait Prompt {
    /// Ask the user to confirm; `detail` carries context worth reading
    /// before answering
    fn confirm(&self, message: &str, detail: &str) -> bool;
}

/// Progress-label sink
///
/// Purely informational; implementations must not block.
pub trait Progress {
    /// Show a short label for the step currently running
    fn set_label(&self, label: &str);
}

/// Prompt that answers yes to everything (`--yes` scripting mode)
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeYes;

impl Prompt for AssumeYes {
    fn confirm(&self, _message: &str, _detail: &str) -> bool {
        true
    }
}

/// Progress sink that forwards labels to the log
#[derive(Debug, Clone, Copy, Default)]
pub struct LogProgress;

impl Progress for LogProgress {
    fn set_label(&self, label: &str) {
        log::info!("{label}");
    }
}
