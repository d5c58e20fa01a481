//! Error types for history navigation.

use derive_more::{Display, Error};
use tracing::instrument;

/// History navigation error with location tracking.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("History error: {} at {}:{}", message, file, line)]
pub struct HistoryError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl HistoryError {
    /// Creates a new history error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Step outside the recorded history.
    #[track_caller]
    pub fn step_out_of_range(step: usize, len: usize) -> Self {
        Self::new(format!(
            "Step {} is out of range (history has {} entries)",
            step, len
        ))
    }
}
