//! Error types for the editing core.
//!
//! Boundary conditions reached through normal cursor movement (left at the
//! start of the buffer, delete at the end, and so on) are silent no-ops and
//! never produce these errors. The variants below cover misuse of the typed
//! APIs: addressing the buffer outside its bounds, or releasing a key the
//! repeat controller never armed.

use thiserror::Error;

/// Errors reported by the buffer and repeat-controller APIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EditError {
    /// A (line, column) address outside the buffer's valid range.
    #[error("position out of range: line {line}, column {column}")]
    OutOfRange { line: usize, column: usize },

    /// A key release arrived for a key that is not in the armed set.
    #[error("key release without a matching armed key")]
    InvalidTransition,
}
