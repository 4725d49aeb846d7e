//! Error kinds for the text editing core.

use thiserror::Error;

use super::cursor::Position;

/// Errors raised by buffer primitives, command validation and clipboard access.
///
/// User-facing engine commands never return `OutOfBounds` or `InvalidRange`:
/// they clamp before touching the buffer. Those two only surface from direct
/// [`LineBuffer`](super::LineBuffer) calls.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("position out of bounds: row {row}, column {column}")]
    OutOfBounds { row: usize, column: usize },

    #[error("invalid range: start {start:?} is after end {end:?}")]
    InvalidRange { start: Position, end: Position },

    #[error("invalid command: {0}")]
    InvalidCommand(String),

    #[error("text contains a line break")]
    LineBreakInText,

    #[error("clipboard unavailable: {0}")]
    ClipboardUnavailable(String),
}

pub type EditResult<T> = Result<T, EditError>;
