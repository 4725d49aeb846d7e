//! Multiline text editing core.
//!
//! # Architecture
//!
//! The core components are, leaves first:
//!
//! - [`LineBuffer`]: ordered lines with insert/split/join/delete-range primitives,
//!   read through the [`TextBuffer`] trait
//! - [`Cursor`] / [`Position`]: a clamped (row, column) with wrap-around movement
//! - [`SelectionRange`]: anchor and active end
//! - [`EditEngine`]: owns all three and applies [`EditCommand`]s atomically
//! - [`EditConstraints`]: line limits, character filtering and paste mode
//!
//! # Example
//!
//! ```
//! use textbox::editable::{EditConstraints, EditEngine, NavigateKind, Position};
//!
//! let mut engine = EditEngine::with_lines(&["hello"], EditConstraints::default());
//! engine.navigate(NavigateKind::End, false);
//! engine.insert_text("!", false);
//!
//! assert_eq!(engine.lines(), vec!["hello!"]);
//! assert_eq!(engine.cursor_position(), Position::new(0, 6));
//! ```

mod buffer;
mod constraints;
mod cursor;
mod engine;
mod error;
mod messages;
mod selection;

// Re-export main types
pub use buffer::{is_line_break, split_lines, LineBuffer, TextBuffer};
pub use constraints::{is_printable, CharFilter, EditConstraints, PasteMode};
pub use cursor::{Cursor, Position};
pub use engine::{EditEngine, EngineSnapshot};
pub use error::{EditError, EditResult};
pub use messages::{EditCommand, NavigateKind};
pub use selection::SelectionRange;
