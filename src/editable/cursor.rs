//! Cursor and position types for the text box.

use serde::{Deserialize, Serialize};

use super::buffer::TextBuffer;

/// A position in the line buffer (row and column, both 0-indexed).
///
/// Ordered by row, then column. A column equal to the line length means
/// "after the last character".
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    pub const fn zero() -> Self {
        Self { row: 0, column: 0 }
    }
}

/// The text cursor. Does not reference the buffer: every movement takes the
/// buffer as a parameter and clamps against it, so it can never fail.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub row: usize,
    pub column: usize,
    /// Desired column for vertical movement.
    /// When moving up/down through lines of varying length, this preserves
    /// the "intended" column position even when a shorter line is traversed.
    pub desired_column: Option<usize>,
}

impl Cursor {
    pub const fn new(row: usize, column: usize) -> Self {
        Self {
            row,
            column,
            desired_column: None,
        }
    }

    pub fn at_position(pos: Position) -> Self {
        Self::new(pos.row, pos.column)
    }

    pub const fn to_position(&self) -> Position {
        Position::new(self.row, self.column)
    }

    /// Clear desired column (call after horizontal movement)
    pub fn clear_desired_column(&mut self) {
        self.desired_column = None;
    }

    /// Set desired column to current column (call before vertical movement)
    pub fn set_desired_column(&mut self) {
        if self.desired_column.is_none() {
            self.desired_column = Some(self.column);
        }
    }

    /// Get the effective column for positioning (uses desired_column if set)
    pub fn effective_column(&self) -> usize {
        self.desired_column.unwrap_or(self.column)
    }

    /// Place the cursor, clamping row and column into the buffer
    pub fn set_position<B: TextBuffer + ?Sized>(&mut self, buffer: &B, row: usize, column: usize) {
        let row = row.min(buffer.line_count().saturating_sub(1));
        self.row = row;
        self.column = column.min(buffer.line_length(row));
        self.clear_desired_column();
    }

    /// Re-clamp after a structural edit. Keeps the desired column.
    pub fn clamp_to<B: TextBuffer + ?Sized>(&mut self, buffer: &B) {
        self.row = self.row.min(buffer.line_count().saturating_sub(1));
        self.column = self.column.min(buffer.line_length(self.row));
    }

    /// Move by `delta` characters, wrapping across line boundaries.
    ///
    /// Each line break counts as one character: left at column 0 lands at the
    /// end of the previous line, right at line end lands at the start of the
    /// next. Stops at the buffer edges.
    pub fn move_horizontal<B: TextBuffer + ?Sized>(&mut self, buffer: &B, delta: isize) {
        let last_row = buffer.line_count().saturating_sub(1);
        let mut row = self.row.min(last_row);
        let len = |row: usize| buffer.line_length(row) as isize;
        let mut column = (self.column.min(buffer.line_length(row)) as isize).saturating_add(delta);

        while column < 0 {
            if row == 0 {
                column = 0;
                break;
            }
            row -= 1;
            column += len(row) + 1;
        }
        while column > len(row) {
            if row == last_row {
                column = len(row);
                break;
            }
            column -= len(row) + 1;
            row += 1;
        }

        self.row = row;
        self.column = column as usize;
        self.clear_desired_column();
    }

    /// Move by `delta` rows, clamping the row into the buffer and the column
    /// to the target row's length. Never wraps.
    pub fn move_vertical<B: TextBuffer + ?Sized>(&mut self, buffer: &B, delta: isize) {
        let last_row = buffer.line_count().saturating_sub(1) as isize;
        self.set_desired_column();
        self.row = (self.row as isize).saturating_add(delta).clamp(0, last_row) as usize;
        self.column = self.effective_column().min(buffer.line_length(self.row));
    }
}

impl From<Position> for Cursor {
    fn from(pos: Position) -> Self {
        Self::at_position(pos)
    }
}

impl From<Cursor> for Position {
    fn from(cursor: Cursor) -> Self {
        cursor.to_position()
    }
}
