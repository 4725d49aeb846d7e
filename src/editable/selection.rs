//! Selection range for the text box.

use super::cursor::{Cursor, Position};

/// A selection with an anchor (fixed end) and an active end (moves with the
/// cursor while extending).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionRange {
    pub anchor: Position,
    pub active: Position,
}

impl SelectionRange {
    pub fn new(anchor: Position, active: Position) -> Self {
        Self { anchor, active }
    }

    /// Create a collapsed selection (cursor with no selection)
    pub fn collapsed(pos: Position) -> Self {
        Self {
            anchor: pos,
            active: pos,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.anchor == self.active
    }

    pub fn start(&self) -> Position {
        self.anchor.min(self.active)
    }

    pub fn end(&self) -> Position {
        self.anchor.max(self.active)
    }

    /// `(start, end)` in document order
    pub fn ordered_bounds(&self) -> (Position, Position) {
        (self.start(), self.end())
    }

    /// Check if selection is reversed (active before anchor)
    pub fn is_reversed(&self) -> bool {
        self.active < self.anchor
    }

    /// Move the active end, leaving the anchor in place
    pub fn extend_to(&mut self, pos: Position) {
        self.active = pos;
    }

    /// Drop the selection, leaving both ends at `pos`
    pub fn collapse_to(&mut self, pos: Position) {
        self.anchor = pos;
        self.active = pos;
    }

    /// Check if a position is within this selection (end exclusive)
    pub fn contains(&self, pos: Position) -> bool {
        pos >= self.start() && pos < self.end()
    }

    pub fn points_at_start(&self, cursor: &Cursor) -> bool {
        cursor.to_position() == self.start()
    }

    pub fn points_at_end(&self, cursor: &Cursor) -> bool {
        cursor.to_position() == self.end()
    }
}
