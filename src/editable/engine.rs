//! EditEngine - owns the line buffer, cursor and selection and applies commands
//! to all three as one step.

use serde::{Deserialize, Serialize};

use crate::clipboard::Clipboard;
use crate::tracing::StateSnapshot;

use super::buffer::{is_line_break, split_lines, LineBuffer, TextBuffer};
use super::constraints::{EditConstraints, PasteMode};
use super::cursor::{Cursor, Position};
use super::error::{EditError, EditResult};
use super::messages::{EditCommand, NavigateKind};
use super::selection::SelectionRange;

/// Immutable copy of everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub lines: Vec<String>,
    pub cursor: Position,
    pub selection: Option<(Position, Position)>,
}

/// The editing core of a text box.
///
/// Every command is total: positions are clamped before the buffer is touched,
/// and a refused edit (constraints, nothing to delete) is a no-op that returns
/// `false`. When the selection is empty its anchor and active end both sit on
/// the cursor.
#[derive(Debug, Clone, Default)]
pub struct EditEngine {
    buffer: LineBuffer,
    cursor: Cursor,
    selection: SelectionRange,
    constraints: EditConstraints,
}

impl EditEngine {
    pub fn new(constraints: EditConstraints) -> Self {
        Self {
            buffer: LineBuffer::new(),
            cursor: Cursor::default(),
            selection: SelectionRange::default(),
            constraints,
        }
    }

    pub fn with_lines<S: AsRef<str>>(lines: &[S], constraints: EditConstraints) -> Self {
        let mut engine = Self::new(constraints);
        engine.buffer = LineBuffer::from_lines(lines);
        engine
    }

    pub fn from_text(text: &str, constraints: EditConstraints) -> Self {
        Self::with_lines(&split_lines(text), constraints)
    }

    pub fn constraints(&self) -> &EditConstraints {
        &self.constraints
    }

    pub fn set_constraints(&mut self, constraints: EditConstraints) {
        self.constraints = constraints;
    }

    // =========================================================================
    // Observation
    // =========================================================================

    /// Read-only view of the buffer
    pub fn buffer(&self) -> &LineBuffer {
        &self.buffer
    }

    pub fn lines(&self) -> Vec<String> {
        self.buffer.lines()
    }

    pub fn line_count(&self) -> usize {
        self.buffer.line_count()
    }

    pub fn line_length(&self, row: usize) -> usize {
        self.buffer.line_length(row)
    }

    pub fn text(&self) -> String {
        self.buffer.content()
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn cursor_position(&self) -> Position {
        self.cursor.to_position()
    }

    pub fn selection(&self) -> &SelectionRange {
        &self.selection
    }

    pub fn has_selection(&self) -> bool {
        !self.selection.is_empty()
    }

    /// `(start, end)` of a non-empty selection
    pub fn selection_bounds(&self) -> Option<(Position, Position)> {
        if self.selection.is_empty() {
            None
        } else {
            Some(self.selection.ordered_bounds())
        }
    }

    /// Selected text, empty if nothing is selected
    pub fn selected_text(&self) -> String {
        self.copy_selection().unwrap_or_default()
    }

    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            lines: self.lines(),
            cursor: self.cursor_position(),
            selection: self.selection_bounds(),
        }
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    /// Apply one command. Returns whether any observable state changed.
    ///
    /// Only host-resolved positions (`MoveTo`, `Select`) can fail, with
    /// `InvalidCommand`. Clipboard failures degrade to a no-op.
    pub fn apply(
        &mut self,
        command: EditCommand,
        clipboard: &mut dyn Clipboard,
    ) -> EditResult<bool> {
        let before = StateSnapshot::capture(self);

        let changed = match &command {
            EditCommand::InsertText { text, extend } => self.insert_text(text, *extend),
            EditCommand::Backspace => self.backspace(),
            EditCommand::Enter { soft } => self.enter(*soft),
            EditCommand::Navigate { kind, extend } => self.navigate(*kind, *extend),
            EditCommand::Paste => self.paste_from(clipboard),
            EditCommand::PasteText { text } => self.paste(text),
            EditCommand::Cut => self.cut_to(clipboard),
            EditCommand::Copy => {
                self.copy_to(clipboard);
                false
            }
            EditCommand::SelectAll => self.select_all(),
            EditCommand::MoveTo { position, extend } => self.move_to(*position, *extend)?,
            EditCommand::Select { anchor, active } => self.select(*anchor, *active)?,
            EditCommand::SetText { lines } => {
                self.set_text(lines);
                true
            }
        };

        tracing::debug!(?command, changed, "applied edit command");
        crate::tracing::log_transition(&before, &StateSnapshot::capture(self));
        Ok(changed)
    }

    // =========================================================================
    // Editing
    // =========================================================================

    /// Type `text` at the cursor, replacing any selection.
    ///
    /// With `extend` the selection grows over the inserted text; otherwise it
    /// collapses onto the cursor after it. Refused as a whole if any character
    /// is a line break or fails the constraints.
    pub fn insert_text(&mut self, text: &str, extend: bool) -> bool {
        if text.is_empty() {
            return false;
        }
        if let Some(ch) = text
            .chars()
            .find(|&ch| is_line_break(ch) || !self.constraints.is_char_allowed(ch))
        {
            tracing::debug!(?ch, "insert refused: character not allowed");
            return false;
        }
        self.insert_pieces(&[text.to_string()], extend)
    }

    /// Paste plain text. Line breaks are handled by the configured
    /// [`PasteMode`]; the printable rule does not apply, the char filter does.
    pub fn paste(&mut self, text: &str) -> bool {
        let allowed = |ch: char| match self.constraints.char_filter {
            Some(filter) => filter(ch),
            None => true,
        };
        if !text.chars().filter(|&ch| !is_line_break(ch)).all(allowed) {
            tracing::debug!("paste refused: character not allowed");
            return false;
        }

        let pieces = match self.constraints.paste_mode {
            PasteMode::SingleLine => vec![text.chars().filter(|&ch| !is_line_break(ch)).collect()],
            PasteMode::SplitLines => split_lines(text),
        };
        if pieces.len() == 1 && pieces[0].is_empty() {
            return false;
        }
        self.insert_pieces(&pieces, false)
    }

    /// Delete the selection, or the character left of the cursor, or join the
    /// cursor row onto the previous row when at column 0.
    pub fn backspace(&mut self) -> bool {
        if self.delete_selection().is_some() {
            return true;
        }

        let Position { row, column } = self.cursor_position();
        let (result, target) = if column > 0 {
            let start = Position::new(row, column - 1);
            (
                self.buffer
                    .delete_range(start, Position::new(row, column))
                    .map(|_| ()),
                start,
            )
        } else if row > 0 {
            let previous_len = self.buffer.line_length(row - 1);
            (
                self.buffer.join_line(row - 1),
                Position::new(row - 1, previous_len),
            )
        } else {
            return false;
        };

        if let Err(e) = result {
            self.internal_error("backspace", e);
            return false;
        }
        self.place_cursor(target, false);
        true
    }

    /// Break the line at the cursor, or with `soft` open an empty line below
    /// without touching the cursor row. Selected text is kept; the selection
    /// collapses onto the new cursor. Refused once the buffer holds
    /// `max_lines` lines.
    pub fn enter(&mut self, soft: bool) -> bool {
        if !self.constraints.can_add_lines(self.buffer.line_count(), 1) {
            tracing::debug!("enter refused: line limit reached");
            return false;
        }

        let Position { row, column } = self.cursor_position();
        let result = if soft {
            self.buffer.open_line_below(row)
        } else {
            self.buffer.split_line(row, column)
        };
        if let Err(e) = result {
            self.internal_error(if soft { "soft enter" } else { "enter" }, e);
            return false;
        }
        self.place_cursor(Position::new(row + 1, 0), false);
        true
    }

    /// Delete the selection and return its text (Ctrl+X without the clipboard)
    pub fn cut_selection(&mut self) -> Option<String> {
        self.delete_selection()
    }

    /// Text of the selection, `None` when it is empty
    pub fn copy_selection(&self) -> Option<String> {
        let (start, end) = self.selection_bounds()?;
        match self.buffer.slice(start, end) {
            Ok(text) => Some(text),
            Err(e) => {
                tracing::error!("selection outside buffer: {}", e);
                None
            }
        }
    }

    /// Replace the whole buffer. Resets the cursor to (0,0) and clears the selection.
    pub fn set_text<S: AsRef<str>>(&mut self, lines: &[S]) {
        self.buffer.replace_lines(lines);
        self.place_cursor(Position::zero(), false);
        tracing::debug!(lines = self.buffer.line_count(), "buffer replaced");
    }

    // =========================================================================
    // Clipboard
    // =========================================================================

    pub fn paste_from(&mut self, clipboard: &mut dyn Clipboard) -> bool {
        match clipboard.read() {
            Ok(Some(text)) => self.paste(&text),
            Ok(None) => false,
            Err(e) => {
                tracing::warn!("Paste skipped: {}", e);
                false
            }
        }
    }

    /// Cut into the clipboard. The selection is only deleted once the write succeeded.
    pub fn cut_to(&mut self, clipboard: &mut dyn Clipboard) -> bool {
        let Some(text) = self.copy_selection() else {
            return false;
        };
        if let Err(e) = clipboard.write(&text) {
            tracing::warn!("Cut skipped: {}", e);
            return false;
        }
        self.delete_selection().is_some()
    }

    /// Copy into the clipboard. Returns whether anything was written.
    pub fn copy_to(&self, clipboard: &mut dyn Clipboard) -> bool {
        let Some(text) = self.copy_selection() else {
            return false;
        };
        match clipboard.write(&text) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Copy skipped: {}", e);
                false
            }
        }
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Move the cursor. With `extend` the selection follows the cursor from its
    /// anchor; without it the selection collapses, and an arrow press out of a
    /// non-empty selection lands on its start (left/up) or end (right/down).
    pub fn navigate(&mut self, kind: NavigateKind, extend: bool) -> bool {
        let before = (self.cursor_position(), self.selection);

        if !extend && !self.selection.is_empty() {
            if kind.collapses_to_start() {
                let start = self.selection.start();
                self.place_cursor(start, false);
                return true;
            }
            if kind.collapses_to_end() {
                let end = self.selection.end();
                self.place_cursor(end, false);
                return true;
            }
        }

        let row = self.cursor.row;
        match kind {
            NavigateKind::Home => self.cursor.set_position(&self.buffer, row, 0),
            NavigateKind::End => {
                let len = self.buffer.line_length(row);
                self.cursor.set_position(&self.buffer, row, len);
            }
            NavigateKind::PageUp => self.cursor.set_position(&self.buffer, 0, 0),
            NavigateKind::PageDown => {
                let end = self.buffer.end_position();
                self.cursor.set_position(&self.buffer, end.row, end.column);
            }
            NavigateKind::Up => self.cursor.move_vertical(&self.buffer, -1),
            NavigateKind::Down => self.cursor.move_vertical(&self.buffer, 1),
            NavigateKind::Left => self.cursor.move_horizontal(&self.buffer, -1),
            NavigateKind::Right => self.cursor.move_horizontal(&self.buffer, 1),
        }
        self.sync_selection(extend);

        (self.cursor_position(), self.selection) != before
    }

    /// Select the whole buffer, cursor at the end
    pub fn select_all(&mut self) -> bool {
        let before = self.selection;
        let end = self.buffer.end_position();
        self.cursor.set_position(&self.buffer, end.row, end.column);
        self.selection = SelectionRange::new(Position::zero(), end);
        self.selection != before
    }

    /// Place the cursor at a host-resolved position (e.g. a mouse click)
    pub fn move_to(&mut self, position: Position, extend: bool) -> EditResult<bool> {
        self.check_command_position(position)?;
        let before = (self.cursor_position(), self.selection);
        self.place_cursor(position, extend);
        Ok((self.cursor_position(), self.selection) != before)
    }

    /// Set a host-resolved selection; the cursor goes to the active end
    pub fn select(&mut self, anchor: Position, active: Position) -> EditResult<bool> {
        self.check_command_position(anchor)?;
        self.check_command_position(active)?;
        let before = (self.cursor_position(), self.selection);
        self.cursor
            .set_position(&self.buffer, active.row, active.column);
        self.selection = SelectionRange::new(anchor, active);
        Ok((self.cursor_position(), self.selection) != before)
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn check_command_position(&self, position: Position) -> EditResult<()> {
        if self.buffer.contains(position) {
            Ok(())
        } else {
            Err(EditError::InvalidCommand(format!(
                "position ({}, {}) is outside the buffer",
                position.row, position.column
            )))
        }
    }

    /// Move the cursor to `pos` and either extend or collapse the selection onto it
    fn place_cursor(&mut self, pos: Position, extend: bool) {
        self.cursor.set_position(&self.buffer, pos.row, pos.column);
        self.sync_selection(extend);
    }

    fn sync_selection(&mut self, extend: bool) {
        let pos = self.cursor.to_position();
        if extend {
            self.selection.extend_to(pos);
        } else {
            self.selection.collapse_to(pos);
        }
    }

    /// Delete a non-empty selection and collapse onto its start
    fn delete_selection(&mut self) -> Option<String> {
        let (start, end) = self.selection_bounds()?;
        match self.buffer.delete_range(start, end) {
            Ok(removed) => {
                self.place_cursor(start, false);
                Some(removed)
            }
            Err(e) => {
                self.internal_error("delete selection", e);
                None
            }
        }
    }

    /// Check that replacing the selection (or inserting at the cursor) with
    /// `pieces` joined by line breaks respects the line constraints.
    fn insert_fits(&self, pieces: &[String]) -> bool {
        let (start, end) = self
            .selection_bounds()
            .unwrap_or((self.cursor_position(), self.cursor_position()));
        let added_lines = pieces.len().saturating_sub(1);
        if added_lines > 0 {
            let remaining = self.buffer.line_count() - (end.row - start.row);
            if !self.constraints.can_add_lines(remaining, added_lines) {
                return false;
            }
        }

        let head = start.column;
        let tail = self.buffer.line_length(end.row) - end.column;
        let last = pieces.len() - 1;
        pieces.iter().enumerate().all(|(i, piece)| {
            let mut fixed = 0;
            if i == 0 {
                fixed += head;
            }
            if i == last {
                fixed += tail;
            }
            !self
                .constraints
                .would_exceed_line_length(fixed, piece.chars().count())
        })
    }

    /// Replace the selection with `pieces`, each after the first starting a
    /// new line, and leave the cursor after the last piece.
    fn insert_pieces(&mut self, pieces: &[String], extend: bool) -> bool {
        if pieces.is_empty() || !self.insert_fits(pieces) {
            tracing::debug!("insert refused by line constraints");
            return false;
        }

        self.delete_selection();
        match self.write_pieces(pieces) {
            Ok(end) => {
                self.place_cursor(end, extend);
                true
            }
            Err(e) => {
                self.internal_error("insert", e);
                // The selection may already be gone
                self.cursor.clamp_to(&self.buffer);
                self.sync_selection(false);
                true
            }
        }
    }

    fn write_pieces(&mut self, pieces: &[String]) -> EditResult<Position> {
        let mut pos = self.cursor.to_position();
        for (i, piece) in pieces.iter().enumerate() {
            if i > 0 {
                self.buffer.split_line(pos.row, pos.column)?;
                pos = Position::new(pos.row + 1, 0);
            }
            self.buffer.insert(pos.row, pos.column, piece)?;
            pos.column += piece.chars().count();
        }
        Ok(pos)
    }

    /// A buffer primitive failed after clamping: an engine bug
    fn internal_error(&self, operation: &str, err: EditError) {
        tracing::error!(operation, cursor = ?self.cursor, "buffer invariant violated: {}", err);
        debug_assert!(false, "{operation}: {err}");
    }
}
