//! Line buffer for the text box.
//!
//! `TextBuffer` is the read-only view used by cursor navigation and by the
//! renderer. `LineBuffer` is the one implementation: an ordered sequence of
//! lines backed by a `ropey::Rope`, where a row is a rope line and a column is
//! a char (Unicode scalar) index into it.

use ropey::Rope;
use std::borrow::Cow;

use super::cursor::Position;
use super::error::{EditError, EditResult};

/// Characters that ropey counts as line breaks.
pub fn is_line_break(ch: char) -> bool {
    matches!(
        ch,
        '\n' | '\r' | '\u{000B}' | '\u{000C}' | '\u{0085}' | '\u{2028}' | '\u{2029}'
    )
}

/// Split text on every line break, treating CRLF as a single break.
///
/// Always yields at least one (possibly empty) line; a trailing break yields a
/// trailing empty line.
pub fn split_lines(text: &str) -> Vec<String> {
    let mut lines = vec![String::new()];
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if is_line_break(ch) {
            if ch == '\r' && chars.peek() == Some(&'\n') {
                chars.next();
            }
            lines.push(String::new());
        } else if let Some(last) = lines.last_mut() {
            last.push(ch);
        }
    }
    lines
}

/// Read-only view into a line buffer for cursor navigation and rendering.
pub trait TextBuffer {
    /// Number of lines (always >= 1)
    fn line_count(&self) -> usize;

    /// Length of a line in characters, 0 for rows past the end
    fn line_length(&self, row: usize) -> usize;

    /// Total length in characters, counting one per line break
    fn len_chars(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len_chars() == 0
    }

    /// Character at position, None if out of bounds
    fn char_at(&self, row: usize, column: usize) -> Option<char>;

    /// Line content without its line break
    fn line(&self, row: usize) -> Option<Cow<'_, str>>;

    /// Convert a position to a char offset, clamping it into the buffer first
    fn position_to_offset(&self, pos: Position) -> usize;

    /// Convert a char offset to a position
    fn offset_to_position(&self, offset: usize) -> Position;

    /// Full content with lines joined by `\n`
    fn content(&self) -> String;

    /// Position after the last character of the last line
    fn end_position(&self) -> Position {
        let last = self.line_count().saturating_sub(1);
        Position::new(last, self.line_length(last))
    }

    /// Whether `pos` addresses a valid cursor slot (column may equal line length)
    fn contains(&self, pos: Position) -> bool {
        pos.row < self.line_count() && pos.column <= self.line_length(pos.row)
    }
}

/// Ordered sequence of text lines. Never holds zero lines.
#[derive(Debug, Clone)]
pub struct LineBuffer {
    rope: Rope,
}

impl LineBuffer {
    /// A buffer holding one empty line
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Build a buffer from text, splitting on any line break
    pub fn from_text(text: &str) -> Self {
        Self::from_lines(&split_lines(text))
    }

    /// Build a buffer from an ordered sequence of lines.
    ///
    /// An empty slice gives one empty line. Line breaks inside an element split
    /// it into several rows.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Self {
        let normalized: Vec<String> = lines
            .iter()
            .flat_map(|line| split_lines(line.as_ref()))
            .collect();
        Self {
            rope: Rope::from_str(&normalized.join("\n")),
        }
    }

    /// Replace the whole content (the "set text" path)
    pub fn replace_lines<S: AsRef<str>>(&mut self, lines: &[S]) {
        *self = Self::from_lines(lines);
    }

    /// All lines, in order
    pub fn lines(&self) -> Vec<String> {
        (0..self.line_count())
            .map(|row| self.line(row).map(Cow::into_owned).unwrap_or_default())
            .collect()
    }

    /// Text between two positions (start must not be after end)
    pub fn slice(&self, start: Position, end: Position) -> EditResult<String> {
        self.check_range(start, end)?;
        let from = self.position_to_offset(start);
        let to = self.position_to_offset(end);
        Ok(self.rope.slice(from..to).to_string())
    }

    /// Insert `text` into line `row` at `column`. The text must not contain a
    /// line break.
    pub fn insert(&mut self, row: usize, column: usize, text: &str) -> EditResult<()> {
        self.check_position(row, column)?;
        if text.chars().any(is_line_break) {
            return Err(EditError::LineBreakInText);
        }
        let offset = self.position_to_offset(Position::new(row, column));
        self.rope.insert(offset, text);
        Ok(())
    }

    /// Keep `[0, column)` on `row` and move `[column, end)` to a new line at `row + 1`
    pub fn split_line(&mut self, row: usize, column: usize) -> EditResult<()> {
        self.check_position(row, column)?;
        let offset = self.position_to_offset(Position::new(row, column));
        self.rope.insert_char(offset, '\n');
        Ok(())
    }

    /// Insert an empty line at `row + 1`, leaving `row` untouched
    pub fn open_line_below(&mut self, row: usize) -> EditResult<()> {
        let column = self.line_length(row);
        self.split_line(row, column)
    }

    /// Append line `row + 1` onto line `row` and remove it
    pub fn join_line(&mut self, row: usize) -> EditResult<()> {
        if row + 1 >= self.line_count() {
            return Err(EditError::OutOfBounds { row, column: 0 });
        }
        let offset = self.rope.line_to_char(row) + self.line_length(row);
        self.rope.remove(offset..offset + 1);
        Ok(())
    }

    /// Remove everything between `start` and `end`, merging the head of the
    /// start row with the tail of the end row. Returns the removed text.
    pub fn delete_range(&mut self, start: Position, end: Position) -> EditResult<String> {
        let removed = self.slice(start, end)?;
        let from = self.position_to_offset(start);
        let to = self.position_to_offset(end);
        if from < to {
            self.rope.remove(from..to);
        }
        Ok(removed)
    }

    fn check_position(&self, row: usize, column: usize) -> EditResult<()> {
        if self.contains(Position::new(row, column)) {
            Ok(())
        } else {
            Err(EditError::OutOfBounds { row, column })
        }
    }

    fn check_range(&self, start: Position, end: Position) -> EditResult<()> {
        self.check_position(start.row, start.column)?;
        self.check_position(end.row, end.column)?;
        if start > end {
            return Err(EditError::InvalidRange { start, end });
        }
        Ok(())
    }
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextBuffer for LineBuffer {
    fn line_count(&self) -> usize {
        self.rope.len_lines().max(1)
    }

    fn line_length(&self, row: usize) -> usize {
        if row >= self.rope.len_lines() {
            return 0;
        }
        let line = self.rope.line(row);
        let len = line.len_chars();
        // Only '\n' ever reaches the rope as a break
        if len > 0 && line.char(len - 1) == '\n' {
            len - 1
        } else {
            len
        }
    }

    fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    fn char_at(&self, row: usize, column: usize) -> Option<char> {
        if row >= self.rope.len_lines() || column >= self.line_length(row) {
            return None;
        }
        Some(self.rope.char(self.rope.line_to_char(row) + column))
    }

    fn line(&self, row: usize) -> Option<Cow<'_, str>> {
        if row >= self.rope.len_lines() {
            return None;
        }
        let line = self.rope.line(row);
        let text = line.slice(..self.line_length(row));
        Some(match text.as_str() {
            Some(s) => Cow::Borrowed(s),
            None => Cow::Owned(text.to_string()),
        })
    }

    fn position_to_offset(&self, pos: Position) -> usize {
        if pos.row >= self.rope.len_lines() {
            return self.rope.len_chars();
        }
        self.rope.line_to_char(pos.row) + pos.column.min(self.line_length(pos.row))
    }

    fn offset_to_position(&self, offset: usize) -> Position {
        let clamped = offset.min(self.rope.len_chars());
        let row = self.rope.char_to_line(clamped);
        Position::new(row, clamped - self.rope.line_to_char(row))
    }

    fn content(&self) -> String {
        self.rope.to_string()
    }
}
