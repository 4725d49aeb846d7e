//! Edit constraints for the text box.
//!
//! Constraints decide which inserts, line breaks and pastes the engine accepts.

use serde::{Deserialize, Serialize};

/// Character filter function type
pub type CharFilter = fn(char) -> bool;

/// How line breaks inside pasted text are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PasteMode {
    /// Line breaks are dropped and the pasted text lands on the cursor row
    #[default]
    SingleLine,
    /// Every line break in the pasted text becomes a buffer line break
    SplitLines,
}

/// Printable means: not a control character and not in the Specials block.
pub fn is_printable(ch: char) -> bool {
    !ch.is_control() && !('\u{FFF0}'..='\u{FFFF}').contains(&ch)
}

/// Constraints that limit what edits are allowed.
#[derive(Debug, Clone)]
pub struct EditConstraints {
    /// Maximum number of lines (None = unlimited). Enter is refused at the limit.
    pub max_lines: Option<usize>,

    /// Maximum length of a single line in characters (None = unlimited)
    pub max_line_length: Option<usize>,

    /// Reject typed characters that are not printable
    pub printable_only: bool,

    /// Character filter (None = all characters allowed)
    /// Returns true if character is allowed
    pub char_filter: Option<CharFilter>,

    pub paste_mode: PasteMode,
}

impl Default for EditConstraints {
    fn default() -> Self {
        Self {
            max_lines: None,
            max_line_length: None,
            printable_only: true,
            char_filter: None,
            paste_mode: PasteMode::SingleLine,
        }
    }
}

impl EditConstraints {
    /// Single-line input (one row, Enter always refused)
    pub fn single_line() -> Self {
        Self {
            max_lines: Some(1),
            ..Self::default()
        }
    }

    /// Numeric input constraints (digits only)
    pub fn numeric() -> Self {
        Self {
            max_lines: Some(1),
            max_line_length: Some(10),
            char_filter: Some(|c| c.is_ascii_digit()),
            ..Self::default()
        }
    }

    pub fn with_max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = Some(max_lines);
        self
    }

    pub fn with_paste_mode(mut self, paste_mode: PasteMode) -> Self {
        self.paste_mode = paste_mode;
        self
    }

    /// Check a typed character against the printable rule and the filter
    pub fn is_char_allowed(&self, ch: char) -> bool {
        if self.printable_only && !is_printable(ch) {
            return false;
        }
        match self.char_filter {
            Some(filter) => filter(ch),
            None => true,
        }
    }

    /// Check if inserting `insert_len` characters into a line of `current_len` is too long
    pub fn would_exceed_line_length(&self, current_len: usize, insert_len: usize) -> bool {
        match self.max_line_length {
            Some(max) => current_len + insert_len > max,
            None => false,
        }
    }

    /// Check if the buffer may grow from `current_lines` by `added` lines
    pub fn can_add_lines(&self, current_lines: usize, added: usize) -> bool {
        match self.max_lines {
            Some(max) => current_lines + added <= max,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_constraints() {
        let c = EditConstraints::default();
        assert!(c.is_char_allowed('a'));
        assert!(c.is_char_allowed('é'));
        assert!(!c.is_char_allowed('\u{7}'));
        assert!(!c.is_char_allowed('\u{FFFD}'));
        assert!(c.can_add_lines(1_000, 1));
        assert_eq!(c.paste_mode, PasteMode::SingleLine);
    }

    #[test]
    fn test_single_line_refuses_new_lines() {
        let c = EditConstraints::single_line();
        assert!(!c.can_add_lines(1, 1));
        assert!(c.can_add_lines(1, 0));
    }

    #[test]
    fn test_numeric_constraints() {
        let c = EditConstraints::numeric();
        assert!(c.is_char_allowed('0'));
        assert!(c.is_char_allowed('9'));
        assert!(!c.is_char_allowed('a'));
        assert!(!c.is_char_allowed('-'));
    }

    #[test]
    fn test_max_line_length() {
        let c = EditConstraints::numeric();
        assert!(!c.would_exceed_line_length(5, 5));
        assert!(c.would_exceed_line_length(8, 5));
    }

    #[test]
    fn test_printable_filter_can_be_disabled() {
        let c = EditConstraints {
            printable_only: false,
            ..EditConstraints::default()
        };
        assert!(c.is_char_allowed('\t'));
    }
}
