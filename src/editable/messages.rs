//! Command types for the text box.
//!
//! An input decoder turns key and paste events into [`EditCommand`]s; modifier
//! state travels inside the command (`extend` = Shift held, `soft` = Shift+Enter).

use serde::{Deserialize, Serialize};

use super::cursor::Position;

/// Target for navigation commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigateKind {
    /// Start of the cursor row
    Home,
    /// End of the cursor row
    End,
    /// Start of the buffer
    PageUp,
    /// End of the buffer
    PageDown,
    Up,
    Down,
    Left,
    Right,
}

impl NavigateKind {
    /// Whether a non-extending move out of a selection lands on its start
    pub fn collapses_to_start(&self) -> bool {
        matches!(self, NavigateKind::Left | NavigateKind::Up)
    }

    /// Whether a non-extending move out of a selection lands on its end
    pub fn collapses_to_end(&self) -> bool {
        matches!(self, NavigateKind::Right | NavigateKind::Down)
    }
}

/// Every operation the engine accepts, in serialisable form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum EditCommand {
    /// Type text at the cursor, replacing any selection
    InsertText {
        text: String,
        #[serde(default)]
        extend: bool,
    },
    Backspace,
    /// Split the line at the cursor, or open a blank line below when `soft`
    Enter {
        #[serde(default)]
        soft: bool,
    },
    Navigate {
        kind: NavigateKind,
        #[serde(default)]
        extend: bool,
    },
    /// Paste from the clipboard collaborator
    Paste,
    /// Paste the given text
    PasteText { text: String },
    /// Delete the selection and write it to the clipboard
    Cut,
    /// Write the selection to the clipboard
    Copy,
    SelectAll,
    /// Host-resolved placement (e.g. a mouse click). Must be in bounds.
    MoveTo {
        position: Position,
        #[serde(default)]
        extend: bool,
    },
    /// Host-resolved selection. Both ends must be in bounds.
    Select { anchor: Position, active: Position },
    /// Replace the whole buffer
    SetText { lines: Vec<String> },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_direction() {
        assert!(NavigateKind::Left.collapses_to_start());
        assert!(NavigateKind::Up.collapses_to_start());
        assert!(NavigateKind::Right.collapses_to_end());
        assert!(NavigateKind::Down.collapses_to_end());
        assert!(!NavigateKind::Home.collapses_to_start());
        assert!(!NavigateKind::End.collapses_to_end());
    }

    #[test]
    fn test_command_yaml_shape() {
        let yaml = "- command: insert_text\n  text: hi\n- command: navigate\n  kind: page_up\n  extend: true\n- command: backspace\n";
        let commands: Vec<EditCommand> = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            commands,
            vec![
                EditCommand::InsertText {
                    text: "hi".into(),
                    extend: false
                },
                EditCommand::Navigate {
                    kind: NavigateKind::PageUp,
                    extend: true
                },
                EditCommand::Backspace,
            ]
        );
    }
}
