//! Clipboard collaborators.
//!
//! The engine never touches the system clipboard directly; hosts hand it a
//! [`Clipboard`]. Failures surface as `ClipboardUnavailable` and the engine
//! degrades the command to a no-op.

use crate::editable::{EditError, EditResult};

/// A clipboard the engine can read from and write to.
pub trait Clipboard {
    /// Current text contents, `None` if the clipboard holds no text
    fn read(&mut self) -> EditResult<Option<String>>;

    fn write(&mut self, text: &str) -> EditResult<()>;
}

/// The OS clipboard, via `arboard`. The handle is opened on first use.
#[derive(Default)]
pub struct SystemClipboard {
    handle: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> EditResult<&mut arboard::Clipboard> {
        if self.handle.is_none() {
            let clipboard = arboard::Clipboard::new()
                .map_err(|e| EditError::ClipboardUnavailable(e.to_string()))?;
            self.handle = Some(clipboard);
        }
        self.handle
            .as_mut()
            .ok_or_else(|| EditError::ClipboardUnavailable("no clipboard handle".to_string()))
    }
}

impl std::fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemClipboard")
            .field("open", &self.handle.is_some())
            .finish()
    }
}

impl Clipboard for SystemClipboard {
    fn read(&mut self) -> EditResult<Option<String>> {
        match self.handle()?.get_text() {
            Ok(text) => Ok(Some(text)),
            Err(arboard::Error::ContentNotAvailable) => Ok(None),
            Err(e) => Err(EditError::ClipboardUnavailable(e.to_string())),
        }
    }

    fn write(&mut self, text: &str) -> EditResult<()> {
        self.handle()?
            .set_text(text)
            .map_err(|e| EditError::ClipboardUnavailable(e.to_string()))
    }
}

/// In-process clipboard for headless hosts and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
    unavailable: bool,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: &str) -> Self {
        Self {
            contents: Some(text.to_string()),
            unavailable: false,
        }
    }

    /// A clipboard whose every read and write fails
    pub fn unavailable() -> Self {
        Self {
            contents: None,
            unavailable: true,
        }
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn read(&mut self) -> EditResult<Option<String>> {
        if self.unavailable {
            return Err(EditError::ClipboardUnavailable(
                "memory clipboard disabled".to_string(),
            ));
        }
        Ok(self.contents.clone())
    }

    fn write(&mut self, text: &str) -> EditResult<()> {
        if self.unavailable {
            return Err(EditError::ClipboardUnavailable(
                "memory clipboard disabled".to_string(),
            ));
        }
        self.contents = Some(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_clipboard_round_trip() {
        let mut clipboard = MemoryClipboard::new();
        assert_eq!(clipboard.read(), Ok(None));
        clipboard.write("copied").unwrap();
        assert_eq!(clipboard.read(), Ok(Some("copied".to_string())));
        assert_eq!(clipboard.contents(), Some("copied"));
    }

    #[test]
    fn test_unavailable_clipboard_fails() {
        let mut clipboard = MemoryClipboard::unavailable();
        assert!(matches!(
            clipboard.read(),
            Err(EditError::ClipboardUnavailable(_))
        ));
        assert!(matches!(
            clipboard.write("x"),
            Err(EditError::ClipboardUnavailable(_))
        ));
    }
}
