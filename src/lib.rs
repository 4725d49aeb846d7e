//! Text box editing core
//!
//! This crate provides the in-memory engine behind a multiline editable text
//! box: a line buffer, a cursor and a selection kept consistent under typing,
//! deletion, navigation, line splitting/joining and paste. Rendering, layout
//! and input decoding live in the host; it sends [`EditCommand`]s and reads
//! the resulting state back.

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod config_paths;
pub mod editable;
pub mod script;
pub mod tracing;

// Re-export commonly used types
pub use clipboard::{Clipboard, MemoryClipboard, SystemClipboard};
pub use config::EngineConfig;
pub use editable::{EditCommand, EditEngine, EditError, NavigateKind, Position};
