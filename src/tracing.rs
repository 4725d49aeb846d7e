//! Tracing setup and state-transition logging
//!
//! Provides structured logging with scoped filtering for debugging cursor and
//! selection behaviour.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=cursor=trace,selection=trace` - per-command cursor/selection diffs
//! - `RUST_LOG=textbox::editable=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/textbox/logs/textbox.log` with daily rotation.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::editable::EditEngine;

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`). The file layer always
/// logs at debug level. Calling this twice is harmless.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "textbox.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    let _ = tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init();
}

/// Lightweight snapshot of cursor/selection state for diffing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateSnapshot {
    pub cursor: (usize, usize),
    pub anchor: (usize, usize),
    pub active: (usize, usize),
    pub line_count: usize,
}

impl StateSnapshot {
    pub fn capture(engine: &EditEngine) -> Self {
        let cursor = engine.cursor_position();
        let selection = engine.selection();
        Self {
            cursor: (cursor.row, cursor.column),
            anchor: (selection.anchor.row, selection.anchor.column),
            active: (selection.active.row, selection.active.column),
            line_count: engine.line_count(),
        }
    }

    pub fn selection_empty(&self) -> bool {
        self.anchor == self.active
    }

    /// Describe how the cursor moved, if it did
    pub fn cursor_diff(&self, other: &StateSnapshot) -> Option<String> {
        if self.cursor == other.cursor {
            return None;
        }
        Some(format!(
            "({},{}) → ({},{})",
            self.cursor.0, self.cursor.1, other.cursor.0, other.cursor.1
        ))
    }

    /// Describe how the selection changed, if it did
    pub fn selection_diff(&self, other: &StateSnapshot) -> Option<String> {
        if self.anchor == other.anchor && self.active == other.active {
            return None;
        }
        if other.selection_empty() {
            return Some(if self.selection_empty() {
                "collapsed, moved".to_string()
            } else {
                "cleared".to_string()
            });
        }
        Some(format!(
            "anchor ({},{}) active ({},{})",
            other.anchor.0, other.anchor.1, other.active.0, other.active.1
        ))
    }
}

/// Emit cursor and selection changes between two snapshots at trace level
pub fn log_transition(before: &StateSnapshot, after: &StateSnapshot) {
    if let Some(diff) = before.cursor_diff(after) {
        tracing::trace!(target: "cursor", "{}", diff);
    }
    if let Some(diff) = before.selection_diff(after) {
        tracing::trace!(target: "selection", "{}", diff);
    }
    if before.line_count != after.line_count {
        tracing::trace!(
            target: "buffer",
            "line count: {} → {}",
            before.line_count,
            after.line_count
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editable::{EditConstraints, NavigateKind};

    #[test]
    fn test_snapshot_diff_reports_cursor_move() {
        let mut engine = EditEngine::with_lines(&["abc"], EditConstraints::default());
        let before = StateSnapshot::capture(&engine);
        engine.navigate(NavigateKind::End, false);
        let after = StateSnapshot::capture(&engine);

        assert_eq!(before.cursor_diff(&after).as_deref(), Some("(0,0) → (0,3)"));
        assert_eq!(before.selection_diff(&after).as_deref(), Some("collapsed, moved"));
    }

    #[test]
    fn test_snapshot_diff_reports_selection() {
        let mut engine = EditEngine::with_lines(&["abc"], EditConstraints::default());
        let before = StateSnapshot::capture(&engine);
        engine.navigate(NavigateKind::Right, true);
        let after = StateSnapshot::capture(&engine);
        assert_eq!(
            before.selection_diff(&after).as_deref(),
            Some("anchor (0,0) active (0,1)")
        );

        engine.navigate(NavigateKind::Right, false);
        let cleared = StateSnapshot::capture(&engine);
        assert_eq!(after.selection_diff(&cleared).as_deref(), Some("cleared"));
        assert_eq!(after.cursor_diff(&cleared), None);
    }
}
