//! Command scripts: a YAML list of edit commands replayed through an engine.
//!
//! ```yaml
//! - command: insert_text
//!   text: hello
//! - command: navigate
//!   kind: left
//!   extend: true
//! - command: cut
//! ```

use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::path::Path;

use crate::clipboard::Clipboard;
use crate::editable::{EditCommand, EditEngine, EngineSnapshot};

pub fn parse_script(yaml: &str) -> Result<Vec<EditCommand>> {
    let commands: Option<Vec<EditCommand>> =
        serde_yaml::from_str(yaml).context("Failed to parse command script")?;
    Ok(commands.unwrap_or_default())
}

pub fn load_script(path: &Path) -> Result<Vec<EditCommand>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read script {}", path.display()))?;
    parse_script(&content).with_context(|| format!("In script {}", path.display()))
}

/// Outcome of a replay
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplayReport {
    pub applied: usize,
    pub changed: usize,
    /// Commands the engine rejected, by index in the script
    pub rejected: Vec<(usize, String)>,
}

/// Apply every command in order. Rejected commands are recorded and skipped.
pub fn replay(
    engine: &mut EditEngine,
    commands: Vec<EditCommand>,
    clipboard: &mut dyn Clipboard,
) -> ReplayReport {
    let mut report = ReplayReport::default();
    for (index, command) in commands.into_iter().enumerate() {
        match engine.apply(command, clipboard) {
            Ok(changed) => {
                report.applied += 1;
                if changed {
                    report.changed += 1;
                }
            }
            Err(e) => {
                tracing::warn!(index, "command rejected: {}", e);
                report.rejected.push((index, e.to_string()));
            }
        }
    }
    report
}

/// Plain-text rendering: numbered lines, then cursor and selection
pub fn format_snapshot(snapshot: &EngineSnapshot) -> String {
    let mut out = String::new();
    let width = snapshot.lines.len().to_string().len();
    for (row, line) in snapshot.lines.iter().enumerate() {
        let _ = writeln!(out, "{:>width$} | {}", row, line, width = width);
    }
    let _ = writeln!(
        out,
        "cursor: {}:{}",
        snapshot.cursor.row, snapshot.cursor.column
    );
    match snapshot.selection {
        Some((start, end)) => {
            let _ = writeln!(
                out,
                "selection: {}:{} - {}:{}",
                start.row, start.column, end.row, end.column
            );
        }
        None => out.push_str("selection: none\n"),
    }
    out
}
