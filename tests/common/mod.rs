//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use textbox::editable::{EditConstraints, EditEngine, Position};

/// Create an engine with the given lines and the cursor at (row, column)
pub fn test_engine(lines: &[&str], row: usize, column: usize) -> EditEngine {
    test_engine_with(lines, row, column, EditConstraints::default())
}

/// Same as [`test_engine`] with explicit constraints
pub fn test_engine_with(
    lines: &[&str],
    row: usize,
    column: usize,
    constraints: EditConstraints,
) -> EditEngine {
    let mut engine = EditEngine::with_lines(lines, constraints);
    engine
        .move_to(Position::new(row, column), false)
        .expect("test cursor position must be inside the buffer");
    engine
}

/// Create an engine with a selection from anchor to active.
/// The cursor will be at the active position.
pub fn test_engine_with_selection(
    lines: &[&str],
    anchor_row: usize,
    anchor_col: usize,
    active_row: usize,
    active_col: usize,
) -> EditEngine {
    let mut engine = EditEngine::with_lines(lines, EditConstraints::default());
    engine
        .select(
            Position::new(anchor_row, anchor_col),
            Position::new(active_row, active_col),
        )
        .expect("test selection must be inside the buffer");
    engine
}

/// Lines of the engine as `&str`-comparable strings
pub fn lines(engine: &EditEngine) -> Vec<String> {
    engine.lines()
}

pub fn cursor(engine: &EditEngine) -> (usize, usize) {
    let pos = engine.cursor_position();
    (pos.row, pos.column)
}

/// Assert that the engine's invariants hold: cursor and selection inside the
/// buffer, at least one line, empty selection sitting on the cursor
pub fn assert_consistent(engine: &EditEngine) {
    use textbox::editable::TextBuffer;

    let buffer = engine.buffer();
    assert!(engine.line_count() >= 1);
    assert!(buffer.contains(engine.cursor_position()));
    let selection = engine.selection();
    assert!(buffer.contains(selection.anchor));
    assert!(buffer.contains(selection.active));
    assert_eq!(selection.active, engine.cursor_position());
}
