//! Behavioural properties of the engine, checked over command sequences

mod common;

use common::{assert_consistent, cursor, lines, test_engine, test_engine_with, test_engine_with_selection};
use textbox::editable::{EditCommand, EditConstraints, EditEngine, NavigateKind, Position};
use textbox::MemoryClipboard;

fn line_lengths(engine: &EditEngine) -> Vec<usize> {
    (0..engine.line_count())
        .map(|row| engine.line_length(row))
        .collect()
}

#[test]
fn test_navigation_is_buffer_read_only() {
    let texts: [&[&str]; 3] = [&[""], &["a", "", "bcd"], &["日本語", "x", "", "long line here"]];
    let kinds = [
        NavigateKind::Left,
        NavigateKind::Down,
        NavigateKind::Right,
        NavigateKind::Right,
        NavigateKind::End,
        NavigateKind::Up,
        NavigateKind::PageDown,
        NavigateKind::Home,
        NavigateKind::PageUp,
    ];

    for text in texts {
        let mut engine = EditEngine::with_lines(text, EditConstraints::default());
        let count = engine.line_count();
        let lengths = line_lengths(&engine);
        for (i, kind) in kinds.iter().cycle().take(90).enumerate() {
            engine.navigate(*kind, i % 2 == 1);
            assert_eq!(engine.line_count(), count);
            assert_eq!(line_lengths(&engine), lengths);
            assert_consistent(&engine);
        }
    }
}

#[test]
fn test_set_text_round_trip() {
    let cases: [&[&str]; 4] = [&["only"], &["", ""], &["a", "bb", "ccc"], &["x", "", "y"]];
    for case in cases {
        let mut engine = test_engine_with_selection(&["some", "prior", "state"], 0, 1, 2, 3);
        engine.set_text(case);

        assert_eq!(lines(&engine), case);
        assert_eq!(engine.cursor_position(), Position::zero());
        assert_eq!(engine.selection_bounds(), None);
    }
}

#[test]
fn test_collapse_then_move_right() {
    // (anchor, active) pairs over ["abc", "def"]
    let selections = [
        ((0, 0), (0, 2)),
        ((0, 2), (0, 0)),
        ((0, 1), (0, 3)),
        ((0, 2), (1, 1)),
        ((1, 1), (0, 2)),
        ((0, 0), (1, 3)),
    ];

    for ((ar, ac), (br, bc)) in selections {
        let mut engine = test_engine_with_selection(&["abc", "def"], ar, ac, br, bc);
        let (_, end) = engine.selection_bounds().unwrap();

        engine.navigate(NavigateKind::Right, false);
        assert_eq!(engine.selection_bounds(), None);
        assert_eq!(engine.cursor_position(), end);

        let moved = engine.navigate(NavigateKind::Right, false);
        let after = engine.cursor_position();
        if end == Position::new(1, 3) {
            assert!(!moved);
            assert_eq!(after, end);
        } else {
            assert!(after > end);
            assert!(after.row == end.row || after == Position::new(end.row + 1, 0));
        }
    }
}

#[test]
fn test_backspace_on_empty_buffer_is_noop() {
    let mut engine = test_engine(&[""], 0, 0);
    let before = engine.snapshot();
    assert!(!engine.backspace());
    assert_eq!(engine.snapshot(), before);
}

#[test]
fn test_enter_at_max_lines_keeps_line_count() {
    for max in 1..=4 {
        let initial: Vec<String> = (0..max).map(|i| format!("line {}", i)).collect();
        let mut engine =
            EditEngine::with_lines(&initial, EditConstraints::default().with_max_lines(max));
        engine.navigate(NavigateKind::PageDown, false);

        assert!(!engine.enter(false));
        assert!(!engine.enter(true));
        assert_eq!(engine.line_count(), max);
    }
}

// ========================================================================
// Worked scenarios
// ========================================================================

#[test]
fn test_scenario_enter_at_end_of_first_line() {
    let mut engine = test_engine(&["abc", "def"], 0, 3);
    engine.enter(false);
    assert_eq!(lines(&engine), vec!["abc", "", "def"]);
    assert_eq!(cursor(&engine), (1, 0));
}

#[test]
fn test_scenario_backspace_at_start_of_second_line() {
    let mut engine = test_engine(&["abc", "def"], 1, 0);
    engine.backspace();
    assert_eq!(lines(&engine), vec!["abcdef"]);
    assert_eq!(cursor(&engine), (0, 3));
}

#[test]
fn test_scenario_type_over_selection() {
    let mut engine = test_engine_with_selection(&["hello"], 0, 1, 0, 4);
    engine.insert_text("X", false);
    assert_eq!(lines(&engine), vec!["hXo"]);
    assert_eq!(cursor(&engine), (0, 2));
    assert_eq!(engine.selection_bounds(), None);
}

#[test]
fn test_scenario_shift_left_n_times() {
    let mut engine = test_engine(&["abc", "defgh"], 1, 4);
    for n in 1..=6usize {
        engine.navigate(NavigateKind::Left, true);
        assert_eq!(engine.selected_text().chars().count(), n);
        assert_eq!(engine.selection_bounds().unwrap().1, Position::new(1, 4));
    }
}

// ========================================================================
// Invariants over mixed command sequences
// ========================================================================

#[test]
fn test_invariants_hold_over_mixed_commands() {
    let constraints = EditConstraints::default().with_max_lines(6);
    let mut engine = test_engine_with(&["first", "", "third line"], 1, 0, constraints);
    let mut clipboard = MemoryClipboard::new();

    let script = [
        EditCommand::InsertText { text: "ab".to_string(), extend: false },
        EditCommand::Enter { soft: false },
        EditCommand::Navigate { kind: NavigateKind::Up, extend: true },
        EditCommand::Copy,
        EditCommand::Navigate { kind: NavigateKind::Right, extend: false },
        EditCommand::Paste,
        EditCommand::SelectAll,
        EditCommand::Cut,
        EditCommand::Backspace,
        EditCommand::Paste,
        EditCommand::Enter { soft: true },
        EditCommand::Enter { soft: false },
        EditCommand::Navigate { kind: NavigateKind::PageUp, extend: true },
        EditCommand::Backspace,
        EditCommand::InsertText { text: "z".to_string(), extend: true },
        EditCommand::Navigate { kind: NavigateKind::Left, extend: false },
        EditCommand::Backspace,
    ];

    for command in script {
        engine.apply(command, &mut clipboard).unwrap();
        assert_consistent(&engine);
        assert!(engine.line_count() <= 6);
        for line in lines(&engine) {
            assert!(!line.contains('\n'));
        }
    }
}
