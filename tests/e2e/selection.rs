//! E2E tests for shift-selection, copy and paste

use crate::common::harness::EditorTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};

/// Selecting across rows and deleting merges the ends
#[test]
fn test_select_across_rows_and_delete() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness
        .load_buffer_from_text("s.txt", "abcdef\nmiddle\nxyz\nafter\n")
        .unwrap();

    harness
        .send_key_repeat(KeyCode::Right, KeyModifiers::NONE, 2)
        .unwrap();
    harness
        .send_key_repeat(KeyCode::Down, KeyModifiers::SHIFT, 2)
        .unwrap();
    harness.send_key(KeyCode::Left, KeyModifiers::SHIFT).unwrap();

    let rows_before = harness.editor().document().len();
    harness.send_key(KeyCode::Delete, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.editor().document().len(), rows_before - 2);
    harness.assert_buffer_content("abyz\nafter");
}

/// The selection is drawn over the syntax colors
#[test]
fn test_selection_is_drawn() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness.load_buffer_from_text("s.c", "int x;\n").unwrap();
    harness
        .send_key_repeat(KeyCode::Right, KeyModifiers::SHIFT, 3)
        .unwrap();

    let selected = harness.screen().cell(0, 2).unwrap().bgcolor();
    assert_ne!(selected, vt100::Color::Default);
    assert_eq!(harness.screen().cell(0, 4).unwrap().bgcolor(), selected);
    assert_eq!(
        harness.screen().cell(0, 5).unwrap().bgcolor(),
        vt100::Color::Default
    );

    harness.send_key(KeyCode::Esc, KeyModifiers::NONE).unwrap();
    assert!(!harness.editor().selection().is_active());
    assert_eq!(
        harness.screen().cell(0, 2).unwrap().bgcolor(),
        vt100::Color::Default
    );
}

/// Copy a multi-row selection and paste it elsewhere
#[test]
fn test_copy_paste_multiline() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness.load_buffer_from_text("p.txt", "one\ntwo\n").unwrap();
    harness.send_key(KeyCode::End, KeyModifiers::SHIFT).unwrap();
    harness.send_key(KeyCode::Down, KeyModifiers::SHIFT).unwrap();
    harness
        .send_key(KeyCode::Char('c'), KeyModifiers::CONTROL)
        .unwrap();
    assert_eq!(harness.editor().clipboard().get_internal(), "one\ntwo");

    harness.send_key(KeyCode::Down, KeyModifiers::NONE).unwrap();
    harness
        .send_key(KeyCode::Char('v'), KeyModifiers::CONTROL)
        .unwrap();
    harness.assert_buffer_content("one\ntwo\none\ntwo");
}

/// Typing while a selection is active drops the selection and inserts
#[test]
fn test_typing_clears_selection() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness.load_buffer_from_text("t.txt", "abc\n").unwrap();
    harness
        .send_key_repeat(KeyCode::Right, KeyModifiers::SHIFT, 2)
        .unwrap();
    harness.type_text("X").unwrap();
    assert!(!harness.editor().selection().is_active());
    harness.assert_buffer_content("abXc");
}
