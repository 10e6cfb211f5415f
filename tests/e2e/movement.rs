//! E2E tests for cursor movement and scrolling

use crate::common::harness::EditorTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};

/// The hardware cursor sits after the gutter and expands tabs
#[test]
fn test_cursor_position_with_tabs() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness.type_text("\ta").unwrap();
    assert_eq!(harness.screen_cursor_position(), (7, 0));

    harness.send_key(KeyCode::Left, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.screen_cursor_position(), (6, 0));
    harness.send_key(KeyCode::Left, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.screen_cursor_position(), (2, 0));
}

/// Moving past the bottom of the screen scrolls by one row
#[test]
fn test_vertical_scrolling() {
    let mut harness = EditorTestHarness::new(40, 12).unwrap();
    let text: Vec<String> = (1..=30).map(|i| format!("line {i}")).collect();
    harness
        .load_buffer_from_text("lines.txt", &text.join("\n"))
        .unwrap();

    harness
        .send_key_repeat(KeyCode::Down, KeyModifiers::NONE, 10)
        .unwrap();
    assert_eq!(harness.editor().viewport().row_offset, 1);
    assert_eq!(harness.get_row_text(0), "2  line 2");
    assert_eq!(harness.screen_cursor_position(), (3, 9));
}

/// Long rows scroll horizontally and keep the gutter
#[test]
fn test_horizontal_scrolling() {
    let mut harness = EditorTestHarness::new(20, 6).unwrap();
    harness.type_text(&"abcdefghij".repeat(3)).unwrap();
    // gutter 2, 18 text columns, cursor at visual column 30
    assert_eq!(harness.editor().viewport().col_offset, 13);
    assert_eq!(harness.get_row_text(0), "1 defghijabcdefghij");
    assert_eq!(harness.screen_cursor_position(), (19, 0));

    harness.send_key(KeyCode::Home, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.editor().viewport().col_offset, 0);
    assert_eq!(harness.get_row_text(0), "1 abcdefghijabcdefgh");
}

/// Goto line prompt
#[test]
fn test_goto_line() {
    let mut harness = EditorTestHarness::new(40, 12).unwrap();
    harness.load_buffer_from_text("g.txt", "a\nb\nc\nd\n").unwrap();
    harness
        .send_key(KeyCode::Char('g'), KeyModifiers::CONTROL)
        .unwrap();
    assert_eq!(harness.message_line_text(), "Go to line:");
    harness.type_text("3").unwrap();
    harness.send_key(KeyCode::Enter, KeyModifiers::NONE).unwrap();
    assert!(harness.status_bar_text().ends_with("3/4"));
}
