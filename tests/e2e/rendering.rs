//! E2E tests for frame layout: gutter, filler rows, bars

use crate::common::harness::EditorTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};
use qtedit::config::Config;

/// Empty buffer shows the welcome banner a third of the way down
#[test]
fn test_welcome_screen() {
    let mut harness = EditorTestHarness::new(60, 12).unwrap();
    harness.render().unwrap();
    // 10 text rows, banner on row 3
    assert_eq!(harness.get_row_text(0), "~");
    let banner = harness.get_row_text(3);
    assert!(banner.starts_with('~'));
    assert!(banner.ends_with("QTEdit -- version 1.0.2"));
    assert!(harness.status_bar_text().starts_with("[No Name] - 0 lines"));
}

/// Gutter width follows the number of digits in the row count
#[test]
fn test_gutter_width_grows() {
    let mut harness = EditorTestHarness::new(40, 12).unwrap();
    harness.load_buffer_from_text("n.txt", "a\nb\n").unwrap();
    assert_eq!(harness.get_row_text(0), "1 a");
    assert_eq!(harness.get_row_text(2), "~");

    let many: Vec<String> = (0..120).map(|i| i.to_string()).collect();
    harness
        .load_buffer_from_text("m.txt", &many.join("\n"))
        .unwrap();
    assert_eq!(harness.get_row_text(0), "1   0");
    assert_eq!(harness.screen_cursor_position(), (4, 0));
}

/// Line numbers can be turned off in the configuration
#[test]
fn test_line_numbers_disabled() {
    let mut config = Config::default();
    config.editor.line_numbers = false;
    let mut harness = EditorTestHarness::with_config(40, 12, config).unwrap();
    harness.load_buffer_from_text("n.txt", "hello\n").unwrap();
    assert_eq!(harness.get_row_text(0), "hello");
    assert_eq!(harness.screen_cursor_position(), (0, 0));
}

/// Tab stop comes from the configuration
#[test]
fn test_configured_tab_stop() {
    let mut config = Config::default();
    config.editor.tab_stop = 8;
    let mut harness = EditorTestHarness::with_config(40, 12, config).unwrap();
    harness.type_text("\tx").unwrap();
    assert_eq!(harness.get_row_text(0), "1         x");
}

/// Control bytes are drawn as '?'
#[test]
fn test_control_bytes_are_masked() {
    let mut harness = EditorTestHarness::new(40, 12).unwrap();
    harness.load_buffer_from_text("c.txt", "a\x07b\n").unwrap();
    assert_eq!(harness.get_row_text(0), "1 a?b");
}

/// Ctrl-H brings back the shortcut overview
#[test]
fn test_help_message() {
    let mut harness = EditorTestHarness::new(120, 12).unwrap();
    harness.type_text("x").unwrap();
    harness
        .send_key(KeyCode::Char('k'), KeyModifiers::CONTROL)
        .unwrap();
    assert_eq!(harness.message_line_text(), "Deleted line 1");
    harness
        .send_key(KeyCode::Char('h'), KeyModifiers::CONTROL)
        .unwrap();
    assert!(harness.message_line_text().starts_with("Ctrl-S: Save | Ctrl-X: Quit"));
}

/// Resizing reflows the bars to the new size
#[test]
fn test_resize() {
    let mut harness = EditorTestHarness::new(40, 12).unwrap();
    harness.load_buffer_from_text("r.c", "int x;\n").unwrap();
    harness
        .editor_mut()
        .handle_event(qtedit::input::keybindings::EditorEvent::Resize(30, 8));
    assert_eq!(harness.editor().viewport().height, 6);
    assert_eq!(harness.editor().viewport().width, 30);
}
