//! E2E tests for syntax highlighting as it shows up on screen

use crate::common::harness::EditorTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};
use qtedit::primitives::highlighter::HighlightClass;

fn classes(harness: &EditorTestHarness, row: usize) -> Vec<HighlightClass> {
    harness.editor().document().row(row).unwrap().highlight().to_vec()
}

/// Classification of a small C file
#[test]
fn test_c_document_classes() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness
        .load_buffer_from_text("x.c", "int x;\n// comment\nreturn x;\n")
        .unwrap();

    let row0 = classes(&harness, 0);
    assert!(row0[0..3].iter().all(|&c| c == HighlightClass::Keyword2));
    assert_eq!(row0[4], HighlightClass::Variable);

    let row1 = classes(&harness, 1);
    assert!(row1.iter().all(|&c| c == HighlightClass::Comment));

    let row2 = classes(&harness, 2);
    assert!(row2[0..6].iter().all(|&c| c == HighlightClass::Keyword1));
}

/// Opening a block comment recolors the rows below until it is closed
#[test]
fn test_block_comment_cascades_on_screen() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness
        .load_buffer_from_text("y.c", "a\nint b;\nc */\nint d;\n")
        .unwrap();
    let before_last = classes(&harness, 3);

    harness.type_text("/*").unwrap();
    assert!(classes(&harness, 1).iter().all(|&c| c == HighlightClass::MlComment));
    assert!(classes(&harness, 2).iter().all(|&c| c == HighlightClass::MlComment));
    assert_eq!(classes(&harness, 3), before_last);

    // The comment color reaches the terminal too
    let comment_color = harness.screen().cell(1, 2).unwrap().fgcolor();
    assert_eq!(harness.screen().cell(2, 2).unwrap().fgcolor(), comment_color);
    assert_ne!(harness.screen().cell(3, 2).unwrap().fgcolor(), comment_color);

    harness
        .send_key_repeat(KeyCode::Backspace, KeyModifiers::NONE, 2)
        .unwrap();
    assert!(classes(&harness, 1)[0..3]
        .iter()
        .all(|&c| c == HighlightClass::Keyword2));
}

/// Files without a known extension are not highlighted
#[test]
fn test_plain_text_has_no_highlight() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness
        .load_buffer_from_text("notes.txt", "int x = 42; // hi\n")
        .unwrap();
    assert!(classes(&harness, 0).iter().all(|&c| c == HighlightClass::Normal));
    assert!(harness.status_bar_text().ends_with("no ft | 1/1"));
}
