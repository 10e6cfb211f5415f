//! Status bar and message bar rendering

use crate::editor::StatusInfo;
use crossterm::queue;
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::terminal::{Clear, ClearType};

/// Longest file name shown before truncation
const MAX_NAME_WIDTH: usize = 20;

/// Render the inverse-video status bar, ending with `\r\n`
///
/// Left side: file name, row count and modified marker. Right side: syntax
/// name and cursor row. The right side is dropped when it does not fit.
pub fn compose_status_bar(out: &mut Vec<u8>, info: &StatusInfo, width: usize) {
    let name = info.filename.as_deref().unwrap_or("[No Name]");
    let name: String = name.chars().take(MAX_NAME_WIDTH).collect();
    let modified = if info.dirty { " (modified)" } else { "" };
    let left = format!("{} - {} lines{}", name, info.row_count, modified);
    let right = format!(
        "{} | {}/{}",
        info.syntax_name,
        info.cursor.row + 1,
        info.row_count
    );

    let mut line: String = left.chars().take(width).collect();
    let used = line.chars().count();
    let right_len = right.chars().count();
    if used + right_len <= width {
        line.extend(std::iter::repeat(' ').take(width - used - right_len));
        line.push_str(&right);
    } else {
        line.extend(std::iter::repeat(' ').take(width - used));
    }

    let _ = queue!(
        out,
        SetAttribute(Attribute::Reverse),
        Print(line),
        SetAttribute(Attribute::Reset),
    );
    out.extend_from_slice(b"\r\n");
}

/// Render the message bar: the prompt line if one is open, else the status message
pub fn compose_message_bar(out: &mut Vec<u8>, message: Option<&str>, width: usize) {
    let _ = queue!(out, Clear(ClearType::CurrentLine));
    if let Some(message) = message {
        let text: String = message.chars().take(width).collect();
        let _ = queue!(out, Print(text));
    }
}
