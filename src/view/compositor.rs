//! Frame composition
//!
//! Turns the visible slice of the document into terminal output: a line-number
//! gutter, the rendered text with its highlight colors, and the selection on
//! top. Colors are switched only when the effective class changes between two
//! adjacent bytes.

use crate::model::document::Document;
use crate::model::selection::Selection;
use crate::primitives::highlighter::HighlightClass;
use crate::primitives::render_transform;
use crate::view::theme::Theme;
use crate::view::viewport::Viewport;
use crossterm::style::{Print, ResetColor, SetColors};
use crossterm::terminal::{Clear, ClearType};
use crossterm::{queue, Command};

/// Banner shown in the middle of an empty document
pub const WELCOME: &str = concat!("QTEdit -- version ", env!("CARGO_PKG_VERSION"));

/// Queue a command into an in-memory frame
fn emit(out: &mut Vec<u8>, command: impl Command) {
    // Writing into a Vec cannot fail
    let _ = queue!(out, command);
}

/// Compose the text area: one line per viewport row, each ending in `\r\n`
pub fn compose(doc: &Document, selection: &Selection, viewport: &Viewport, theme: &Theme) -> Vec<u8> {
    let gutter = viewport.gutter(doc.len());
    let text_width = viewport.text_width(gutter);
    let mut out = Vec::with_capacity(viewport.height * (viewport.width + 16));

    for y in 0..viewport.height {
        let file_row = y + viewport.row_offset;
        if file_row < doc.len() {
            compose_row(
                &mut out,
                doc,
                selection,
                file_row,
                gutter.min(viewport.width),
                viewport.col_offset,
                text_width,
                theme,
            );
        } else if doc.is_empty() && y == viewport.height / 3 {
            compose_welcome(&mut out, viewport.width);
        } else {
            out.push(b'~');
        }

        emit(&mut out, ResetColor);
        emit(&mut out, Clear(ClearType::UntilNewLine));
        out.extend_from_slice(b"\r\n");
    }
    out
}

#[allow(clippy::too_many_arguments)]
fn compose_row(
    out: &mut Vec<u8>,
    doc: &Document,
    selection: &Selection,
    file_row: usize,
    gutter: usize,
    col_offset: usize,
    text_width: usize,
    theme: &Theme,
) {
    let Some(row) = doc.row(file_row) else {
        return;
    };
    if gutter > 0 {
        let number = format!("{:<width$}", file_row + 1, width = gutter);
        out.extend_from_slice(&number.as_bytes()[..gutter.min(number.len())]);
    }

    let rendered = row.rendered();
    let start = col_offset.min(rendered.len());
    let end = col_offset.saturating_add(text_width).min(rendered.len());
    if start >= end {
        return;
    }

    // Logical column per rendered byte, only needed to test the selection
    let logical = selection
        .is_active()
        .then(|| render_transform::logical_columns(row.content(), doc.tab_stop()));

    let mut current = HighlightClass::Normal;
    for visual in start..end {
        let selected = logical
            .as_ref()
            .is_some_and(|cols| selection.contains(file_row, cols[visual]));
        let class = if selected {
            HighlightClass::Selection
        } else {
            row.highlight()[visual]
        };

        if class != current {
            emit(out, SetColors(theme.colors(class)));
            current = class;
        }

        let byte = rendered[visual];
        out.push(if byte.is_ascii_control() { b'?' } else { byte });
    }
}

fn compose_welcome(out: &mut Vec<u8>, width: usize) {
    let len = WELCOME.len().min(width);
    let mut padding = (width - len) / 2;
    if padding > 0 {
        out.push(b'~');
        padding -= 1;
    }
    out.extend(std::iter::repeat(b' ').take(padding));
    emit(out, Print(&WELCOME[..len]));
}
