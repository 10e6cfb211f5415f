/// The visible window onto the document
///
/// Offsets are in rows and visual columns. The gutter is drawn inside `width`,
/// so the text area is `width - gutter` columns wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Terminal columns available for gutter + text
    pub width: usize,
    /// Terminal rows available for text
    pub height: usize,
    /// First visible document row
    pub row_offset: usize,
    /// First visible visual column
    pub col_offset: usize,
    /// Draw the line-number gutter
    pub line_numbers: bool,
}

impl Viewport {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            row_offset: 0,
            col_offset: 0,
            line_numbers: true,
        }
    }

    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
    }

    /// Gutter width for a document of `line_count` rows, zero when line numbers are off
    pub fn gutter(&self, line_count: usize) -> usize {
        if self.line_numbers {
            gutter_width(line_count)
        } else {
            0
        }
    }

    /// Columns left for text once the gutter is drawn
    pub fn text_width(&self, gutter: usize) -> usize {
        self.width.saturating_sub(gutter)
    }

    /// Scroll just enough to bring the cursor into view
    ///
    /// `cursor_col` is a visual column in the rendered row, not counting the
    /// gutter; the gutter only narrows the text area.
    pub fn scroll_to_cursor(&mut self, cursor_row: usize, cursor_col: usize, gutter: usize) {
        let height = self.height.max(1);
        if cursor_row < self.row_offset {
            self.row_offset = cursor_row;
        }
        if cursor_row >= self.row_offset + height {
            self.row_offset = cursor_row + 1 - height;
        }

        let text_width = self.text_width(gutter).max(1);
        if cursor_col < self.col_offset {
            self.col_offset = cursor_col;
        }
        if cursor_col >= self.col_offset + text_width {
            self.col_offset = cursor_col + 1 - text_width;
        }
    }

    /// Screen position of a (row, visual column) relative to the top-left of the viewport
    pub fn screen_position(&self, row: usize, col: usize, gutter: usize) -> (usize, usize) {
        (
            row.saturating_sub(self.row_offset),
            col.saturating_sub(self.col_offset) + gutter,
        )
    }
}

/// Gutter width for a document with `line_count` lines: the digits plus one space
pub fn gutter_width(line_count: usize) -> usize {
    let mut digits = 1;
    let mut n = line_count.max(1);
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits + 1
}
