//! Anchor/active selection over logical (row, column) positions

use crate::model::document::Document;
use crate::model::position::Position;

/// A selection that may be inactive
///
/// The anchor stays where the selection started; the active end follows the
/// cursor. They are not ordered: use [`Selection::normalized`] before doing
/// anything with the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    range: Option<(Position, Position)>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new selection collapsed at `pos`
    pub fn start(&mut self, pos: Position) {
        self.range = Some((pos, pos));
    }

    /// Move the active end to `pos`, starting a selection there if none is active
    pub fn extend(&mut self, pos: Position) {
        match &mut self.range {
            Some((_, active)) => *active = pos,
            None => self.range = Some((pos, pos)),
        }
    }

    pub fn clear(&mut self) {
        self.range = None;
    }

    pub fn is_active(&self) -> bool {
        self.range.is_some()
    }

    /// Active but covering nothing
    pub fn is_empty(&self) -> bool {
        matches!(self.range, Some((anchor, active)) if anchor == active)
    }

    pub fn anchor(&self) -> Option<Position> {
        self.range.map(|(anchor, _)| anchor)
    }

    pub fn active(&self) -> Option<Position> {
        self.range.map(|(_, active)| active)
    }

    /// The two ends in document order
    pub fn normalized(&self) -> Option<(Position, Position)> {
        self.range.map(|(a, b)| if a <= b { (a, b) } else { (b, a) })
    }

    /// Whether the logical position `(row, col)` is selected
    ///
    /// The range is half-open: the column of the high end is not included.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        let Some((low, high)) = self.normalized() else {
            return false;
        };
        if row < low.row || row > high.row {
            return false;
        }
        if row == low.row && col < low.col {
            return false;
        }
        if row == high.row && col >= high.col {
            return false;
        }
        true
    }

    /// Text covered by the selection, rows joined with `\n`
    pub fn selected_text(&self, doc: &Document) -> Vec<u8> {
        let Some((low, high)) = self.normalized() else {
            return Vec::new();
        };
        let mut out = Vec::new();
        for row_index in low.row..=high.row.min(doc.len().saturating_sub(1)) {
            let Some(row) = doc.row(row_index) else {
                break;
            };
            let content = row.content();
            let start = if row_index == low.row { low.col.min(content.len()) } else { 0 };
            let end = if row_index == high.row { high.col.min(content.len()) } else { content.len() };
            if row_index > low.row {
                out.push(b'\n');
            }
            if start < end {
                out.extend_from_slice(&content[start..end]);
            }
        }
        out
    }

    /// Delete the selected text and deactivate the selection
    ///
    /// A multi-row range merges the head of its first row with the tail of its
    /// last row and drops every row in between. Returns where the cursor goes
    /// (the start of the range), or `None` if nothing was selected.
    pub fn delete_range(&mut self, doc: &mut Document) -> Option<Position> {
        let (low, high) = self.normalized()?;
        self.clear();
        if doc.is_empty() || low.row >= doc.len() {
            return None;
        }

        let last = doc.len() - 1;
        let (high_row, high_col) = if high.row > last {
            (last, doc.row(last).map_or(0, |r| r.len()))
        } else {
            (high.row, high.col)
        };
        let low_col = low.col.min(doc.row(low.row).map_or(0, |r| r.len()));

        if low.row == high_row {
            doc.remove_range(low.row, low_col, high_col);
        } else {
            let tail = doc
                .row(high_row)
                .map(|r| r.content()[high_col.min(r.len())..].to_vec())
                .unwrap_or_default();
            doc.truncate(low.row, low_col);
            doc.append_to(low.row, &tail);
            for at in (low.row + 1..=high_row).rev() {
                doc.delete(at);
            }
        }

        tracing::debug!(
            "Deleted selection {}:{} .. {}:{}",
            low.row,
            low_col,
            high_row,
            high_col
        );
        Some(Position::new(low.row, low_col))
    }
}
