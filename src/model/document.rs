//! The row store
//!
//! Every content mutation renders the touched row, re-highlights it, and lets
//! the highlighter cascade into the following rows before returning. Operations
//! on rows or columns that do not exist are silent no-ops.

use crate::model::row::Row;
use crate::primitives::highlighter;
use crate::primitives::render_transform::DEFAULT_TAB_STOP;
use crate::primitives::syntax::SyntaxProfile;
use std::path::Path;

/// An ordered sequence of rows, plus the settings that derive their rendering
#[derive(Debug, Clone)]
pub struct Document {
    rows: Vec<Row>,
    syntax: Option<&'static SyntaxProfile>,
    tab_stop: usize,
    /// Number of mutations since the last save
    dirty: usize,
}

impl Default for Document {
    fn default() -> Self {
        Self::new(DEFAULT_TAB_STOP)
    }
}

impl Document {
    /// Create an empty document
    pub fn new(tab_stop: usize) -> Self {
        Self {
            rows: Vec::new(),
            syntax: None,
            tab_stop: tab_stop.max(1),
            dirty: 0,
        }
    }

    /// Seed a document from lines supplied by the file loader
    ///
    /// Seeding does not mark the document dirty.
    pub fn from_lines<I, S>(lines: I, tab_stop: usize, syntax: Option<&'static SyntaxProfile>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
    {
        let tab_stop = tab_stop.max(1);
        let rows = lines
            .into_iter()
            .enumerate()
            .map(|(index, line)| Row::new(index, line.as_ref().to_vec(), tab_stop))
            .collect();
        let mut doc = Self {
            rows,
            syntax,
            tab_stop,
            dirty: 0,
        };
        doc.rehighlight_all();
        doc
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, at: usize) -> Option<&Row> {
        self.rows.get(at)
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn tab_stop(&self) -> usize {
        self.tab_stop
    }

    pub fn syntax(&self) -> Option<&'static SyntaxProfile> {
        self.syntax
    }

    /// Name of the active syntax profile, or "no ft"
    pub fn syntax_name(&self) -> &'static str {
        self.syntax.map_or("no ft", |s| s.name)
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty > 0
    }

    /// Forget pending modifications (after a successful save)
    pub fn mark_clean(&mut self) {
        self.dirty = 0;
    }

    /// Switch syntax profile and re-highlight every row top to bottom
    pub fn set_syntax(&mut self, syntax: Option<&'static SyntaxProfile>) {
        self.syntax = syntax;
        self.rehighlight_all();
    }

    /// Pick the syntax profile that matches a file name
    pub fn select_syntax_for(&mut self, path: &Path) {
        let syntax = SyntaxProfile::for_path(path);
        tracing::debug!(
            "Syntax for {}: {}",
            path.display(),
            syntax.map_or("none", |s| s.name)
        );
        self.set_syntax(syntax);
    }

    /// Rows joined by `\n`, each with a trailing newline
    pub fn serialize(&self) -> Vec<u8> {
        let total: usize = self.rows.iter().map(|r| r.len() + 1).sum();
        let mut out = Vec::with_capacity(total);
        for row in &self.rows {
            out.extend_from_slice(row.content());
            out.push(b'\n');
        }
        out
    }

    /// Insert a new row at `at`, shifting later rows down
    pub fn insert(&mut self, at: usize, content: &[u8]) {
        if at > self.rows.len() {
            return;
        }
        let mut row = Row::new(at, content.to_vec(), self.tab_stop);
        // Start from the state the old occupant of `at` used to receive, so the
        // cascade only continues if the new row actually changes it.
        let carried_in = at > 0 && self.rows[at - 1].open_comment_at_end();
        row.set_highlight(vec![Default::default(); row.rendered().len()], carried_in);
        self.rows.insert(at, row);
        self.renumber_from(at + 1);
        highlighter::update_highlight(&mut self.rows, at, self.syntax);
        self.dirty += 1;
    }

    /// Remove the row at `at`, shifting later rows up
    pub fn delete(&mut self, at: usize) {
        if at >= self.rows.len() {
            return;
        }
        let removed = self.rows.remove(at);
        self.renumber_from(at);

        let carried_in = at > 0 && self.rows[at - 1].open_comment_at_end();
        if at < self.rows.len() && removed.open_comment_at_end() != carried_in {
            highlighter::update_highlight(&mut self.rows, at, self.syntax);
        }
        self.dirty += 1;
    }

    /// Append bytes to the end of row `at`
    pub fn append_to(&mut self, at: usize, suffix: &[u8]) {
        let Some(row) = self.rows.get_mut(at) else {
            return;
        };
        row.content_mut().extend_from_slice(suffix);
        self.update_row(at);
    }

    /// Insert a byte at a logical column; columns past the end append
    pub fn insert_char(&mut self, at: usize, col: usize, ch: u8) {
        let Some(row) = self.rows.get_mut(at) else {
            return;
        };
        let content = row.content_mut();
        let col = col.min(content.len());
        content.insert(col, ch);
        self.update_row(at);
    }

    /// Delete the byte at a logical column
    pub fn delete_char(&mut self, at: usize, col: usize) {
        let Some(row) = self.rows.get_mut(at) else {
            return;
        };
        if col >= row.len() {
            return;
        }
        row.content_mut().remove(col);
        self.update_row(at);
    }

    /// Delete the half-open byte range `[start, end)` of row `at`
    pub fn remove_range(&mut self, at: usize, start: usize, end: usize) {
        let Some(row) = self.rows.get_mut(at) else {
            return;
        };
        let end = end.min(row.len());
        if start >= end {
            return;
        }
        row.content_mut().drain(start..end);
        self.update_row(at);
    }

    /// Drop everything from `col` to the end of row `at`
    pub fn truncate(&mut self, at: usize, col: usize) {
        let Some(row) = self.rows.get_mut(at) else {
            return;
        };
        if col >= row.len() {
            return;
        }
        row.content_mut().truncate(col);
        self.update_row(at);
    }

    /// Break row `at` at `col`; the tail becomes row `at + 1`
    pub fn split(&mut self, at: usize, col: usize) {
        let Some(row) = self.rows.get(at) else {
            return;
        };
        let col = col.min(row.len());
        let tail = row.content()[col..].to_vec();
        self.insert(at + 1, &tail);
        self.truncate(at, col);
    }

    /// Render and highlight one row after its content changed
    fn update_row(&mut self, at: usize) {
        self.rows[at].rerender(self.tab_stop);
        highlighter::update_highlight(&mut self.rows, at, self.syntax);
        self.dirty += 1;
    }

    fn renumber_from(&mut self, from: usize) {
        for (index, row) in self.rows.iter_mut().enumerate().skip(from) {
            row.set_index(index);
        }
    }

    fn rehighlight_all(&mut self) {
        let mut open_in = false;
        for row in &mut self.rows {
            let result = highlighter::highlight_row(row.rendered(), self.syntax, open_in);
            open_in = result.open_comment_at_end;
            row.set_highlight(result.classes, result.open_comment_at_end);
        }
    }

    /// Mutable row access for overlays that do not touch content
    pub(crate) fn row_mut(&mut self, at: usize) -> Option<&mut Row> {
        self.rows.get_mut(at)
    }
}
