//! Incremental find over rendered rows
//!
//! A search session remembers the last matching row and the direction, so
//! repeated "next"/"previous" requests walk the document cyclically. The match
//! is shown by temporarily painting the `Match` class over the row's highlight;
//! the previous classes are saved and put back on the next step or on cancel.

use crate::model::document::Document;
use crate::primitives::highlighter::HighlightClass;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchDirection {
    #[default]
    Forward,
    Backward,
}

/// Where a query matched, in visual columns of the row's rendered text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchMatch {
    pub row: usize,
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(SearchMatch),
    NotFound,
}

/// Classes displayed on a row before the match overlay was painted
#[derive(Debug, Clone)]
struct SavedHighlight {
    row: usize,
    classes: Vec<HighlightClass>,
}

/// State of one find session
#[derive(Debug, Clone, Default)]
pub struct SearchSession {
    query: Vec<u8>,
    last_match: Option<usize>,
    direction: SearchDirection,
    saved: Option<SavedHighlight>,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_match(&self) -> Option<usize> {
        self.last_match
    }

    pub fn direction(&self) -> SearchDirection {
        self.direction
    }

    /// Find `query` starting from the last match, or from `cursor_row` for a new query
    ///
    /// A query that differs from the previous one starts a new session: the
    /// scan begins at the cursor row (inclusive) and runs forward regardless of
    /// `direction`. Otherwise the scan starts one row past the last match in
    /// `direction`. Rows wrap at both ends; every row is visited at most once.
    pub fn find(
        &mut self,
        doc: &mut Document,
        query: &[u8],
        direction: SearchDirection,
        cursor_row: usize,
    ) -> SearchOutcome {
        self.restore(doc);

        if query != self.query.as_slice() {
            self.query = query.to_vec();
            self.last_match = None;
            self.direction = SearchDirection::Forward;
        } else {
            self.direction = direction;
        }

        let len = doc.len();
        if query.is_empty() || len == 0 {
            return SearchOutcome::NotFound;
        }

        let mut current = match self.last_match {
            Some(row) => step(row.min(len - 1), self.direction, len),
            None => cursor_row.min(len - 1),
        };

        for _ in 0..len {
            let found = doc
                .row(current)
                .and_then(|row| find_subslice(row.rendered(), query));
            if let Some(start) = found {
                let hit = SearchMatch {
                    row: current,
                    start,
                    end: start + query.len(),
                };
                self.last_match = Some(current);
                self.paint(doc, hit);
                tracing::debug!("Search match at row {} col {}", hit.row, hit.start);
                return SearchOutcome::Found(hit);
            }
            current = step(current, self.direction, len);
        }

        tracing::debug!("Search for {:?} found nothing", String::from_utf8_lossy(query));
        SearchOutcome::NotFound
    }

    /// End the session: remove the overlay and forget the query
    pub fn cancel(&mut self, doc: &mut Document) {
        self.restore(doc);
        self.query.clear();
        self.last_match = None;
        self.direction = SearchDirection::Forward;
    }

    /// Put back the classes hidden under the current match overlay
    pub fn restore(&mut self, doc: &mut Document) {
        if let Some(saved) = self.saved.take() {
            if let Some(row) = doc.row_mut(saved.row) {
                row.restore_highlight(saved.classes);
            }
        }
    }

    fn paint(&mut self, doc: &mut Document, hit: SearchMatch) {
        if let Some(row) = doc.row_mut(hit.row) {
            self.saved = Some(SavedHighlight {
                row: hit.row,
                classes: row.highlight().to_vec(),
            });
            row.overlay(hit.start, hit.end, HighlightClass::Match);
        }
    }
}

fn step(row: usize, direction: SearchDirection, len: usize) -> usize {
    match direction {
        SearchDirection::Forward => (row + 1) % len,
        SearchDirection::Backward => (row + len - 1) % len,
    }
}

fn find_subslice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.len() > haystack.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}
