use crate::primitives::highlighter::HighlightClass;
use crate::primitives::render_transform;

/// One line of the document
///
/// `content` is private: every mutation goes through [`crate::model::document::Document`],
/// which re-renders and re-highlights the row before handing control back, so
/// `rendered` and `highlight` are never observed out of date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    index: usize,
    content: Vec<u8>,
    rendered: Vec<u8>,
    highlight: Vec<HighlightClass>,
    open_comment_at_end: bool,
}

impl Row {
    /// Create a row and render it. Highlighting is left to the caller.
    pub(crate) fn new(index: usize, content: Vec<u8>, tab_stop: usize) -> Self {
        let rendered = render_transform::render(&content, tab_stop);
        let highlight = vec![HighlightClass::Normal; rendered.len()];
        Self {
            index,
            content,
            rendered,
            highlight,
            open_comment_at_end: false,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    pub fn rendered(&self) -> &[u8] {
        &self.rendered
    }

    pub fn highlight(&self) -> &[HighlightClass] {
        &self.highlight
    }

    pub fn open_comment_at_end(&self) -> bool {
        self.open_comment_at_end
    }

    /// Length of the raw content in bytes
    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Visual column of a logical column in this row
    pub fn logical_to_visual(&self, logical_col: usize, tab_stop: usize) -> usize {
        render_transform::logical_to_visual(&self.content, logical_col, tab_stop)
    }

    /// Logical column that owns a visual column in this row
    pub fn visual_to_logical(&self, visual_col: usize, tab_stop: usize) -> usize {
        render_transform::visual_to_logical(&self.content, visual_col, tab_stop)
    }

    pub(crate) fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    /// Mutable access to the raw bytes; callers must [`Row::rerender`] afterwards
    pub(crate) fn content_mut(&mut self) -> &mut Vec<u8> {
        &mut self.content
    }

    /// Recompute `rendered` from `content`
    ///
    /// The highlight is reset to `Normal` until the next highlight pass so its
    /// length always matches the rendered text.
    pub(crate) fn rerender(&mut self, tab_stop: usize) {
        self.rendered = render_transform::render(&self.content, tab_stop);
        self.highlight.clear();
        self.highlight.resize(self.rendered.len(), HighlightClass::Normal);
    }

    /// Store a highlight pass result; returns true if the carried-out comment state changed
    pub(crate) fn set_highlight(&mut self, classes: Vec<HighlightClass>, open_comment_at_end: bool) -> bool {
        debug_assert_eq!(classes.len(), self.rendered.len());
        self.highlight = classes;
        let changed = self.open_comment_at_end != open_comment_at_end;
        self.open_comment_at_end = open_comment_at_end;
        changed
    }

    /// Overwrite displayed classes in a visual range (search overlay)
    pub(crate) fn overlay(&mut self, start: usize, end: usize, class: HighlightClass) {
        let end = end.min(self.highlight.len());
        if start < end {
            self.highlight[start..end].fill(class);
        }
    }

    /// Put back classes saved before an overlay
    pub(crate) fn restore_highlight(&mut self, saved: Vec<HighlightClass>) {
        if saved.len() == self.highlight.len() {
            self.highlight = saved;
        }
    }
}
