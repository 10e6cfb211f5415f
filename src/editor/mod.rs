//! The editor: one document plus everything needed to edit and draw it
//!
//! [`Editor`] owns the document, the cursor, the selection, the viewport and
//! the search session. Key events come in through [`Editor::handle_key`] or
//! [`Editor::handle_event`]; a frame goes out through [`Editor::render_frame`].

mod input;
mod render;

use crate::config::{Config, EditorConfig};
use crate::model::document::Document;
use crate::model::position::Position;
use crate::model::selection::Selection;
use crate::search::SearchSession;
use crate::services::clipboard::Clipboard;
use crate::services::fs;
use crate::view::prompt::{Prompt, PromptType};
use crate::view::theme::Theme;
use crate::view::viewport::Viewport;
use anyhow::Result;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Shortcut overview shown at startup and on Ctrl-H
pub const GUIDE_TEXT: &str = "Ctrl-S: Save | Ctrl-X: Quit | Ctrl-F: Find | Ctrl-G: Goto | Ctrl-K: Delete | Ctrl-C/V: Copy/Paste | Ctrl-H: Help";

/// Rows below the text area: status bar and message bar
const BAR_ROWS: u16 = 2;

/// What the status line shows about the editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusInfo {
    /// File name without its directory
    pub filename: Option<String>,
    pub row_count: usize,
    pub dirty: bool,
    pub syntax_name: &'static str,
    /// Cursor in logical columns
    pub cursor: Position,
    /// Cursor column in the rendered row
    pub visual_col: usize,
    /// Status message, if it has not expired
    pub message: Option<String>,
}

/// Cursor and scroll position to return to when a search is cancelled
#[derive(Debug, Clone, Copy)]
struct SavedView {
    cursor: Position,
    row_offset: usize,
    col_offset: usize,
}

/// The main editor struct
pub struct Editor {
    document: Document,

    /// Logical cursor; `row` may equal the row count (the line after the last)
    cursor: Position,

    selection: Selection,

    viewport: Viewport,

    theme: Theme,

    search: SearchSession,

    /// Open minibuffer prompt, if any
    prompt: Option<Prompt>,

    /// View to restore when the search prompt is cancelled
    saved_view: Option<SavedView>,

    clipboard: Clipboard,

    config: EditorConfig,

    filename: Option<PathBuf>,

    status_message: Option<(String, Instant)>,

    /// Quit requests still needed before a dirty document is abandoned
    quit_times: u32,

    should_quit: bool,
}

impl Editor {
    /// Create an editor with an empty document for a terminal of `width` x `height`
    pub fn new(config: &Config, width: u16, height: u16) -> Self {
        let mut viewport = Viewport::new(width as usize, height.saturating_sub(BAR_ROWS) as usize);
        viewport.line_numbers = config.editor.line_numbers;

        let mut editor = Self {
            document: Document::new(config.editor.tab_stop),
            cursor: Position::zero(),
            selection: Selection::new(),
            viewport,
            theme: Theme::default(),
            search: SearchSession::new(),
            prompt: None,
            saved_view: None,
            clipboard: Clipboard::new(),
            config: config.editor.clone(),
            filename: None,
            status_message: None,
            quit_times: config.editor.quit_confirmations,
            should_quit: false,
        };
        editor.set_status_message(GUIDE_TEXT.to_string());
        editor
    }

    /// Replace the clipboard (tests use an in-process one)
    pub fn with_clipboard(mut self, clipboard: Clipboard) -> Self {
        self.clipboard = clipboard;
        self
    }

    /// Load `path` into the editor, replacing the current document
    ///
    /// A path that does not exist yet opens an empty document bound to that
    /// name, so the first save creates it.
    pub fn open_file(&mut self, path: &Path) -> Result<()> {
        let syntax = crate::primitives::syntax::SyntaxProfile::for_path(path);
        let lines = if path.exists() {
            fs::load_lines(path)?
        } else {
            tracing::info!("{} does not exist yet, starting empty", path.display());
            Vec::new()
        };

        self.document = Document::from_lines(lines, self.config.tab_stop, syntax);
        self.filename = Some(path.to_path_buf());
        self.cursor = Position::zero();
        self.selection.clear();
        self.search = SearchSession::new();
        self.viewport.row_offset = 0;
        self.viewport.col_offset = 0;
        tracing::info!(
            "Opened {} ({} rows, syntax {})",
            path.display(),
            self.document.len(),
            self.document.syntax_name()
        );
        Ok(())
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn cursor(&self) -> Position {
        self.cursor
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn prompt(&self) -> Option<&Prompt> {
        self.prompt.as_ref()
    }

    pub fn filename(&self) -> Option<&Path> {
        self.filename.as_deref()
    }

    pub fn clipboard(&self) -> &Clipboard {
        &self.clipboard
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn set_status_message(&mut self, message: String) {
        tracing::debug!("Status: {}", message);
        self.status_message = Some((message, Instant::now()));
    }

    /// Current status message, unless it has expired
    pub fn status_message(&self) -> Option<&str> {
        self.status_message_at(Instant::now())
    }

    fn status_message_at(&self, now: Instant) -> Option<&str> {
        let timeout = Duration::from_secs(self.config.status_timeout_secs);
        self.status_message
            .as_ref()
            .filter(|(_, set_at)| now.saturating_duration_since(*set_at) < timeout)
            .map(|(message, _)| message.as_str())
    }

    /// Column of the cursor in the rendered row
    pub fn visual_col(&self) -> usize {
        self.document
            .row(self.cursor.row)
            .map_or(0, |row| row.logical_to_visual(self.cursor.col, self.document.tab_stop()))
    }

    pub fn status_info(&self) -> StatusInfo {
        StatusInfo {
            filename: self.filename.as_ref().map(|p| {
                p.file_name()
                    .map_or_else(|| p.display().to_string(), |n| n.to_string_lossy().into_owned())
            }),
            row_count: self.document.len(),
            dirty: self.document.is_dirty(),
            syntax_name: self.document.syntax_name(),
            cursor: self.cursor,
            visual_col: self.visual_col(),
            message: self.status_message().map(str::to_string),
        }
    }

    /// Terminal size changed
    pub fn resize(&mut self, width: u16, height: u16) {
        self.viewport
            .resize(width as usize, height.saturating_sub(BAR_ROWS) as usize);
        self.scroll();
    }

    /// Bring the cursor into the viewport
    pub fn scroll(&mut self) {
        let gutter = self.viewport.gutter(self.document.len());
        let visual_col = self.visual_col();
        self.viewport
            .scroll_to_cursor(self.cursor.row, visual_col, gutter);
    }

    /// Save to the current file name, or ask for one
    pub fn save(&mut self) {
        let Some(path) = self.filename.clone() else {
            self.prompt = Some(Prompt::new("Save as: ".to_string(), PromptType::SaveFileAs));
            return;
        };

        match fs::save(&path, &self.document.serialize()) {
            Ok(written) => {
                self.document.mark_clean();
                self.set_status_message(format!("{written} bytes written to disk"));
            }
            Err(e) => {
                tracing::error!("Save failed: {:#}", e);
                self.set_status_message(format!("Can't save! {e:#}"));
            }
        }
    }

    /// Length of the row under the cursor, 0 past the last row
    fn current_row_len(&self) -> usize {
        self.document.row(self.cursor.row).map_or(0, |row| row.len())
    }
}
