use super::*;
use crate::input::keybindings::{self, EditorEvent, Motion};
use crate::search::{SearchDirection, SearchOutcome};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

impl Editor {
    /// Handle a key press
    ///
    /// This is the entry point used by the event loop and by tests.
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        let event = keybindings::resolve(&KeyEvent::new(code, modifiers));
        self.handle_event(event);
    }

    /// Apply one editing event, then scroll the cursor into view
    pub fn handle_event(&mut self, event: EditorEvent) {
        tracing::trace!("Editor.handle_event: {:?}", event);
        if let EditorEvent::Resize(width, height) = event {
            self.resize(width, height);
            return;
        }

        if self.prompt.is_some() {
            self.handle_prompt_event(event);
        } else {
            self.handle_normal_event(event);
        }

        if event != EditorEvent::Quit {
            self.quit_times = self.config.quit_confirmations;
        }
        self.scroll();
    }

    fn handle_normal_event(&mut self, event: EditorEvent) {
        match event {
            EditorEvent::InsertChar(ch) => {
                self.selection.clear();
                self.insert_char(ch);
            }
            EditorEvent::InsertNewline => {
                self.selection.clear();
                self.insert_newline();
            }
            EditorEvent::DeleteBackward => {
                if !self.delete_selection() {
                    self.delete_backward();
                }
            }
            EditorEvent::DeleteForward => {
                if !self.delete_selection() {
                    self.delete_forward();
                }
            }
            EditorEvent::Move(motion) => {
                self.selection.clear();
                self.move_cursor(motion);
            }
            EditorEvent::Select(motion) => {
                if !self.selection.is_active() {
                    self.selection.start(self.cursor);
                }
                self.move_cursor(motion);
                self.selection.extend(self.cursor);
            }
            EditorEvent::Save => self.save(),
            EditorEvent::Quit => self.request_quit(),
            EditorEvent::Find => self.start_search(),
            EditorEvent::GotoLine => {
                self.prompt = Some(Prompt::new("Go to line: ".to_string(), PromptType::GotoLine));
            }
            EditorEvent::DeleteRow => self.delete_row(),
            EditorEvent::Copy => self.copy(),
            EditorEvent::Paste => self.paste(),
            EditorEvent::Help => self.set_status_message(GUIDE_TEXT.to_string()),
            EditorEvent::Cancel => self.selection.clear(),
            EditorEvent::Resize(..) | EditorEvent::None => {}
        }
    }

    fn handle_prompt_event(&mut self, event: EditorEvent) {
        let Some(prompt_type) = self.prompt.as_ref().map(|p| p.prompt_type) else {
            return;
        };

        match event {
            EditorEvent::InsertChar(ch) if !ch.is_control() => {
                if prompt_type == PromptType::GotoLine && !ch.is_ascii_digit() {
                    return;
                }
                if let Some(prompt) = self.prompt.as_mut() {
                    prompt.insert_char(ch);
                }
                if prompt_type == PromptType::Search {
                    self.search_step(SearchDirection::Forward);
                }
            }
            EditorEvent::DeleteBackward => {
                if let Some(prompt) = self.prompt.as_mut() {
                    prompt.backspace();
                }
                if prompt_type == PromptType::Search {
                    self.search_step(SearchDirection::Forward);
                }
            }
            EditorEvent::Move(Motion::Right) | EditorEvent::Move(Motion::Down)
                if prompt_type == PromptType::Search =>
            {
                self.search_step(SearchDirection::Forward);
            }
            EditorEvent::Move(Motion::Left) | EditorEvent::Move(Motion::Up)
                if prompt_type == PromptType::Search =>
            {
                self.search_step(SearchDirection::Backward);
            }
            EditorEvent::InsertNewline => self.confirm_prompt(),
            EditorEvent::Cancel => self.cancel_prompt(),
            _ => {}
        }
    }

    fn confirm_prompt(&mut self) {
        let Some(prompt) = self.prompt.take() else {
            return;
        };

        match prompt.prompt_type {
            PromptType::Search => {
                self.search.cancel(&mut self.document);
                self.saved_view = None;
            }
            PromptType::GotoLine => match prompt.input.parse::<usize>() {
                Ok(line) if line >= 1 && line <= self.document.len() => {
                    self.selection.clear();
                    self.cursor = Position::new(line - 1, 0);
                }
                _ => self.set_status_message(format!("Invalid line number: {}", prompt.input)),
            },
            PromptType::SaveFileAs => {
                if prompt.input.is_empty() {
                    self.set_status_message("Save aborted".to_string());
                    return;
                }
                let path = PathBuf::from(&prompt.input);
                self.document.select_syntax_for(&path);
                self.filename = Some(path);
                self.save();
            }
        }
    }

    fn cancel_prompt(&mut self) {
        let Some(prompt) = self.prompt.take() else {
            return;
        };
        if prompt.prompt_type == PromptType::Search {
            self.search.cancel(&mut self.document);
            if let Some(saved) = self.saved_view.take() {
                self.cursor = saved.cursor;
                self.viewport.row_offset = saved.row_offset;
                self.viewport.col_offset = saved.col_offset;
            }
        }
    }

    fn start_search(&mut self) {
        self.selection.clear();
        self.search.cancel(&mut self.document);
        self.saved_view = Some(SavedView {
            cursor: self.cursor,
            row_offset: self.viewport.row_offset,
            col_offset: self.viewport.col_offset,
        });
        self.prompt = Some(Prompt::new("Search: ".to_string(), PromptType::Search));
    }

    /// Run the search for the prompt's current query
    fn search_step(&mut self, direction: SearchDirection) {
        let Some(query) = self.prompt.as_ref().map(|p| p.input.clone()) else {
            return;
        };
        let outcome = self
            .search
            .find(&mut self.document, query.as_bytes(), direction, self.cursor.row);

        if let SearchOutcome::Found(hit) = outcome {
            let tab_stop = self.document.tab_stop();
            let col = self
                .document
                .row(hit.row)
                .map_or(0, |row| row.visual_to_logical(hit.start, tab_stop));
            self.cursor = Position::new(hit.row, col);
            // Put the match at the top of the screen
            self.viewport.row_offset = hit.row;
        }
    }

    fn request_quit(&mut self) {
        if self.document.is_dirty() && self.quit_times > 0 {
            let times = self.quit_times;
            self.set_status_message(format!(
                "WARNING: File has unsaved changes. Press Ctrl-X {} more time{} to quit.",
                times,
                if times == 1 { "" } else { "s" }
            ));
            self.quit_times -= 1;
            return;
        }
        tracing::info!("Quit requested");
        self.should_quit = true;
    }

    fn move_cursor(&mut self, motion: Motion) {
        let len = self.document.len();
        match motion {
            Motion::Left => {
                if self.cursor.col > 0 {
                    self.cursor.col -= 1;
                } else if self.cursor.row > 0 {
                    self.cursor.row -= 1;
                    self.cursor.col = self.current_row_len();
                }
            }
            Motion::Right => {
                if self.cursor.row < len {
                    if self.cursor.col < self.current_row_len() {
                        self.cursor.col += 1;
                    } else {
                        self.cursor.row += 1;
                        self.cursor.col = 0;
                    }
                }
            }
            Motion::Up => self.cursor.row = self.cursor.row.saturating_sub(1),
            Motion::Down => {
                if self.cursor.row < len {
                    self.cursor.row += 1;
                }
            }
            Motion::LineStart => self.cursor.col = 0,
            Motion::LineEnd => self.cursor.col = self.current_row_len(),
            Motion::PageUp => {
                self.cursor.row = self.viewport.row_offset.saturating_sub(self.viewport.height);
            }
            Motion::PageDown => {
                let bottom = self.viewport.row_offset + self.viewport.height.saturating_sub(1);
                self.cursor.row = (bottom + self.viewport.height).min(len);
            }
        }
        self.cursor.col = self.cursor.col.min(self.current_row_len());
    }

    /// Insert a typed character at the cursor
    ///
    /// Non-ASCII characters are inserted as their UTF-8 bytes; columns count bytes.
    fn insert_char(&mut self, ch: char) {
        if self.cursor.row == self.document.len() {
            self.document.insert(self.cursor.row, b"");
        }
        let mut buf = [0u8; 4];
        for &byte in ch.encode_utf8(&mut buf).as_bytes() {
            self.document.insert_char(self.cursor.row, self.cursor.col, byte);
            self.cursor.col += 1;
        }
    }

    fn insert_newline(&mut self) {
        if self.cursor.col == 0 {
            self.document.insert(self.cursor.row, b"");
        } else {
            self.document.split(self.cursor.row, self.cursor.col);
        }
        self.cursor.row += 1;
        self.cursor.col = 0;
    }

    /// Delete the selection if one covers anything; returns whether it did
    fn delete_selection(&mut self) -> bool {
        if !self.selection.is_active() || self.selection.is_empty() {
            self.selection.clear();
            return false;
        }
        if let Some(pos) = self.selection.delete_range(&mut self.document) {
            self.cursor = pos;
        }
        true
    }

    fn delete_backward(&mut self) {
        let Position { row, col } = self.cursor;
        if row >= self.document.len() {
            // Past the last row: just step back onto it
            if row > 0 {
                self.cursor = Position::new(row - 1, 0);
                self.cursor.col = self.current_row_len();
            }
            return;
        }
        if col > 0 {
            self.document.delete_char(row, col - 1);
            self.cursor.col -= 1;
        } else if row > 0 {
            let prev_len = self.document.row(row - 1).map_or(0, |r| r.len());
            let content = self
                .document
                .row(row)
                .map(|r| r.content().to_vec())
                .unwrap_or_default();
            self.document.append_to(row - 1, &content);
            self.document.delete(row);
            self.cursor = Position::new(row - 1, prev_len);
        }
    }

    fn delete_forward(&mut self) {
        let Position { row, col } = self.cursor;
        if row >= self.document.len() {
            return;
        }
        if col < self.current_row_len() {
            self.document.delete_char(row, col);
        } else if row + 1 < self.document.len() {
            let next = self
                .document
                .row(row + 1)
                .map(|r| r.content().to_vec())
                .unwrap_or_default();
            self.document.append_to(row, &next);
            self.document.delete(row + 1);
        }
    }

    fn delete_row(&mut self) {
        if self.cursor.row >= self.document.len() {
            return;
        }
        self.selection.clear();
        self.document.delete(self.cursor.row);
        self.cursor.col = self.cursor.col.min(self.current_row_len());
        self.set_status_message(format!("Deleted line {}", self.cursor.row + 1));
    }

    /// Copy the selection, or the current row when nothing is selected
    fn copy(&mut self) {
        let bytes = if self.selection.is_active() && !self.selection.is_empty() {
            self.selection.selected_text(&self.document)
        } else {
            match self.document.row(self.cursor.row) {
                Some(row) => row.content().to_vec(),
                None => return,
            }
        };
        let len = bytes.len();
        self.clipboard.copy(String::from_utf8_lossy(&bytes).into_owned());
        self.set_status_message(format!("Copied {len} bytes"));
    }

    /// Replay the clipboard as typed input, up to the paste limit
    fn paste(&mut self) {
        let Some(text) = self.clipboard.paste() else {
            self.set_status_message("Clipboard is empty".to_string());
            return;
        };
        self.selection.clear();

        let limit = self.config.paste_limit;
        let mut inserted = 0;
        for ch in text.chars() {
            if inserted + ch.len_utf8() > limit {
                tracing::warn!(
                    "Paste truncated: {} of {} bytes inserted",
                    inserted,
                    text.len()
                );
                self.set_status_message(format!("Paste truncated to {limit} bytes"));
                return;
            }
            inserted += ch.len_utf8();
            match ch {
                '\n' => self.insert_newline(),
                '\r' => {}
                _ => self.insert_char(ch),
            }
        }
        self.set_status_message(format!("Pasted {inserted} bytes"));
    }
}
