// EditorTestHarness - Virtual terminal environment for E2E testing

use crossterm::event::{KeyCode, KeyModifiers};
use qtedit::config::Config;
use qtedit::editor::Editor;
use qtedit::services::clipboard::Clipboard;
use std::io;
use std::path::Path;
use tempfile::TempDir;

/// Terminal layout constants
pub mod layout {
    /// Number of rows reserved at the bottom (status bar + message line)
    pub const BOTTOM_RESERVED_ROWS: usize = 2;

    /// Get the status bar row for a given terminal height
    #[inline]
    pub const fn status_bar_row(terminal_height: usize) -> usize {
        terminal_height - 2
    }

    /// Get the message line row for a given terminal height
    #[inline]
    pub const fn message_line_row(terminal_height: usize) -> usize {
        terminal_height - 1
    }
}

/// Drives an [`Editor`] and feeds every frame it produces to a vt100 parser
pub struct EditorTestHarness {
    editor: Editor,

    /// Scratch directory for files created by the test
    temp_dir: TempDir,

    /// VT100 parser for testing real ANSI terminal output
    /// This simulates how a real terminal would interpret the escape sequences
    vt100_parser: vt100::Parser,

    term_height: u16,
}

impl EditorTestHarness {
    /// Create new test harness with virtual terminal
    pub fn new(width: u16, height: u16) -> io::Result<Self> {
        Self::with_config(width, height, Config::default())
    }

    /// Create with custom config
    pub fn with_config(width: u16, height: u16, config: Config) -> io::Result<Self> {
        let temp_dir = TempDir::new()?;
        let editor = Editor::new(&config, width, height).with_clipboard(Clipboard::internal_only());

        Ok(EditorTestHarness {
            editor,
            temp_dir,
            vt100_parser: vt100::Parser::new(height, width, 0),
            term_height: height,
        })
    }

    /// Directory the test may write files into
    pub fn temp_path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn open_file(&mut self, path: &Path) -> io::Result<()> {
        self.editor
            .open_file(path)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("{e:#}")))?;
        self.render()
    }

    /// Write `content` to a file in the temp dir and open it
    pub fn load_buffer_from_text(&mut self, name: &str, content: &str) -> io::Result<()> {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, content)?;
        self.open_file(&path)
    }

    /// Simulate a key press
    pub fn send_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> io::Result<()> {
        self.editor.handle_key(code, modifiers);
        self.render()
    }

    /// Send the same key press multiple times, rendering once at the end
    pub fn send_key_repeat(
        &mut self,
        code: KeyCode,
        modifiers: KeyModifiers,
        count: usize,
    ) -> io::Result<()> {
        for _ in 0..count {
            self.editor.handle_key(code, modifiers);
        }
        self.render()
    }

    /// Type a string; `\n` and `\t` are sent as Enter and Tab
    pub fn type_text(&mut self, text: &str) -> io::Result<()> {
        for ch in text.chars() {
            let code = match ch {
                '\n' => KeyCode::Enter,
                '\t' => KeyCode::Tab,
                _ => KeyCode::Char(ch),
            };
            self.editor.handle_key(code, KeyModifiers::NONE);
        }
        self.render()
    }

    /// Render a frame and feed it to the virtual terminal
    pub fn render(&mut self) -> io::Result<()> {
        let frame = self.editor.render_frame();
        self.vt100_parser.process(&frame);
        Ok(())
    }

    pub fn screen(&self) -> &vt100::Screen {
        self.vt100_parser.screen()
    }

    /// Get the screen content as a string, one line per row
    pub fn screen_to_string(&self) -> String {
        self.screen().contents()
    }

    /// Text of one screen row, trailing blanks removed
    pub fn get_row_text(&self, y: u16) -> String {
        let (_, width) = self.screen().size();
        self.screen()
            .rows(0, width)
            .nth(y as usize)
            .unwrap_or_default()
            .trim_end()
            .to_string()
    }

    pub fn status_bar_text(&self) -> String {
        self.get_row_text(layout::status_bar_row(self.term_height as usize) as u16)
    }

    pub fn message_line_text(&self) -> String {
        self.get_row_text(layout::message_line_row(self.term_height as usize) as u16)
    }

    /// Verify text appears on screen
    pub fn assert_screen_contains(&self, text: &str) {
        let screen = self.screen_to_string();
        assert!(
            screen.contains(text),
            "Expected screen to contain '{text}'\nScreen content:\n{screen}"
        );
    }

    /// Verify text does not appear on screen
    pub fn assert_screen_not_contains(&self, text: &str) {
        let screen = self.screen_to_string();
        assert!(
            !screen.contains(text),
            "Expected screen to not contain '{text}'\nScreen content:\n{screen}"
        );
    }

    /// Document content, rows joined by `\n` without a trailing newline
    pub fn get_buffer_content(&self) -> String {
        self.editor
            .document()
            .rows()
            .iter()
            .map(|row| String::from_utf8_lossy(row.content()).into_owned())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Verify buffer content matches expected
    pub fn assert_buffer_content(&self, expected: &str) {
        let actual = self.get_buffer_content();
        assert_eq!(actual, expected, "Buffer content mismatch");
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut Editor {
        &mut self.editor
    }

    pub fn should_quit(&self) -> bool {
        self.editor.should_quit()
    }

    /// Screen cursor position as (x, y)
    pub fn screen_cursor_position(&self) -> (u16, u16) {
        let (row, col) = self.screen().cursor_position();
        (col, row)
    }
}
