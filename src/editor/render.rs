use super::*;
use crate::view::compositor;
use crate::view::status_bar;
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::queue;

impl Editor {
    /// Build one full frame: text area, status bar, message bar, then the cursor
    ///
    /// The frame is self-contained: it hides the cursor, homes it, redraws
    /// every line and shows the cursor again at its position.
    pub fn render_frame(&mut self) -> Vec<u8> {
        self.scroll();

        let mut out = Vec::new();
        let _ = queue!(out, Hide, MoveTo(0, 0));
        out.extend(compositor::compose(
            &self.document,
            &self.selection,
            &self.viewport,
            &self.theme,
        ));

        let info = self.status_info();
        status_bar::compose_status_bar(&mut out, &info, self.viewport.width);
        let prompt_line = self.prompt.as_ref().map(|p| p.display_line());
        let message = prompt_line.as_deref().or(info.message.as_deref());
        status_bar::compose_message_bar(&mut out, message, self.viewport.width);

        let (y, x) = match &self.prompt {
            Some(prompt) => (
                self.viewport.height + 1,
                prompt
                    .cursor_column()
                    .min(self.viewport.width.saturating_sub(1)),
            ),
            None => {
                let gutter = self.viewport.gutter(self.document.len());
                self.viewport
                    .screen_position(self.cursor.row, info.visual_col, gutter)
            }
        };
        let _ = queue!(
            out,
            MoveTo(to_u16(x), to_u16(y)),
            Show
        );
        out
    }
}

fn to_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}
