use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Cursor motions, shared by plain movement and selection extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    Left,
    Right,
    Up,
    Down,
    LineStart,
    LineEnd,
    PageUp,
    PageDown,
}

/// Abstract editing events the editor understands
///
/// The editor decides what an event means in context: while a prompt is open,
/// characters go to the prompt input and arrows step through search matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorEvent {
    InsertChar(char),
    InsertNewline,
    DeleteBackward,
    DeleteForward,
    /// Move the cursor, dropping any selection
    Move(Motion),
    /// Move the cursor, extending the selection
    Select(Motion),
    Save,
    Quit,
    Find,
    GotoLine,
    DeleteRow,
    Copy,
    Paste,
    Help,
    /// Escape: cancel a prompt or drop the selection
    Cancel,
    Resize(u16, u16),
    /// Key with no binding
    None,
}

/// Map a key press to an editing event
///
/// Key releases are ignored.
pub fn resolve(event: &KeyEvent) -> EditorEvent {
    if event.kind == KeyEventKind::Release {
        return EditorEvent::None;
    }
    tracing::trace!("resolve: code={:?}, modifiers={:?}", event.code, event.modifiers);

    let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
    let shift = event.modifiers.contains(KeyModifiers::SHIFT);

    if ctrl {
        return match event.code {
            KeyCode::Char('s') => EditorEvent::Save,
            KeyCode::Char('x') | KeyCode::Char('q') => EditorEvent::Quit,
            KeyCode::Char('f') => EditorEvent::Find,
            KeyCode::Char('g') => EditorEvent::GotoLine,
            KeyCode::Char('k') => EditorEvent::DeleteRow,
            KeyCode::Char('c') => EditorEvent::Copy,
            KeyCode::Char('v') => EditorEvent::Paste,
            KeyCode::Char('h') => EditorEvent::Help,
            _ => EditorEvent::None,
        };
    }

    let motion = match event.code {
        KeyCode::Left => Some(Motion::Left),
        KeyCode::Right => Some(Motion::Right),
        KeyCode::Up => Some(Motion::Up),
        KeyCode::Down => Some(Motion::Down),
        KeyCode::Home => Some(Motion::LineStart),
        KeyCode::End => Some(Motion::LineEnd),
        KeyCode::PageUp => Some(Motion::PageUp),
        KeyCode::PageDown => Some(Motion::PageDown),
        _ => None,
    };
    if let Some(motion) = motion {
        return if shift {
            EditorEvent::Select(motion)
        } else {
            EditorEvent::Move(motion)
        };
    }

    match event.code {
        KeyCode::Char(ch) if !event.modifiers.contains(KeyModifiers::ALT) => EditorEvent::InsertChar(ch),
        KeyCode::Tab => EditorEvent::InsertChar('\t'),
        KeyCode::Enter => EditorEvent::InsertNewline,
        KeyCode::Backspace => EditorEvent::DeleteBackward,
        KeyCode::Delete => EditorEvent::DeleteForward,
        KeyCode::Esc => EditorEvent::Cancel,
        _ => EditorEvent::None,
    }
}
