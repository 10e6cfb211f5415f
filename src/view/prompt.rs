//! Prompt for minibuffer input

/// Type of prompt - determines what action to take when user confirms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptType {
    /// Incremental search; every keystroke runs the search again
    Search,
    /// Jump to a 1-based line number
    GotoLine,
    /// Ask for a filename before the first save of an unnamed buffer
    SaveFileAs,
}

/// Prompt state for the minibuffer
#[derive(Debug, Clone)]
pub struct Prompt {
    /// The prompt message (e.g., "Search: ")
    pub message: String,
    /// User's current input
    pub input: String,
    /// Type of prompt
    pub prompt_type: PromptType,
}

impl Prompt {
    pub fn new(message: String, prompt_type: PromptType) -> Self {
        Self {
            message,
            input: String::new(),
            prompt_type,
        }
    }

    pub fn insert_char(&mut self, ch: char) {
        self.input.push(ch);
    }

    /// Delete the last character, returning whether anything was removed
    pub fn backspace(&mut self) -> bool {
        self.input.pop().is_some()
    }

    /// Text drawn in the message bar while the prompt is open
    pub fn display_line(&self) -> String {
        match self.prompt_type {
            PromptType::Search => format!("{}{} (Use ESC/Arrows/Enter)", self.message, self.input),
            _ => format!("{}{}", self.message, self.input),
        }
    }

    /// Column of the input cursor inside [`Prompt::display_line`]
    pub fn cursor_column(&self) -> usize {
        self.message.chars().count() + self.input.chars().count()
    }
}
