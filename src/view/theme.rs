use crate::primitives::highlighter::HighlightClass;
use crossterm::style::{Color, Colors};

/// Colors used to draw each highlight class
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub normal: Color,
    pub comment: Color,
    pub keyword: Color,
    pub type_keyword: Color,
    pub string: Color,
    pub number: Color,
    pub function: Color,
    pub variable: Color,
    pub match_fg: Color,
    pub match_bg: Color,
    pub selection_fg: Color,
    pub selection_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            normal: Color::Reset,
            comment: Color::DarkCyan,
            keyword: Color::DarkYellow,
            type_keyword: Color::DarkGreen,
            string: Color::DarkMagenta,
            number: Color::DarkRed,
            function: Color::Blue,
            variable: Color::Cyan,
            match_fg: Color::Black,
            match_bg: Color::DarkBlue,
            selection_fg: Color::Black,
            selection_bg: Color::Grey,
        }
    }
}

impl Theme {
    /// Foreground and background for a class
    pub fn colors(&self, class: HighlightClass) -> Colors {
        let fg = match class {
            HighlightClass::Normal => self.normal,
            HighlightClass::Comment | HighlightClass::MlComment => self.comment,
            HighlightClass::Keyword1 => self.keyword,
            HighlightClass::Keyword2 => self.type_keyword,
            HighlightClass::String => self.string,
            HighlightClass::Number => self.number,
            HighlightClass::Function => self.function,
            HighlightClass::Variable => self.variable,
            HighlightClass::Match => self.match_fg,
            HighlightClass::Selection => self.selection_fg,
        };
        let bg = match class {
            HighlightClass::Match => self.match_bg,
            HighlightClass::Selection => self.selection_bg,
            _ => Color::Reset,
        };
        Colors::new(fg, bg)
    }
}
