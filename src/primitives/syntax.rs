//! Built-in syntax profiles
//!
//! A profile is a keyword table plus comment markers. Keywords ending in `|`
//! are type keywords, everything else is a control keyword.

use std::path::Path;

/// Highlight numeric literals
pub const HIGHLIGHT_NUMBERS: u8 = 1 << 0;
/// Highlight string and character literals
pub const HIGHLIGHT_STRINGS: u8 = 1 << 1;

/// Marker suffix for type keywords in a keyword table
pub const TYPE_KEYWORD_MARKER: char = '|';

/// Language description used by the highlighter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyntaxProfile {
    /// Name shown in the status line
    pub name: &'static str,
    /// File name suffixes (with the leading dot) that select this profile
    pub file_match: &'static [&'static str],
    pub keywords: &'static [&'static str],
    pub single_line_comment: &'static str,
    pub block_comment_start: &'static str,
    pub block_comment_end: &'static str,
    pub flags: u8,
}

impl SyntaxProfile {
    pub fn highlights_numbers(&self) -> bool {
        self.flags & HIGHLIGHT_NUMBERS != 0
    }

    pub fn highlights_strings(&self) -> bool {
        self.flags & HIGHLIGHT_STRINGS != 0
    }

    /// Keyword entries split into (word, is_type_keyword)
    pub fn keyword_entries(&self) -> impl Iterator<Item = (&'static str, bool)> + '_ {
        self.keywords
            .iter()
            .copied()
            .map(|kw| match kw.strip_suffix(TYPE_KEYWORD_MARKER) {
                Some(word) => (word, true),
                None => (kw, false),
            })
    }

    /// Whether `word` is one of this profile's type keywords
    pub fn is_type_keyword(&self, word: &[u8]) -> bool {
        self.keyword_entries()
            .any(|(kw, is_type)| is_type && kw.as_bytes() == word)
    }

    /// Whether this profile handles the given file name
    pub fn matches_file(&self, filename: &str) -> bool {
        self.file_match.iter().any(|pattern| {
            if pattern.starts_with('.') {
                filename.ends_with(pattern)
            } else {
                filename.contains(pattern)
            }
        })
    }

    /// Find the built-in profile for a file path, if any
    pub fn for_path(path: &Path) -> Option<&'static SyntaxProfile> {
        let filename = path.file_name()?.to_str()?;
        SYNTAX_DATABASE.iter().find(|profile| profile.matches_file(filename))
    }

    /// Look a built-in profile up by name
    pub fn by_name(name: &str) -> Option<&'static SyntaxProfile> {
        SYNTAX_DATABASE.iter().find(|profile| profile.name == name)
    }
}

const C_KEYWORDS: &[&str] = &[
    "switch", "if", "while", "for", "break", "continue", "enum", "case", "#include", "return",
    "else", "#define", "int|", "long|", "double|", "float|", "char|", "unsigned|", "void|",
    "extern|", "size_t|", "ssize_t|", "static|", "struct|", "union|", "class|", "typedef|",
    "signed|", "time_t|",
];

const JS_KEYWORDS: &[&str] = &[
    "switch", "if", "while", "for", "break", "continue", "case", "return", "else", "import",
    "from", "export", "default", "async", "await", "try", "catch", "finally", "function|",
    "const|", "var|", "class|", "static|", "let|", "extends|", "keyof|", "typeof|", "in|", "of|",
    "new|", "this|",
];

const TS_KEYWORDS: &[&str] = &[
    "switch", "if", "while", "for", "break", "continue", "enum", "case", "return", "else",
    "import", "from", "export", "default", "async", "await", "try", "catch", "finally",
    "function|", "string|", "number|", "const|", "var|", "interface|", "type|", "class|",
    "String|", "boolean|", "let|", "public|", "extends|", "keyof|", "typeof|", "in|", "of|",
    "new|", "this|", "static|", "private|",
];

/// Every profile the editor knows about, in detection order
pub static SYNTAX_DATABASE: &[SyntaxProfile] = &[
    SyntaxProfile {
        name: "c",
        file_match: &[".c", ".h", ".cpp"],
        keywords: C_KEYWORDS,
        single_line_comment: "//",
        block_comment_start: "/*",
        block_comment_end: "*/",
        flags: HIGHLIGHT_NUMBERS | HIGHLIGHT_STRINGS,
    },
    SyntaxProfile {
        name: "javascript",
        file_match: &[".js", ".jsx"],
        keywords: JS_KEYWORDS,
        single_line_comment: "//",
        block_comment_start: "/*",
        block_comment_end: "*/",
        flags: HIGHLIGHT_NUMBERS | HIGHLIGHT_STRINGS,
    },
    SyntaxProfile {
        name: "typescript",
        file_match: &[".ts", ".tsx"],
        keywords: TS_KEYWORDS,
        single_line_comment: "//",
        block_comment_start: "/*",
        block_comment_end: "*/",
        flags: HIGHLIGHT_NUMBERS | HIGHLIGHT_STRINGS,
    },
];
