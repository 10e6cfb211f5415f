//! Incremental per-row syntax highlighting
//!
//! # Design
//! - **Row at a time**: each row is tokenized on its own, left to right, over its
//!   rendered (tab-expanded) bytes. The only state carried between rows is whether
//!   the previous row ended inside an unterminated block comment.
//! - **Cascade**: when a row's carried-out comment state flips, the next row is
//!   re-highlighted, and so on until the state stops changing. This is a plain
//!   loop, so a comment opened on line 1 of a huge file costs one pass and no stack.
//! - **Best effort**: identifier classification is a small rule table driven by the
//!   surrounding punctuation. It is not a parser and will guess wrong sometimes.

use crate::model::row::Row;
use crate::primitives::syntax::SyntaxProfile;

/// Color class of a single rendered byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HighlightClass {
    #[default]
    Normal,
    Comment,
    MlComment,
    /// Control keyword (`if`, `return`, ...)
    Keyword1,
    /// Type keyword (`int`, `struct`, ...)
    Keyword2,
    String,
    Number,
    Function,
    Variable,
    /// Temporary search match overlay
    Match,
    /// Selection overlay, only produced by the compositor
    Selection,
}

/// Bytes after an identifier that mark it as a variable
const VARIABLE_FOLLOWERS: &[u8] = b"=;,)]+-*/%<>!&|.:?";
/// Bytes before an identifier that mark it as a variable
const VARIABLE_LEADERS: &[u8] = b"=(,[+-*/%<>!&|:?";

/// Separator test used for token boundaries
pub fn is_separator(byte: u8) -> bool {
    byte.is_ascii_whitespace() || byte == b'\0' || b",.()+-/*=~%<>[];".contains(&byte)
}

fn is_ident_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

/// Result of highlighting a single row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowHighlight {
    pub classes: Vec<HighlightClass>,
    pub open_comment_at_end: bool,
}

/// Tokenize one rendered row
///
/// `open_comment_in` is the previous row's `open_comment_at_end`. Without a
/// syntax profile everything is `Normal` and no comment state is carried.
pub fn highlight_row(
    rendered: &[u8],
    syntax: Option<&SyntaxProfile>,
    open_comment_in: bool,
) -> RowHighlight {
    let mut hl = vec![HighlightClass::Normal; rendered.len()];
    let Some(syntax) = syntax else {
        return RowHighlight {
            classes: hl,
            open_comment_at_end: false,
        };
    };

    let scs = syntax.single_line_comment.as_bytes();
    let mcs = syntax.block_comment_start.as_bytes();
    let mce = syntax.block_comment_end.as_bytes();
    let block_comments = !mcs.is_empty() && !mce.is_empty();

    let mut prev_sep = true;
    let mut in_string: Option<u8> = None;
    let mut in_comment = open_comment_in && block_comments;

    let mut i = 0;
    while i < rendered.len() {
        let c = rendered[i];
        let prev_hl = if i > 0 { hl[i - 1] } else { HighlightClass::Normal };
        let rest = &rendered[i..];

        if !scs.is_empty() && in_string.is_none() && !in_comment && rest.starts_with(scs) {
            hl[i..].fill(HighlightClass::Comment);
            break;
        }

        if block_comments && in_string.is_none() {
            if in_comment {
                if rest.starts_with(mce) {
                    hl[i..i + mce.len()].fill(HighlightClass::MlComment);
                    i += mce.len();
                    in_comment = false;
                    prev_sep = true;
                } else {
                    hl[i] = HighlightClass::MlComment;
                    i += 1;
                }
                continue;
            } else if rest.starts_with(mcs) {
                hl[i..i + mcs.len()].fill(HighlightClass::MlComment);
                i += mcs.len();
                in_comment = true;
                continue;
            }
        }

        if syntax.highlights_strings() {
            if let Some(quote) = in_string {
                hl[i] = HighlightClass::String;
                if c == b'\\' && i + 1 < rendered.len() {
                    hl[i + 1] = HighlightClass::String;
                    i += 2;
                    continue;
                }
                if c == quote {
                    in_string = None;
                }
                i += 1;
                prev_sep = true;
                continue;
            } else if c == b'"' || c == b'\'' {
                in_string = Some(c);
                hl[i] = HighlightClass::String;
                i += 1;
                continue;
            }
        }

        if syntax.highlights_numbers()
            && ((c.is_ascii_digit() && (prev_sep || prev_hl == HighlightClass::Number))
                || (c == b'.' && prev_hl == HighlightClass::Number))
        {
            hl[i] = HighlightClass::Number;
            i += 1;
            prev_sep = false;
            continue;
        }

        if prev_sep {
            if let Some((len, is_type)) = match_keyword(syntax, rest) {
                let class = if is_type {
                    HighlightClass::Keyword2
                } else {
                    HighlightClass::Keyword1
                };
                hl[i..i + len].fill(class);
                i += len;
                prev_sep = false;
                continue;
            }

            if is_ident_byte(c) {
                let end = i + rest.iter().take_while(|&&b| is_ident_byte(b)).count();
                let class = classify_identifier(rendered, i, end, syntax);
                hl[i..end].fill(class);
                i = end;
                prev_sep = false;
                continue;
            }
        }

        prev_sep = is_separator(c);
        i += 1;
    }

    RowHighlight {
        classes: hl,
        open_comment_at_end: in_comment,
    }
}

/// Keyword at the start of `rest` that is followed by a separator or end of row
fn match_keyword(syntax: &SyntaxProfile, rest: &[u8]) -> Option<(usize, bool)> {
    syntax.keyword_entries().find_map(|(word, is_type)| {
        let word = word.as_bytes();
        let boundary = rest.get(word.len()).copied().unwrap_or(b'\0');
        (rest.starts_with(word) && is_separator(boundary)).then_some((word.len(), is_type))
    })
}

/// Rule table for a bare identifier `rendered[start..end]`
///
/// | rule      | condition                                                   |
/// |-----------|-------------------------------------------------------------|
/// | function  | next non-blank byte is `(`, and not on a `#define` line      |
/// | type alias| all uppercase, or the previous word is a type keyword       |
/// | variable  | next byte is an operator/punctuation, or the previous one is |
/// | plain     | anything else                                               |
///
/// Type aliases are drawn with the variable color.
fn classify_identifier(
    rendered: &[u8],
    start: usize,
    end: usize,
    syntax: &SyntaxProfile,
) -> HighlightClass {
    let word = &rendered[start..end];
    let next = rendered[end..].iter().copied().find(|&b| b != b' ');
    let prev = rendered[..start].iter().rev().copied().find(|&b| b != b' ');

    if next == Some(b'(') && !defines_macro(&rendered[..start]) {
        return HighlightClass::Function;
    }

    let uppercase = word.iter().any(u8::is_ascii_uppercase) && !word.iter().any(u8::is_ascii_lowercase);
    if uppercase || previous_word(rendered, start).is_some_and(|w| syntax.is_type_keyword(w)) {
        return HighlightClass::Variable;
    }

    let followed = next.is_some_and(|b| VARIABLE_FOLLOWERS.contains(&b));
    let preceded = prev.is_some_and(|b| VARIABLE_LEADERS.contains(&b));
    if followed || preceded {
        return HighlightClass::Variable;
    }

    HighlightClass::Normal
}

fn defines_macro(prefix: &[u8]) -> bool {
    let first = prefix.iter().position(|b| !b.is_ascii_whitespace()).unwrap_or(prefix.len());
    prefix[first..].starts_with(b"#define")
}

/// The identifier immediately before `start`, skipping blanks
fn previous_word(rendered: &[u8], start: usize) -> Option<&[u8]> {
    let end = start - rendered[..start].iter().rev().take_while(|&&b| b == b' ').count();
    let len = rendered[..end].iter().rev().take_while(|&&b| is_ident_byte(b)).count();
    (len > 0).then(|| &rendered[end - len..end])
}

/// Re-highlight `rows[at]` and cascade forward while the carried comment state changes
///
/// Returns the number of rows that were re-highlighted. Rows before `at` are
/// only read (for the carried-in state of `rows[at]`) and rows after the last
/// touched one are left exactly as they were.
pub fn update_highlight(rows: &mut [Row], at: usize, syntax: Option<&SyntaxProfile>) -> usize {
    let mut current = at;
    let mut touched = 0;

    while current < rows.len() {
        let open_in = current > 0 && rows[current - 1].open_comment_at_end();
        let result = highlight_row(rows[current].rendered(), syntax, open_in);
        let changed = rows[current].set_highlight(result.classes, result.open_comment_at_end);
        touched += 1;
        if !changed {
            break;
        }
        current += 1;
    }

    if touched > 1 {
        tracing::trace!("Highlight cascade from row {} touched {} rows", at, touched);
    }
    touched
}
