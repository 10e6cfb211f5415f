//! Tab expansion and the logical <-> visual column mapping
//!
//! A row's `content` is what the user typed; its `rendered` form is what the
//! terminal shows. The two only differ where tabs appear: every tab advances the
//! visual column to the next multiple of the tab stop.
//!
//! Columns are byte offsets. There is no Unicode width accounting.

/// Default number of columns per tab stop
pub const DEFAULT_TAB_STOP: usize = 4;

/// Width of a character that starts at visual column `visual`
#[inline]
fn advance(byte: u8, visual: usize, tab_stop: usize) -> usize {
    if byte == b'\t' {
        visual + (tab_stop - visual % tab_stop)
    } else {
        visual + 1
    }
}

/// Expand tabs in `content` to spaces so each tab ends on a tab-stop boundary
pub fn render(content: &[u8], tab_stop: usize) -> Vec<u8> {
    let tab_stop = tab_stop.max(1);
    let tabs = content.iter().filter(|&&b| b == b'\t').count();
    let mut rendered = Vec::with_capacity(content.len() + tabs * (tab_stop - 1));

    for &byte in content {
        if byte == b'\t' {
            rendered.push(b' ');
            while rendered.len() % tab_stop != 0 {
                rendered.push(b' ');
            }
        } else {
            rendered.push(byte);
        }
    }
    rendered
}

/// Visual column of the logical column `logical_col`
///
/// Columns past the end of the row are clamped to the row length.
pub fn logical_to_visual(content: &[u8], logical_col: usize, tab_stop: usize) -> usize {
    let tab_stop = tab_stop.max(1);
    let end = logical_col.min(content.len());
    content[..end]
        .iter()
        .fold(0, |visual, &byte| advance(byte, visual, tab_stop))
}

/// Logical column that owns the visual column `visual_col`
///
/// Returns the first logical index whose accumulated width exceeds
/// `visual_col`, or the row length when the visual column lies past the end.
/// Every visual column covered by a tab maps back to that tab's logical column.
pub fn visual_to_logical(content: &[u8], visual_col: usize, tab_stop: usize) -> usize {
    let tab_stop = tab_stop.max(1);
    let mut visual = 0;
    for (logical, &byte) in content.iter().enumerate() {
        visual = advance(byte, visual, tab_stop);
        if visual > visual_col {
            return logical;
        }
    }
    content.len()
}

/// Logical column of every byte of the rendered row, in rendered order
pub fn logical_columns(content: &[u8], tab_stop: usize) -> Vec<usize> {
    let tab_stop = tab_stop.max(1);
    let mut columns = Vec::with_capacity(content.len());
    let mut visual = 0;
    for (logical, &byte) in content.iter().enumerate() {
        let next = advance(byte, visual, tab_stop);
        columns.extend(std::iter::repeat(logical).take(next - visual));
        visual = next;
    }
    columns
}
