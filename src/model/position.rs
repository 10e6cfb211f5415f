/// A (row, column) coordinate pair
///
/// Whether `col` is a logical (content) or visual (rendered) column depends on
/// the context; the editor stores logical columns and derives visual ones.
/// Ordering is lexicographic by row, then column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub const fn zero() -> Self {
        Self { row: 0, col: 0 }
    }
}
