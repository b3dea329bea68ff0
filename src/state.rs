use crate::header::letter_label;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CellPosition {
    pub row: usize,
    pub col: usize,
}

impl CellPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Spreadsheet-style reference (A1, B5, AA10), whatever the header modes are
    pub fn to_reference(&self) -> String {
        format!("{}{}", letter_label(self.col), self.row + 1)
    }

    /// Move by a delta, staying inside a `rows` x `cols` grid.
    pub fn offset(&self, delta_row: isize, delta_col: isize, rows: usize, cols: usize) -> Self {
        let clamp = |value: usize, delta: isize, len: usize| {
            value
                .saturating_add_signed(delta)
                .min(len.saturating_sub(1))
        };
        Self::new(clamp(self.row, delta_row, rows), clamp(self.col, delta_col, cols))
    }

    pub fn clamped(&self, rows: usize, cols: usize) -> Self {
        self.offset(0, 0, rows, cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn references_use_letter_columns() {
        assert_eq!(CellPosition::new(0, 0).to_reference(), "A1");
        assert_eq!(CellPosition::new(9, 26).to_reference(), "AA10");
    }

    #[test]
    fn offset_stays_in_bounds() {
        let pos = CellPosition::new(0, 2);
        assert_eq!(pos.offset(-1, 5, 10, 4), CellPosition::new(0, 3));
        assert_eq!(pos.offset(3, -1, 10, 4), CellPosition::new(3, 1));
        assert_eq!(CellPosition::new(8, 8).clamped(2, 2), CellPosition::new(1, 1));
    }
}
