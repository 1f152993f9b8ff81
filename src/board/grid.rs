//! The N×N grid of cell marks.

use serde::{Deserialize, Serialize};

use crate::core::Mark;
use crate::error::BoardError;

/// Fixed-size square grid, indexed row-major from the top-left.
///
/// ```text
/// 0 | 1 | 2
/// ---------
/// 3 | 4 | 5
/// ---------
/// 6 | 7 | 8
/// ```
///
/// A cell is written only through [`Board::place`], which refuses to
/// overwrite. [`Board::clear`] is the only way back to empty.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Mark>>,
}

impl Board {
    /// Create an empty board of `size × size` cells.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        let cells = Self::cell_count_for(size)?;
        Ok(Self {
            size,
            cells: vec![None; cells],
        })
    }

    /// Number of cells on a `size × size` board.
    ///
    /// Fails for size 0 and for sizes whose cell count does not fit in a
    /// `usize`.
    pub fn cell_count_for(size: usize) -> Result<usize, BoardError> {
        match size.checked_mul(size) {
            Some(cells) if size >= 1 => Ok(cells),
            _ => Err(BoardError::InvalidSize { size }),
        }
    }

    /// Side length N.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells (N²).
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Mark at `index`, or `None` if empty or out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied().flatten()
    }

    /// All cells in index order.
    #[must_use]
    pub fn cells(&self) -> &[Option<Mark>] {
        &self.cells
    }

    /// Write `mark` into an empty cell.
    pub fn place(&mut self, index: usize, mark: Mark) -> Result<(), BoardError> {
        self.check_range(index)?;
        if self.cells[index].is_some() {
            return Err(BoardError::CellOccupied { index });
        }
        self.cells[index] = Some(mark);
        Ok(())
    }

    /// Empty a cell, whatever it holds.
    pub fn clear(&mut self, index: usize) -> Result<(), BoardError> {
        self.check_range(index)?;
        self.cells[index] = None;
        Ok(())
    }

    /// Empty a cell and return what it held. Out-of-range is a no-op.
    ///
    /// Used by search to unmake moves and by the bomb to remove a mark.
    pub(crate) fn take(&mut self, index: usize) -> Option<Mark> {
        self.cells.get_mut(index).and_then(Option::take)
    }

    /// Check that `index` addresses a cell.
    pub fn check_range(&self, index: usize) -> Result<(), BoardError> {
        if index < self.cells.len() {
            Ok(())
        } else {
            Err(BoardError::OutOfRange {
                index,
                cells: self.cells.len(),
            })
        }
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Indices of empty cells, ascending.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_none())
            .map(|(i, _)| i)
    }

    /// Indices of cells holding `mark`, ascending.
    pub fn cells_of(&self, mark: Mark) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(move |(_, c)| **c == Some(mark))
            .map(|(i, _)| i)
    }

    /// Number of cells holding `mark`.
    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.cells_of(mark).count()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.chunks(self.size) {
            for cell in row {
                let c = cell.map_or('.', Mark::symbol);
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        for size in 1..=5 {
            let board = Board::new(size).unwrap();
            assert_eq!(board.size(), size);
            assert_eq!(board.cell_count(), size * size);
            assert!(board.is_empty());
            assert_eq!(board.empty_cells().count(), size * size);
        }
    }

    #[test]
    fn test_zero_size_rejected() {
        assert_eq!(Board::new(0), Err(BoardError::InvalidSize { size: 0 }));
    }

    #[test]
    fn test_overflowing_size_rejected() {
        let huge = 1usize << (usize::BITS / 2);
        assert_eq!(Board::new(huge), Err(BoardError::InvalidSize { size: huge }));
        assert_eq!(
            Board::new(usize::MAX),
            Err(BoardError::InvalidSize { size: usize::MAX })
        );
        assert_eq!(Board::cell_count_for(5), Ok(25));
    }

    #[test]
    fn test_place_and_get() {
        let mut board = Board::new(3).unwrap();
        board.place(4, Mark::First).unwrap();

        assert_eq!(board.get(4), Some(Mark::First));
        assert_eq!(board.get(0), None);
        assert_eq!(board.count(Mark::First), 1);
        assert!(!board.is_empty());
    }

    #[test]
    fn test_place_never_overwrites() {
        let mut board = Board::new(3).unwrap();
        board.place(4, Mark::First).unwrap();

        assert_eq!(
            board.place(4, Mark::Second),
            Err(BoardError::CellOccupied { index: 4 })
        );
        assert_eq!(board.get(4), Some(Mark::First));
    }

    #[test]
    fn test_place_out_of_range() {
        let mut board = Board::new(3).unwrap();
        let before = board.clone();

        assert_eq!(
            board.place(9, Mark::First),
            Err(BoardError::OutOfRange { index: 9, cells: 9 })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_clear() {
        let mut board = Board::new(3).unwrap();
        board.place(2, Mark::Second).unwrap();

        board.clear(2).unwrap();
        assert_eq!(board.get(2), None);

        // Clearing an empty cell is fine; range is still checked.
        board.clear(2).unwrap();
        assert!(matches!(board.clear(42), Err(BoardError::OutOfRange { .. })));
    }

    #[test]
    fn test_cells_of_and_full() {
        let mut board = Board::new(2).unwrap();
        board.place(0, Mark::First).unwrap();
        board.place(1, Mark::Second).unwrap();
        board.place(3, Mark::First).unwrap();

        assert_eq!(board.cells_of(Mark::First).collect::<Vec<_>>(), vec![0, 3]);
        assert_eq!(board.cells_of(Mark::Second).collect::<Vec<_>>(), vec![1]);
        assert_eq!(board.empty_cells().collect::<Vec<_>>(), vec![2]);
        assert!(!board.is_full());

        board.place(2, Mark::Second).unwrap();
        assert!(board.is_full());
    }

    #[test]
    fn test_display() {
        let mut board = Board::new(3).unwrap();
        board.place(0, Mark::First).unwrap();
        board.place(4, Mark::Second).unwrap();

        assert_eq!(board.to_string(), "X..\n.O.\n...\n");
    }
}
