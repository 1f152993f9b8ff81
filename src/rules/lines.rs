//! Winning line generation.
//!
//! For an N×N board the line set is N rows, N columns and 2 diagonals, in
//! that order. The order matters: when one move completes several lines at
//! once, the first line in this order is the one reported.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// An ordered run of N cell indices: a row, column or diagonal.
///
/// SmallVec keeps lines for boards up to 5×5 off the heap.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinLine {
    cells: SmallVec<[usize; 5]>,
}

impl WinLine {
    /// Create a line from its cell indices.
    #[must_use]
    pub fn new(cells: &[usize]) -> Self {
        Self {
            cells: SmallVec::from_slice(cells),
        }
    }

    /// Cell indices in line order.
    #[must_use]
    pub fn cells(&self) -> &[usize] {
        &self.cells
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.cells.contains(&index)
    }
}

impl From<&[usize]> for WinLine {
    fn from(cells: &[usize]) -> Self {
        Self::new(cells)
    }
}

/// Generate every winning line for a `size × size` board.
///
/// Sizes no [`Board`](crate::board::Board) can have (cell count overflows
/// `usize`) have no lines.
///
/// ```
/// use rust_toe::rules::lines_for;
///
/// let lines = lines_for(3);
/// assert_eq!(lines.len(), 8);
/// assert_eq!(lines[0].cells(), &[0, 1, 2]); // top row
/// assert_eq!(lines[3].cells(), &[0, 3, 6]); // left column
/// assert_eq!(lines[6].cells(), &[0, 4, 8]); // main diagonal
/// assert_eq!(lines[7].cells(), &[2, 4, 6]); // anti-diagonal
/// ```
#[must_use]
pub fn lines_for(size: usize) -> Vec<WinLine> {
    if size.checked_mul(size).is_none() {
        return Vec::new();
    }
    let mut lines = Vec::with_capacity(2 * size + 2);

    for row in 0..size {
        let cells: SmallVec<[usize; 5]> = (0..size).map(|col| row * size + col).collect();
        lines.push(WinLine { cells });
    }

    for col in 0..size {
        let cells: SmallVec<[usize; 5]> = (0..size).map(|row| row * size + col).collect();
        lines.push(WinLine { cells });
    }

    let main: SmallVec<[usize; 5]> = (0..size).map(|i| i * size + i).collect();
    lines.push(WinLine { cells: main });

    let anti: SmallVec<[usize; 5]> = (0..size).map(|i| i * size + (size - 1 - i)).collect();
    lines.push(WinLine { cells: anti });

    lines
}

/// Per-size memo of generated line sets.
///
/// Line sets are immutable once built, so they are shared as `Arc<[WinLine]>`.
#[derive(Clone, Debug, Default)]
pub struct LineCache {
    by_size: FxHashMap<usize, Arc<[WinLine]>>,
}

impl LineCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the line set for `size`, generating it on first use.
    pub fn get(&mut self, size: usize) -> Arc<[WinLine]> {
        self.by_size
            .entry(size)
            .or_insert_with(|| lines_for(size).into())
            .clone()
    }

    /// Number of sizes generated so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_size.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_size.is_empty()
    }
}
