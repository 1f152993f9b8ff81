//! Player identification and per-player data storage.
//!
//! ## Mark
//!
//! The two sides of the game. Display labels (`X`/`O`) are only a
//! convenience for text rendering; front ends pick their own.
//!
//! ## MarkMap
//!
//! Per-player data storage backed by a fixed `[T; 2]` for O(1) access.
//! Supports iteration and indexing by `Mark`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two players, and the symbol that player writes on the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Mark {
    /// The player who moves first in a default game.
    #[default]
    First,
    /// The other player.
    Second,
}

impl Mark {
    /// Both marks, in turn order.
    pub const ALL: [Mark; 2] = [Mark::First, Mark::Second];

    /// Get the opposing mark.
    ///
    /// ```
    /// use rust_toe::core::Mark;
    ///
    /// assert_eq!(Mark::First.opponent(), Mark::Second);
    /// assert_eq!(Mark::Second.opponent(), Mark::First);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Mark::First => Mark::Second,
            Mark::Second => Mark::First,
        }
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Mark::First => 0,
            Mark::Second => 1,
        }
    }

    /// Single-character label used by text rendering.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Mark::First => 'X',
            Mark::Second => 'O',
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use rust_toe::core::{Mark, MarkMap};
///
/// let mut wins: MarkMap<u32> = MarkMap::with_value(0);
/// wins[Mark::Second] += 1;
///
/// assert_eq!(wins[Mark::First], 0);
/// assert_eq!(wins[Mark::Second], 1);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarkMap<T> {
    data: [T; 2],
}

impl<T> MarkMap<T> {
    /// Create a new map with values from a factory function.
    pub fn new(factory: impl Fn(Mark) -> T) -> Self {
        Self {
            data: [factory(Mark::First), factory(Mark::Second)],
        }
    }

    /// Create a new map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, mark: Mark) -> &T {
        &self.data[mark.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, mark: Mark) -> &mut T {
        &mut self.data[mark.index()]
    }

    /// Iterate over (Mark, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (Mark, &T)> {
        Mark::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Mark> for MarkMap<T> {
    type Output = T;

    fn index(&self, mark: Mark) -> &Self::Output {
        self.get(mark)
    }
}

impl<T> IndexMut<Mark> for MarkMap<T> {
    fn index_mut(&mut self, mark: Mark) -> &mut Self::Output {
        self.get_mut(mark)
    }
}
