//! Terminal-status evaluation.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::lines::{lines_for, WinLine};
use crate::board::Board;
use crate::core::Mark;

/// Outcome of evaluating a board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Moves are still accepted.
    InProgress,
    /// `Mark` filled the given line.
    Won(Mark, WinLine),
    /// Every cell is filled and no line is complete.
    Draw,
}

impl Status {
    /// Won or Draw.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Status::InProgress)
    }

    /// The winning mark, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Status::Won(mark, _) => Some(*mark),
            _ => None,
        }
    }

    /// The completed line, if any.
    #[must_use]
    pub fn winning_line(&self) -> Option<&WinLine> {
        match self {
            Status::Won(_, line) => Some(line),
            _ => None,
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::InProgress => write!(f, "in progress"),
            Status::Won(mark, line) => write!(f, "{mark} wins on {:?}", line.cells()),
            Status::Draw => write!(f, "draw"),
        }
    }
}

/// Rules engine trait.
///
/// The game engine and the AI only ask two things of the rules: which lines
/// exist, and what a board's status is. `evaluate` must be a pure function of
/// the board so it can be re-run after any mutation, including removals.
pub trait RulesEngine {
    /// Board side length these rules are built for.
    fn size(&self) -> usize;

    /// All winning lines, in tie-break order.
    fn lines(&self) -> &[WinLine];

    /// Evaluate a board from scratch.
    ///
    /// The first complete line in `lines()` order wins; otherwise a full
    /// board is a draw.
    fn evaluate(&self, board: &Board) -> Status {
        for line in self.lines() {
            if let Some(mark) = complete_mark(board, line) {
                return Status::Won(mark, line.clone());
            }
        }

        if board.is_full() {
            Status::Draw
        } else {
            Status::InProgress
        }
    }

    /// The winning mark, without cloning the line.
    fn winner(&self, board: &Board) -> Option<Mark> {
        self.lines().iter().find_map(|line| complete_mark(board, line))
    }
}

/// The mark filling every cell of `line`, if there is one.
fn complete_mark(board: &Board, line: &WinLine) -> Option<Mark> {
    let (&first, rest) = line.cells().split_first()?;
    let mark = board.get(first)?;
    rest.iter()
        .all(|&cell| board.get(cell) == Some(mark))
        .then_some(mark)
}

/// N-in-a-row rules for an N×N board.
#[derive(Clone, Debug)]
pub struct LineRules {
    size: usize,
    lines: Arc<[WinLine]>,
}

impl LineRules {
    /// Generate the rules for `size`.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            lines: lines_for(size).into(),
        }
    }

    /// Build from an already generated line set.
    #[must_use]
    pub fn from_lines(size: usize, lines: Arc<[WinLine]>) -> Self {
        Self { size, lines }
    }
}

impl RulesEngine for LineRules {
    fn size(&self) -> usize {
        self.size
    }

    fn lines(&self) -> &[WinLine] {
        &self.lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(size: usize, marks: &[(usize, Mark)]) -> Board {
        let mut board = Board::new(size).unwrap();
        for &(i, m) in marks {
            board.place(i, m).unwrap();
        }
        board
    }

    #[test]
    fn test_empty_board_in_progress() {
        let rules = LineRules::new(3);
        let board = Board::new(3).unwrap();

        assert_eq!(rules.evaluate(&board), Status::InProgress);
        assert!(!rules.evaluate(&board).is_terminal());
    }

    #[test]
    fn test_row_win() {
        let rules = LineRules::new(3);
        let board = board_with(
            3,
            &[(3, Mark::Second), (4, Mark::Second), (5, Mark::Second), (0, Mark::First)],
        );

        let status = rules.evaluate(&board);
        assert_eq!(status, Status::Won(Mark::Second, WinLine::new(&[3, 4, 5])));
        assert_eq!(status.winner(), Some(Mark::Second));
        assert_eq!(rules.winner(&board), Some(Mark::Second));
    }

    #[test]
    fn test_row_reported_before_column() {
        // Cell 0 completes both the top row and the left column.
        let rules = LineRules::new(3);
        let board = board_with(
            3,
            &[
                (0, Mark::First),
                (1, Mark::First),
                (2, Mark::First),
                (3, Mark::First),
                (6, Mark::First),
            ],
        );

        assert_eq!(
            rules.evaluate(&board).winning_line().map(WinLine::cells),
            Some(&[0, 1, 2][..])
        );
    }

    #[test]
    fn test_column_reported_before_diagonal() {
        let rules = LineRules::new(3);
        let board = board_with(
            3,
            &[
                (0, Mark::First),
                (3, Mark::First),
                (6, Mark::First),
                (4, Mark::First),
                (8, Mark::First),
            ],
        );

        assert_eq!(
            rules.evaluate(&board).winning_line().map(WinLine::cells),
            Some(&[0, 3, 6][..])
        );
    }

    #[test]
    fn test_full_board_draw() {
        // X O X
        // X O O
        // O X X
        let rules = LineRules::new(3);
        let layout = [
            Mark::First, Mark::Second, Mark::First,
            Mark::First, Mark::Second, Mark::Second,
            Mark::Second, Mark::First, Mark::First,
        ];
        let marks: Vec<_> = layout.iter().copied().enumerate().collect();
        let board = board_with(3, &marks);

        assert_eq!(rules.evaluate(&board), Status::Draw);
        assert!(rules.evaluate(&board).is_terminal());
    }

    #[test]
    fn test_win_on_full_board_beats_draw() {
        let rules = LineRules::new(2);
        let board = board_with(
            2,
            &[(0, Mark::First), (1, Mark::First), (2, Mark::Second), (3, Mark::Second)],
        );

        assert_eq!(rules.evaluate(&board).winner(), Some(Mark::First));
    }

    #[test]
    fn test_removal_reverts_draw() {
        let rules = LineRules::new(3);
        let layout = [
            Mark::First, Mark::Second, Mark::First,
            Mark::First, Mark::Second, Mark::Second,
            Mark::Second, Mark::First, Mark::First,
        ];
        let marks: Vec<_> = layout.iter().copied().enumerate().collect();
        let mut board = board_with(3, &marks);
        assert_eq!(rules.evaluate(&board), Status::Draw);

        board.clear(4).unwrap();
        assert_eq!(rules.evaluate(&board), Status::InProgress);
    }

    #[test]
    fn test_single_cell_board() {
        let rules = LineRules::new(1);
        let board = board_with(1, &[(0, Mark::Second)]);

        assert_eq!(rules.evaluate(&board), Status::Won(Mark::Second, WinLine::new(&[0])));
    }

    #[test]
    fn test_status_display() {
        assert_eq!(Status::Draw.to_string(), "draw");
        assert_eq!(
            Status::Won(Mark::First, WinLine::new(&[0, 1, 2])).to_string(),
            "X wins on [0, 1, 2]"
        );
    }
}
