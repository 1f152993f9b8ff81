//! Minimax search with alpha-beta pruning.
//!
//! Scores are from the AI's point of view:
//! - AI win at ply `d`: `win_score - d`
//! - opponent win at ply `d`: `d - win_score`
//! - draw, or past the ply cap: `0`
//!
//! Faster wins and slower losses therefore score higher. Search runs on a
//! scratch copy of the board using make/unmake; the caller's board is never
//! touched.

use smallvec::SmallVec;

use super::config::AgentConfig;
use super::stats::SearchStats;
use crate::board::Board;
use crate::core::Mark;
use crate::rules::{LineRules, RulesEngine};

/// One search: rules, point of view, limits and counters.
pub struct Search<'a, E: RulesEngine + ?Sized> {
    rules: &'a E,
    ai: Mark,
    max_depth: u32,
    win_score: i32,
    stats: SearchStats,
}

impl<'a, E: RulesEngine + ?Sized> Search<'a, E> {
    pub fn new(rules: &'a E, ai: Mark, config: &AgentConfig) -> Self {
        Self {
            rules,
            ai,
            max_depth: config.max_depth,
            win_score: config.win_score,
            stats: SearchStats::default(),
        }
    }

    /// Counters accumulated so far.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    #[must_use]
    pub fn into_stats(self) -> SearchStats {
        self.stats
    }

    /// Best cell for the AI and its score. `None` on a full board.
    ///
    /// Cells are tried in ascending order and only a strictly better score
    /// replaces the current best, so the lowest index wins ties.
    pub fn best_move(&mut self, board: &mut Board) -> Option<(usize, i32)> {
        let cells: SmallVec<[usize; 25]> = board.empty_cells().collect();
        let mut best: Option<(usize, i32)> = None;

        for cell in cells {
            if board.place(cell, self.ai).is_err() {
                continue;
            }
            let score = self.minimax(board, 0, false, i32::MIN, i32::MAX);
            board.take(cell);

            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((cell, score));
            }
        }

        best
    }

    /// Score `board` with the given side to move.
    ///
    /// `maximizing` means the AI moves next.
    pub fn minimax(&mut self, board: &mut Board, depth: u32, maximizing: bool, mut alpha: i32, mut beta: i32) -> i32 {
        self.stats.nodes += 1;
        self.stats.max_ply = self.stats.max_ply.max(depth);

        let ply = i32::try_from(depth).unwrap_or(i32::MAX);
        if let Some(winner) = self.rules.winner(board) {
            return if winner == self.ai {
                self.win_score.saturating_sub(ply)
            } else {
                ply.saturating_sub(self.win_score)
            };
        }
        if board.is_full() || depth > self.max_depth {
            return 0;
        }

        let to_move = if maximizing { self.ai } else { self.ai.opponent() };
        let cells: SmallVec<[usize; 25]> = board.empty_cells().collect();
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for cell in cells {
            if board.place(cell, to_move).is_err() {
                continue;
            }
            let score = self.minimax(board, depth + 1, !maximizing, alpha, beta);
            board.take(cell);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }
            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        best
    }
}

/// Score a position for `ai` with default limits.
///
/// Pure: takes the board by reference and searches a copy.
///
/// ```
/// use rust_toe::ai::minimax;
/// use rust_toe::board::Board;
/// use rust_toe::core::Mark;
///
/// let mut board = Board::new(3).unwrap();
/// for cell in [0, 1, 2] {
///     board.place(cell, Mark::Second).unwrap();
/// }
///
/// assert_eq!(minimax(&board, Mark::Second, 2, true, i32::MIN, i32::MAX), 8);
/// assert_eq!(minimax(&board, Mark::First, 2, true, i32::MIN, i32::MAX), -8);
/// ```
#[must_use]
pub fn minimax(board: &Board, ai: Mark, depth: u32, maximizing: bool, alpha: i32, beta: i32) -> i32 {
    let rules = LineRules::new(board.size());
    let mut search = Search::new(&rules, ai, &AgentConfig::default());
    search.minimax(&mut board.clone(), depth, maximizing, alpha, beta)
}
