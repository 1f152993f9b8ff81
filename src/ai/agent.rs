//! The AI opponent.

use std::time::Instant;

use tracing::{debug, trace};

use super::config::AgentConfig;
use super::difficulty::Difficulty;
use super::minimax::Search;
use super::stats::SearchStats;
use crate::board::Board;
use crate::core::{GameRng, Mark, Proposal, RandomSource, Snapshot};
use crate::error::{AiError, ConfigError};
use crate::rules::{LineCache, LineRules};

/// Move selection for one AI player.
///
/// Holds only its own RNG, line cache and statistics; it reads boards and
/// never changes any engine state.
#[derive(Clone, Debug)]
pub struct AiAgent<R = GameRng> {
    config: AgentConfig,
    rng: R,
    lines: LineCache,
    stats: SearchStats,
}

impl AiAgent<GameRng> {
    /// Create an agent seeded from its config.
    pub fn new(config: AgentConfig) -> Result<Self, ConfigError> {
        let rng = GameRng::new(config.seed);
        Self::with_rng(config, rng)
    }

    /// Independent copy with a forked RNG, for use on a worker thread.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        Self {
            config: self.config.clone(),
            rng: self.rng.fork(),
            lines: self.lines.clone(),
            stats: SearchStats::default(),
        }
    }
}

impl Default for AiAgent<GameRng> {
    fn default() -> Self {
        let config = AgentConfig::default();
        let rng = GameRng::new(config.seed);
        Self::build(config, rng)
    }
}

impl<R: RandomSource> AiAgent<R> {
    /// Create an agent with a caller-supplied random source.
    ///
    /// Fails if the config does not validate.
    pub fn with_rng(config: AgentConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, rng))
    }

    fn build(config: AgentConfig, rng: R) -> Self {
        Self {
            config,
            rng,
            lines: LineCache::new(),
            stats: SearchStats::default(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Statistics from the most recent selection.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    fn rules_for(&mut self, size: usize) -> LineRules {
        LineRules::from_lines(size, self.lines.get(size))
    }

    /// Pick a cell for `mark` on `board`.
    ///
    /// Easy agents play a uniformly random empty cell with the configured
    /// probability; otherwise, and at every other difficulty, the cell with
    /// the best minimax score.
    pub fn select_move(&mut self, board: &Board, mark: Mark, difficulty: Difficulty) -> Result<usize, AiError> {
        let start = Instant::now();
        self.stats.reset();

        let empty: Vec<usize> = board.empty_cells().collect();
        if empty.is_empty() {
            return Err(AiError::NoLegalMove);
        }

        let p = difficulty.random_move_probability(&self.config);
        if p > 0.0 && self.rng.gen_bool(p) {
            // A pick outside the empty cells falls back to the search.
            let pick = self
                .rng
                .choose_index(empty.len())
                .and_then(|i| empty.get(i).copied());
            if let Some(cell) = pick {
                self.stats.random_move = true;
                self.stats.time_us = start.elapsed().as_micros() as u64;
                debug!(%mark, %difficulty, cell, "random move");
                return Ok(cell);
            }
        }

        let rules = self.rules_for(board.size());
        let mut search = Search::new(&rules, mark, &self.config);
        let best = search.best_move(&mut board.clone());
        self.stats = search.into_stats();
        self.stats.time_us = start.elapsed().as_micros() as u64;

        let (cell, score) = best.ok_or(AiError::NoLegalMove)?;
        trace!(
            nodes = self.stats.nodes,
            cutoffs = self.stats.cutoffs,
            max_ply = self.stats.max_ply,
            time_us = self.stats.time_us,
            "search finished"
        );
        debug!(%mark, %difficulty, cell, score, "searched move");
        Ok(cell)
    }

    /// Pick a move for the player to move in `snapshot`.
    ///
    /// The result carries the snapshot's generation so the engine can
    /// discard it if the game moved on in the meantime.
    pub fn propose(&mut self, snapshot: &Snapshot, difficulty: Difficulty) -> Result<Proposal, AiError> {
        let player = snapshot.current_player;
        let cell = self.select_move(&snapshot.board, player, difficulty)?;
        Ok(Proposal {
            player,
            cell,
            generation: snapshot.generation,
        })
    }
}
