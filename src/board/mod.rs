//! Board storage.
//!
//! The board is pure data plus validity queries. It knows nothing about
//! turns, power-ups or winning; those live in `engine`, `powerups` and
//! `rules`.

mod grid;

pub use grid::Board;
