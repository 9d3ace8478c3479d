//! Tic-Tac-Toe game rules

pub mod board;
pub mod lines;

pub use board::{BoardState, Cell, Player, StateKey, Verdict};
pub use lines::{LineAnalyzer, WINNING_LINES};
