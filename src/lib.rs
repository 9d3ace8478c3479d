//! Tabular self-play trainer for Tic-Tac-Toe
//!
//! This crate provides:
//! - A Tic-Tac-Toe board with move validation and terminal classification
//! - A policy table mapping exact board states to per-cell action weights
//! - An epsilon-greedy action selector with overflow control
//! - Legality masking that learns occupied cells from failed placements
//! - A self-play training loop with end-of-episode credit assignment

pub mod error;
pub mod output;
pub mod policy;
pub mod tictactoe;
pub mod training;

pub use error::{Error, Result};
pub use policy::{
    ActionSelector, EXPLORATION_RATE, OVERFLOW_THRESHOLD, PRIOR_WEIGHT, PolicyTable,
};
pub use tictactoe::{BoardState, Cell, Player, StateKey, Verdict};
pub use training::{EpisodeEnd, TrainingConfig, TrainingResult, TrainingSession};
