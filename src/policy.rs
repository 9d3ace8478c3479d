//! Policy table and its update machinery
//!
//! The table maps exact board states to 9-entry action weight vectors. All
//! learning happens through three mutations: masking an illegal action to
//! zero, reinforcing a winning move by one, and halving a state's weights
//! when their sum grows past the overflow threshold.

pub mod credit;
pub mod masking;
pub mod selector;
pub mod snapshot;
pub mod table;

pub use credit::{penalize_final_move, reinforce_trajectory};
pub use masking::place_with_masking;
pub use selector::{ActionSelector, EXPLORATION_RATE};
pub use table::{OVERFLOW_THRESHOLD, PRIOR_WEIGHT, PolicyTable, WeightVector};
