//! End-of-episode credit assignment
//!
//! The winner's trajectory is reinforced uniformly: every recorded move gets
//! +1, with no discounting by distance from the terminal state. The loser is
//! penalized only at the decisive point: the last move it made before the
//! opponent won is zeroed outright. Draws change nothing.

use super::table::PolicyTable;
use crate::tictactoe::StateKey;

/// Add 1 to every `(state, action)` pair in a trajectory.
///
/// An empty trajectory is a no-op: the side may never have moved.
pub fn reinforce_trajectory(table: &mut PolicyTable, trajectory: &[(StateKey, usize)]) {
    for (state, action) in trajectory {
        table.increment_weight(state, *action);
    }
}

/// Zero the weight of the final move in a trajectory.
///
/// Earlier moves are left untouched; only the move immediately preceding the
/// opponent's win is treated as the error. An empty trajectory is a no-op.
pub fn penalize_final_move(table: &mut PolicyTable, trajectory: &[(StateKey, usize)]) {
    if let Some((state, action)) = trajectory.last() {
        table.set_weight(state, *action, 0);
    }
}
