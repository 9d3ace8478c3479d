//! Legality masking: learning occupied cells from rejected placements
//!
//! The policy table starts out ignorant of which cells are legal in a state.
//! Legality is discovered by attempting placements: whenever the board
//! rejects one, the action's weight is permanently zeroed for that exact
//! state and the selector is asked again. Once masked, an index stays masked
//! for the lifetime of the table.

use super::{selector::ActionSelector, table::PolicyTable};
use crate::tictactoe::BoardState;

/// Sample actions for `board` until one is accepted, masking each rejection.
///
/// Returns the accepted action and the resulting board, or `None` when the
/// selector runs out of weight for this state (every index masked, i.e. the
/// table believes the board is full).
pub fn place_with_masking(
    table: &mut PolicyTable,
    selector: &mut ActionSelector,
    board: &BoardState,
) -> Option<(usize, BoardState)> {
    let state = board.key();

    loop {
        let action = selector.choose(table, &state)?;
        match board.make_move(action) {
            Ok(next) => return Some((action, next)),
            Err(_) => table.set_weight(&state, action, 0),
        }
    }
}
