//! Single self-play episode
//!
//! Both sides sample from the same policy table. Each accepted placement is
//! recorded in the trajectory of the side that made it; rejected placements
//! are masked and resampled inside [`place_with_masking`].

use serde::{Deserialize, Serialize};

use crate::{
    policy::{ActionSelector, PolicyTable, place_with_masking},
    tictactoe::{BoardState, Player, StateKey, Verdict},
};

/// How an episode ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EpisodeEnd {
    /// The rules reported three in a line
    Win(Player),
    /// The rules reported a full board with no line
    Draw,
    /// The selector ran out of weight while the rules still reported an
    /// ongoing game. By convention the side not currently to move is treated
    /// as the winner; see [`EpisodeRecord::effective_winner`].
    Exhausted,
}

/// Everything recorded while one episode was played
#[derive(Debug, Clone)]
pub struct EpisodeRecord {
    pub end: EpisodeEnd,
    /// `(state, action)` pairs chosen by X, in move order
    pub x_trajectory: Vec<(StateKey, usize)>,
    /// `(state, action)` pairs chosen by O, in move order
    pub o_trajectory: Vec<(StateKey, usize)>,
    /// Board position when the episode stopped
    pub final_board: BoardState,
}

impl EpisodeRecord {
    /// The side to credit with the win, if any.
    ///
    /// For `Exhausted` the table believes the board is full even though the
    /// rules disagree; the reference convention awards the win to whichever
    /// side is not on turn, as if it had just completed the board. This is
    /// preserved unverified: nothing checks that exhaustion and a genuinely
    /// full board actually coincide.
    pub fn effective_winner(&self) -> Option<Player> {
        match self.end {
            EpisodeEnd::Win(winner) => Some(winner),
            EpisodeEnd::Draw => None,
            EpisodeEnd::Exhausted => Some(self.final_board.to_move.opponent()),
        }
    }

    /// Trajectory recorded for one side
    pub fn trajectory(&self, player: Player) -> &[(StateKey, usize)] {
        match player {
            Player::X => &self.x_trajectory,
            Player::O => &self.o_trajectory,
        }
    }
}

/// Play one self-play episode to completion.
///
/// The loop ends when the rules classify the position as terminal or when
/// the selector can no longer propose an action. No credit assignment
/// happens here; the session applies it from the returned record.
pub fn run_episode(table: &mut PolicyTable, selector: &mut ActionSelector) -> EpisodeRecord {
    let mut board = BoardState::new();
    let mut x_trajectory = Vec::new();
    let mut o_trajectory = Vec::new();

    let end = loop {
        let mover = board.to_move;
        let state = board.key();

        let Some((action, next)) = place_with_masking(table, selector, &board) else {
            break EpisodeEnd::Exhausted;
        };

        match mover {
            Player::X => x_trajectory.push((state, action)),
            Player::O => o_trajectory.push((state, action)),
        }
        board = next;

        match board.classify() {
            Verdict::Ongoing => {}
            Verdict::Win(winner) => break EpisodeEnd::Win(winner),
            Verdict::Draw => break EpisodeEnd::Draw,
        }
    };

    EpisodeRecord {
        end,
        x_trajectory,
        o_trajectory,
        final_board: board,
    }
}
