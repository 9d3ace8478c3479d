//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use super::lines::LineAnalyzer;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '-' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// Terminal classification of a board position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    Ongoing,
    Win(Player),
    Draw,
}

/// Exact board configuration used as the policy table's lookup key.
///
/// The key is the raw cell sequence in row-major order. Rotations and
/// reflections of the same position are distinct keys; the table learns each
/// of them separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StateKey([Cell; 9]);

impl StateKey {
    /// Wrap a raw cell array as a key
    pub fn new(cells: [Cell; 9]) -> Self {
        StateKey(cells)
    }

    /// Get the underlying cells
    pub fn cells(&self) -> &[Cell; 9] {
        &self.0
    }

    /// Encode as a 9-character string (`.`/`X`/`O`, row-major)
    pub fn encode(&self) -> String {
        self.0.iter().map(|&c| c.to_char()).collect()
    }

    /// Parse a 9-character key string.
    ///
    /// # Errors
    ///
    /// Returns error if the string is not exactly 9 valid cell characters.
    pub fn parse(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Ok(StateKey(cells))
    }
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.0 {
            write!(f, "{}", cell.to_char())?;
        }
        Ok(())
    }
}

/// Complete board state including cells and whose turn it is
///
/// This type implements `Copy` since it's only 10 bytes
/// (9 bytes for cells + 1 byte for player enum).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardState {
    pub cells: [Cell; 9],
    pub to_move: Player,
}

impl BoardState {
    /// Create a new empty board with X to move
    pub fn new() -> Self {
        BoardState {
            cells: [Cell::Empty; 9],
            to_move: Player::X,
        }
    }

    /// Create a board from a string representation.
    ///
    /// The string must contain 9 valid cell characters (whitespace is filtered
    /// out). The player to move is inferred from the piece counts, defaulting
    /// to X-first semantics.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The string has fewer than 9 non-whitespace characters
    /// - Any character is not a valid cell representation
    /// - The piece counts are invalid (X and O differ by more than 1)
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let cleaned: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        let key = StateKey::parse(&cleaned).map_err(|e| match e {
            crate::Error::InvalidBoardLength { expected, got, .. } => {
                crate::Error::InvalidBoardLength {
                    expected,
                    got,
                    context: s.to_string(),
                }
            }
            other => other,
        })?;

        let cells = *key.cells();
        let x_count = cells.iter().filter(|&&c| c == Cell::X).count();
        let o_count = cells.iter().filter(|&&c| c == Cell::O).count();

        let to_move = if x_count == o_count {
            Player::X
        } else if x_count == o_count + 1 {
            Player::O
        } else {
            return Err(crate::Error::InvalidPieceCounts { x_count, o_count });
        };

        Ok(BoardState { cells, to_move })
    }

    /// Get the lookup key for this position
    pub fn key(&self) -> StateKey {
        StateKey(self.cells)
    }

    /// Check if a position is empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.cells[pos] == Cell::Empty
    }

    /// Get all empty positions
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Make a move and return a new board state
    ///
    /// Fails without modifying anything if the position is out of range or
    /// already occupied; the caller uses the failure to mask the action.
    #[must_use = "make_move returns a new board state; the original is unchanged"]
    pub fn make_move(&self, pos: usize) -> Result<BoardState, crate::Error> {
        if pos >= 9 {
            return Err(crate::Error::InvalidPosition { position: pos });
        }

        if !self.is_empty(pos) {
            return Err(crate::Error::InvalidMove { position: pos });
        }

        let mut new_state = *self;
        new_state.cells[pos] = self.to_move.to_cell();
        new_state.to_move = self.to_move.opponent();
        Ok(new_state)
    }

    /// Check if a player has won
    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(&self.cells, player)
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        if self.has_won(Player::X) {
            Some(Player::X)
        } else if self.has_won(Player::O) {
            Some(Player::O)
        } else {
            None
        }
    }

    /// Classify the position as ongoing, won, or drawn
    pub fn classify(&self) -> Verdict {
        if let Some(winner) = self.winner() {
            Verdict::Win(winner)
        } else if self.cells.contains(&Cell::Empty) {
            Verdict::Ongoing
        } else {
            Verdict::Draw
        }
    }

    /// Check if the game is over (win or draw)
    pub fn is_terminal(&self) -> bool {
        self.classify() != Verdict::Ongoing
    }

    /// Render the board as three rows for display
    pub fn format(&self) -> String {
        let mut out = String::with_capacity(12);
        for row in 0..3 {
            for col in 0..3 {
                out.push(self.cells[row * 3 + col].to_char());
            }
            out.push('\n');
        }
        out
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty_with_x_to_move() {
        let board = BoardState::new();
        assert_eq!(board.to_move, Player::X);
        assert_eq!(board.empty_positions().len(), 9);
        assert_eq!(board.classify(), Verdict::Ongoing);
    }

    #[test]
    fn test_make_move_alternates_turns() {
        let board = BoardState::new();
        let board = board.make_move(4).unwrap();
        assert_eq!(board.cells[4], Cell::X);
        assert_eq!(board.to_move, Player::O);

        let board = board.make_move(0).unwrap();
        assert_eq!(board.cells[0], Cell::O);
        assert_eq!(board.to_move, Player::X);
    }

    #[test]
    fn test_make_move_rejects_occupied_cell() {
        let board = BoardState::new().make_move(4).unwrap();
        let err = board.make_move(4).unwrap_err();
        assert!(matches!(err, crate::Error::InvalidMove { position: 4 }));
        // Original board is unchanged
        assert_eq!(board.to_move, Player::O);
    }

    #[test]
    fn test_make_move_rejects_out_of_range() {
        let board = BoardState::new();
        assert!(matches!(
            board.make_move(9),
            Err(crate::Error::InvalidPosition { position: 9 })
        ));
    }

    #[test]
    fn test_classify_row_win() {
        let board = BoardState::from_string("XXX.OO...").unwrap();
        assert_eq!(board.classify(), Verdict::Win(Player::X));
    }

    #[test]
    fn test_classify_draw() {
        let board = BoardState::from_string("XOXXOOOXX").unwrap();
        assert_eq!(board.classify(), Verdict::Draw);
    }

    #[test]
    fn test_classify_full_board_with_win_is_not_draw() {
        let board = BoardState::from_string("XXXOOXOXO").unwrap();
        assert_eq!(board.classify(), Verdict::Win(Player::X));
    }

    #[test]
    fn test_state_key_roundtrip() {
        let board = BoardState::from_string("X.O.X....").unwrap();
        let key = board.key();
        assert_eq!(key.encode(), "X.O.X....");
        assert_eq!(StateKey::parse("X.O.X....").unwrap(), key);
    }

    #[test]
    fn test_state_key_accepts_dash_for_empty() {
        let key = StateKey::parse("X-O-X----").unwrap();
        assert_eq!(key.encode(), "X.O.X....");
    }

    #[test]
    fn test_state_key_rejects_bad_input() {
        assert!(StateKey::parse("XO").is_err());
        assert!(StateKey::parse("XOXOXOXOZ").is_err());
    }

    #[test]
    fn test_from_string_rejects_invalid_counts() {
        assert!(BoardState::from_string("XX.......").is_err());
        assert!(BoardState::from_string("O........").is_err());
    }

    #[test]
    fn test_rotated_boards_have_distinct_keys() {
        // No symmetry folding: a corner opening and its rotation are
        // different table entries.
        let a = BoardState::from_string("X........").unwrap();
        let b = BoardState::from_string("..X......").unwrap();
        assert_ne!(a.key(), b.key());
    }
}
