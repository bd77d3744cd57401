//! Tic-tac-toe on the usual 3x3 board.
//!
//! The first player places crosses, the second noughts. Three in a row,
//! column, or diagonal wins; a full board with no winner is a draw. Perfect
//! play from the empty board is a draw, which makes the game a good fixture
//! for checking search correctness.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::game::{ActionVec, Game};

/// The eight winning lines, as board indices.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2], // top row
    [3, 4, 5], // middle row
    [6, 7, 8], // bottom row
    [0, 3, 6], // left column
    [1, 4, 7], // center column
    [2, 5, 8], // right column
    [0, 4, 8], // main diagonal
    [2, 4, 6], // anti-diagonal
];

/// One board cell, addressed row-major.
///
/// ```text
/// 0 | 1 | 2
/// ---------
/// 3 | 4 | 5
/// ---------
/// 6 | 7 | 8
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell(u8);

impl Cell {
    /// Create a cell from row and column, both 0-2.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is out of range.
    #[must_use]
    pub fn new(row: u8, col: u8) -> Self {
        assert!(row < 3 && col < 3, "cell coordinates must be 0-2");
        Self(row * 3 + col)
    }

    /// The row (0-2).
    #[must_use]
    pub fn row(self) -> u8 {
        self.0 / 3
    }

    /// The column (0-2).
    #[must_use]
    pub fn col(self) -> u8 {
        self.0 % 3
    }

    /// The row-major board index (0-8).
    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row(), self.col())
    }
}

/// One tic-tac-toe position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicTacToeState {
    board: [Option<PlayerId>; 9],
    to_move: PlayerId,
}

impl TicTacToeState {
    /// The mark in a cell, if any.
    #[must_use]
    pub fn mark(&self, cell: Cell) -> Option<PlayerId> {
        self.board[cell.index()]
    }

    fn line_won_by(&self, player: PlayerId) -> bool {
        LINES
            .iter()
            .any(|line| line.iter().all(|&i| self.board[i] == Some(player)))
    }

    fn is_full(&self) -> bool {
        self.board.iter().all(Option::is_some)
    }
}

impl fmt::Display for TicTacToeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            if row > 0 {
                writeln!(f, "---+---+---")?;
            }
            for col in 0..3 {
                if col > 0 {
                    write!(f, "|")?;
                }
                let mark = match self.board[row * 3 + col] {
                    Some(PlayerId::P0) => 'x',
                    Some(_) => 'o',
                    None => ' ',
                };
                write!(f, " {mark} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Tic-tac-toe.
#[derive(Clone, Copy, Debug, Default)]
pub struct TicTacToe;

impl TicTacToe {
    /// Whether `player` has completed a line in `state`.
    #[must_use]
    pub fn is_winner(&self, state: &TicTacToeState, player: PlayerId) -> bool {
        state.line_won_by(player)
    }
}

impl Game for TicTacToe {
    type State = TicTacToeState;
    type Action = Cell;

    fn initial_state(&self) -> TicTacToeState {
        TicTacToeState {
            board: [None; 9],
            to_move: PlayerId::P0,
        }
    }

    fn to_move(&self, state: &TicTacToeState) -> PlayerId {
        state.to_move
    }

    /// Empty cells in row-major order.
    fn actions(&self, state: &TicTacToeState) -> ActionVec<Cell> {
        if self.is_terminal(state) {
            return ActionVec::new();
        }
        state
            .board
            .iter()
            .enumerate()
            .filter(|(_, mark)| mark.is_none())
            .map(|(i, _)| Cell(i as u8))
            .collect()
    }

    /// # Panics
    ///
    /// Fails fast if the target cell is already marked.
    fn result(&self, state: &TicTacToeState, action: &Cell) -> TicTacToeState {
        assert!(
            state.board[action.index()].is_none(),
            "cell {action} is already marked"
        );
        // The board is a plain value; copying it is the whole move.
        let mut next = *state;
        next.board[action.index()] = Some(state.to_move);
        next.to_move = state.to_move.opponent();
        next
    }

    fn is_terminal(&self, state: &TicTacToeState) -> bool {
        // Only the player who just moved can have completed a line.
        state.line_won_by(state.to_move.opponent()) || state.is_full()
    }

    fn utility(&self, state: &TicTacToeState, player: PlayerId) -> f64 {
        assert!(
            self.is_terminal(state),
            "utility is defined on terminal states only"
        );
        if state.line_won_by(player) {
            1.0
        } else if state.line_won_by(player.opponent()) {
            -1.0
        } else {
            0.0
        }
    }
}
