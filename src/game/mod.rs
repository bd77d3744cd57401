//! The game abstraction the search engine operates over.
//!
//! A game implements [`Game`] to expose its rules:
//! - What the starting position is
//! - Whose turn a state is and what moves are legal
//! - How moves transform states
//! - When the game is over and who gets what
//!
//! States are immutable values: [`Game::result`] always returns a new state
//! and never mutates its input. The search engine only ever holds states
//! transiently on the recursion stack; drivers hold the current state
//! between turns.

pub mod enumerate;

pub use enumerate::reachable_states;

use smallvec::SmallVec;

use crate::core::PlayerId;

/// Legal-action list.
///
/// No game in this crate has more than nine legal moves from any state, so
/// action lists live inline and never touch the heap.
pub type ActionVec<A> = SmallVec<[A; 9]>;

/// A two-player zero-sum game with perfect information.
///
/// ## Contracts
///
/// - `result` must be a pure, deterministic transition and must alternate
///   the player to move: `to_move(result(s, a)) == to_move(s).opponent()`
///   for every non-terminal `s` and legal `a`.
/// - `utility` is defined on terminal states only and must be zero-sum:
///   `utility(s, p) == -utility(s, p.opponent())`.
/// - Every action must strictly shrink the remaining game, so that play
///   from `initial_state` terminates. The engine relies on this and does
///   not guard against loops.
/// - `result` is trusted with its input: the search engine only passes
///   actions obtained from `actions` on the same state. Implementations
///   here fail fast on illegal actions; see each game's docs.
pub trait Game {
    /// One position of the game, whose turn included.
    type State: Clone;

    /// One legal move.
    type Action: Clone;

    /// The unique starting state.
    fn initial_state(&self) -> Self::State;

    /// Whose turn `state` is.
    ///
    /// Defined for terminal states too: every game here keeps flipping the
    /// player on the final move, so a terminal state reports the successor
    /// of the last mover. `utility` is defined against that convention.
    fn to_move(&self, state: &Self::State) -> PlayerId;

    /// All legal actions from `state`, in a deterministic game-defined
    /// order. Empty exactly when `state` is terminal.
    ///
    /// The order never changes which value the search computes, only which
    /// of several equally good actions it picks (the first one wins).
    fn actions(&self, state: &Self::State) -> ActionVec<Self::Action>;

    /// The state reached by playing `action` in `state`.
    ///
    /// Never mutates `state`; always returns a fresh value.
    fn result(&self, state: &Self::State, action: &Self::Action) -> Self::State;

    /// Whether `state` has no further legal actions.
    fn is_terminal(&self, state: &Self::State) -> bool;

    /// Utility of a terminal `state` from `player`'s perspective.
    ///
    /// # Panics
    ///
    /// Panics if `state` is not terminal.
    fn utility(&self, state: &Self::State, player: PlayerId) -> f64;
}

/// Result of a completed game, for driver-side reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Draw (no winner).
    Draw,
}

impl GameResult {
    /// Derive the result from a terminal state's utilities.
    ///
    /// # Panics
    ///
    /// Panics if `state` is not terminal (via [`Game::utility`]).
    pub fn from_terminal<G: Game>(game: &G, state: &G::State) -> Self {
        let u0 = game.utility(state, PlayerId::P0);
        if u0 > 0.0 {
            GameResult::Winner(PlayerId::P0)
        } else if u0 < 0.0 {
            GameResult::Winner(PlayerId::P1)
        } else {
            GameResult::Draw
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner(PlayerId::P1);
        assert!(!result.is_winner(PlayerId::P0));
        assert!(result.is_winner(PlayerId::P1));

        let draw = GameResult::Draw;
        assert!(!draw.is_winner(PlayerId::P0));
        assert!(!draw.is_winner(PlayerId::P1));
    }

    #[test]
    fn test_game_result_serialization() {
        let result = GameResult::Winner(PlayerId::P0);
        let json = serde_json::to_string(&result).unwrap();
        let deserialized: GameResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, deserialized);
    }
}
