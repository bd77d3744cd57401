//! The halving game: decrement or halve a number; avoid reaching zero.
//!
//! Players alternate turns. On each turn the current player either
//! subtracts 1 from the number or floor-divides it by 2. The game ends
//! when the number reaches 0, and the player to move at that point (the
//! one who did *not* make the final move) wins.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::smallvec;

use crate::core::PlayerId;
use crate::game::{ActionVec, Game};

/// One position: whose turn it is and the number remaining.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HalvingState {
    to_move: PlayerId,
    number: u32,
}

impl HalvingState {
    /// The number remaining.
    #[must_use]
    pub fn number(&self) -> u32 {
        self.number
    }
}

impl fmt::Display for HalvingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "number {} ({} to move)", self.number, self.to_move)
    }
}

/// The two moves of the halving game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HalvingAction {
    /// Subtract 1.
    Decrement,
    /// Floor-divide by 2.
    Halve,
}

impl fmt::Display for HalvingAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HalvingAction::Decrement => write!(f, "--"),
            HalvingAction::Halve => write!(f, "/2"),
        }
    }
}

/// The halving game, parameterized by its starting number.
#[derive(Clone, Copy, Debug)]
pub struct HalvingGame {
    n: u32,
}

impl HalvingGame {
    /// Create a game starting from `n`.
    #[must_use]
    pub fn new(n: u32) -> Self {
        Self { n }
    }
}

impl Game for HalvingGame {
    type State = HalvingState;
    type Action = HalvingAction;

    fn initial_state(&self) -> HalvingState {
        HalvingState {
            to_move: PlayerId::P0,
            number: self.n,
        }
    }

    fn to_move(&self, state: &HalvingState) -> PlayerId {
        state.to_move
    }

    fn actions(&self, state: &HalvingState) -> ActionVec<HalvingAction> {
        if self.is_terminal(state) {
            return ActionVec::new();
        }
        smallvec![HalvingAction::Decrement, HalvingAction::Halve]
    }

    /// Both actions are always legal on a non-terminal state, so there is
    /// no illegal-action case to reject here.
    fn result(&self, state: &HalvingState, action: &HalvingAction) -> HalvingState {
        let number = match action {
            HalvingAction::Decrement => state.number - 1,
            HalvingAction::Halve => state.number / 2,
        };
        HalvingState {
            to_move: state.to_move.opponent(),
            number,
        }
    }

    fn is_terminal(&self, state: &HalvingState) -> bool {
        state.number == 0
    }

    fn utility(&self, state: &HalvingState, player: PlayerId) -> f64 {
        assert!(
            self.is_terminal(state),
            "utility is defined on terminal states only"
        );
        if state.to_move == player {
            1.0
        } else {
            -1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let game = HalvingGame::new(5);
        let state = game.initial_state();

        assert_eq!(game.to_move(&state), PlayerId::P0);
        assert_eq!(state.number(), 5);
        assert!(!game.is_terminal(&state));
    }

    #[test]
    fn test_actions_in_fixed_order() {
        let game = HalvingGame::new(5);
        let actions = game.actions(&game.initial_state());

        assert_eq!(
            actions.as_slice(),
            &[HalvingAction::Decrement, HalvingAction::Halve]
        );
    }

    #[test]
    fn test_result_decrement_and_halve() {
        let game = HalvingGame::new(5);
        let state = game.initial_state();

        let decremented = game.result(&state, &HalvingAction::Decrement);
        assert_eq!(decremented.number(), 4);
        assert_eq!(game.to_move(&decremented), PlayerId::P1);

        let halved = game.result(&state, &HalvingAction::Halve);
        assert_eq!(halved.number(), 2);
        assert_eq!(game.to_move(&halved), PlayerId::P1);
    }

    #[test]
    fn test_halve_uses_floor_division() {
        let game = HalvingGame::new(7);
        let halved = game.result(&game.initial_state(), &HalvingAction::Halve);
        assert_eq!(halved.number(), 3);
    }

    #[test]
    fn test_result_does_not_mutate_input() {
        let game = HalvingGame::new(5);
        let state = game.initial_state();

        let _ = game.result(&state, &HalvingAction::Halve);
        assert_eq!(state.number(), 5);
    }

    #[test]
    fn test_terminal_and_utility() {
        let game = HalvingGame::new(1);
        let state = game.initial_state();
        let terminal = game.result(&state, &HalvingAction::Decrement);

        assert!(game.is_terminal(&terminal));
        assert!(game.actions(&terminal).is_empty());

        // P0 moved to zero; the terminal state has P1 to move, and the
        // player to move at the terminal is the winner.
        assert_eq!(game.to_move(&terminal), PlayerId::P1);
        assert_eq!(game.utility(&terminal, PlayerId::P1), 1.0);
        assert_eq!(game.utility(&terminal, PlayerId::P0), -1.0);
    }

    #[test]
    #[should_panic(expected = "terminal states only")]
    fn test_utility_on_nonterminal_panics() {
        let game = HalvingGame::new(5);
        let _ = game.utility(&game.initial_state(), PlayerId::P0);
    }

    #[test]
    fn test_action_display() {
        assert_eq!(format!("{}", HalvingAction::Decrement), "--");
        assert_eq!(format!("{}", HalvingAction::Halve), "/2");
    }

    #[test]
    fn test_state_serialization() {
        let game = HalvingGame::new(5);
        let state = game.initial_state();

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: HalvingState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
