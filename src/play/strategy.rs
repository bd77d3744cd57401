//! Pluggable move providers for match play.
//!
//! A [`Strategy`] is anything that can pick a move for the player whose
//! turn it is: the search engine, a random player, or (outside this crate)
//! a human at a terminal.

use crate::core::GameRng;
use crate::game::Game;
use crate::search::{alpha_beta_search, minimax_search};

/// A move provider for one side of a match.
pub trait Strategy<G: Game> {
    /// Pick an action for the player to move in `state`.
    ///
    /// Returns `None` only for terminal states.
    fn choose(&mut self, game: &G, state: &G::State) -> Option<G::Action>;
}

/// Plays the plain-minimax move.
#[derive(Clone, Copy, Debug, Default)]
pub struct MinimaxStrategy;

impl<G: Game> Strategy<G> for MinimaxStrategy {
    fn choose(&mut self, game: &G, state: &G::State) -> Option<G::Action> {
        minimax_search(game, state)
    }
}

/// Plays the alpha-beta move. Identical choices to [`MinimaxStrategy`],
/// cheaper to run.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlphaBetaStrategy;

impl<G: Game> Strategy<G> for AlphaBetaStrategy {
    fn choose(&mut self, game: &G, state: &G::State) -> Option<G::Action> {
        alpha_beta_search(game, state)
    }
}

/// Plays a uniformly random legal move.
///
/// Deterministic under its seed; useful as a weak, reproducible opponent.
#[derive(Clone, Debug)]
pub struct RandomStrategy {
    rng: GameRng,
}

impl RandomStrategy {
    /// Create a random strategy with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl<G: Game> Strategy<G> for RandomStrategy {
    fn choose(&mut self, game: &G, state: &G::State) -> Option<G::Action> {
        let actions = game.actions(state);
        self.rng.choose(&actions).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::{HalvingAction, HalvingGame, TicTacToe};

    #[test]
    fn test_search_strategies_agree() {
        let game = TicTacToe;
        let state = game.initial_state();

        let minimax_move = MinimaxStrategy.choose(&game, &state);
        let alpha_beta_move = AlphaBetaStrategy.choose(&game, &state);

        assert_eq!(minimax_move, alpha_beta_move);
        assert!(minimax_move.is_some());
    }

    #[test]
    fn test_strategies_return_none_on_terminal() {
        let game = HalvingGame::new(0);
        let state = game.initial_state();

        assert_eq!(MinimaxStrategy.choose(&game, &state), None);
        assert_eq!(AlphaBetaStrategy.choose(&game, &state), None);
        assert_eq!(RandomStrategy::new(7).choose(&game, &state), None);
    }

    #[test]
    fn test_random_strategy_is_seeded() {
        let game = TicTacToe;
        let state = game.initial_state();

        let mut a = RandomStrategy::new(42);
        let mut b = RandomStrategy::new(42);

        for _ in 0..5 {
            assert_eq!(a.choose(&game, &state), b.choose(&game, &state));
        }
    }

    #[test]
    fn test_random_strategy_picks_legal_moves() {
        let game = HalvingGame::new(5);
        let state = game.initial_state();
        let mut random = RandomStrategy::new(1);

        for _ in 0..20 {
            let action = random.choose(&game, &state).unwrap();
            assert!(matches!(
                action,
                HalvingAction::Decrement | HalvingAction::Halve
            ));
        }
    }
}
