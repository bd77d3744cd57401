//! Match runner: alternate turns between two strategies until the game
//! ends, recording everything a driver needs to render or replay the game.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, PlayerPair};
use crate::game::{Game, GameResult};

use super::strategy::Strategy;

/// One move of a finished match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoveRecord<A> {
    /// Who moved.
    pub player: PlayerId,

    /// What they played.
    pub action: A,
}

/// A finished match: every move, the final position, and the outcome.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord<S, A> {
    /// Moves in play order.
    pub moves: Vec<MoveRecord<A>>,

    /// The terminal state the match ended in.
    pub final_state: S,

    /// Terminal utility per player.
    pub utilities: PlayerPair<f64>,

    /// Winner or draw.
    pub result: GameResult,
}

impl<S, A> MatchRecord<S, A> {
    /// Number of moves played.
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Whether the match ended without a single move (terminal start).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// The actions of one player, in play order.
    pub fn actions_of(&self, player: PlayerId) -> impl Iterator<Item = &A> {
        self.moves
            .iter()
            .filter(move |m| m.player == player)
            .map(|m| &m.action)
    }
}

/// Play one match between two strategies, first player first.
///
/// Alternates turns from `initial_state`, asking the strategy of the player
/// to move for an action and applying it, until the game reaches a terminal
/// state. Termination is a contract of the game (every action strictly
/// shrinks the remaining game), so the loop carries no move cap.
///
/// # Panics
///
/// Panics if a strategy returns no action for a non-terminal state.
pub fn play_match<G, P0, P1>(
    game: &G,
    p0: &mut P0,
    p1: &mut P1,
) -> MatchRecord<G::State, G::Action>
where
    G: Game,
    P0: Strategy<G>,
    P1: Strategy<G>,
{
    let mut state = game.initial_state();
    let mut moves = Vec::new();

    while !game.is_terminal(&state) {
        let player = game.to_move(&state);
        let action = match player {
            PlayerId::P0 => p0.choose(game, &state),
            _ => p1.choose(game, &state),
        }
        .expect("strategy returned no action for a non-terminal state");

        state = game.result(&state, &action);
        moves.push(MoveRecord { player, action });
    }

    let utilities = PlayerPair::new(
        game.utility(&state, PlayerId::P0),
        game.utility(&state, PlayerId::P1),
    );
    let result = GameResult::from_terminal(game, &state);

    MatchRecord {
        moves,
        final_state: state,
        utilities,
        result,
    }
}

/// Play one match with the same strategy on both sides.
pub fn play_self<G, S>(game: &G, strategy: &mut S) -> MatchRecord<G::State, G::Action>
where
    G: Game,
    S: Strategy<G>,
{
    let mut state = game.initial_state();
    let mut moves = Vec::new();

    while !game.is_terminal(&state) {
        let player = game.to_move(&state);
        let action = strategy
            .choose(game, &state)
            .expect("strategy returned no action for a non-terminal state");

        state = game.result(&state, &action);
        moves.push(MoveRecord { player, action });
    }

    let utilities = PlayerPair::new(
        game.utility(&state, PlayerId::P0),
        game.utility(&state, PlayerId::P1),
    );
    let result = GameResult::from_terminal(game, &state);

    MatchRecord {
        moves,
        final_state: state,
        utilities,
        result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::{HalvingGame, TicTacToe};
    use crate::play::strategy::{AlphaBetaStrategy, MinimaxStrategy, RandomStrategy};

    #[test]
    fn test_match_alternates_turns() {
        let game = HalvingGame::new(5);
        let record = play_match(&game, &mut AlphaBetaStrategy, &mut AlphaBetaStrategy);

        for (i, m) in record.moves.iter().enumerate() {
            let expected = if i % 2 == 0 { PlayerId::P0 } else { PlayerId::P1 };
            assert_eq!(m.player, expected);
        }
    }

    #[test]
    fn test_match_ends_terminal_and_zero_sum() {
        let game = TicTacToe;
        let record = play_match(&game, &mut AlphaBetaStrategy, &mut RandomStrategy::new(3));

        assert!(game.is_terminal(&record.final_state));
        assert_eq!(
            record.utilities[PlayerId::P0],
            -record.utilities[PlayerId::P1]
        );
    }

    #[test]
    fn test_terminal_start_yields_empty_record() {
        let game = HalvingGame::new(0);
        let record = play_match(&game, &mut MinimaxStrategy, &mut MinimaxStrategy);

        assert!(record.is_empty());
        assert_eq!(record.len(), 0);
    }

    #[test]
    fn test_actions_of_filters_by_player() {
        let game = HalvingGame::new(5);
        let record = play_self(&game, &mut AlphaBetaStrategy);

        let p0_moves = record.actions_of(PlayerId::P0).count();
        let p1_moves = record.actions_of(PlayerId::P1).count();
        assert_eq!(p0_moves + p1_moves, record.len());
        // First player moves first, so they never trail.
        assert!(p0_moves >= p1_moves);
    }

    #[test]
    fn test_record_serialization() {
        let game = HalvingGame::new(5);
        let record = play_self(&game, &mut AlphaBetaStrategy);

        let json = serde_json::to_string(&record).unwrap();
        let restored: MatchRecord<_, _> = serde_json::from_str(&json).unwrap();
        assert_eq!(record, restored);
    }
}
