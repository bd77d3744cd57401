//! Plain full-depth minimax search.
//!
//! Explores the entire game tree reachable from the searched state; no
//! caching, no depth cutoff. Intended for small finite games where every
//! line runs to a terminal state.

use crate::core::PlayerId;
use crate::game::Game;

use super::decision::Decision;
use super::stats::SearchStats;

/// Best action for the player to move in `state`, by full minimax.
///
/// Returns `None` exactly when `state` is already terminal; drivers must
/// check `is_terminal` before applying the result.
pub fn minimax_search<G: Game>(game: &G, state: &G::State) -> Option<G::Action> {
    minimax_decision(game, state).action
}

/// Full minimax, returning the position's value and search statistics
/// along with the chosen action.
///
/// The player to move in `state` is the maximizer; values are from that
/// player's perspective.
pub fn minimax_decision<G: Game>(game: &G, state: &G::State) -> Decision<G::Action> {
    let player = game.to_move(state);
    let mut stats = SearchStats::new();

    let (value, action) = max_value(game, state, player, &mut stats);

    Decision {
        value,
        action,
        stats,
    }
}

fn max_value<G: Game>(
    game: &G,
    state: &G::State,
    player: PlayerId,
    stats: &mut SearchStats,
) -> (f64, Option<G::Action>) {
    stats.nodes += 1;

    if game.is_terminal(state) {
        stats.terminals += 1;
        return (game.utility(state, player), None);
    }

    let mut v = f64::NEG_INFINITY;
    let mut best = None;

    for action in game.actions(state) {
        let (v2, _) = min_value(game, &game.result(state, &action), player, stats);
        // Strict comparison: the first action reaching the extremal value
        // is kept, later ties never replace it.
        if v2 > v {
            v = v2;
            best = Some(action);
        }
    }

    (v, best)
}

fn min_value<G: Game>(
    game: &G,
    state: &G::State,
    player: PlayerId,
    stats: &mut SearchStats,
) -> (f64, Option<G::Action>) {
    stats.nodes += 1;

    if game.is_terminal(state) {
        stats.terminals += 1;
        return (game.utility(state, player), None);
    }

    let mut v = f64::INFINITY;
    let mut best = None;

    for action in game.actions(state) {
        let (v2, _) = max_value(game, &game.result(state, &action), player, stats);
        if v2 < v {
            v = v2;
            best = Some(action);
        }
    }

    (v, best)
}
