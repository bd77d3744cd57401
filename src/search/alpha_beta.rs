//! Alpha-beta pruned minimax search.
//!
//! Same recursion as plain minimax, but each call carries a window
//! `(alpha, beta)` of value bounds established by ancestors. A subtree that
//! provably cannot affect the decision is skipped. The chosen action and
//! value are identical to plain minimax on every input; only the amount of
//! work differs.

use crate::core::PlayerId;
use crate::game::Game;

use super::decision::Decision;
use super::stats::SearchStats;

/// Best action for the player to move in `state`, by alpha-beta search.
///
/// Returns `None` exactly when `state` is already terminal. For every input
/// this agrees with [`minimax_search`](super::minimax_search), action and
/// value both.
pub fn alpha_beta_search<G: Game>(game: &G, state: &G::State) -> Option<G::Action> {
    alpha_beta_decision(game, state).action
}

/// Alpha-beta search, returning the position's value and search statistics
/// along with the chosen action.
pub fn alpha_beta_decision<G: Game>(game: &G, state: &G::State) -> Decision<G::Action> {
    let player = game.to_move(state);
    let mut stats = SearchStats::new();

    let (value, action) = max_value(
        game,
        state,
        player,
        f64::NEG_INFINITY,
        f64::INFINITY,
        &mut stats,
    );

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
    mut alpha: f64,
    beta: f64,
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
        let (v2, _) = min_value(game, &game.result(state, &action), player, alpha, beta, stats);
        if v2 > v {
            v = v2;
            best = Some(action);
            alpha = alpha.max(v);
        }
        // Beta cutoff: the minimizing ancestor already has a line worth at
        // most `beta`, so the remaining siblings cannot matter.
        if v >= beta {
            stats.cutoffs += 1;
            return (v, best);
        }
    }

    (v, best)
}

fn min_value<G: Game>(
    game: &G,
    state: &G::State,
    player: PlayerId,
    alpha: f64,
    mut beta: f64,
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
        let (v2, _) = max_value(game, &game.result(state, &action), player, alpha, beta, stats);
        if v2 < v {
            v = v2;
            best = Some(action);
            beta = beta.min(v);
        }
        // Alpha cutoff, mirror image of the beta cutoff above.
        if v <= alpha {
            stats.cutoffs += 1;
            return (v, best);
        }
    }

    (v, best)
}
