//! Exhaustive enumeration of a game's reachable state space.
//!
//! The games this crate targets are small enough to walk completely, which
//! turns the game contracts (zero-sum utilities, turn alternation,
//! termination) into properties that can be checked against every reachable
//! state by brute force instead of sampling.

use std::hash::Hash;

use rustc_hash::FxHashSet;

use super::Game;

/// All states reachable from `initial_state`.
///
/// Duplicate positions (reachable via move transpositions) appear once; the
/// order is unspecified.
/// Intended for validation and tests; cost is the size of the state space,
/// e.g. 5478 positions for tic-tac-toe.
pub fn reachable_states<G>(game: &G) -> Vec<G::State>
where
    G: Game,
    G::State: Hash + Eq,
{
    let mut seen = FxHashSet::default();
    let mut frontier = vec![game.initial_state()];
    let mut out = Vec::new();

    seen.insert(game.initial_state());

    while let Some(state) = frontier.pop() {
        if !game.is_terminal(&state) {
            for action in game.actions(&state) {
                let next = game.result(&state, &action);
                if seen.insert(next.clone()) {
                    frontier.push(next);
                }
            }
        }
        out.push(state);
    }

    out
}
