//! The outcome of one search: value, chosen action, statistics.

use serde::{Deserialize, Serialize};

use super::stats::SearchStats;

/// What a search concluded about one position.
///
/// `value` is the game-theoretic value of the position from the perspective
/// of the player to move there. `action` is `None` exactly when the searched
/// state was already terminal; drivers must check before applying it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Decision<A> {
    /// Value of the position for the player to move.
    pub value: f64,

    /// The chosen action, or `None` for a terminal position.
    pub action: Option<A>,

    /// Work done to reach this conclusion.
    pub stats: SearchStats,
}
