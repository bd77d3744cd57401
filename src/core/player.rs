//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe identifier for the two players of a zero-sum game.
//!
//! ## PlayerPair
//!
//! Fixed two-slot per-player storage, indexable by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Identifier for one of exactly two players.
///
/// Player indices are 0-based: the first player is `PlayerId::P0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(u8);

impl PlayerId {
    /// The first player (moves first in every game here).
    pub const P0: PlayerId = PlayerId(0);

    /// The second player.
    pub const P1: PlayerId = PlayerId(1);

    /// Create a player ID from a raw index.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not 0 or 1.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        assert!(id < 2, "PlayerId must be 0 or 1");
        Self(id)
    }

    /// Get the raw player index (0 or 1).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(1 - self.0)
    }

    /// Both player IDs, in index order.
    #[must_use]
    pub const fn both() -> [PlayerId; 2] {
        [Self::P0, Self::P1]
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "P{}", self.0 + 1)
    }
}

/// Per-player data storage with O(1) access.
///
/// Backed by a two-element array, one slot per player.
///
/// ## Example
///
/// ```
/// use gametree::core::{PlayerId, PlayerPair};
///
/// let mut utilities = PlayerPair::new(1.0, -1.0);
///
/// assert_eq!(utilities[PlayerId::P0], 1.0);
///
/// utilities[PlayerId::P1] = 0.0;
/// assert_eq!(utilities[PlayerId::P1], 0.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerPair<T> {
    data: [T; 2],
}

impl<T> PlayerPair<T> {
    /// Create a pair from the first and second player's values.
    #[must_use]
    pub fn new(p0: T, p1: T) -> Self {
        Self { data: [p0, p1] }
    }

    /// Create a pair with both slots set to the same value.
    #[must_use]
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            data: [value.clone(), value],
        }
    }

    /// Get a reference to a player's value.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's value.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::both().into_iter().zip(self.data.iter())
    }
}

impl<T> Index<PlayerId> for PlayerPair<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerPair<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        assert_eq!(PlayerId::P0.index(), 0);
        assert_eq!(PlayerId::P1.index(), 1);
        assert_eq!(PlayerId::new(1), PlayerId::P1);
        assert_eq!(format!("{}", PlayerId::P0), "P1");
        assert_eq!(format!("{}", PlayerId::P1), "P2");
    }

    #[test]
    fn test_opponent_flips() {
        assert_eq!(PlayerId::P0.opponent(), PlayerId::P1);
        assert_eq!(PlayerId::P1.opponent(), PlayerId::P0);
        assert_eq!(PlayerId::P0.opponent().opponent(), PlayerId::P0);
    }

    #[test]
    fn test_both_in_order() {
        assert_eq!(PlayerId::both(), [PlayerId::P0, PlayerId::P1]);
    }

    #[test]
    #[should_panic(expected = "PlayerId must be 0 or 1")]
    fn test_out_of_range_id() {
        let _ = PlayerId::new(2);
    }

    #[test]
    fn test_pair_access() {
        let pair = PlayerPair::new(3, -3);
        assert_eq!(pair[PlayerId::P0], 3);
        assert_eq!(pair[PlayerId::P1], -3);
    }

    #[test]
    fn test_pair_mutation() {
        let mut pair = PlayerPair::with_value(0);
        pair[PlayerId::P1] = 7;

        assert_eq!(pair[PlayerId::P0], 0);
        assert_eq!(pair[PlayerId::P1], 7);
    }

    #[test]
    fn test_pair_iter() {
        let pair = PlayerPair::new('a', 'b');
        let items: Vec<_> = pair.iter().collect();

        assert_eq!(items, vec![(PlayerId::P0, &'a'), (PlayerId::P1, &'b')]);
    }

    #[test]
    fn test_pair_serialization() {
        let pair = PlayerPair::new(1.5, -1.5);
        let json = serde_json::to_string(&pair).unwrap();
        let deserialized: PlayerPair<f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(pair, deserialized);
    }
}
