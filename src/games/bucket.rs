//! The bucket game: one bucket choice, one reward claim.
//!
//! The first player picks one of three buckets, each holding two rewards.
//! The second player then claims one of the two rewards, which settles the
//! game: the claimed amount is credited positively to the player to move at
//! the terminal state (the first player again, after two flips) and
//! negatively to the other.
//!
//! A ten-state tree, small enough to enumerate by hand; useful as the
//! minimal fixture whose optimal line is not obvious at a glance.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::smallvec;

use crate::core::PlayerId;
use crate::game::{ActionVec, Game};

/// The three buckets on offer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bucket {
    A,
    B,
    C,
}

impl Bucket {
    /// The two rewards this bucket holds.
    #[must_use]
    pub fn rewards(self) -> [i32; 2] {
        match self {
            Bucket::A => [-50, 50],
            Bucket::B => [3, 1],
            Bucket::C => [-5, 15],
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bucket::A => write!(f, "A"),
            Bucket::B => write!(f, "B"),
            Bucket::C => write!(f, "C"),
        }
    }
}

/// Phase of the game a state is in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
enum Phase {
    /// All three buckets on offer.
    Offer,
    /// A bucket was picked; its two rewards remain.
    Rewards([i32; 2]),
    /// A reward was claimed; the game is over.
    Settled(i32),
}

/// One position of the bucket game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BucketState {
    to_move: PlayerId,
    phase: Phase,
}

impl fmt::Display for BucketState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.phase {
            Phase::Offer => write!(f, "buckets A, B, C on offer ({} to move)", self.to_move),
            Phase::Rewards([x, y]) => {
                write!(f, "rewards [{x}, {y}] remain ({} to move)", self.to_move)
            }
            Phase::Settled(reward) => write!(f, "settled at {reward}"),
        }
    }
}

/// The two kinds of move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BucketAction {
    /// Pick a bucket.
    Pick(Bucket),
    /// Claim one of the remaining rewards.
    Claim(i32),
}

impl fmt::Display for BucketAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BucketAction::Pick(bucket) => write!(f, "{bucket}"),
            BucketAction::Claim(reward) => write!(f, "{reward}"),
        }
    }
}

/// The bucket game.
#[derive(Clone, Copy, Debug, Default)]
pub struct BucketGame;

impl Game for BucketGame {
    type State = BucketState;
    type Action = BucketAction;

    fn initial_state(&self) -> BucketState {
        BucketState {
            to_move: PlayerId::P0,
            phase: Phase::Offer,
        }
    }

    fn to_move(&self, state: &BucketState) -> PlayerId {
        state.to_move
    }

    fn actions(&self, state: &BucketState) -> ActionVec<BucketAction> {
        match state.phase {
            Phase::Offer => smallvec![
                BucketAction::Pick(Bucket::A),
                BucketAction::Pick(Bucket::B),
                BucketAction::Pick(Bucket::C),
            ],
            Phase::Rewards([x, y]) => {
                smallvec![BucketAction::Claim(x), BucketAction::Claim(y)]
            }
            Phase::Settled(_) => ActionVec::new(),
        }
    }

    /// # Panics
    ///
    /// Fails fast if `action` is not legal for `state`'s phase: picking
    /// outside the offer phase, claiming a reward that is not on the table,
    /// or any move on a settled state.
    fn result(&self, state: &BucketState, action: &BucketAction) -> BucketState {
        let phase = match (state.phase, action) {
            (Phase::Offer, BucketAction::Pick(bucket)) => Phase::Rewards(bucket.rewards()),
            (Phase::Rewards(rewards), BucketAction::Claim(reward)) => {
                assert!(
                    rewards.contains(reward),
                    "claimed reward {reward} is not on the table"
                );
                Phase::Settled(*reward)
            }
            _ => panic!("illegal action for this phase"),
        };
        BucketState {
            to_move: state.to_move.opponent(),
            phase,
        }
    }

    fn is_terminal(&self, state: &BucketState) -> bool {
        matches!(state.phase, Phase::Settled(_))
    }

    fn utility(&self, state: &BucketState, player: PlayerId) -> f64 {
        let Phase::Settled(reward) = state.phase else {
            panic!("utility is defined on terminal states only");
        };
        if state.to_move == player {
            f64::from(reward)
        } else {
            f64::from(-reward)
        }
    }
}
