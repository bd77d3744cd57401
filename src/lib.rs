//! # gametree
//!
//! Adversarial game-tree search for two-player zero-sum games.
//!
//! ## Design Principles
//!
//! 1. **Game-Agnostic**: The search engine knows nothing about any
//!    particular game; games plug in behind the [`game::Game`] trait.
//!
//! 2. **Immutable States**: Every transition produces a new state value.
//!    Nothing is mutated in place, so search needs no undo logic and
//!    drivers can hold onto any state they have seen.
//!
//! 3. **Deterministic**: Searching the same state twice returns the same
//!    action. Ties between equally good moves always go to the first one
//!    in action order. Randomness exists only in the driver layer, seeded.
//!
//! ## Architecture
//!
//! - **Full-Depth Search**: The target games are small and loop-free, so
//!   both algorithms run to terminal states; there is no evaluation
//!   heuristic, no transposition table, and no depth cutoff.
//!
//! - **Alpha-Beta = Minimax**: Pruning only skips subtrees that provably
//!   cannot change the decision; action and value agree with plain minimax
//!   on every input, which the tests check exhaustively.
//!
//! ## Modules
//!
//! - `core`: player identities, per-player storage, deterministic RNG
//! - `game`: the `Game` trait, action lists, state-space enumeration
//! - `search`: minimax and alpha-beta search
//! - `games`: bucket game, halving game, tic-tac-toe
//! - `play`: strategies and the match runner

pub mod core;
pub mod game;
pub mod games;
pub mod play;
pub mod search;

// Re-export commonly used types
pub use crate::core::{GameRng, PlayerId, PlayerPair};

pub use crate::game::{reachable_states, ActionVec, Game, GameResult};

pub use crate::search::{
    alpha_beta_decision, alpha_beta_search, minimax_decision, minimax_search, Decision,
    SearchStats,
};

pub use crate::games::{
    Bucket, BucketAction, BucketGame, BucketState, Cell, HalvingAction, HalvingGame,
    HalvingState, TicTacToe, TicTacToeState,
};

pub use crate::play::{
    play_match, play_self, AlphaBetaStrategy, MatchRecord, MinimaxStrategy, MoveRecord,
    RandomStrategy, Strategy,
};
