//! Example games, each a plug-in behind the [`Game`](crate::game::Game)
//! trait.
//!
//! All three are two-player, zero-sum, perfect-information, and small
//! enough to search to the bottom:
//!
//! - [`BucketGame`]: one bucket choice, one reward claim (two plies)
//! - [`HalvingGame`]: decrement or halve a number, avoid reaching zero
//! - [`TicTacToe`]: the classic, nine plies at most

pub mod bucket;
pub mod halving;
pub mod tictactoe;

pub use bucket::{Bucket, BucketAction, BucketGame, BucketState};
pub use halving::{HalvingAction, HalvingGame, HalvingState};
pub use tictactoe::{Cell, TicTacToe, TicTacToeState};
