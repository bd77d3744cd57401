//! Driver layer: strategies and a match runner.
//!
//! The search engine decides single moves; this module strings decisions
//! into whole games. Interactive concerns (prompts, input parsing) stay
//! outside the crate; drivers build on [`play_match`] and the games'
//! `Display` impls.
//!
//! ```
//! use gametree::games::TicTacToe;
//! use gametree::play::{play_self, AlphaBetaStrategy};
//! use gametree::game::GameResult;
//!
//! // Perfect play against itself is a draw.
//! let record = play_self(&TicTacToe, &mut AlphaBetaStrategy);
//! assert_eq!(record.result, GameResult::Draw);
//! ```

pub mod runner;
pub mod strategy;

pub use runner::{play_match, play_self, MatchRecord, MoveRecord};
pub use strategy::{AlphaBetaStrategy, MinimaxStrategy, RandomStrategy, Strategy};
