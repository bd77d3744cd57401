//! Adversarial game-tree search.
//!
//! ## Overview
//!
//! Two search algorithms over any [`Game`](crate::game::Game), both pure
//! functions of (game, state):
//!
//! - [`minimax_search`]: full-depth minimax
//! - [`alpha_beta_search`]: alpha-beta pruned minimax; same chosen action
//!   and value as minimax on every input, less work
//!
//! The player to move in the searched state is the maximizer. Both
//! algorithms break ties the same way: among equally good actions, the
//! first in `actions` order wins.
//!
//! ## Usage
//!
//! ```
//! use gametree::games::HalvingGame;
//! use gametree::game::Game;
//! use gametree::search::alpha_beta_search;
//!
//! let game = HalvingGame::new(5);
//! let mut state = game.initial_state();
//!
//! while let Some(action) = alpha_beta_search(&game, &state) {
//!     state = game.result(&state, &action);
//! }
//!
//! assert!(game.is_terminal(&state));
//! ```

pub mod alpha_beta;
pub mod decision;
pub mod minimax;
pub mod stats;

pub use alpha_beta::{alpha_beta_decision, alpha_beta_search};
pub use decision::Decision;
pub use minimax::{minimax_decision, minimax_search};
pub use stats::SearchStats;
