//! Core building blocks shared by the search engine, the games, and drivers.
//!
//! Everything here is game-agnostic: player identities, per-player storage,
//! and the deterministic RNG used by driver-side strategies.

pub mod player;
pub mod rng;

pub use player::{PlayerId, PlayerPair};
pub use rng::GameRng;
