//! Core value types: player marks and deterministic RNG.

pub mod player;
pub mod rng;

pub use player::Player;
pub use rng::SearchRng;
