//! Repository functions: domain-facing wrappers over the SeaORM adapters.

pub mod games;
pub mod guesses;
pub mod store;
pub mod words;

pub use store::{GameStore, SeaGameStore};
