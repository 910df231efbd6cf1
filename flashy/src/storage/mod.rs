//! Storage module
//!
//! Provides the deck document store and the atomic write it relies on.

pub mod atomic;
pub mod deck_store;

pub use atomic::write_atomic;
pub use deck_store::{DeckEntry, DeckStore};
