//! Deck-related commands
//!
//! Listing, loading and deletion of decks.

use super::Notice;
use crate::app::AppState;
use crate::error::Result;
use crate::models::Deck;
use crate::storage::DeckEntry;

/// List all readable decks
pub async fn list_decks(state: &AppState) -> Result<Vec<DeckEntry>> {
    state.decks.list_decks().await
}

/// Get a deck by filename
pub async fn get_deck(state: &AppState, filename: &str) -> Result<Deck> {
    state.decks.load_deck(filename).await
}

/// Delete a deck
pub async fn delete_deck(state: &AppState, filename: &str) -> Notice {
    match state.decks.delete_deck(filename).await {
        Ok(()) => Notice::done("Deck deleted"),
        Err(e) => {
            tracing::error!("Failed to delete deck {}: {}", filename, e);
            Notice::from_error(&e)
        }
    }
}
