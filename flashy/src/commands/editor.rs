//! Edit session commands
//!
//! Opening decks for editing and saving the result.

use super::Notice;
use crate::app::AppState;
use crate::error::Result;
use crate::services::DeckEditor;

/// Start authoring a new deck
pub fn new_deck() -> DeckEditor {
    DeckEditor::new_deck()
}

/// Open an existing deck for editing
pub async fn edit_deck(state: &AppState, filename: &str) -> Result<DeckEditor> {
    DeckEditor::open(&state.decks, filename).await
}

/// Save an edit session.
///
/// On an error notice the session keeps every edit and can be saved again.
pub async fn save_deck(state: &AppState, editor: &mut DeckEditor) -> Notice {
    let is_new = editor.is_new();

    match editor.try_save(&state.decks).await {
        Ok(()) if is_new => Notice::done("Deck created"),
        Ok(()) => Notice::done("Deck edited"),
        Err(e) => {
            tracing::debug!("Save of {} did not complete: {}", editor.filename(), e);
            Notice::from_error(&e)
        }
    }
}
