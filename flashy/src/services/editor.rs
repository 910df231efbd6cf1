//! Deck editor
//!
//! Holds the working copy of one deck for a single edit session.
//! Mutations apply immediately and are never validated; validation runs
//! only when saving. A rejected save leaves the working copy untouched so
//! no edits are lost. A successful save ends the session.

use super::images::PickedImage;
use crate::config::{CARD_TEXT_MAX_LEN, DESCRIPTION_MAX_LEN, TITLE_MAX_LEN};
use crate::error::{AppError, Result, ValidationError};
use crate::models::{clamp_chars, Card, Deck};
use crate::storage::{DeckEntry, DeckStore};

/// Where an edit session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorPhase {
    Editing,
    /// Terminal; the working copy has been persisted and reset
    Saved,
}

/// Working copy of a deck under edit
#[derive(Debug, Clone)]
pub struct DeckEditor {
    filename: String,
    working: Deck,
    is_new: bool,
    phase: EditorPhase,
}

impl DeckEditor {
    /// Start authoring a new deck from an empty template
    pub fn new_deck() -> Self {
        let filename = DeckStore::new_filename();
        tracing::debug!("Starting new deck: {}", filename);

        Self {
            filename,
            working: Deck::default(),
            is_new: true,
            phase: EditorPhase::Editing,
        }
    }

    /// Start editing a deck that was already loaded
    pub fn from_entry(entry: DeckEntry) -> Self {
        Self {
            filename: entry.filename,
            working: entry.deck,
            is_new: false,
            phase: EditorPhase::Editing,
        }
    }

    /// Load a deck from the store and start editing it
    pub async fn open(store: &DeckStore, filename: &str) -> Result<Self> {
        let deck = store.load_deck(filename).await?;
        tracing::debug!("Editing deck: {}", filename);

        Ok(Self::from_entry(DeckEntry {
            filename: filename.to_string(),
            deck,
        }))
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// True when the session was started from an empty template
    pub fn is_new(&self) -> bool {
        self.is_new
    }

    pub fn phase(&self) -> EditorPhase {
        self.phase
    }

    pub fn working_copy(&self) -> &Deck {
        &self.working
    }

    pub fn title(&self) -> &str {
        &self.working.title
    }

    pub fn description(&self) -> &str {
        &self.working.description
    }

    pub fn image(&self) -> &str {
        &self.working.image
    }

    pub fn aspect(&self) -> &str {
        &self.working.aspect
    }

    pub fn cards(&self) -> &[Card] {
        &self.working.cards
    }

    /// The title is a single line; newlines are dropped as they are typed
    pub fn set_title(&mut self, title: &str) {
        let single_line: String = title.chars().filter(|c| *c != '\n' && *c != '\r').collect();
        self.working.title = clamp_chars(&single_line, TITLE_MAX_LEN);
    }

    pub fn set_description(&mut self, description: &str) {
        self.working.description = clamp_chars(description, DESCRIPTION_MAX_LEN);
    }

    /// Replace the image. Clearing it also clears the aspect ratio.
    pub fn set_image(&mut self, image: impl Into<String>) {
        self.working.image = image.into();
        if self.working.image.is_empty() {
            self.working.aspect.clear();
        }
    }

    pub fn set_aspect(&mut self, aspect: impl Into<String>) {
        self.working.aspect = aspect.into();
    }

    pub fn clear_image(&mut self) {
        self.set_image(String::new());
    }

    /// Apply the result of an image pick. `None` means the pick was
    /// cancelled and leaves the deck unchanged. Returns whether the image changed.
    pub fn apply_picked_image(&mut self, picked: Option<PickedImage>) -> bool {
        let Some(picked) = picked else {
            return false;
        };

        self.set_image(picked.to_data_uri());
        self.set_aspect(picked.aspect().to_string());
        true
    }

    /// Append an empty card, returning its index
    pub fn add_card(&mut self) -> usize {
        self.working.cards.push(Card::default());
        self.working.cards.len() - 1
    }

    /// Remove the card at `index`; later cards shift down by one
    pub fn remove_card(&mut self, index: usize) -> Result<Card> {
        self.check_index(index)?;
        Ok(self.working.cards.remove(index))
    }

    pub fn set_card_front(&mut self, index: usize, text: &str) -> Result<()> {
        self.card_mut(index)?.front = clamp_chars(text, CARD_TEXT_MAX_LEN);
        Ok(())
    }

    pub fn set_card_back(&mut self, index: usize, text: &str) -> Result<()> {
        self.card_mut(index)?.back = clamp_chars(text, CARD_TEXT_MAX_LEN);
        Ok(())
    }

    /// Validate the working copy without saving
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        self.working.validate()
    }

    /// Validate and persist the working copy.
    ///
    /// On success the working copy is reset and the session moves to
    /// [`EditorPhase::Saved`]. On any failure the working copy is kept as is.
    pub async fn try_save(&mut self, store: &DeckStore) -> Result<()> {
        if self.phase == EditorPhase::Saved {
            return Err(AppError::SessionClosed);
        }

        if let Err(e) = self.working.validate() {
            tracing::debug!("Rejected save of {}: {}", self.filename, e);
            return Err(e.into());
        }

        if let Err(e) = store.save_deck(&self.filename, &self.working).await {
            tracing::warn!("Keeping unsaved edits for {}: {}", self.filename, e);
            return Err(e);
        }

        self.working = Deck::default();
        self.phase = EditorPhase::Saved;

        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<()> {
        let len = self.working.cards.len();
        if index >= len {
            return Err(AppError::CardIndexOutOfRange { index, len });
        }
        Ok(())
    }

    fn card_mut(&mut self, index: usize) -> Result<&mut Card> {
        self.check_index(index)?;
        Ok(&mut self.working.cards[index])
    }
}
