//! Study commands
//!
//! Starting review and sequential sessions, and card flips.

use crate::app::AppState;
use crate::error::Result;
use crate::services::{CardSide, StudySession};
use serde::Serialize;

/// Result of flipping a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FlipOutcome {
    pub side: CardSide,
    /// True on the very first flip, when the flip tutorial should fade out
    pub dismiss_tutorial: bool,
}

/// Start a wrapping review of a deck
pub async fn start_review(state: &AppState, filename: &str) -> Result<StudySession> {
    let deck = state.decks.load_deck(filename).await?;
    StudySession::review(&deck)
}

/// Start a first-to-last run through a deck
pub async fn start_sequential(state: &AppState, filename: &str) -> Result<StudySession> {
    let deck = state.decks.load_deck(filename).await?;
    StudySession::sequential(&deck)
}

/// Whether the "tap the card to flip it" hint should be shown
pub async fn show_flip_tutorial(state: &AppState) -> Result<bool> {
    Ok(!state.settings.has_flipped_card().await?)
}

/// Flip the current card and remember that the user knows how.
///
/// The flip always happens; failing to record the tutorial flag only
/// means the hint stays visible.
pub async fn flip_card(state: &AppState, session: &mut StudySession) -> FlipOutcome {
    let side = session.flip();
    let dismiss_tutorial = match state.settings.mark_card_flipped().await {
        Ok(first) => first,
        Err(e) => {
            tracing::warn!("Failed to record card flip: {}", e);
            false
        }
    };

    FlipOutcome {
        side,
        dismiss_tutorial,
    }
}
