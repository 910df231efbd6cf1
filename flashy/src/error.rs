//! Error types for flashy
//!
//! All errors use thiserror for structured error handling.
//! These errors can be serialized to the UI layer.

use thiserror::Error;

/// Reasons a deck under edit is rejected before any write happens.
///
/// The display strings are the messages shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid title")]
    EmptyTitle,

    #[error("At least one card required")]
    NoCards,

    /// First card (0-based) with an empty front or back
    #[error("Invalid card text")]
    InvalidCardText { index: usize },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Deck not found: {0}")]
    DeckNotFound(String),

    #[error("Deck {filename} is not a valid deck document: {source}")]
    Parse {
        filename: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid deck filename: {0:?}")]
    InvalidFilename(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Failed to save deck {filename}: {source}")]
    SaveFailed {
        filename: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to delete deck {filename}: {source}")]
    DeleteFailed {
        filename: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Card index {index} out of range for deck with {len} cards")]
    CardIndexOutOfRange { index: usize, len: usize },

    #[error("Editing session already saved")]
    SessionClosed,

    #[error("Deck has no cards: {0}")]
    EmptyDeck(String),

    #[error("Invalid aspect ratio: {0:?}")]
    InvalidAspect(String),

    #[error("{0}")]
    Generic(String),
}

impl AppError {
    /// True for failures that mean the referenced document is absent
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::DeckNotFound(_))
    }
}

impl serde::Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
