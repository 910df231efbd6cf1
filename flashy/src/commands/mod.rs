//! Commands exposed to the UI layer
//!
//! This module organizes commands into logical submodules:
//! - `decks`: Deck listing, loading and deletion
//! - `editor`: Edit sessions and saving
//! - `study`: Review and sequential study sessions
//!
//! Commands never render anything. Outcomes the user should hear about
//! come back as a [`Notice`] for the UI to present.

pub mod decks;
pub mod editor;
pub mod study;

use crate::app::AppState;
use crate::error::AppError;
use serde::Serialize;

pub use decks::*;
pub use editor::*;
pub use study::*;

/// Message shown for any failure that is not a validation error
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticePreset {
    Done,
    Error,
}

/// A short user-facing outcome, typically shown as a toast
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub preset: NoticePreset,
    pub message: String,
}

impl Notice {
    pub fn done(message: impl Into<String>) -> Self {
        Self {
            preset: NoticePreset::Done,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            preset: NoticePreset::Error,
            message: message.into(),
        }
    }

    /// Validation errors carry their own message; anything else is generic
    pub fn from_error(err: &AppError) -> Self {
        match err {
            AppError::Validation(e) => Self::error(e.to_string()),
            _ => Self::error(GENERIC_FAILURE_MESSAGE),
        }
    }

    pub fn is_error(&self) -> bool {
        self.preset == NoticePreset::Error
    }
}

// ===== General Commands =====

/// Get application information
pub fn get_app_info(state: &AppState) -> AppInfo {
    AppInfo {
        version: env!("CARGO_PKG_VERSION").to_string(),
        app_data_dir: state.app_data_dir.to_string_lossy().to_string(),
        decks_dir: state.decks.root().to_string_lossy().to_string(),
    }
}

/// Application information structure
#[derive(Debug, Serialize)]
pub struct AppInfo {
    pub version: String,
    pub app_data_dir: String,
    pub decks_dir: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn test_notice_from_validation_error() {
        let notice = Notice::from_error(&ValidationError::NoCards.into());
        assert_eq!(notice, Notice::error("At least one card required"));
    }

    #[test]
    fn test_notice_from_storage_error_is_generic() {
        let notice = Notice::from_error(&AppError::DeckNotFound("x.json".to_string()));
        assert!(notice.is_error());
        assert_eq!(notice.message, GENERIC_FAILURE_MESSAGE);
    }

    #[test]
    fn test_notice_serialization() {
        let json = serde_json::to_value(Notice::done("Deck deleted")).unwrap();
        assert_eq!(json["preset"], "done");
        assert_eq!(json["message"], "Deck deleted");
    }
}
