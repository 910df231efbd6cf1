//! Services module
//!
//! Business logic that sits between the UI-facing commands and storage.

pub mod editor;
pub mod images;
pub mod onboarding;
pub mod settings;
pub mod study;

pub use editor::{DeckEditor, EditorPhase};
pub use images::PickedImage;
pub use settings::{AppSettings, SettingsService};
pub use study::{CardFace, CardSide, StudyOrder, StudySession};
