//! flashy library
//!
//! Deck storage and editing core for the flashy flashcard app. The UI
//! layer drives it through [`commands`] or the services directly.

pub mod app;
pub mod commands;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{AppError, Result, ValidationError};
pub use models::{AspectRatio, Card, Deck, ImageRef};
