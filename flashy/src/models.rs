//! Deck document models
//!
//! Rust structs representing the persisted deck document.
//! All models use serde; the JSON shape is the on-disk format:
//!
//! ```json
//! { "title": "...", "description": "...", "image": "...", "aspect": "W/H",
//!   "cards": [ { "front": "...", "back": "..." } ] }
//! ```

use crate::error::{AppError, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A front/back text pair. Cards have no identity beyond their position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub front: String,
    pub back: String,
}

impl Card {
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
        }
    }

    /// Both sides carry text
    pub fn is_complete(&self) -> bool {
        !self.front.is_empty() && !self.back.is_empty()
    }
}

/// A persisted collection of study cards
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// `""` for no image, a `data:` URI, or a built-in asset name
    #[serde(default)]
    pub image: String,
    /// `"W/H"`; only meaningful when `image` is non-empty
    #[serde(default)]
    pub aspect: String,
    pub cards: Vec<Card>,
}

impl Deck {
    /// Check the deck can be saved.
    ///
    /// Rules run in a fixed order and only the first failure is reported.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }

        if self.cards.is_empty() {
            return Err(ValidationError::NoCards);
        }

        if let Some(index) = self.cards.iter().position(|card| !card.is_complete()) {
            return Err(ValidationError::InvalidCardText { index });
        }

        Ok(())
    }

    pub fn has_image(&self) -> bool {
        !self.image.is_empty()
    }

    /// Parsed aspect ratio, if the deck has an image and a well-formed ratio
    pub fn aspect_ratio(&self) -> Option<AspectRatio> {
        if !self.has_image() {
            return None;
        }
        self.aspect.parse().ok()
    }

    pub fn image_ref(&self) -> ImageRef<'_> {
        ImageRef::parse(&self.image)
    }
}

/// What the `image` field of a deck points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageRef<'a> {
    None,
    /// Base64 payload embedded in a `data:<mime>;base64,` URI
    Embedded { mime: &'a str, data: &'a str },
    /// Name of an image bundled with the app
    Asset(&'a str),
}

impl<'a> ImageRef<'a> {
    pub fn parse(image: &'a str) -> Self {
        if image.is_empty() {
            return ImageRef::None;
        }

        if let Some(rest) = image.strip_prefix("data:") {
            if let Some((mime, data)) = rest.split_once(";base64,") {
                return ImageRef::Embedded { mime, data };
            }
        }

        ImageRef::Asset(image)
    }
}

/// Width/height ratio stored as `"W/H"`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AspectRatio {
    pub width: u32,
    pub height: u32,
}

impl AspectRatio {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn as_f64(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.width, self.height)
    }
}

impl FromStr for AspectRatio {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AppError::InvalidAspect(s.to_string());

        let (width, height) = s.split_once('/').ok_or_else(invalid)?;
        let width: u32 = width.trim().parse().map_err(|_| invalid())?;
        let height: u32 = height.trim().parse().map_err(|_| invalid())?;

        if width == 0 || height == 0 {
            return Err(invalid());
        }

        Ok(Self { width, height })
    }
}

/// Truncate to at most `max` characters (not bytes)
pub(crate) fn clamp_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
