//! Application configuration constants
//!
//! Central location for storage layout, field limits and defaults
//! used throughout the application.

// ===== Storage Layout =====

/// Sub-directory of the app data directory holding one document per deck
pub const DECKS_DIR_NAME: &str = "decks";

/// App flags file, kept outside the decks directory
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Extension given to newly created deck documents
pub const DECK_FILE_EXTENSION: &str = "json";

/// Extension of in-flight temp files written during an atomic replace.
/// Listing never treats these as decks.
pub const TEMP_FILE_EXTENSION: &str = "tmp";

/// Maximum deck filename length in bytes (common filesystem limit)
pub const MAX_FILENAME_LEN: usize = 255;

// ===== Field Limits =====

/// Maximum deck title length in characters
pub const TITLE_MAX_LEN: usize = 40;

/// Maximum deck description length in characters
pub const DESCRIPTION_MAX_LEN: usize = 200;

/// Maximum length of either side of a card in characters
pub const CARD_TEXT_MAX_LEN: usize = 200;

// ===== Images =====

/// Mime type assumed for picked images that are not PNG
pub const DEFAULT_IMAGE_MIME: &str = "image/jpeg";

// ===== First Launch =====

/// Filename of the example deck seeded on first launch
pub const EXAMPLE_DECK_FILENAME: &str = "example.json";

/// Built-in asset shown as the example deck's image
pub const EXAMPLE_DECK_IMAGE: &str = "adaptive-icon";

/// Aspect ratio of the built-in example image
pub const EXAMPLE_DECK_ASPECT: &str = "1024/1024";

// ===== Logging =====

/// Filter used when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "flashy=debug,info";
