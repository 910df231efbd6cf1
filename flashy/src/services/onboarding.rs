//! First-launch onboarding
//!
//! Seeds the example deck the first time the app starts.

use super::settings::SettingsService;
use crate::config::{EXAMPLE_DECK_ASPECT, EXAMPLE_DECK_FILENAME, EXAMPLE_DECK_IMAGE};
use crate::error::Result;
use crate::models::{Card, Deck};
use crate::storage::DeckStore;

const EXAMPLE_CARDS: &[(&str, &str)] = &[
    (
        "time",
        "the system of those sequential relations that any event has to any other, as past, present, or future; indefinite and continuous duration regarded as that in which events succeed one another",
    ),
    ("person", "a human being, whether an adult or child"),
    (
        "year",
        "a period of 365 or 366 days, in the Gregorian calendar, divided into 12 calendar months, now reckoned as beginning Jan. 1 and ending Dec. 31 calendar year, or civil year",
    ),
    ("way", "manner, mode, or fashion"),
    (
        "day",
        "the interval of light between two successive nights; the time between sunrise and sunset",
    ),
    (
        "thing",
        "a material object without life or consciousness; an inanimate object",
    ),
    ("man", "an adult male person"),
    ("world", "the earth or globe, considered as a planet"),
    (
        "life",
        "the condition that distinguishes organisms from inorganic objects and dead organisms, being manifested by growth through metabolism, reproduction, and the power of adaptation to environment through changes originating internally",
    ),
    (
        "hand",
        "the terminal, prehensile part of the upper limb in humans and other primates, consisting of the wrist, metacarpal area, fingers, and thumb",
    ),
];

/// The deck written on first launch
pub fn example_deck() -> Deck {
    Deck {
        title: "Example deck".to_string(),
        description: "An example deck to test out the app, featuring definitions for the 10 most commonly used nouns in the English language! Definitions taken from dictionary.com".to_string(),
        image: EXAMPLE_DECK_IMAGE.to_string(),
        aspect: EXAMPLE_DECK_ASPECT.to_string(),
        cards: EXAMPLE_CARDS
            .iter()
            .map(|(front, back)| Card::new(*front, *back))
            .collect(),
    }
}

/// Write the example deck, replacing any earlier copy
pub async fn seed_example_deck(store: &DeckStore) -> Result<()> {
    store
        .save_deck(EXAMPLE_DECK_FILENAME, &example_deck())
        .await?;
    tracing::info!("Seeded example deck: {}", EXAMPLE_DECK_FILENAME);
    Ok(())
}

/// Seed the example deck if this is the first launch.
///
/// The deck is written before the launch is recorded, so an interrupted
/// first launch seeds again next time. Returns whether seeding happened.
pub async fn run_first_launch(store: &DeckStore, settings: &SettingsService) -> Result<bool> {
    if settings.has_launched().await? {
        return Ok(false);
    }

    seed_example_deck(store).await?;
    settings.mark_launched().await?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_example_deck_is_valid() {
        let deck = example_deck();

        assert_eq!(deck.validate(), Ok(()));
        assert_eq!(deck.cards.len(), 10);
        assert_eq!(deck.cards[0].front, "time");
        assert_eq!(deck.cards[9].front, "hand");
        assert!(deck.aspect_ratio().is_some());
    }

    #[tokio::test]
    async fn test_first_launch_seeds_once() {
        let temp_dir = TempDir::new().unwrap();
        let store = DeckStore::new(temp_dir.path().join("decks"));
        let settings = SettingsService::new(temp_dir.path().to_path_buf());

        assert!(run_first_launch(&store, &settings).await.unwrap());
        assert_eq!(
            store.load_deck(EXAMPLE_DECK_FILENAME).await.unwrap(),
            example_deck()
        );

        // A deleted example deck stays deleted
        store.delete_deck(EXAMPLE_DECK_FILENAME).await.unwrap();
        assert!(!run_first_launch(&store, &settings).await.unwrap());
        assert!(store.list_decks().await.unwrap().is_empty());
    }
}
