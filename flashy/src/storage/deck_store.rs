//! Deck document store
//!
//! One JSON document per deck in a flat directory. The filename is the
//! deck's only stable identity; titles are mutable and non-unique.
//! Every save rewrites the whole document through an atomic replace.

use super::atomic::{is_temp_file, write_atomic};
use crate::config::{DECK_FILE_EXTENSION, MAX_FILENAME_LEN};
use crate::error::{AppError, Result};
use crate::models::Deck;
use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;
use uuid::Uuid;

/// A deck together with the filename it is stored under
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeckEntry {
    pub filename: String,
    pub deck: Deck,
}

/// Directory-backed deck store
#[derive(Clone)]
pub struct DeckStore {
    root: PathBuf,
}

impl DeckStore {
    /// Create a new deck store at the given root directory
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Initialize the deck store (create directory if needed)
    pub async fn initialize(&self) -> Result<()> {
        fs::create_dir_all(&self.root).await?;
        tracing::info!("Deck store initialized at: {:?}", self.root);
        Ok(())
    }

    /// Fresh filename for a newly authored deck
    pub fn new_filename() -> String {
        format!("{}.{}", Uuid::new_v4(), DECK_FILE_EXTENSION)
    }

    /// List every readable deck in the store.
    ///
    /// Entries that are not deck documents (unreadable, malformed JSON,
    /// directories, in-flight temp files) are skipped rather than reported.
    /// An error while reading the directory ends the scan early with the
    /// decks found so far.
    /// Order follows directory enumeration and is not sorted.
    pub async fn list_decks(&self) -> Result<Vec<DeckEntry>> {
        let mut decks = Vec::new();

        let mut entries = match fs::read_dir(&self.root).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(decks),
            Err(e) => return Err(e.into()),
        };

        loop {
            let entry = match entries.next_entry().await {
                Ok(Some(entry)) => entry,
                Ok(None) => break,
                Err(e) => {
                    tracing::warn!(
                        "Stopped listing {:?} after {} decks: {}",
                        self.root,
                        decks.len(),
                        e
                    );
                    break;
                }
            };

            let Ok(filename) = entry.file_name().into_string() else {
                tracing::debug!("Skipping non UTF-8 entry: {:?}", entry.path());
                continue;
            };

            if is_temp_file(&filename) {
                continue;
            }

            match entry.file_type().await {
                Ok(file_type) if file_type.is_file() => {}
                _ => continue,
            }

            match self.read_deck(&entry.path(), &filename).await {
                Ok(deck) => decks.push(DeckEntry { filename, deck }),
                Err(e) => tracing::debug!("Skipping {}: {}", filename, e),
            }
        }

        tracing::debug!("Listed {} decks from {:?}", decks.len(), self.root);

        Ok(decks)
    }

    /// Load a single deck by filename
    pub async fn load_deck(&self, filename: &str) -> Result<Deck> {
        let path = self.deck_path(filename)?;
        self.read_deck(&path, filename).await
    }

    /// Write a deck, creating the document or replacing it in full
    pub async fn save_deck(&self, filename: &str, deck: &Deck) -> Result<()> {
        let path = self.deck_path(filename)?;
        let data = serde_json::to_vec(deck)?;

        self.write_document(&path, &data)
            .await
            .map_err(|source| AppError::SaveFailed {
                filename: filename.to_string(),
                source,
            })?;

        tracing::info!(
            "Saved deck {} ({} cards, {} bytes)",
            filename,
            deck.cards.len(),
            data.len()
        );

        Ok(())
    }

    /// Delete a deck document
    pub async fn delete_deck(&self, filename: &str) -> Result<()> {
        let path = self.deck_path(filename)?;

        match fs::remove_file(&path).await {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(AppError::DeckNotFound(filename.to_string()));
            }
            Err(source) => {
                return Err(AppError::DeleteFailed {
                    filename: filename.to_string(),
                    source,
                });
            }
        }

        tracing::info!("Deleted deck {}", filename);

        Ok(())
    }

    /// Check if a deck document exists
    pub async fn exists(&self, filename: &str) -> Result<bool> {
        let path = self.deck_path(filename)?;
        Ok(fs::try_exists(&path).await?)
    }

    /// Get deck store root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    async fn write_document(&self, path: &Path, data: &[u8]) -> io::Result<()> {
        fs::create_dir_all(&self.root).await?;
        write_atomic(path, data).await
    }

    async fn read_deck(&self, path: &Path, filename: &str) -> Result<Deck> {
        let content = match fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(AppError::DeckNotFound(filename.to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        serde_json::from_str(&content).map_err(|source| AppError::Parse {
            filename: filename.to_string(),
            source,
        })
    }

    /// Resolve a filename inside the store, rejecting anything that could
    /// escape the directory or collide with temp files
    fn deck_path(&self, filename: &str) -> Result<PathBuf> {
        let invalid = filename.is_empty()
            || filename.len() > MAX_FILENAME_LEN
            || filename == "."
            || filename == ".."
            || filename.contains(['/', '\\', '\0'])
            || is_temp_file(filename);

        if invalid {
            return Err(AppError::InvalidFilename(filename.to_string()));
        }

        Ok(self.root.join(filename))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Card;
    use tempfile::TempDir;

    async fn create_test_store() -> (DeckStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = DeckStore::new(temp_dir.path().join("decks"));
        store.initialize().await.unwrap();
        (store, temp_dir)
    }

    fn capitals() -> Deck {
        Deck {
            title: "Capitals".to_string(),
            cards: vec![Card::new("France", "Paris")],
            ..Deck::default()
        }
    }

    #[tokio::test]
    async fn test_save_and_load() {
        let (store, _temp) = create_test_store().await;

        store.save_deck("d1.json", &capitals()).await.unwrap();

        let loaded = store.load_deck("d1.json").await.unwrap();
        assert_eq!(loaded, capitals());
    }

    #[tokio::test]
    async fn test_delete_then_load_not_found() {
        let (store, _temp) = create_test_store().await;

        store.save_deck("d1.json", &capitals()).await.unwrap();
        store.delete_deck("d1.json").await.unwrap();

        let err = store.load_deck("d1.json").await.unwrap_err();
        assert!(matches!(err, AppError::DeckNotFound(ref name) if name == "d1.json"));
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let (store, _temp) = create_test_store().await;

        let err = store.delete_deck("missing.json").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_load_malformed_is_parse_error() {
        let (store, _temp) = create_test_store().await;
        fs::write(store.root().join("bad.json"), "{ not json")
            .await
            .unwrap();

        let err = store.load_deck("bad.json").await.unwrap_err();
        assert!(matches!(err, AppError::Parse { ref filename, .. } if filename == "bad.json"));
    }

    #[tokio::test]
    async fn test_save_replaces_whole_document() {
        let (store, _temp) = create_test_store().await;

        let mut deck = capitals();
        deck.description = "a fairly long description that will be removed".to_string();
        deck.cards.push(Card::new("Spain", "Madrid"));
        store.save_deck("d1.json", &deck).await.unwrap();

        store.save_deck("d1.json", &capitals()).await.unwrap();

        assert_eq!(store.load_deck("d1.json").await.unwrap(), capitals());
    }

    #[tokio::test]
    async fn test_list_skips_malformed_documents() {
        let (store, _temp) = create_test_store().await;

        store.save_deck("good.json", &capitals()).await.unwrap();
        fs::write(store.root().join("bad.json"), "{\"title\": ")
            .await
            .unwrap();
        fs::write(store.root().join("notes.txt"), "plain text")
            .await
            .unwrap();

        let decks = store.list_decks().await.unwrap();

        assert_eq!(decks.len(), 1);
        assert_eq!(decks[0].filename, "good.json");
        assert_eq!(decks[0].deck, capitals());
    }

    #[tokio::test]
    async fn test_list_skips_directories_and_temp_files() {
        let (store, _temp) = create_test_store().await;

        fs::create_dir(store.root().join("nested.json")).await.unwrap();
        let json = serde_json::to_string(&capitals()).unwrap();
        fs::write(store.root().join(".d1.json.abc.tmp"), json)
            .await
            .unwrap();

        assert!(store.list_decks().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_missing_root_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = DeckStore::new(temp_dir.path().join("never-created"));

        assert!(store.list_decks().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_exists() {
        let (store, _temp) = create_test_store().await;

        assert!(!store.exists("d1.json").await.unwrap());
        store.save_deck("d1.json", &capitals()).await.unwrap();
        assert!(store.exists("d1.json").await.unwrap());
    }

    #[tokio::test]
    async fn test_rejects_unsafe_filenames() {
        let (store, _temp) = create_test_store().await;

        for name in ["", ".", "..", "../escape.json", "a\\b.json", "x.json.tmp"] {
            let err = store.save_deck(name, &capitals()).await.unwrap_err();
            assert!(
                matches!(err, AppError::InvalidFilename(_)),
                "expected {:?} to be rejected",
                name
            );
        }

        assert!(store.list_decks().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_longest_filename_saves_and_loads() {
        let (store, _temp) = create_test_store().await;
        let longest = format!("{}.json", "a".repeat(MAX_FILENAME_LEN - 5));
        assert_eq!(longest.len(), MAX_FILENAME_LEN);

        store.save_deck(&longest, &capitals()).await.unwrap();

        assert_eq!(store.load_deck(&longest).await.unwrap(), capitals());
        let decks = store.list_decks().await.unwrap();
        assert_eq!(decks.len(), 1);
        assert_eq!(decks[0].filename, longest);

        let too_long = format!("b{}", longest);
        let err = store.save_deck(&too_long, &capitals()).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidFilename(_)));
    }

    #[test]
    fn test_new_filename_is_unique_json() {
        let a = DeckStore::new_filename();
        let b = DeckStore::new_filename();

        assert_ne!(a, b);
        assert!(a.ends_with(".json"));
    }
}
