//! Settings service
//!
//! Manages persistent app flags using JSON file storage.

use crate::config::SETTINGS_FILE_NAME;
use crate::error::Result;
use crate::storage::write_atomic;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Application flags
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Set once the first-launch bootstrap has run
    #[serde(default)]
    pub has_launched: bool,
    /// Set once the user has flipped a card; hides the flip tutorial
    #[serde(default)]
    pub has_flipped_card: bool,
    #[serde(default)]
    pub first_launched_at: Option<DateTime<Utc>>,
}

/// Service for managing application settings
#[derive(Clone)]
pub struct SettingsService {
    settings_path: PathBuf,
}

impl SettingsService {
    pub fn new(app_data_dir: PathBuf) -> Self {
        Self {
            settings_path: app_data_dir.join(SETTINGS_FILE_NAME),
        }
    }

    /// Load settings from disk, falling back to defaults if the file is
    /// absent or unreadable as JSON
    pub async fn load(&self) -> Result<AppSettings> {
        let content = match fs::read_to_string(&self.settings_path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("Settings file not found, using default settings");
                return Ok(AppSettings::default());
            }
            Err(e) => return Err(e.into()),
        };

        // A damaged flags file must not block startup; the next save rewrites it
        match serde_json::from_str(&content) {
            Ok(settings) => Ok(settings),
            Err(e) => {
                tracing::warn!(
                    "Failed to parse settings at {:?}, using defaults: {}",
                    self.settings_path,
                    e
                );
                Ok(AppSettings::default())
            }
        }
    }

    /// Save settings to disk
    pub async fn save(&self, settings: &AppSettings) -> Result<()> {
        let content = serde_json::to_string_pretty(settings)?;

        if let Some(parent) = self.settings_path.parent() {
            fs::create_dir_all(parent).await?;
        }
        write_atomic(&self.settings_path, content.as_bytes()).await?;

        tracing::debug!("Settings saved to {:?}", self.settings_path);

        Ok(())
    }

    /// Record a launch. Returns true if this was the first one.
    pub async fn mark_launched(&self) -> Result<bool> {
        let mut settings = self.load().await?;
        if settings.has_launched {
            return Ok(false);
        }

        settings.has_launched = true;
        settings.first_launched_at = Some(Utc::now());
        self.save(&settings).await?;

        tracing::info!("First launch recorded");

        Ok(true)
    }

    pub async fn has_launched(&self) -> Result<bool> {
        Ok(self.load().await?.has_launched)
    }

    pub async fn has_flipped_card(&self) -> Result<bool> {
        Ok(self.load().await?.has_flipped_card)
    }

    /// Record a card flip. Returns true if this was the first one, which
    /// is when the flip tutorial should be dismissed.
    pub async fn mark_card_flipped(&self) -> Result<bool> {
        let mut settings = self.load().await?;
        if settings.has_flipped_card {
            return Ok(false);
        }

        settings.has_flipped_card = true;
        self.save(&settings).await?;

        Ok(true)
    }

    pub fn settings_path(&self) -> &Path {
        &self.settings_path
    }
}
