//! Application state and initialization
//!
//! This module manages the central application state and lifecycle.
//! All services are initialized here and made available through AppState.

use crate::config::DECKS_DIR_NAME;
use crate::error::Result;
use crate::services::onboarding;
use crate::services::SettingsService;
use crate::storage::DeckStore;
use std::path::PathBuf;

/// Central application state holding all services
#[derive(Clone)]
pub struct AppState {
    pub app_data_dir: PathBuf,
    pub decks: DeckStore,
    pub settings: SettingsService,
}

impl AppState {
    pub fn new(app_data_dir: PathBuf) -> Self {
        let decks = DeckStore::new(app_data_dir.join(DECKS_DIR_NAME));
        let settings = SettingsService::new(app_data_dir.clone());

        Self {
            app_data_dir,
            decks,
            settings,
        }
    }
}

/// Application setup - called once on startup
pub async fn setup(app_data_dir: PathBuf) -> Result<AppState> {
    tracing::info!("Initializing application");
    tracing::info!("App data directory: {:?}", app_data_dir);

    tokio::fs::create_dir_all(&app_data_dir).await?;

    let state = AppState::new(app_data_dir);
    state.decks.initialize().await?;

    if onboarding::run_first_launch(&state.decks, &state.settings).await? {
        tracing::info!("First launch: example deck created");
    }

    tracing::info!("Application initialized successfully");

    Ok(state)
}
