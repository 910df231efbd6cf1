// flashy - local flashcard decks
// Entry point: prepares the data directory and reports the decks found

use flashy::{app, commands, config};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config::DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting flashy");

    let data_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("flashy-data"));

    let state = app::setup(data_dir).await?;

    let info = commands::get_app_info(&state);
    tracing::info!("flashy {} using {}", info.version, info.decks_dir);

    let decks = commands::list_decks(&state).await?;
    tracing::info!("Loaded {} decks", decks.len());
    for entry in &decks {
        tracing::info!(
            "  - {} [{}] ({} cards)",
            entry.deck.title,
            entry.filename,
            entry.deck.cards.len()
        );
    }

    Ok(())
}
