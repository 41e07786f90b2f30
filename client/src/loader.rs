//! Startup data loading
//!
//! Native builds read the data directory straight from disk (`APRICORN_DATA`
//! overrides the default `data`). The web build has no filesystem, so the
//! same files are fetched with macroquad's file loader.

use apricorn_core::{DataError, GameData};

#[cfg(target_arch = "wasm32")]
use apricorn_core::data::{level_path, LEVEL_COUNT};
#[cfg(target_arch = "wasm32")]
use macroquad::prelude::*;

const DEFAULT_DATA_DIR: &str = "data";

#[cfg(not(target_arch = "wasm32"))]
pub async fn load_game_data() -> Result<GameData, DataError> {
    let dir = std::env::var("APRICORN_DATA").unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string());
    log::info!("Loading game data from {}", dir);
    GameData::load_from_directory(std::path::Path::new(&dir))
}

#[cfg(target_arch = "wasm32")]
pub async fn load_game_data() -> Result<GameData, DataError> {
    let config = fetch(&format!("{}/game.toml", DEFAULT_DATA_DIR)).await.ok();
    let creatures = fetch(&format!("{}/creatures.toml", DEFAULT_DATA_DIR)).await?;
    let recipes = fetch(&format!("{}/recipes.toml", DEFAULT_DATA_DIR)).await.ok();

    let mut levels = Vec::with_capacity(LEVEL_COUNT);
    for index in 1..=LEVEL_COUNT {
        levels.push(fetch(&format!("{}/{}", DEFAULT_DATA_DIR, level_path(index))).await?);
    }

    GameData::from_strings(config.as_deref(), &creatures, recipes.as_deref(), &levels)
}

#[cfg(target_arch = "wasm32")]
async fn fetch(path: &str) -> Result<String, DataError> {
    load_string(path).await.map_err(|e| DataError::Io {
        path: path.into(),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, e.to_string()),
    })
}

/// Report a startup failure. Native builds exit with a failure status; the
/// web build keeps the message on screen.
#[cfg(not(target_arch = "wasm32"))]
pub async fn fatal(_message: &str) {
    std::process::exit(1);
}

#[cfg(target_arch = "wasm32")]
pub async fn fatal(message: &str) {
    loop {
        clear_background(BLACK);
        draw_text("Failed to load game data", 20.0, 40.0, 28.0, RED);
        draw_text(message, 20.0, 76.0, 18.0, WHITE);
        next_frame().await;
    }
}
