//! Game data loading
//!
//! Everything the game reads at startup: tuning, the creature catalog,
//! recipes and the nine level maps. Native builds read the `data/`
//! directory; the web build fetches the same files and hands their text to
//! `GameData::from_strings`.

use std::path::Path;

use tracing::info;

use crate::catalog::Catalog;
use crate::config::GameConfig;
use crate::crafting::CraftingRegistry;
use crate::error::DataError;
use crate::tilemap::Tilemap;
use crate::world::{WORLD_COLUMNS, WORLD_ROWS};

pub const LEVEL_COUNT: usize = WORLD_COLUMNS * WORLD_ROWS;

/// Relative path of a level file inside the data directory (1-based index)
pub fn level_path(index: usize) -> String {
    format!("levels/level{}.txt", index)
}

#[derive(Debug, Clone)]
pub struct GameData {
    pub config: GameConfig,
    pub catalog: Catalog,
    pub recipes: CraftingRegistry,
    /// Level maps in row-major area order
    pub levels: Vec<Tilemap>,
}

impl GameData {
    /// Load from a data directory. `game.toml` and `recipes.toml` are
    /// optional; the catalog and all nine levels are required.
    pub fn load_from_directory(data_dir: &Path) -> Result<Self, DataError> {
        let config = match read_optional(&data_dir.join("game.toml"))? {
            Some(content) => GameConfig::from_toml_str("game.toml", &content)?,
            None => {
                info!("No game.toml in {:?}, using default tuning", data_dir);
                GameConfig::default()
            }
        };

        let catalog = Catalog::load_from_directory(data_dir)?;

        let recipes = match read_optional(&data_dir.join("recipes.toml"))? {
            Some(content) => CraftingRegistry::from_toml_str("recipes.toml", &content)?,
            None => CraftingRegistry::with_defaults(),
        };

        let mut levels = Vec::with_capacity(LEVEL_COUNT);
        for index in 1..=LEVEL_COUNT {
            let relative = level_path(index);
            let path = data_dir.join(&relative);
            let text = std::fs::read_to_string(&path).map_err(|source| DataError::Io {
                path: path.clone(),
                source,
            })?;
            levels.push(Tilemap::parse(&relative, &text)?);
        }

        info!(
            "Loaded game data from {:?}: {} species, {} recipes, {} levels",
            data_dir,
            catalog.len(),
            recipes.len(),
            levels.len()
        );

        Ok(Self {
            config,
            catalog,
            recipes,
            levels,
        })
    }

    /// Build from file contents already in memory
    pub fn from_strings(
        config: Option<&str>,
        creatures: &str,
        recipes: Option<&str>,
        levels: &[String],
    ) -> Result<Self, DataError> {
        if levels.len() != LEVEL_COUNT {
            return Err(DataError::Level {
                origin: "levels".to_string(),
                reason: format!("expected {} levels, found {}", LEVEL_COUNT, levels.len()),
            });
        }

        let config = match config {
            Some(content) => GameConfig::from_toml_str("game.toml", content)?,
            None => GameConfig::default(),
        };
        let catalog = Catalog::from_toml_str("creatures.toml", creatures)?;
        let recipes = match recipes {
            Some(content) => CraftingRegistry::from_toml_str("recipes.toml", content)?,
            None => CraftingRegistry::with_defaults(),
        };
        let levels = levels
            .iter()
            .enumerate()
            .map(|(i, text)| Tilemap::parse(&level_path(i + 1), text))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            config,
            catalog,
            recipes,
            levels,
        })
    }
}

fn read_optional(path: &Path) -> Result<Option<String>, DataError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(DataError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crafting::BALL_RECIPE;
    use crate::tilemap::{Biome, GRID_HEIGHT, GRID_WIDTH};

    const CREATURES: &str = "[sproutling]\nbiome = \"grass\"\n";

    fn grass_level() -> String {
        let row: String = "G".repeat(GRID_WIDTH);
        vec![row; GRID_HEIGHT].join("\n")
    }

    fn write_data_dir(dir: &Path, levels: usize) {
        std::fs::write(dir.join("creatures.toml"), CREATURES).unwrap();
        std::fs::create_dir(dir.join("levels")).unwrap();
        for index in 1..=levels {
            std::fs::write(dir.join(level_path(index)), grass_level()).unwrap();
        }
    }

    #[test]
    fn test_load_minimal_directory() {
        let dir = tempfile::tempdir().unwrap();
        write_data_dir(dir.path(), LEVEL_COUNT);

        let data = GameData::load_from_directory(dir.path()).unwrap();
        assert_eq!(data.levels.len(), LEVEL_COUNT);
        assert_eq!(data.catalog.len(), 1);
        assert!(data.recipes.get(BALL_RECIPE).is_some());
        assert_eq!(data.config.player.starting_balls, 3);
    }

    #[test]
    fn test_missing_level_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        write_data_dir(dir.path(), LEVEL_COUNT - 1);

        let err = GameData::load_from_directory(dir.path()).unwrap_err();
        match err {
            DataError::Io { path, .. } => assert!(path.ends_with("levels/level9.txt")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_config_overrides() {
        let dir = tempfile::tempdir().unwrap();
        write_data_dir(dir.path(), LEVEL_COUNT);
        std::fs::write(dir.path().join("game.toml"), "seed = 7\n[player]\nstarting_balls = 9\n").unwrap();

        let data = GameData::load_from_directory(dir.path()).unwrap();
        assert_eq!(data.config.seed, Some(7));
        assert_eq!(data.config.player.starting_balls, 9);
        assert_eq!(data.config.player.max_hp, 30);
    }

    #[test]
    fn test_bad_data_files_fail_the_load() {
        let levels = vec![grass_level(); LEVEL_COUNT];

        let cheap_balls = "[poke_ball]\ningredients = [{ item_id = \"apricorn\", count = 1 }]\nresults = [{ item_id = \"poke_ball\", count = 5 }]\n";
        let err = GameData::from_strings(None, CREATURES, Some(cheap_balls), &levels).unwrap_err();
        assert!(matches!(err, DataError::Recipe { .. }));

        let err = GameData::from_strings(Some("[battle]\ncreature_flee_chance = nan\n"), CREATURES, None, &levels)
            .unwrap_err();
        assert!(matches!(err, DataError::Config { .. }));
    }

    #[test]
    fn test_from_strings() {
        let levels = vec![grass_level(); LEVEL_COUNT];
        let data = GameData::from_strings(None, CREATURES, None, &levels).unwrap();
        assert_eq!(data.levels[4].tile(0, 0), Some(Biome::Grass));

        assert!(matches!(
            GameData::from_strings(None, CREATURES, None, &levels[..3]),
            Err(DataError::Level { .. })
        ));

        let mut broken = levels.clone();
        broken[2] = "GG".to_string();
        let err = GameData::from_strings(None, CREATURES, None, &broken).unwrap_err();
        assert!(err.to_string().contains("level3.txt"));
    }

    #[test]
    fn test_shipped_data_loads() {
        let data_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../data");
        let data = GameData::load_from_directory(&data_dir).unwrap();
        assert_eq!(data.levels.len(), LEVEL_COUNT);
        assert!(data.catalog.len() >= 3);
    }
}
