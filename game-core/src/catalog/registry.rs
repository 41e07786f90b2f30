//! Species registry

use std::collections::BTreeMap;
use std::path::Path;

use tracing::{debug, info, warn};

use super::species::{RawSpecies, Species};
use crate::error::DataError;
use crate::tilemap::Biome;

/// All known species keyed by id. Ordered so seeded spawns are reproducible.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    species: BTreeMap<String, Species>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a table of species. An empty table is an error because the
    /// world would have nothing to spawn.
    pub fn from_toml_str(origin: &str, content: &str) -> Result<Self, DataError> {
        let mut catalog = Self::new();
        catalog.extend_from_toml_str(origin, content)?;

        if catalog.is_empty() {
            return Err(DataError::EmptyCatalog);
        }

        info!("Loaded {} species from {}", catalog.len(), origin);
        Ok(catalog)
    }

    /// Load `creatures.toml` plus every `*.toml` under `creatures/` in the
    /// data directory. Later files override earlier ids.
    pub fn load_from_directory(data_dir: &Path) -> Result<Self, DataError> {
        let mut catalog = Self::new();

        let main_file = data_dir.join("creatures.toml");
        if main_file.exists() {
            catalog.extend_from_file(&main_file)?;
        }

        let extra_dir = data_dir.join("creatures");
        if extra_dir.is_dir() {
            let entries = std::fs::read_dir(&extra_dir).map_err(|source| DataError::Io {
                path: extra_dir.clone(),
                source,
            })?;
            let mut files = Vec::new();
            for entry in entries {
                let entry = entry.map_err(|source| DataError::Io {
                    path: extra_dir.clone(),
                    source,
                })?;
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    files.push(path);
                }
            }
            files.sort();
            for path in files {
                catalog.extend_from_file(&path)?;
            }
        }

        if catalog.is_empty() {
            return Err(DataError::EmptyCatalog);
        }

        info!("Loaded {} species from {:?}", catalog.len(), data_dir);
        Ok(catalog)
    }

    fn extend_from_file(&mut self, path: &Path) -> Result<(), DataError> {
        let content = std::fs::read_to_string(path).map_err(|source| DataError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.extend_from_toml_str(&path.display().to_string(), &content)
    }

    fn extend_from_toml_str(&mut self, origin: &str, content: &str) -> Result<(), DataError> {
        let table: BTreeMap<String, RawSpecies> =
            toml::from_str(content).map_err(|source| DataError::Toml {
                origin: origin.to_string(),
                source,
            })?;

        for (id, raw) in &table {
            let species = Species::from_raw(id, raw)?;
            if self.contains(id) {
                warn!("Duplicate species ID '{}' in {}, overwriting", id, origin);
            }
            debug!(
                "Loaded species: {} ({}) - {} hp, {} atk, biome {}",
                species.display_name,
                id,
                species.base_hp,
                species.attack,
                species.biome.as_str()
            );
            self.insert(species);
        }
        Ok(())
    }

    pub fn insert(&mut self, species: Species) {
        self.species.insert(species.id.clone(), species);
    }

    /// Get a species by ID
    pub fn get(&self, id: &str) -> Option<&Species> {
        self.species.get(id)
    }

    /// Species that spawn in a biome, in id order
    pub fn by_biome(&self, biome: Biome) -> Vec<&Species> {
        self.species.values().filter(|s| s.biome == biome).collect()
    }

    /// All species IDs, sorted
    pub fn species_ids(&self) -> impl Iterator<Item = &str> {
        self.species.keys().map(String::as_str)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.species.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.species.len()
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"
        [sproutling]
        biome = "grass"

        [thornet]
        biome = "grass"
        attack = 4

        [ripplet]
        biome = "water"
    "#;

    #[test]
    fn test_load_catalog() {
        let catalog = Catalog::from_toml_str("test", CATALOG).unwrap();

        assert_eq!(catalog.len(), 3);
        assert!(catalog.contains("thornet"));
        assert_eq!(catalog.get("thornet").unwrap().attack, 4);
        assert_eq!(
            catalog.species_ids().collect::<Vec<_>>(),
            vec!["ripplet", "sproutling", "thornet"]
        );
    }

    #[test]
    fn test_by_biome() {
        let catalog = Catalog::from_toml_str("test", CATALOG).unwrap();

        let grass: Vec<_> = catalog.by_biome(Biome::Grass).iter().map(|s| s.id.as_str()).collect();
        assert_eq!(grass, vec!["sproutling", "thornet"]);
        assert_eq!(catalog.by_biome(Biome::Water).len(), 1);
        assert!(catalog.by_biome(Biome::Sand).is_empty());
    }

    #[test]
    fn test_empty_catalog_is_fatal() {
        assert!(matches!(
            Catalog::from_toml_str("empty", ""),
            Err(DataError::EmptyCatalog)
        ));
    }

    #[test]
    fn test_unknown_biome_is_fatal() {
        let toml_str = r#"
            [magma_newt]
            biome = "lava"
        "#;
        assert!(matches!(
            Catalog::from_toml_str("lava", toml_str),
            Err(DataError::Toml { .. })
        ));
    }

    #[test]
    fn test_shipped_catalog_parses() {
        let content = include_str!("../../../data/creatures.toml");
        let catalog = Catalog::from_toml_str("creatures.toml", content).unwrap();
        for biome in [Biome::Grass, Biome::Sand, Biome::Water] {
            assert!(!catalog.by_biome(biome).is_empty(), "no species for {:?}", biome);
        }
    }

    #[test]
    fn test_load_from_directory_merges_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("creatures.toml"), CATALOG).unwrap();
        std::fs::create_dir(dir.path().join("creatures")).unwrap();
        std::fs::write(
            dir.path().join("creatures").join("desert.toml"),
            "[dunecrab]\nbiome = \"sand\"\n\n[thornet]\nbiome = \"grass\"\nattack = 9\n",
        )
        .unwrap();

        let catalog = Catalog::load_from_directory(dir.path()).unwrap();
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.get("thornet").unwrap().attack, 9);
        assert_eq!(catalog.by_biome(Biome::Sand).len(), 1);
    }

    #[test]
    fn test_load_from_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            Catalog::load_from_directory(dir.path()),
            Err(DataError::EmptyCatalog)
        ));
    }
}
