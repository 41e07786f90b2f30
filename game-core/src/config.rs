//! Gameplay tuning
//!
//! Loaded from `game.toml`. Every field has a default, so a partial or empty
//! file still yields a playable configuration.

use serde::Deserialize;

use crate::error::DataError;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Walking speed in pixels per second
    pub walk_speed: f32,
    pub run_multiplier: f32,
    pub max_hp: i32,
    pub attack: i32,
    pub defense: i32,
    pub starting_balls: u32,
    pub starting_apricorns: u32,
    pub team_capacity: usize,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            walk_speed: 140.0,
            run_multiplier: 1.6,
            max_hp: 30,
            attack: 4,
            defense: 0,
            starting_balls: 3,
            starting_apricorns: 0,
            team_capacity: 6,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Margin (in pixels) added to each side of a box when testing interaction range
    pub reach: f32,
    /// Wild creatures kept alive per area
    pub wild_target: usize,
    pub wild_respawn_secs: f32,
    pub bush_regrow_secs: f32,
    pub bushes_per_area: usize,
    pub apricorns_per_bush: u32,
    pub apricorns_per_defeat: u32,
    pub level_min: u32,
    pub level_max: u32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            reach: 5.0,
            wild_target: 5,
            wild_respawn_secs: 6.0,
            bush_regrow_secs: 6.0,
            bushes_per_area: 6,
            apricorns_per_bush: 3,
            apricorns_per_defeat: 1,
            level_min: 1,
            level_max: 10,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BattleConfig {
    /// Chance per creature turn that the creature runs away
    pub creature_flee_chance: f32,
    /// Weight of missing HP in the capture roll
    pub capture_base: f32,
    /// Flat capture chance added before the species modifier
    pub capture_bonus: f32,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            creature_flee_chance: 0.1,
            capture_base: 0.5,
            capture_bonus: 0.15,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Fixed RNG seed; a fresh one is picked per run when absent
    pub seed: Option<u64>,
    pub player: PlayerConfig,
    pub world: WorldConfig,
    pub battle: BattleConfig,
}

impl GameConfig {
    pub fn from_toml_str(origin: &str, content: &str) -> Result<Self, DataError> {
        let mut config: GameConfig = toml::from_str(content).map_err(|source| DataError::Toml {
            origin: origin.to_string(),
            source,
        })?;

        config.check_numbers(origin)?;

        if config.world.level_min == 0 {
            config.world.level_min = 1;
        }
        if config.world.level_max < config.world.level_min {
            tracing::warn!(
                "level_max {} below level_min {}, clamping",
                config.world.level_max,
                config.world.level_min
            );
            config.world.level_max = config.world.level_min;
        }
        config.battle.creature_flee_chance = config.battle.creature_flee_chance.clamp(0.0, 1.0);

        Ok(config)
    }

    /// Every tuning float must be a finite, non-negative number
    fn check_numbers(&self, origin: &str) -> Result<(), DataError> {
        let fields = [
            ("player.walk_speed", self.player.walk_speed),
            ("player.run_multiplier", self.player.run_multiplier),
            ("world.reach", self.world.reach),
            ("world.wild_respawn_secs", self.world.wild_respawn_secs),
            ("world.bush_regrow_secs", self.world.bush_regrow_secs),
            ("battle.creature_flee_chance", self.battle.creature_flee_chance),
            ("battle.capture_base", self.battle.capture_base),
            ("battle.capture_bonus", self.battle.capture_bonus),
        ];

        for (field, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(DataError::Config {
                    origin: origin.to_string(),
                    field,
                    reason: format!("must be a finite number >= 0, got {}", value),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = GameConfig::from_toml_str("empty", "").unwrap();
        assert_eq!(config.seed, None);
        assert_eq!(config.player.attack, 4);
        assert_eq!(config.player.team_capacity, 6);
        assert_eq!(config.world.apricorns_per_bush, 3);
        assert!((config.battle.creature_flee_chance - 0.1).abs() < f32::EPSILON);
    }

    #[test]
    fn test_partial_override() {
        let toml_str = r#"
            seed = 7

            [player]
            attack = 9

            [battle]
            creature_flee_chance = 3.0
        "#;

        let config = GameConfig::from_toml_str("partial", toml_str).unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.player.attack, 9);
        // Untouched keys keep their defaults
        assert_eq!(config.player.max_hp, 30);
        assert_eq!(config.battle.creature_flee_chance, 1.0);
    }

    #[test]
    fn test_level_range_is_repaired() {
        let toml_str = r#"
            [world]
            level_min = 0
            level_max = 0
        "#;

        let config = GameConfig::from_toml_str("levels", toml_str).unwrap();
        assert_eq!(config.world.level_min, 1);
        assert_eq!(config.world.level_max, 1);
    }

    #[test]
    fn test_non_finite_numbers_are_rejected() {
        for toml_str in [
            "[battle]\ncreature_flee_chance = nan",
            "[battle]\ncapture_base = inf",
            "[player]\nwalk_speed = -inf",
            "[world]\nbush_regrow_secs = -1.0",
        ] {
            let err = GameConfig::from_toml_str("odd", toml_str).unwrap_err();
            assert!(matches!(err, DataError::Config { .. }), "{toml_str}");
        }
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let err = GameConfig::from_toml_str("bad", "[player]\nattack = \"lots\"").unwrap_err();
        assert!(matches!(err, DataError::Toml { .. }));
    }
}
