//! Species definitions
//!
//! `RawSpecies` mirrors the TOML table; `Species` is the resolved template with
//! defaults applied and values validated.

use serde::Deserialize;

use crate::error::DataError;
use crate::tilemap::Biome;

const DEFAULT_BASE_HP: i32 = 10;
const DEFAULT_ATTACK: i32 = 3;
const DEFAULT_DEFENSE: i32 = 0;
const DEFAULT_CATCH_RATE: f32 = 1.0;

/// Raw species entry from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct RawSpecies {
    pub display_name: Option<String>,
    pub biome: Biome,
    pub base_hp: Option<i32>,
    pub attack: Option<i32>,
    pub defense: Option<i32>,
    pub catch_rate: Option<f32>,
}

/// Immutable species template
#[derive(Debug, Clone, PartialEq)]
pub struct Species {
    pub id: String,
    pub display_name: String,
    pub biome: Biome,
    pub base_hp: i32,
    pub attack: i32,
    pub defense: i32,
    /// Multiplier on the capture chance; above 1.0 is easier to catch
    pub catch_rate: f32,
}

impl Species {
    pub fn from_raw(id: &str, raw: &RawSpecies) -> Result<Self, DataError> {
        let invalid = |reason: &str| DataError::Species {
            id: id.to_string(),
            reason: reason.to_string(),
        };

        let base_hp = raw.base_hp.unwrap_or(DEFAULT_BASE_HP);
        if base_hp <= 0 {
            return Err(invalid("base_hp must be positive"));
        }

        let attack = raw.attack.unwrap_or(DEFAULT_ATTACK);
        let defense = raw.defense.unwrap_or(DEFAULT_DEFENSE);
        if attack < 0 || defense < 0 {
            return Err(invalid("attack and defense cannot be negative"));
        }

        let catch_rate = raw.catch_rate.unwrap_or(DEFAULT_CATCH_RATE);
        if !catch_rate.is_finite() || catch_rate < 0.0 {
            return Err(invalid("catch_rate must be a non-negative number"));
        }

        Ok(Self {
            id: id.to_string(),
            display_name: raw
                .display_name
                .clone()
                .unwrap_or_else(|| id.replace('_', " ")),
            biome: raw.biome,
            base_hp,
            attack,
            defense,
            catch_rate,
        })
    }
}
