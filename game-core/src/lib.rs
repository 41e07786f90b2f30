//! Apricorn Trail game rules
//!
//! Everything that decides what happens in the game lives here, free of any
//! windowing or rendering code: the creature catalog, tile maps and the 3x3
//! overworld, entities, inventory and crafting, the battle state machine and
//! the per-frame update that ties them together.

pub mod battle;
pub mod catalog;
pub mod config;
pub mod crafting;
pub mod data;
pub mod entity;
pub mod error;
pub mod game;
pub mod inventory;
pub mod movement;
pub mod tilemap;
pub mod world;

pub use battle::{BattleSession, Outcome, Phase, Turn};
pub use catalog::{Catalog, Species};
pub use config::GameConfig;
pub use crafting::{CraftingRegistry, RecipeDefinition};
pub use data::GameData;
pub use entity::{Bush, Direction, Player, Rect, TeamMember, WildCreature};
pub use error::DataError;
pub use game::{Command, GameEvent, GameState, Mode};
pub use inventory::{Inventory, APRICORN, POKE_BALL};
pub use tilemap::{Biome, Tilemap};
pub use world::{Area, Overworld};
