//! Creature Catalog
//!
//! Species templates loaded once from TOML at startup and read-only afterwards.

pub mod registry;
pub mod species;

pub use registry::Catalog;
pub use species::{RawSpecies, Species};
