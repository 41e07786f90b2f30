//! Crafting System
//!
//! Recipe definitions and the registry the craft action looks recipes up in.

pub mod definition;
pub mod registry;

pub use definition::{ItemStack, RecipeDefinition};
pub use registry::{CraftingRegistry, BALL_RECIPE};
