//! Recipes by id, seeded with the built-in ball recipe

use std::collections::BTreeMap;

use tracing::{debug, info, warn};

use super::definition::{ItemStack, RawRecipeDefinition, RecipeDefinition};
use crate::error::DataError;
use crate::inventory::{APRICORN, POKE_BALL};

/// Recipe used by the craft key
pub const BALL_RECIPE: &str = "poke_ball";

fn stock_ball_recipe() -> RecipeDefinition {
    RecipeDefinition {
        id: BALL_RECIPE.to_string(),
        display_name: "Poke Ball".to_string(),
        description: "Three apricorns pressed into a sturdy ball.".to_string(),
        ingredients: vec![ItemStack::new(APRICORN, 3)],
        results: vec![ItemStack::new(POKE_BALL, 1)],
    }
}

#[derive(Debug, Clone)]
pub struct CraftingRegistry {
    recipes: BTreeMap<String, RecipeDefinition>,
}

impl CraftingRegistry {
    pub fn new() -> Self {
        Self {
            recipes: BTreeMap::new(),
        }
    }

    /// Registry holding only the stock recipe: 3 apricorns -> 1 poke ball
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.insert(stock_ball_recipe());
        registry
    }

    /// Stock recipe with its name and description taken from a TOML table
    /// of recipes. The ball recipe always costs 3 apricorns and yields 1
    /// ball; a file that says otherwise is rejected. Other recipes are
    /// skipped since nothing can craft them.
    pub fn from_toml_str(origin: &str, content: &str) -> Result<Self, DataError> {
        let table: BTreeMap<String, RawRecipeDefinition> =
            toml::from_str(content).map_err(|source| DataError::Toml {
                origin: origin.to_string(),
                source,
            })?;

        let mut registry = Self::with_defaults();
        for (id, raw) in &table {
            let recipe = RecipeDefinition::from_raw(id, raw)?;
            if id != BALL_RECIPE {
                warn!("Skipping recipe '{}' in {}: only '{}' can be crafted", id, origin, BALL_RECIPE);
                continue;
            }

            let stock = stock_ball_recipe();
            if recipe.ingredients != stock.ingredients || recipe.results != stock.results {
                return Err(DataError::Recipe {
                    id: id.clone(),
                    reason: "must turn 3 apricorn into 1 poke_ball".to_string(),
                });
            }

            debug!("Recipe '{}' named '{}' by {}", id, recipe.display_name, origin);
            registry.insert(recipe);
        }

        info!("{} recipes available after {}", registry.len(), origin);
        Ok(registry)
    }

    pub fn insert(&mut self, recipe: RecipeDefinition) {
        self.recipes.insert(recipe.id.clone(), recipe);
    }

    pub fn get(&self, id: &str) -> Option<&RecipeDefinition> {
        self.recipes.get(id)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl Default for CraftingRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_contain_ball_recipe() {
        let registry = CraftingRegistry::with_defaults();
        let recipe = registry.get(BALL_RECIPE).unwrap();

        assert_eq!(recipe.needs(APRICORN), 3);
        assert_eq!(recipe.results, vec![ItemStack::new(POKE_BALL, 1)]);
    }

    #[test]
    fn test_file_renames_ball_recipe() {
        let toml_str = r#"
[poke_ball]
display_name = "Apricorn Ball"
description = "Hand made."
ingredients = [{ item_id = "apricorn", count = 3 }]
results = [{ item_id = "poke_ball" }]
"#;

        let registry = CraftingRegistry::from_toml_str("test", toml_str).unwrap();
        let recipe = registry.get(BALL_RECIPE).unwrap();
        assert_eq!(recipe.display_name, "Apricorn Ball");
        assert_eq!(recipe.needs(APRICORN), 3);
    }

    #[test]
    fn test_ball_recipe_cannot_change_cost() {
        let toml_str = r#"
[poke_ball]
ingredients = [{ item_id = "apricorn", count = 1 }]
results = [{ item_id = "poke_ball", count = 5 }]
"#;

        let err = CraftingRegistry::from_toml_str("cheap", toml_str).unwrap_err();
        assert!(matches!(err, DataError::Recipe { ref id, .. } if id == BALL_RECIPE));
    }

    #[test]
    fn test_other_recipes_are_skipped() {
        let toml_str = r#"
[great_ball]
display_name = "Great Ball"
ingredients = [{ item_id = "apricorn", count = 5 }]
results = [{ item_id = "great_ball" }]
"#;

        let registry = CraftingRegistry::from_toml_str("test", toml_str).unwrap();
        assert_eq!(registry.len(), 1);
        assert!(registry.get("great_ball").is_none());
        assert!(registry.get(BALL_RECIPE).is_some());
    }

    #[test]
    fn test_shipped_recipes_match_stock_rule() {
        let content = include_str!("../../../data/recipes.toml");
        let registry = CraftingRegistry::from_toml_str("recipes.toml", content).unwrap();
        assert_eq!(
            registry.get(BALL_RECIPE),
            CraftingRegistry::with_defaults().get(BALL_RECIPE)
        );
    }
}
