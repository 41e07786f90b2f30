//! Recipe data as read from `recipes.toml`
//!
//! Each table is one recipe keyed by its id:
//!
//! ```toml
//! [poke_ball]
//! display_name = "Poke Ball"
//! ingredients = [{ item_id = "apricorn", count = 3 }]
//! results = [{ item_id = "poke_ball" }]
//! ```

use serde::Deserialize;

use crate::error::DataError;

fn one() -> u32 {
    1
}

/// A quantity of one item; `count` defaults to 1 in TOML
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ItemStack {
    pub item_id: String,
    #[serde(default = "one")]
    pub count: u32,
}

impl ItemStack {
    pub fn new(item_id: &str, count: u32) -> Self {
        Self {
            item_id: item_id.to_string(),
            count,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawRecipeDefinition {
    pub display_name: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<ItemStack>,
    #[serde(default)]
    pub results: Vec<ItemStack>,
}

/// Checked recipe: both sides non-empty, every count at least 1
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeDefinition {
    pub id: String,
    pub display_name: String,
    pub description: String,
    pub ingredients: Vec<ItemStack>,
    pub results: Vec<ItemStack>,
}

impl RecipeDefinition {
    pub fn from_raw(id: &str, raw: &RawRecipeDefinition) -> Result<Self, DataError> {
        let reject = |reason: &str| DataError::Recipe {
            id: id.to_string(),
            reason: reason.to_string(),
        };

        if raw.ingredients.is_empty() {
            return Err(reject("no ingredients"));
        }
        if raw.results.is_empty() {
            return Err(reject("no results"));
        }
        if let Some(stack) = raw.ingredients.iter().chain(&raw.results).find(|s| s.count == 0) {
            return Err(reject(&format!("zero count for {}", stack.item_id)));
        }

        let display_name = match &raw.display_name {
            Some(name) => name.clone(),
            None => id.replace('_', " "),
        };

        Ok(Self {
            id: id.to_string(),
            display_name,
            description: raw.description.clone().unwrap_or_default(),
            ingredients: raw.ingredients.clone(),
            results: raw.results.clone(),
        })
    }

    /// How many of `item_id` one craft consumes
    pub fn needs(&self, item_id: &str) -> u32 {
        self.ingredients
            .iter()
            .filter(|stack| stack.item_id == item_id)
            .map(|stack| stack.count)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn parse(content: &str) -> HashMap<String, RawRecipeDefinition> {
        toml::from_str(content).unwrap()
    }

    #[test]
    fn test_ball_recipe() {
        let raw = parse(
            r#"
            [poke_ball]
            display_name = "Poke Ball"
            description = "Three apricorns pressed into a ball"
            ingredients = [{ item_id = "apricorn", count = 3 }]
            results = [{ item_id = "poke_ball", count = 1 }]
            "#,
        );

        let recipe = RecipeDefinition::from_raw("poke_ball", &raw["poke_ball"]).unwrap();
        assert_eq!(recipe.display_name, "Poke Ball");
        assert_eq!(recipe.ingredients, vec![ItemStack::new("apricorn", 3)]);
        assert_eq!(recipe.results, vec![ItemStack::new("poke_ball", 1)]);
        assert_eq!(recipe.needs("apricorn"), 3);
        assert_eq!(recipe.needs("poke_ball"), 0);
    }

    #[test]
    fn test_missing_fields_fall_back() {
        let raw = parse(
            r#"
            [great_ball]
            ingredients = [{ item_id = "apricorn" }]
            results = [{ item_id = "great_ball" }]
            "#,
        );

        let recipe = RecipeDefinition::from_raw("great_ball", &raw["great_ball"]).unwrap();
        assert_eq!(recipe.display_name, "great ball");
        assert!(recipe.description.is_empty());
        assert_eq!(recipe.ingredients[0].count, 1);
    }

    #[test]
    fn test_rejects_bad_recipes() {
        let raw = parse(
            r#"
            [nothing]
            results = [{ item_id = "poke_ball" }]

            [free_lunch]
            ingredients = [{ item_id = "apricorn", count = 0 }]
            results = [{ item_id = "poke_ball" }]
            "#,
        );

        assert!(matches!(
            RecipeDefinition::from_raw("nothing", &raw["nothing"]),
            Err(DataError::Recipe { .. })
        ));
        assert!(RecipeDefinition::from_raw("free_lunch", &raw["free_lunch"]).is_err());
    }
}
