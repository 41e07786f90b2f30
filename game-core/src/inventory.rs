//! Player inventory
//!
//! Item counts are unsigned and removal is all-or-nothing, so no count can
//! ever go negative.

use std::collections::BTreeMap;

use tracing::debug;

use crate::crafting::RecipeDefinition;
use crate::entity::Bush;

pub const APRICORN: &str = "apricorn";
pub const POKE_BALL: &str = "poke_ball";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    items: BTreeMap<String, u32>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count of an item; unknown items count as zero
    pub fn count(&self, item_id: &str) -> u32 {
        self.items.get(item_id).copied().unwrap_or(0)
    }

    pub fn add(&mut self, item_id: &str, amount: u32) {
        if amount == 0 {
            return;
        }
        let entry = self.items.entry(item_id.to_string()).or_insert(0);
        *entry = entry.saturating_add(amount);
    }

    /// Remove `amount` of an item. Leaves the inventory untouched and returns
    /// false when there are not enough.
    pub fn remove(&mut self, item_id: &str, amount: u32) -> bool {
        let have = self.count(item_id);
        if have < amount {
            return false;
        }
        if have == amount {
            self.items.remove(item_id);
        } else {
            self.items.insert(item_id.to_string(), have - amount);
        }
        true
    }

    /// Non-empty stacks in item id order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.items.iter().map(|(id, count)| (id.as_str(), *count))
    }

    pub fn can_craft(&self, recipe: &RecipeDefinition) -> bool {
        recipe
            .ingredients
            .iter()
            .all(|i| self.count(&i.item_id) >= i.count)
    }

    /// Apply a recipe. Without every ingredient this is a no-op returning false.
    pub fn craft(&mut self, recipe: &RecipeDefinition) -> bool {
        if !self.can_craft(recipe) {
            debug!("Cannot craft {}: missing ingredients", recipe.id);
            return false;
        }

        for ingredient in &recipe.ingredients {
            self.remove(&ingredient.item_id, ingredient.count);
        }
        for result in &recipe.results {
            self.add(&result.item_id, result.count);
        }
        true
    }

    /// Pick apricorns from a bush. A bush that is still regrowing yields nothing.
    pub fn harvest(&mut self, bush: &mut Bush, amount: u32, regrow_secs: f32) -> bool {
        if !bush.harvest(regrow_secs) {
            return false;
        }
        self.add(APRICORN, amount);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crafting::{BALL_RECIPE, CraftingRegistry};
    use crate::entity::Rect;

    fn ball_recipe() -> RecipeDefinition {
        CraftingRegistry::with_defaults()
            .get(BALL_RECIPE)
            .cloned()
            .unwrap()
    }

    fn inventory(apricorns: u32, balls: u32) -> Inventory {
        let mut inv = Inventory::new();
        inv.add(APRICORN, apricorns);
        inv.add(POKE_BALL, balls);
        inv
    }

    #[test]
    fn test_remove_is_all_or_nothing() {
        let mut inv = inventory(2, 0);
        assert!(!inv.remove(APRICORN, 3));
        assert_eq!(inv.count(APRICORN), 2);
        assert!(inv.remove(APRICORN, 2));
        assert_eq!(inv.count(APRICORN), 0);
        assert_eq!(inv.iter().count(), 0);
    }

    #[test]
    fn test_craft_below_three_is_noop() {
        let recipe = ball_recipe();
        for apricorns in 0..3 {
            for balls in [0, 1, 7] {
                let mut inv = inventory(apricorns, balls);
                assert!(!inv.craft(&recipe));
                assert_eq!(inv.count(APRICORN), apricorns);
                assert_eq!(inv.count(POKE_BALL), balls);
            }
        }
    }

    #[test]
    fn test_craft_consumes_three_apricorns() {
        let recipe = ball_recipe();
        for apricorns in [3, 4, 5, 9, 100] {
            let mut inv = inventory(apricorns, 2);
            assert!(inv.craft(&recipe));
            assert_eq!(inv.count(APRICORN), apricorns - 3);
            assert_eq!(inv.count(POKE_BALL), 3);
        }
    }

    #[test]
    fn test_harvest_then_craft() {
        let recipe = ball_recipe();
        let mut inv = inventory(2, 0);
        let mut bush = Bush::new(Rect::new(0.0, 0.0, 22.0, 22.0));

        assert!(!inv.craft(&recipe));
        assert_eq!((inv.count(APRICORN), inv.count(POKE_BALL)), (2, 0));

        assert!(inv.harvest(&mut bush, 3, 6.0));
        assert_eq!(inv.count(APRICORN), 5);

        // Picked bush has nothing left until it regrows
        assert!(!inv.harvest(&mut bush, 3, 6.0));
        assert_eq!(inv.count(APRICORN), 5);

        assert!(inv.craft(&recipe));
        assert_eq!((inv.count(APRICORN), inv.count(POKE_BALL)), (2, 1));
    }
}
