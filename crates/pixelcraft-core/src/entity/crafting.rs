//! Crafting recipes

use crate::entity::inventory::Inventory;
use crate::entity::tools::ToolWear;
use pixelcraft_blocks::BlockType;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CraftError {
    #[error("no recipe produces {0:?}")]
    UnknownRecipe(BlockType),
    #[error("need {required} {block:?}, have {available}")]
    MissingIngredients {
        block: BlockType,
        required: u32,
        available: u32,
    },
    #[error("no room in the inventory for {amount} {block:?}")]
    NoSpace { block: BlockType, amount: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub block: BlockType,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub result: BlockType,
    pub amount: u32,
    pub ingredients: Vec<Ingredient>,
}

impl Recipe {
    fn new(result: BlockType, amount: u32, ingredients: &[(BlockType, u32)]) -> Self {
        Recipe {
            result,
            amount,
            ingredients: ingredients
                .iter()
                .map(|&(block, count)| Ingredient { block, count })
                .collect(),
        }
    }

    /// First ingredient the inventory is short of
    pub fn missing(&self, inventory: &Inventory) -> Option<CraftError> {
        self.ingredients.iter().find_map(|ing| {
            let available = inventory.count_of(ing.block);
            (available < ing.count).then_some(CraftError::MissingIngredients {
                block: ing.block,
                required: ing.count,
                available,
            })
        })
    }

    pub fn can_craft(&self, inventory: &Inventory) -> bool {
        self.missing(inventory).is_none()
    }
}

/// Known recipes, in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeBook {
    recipes: Vec<Recipe>,
}

impl Default for RecipeBook {
    fn default() -> Self {
        use BlockType::*;

        let mut recipes = vec![
            Recipe::new(Planks, 4, &[(Wood, 1)]),
            Recipe::new(Planks, 4, &[(WoodBirch, 1)]),
            Recipe::new(Planks, 4, &[(WoodSpruce, 1)]),
            Recipe::new(Stick, 4, &[(Planks, 2)]),
            Recipe::new(Furnace, 1, &[(Stone, 8)]),
        ];

        let tool_sets = [
            (Planks, [PickaxeWood, AxeWood, ShovelWood, SwordWood]),
            (Stone, [PickaxeStone, AxeStone, ShovelStone, SwordStone]),
            (IronIngot, [PickaxeIron, AxeIron, ShovelIron, SwordIron]),
            (Diamond, [PickaxeDiamond, AxeDiamond, ShovelDiamond, SwordDiamond]),
        ];
        for (material, [pickaxe, axe, shovel, sword]) in tool_sets {
            recipes.push(Recipe::new(pickaxe, 1, &[(material, 3), (Stick, 2)]));
            recipes.push(Recipe::new(axe, 1, &[(material, 3), (Stick, 2)]));
            recipes.push(Recipe::new(shovel, 1, &[(material, 1), (Stick, 2)]));
            recipes.push(Recipe::new(sword, 1, &[(material, 2), (Stick, 1)]));
        }

        Self { recipes }
    }
}

impl RecipeBook {
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn recipes_for(&self, result: BlockType) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter().filter(move |r| r.result == result)
    }

    /// Craft `result` with the first matching recipe the inventory can pay for
    ///
    /// On success the ingredients are consumed, the result is added and tools
    /// are registered at full durability. Returns the amount crafted. On error
    /// the inventory is untouched.
    pub fn craft(
        &self,
        result: BlockType,
        inventory: &mut Inventory,
        wear: &mut ToolWear,
    ) -> Result<u32, CraftError> {
        let mut first_missing = None;
        for recipe in self.recipes_for(result) {
            match recipe.missing(inventory) {
                None => return craft_recipe(recipe, inventory, wear),
                Some(err) => {
                    first_missing.get_or_insert(err);
                }
            }
        }
        Err(first_missing.unwrap_or(CraftError::UnknownRecipe(result)))
    }
}

/// Pay for and produce one recipe
pub fn craft_recipe(
    recipe: &Recipe,
    inventory: &mut Inventory,
    wear: &mut ToolWear,
) -> Result<u32, CraftError> {
    if let Some(err) = recipe.missing(inventory) {
        return Err(err);
    }

    // Work on a copy so a full inventory leaves nothing half-crafted
    let mut next = inventory.clone();
    for ing in &recipe.ingredients {
        next.consume_items(ing.block, ing.count);
    }
    if next.add_item(recipe.result, recipe.amount) > 0 {
        return Err(CraftError::NoSpace {
            block: recipe.result,
            amount: recipe.amount,
        });
    }

    *inventory = next;
    wear.register(recipe.result);
    log::debug!("Crafted {} x{}", recipe.result.def().name, recipe.amount);
    Ok(recipe.amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_book() {
        let book = RecipeBook::default();
        assert_eq!(book.recipes().len(), 21);
        assert_eq!(book.recipes_for(BlockType::Planks).count(), 3);

        // Every tool item has exactly one recipe
        for block in BlockType::ALL.iter().filter(|b| b.tool().is_some()) {
            assert_eq!(book.recipes_for(*block).count(), 1, "{:?}", block);
        }
    }

    #[test]
    fn test_planks_from_any_wood() {
        let book = RecipeBook::default();
        let mut inv = Inventory::new();
        let mut wear = ToolWear::new();
        inv.add_item(BlockType::WoodSpruce, 1);

        assert_eq!(book.craft(BlockType::Planks, &mut inv, &mut wear), Ok(4));
        assert_eq!(inv.count_of(BlockType::Planks), 4);
        assert_eq!(inv.count_of(BlockType::WoodSpruce), 0);
    }

    #[test]
    fn test_tool_craft_registers_durability() {
        let book = RecipeBook::default();
        let mut inv = Inventory::new();
        let mut wear = ToolWear::new();
        inv.add_item(BlockType::IronIngot, 3);
        inv.add_item(BlockType::Stick, 2);

        assert_eq!(book.craft(BlockType::PickaxeIron, &mut inv, &mut wear), Ok(1));
        assert_eq!(inv.count_of(BlockType::PickaxeIron), 1);
        assert_eq!(inv.count_of(BlockType::IronIngot), 0);
        assert_eq!(wear.remaining(BlockType::PickaxeIron), Some(250));
    }

    #[test]
    fn test_missing_ingredients() {
        let book = RecipeBook::default();
        let mut inv = Inventory::new();
        let mut wear = ToolWear::new();
        inv.add_item(BlockType::Stone, 5);

        let err = book
            .craft(BlockType::Furnace, &mut inv, &mut wear)
            .unwrap_err();
        assert_eq!(
            err,
            CraftError::MissingIngredients {
                block: BlockType::Stone,
                required: 8,
                available: 5
            }
        );
        assert_eq!(inv.count_of(BlockType::Stone), 5);
    }

    #[test]
    fn test_unknown_recipe() {
        let book = RecipeBook::default();
        let mut inv = Inventory::new();
        let mut wear = ToolWear::new();
        assert_eq!(
            book.craft(BlockType::DiamondOre, &mut inv, &mut wear),
            Err(CraftError::UnknownRecipe(BlockType::DiamondOre))
        );
    }

    #[test]
    fn test_no_space_leaves_inventory_untouched() {
        let book = RecipeBook::default();
        let mut inv = Inventory::new();
        let mut wear = ToolWear::new();
        // Every slot full, and paying for the pickaxe frees none of them
        inv.add_item(BlockType::Dirt, 64 * 25);
        inv.add_item(BlockType::Stick, 64);
        inv.add_item(BlockType::Diamond, 64);
        let before = inv.clone();

        assert_eq!(
            book.craft(BlockType::PickaxeDiamond, &mut inv, &mut wear),
            Err(CraftError::NoSpace {
                block: BlockType::PickaxeDiamond,
                amount: 1
            })
        );
        assert_eq!(inv, before);
        assert_eq!(wear.remaining(BlockType::PickaxeDiamond), None);
    }
}
