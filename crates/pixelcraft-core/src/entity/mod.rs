//! Player-side state: inventory, crafting, vitals and movement

pub mod crafting;
pub mod health;
pub mod input;
pub mod inventory;
pub mod player;
pub mod tools;

pub use crafting::{CraftError, Ingredient, Recipe, RecipeBook, craft_recipe};
pub use health::{MAX_HEALTH, MAX_HUNGER, Vitals, VitalsParams, VitalsParamsError, food_value};
pub use input::InputState;
pub use inventory::{HOTBAR_SIZE, INVENTORY_SIZE, Inventory, Slot};
pub use player::{PhysicsParams, Player, PlayerPhysics, spawn_point};
pub use tools::{ToolWear, WearOutcome};
