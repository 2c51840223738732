//! Tool durability tracking

use crate::entity::inventory::Inventory;
use pixelcraft_blocks::BlockType;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// What happened to a tool after one use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WearOutcome {
    /// Not a tool, or not tracked
    Untracked,
    Used { remaining: u32 },
    /// Durability ran out and the tool was removed from the inventory
    Broken,
}

/// Remaining uses per tool type
///
/// Tools stack to one, so durability is tracked per tool type rather than per
/// slot. Crafting (or receiving) a tool resets it to full.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolWear {
    remaining: HashMap<BlockType, u32>,
}

impl ToolWear {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking a freshly made tool at full durability
    pub fn register(&mut self, tool: BlockType) {
        if let Some(max) = tool.def().max_durability {
            self.remaining.insert(tool, max);
        }
    }

    pub fn remaining(&self, tool: BlockType) -> Option<u32> {
        self.remaining.get(&tool).copied()
    }

    /// Remaining durability as a fraction of the maximum
    pub fn fraction(&self, tool: BlockType) -> Option<f32> {
        let max = tool.def().max_durability?;
        let left = self.remaining(tool)?;
        Some(left as f32 / max as f32)
    }

    /// Use a tool once; a tool that breaks is removed from `inventory`
    pub fn wear(&mut self, tool: BlockType, inventory: &mut Inventory) -> WearOutcome {
        let Some(left) = self.remaining.get_mut(&tool) else {
            return WearOutcome::Untracked;
        };

        *left = left.saturating_sub(1);
        if *left > 0 {
            return WearOutcome::Used { remaining: *left };
        }

        self.remaining.remove(&tool);
        inventory.remove_all(tool);
        log::debug!("{} broke", tool.def().name);
        WearOutcome::Broken
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_sets_max_durability() {
        let mut wear = ToolWear::new();
        wear.register(BlockType::PickaxeStone);
        assert_eq!(wear.remaining(BlockType::PickaxeStone), Some(132));
        assert_eq!(wear.fraction(BlockType::PickaxeStone), Some(1.0));

        // Non-tools are ignored
        wear.register(BlockType::Dirt);
        assert_eq!(wear.remaining(BlockType::Dirt), None);
    }

    #[test]
    fn test_wear_until_broken() {
        let mut inv = Inventory::new();
        inv.add_item(BlockType::PickaxeWood, 1);
        let mut wear = ToolWear::new();
        wear.register(BlockType::PickaxeWood);

        for expected in (1..60).rev() {
            assert_eq!(
                wear.wear(BlockType::PickaxeWood, &mut inv),
                WearOutcome::Used {
                    remaining: expected
                }
            );
        }
        assert_eq!(inv.count_of(BlockType::PickaxeWood), 1);

        assert_eq!(
            wear.wear(BlockType::PickaxeWood, &mut inv),
            WearOutcome::Broken
        );
        assert_eq!(inv.count_of(BlockType::PickaxeWood), 0);
        assert_eq!(wear.remaining(BlockType::PickaxeWood), None);
    }

    #[test]
    fn test_untracked_tool() {
        let mut inv = Inventory::new();
        let mut wear = ToolWear::new();
        assert_eq!(
            wear.wear(BlockType::SwordIron, &mut inv),
            WearOutcome::Untracked
        );
    }
}
