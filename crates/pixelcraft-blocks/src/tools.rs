//! Tool categories and tiers

use serde::{Deserialize, Serialize};

/// What a tool is for. Blocks name the kind that mines them fastest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToolKind {
    /// Stone, ores, furnaces
    Pickaxe,
    /// Wood, planks, leaves
    Axe,
    /// Grass, dirt, sand
    Shovel,
    /// Combat only
    Sword,
}

/// Tool tier affects mining speed, durability and sword damage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ToolTier {
    /// 2x speed, 60 uses
    Wood,
    /// 3x speed, 132 uses
    Stone,
    /// 5x speed, 250 uses
    Iron,
    /// 8x speed, 1561 uses
    Diamond,
}

impl ToolTier {
    /// Mining speed multiplier when the tool kind matches the block
    pub fn efficiency(&self) -> u8 {
        match self {
            ToolTier::Wood => 2,
            ToolTier::Stone => 3,
            ToolTier::Iron => 5,
            ToolTier::Diamond => 8,
        }
    }

    /// Number of uses before the tool breaks
    pub fn max_durability(&self) -> u32 {
        match self {
            ToolTier::Wood => 60,
            ToolTier::Stone => 132,
            ToolTier::Iron => 250,
            ToolTier::Diamond => 1561,
        }
    }

    /// Damage dealt by a sword of this tier
    pub fn sword_damage(&self) -> u8 {
        match self {
            ToolTier::Wood => 4,
            ToolTier::Stone => 5,
            ToolTier::Iron => 6,
            ToolTier::Diamond => 7,
        }
    }
}

impl ToolKind {
    /// Swords fight, everything else digs
    pub fn is_digging_tool(&self) -> bool {
        match self {
            ToolKind::Pickaxe | ToolKind::Axe | ToolKind::Shovel => true,
            ToolKind::Sword => false,
        }
    }
}
