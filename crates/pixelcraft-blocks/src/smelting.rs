//! Smelting recipes and fuel classification

use crate::blocks::BlockType;
use serde::{Deserialize, Serialize};

/// How long a fuel item burns, relative to the others
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FuelKind {
    /// Coal burns four times as long as wood
    Coal,
    /// Logs of any species and planks
    Wood,
}

impl FuelKind {
    /// Fuel classification of a block, if it burns at all
    pub fn of(block: BlockType) -> Option<FuelKind> {
        match block {
            BlockType::Coal => Some(FuelKind::Coal),
            BlockType::Wood | BlockType::WoodBirch | BlockType::WoodSpruce | BlockType::Planks => {
                Some(FuelKind::Wood)
            }
            _ => None,
        }
    }
}

/// What a furnace turns this block into
pub fn smelt_result(block: BlockType) -> Option<BlockType> {
    match block {
        BlockType::Iron => Some(BlockType::IronIngot),
        _ => None,
    }
}
