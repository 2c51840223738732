//! Mining system with hardness-based break times

use glam::IVec2;
use pixelcraft_blocks::BlockType;
use serde::{Deserialize, Serialize};

/// Milliseconds per point of hardness when mining bare-handed
pub const MS_PER_HARDNESS: f32 = 30.0;

/// Time to break `block` while holding `held`
///
/// The right kind of tool divides the time by its tier efficiency. Air and
/// zero-hardness blocks break instantly; `None` means there is nothing to mine.
///
/// Examples:
/// - Stone (hardness 40) by hand: 1200ms
/// - Stone with a wooden pickaxe (efficiency 2): 600ms
/// - Stone with a wooden axe: 1200ms (wrong tool)
pub fn mining_time_ms(block: BlockType, held: BlockType) -> Option<f32> {
    if block.is_air() {
        return None;
    }

    let def = block.def();
    let base = def.hardness as f32 * MS_PER_HARDNESS;

    let multiplier = match (def.tool_kind, held.tool()) {
        (Some(wanted), Some((kind, tier))) if wanted == kind && kind.is_digging_tool() => {
            tier.efficiency() as f32
        }
        _ => 1.0,
    };

    Some(base / multiplier)
}

/// Mining progress tracker (one per player)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MiningProgress {
    pub target: Option<IVec2>,
    /// 0.0 - 1.0
    pub progress: f32,
    /// Milliseconds to complete
    pub required_ms: f32,
}

impl MiningProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start mining a new tile
    pub fn start(&mut self, target: IVec2, required_ms: f32) {
        self.target = Some(target);
        self.progress = 0.0;
        self.required_ms = required_ms;
    }

    /// Update mining progress
    /// Returns the tile once it is fully mined
    pub fn update(&mut self, dt_ms: f32) -> Option<IVec2> {
        let target = self.target?;

        if self.required_ms <= 0.0 {
            self.progress = 1.0;
        } else {
            self.progress += dt_ms / self.required_ms;
        }

        if self.progress >= 1.0 {
            self.reset();
            Some(target)
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_mining(&self) -> bool {
        self.target.is_some()
    }

    /// Progress as a percentage (0-100)
    pub fn percentage(&self) -> f32 {
        (self.progress * 100.0).min(100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mining_time_by_hand() {
        assert_eq!(mining_time_ms(BlockType::Stone, BlockType::Air), Some(1200.0));
        assert_eq!(mining_time_ms(BlockType::Dirt, BlockType::Air), Some(300.0));
        assert_eq!(mining_time_ms(BlockType::Air, BlockType::Air), None);
    }

    #[test]
    fn test_right_tool_is_faster() {
        assert_eq!(
            mining_time_ms(BlockType::Stone, BlockType::PickaxeWood),
            Some(600.0)
        );
        assert_eq!(
            mining_time_ms(BlockType::Stone, BlockType::PickaxeDiamond),
            Some(150.0)
        );
        assert_eq!(
            mining_time_ms(BlockType::Stone, BlockType::AxeDiamond),
            Some(1200.0)
        );
        // Swords never speed up mining
        assert_eq!(
            mining_time_ms(BlockType::Stone, BlockType::SwordIron),
            Some(1200.0)
        );
    }

    #[test]
    fn test_better_tiers_mine_faster() {
        let tools = [
            BlockType::PickaxeWood,
            BlockType::PickaxeStone,
            BlockType::PickaxeIron,
            BlockType::PickaxeDiamond,
        ];
        let times: Vec<f32> = tools
            .iter()
            .filter_map(|&t| mining_time_ms(BlockType::DiamondOre, t))
            .collect();
        assert!(times.windows(2).all(|w| w[1] < w[0]), "{:?}", times);
    }

    #[test]
    fn test_mining_progress() {
        let mut mining = MiningProgress::new();
        assert_eq!(mining.update(100.0), None);

        let tile = IVec2::new(4, 9);
        mining.start(tile, 300.0);
        assert!(mining.is_mining());
        assert_eq!(mining.update(150.0), None);
        assert_eq!(mining.percentage(), 50.0);
        assert_eq!(mining.update(150.0), Some(tile));
        assert!(!mining.is_mining());
    }

    #[test]
    fn test_instant_break() {
        let mut mining = MiningProgress::new();
        let tile = IVec2::new(1, 1);
        mining.start(tile, 0.0);
        assert_eq!(mining.update(0.0), Some(tile));
    }
}
