//! World generation configuration - serializable parameters for world generation
//!
//! Every constant the generator uses lives here, so presets can be stored as
//! RON and tweaked without touching code. The seed is NOT part of the config:
//! same config + different seed = different world.

use crate::world::biome::Biome;
use pixelcraft_blocks::BlockType;
use serde::{Deserialize, Serialize};
use std::ops::Range;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum WorldGenConfigError {
    #[error("failed to parse world generation preset: {0}")]
    Parse(String),
    #[error("failed to serialize world generation preset: {0}")]
    Serialize(String),
    #[error("invalid world generation preset: {0}")]
    Invalid(String),
}

/// Complete world generation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldGenConfig {
    /// Display name for this configuration
    pub name: String,

    /// Grid dimensions
    pub world: WorldParams,

    /// Biome selection and per-biome terrain shape
    pub biomes: BiomeParams,

    /// Cave carving
    pub caves: CaveParams,

    /// Ore veins, generated in list order
    pub ores: Vec<OreConfig>,

    /// Trees, cacti and flowers
    pub vegetation: VegetationParams,
}

/// Grid dimensions in tiles
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldParams {
    /// Columns (default: 300)
    pub width: usize,
    /// Rows (default: 128)
    pub height: usize,
}

impl WorldParams {
    /// Baseline surface row, half way down the world
    pub fn ground_level(&self) -> usize {
        self.height / 2
    }
}

/// Thresholded 1D noise that picks a biome per column
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BiomeNoise {
    /// Noise frequency (default: 0.05)
    pub frequency: f64,
    /// Added to the world seed so biomes don't follow the height map (default: 999)
    pub seed_offset: f64,
    /// Noise below this is Desert (default: 0.25)
    pub desert_below: f64,
    /// Noise below this is Plains (default: 0.5)
    pub plains_below: f64,
    /// Noise below this is Forest, anything above is Mountains (default: 0.8)
    pub forest_below: f64,
}

impl Default for BiomeNoise {
    fn default() -> Self {
        Self {
            frequency: 0.05,
            seed_offset: 999.0,
            desert_below: 0.25,
            plains_below: 0.5,
            forest_below: 0.8,
        }
    }
}

/// Height map and decoration density of one biome
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TerrainPreset {
    /// Height variation in tiles
    pub amplitude: f64,
    /// Height map noise frequency
    pub frequency: f64,
    /// Probability per column of a tree (or cactus in deserts)
    pub tree_chance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiomeParams {
    pub noise: BiomeNoise,
    pub plains: TerrainPreset,
    pub forest: TerrainPreset,
    pub mountains: TerrainPreset,
    pub desert: TerrainPreset,
}

impl BiomeParams {
    pub fn preset(&self, biome: Biome) -> &TerrainPreset {
        match biome {
            Biome::Plains => &self.plains,
            Biome::Forest => &self.forest,
            Biome::Mountains => &self.mountains,
            Biome::Desert => &self.desert,
        }
    }
}

impl Default for BiomeParams {
    fn default() -> Self {
        Self {
            noise: BiomeNoise::default(),
            plains: TerrainPreset {
                amplitude: 4.0,
                frequency: 0.1,
                tree_chance: 0.05,
            },
            forest: TerrainPreset {
                amplitude: 6.0,
                frequency: 0.08,
                tree_chance: 0.22,
            },
            mountains: TerrainPreset {
                amplitude: 12.0,
                frequency: 0.15,
                tree_chance: 0.02,
            },
            desert: TerrainPreset {
                amplitude: 3.0,
                frequency: 0.05,
                tree_chance: 0.08, // Cacti
            },
        }
    }
}

/// Cave carving parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CaveParams {
    /// Skip the pass entirely
    pub enabled: bool,
    /// 2D noise frequency (default: 0.15)
    pub frequency: f64,
    /// Added to the world seed (default: 123)
    pub seed_offset: f64,
    /// Stone/dirt with noise above this becomes air (default: 0.72)
    pub threshold: f64,
}

impl Default for CaveParams {
    fn default() -> Self {
        Self {
            enabled: true,
            frequency: 0.15,
            seed_offset: 123.0,
            threshold: 0.72,
        }
    }
}

/// Rows an ore vein may start in and spread through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DepthBand {
    /// From ground level down to the bottom of the world
    BelowGround,
    /// The lowest N rows
    Bottom(usize),
    /// Explicit half-open row range
    Rows { min: usize, max: usize },
}

impl DepthBand {
    /// Row range for a world, clamped to the grid
    pub fn rows(&self, world: &WorldParams) -> Range<usize> {
        let range = match *self {
            DepthBand::BelowGround => world.ground_level()..world.height,
            DepthBand::Bottom(rows) => world.height.saturating_sub(rows)..world.height,
            DepthBand::Rows { min, max } => min..max,
        };
        range.start.min(world.height)..range.end.min(world.height)
    }
}

/// One ore vein pass
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OreConfig {
    pub block: BlockType,
    /// Random walk steps per vein
    pub size: u32,
    /// Number of veins
    pub count: u32,
    pub depth: DepthBand,
}

/// Decoration probabilities
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VegetationParams {
    /// Columns this close to either world edge get no trees (default: 3)
    pub edge_margin: usize,
    /// Chance of a flower on a plains column without a tree (default: 0.05)
    pub flower_chance: f64,
    /// Chance a mountain tree that passed its roll actually grows (default: 0.5)
    pub mountain_tree_survival: f64,
}

impl Default for VegetationParams {
    fn default() -> Self {
        Self {
            edge_margin: 3,
            flower_chance: 0.05,
            mountain_tree_survival: 0.5,
        }
    }
}

impl Default for WorldGenConfig {
    fn default() -> Self {
        Self {
            name: "Default".to_string(),
            world: WorldParams {
                width: 300,
                height: 128,
            },
            biomes: BiomeParams::default(),
            caves: CaveParams::default(),
            ores: vec![
                OreConfig {
                    block: BlockType::Coal,
                    size: 8,
                    count: 30,
                    depth: DepthBand::BelowGround,
                },
                OreConfig {
                    block: BlockType::Iron,
                    size: 4,
                    count: 20,
                    depth: DepthBand::BelowGround,
                },
                OreConfig {
                    block: BlockType::DiamondOre,
                    size: 3,
                    count: 10,
                    depth: DepthBand::Bottom(30),
                },
            ],
            vegetation: VegetationParams::default(),
        }
    }
}

impl WorldGenConfig {
    /// Same defaults on a grid of a different size
    pub fn with_size(width: usize, height: usize) -> Self {
        Self {
            world: WorldParams { width, height },
            ..Default::default()
        }
    }

    /// Parse a RON preset and validate it
    pub fn from_ron(text: &str) -> Result<Self, WorldGenConfigError> {
        let config: Self =
            ron::from_str(text).map_err(|e| WorldGenConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty RON
    pub fn to_ron(&self) -> Result<String, WorldGenConfigError> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| WorldGenConfigError::Serialize(e.to_string()))
    }

    /// Check the preset describes a world the generator can fill
    pub fn validate(&self) -> Result<(), WorldGenConfigError> {
        if self.world.width == 0 || self.world.height == 0 {
            return Err(WorldGenConfigError::Invalid(format!(
                "world must be at least 1x1, got {}x{}",
                self.world.width, self.world.height
            )));
        }

        let probabilities = [
            ("plains.tree_chance", self.biomes.plains.tree_chance),
            ("forest.tree_chance", self.biomes.forest.tree_chance),
            ("mountains.tree_chance", self.biomes.mountains.tree_chance),
            ("desert.tree_chance", self.biomes.desert.tree_chance),
            ("vegetation.flower_chance", self.vegetation.flower_chance),
            (
                "vegetation.mountain_tree_survival",
                self.vegetation.mountain_tree_survival,
            ),
        ];
        for (name, p) in probabilities {
            if !(0.0..=1.0).contains(&p) {
                return Err(WorldGenConfigError::Invalid(format!(
                    "{} must be within [0, 1], got {}",
                    name, p
                )));
            }
        }

        for ore in &self.ores {
            if let DepthBand::Rows { min, max } = ore.depth {
                if min >= max || max > self.world.height {
                    return Err(WorldGenConfigError::Invalid(format!(
                        "{:?} depth band {}..{} does not fit a world of height {}",
                        ore.block, min, max, self.world.height
                    )));
                }
            }
        }

        Ok(())
    }
}
