//! Biome classification
//!
//! Biomes are never stored per tile. They are recomputed from the column and
//! the seed whenever terrain generation or ambience needs them.

use crate::world::noise::noise_1d;
use crate::world::worldgen_config::BiomeNoise;
use serde::{Deserialize, Serialize};

/// Types of surface biomes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Biome {
    Desert,
    Plains,
    Forest,
    Mountains,
}

impl Biome {
    pub const ALL: [Biome; 4] = [Biome::Desert, Biome::Plains, Biome::Forest, Biome::Mountains];

    pub fn name(&self) -> &'static str {
        match self {
            Biome::Desert => "Desert",
            Biome::Plains => "Plains",
            Biome::Forest => "Forest",
            Biome::Mountains => "Mountains",
        }
    }
}

/// Biome of column `x` using the default thresholds
pub fn get_biome_at(x: i32, seed: f64) -> Biome {
    classify_biome(x, seed, &BiomeNoise::default())
}

/// Biome of column `x` using custom thresholds
pub fn classify_biome(x: i32, seed: f64, params: &BiomeNoise) -> Biome {
    let value = noise_1d(x as f64, params.frequency, seed + params.seed_offset);

    if value < params.desert_below {
        Biome::Desert
    } else if value < params.plains_below {
        Biome::Plains
    } else if value < params.forest_below {
        Biome::Forest
    } else {
        Biome::Mountains
    }
}
