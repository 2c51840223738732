//! World management - grid storage and procedural generation

pub mod biome;
mod caves;
pub mod generation;
mod grid;
pub mod noise;
mod ores;
pub mod rng_trait;
mod terrain;
pub mod worldgen_config;

pub use biome::{Biome, classify_biome, get_biome_at};
pub use caves::carve_caves;
pub use generation::{WorldGenerator, generate_world, generate_world_with};
pub use grid::{GridError, WorldGrid};
pub use ores::{distribute_ores, generate_vein};
pub use rng_trait::WorldRng;
pub use terrain::{TreeShape, TreeVariant, decorate_column, fill_column, surface_height};
pub use worldgen_config::{
    BiomeNoise, BiomeParams, CaveParams, DepthBand, OreConfig, TerrainPreset, VegetationParams,
    WorldGenConfig, WorldGenConfigError, WorldParams,
};
