//! World generation - terrain, decoration, caves, then ores

use crate::world::biome::classify_biome;
use crate::world::caves::carve_caves;
use crate::world::grid::WorldGrid;
use crate::world::ores::distribute_ores;
use crate::world::rng_trait::WorldRng;
use crate::world::terrain::{decorate_column, fill_column, surface_height};
use crate::world::worldgen_config::WorldGenConfig;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;
use std::time::Instant;

/// Mixed into the seed bits for the ore stream
const ORE_STREAM: u64 = 0x9E37_79B9_7F4A_7C15;

/// World generator
///
/// Terrain, biomes, caves and ores are a pure function of `(seed, config)`.
/// Decorations draw from whatever RNG the caller passes, so the convenience
/// entry points give a different forest on every run.
pub struct WorldGenerator {
    pub seed: f64,
    config: WorldGenConfig,
}

impl WorldGenerator {
    /// Generator with the default 300x128 preset
    pub fn new(seed: f64) -> Self {
        Self::from_config(seed, WorldGenConfig::default())
    }

    pub fn from_config(seed: f64, config: WorldGenConfig) -> Self {
        Self { seed, config }
    }

    pub fn config(&self) -> &WorldGenConfig {
        &self.config
    }

    /// Swap the preset, keeping the seed
    pub fn update_config(&mut self, config: WorldGenConfig) {
        self.config = config;
    }

    /// Generate a world, decorating with the thread RNG
    pub fn generate(&self) -> WorldGrid {
        self.generate_with_rng(&mut rand::thread_rng())
    }

    /// Generate a world, decorating with `rng`
    pub fn generate_with_rng<R: WorldRng + ?Sized>(&self, rng: &mut R) -> WorldGrid {
        let start = Instant::now();
        let world = self.config.world;
        let ground_level = world.ground_level();
        let mut grid = WorldGrid::new(world.width, world.height);

        let mut decorations = 0;
        for x in 0..world.width as i32 {
            let biome = classify_biome(x, self.seed, &self.config.biomes.noise);
            let preset = self.config.biomes.preset(biome);
            let surface = surface_height(x, self.seed, preset, ground_level);

            fill_column(&mut grid, x, surface, biome);
            if decorate_column(
                &mut grid,
                x,
                surface,
                biome,
                preset,
                &self.config.vegetation,
                rng,
            )
            .is_some()
            {
                decorations += 1;
            }
        }

        let carved = carve_caves(&mut grid, self.seed, &self.config.caves);

        // Adding 0.0 folds -0.0 into 0.0 so both share an ore layout
        let ore_seed = (self.seed + 0.0).to_bits() ^ ORE_STREAM;
        let mut ore_rng = Xoshiro256StarStar::seed_from_u64(ore_seed);
        let ores = distribute_ores(&mut grid, &self.config.ores, &world, &mut ore_rng);

        log::debug!(
            "Worldgen passes: {} decorations, {} cave cells, ores {:?}",
            decorations,
            carved,
            ores
        );
        log::info!(
            "Generated {}x{} world '{}' (seed {}) in {:.1}ms",
            world.width,
            world.height,
            self.config.name,
            self.seed,
            start.elapsed().as_secs_f64() * 1000.0
        );

        grid
    }
}

/// Generate a default-size world for `seed`
pub fn generate_world(seed: f64) -> WorldGrid {
    WorldGenerator::new(seed).generate()
}

/// Generate a world from a preset with an explicit decoration RNG
pub fn generate_world_with<R: WorldRng + ?Sized>(
    seed: f64,
    config: &WorldGenConfig,
    rng: &mut R,
) -> WorldGrid {
    WorldGenerator::from_config(seed, config.clone()).generate_with_rng(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixelcraft_blocks::BlockType;

    fn seeded(n: u64) -> Xoshiro256StarStar {
        Xoshiro256StarStar::seed_from_u64(n)
    }

    #[test]
    fn test_world_generator_new() {
        let generator = WorldGenerator::new(42.0);
        assert_eq!(generator.seed, 42.0);
        assert_eq!(generator.config().world.width, 300);
    }

    #[test]
    fn test_generate_world_dimensions() {
        let grid = generate_world(42.0);
        assert_eq!(grid.width(), 300);
        assert_eq!(grid.height(), 128);
        assert_eq!(grid.cells().len(), 300 * 128);
    }

    #[test]
    fn test_same_rng_same_world() {
        let config = WorldGenConfig::default();
        let a = generate_world_with(42.0, &config, &mut seeded(1));
        let b = generate_world_with(42.0, &config, &mut seeded(1));
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let config = WorldGenConfig::default();
        let a = generate_world_with(1.0, &config, &mut seeded(1));
        let b = generate_world_with(2.0, &config, &mut seeded(1));
        assert_ne!(a, b);
    }

    #[test]
    fn test_signed_zero_seeds_match() {
        let config = WorldGenConfig::with_size(64, 48);
        let positive = generate_world_with(0.0, &config, &mut seeded(4));
        let negative = generate_world_with(-0.0, &config, &mut seeded(4));
        assert_eq!(positive, negative);
    }

    #[test]
    fn test_bottom_row_is_solid_stone_or_ore() {
        let grid = generate_world_with(7.0, &WorldGenConfig::default(), &mut seeded(3));
        let bottom = grid.row(grid.height() - 1).unwrap();
        // Caves may open the floor, but nothing else sits down there
        for block in bottom {
            assert!(matches!(
                block,
                BlockType::Stone
                    | BlockType::Air
                    | BlockType::Coal
                    | BlockType::Iron
                    | BlockType::DiamondOre
            ));
        }
    }

    #[test]
    fn test_small_preset() {
        let config = WorldGenConfig::with_size(64, 48);
        let grid = generate_world_with(5.0, &config, &mut seeded(9));
        assert_eq!(grid.width(), 64);
        assert_eq!(grid.height(), 48);
        assert!(grid.count(BlockType::Stone) > 0);
    }

    #[test]
    fn test_update_config_keeps_seed() {
        let mut generator = WorldGenerator::new(3.0);
        generator.update_config(WorldGenConfig::with_size(10, 10));
        assert_eq!(generator.seed, 3.0);
        assert_eq!(generator.generate_with_rng(&mut seeded(0)).width(), 10);
    }
}
