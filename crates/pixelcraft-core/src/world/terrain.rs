//! Terrain columns and surface decoration (trees, cacti, flowers)

use crate::world::biome::Biome;
use crate::world::grid::WorldGrid;
use crate::world::noise::noise_1d;
use crate::world::rng_trait::WorldRng;
use crate::world::worldgen_config::{TerrainPreset, VegetationParams};
use pixelcraft_blocks::BlockType;

/// Layers of dirt (or sand) between the surface block and stone
const SOIL_DEPTH: i32 = 4;

/// Surface row of column `x`
pub fn surface_height(x: i32, seed: f64, preset: &TerrainPreset, ground_level: usize) -> i32 {
    (ground_level as f64 + noise_1d(x as f64, preset.frequency, seed) * preset.amplitude).floor()
        as i32
}

/// Fill column `x` from `surface` down to the bottom of the world
pub fn fill_column(grid: &mut WorldGrid, x: i32, surface: i32, biome: Biome) {
    let desert = biome == Biome::Desert;

    for y in surface.max(0)..grid.height() as i32 {
        let depth = y - surface;
        let block = if depth == 0 {
            if desert { BlockType::Sand } else { BlockType::Grass }
        } else if depth < SOIL_DEPTH {
            if desert { BlockType::Sand } else { BlockType::Dirt }
        } else {
            BlockType::Stone
        };
        grid.set(x, y, block);
    }
}

/// Canopy silhouette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeShape {
    /// Diamond blob, radius 2
    Round,
    /// Shrinking bands with an apex leaf
    Cone,
    /// Diamond blob, radius 3
    Tall,
}

/// A tree species rolled for one column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeVariant {
    pub wood: BlockType,
    pub leaves: BlockType,
    pub height: i32,
    pub shape: TreeShape,
}

impl TreeVariant {
    /// Roll a tree for a (non-desert) biome
    ///
    /// Forests mix birch, spruce and tall oak; everywhere else grows plain oak.
    pub fn roll<R: WorldRng + ?Sized>(biome: Biome, rng: &mut R) -> Self {
        let roll = rng.gen_f64();
        let oak = TreeVariant {
            wood: BlockType::Wood,
            leaves: BlockType::Leaves,
            height: 4 + rng.gen_index(3) as i32,
            shape: TreeShape::Round,
        };

        if biome != Biome::Forest {
            return oak;
        }

        if roll < 0.4 {
            TreeVariant {
                wood: BlockType::WoodBirch,
                leaves: BlockType::LeavesBirch,
                height: 5 + rng.gen_index(2) as i32,
                shape: TreeShape::Round,
            }
        } else if roll < 0.7 {
            TreeVariant {
                wood: BlockType::WoodSpruce,
                leaves: BlockType::LeavesSpruce,
                height: 6 + rng.gen_index(4) as i32,
                shape: TreeShape::Cone,
            }
        } else if roll < 0.85 {
            TreeVariant {
                height: 7 + rng.gen_index(3) as i32,
                shape: TreeShape::Tall,
                ..oak
            }
        } else {
            oak
        }
    }
}

/// Place leaves only where there is air
#[inline]
fn place_leaf(grid: &mut WorldGrid, x: i32, y: i32, leaves: BlockType) {
    if grid.is(x, y, BlockType::Air) {
        grid.set(x, y, leaves);
    }
}

/// Grow a tree whose trunk starts at `(x, base_y)` and rises upward
fn grow_tree<R: WorldRng + ?Sized>(
    grid: &mut WorldGrid,
    x: i32,
    base_y: i32,
    tree: &TreeVariant,
    rng: &mut R,
) {
    for dy in 0..tree.height {
        grid.set(x, base_y - dy, tree.wood);
    }

    let canopy_y = base_y - tree.height + 1;
    match tree.shape {
        TreeShape::Round | TreeShape::Tall => {
            let radius = if tree.shape == TreeShape::Tall { 3 } else { 2 };
            for ly in -radius..=0 {
                for lx in -radius..=radius {
                    let (px, py) = (x + lx, canopy_y + ly);
                    if !grid.is(px, py, BlockType::Air) {
                        continue;
                    }
                    // Manhattan blob with ragged edges
                    let dist = lx.abs() + ly.abs();
                    if dist <= radius + 1 && (rng.gen_f64() > 0.1 || dist < radius) {
                        grid.set(px, py, tree.leaves);
                    }
                }
            }
        }
        TreeShape::Cone => {
            for ly in -2..=1 {
                let half_width = (3 - (ly + 2)).max(1);
                for lx in -half_width..=half_width {
                    place_leaf(grid, x + lx, canopy_y + ly, tree.leaves);
                }
            }
            place_leaf(grid, x, canopy_y - 2, tree.leaves);
        }
    }
}

/// Decorate column `x` whose terrain starts at row `surface`
///
/// Returns the block that was planted, if any.
pub fn decorate_column<R: WorldRng + ?Sized>(
    grid: &mut WorldGrid,
    x: i32,
    surface: i32,
    biome: Biome,
    preset: &TerrainPreset,
    vegetation: &VegetationParams,
    rng: &mut R,
) -> Option<BlockType> {
    let margin = vegetation.edge_margin as i32;
    let interior = x > margin && x < grid.width() as i32 - margin;
    // Row just above the terrain
    let above = surface - 1;

    if interior && rng.check_probability(preset.tree_chance) {
        let grounded = above >= 0 && grid.get(x, surface).is_some_and(|b| !b.is_air());
        if !grounded {
            return None;
        }

        if biome == Biome::Desert {
            let height = 2 + rng.gen_index(2) as i32;
            for dy in 0..height {
                grid.set(x, above - dy, BlockType::Cactus);
            }
            return Some(BlockType::Cactus);
        }

        if biome == Biome::Mountains && !rng.check_probability(vegetation.mountain_tree_survival) {
            return None;
        }

        let tree = TreeVariant::roll(biome, rng);
        grow_tree(grid, x, above, &tree, rng);
        Some(tree.wood)
    } else if biome == Biome::Plains && rng.check_probability(vegetation.flower_chance) {
        if above >= 0 && grid.is(x, above, BlockType::Air) {
            grid.set(x, above, BlockType::Flower);
            Some(BlockType::Flower)
        } else {
            None
        }
    } else {
        None
    }
}
