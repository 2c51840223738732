//! Cave carving pass

use crate::world::grid::WorldGrid;
use crate::world::noise::noise_2d;
use crate::world::worldgen_config::CaveParams;
use pixelcraft_blocks::BlockType;

/// Clear stone and dirt wherever the cave noise exceeds the threshold
///
/// Grass, sand, ores and decorations are never touched. Returns the number
/// of cells carved.
pub fn carve_caves(grid: &mut WorldGrid, seed: f64, params: &CaveParams) -> usize {
    if !params.enabled {
        return 0;
    }

    let mut carved = 0;
    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            let carvable = matches!(grid.get(x, y), Some(BlockType::Stone | BlockType::Dirt));
            if !carvable {
                continue;
            }

            let value = noise_2d(x as f64, y as f64, params.frequency, seed + params.seed_offset);
            if value > params.threshold {
                grid.set(x, y, BlockType::Air);
                carved += 1;
            }
        }
    }

    carved
}
