//! Ore vein distribution - random-walk clumps embedded in stone

use crate::world::grid::WorldGrid;
use crate::world::rng_trait::WorldRng;
use crate::world::worldgen_config::{OreConfig, WorldParams};
use pixelcraft_blocks::BlockType;
use std::ops::Range;

/// Scatter `count` veins of `block`, each a `size`-step random walk
///
/// Veins start on a random column in the `rows` band. Each step moves both
/// coordinates by -1, 0 or 1 and converts the new cell only if it is stone
/// inside the band; the walk carries on from out-of-band cells regardless.
/// Returns the number of cells converted.
pub fn generate_vein<R: WorldRng + ?Sized>(
    grid: &mut WorldGrid,
    block: BlockType,
    size: u32,
    count: u32,
    rows: Range<usize>,
    rng: &mut R,
) -> usize {
    if rows.is_empty() || grid.width() == 0 {
        log::debug!("Skipping {:?} veins: empty depth band {:?}", block, rows);
        return 0;
    }

    let band = rows.start as i32..rows.end as i32;
    let mut placed = 0;

    for _ in 0..count {
        let mut vx = rng.gen_index(grid.width()) as i32;
        let mut vy = (rng.gen_index(rows.len()) + rows.start) as i32;

        for _ in 0..size {
            let ox = vx + rng.gen_step();
            let oy = vy + rng.gen_step();

            if band.contains(&oy) && grid.is(ox, oy, BlockType::Stone) {
                grid.set(ox, oy, block);
                placed += 1;
            }

            vx = ox;
            vy = oy;
        }
    }

    placed
}

/// Run every configured vein pass in order
///
/// Returns the converted cell count per pass.
pub fn distribute_ores<R: WorldRng + ?Sized>(
    grid: &mut WorldGrid,
    ores: &[OreConfig],
    world: &WorldParams,
    rng: &mut R,
) -> Vec<(BlockType, usize)> {
    ores.iter()
        .map(|ore| {
            let rows = ore.depth.rows(world);
            let placed = generate_vein(grid, ore.block, ore.size, ore.count, rows, rng);
            (ore.block, placed)
        })
        .collect()
}
