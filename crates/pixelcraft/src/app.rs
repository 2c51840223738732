//! Headless session driver

use crate::config::GameConfig;
use crate::lore::{DisabledLoreSource, HttpLoreSource, LoreRequest};
use anyhow::{Result, ensure};
use pixelcraft_core::blocks::BlockType;
use pixelcraft_core::entity::InputState;
use pixelcraft_core::session::FRAME_MS;
use pixelcraft_core::world::{Biome, WorldGrid, classify_biome};
use pixelcraft_core::{GameSession, WorldInfo};
use rand::Rng;
use std::time::Duration;

/// What to run, usually from the command line
#[derive(Debug, Clone, PartialEq)]
pub struct RunOptions {
    /// Overrides the configured seed
    pub seed: Option<f64>,
    /// Fixed-length update steps to simulate
    pub ticks: usize,
    /// Print the generated world as text
    pub ascii: bool,
    /// Ask the lore service for a world name
    pub lore: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            seed: None,
            ticks: 600,
            ascii: false,
            lore: true,
        }
    }
}

/// Outcome of a headless run
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub seed: f64,
    pub info: WorldInfo,
    /// Columns per biome
    pub biomes: Vec<(Biome, usize)>,
    /// Cells per ore
    pub ores: Vec<(BlockType, usize)>,
    pub ascii: Option<String>,
    pub day_tick: u32,
    pub player_grounded: bool,
}

/// Generate a world, simulate `ticks` frames and report on it
pub fn run(config: &GameConfig, options: &RunOptions) -> Result<RunSummary> {
    ensure!(
        config.world.width > 0 && config.world.height > 0,
        "World must be at least 1x1, got {}x{}",
        config.world.width,
        config.world.height
    );

    let seed = options
        .seed
        .or(config.world.seed)
        .unwrap_or_else(|| (rand::thread_rng().r#gen::<f64>() * 1000.0).floor());
    log::info!("Starting PixelCraft with seed {}", seed);

    let session_config = config.session_config()?;
    let mut session = GameSession::new(seed, session_config);

    // Generation is already done; the lore arrives whenever it arrives
    let mut lore = if options.lore && config.lore.enabled {
        LoreRequest::spawn(HttpLoreSource::from_config(&config.lore))
    } else {
        LoreRequest::spawn(DisabledLoreSource)
    };

    let input = InputState::new();
    for _ in 0..options.ticks {
        if let Some(info) = lore.try_take() {
            session.set_world_info(info);
        }
        session.update(FRAME_MS, &input);
    }
    if !lore.is_done() {
        let timeout = Duration::from_secs(config.lore.timeout_secs);
        if let Some(info) = lore.wait(timeout) {
            session.set_world_info(info);
        }
    }

    let grid = session.grid();
    let summary = RunSummary {
        seed,
        info: session.world_info().clone(),
        biomes: biome_columns(grid, seed, &session),
        ores: [BlockType::Coal, BlockType::Iron, BlockType::DiamondOre]
            .into_iter()
            .map(|ore| (ore, grid.count(ore)))
            .collect(),
        ascii: options.ascii.then(|| render_ascii(grid)),
        day_tick: session.clock().tick(),
        player_grounded: session.player().grounded,
    };

    log::info!("World '{}': {}", summary.info.name, summary.info.lore);
    for (biome, columns) in &summary.biomes {
        log::info!("  {:<10} {} columns", biome.name(), columns);
    }
    for (ore, cells) in &summary.ores {
        log::info!("  {:<10} {} cells", ore.def().name, cells);
    }

    Ok(summary)
}

fn biome_columns(grid: &WorldGrid, seed: f64, session: &GameSession) -> Vec<(Biome, usize)> {
    let noise = &session.config().worldgen.biomes.noise;
    let biomes: Vec<Biome> = (0..grid.width() as i32)
        .map(|x| classify_biome(x, seed, noise))
        .collect();
    Biome::ALL
        .iter()
        .map(|&biome| (biome, biomes.iter().filter(|&&b| b == biome).count()))
        .collect()
}

/// One character per tile
pub fn render_ascii(grid: &WorldGrid) -> String {
    let mut out = String::with_capacity((grid.width() + 1) * grid.height());
    for row in grid.rows() {
        out.extend(row.iter().map(|&block| tile_char(block)));
        out.push('\n');
    }
    out
}

fn tile_char(block: BlockType) -> char {
    match block {
        BlockType::Air => ' ',
        BlockType::Grass => '"',
        BlockType::Dirt => '%',
        BlockType::Stone => '#',
        BlockType::Sand => ':',
        BlockType::Wood | BlockType::WoodBirch | BlockType::WoodSpruce => '|',
        BlockType::Leaves | BlockType::LeavesBirch | BlockType::LeavesSpruce => '*',
        BlockType::Cactus => '!',
        BlockType::Flower => '\'',
        BlockType::Coal => 'c',
        BlockType::Iron => 'i',
        BlockType::DiamondOre => 'D',
        BlockType::Furnace => 'F',
        _ => '?',
    }
}
