//! Game session - one world, one player, and everything that ticks

use crate::entity::{
    CraftError, InputState, PhysicsParams, Player, PlayerPhysics, RecipeBook, VitalsParams,
};
use crate::simulation::{DayClock, FurnaceTimings, Furnaces, MiningProgress, mining_time_ms};
use crate::world::{Biome, WorldGenConfig, WorldGenerator, WorldGrid, WorldRng, classify_biome};
use glam::IVec2;
use pixelcraft_blocks::BlockType;
use serde::{Deserialize, Serialize};

/// Length of one physics frame / clock tick
pub const FRAME_MS: f32 = 1000.0 / 60.0;

/// World name and flavour text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldInfo {
    pub name: String,
    pub lore: String,
}

impl WorldInfo {
    /// Shown until the lore service answers
    pub fn placeholder() -> Self {
        Self {
            name: "PixelCraft".to_string(),
            lore: String::new(),
        }
    }

    /// Used whenever the lore service fails
    pub fn fallback() -> Self {
        Self {
            name: "The Forgotten Realm".to_string(),
            lore: "A land of shifting shadows and eternal echoes.".to_string(),
        }
    }
}

/// Everything a session needs besides the seed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionConfig {
    pub worldgen: WorldGenConfig,
    pub furnace: FurnaceTimings,
    pub physics: PhysicsParams,
    pub vitals: VitalsParams,
}

pub struct GameSession {
    seed: f64,
    config: SessionConfig,
    grid: WorldGrid,
    player: Player,
    furnaces: Furnaces,
    clock: DayClock,
    info: WorldInfo,
    recipes: RecipeBook,
    mining: MiningProgress,
    frame_accumulator_ms: f32,
}

impl GameSession {
    /// Generate a world for `seed` and drop a fresh player into it
    pub fn new(seed: f64, config: SessionConfig) -> Self {
        let grid = WorldGenerator::from_config(seed, config.worldgen.clone()).generate();
        Self::from_grid(seed, config, grid)
    }

    /// Like [`GameSession::new`] with an explicit decoration RNG
    pub fn with_rng<R: WorldRng + ?Sized>(seed: f64, config: SessionConfig, rng: &mut R) -> Self {
        let grid = WorldGenerator::from_config(seed, config.worldgen.clone()).generate_with_rng(rng);
        Self::from_grid(seed, config, grid)
    }

    /// Start a session on an existing grid
    pub fn from_grid(seed: f64, config: SessionConfig, grid: WorldGrid) -> Self {
        let player = Player::spawn(&grid, config.physics.tile_size);
        log::info!(
            "New session (seed {}), player spawned at {:?}",
            seed,
            player.position
        );

        Self {
            seed,
            config,
            grid,
            player,
            furnaces: Furnaces::new(),
            clock: DayClock::new(),
            info: WorldInfo::placeholder(),
            recipes: RecipeBook::default(),
            mining: MiningProgress::new(),
            frame_accumulator_ms: 0.0,
        }
    }

    pub fn seed(&self) -> f64 {
        self.seed
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn grid(&self) -> &WorldGrid {
        &self.grid
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn furnaces(&self) -> &Furnaces {
        &self.furnaces
    }

    pub fn furnaces_mut(&mut self) -> &mut Furnaces {
        &mut self.furnaces
    }

    pub fn clock(&self) -> &DayClock {
        &self.clock
    }

    pub fn world_info(&self) -> &WorldInfo {
        &self.info
    }

    pub fn recipes(&self) -> &RecipeBook {
        &self.recipes
    }

    pub fn set_world_info(&mut self, info: WorldInfo) {
        log::info!("World is now known as '{}'", info.name);
        self.info = info;
    }

    /// Advance the session by `dt_ms`
    ///
    /// Physics and the day clock run in fixed frames; vitals and furnaces take
    /// the elapsed time directly.
    pub fn update(&mut self, dt_ms: f32, input: &InputState) {
        self.frame_accumulator_ms += dt_ms;
        let mut frames = 0;
        while self.frame_accumulator_ms >= FRAME_MS {
            self.frame_accumulator_ms -= FRAME_MS;
            PlayerPhysics::step(&mut self.player, input, &self.grid, &self.config.physics);
            frames += 1;
        }
        self.clock.advance(frames);

        self.player.vitals.update(dt_ms, &self.config.vitals);
        self.furnaces.tick_all(dt_ms, &self.config.furnace);
    }

    /// Biome under the player, for ambience
    pub fn biome_at_player(&self) -> Biome {
        let tile = self.player.tile(self.config.physics.tile_size);
        classify_biome(tile.x, self.seed, &self.config.worldgen.biomes.noise)
    }

    /// Remove the block at `pos` into the player's inventory
    ///
    /// The held tool wears if it suits the block. Breaking a furnace also
    /// returns its contents. Returns the block that was removed.
    pub fn break_block(&mut self, pos: IVec2) -> Option<BlockType> {
        let block = self.grid.get(pos.x, pos.y).filter(|b| !b.is_air())?;
        self.grid.set(pos.x, pos.y, BlockType::Air);

        let held = self.player.inventory.selected().block();
        if let (Some(wanted), Some((kind, _))) = (block.def().tool_kind, held.tool()) {
            if wanted == kind {
                self.player.wear.wear(held, &mut self.player.inventory);
            }
        }

        let mut drops = vec![(block, 1)];
        if block == BlockType::Furnace {
            drops.extend(
                self.furnaces
                    .remove(pos)
                    .into_iter()
                    .map(|slot| (slot.block(), slot.count())),
            );
        }
        for (drop, count) in drops {
            let leftover = self.player.inventory.add_item(drop, count);
            if leftover > 0 {
                log::debug!("Inventory full, lost {} {:?}", leftover, drop);
            }
        }

        Some(block)
    }

    /// Keep mining `pos` for `dt_ms`, breaking it once done
    pub fn mine(&mut self, pos: IVec2, dt_ms: f32) -> Option<BlockType> {
        if self.mining.target != Some(pos) {
            let block = self.grid.get(pos.x, pos.y)?;
            let held = self.player.inventory.selected().block();
            let Some(required) = mining_time_ms(block, held) else {
                self.mining.reset();
                return None;
            };
            self.mining.start(pos, required);
        }

        self.mining.update(dt_ms)?;
        self.break_block(pos)
    }

    pub fn mining(&self) -> &MiningProgress {
        &self.mining
    }

    /// Place the selected hotbar block at an empty tile
    pub fn place_selected(&mut self, pos: IVec2) -> bool {
        let selected = self.player.inventory.selected();
        let block = selected.block();
        let placeable = !selected.is_empty() && block.tool().is_none() && !block.def().food;
        if !placeable || !self.grid.is(pos.x, pos.y, BlockType::Air) {
            return false;
        }

        let index = self.player.inventory.selected_index();
        if let Some(slot) = self.player.inventory.slot_mut(index) {
            slot.take(1);
        }
        self.grid.set(pos.x, pos.y, block);
        if block == BlockType::Furnace {
            self.furnaces.place(pos);
        }
        true
    }

    pub fn craft(&mut self, result: BlockType) -> Result<u32, CraftError> {
        self.recipes
            .craft(result, &mut self.player.inventory, &mut self.player.wear)
    }

    /// Eat the selected hotbar item if it is food
    pub fn eat_selected(&mut self) -> bool {
        let index = self.player.inventory.selected_index();
        let block = self.player.inventory.selected().block();
        if !self.player.vitals.eat(block) {
            return false;
        }
        if let Some(slot) = self.player.inventory.slot_mut(index) {
            slot.take(1);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::FurnaceSlot;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256StarStar;

    fn small_session() -> GameSession {
        let config = SessionConfig {
            worldgen: WorldGenConfig::with_size(64, 48),
            ..Default::default()
        };
        GameSession::with_rng(42.0, config, &mut Xoshiro256StarStar::seed_from_u64(1))
    }

    /// Flat stone world, handy for interaction tests
    fn flat_session() -> GameSession {
        let mut grid = WorldGrid::new(20, 20);
        for y in 10..20 {
            for x in 0..20 {
                grid.set(x, y, BlockType::Stone);
            }
        }
        GameSession::from_grid(1.0, SessionConfig::default(), grid)
    }

    #[test]
    fn test_new_session() {
        let session = small_session();
        assert_eq!(session.grid().width(), 64);
        assert_eq!(session.world_info(), &WorldInfo::placeholder());
        assert_eq!(session.clock().tick(), 6_000);
        assert_eq!(session.player().inventory.count_of(BlockType::Dirt), 10);
        assert!(session.furnaces().is_empty());
    }

    #[test]
    fn test_update_settles_player_and_advances_clock() {
        let mut session = small_session();
        for _ in 0..120 {
            session.update(FRAME_MS, &InputState::new());
        }
        assert!(session.player().grounded);
        assert!(session.clock().tick() > 6_000);
    }

    #[test]
    fn test_set_world_info() {
        let mut session = small_session();
        session.set_world_info(WorldInfo::fallback());
        assert_eq!(session.world_info().name, "The Forgotten Realm");
    }

    #[test]
    fn test_break_block_collects_and_wears_tool() {
        let mut session = flat_session();
        let pos = IVec2::new(3, 10);
        // Hotbar slot 0 holds the wooden pickaxe
        assert_eq!(
            session.player().inventory.selected().block(),
            BlockType::PickaxeWood
        );

        assert_eq!(session.break_block(pos), Some(BlockType::Stone));
        assert!(session.grid().is(3, 10, BlockType::Air));
        assert_eq!(session.player().inventory.count_of(BlockType::Stone), 1);
        assert_eq!(
            session.player().wear.remaining(BlockType::PickaxeWood),
            Some(59)
        );
        assert_eq!(session.break_block(pos), None);
    }

    #[test]
    fn test_mine_takes_time() {
        let mut session = flat_session();
        let pos = IVec2::new(5, 10);
        // Stone with a wooden pickaxe: 600ms
        assert_eq!(session.mine(pos, 300.0), None);
        assert!(session.mining().is_mining());
        assert_eq!(session.mine(pos, 300.0), Some(BlockType::Stone));
        assert!(!session.mining().is_mining());
    }

    #[test]
    fn test_place_and_break_furnace() {
        let mut session = flat_session();
        session.player_mut().inventory.add_item(BlockType::Stone, 8);
        assert_eq!(session.craft(BlockType::Furnace), Ok(1));

        let index = session
            .player()
            .inventory
            .slots()
            .iter()
            .position(|s| s.block() == BlockType::Furnace)
            .unwrap();
        session.player_mut().inventory.select(index);
        let pos = IVec2::new(4, 9);
        assert!(session.place_selected(pos));
        assert!(session.grid().is(4, 9, BlockType::Furnace));
        assert!(session.furnaces().get(pos).is_some());

        session.player_mut().inventory.add_item(BlockType::Iron, 3);
        let iron = session
            .player()
            .inventory
            .slots()
            .iter()
            .position(|s| s.block() == BlockType::Iron)
            .unwrap();
        let GameSession {
            player, furnaces, ..
        } = &mut session;
        let furnace = furnaces.get_mut(pos).unwrap();
        assert_eq!(furnace.deposit_from_inventory(&mut player.inventory, iron), 3);
        assert_eq!(furnace.slot(FurnaceSlot::Input).count(), 3);

        assert_eq!(session.break_block(pos), Some(BlockType::Furnace));
        assert!(session.furnaces().is_empty());
        assert_eq!(session.player().inventory.count_of(BlockType::Iron), 3);
        assert_eq!(session.player().inventory.count_of(BlockType::Furnace), 1);
    }

    #[test]
    fn test_cannot_place_tools_or_into_solid() {
        let mut session = flat_session();
        // Slot 0 is the pickaxe
        assert!(!session.place_selected(IVec2::new(2, 5)));
        // Slot 2 is dirt
        session.player_mut().inventory.select(2);
        assert!(!session.place_selected(IVec2::new(2, 12)));
        assert!(session.place_selected(IVec2::new(2, 5)));
        assert_eq!(session.player().inventory.count_of(BlockType::Dirt), 9);
    }

    #[test]
    fn test_eat_selected() {
        let mut session = flat_session();
        assert!(!session.eat_selected());
        session.player_mut().inventory.add_item(BlockType::Beef, 2);
        session.player_mut().inventory.select(3);
        assert!(session.eat_selected());
        assert_eq!(session.player().inventory.count_of(BlockType::Beef), 1);
    }

    #[test]
    fn test_biome_at_player_matches_classifier() {
        let session = small_session();
        let tile = session.player().tile(32.0);
        assert_eq!(
            session.biome_at_player(),
            crate::world::get_biome_at(tile.x, 42.0)
        );
    }
}
