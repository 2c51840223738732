//! Player state, spawning and tile physics

use crate::entity::input::InputState;
use crate::entity::inventory::Inventory;
use crate::entity::tools::ToolWear;
use crate::entity::health::Vitals;
use crate::world::WorldGrid;
use glam::{IVec2, Vec2};
use pixelcraft_blocks::{BlockType, Blocks};
use serde::{Deserialize, Serialize};

/// Movement constants, applied once per physics frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicsParams {
    /// Added to vertical velocity every frame (default: 0.4)
    pub gravity: f32,
    /// Vertical velocity set by a jump, negative is up (default: -8.2)
    pub jump_force: f32,
    /// Horizontal speed cap (default: 4.0)
    pub move_speed: f32,
    /// Horizontal velocity multiplier per frame (default: 0.82)
    pub friction: f32,
    /// Horizontal velocity added per frame while a direction is held (default: 0.5)
    pub acceleration: f32,
    /// World units per tile (default: 32)
    pub tile_size: f32,
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self {
            gravity: 0.4,
            jump_force: -8.2,
            move_speed: 4.0,
            friction: 0.82,
            acceleration: 0.5,
            tile_size: 32.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner in world units
    pub position: Vec2,
    pub velocity: Vec2,
    pub grounded: bool,
    pub inventory: Inventory,
    pub wear: ToolWear,
    pub vitals: Vitals,
}

impl Player {
    pub const WIDTH: f32 = 20.0;
    pub const HEIGHT: f32 = 32.0;

    /// Player at `position` with an empty inventory
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            grounded: false,
            inventory: Inventory::new(),
            wear: ToolWear::new(),
            vitals: Vitals::new(),
        }
    }

    /// Fresh player at the spawn point carrying the starter kit
    pub fn spawn(grid: &WorldGrid, tile_size: f32) -> Self {
        let mut player = Self::new(spawn_point(grid, tile_size));
        for (block, count) in [
            (BlockType::PickaxeWood, 1),
            (BlockType::AxeWood, 1),
            (BlockType::Dirt, 10),
        ] {
            player.inventory.add_item(block, count);
            player.wear.register(block);
        }
        player
    }

    pub fn center(&self) -> Vec2 {
        self.position + Vec2::new(Self::WIDTH, Self::HEIGHT) * 0.5
    }

    /// Tile containing the player's center
    pub fn tile(&self, tile_size: f32) -> IVec2 {
        (self.center() / tile_size).floor().as_ivec2()
    }
}

/// Column `width / 2`, two tiles above its first non-air cell
///
/// Falls back to the top of the world for an empty column.
pub fn spawn_point(grid: &WorldGrid, tile_size: f32) -> Vec2 {
    let column = (grid.width() / 2) as i32;
    let row = grid
        .column_surface(column)
        .map(|surface| surface as i32 - 2)
        .unwrap_or(0);
    Vec2::new(column as f32 * tile_size, row as f32 * tile_size)
}

/// Tile-grid physics for the player
pub struct PlayerPhysics;

impl PlayerPhysics {
    /// Advance one physics frame
    ///
    /// Gravity and input update the velocity, then each axis is moved and
    /// pushed back out of any solid tile it entered. Tiles outside the world
    /// are solid, except above the top row.
    pub fn step(player: &mut Player, input: &InputState, grid: &WorldGrid, params: &PhysicsParams) {
        let mut velocity = player.velocity;
        velocity.y += params.gravity;

        velocity.x += input.horizontal() as f32 * params.acceleration;
        velocity.x *= params.friction;
        if velocity.x.abs() < 0.1 {
            velocity.x = 0.0;
        }
        velocity.x = velocity.x.clamp(-params.move_speed, params.move_speed);

        if input.jump && player.grounded {
            velocity.y = params.jump_force;
            log::trace!("Player jumped at {:?}", player.position);
        }

        let tile = params.tile_size;
        let mut position = player.position;

        // Horizontal
        position.x += velocity.x;
        if velocity.x != 0.0 {
            let hits = solid_tiles(grid, position, tile);
            if velocity.x > 0.0 {
                if let Some(col) = hits.iter().map(|t| t.x).min() {
                    position.x = col as f32 * tile - Player::WIDTH;
                    velocity.x = 0.0;
                }
            } else if let Some(col) = hits.iter().map(|t| t.x).max() {
                position.x = (col + 1) as f32 * tile;
                velocity.x = 0.0;
            }
        }

        // Vertical
        let mut grounded = false;
        position.y += velocity.y;
        if velocity.y != 0.0 {
            let hits = solid_tiles(grid, position, tile);
            if velocity.y > 0.0 {
                if let Some(row) = hits.iter().map(|t| t.y).min() {
                    position.y = row as f32 * tile - Player::HEIGHT;
                    velocity.y = 0.0;
                    grounded = true;
                }
            } else if let Some(row) = hits.iter().map(|t| t.y).max() {
                position.y = (row + 1) as f32 * tile;
                velocity.y = 0.0;
            }
        }

        player.position = position;
        player.velocity = velocity;
        player.grounded = grounded;
    }
}

/// Solid tiles overlapped by the player's box at `position`
fn solid_tiles(grid: &WorldGrid, position: Vec2, tile: f32) -> Vec<IVec2> {
    let blocks = Blocks::shared();
    let left = (position.x / tile).floor() as i32;
    let right = ((position.x + Player::WIDTH - 0.1) / tile).floor() as i32;
    let top = (position.y / tile).floor() as i32;
    let bottom = ((position.y + Player::HEIGHT - 0.1) / tile).floor() as i32;

    let mut hits = Vec::new();
    for y in top..=bottom {
        for x in left..=right {
            let solid = match grid.get(x, y) {
                Some(block) => blocks.is_solid(block),
                None => y >= 0,
            };
            if solid {
                hits.push(IVec2::new(x, y));
            }
        }
    }
    hits
}
