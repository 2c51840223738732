//! Game configuration with layered loading
//!
//! Configuration is loaded from multiple sources (lowest to highest priority):
//! 1. Compiled defaults
//! 2. `config.ron` file (if exists)
//! 3. Environment variables prefixed with `PIXELCRAFT_`
//!
//! Example environment variable: `PIXELCRAFT_FURNACE__SMELT_MS=2000`

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use pixelcraft_core::SessionConfig;
use pixelcraft_core::entity::{PhysicsParams, VitalsParams};
use pixelcraft_core::simulation::FurnaceTimings;
use pixelcraft_core::world::WorldGenConfig;
use serde::{Deserialize, Serialize};

/// Main game configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct GameConfig {
    #[serde(default)]
    pub world: WorldConfig,

    #[serde(default)]
    pub furnace: FurnaceTimings,

    #[serde(default)]
    pub player: PlayerConfig,

    #[serde(default)]
    pub vitals: VitalsParams,

    #[serde(default)]
    pub lore: LoreConfig,

    #[serde(default)]
    pub debug: DebugConfig,
}

/// World size and seed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorldConfig {
    pub width: usize,
    pub height: usize,
    /// World units per tile
    pub tile_size: f32,
    /// Fixed seed; a random one is rolled when unset
    #[serde(default)]
    pub seed: Option<f64>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 300,
            height: 128,
            tile_size: 32.0,
            seed: None,
        }
    }
}

/// Player physics, per frame
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayerConfig {
    pub gravity: f32,
    /// Negative is up
    pub jump_force: f32,
    pub move_speed: f32,
    pub friction: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            gravity: 0.4,
            jump_force: -8.2,
            move_speed: 4.0,
            friction: 0.82,
        }
    }
}

/// World name/lore service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoreConfig {
    pub enabled: bool,
    /// Receives a JSON prompt, answers `{"name": ..., "lore": ...}`
    pub endpoint: String,
    /// Environment variable holding the bearer token, if any
    pub api_key_env: String,
    pub timeout_secs: u64,
}

impl Default for LoreConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: "http://127.0.0.1:8787/lore".to_string(),
            api_key_env: "LORE_API_KEY".to_string(),
            timeout_secs: 10,
        }
    }
}

/// Debug/development settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DebugConfig {
    /// Default log filter when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

impl GameConfig {
    /// Load configuration with layered priority:
    /// 1. Compiled defaults (lowest priority)
    /// 2. `config.ron` file (if exists)
    /// 3. Environment variables prefixed with `PIXELCRAFT_` (highest priority)
    pub fn load() -> Result<Self> {
        Self::load_from("config")
    }

    /// Same as [`GameConfig::load`] with a custom config file name (extension optional)
    pub fn load_from(file: &str) -> Result<Self> {
        let builder = Config::builder()
            // Layer 1: Compiled defaults
            .set_default("world.width", 300_i64)?
            .set_default("world.height", 128_i64)?
            .set_default("world.tile_size", 32.0)?
            .set_default("furnace.smelt_ms", 4000.0)?
            .set_default("furnace.coal_ms", 16000.0)?
            .set_default("furnace.wood_ms", 4000.0)?
            .set_default("player.gravity", 0.4)?
            .set_default("player.jump_force", -8.2)?
            .set_default("player.move_speed", 4.0)?
            .set_default("player.friction", 0.82)?
            .set_default("vitals.hunger_decay_ms", 60000.0)?
            .set_default("vitals.regen_cooldown_ms", 5000.0)?
            .set_default("vitals.regen_interval_ms", 4000.0)?
            .set_default("lore.enabled", true)?
            .set_default("lore.endpoint", "http://127.0.0.1:8787/lore")?
            .set_default("lore.api_key_env", "LORE_API_KEY")?
            .set_default("lore.timeout_secs", 10_i64)?
            .set_default("debug.log_level", "info")?
            // Layer 2: Config file (optional, won't error if missing)
            .add_source(
                File::with_name(file)
                    .format(config::FileFormat::Ron)
                    .required(false),
            )
            // Layer 3: Environment variables (PIXELCRAFT_WORLD__WIDTH, etc.)
            .add_source(Environment::with_prefix("PIXELCRAFT").separator("__"));

        let config = builder.build().context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Pretty RON, suitable as a starting `config.ron`
    pub fn to_ron(&self) -> Result<String> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .context("Failed to serialize configuration")
    }

    /// Core session settings derived from this configuration
    ///
    /// Fails when a value would stall or break the simulation.
    pub fn session_config(&self) -> Result<SessionConfig> {
        let session = SessionConfig {
            worldgen: WorldGenConfig::with_size(self.world.width, self.world.height),
            furnace: self.furnace,
            physics: PhysicsParams {
                gravity: self.player.gravity,
                jump_force: self.player.jump_force,
                move_speed: self.player.move_speed,
                friction: self.player.friction,
                tile_size: self.world.tile_size,
                ..Default::default()
            },
            vitals: self.vitals,
        };

        session
            .worldgen
            .validate()
            .context("Invalid world configuration")?;
        session
            .furnace
            .validate()
            .context("Invalid furnace configuration")?;
        session
            .vitals
            .validate()
            .context("Invalid vitals configuration")?;
        Ok(session)
    }
}
