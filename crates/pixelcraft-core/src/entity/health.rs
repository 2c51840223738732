use pixelcraft_blocks::BlockType;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MAX_HEALTH: u32 = 20;
pub const MAX_HUNGER: u32 = 20;

/// Hunger restored by eating a food item
pub fn food_value(block: BlockType) -> Option<u32> {
    match block {
        BlockType::Beef => Some(4),
        _ => None,
    }
}

/// Timings for hunger decay and health regeneration (milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VitalsParams {
    /// One hunger point lost per interval; at zero hunger, one health point instead (default: 60000)
    pub hunger_decay_ms: f32,
    /// Time since the last hit before health regenerates (default: 5000)
    pub regen_cooldown_ms: f32,
    /// One health point regained per interval (default: 4000)
    pub regen_interval_ms: f32,
}

impl Default for VitalsParams {
    fn default() -> Self {
        Self {
            hunger_decay_ms: 60_000.0,
            regen_cooldown_ms: 5_000.0,
            regen_interval_ms: 4_000.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum VitalsParamsError {
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f32 },
    #[error("regen_cooldown_ms must not be negative, got {0}")]
    NegativeCooldown(f32),
}

impl VitalsParams {
    /// Intervals must be positive; a zero cooldown means instant regeneration
    pub fn validate(&self) -> Result<(), VitalsParamsError> {
        for (field, value) in [
            ("hunger_decay_ms", self.hunger_decay_ms),
            ("regen_interval_ms", self.regen_interval_ms),
        ] {
            if value.is_nan() || value <= 0.0 {
                return Err(VitalsParamsError::NotPositive { field, value });
            }
        }
        if self.regen_cooldown_ms.is_nan() || self.regen_cooldown_ms < 0.0 {
            return Err(VitalsParamsError::NegativeCooldown(self.regen_cooldown_ms));
        }
        Ok(())
    }
}

/// Player health and hunger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vitals {
    health: u32,
    hunger: u32,
    hunger_timer_ms: f32,
    since_damage_ms: f32,
    regen_timer_ms: f32,
}

impl Default for Vitals {
    fn default() -> Self {
        Self::new()
    }
}

impl Vitals {
    pub fn new() -> Self {
        Vitals {
            health: MAX_HEALTH,
            hunger: MAX_HUNGER,
            hunger_timer_ms: 0.0,
            since_damage_ms: 0.0,
            regen_timer_ms: 0.0,
        }
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn hunger(&self) -> u32 {
        self.hunger
    }

    pub fn is_dead(&self) -> bool {
        self.health == 0
    }

    /// Deal damage. Returns true if this killed the player.
    pub fn take_damage(&mut self, amount: u32) -> bool {
        self.health = self.health.saturating_sub(amount);
        self.since_damage_ms = 0.0;
        self.regen_timer_ms = 0.0;
        self.is_dead()
    }

    /// Eat a food item, returns false for anything inedible
    pub fn eat(&mut self, block: BlockType) -> bool {
        match food_value(block) {
            Some(restore) => {
                self.hunger = (self.hunger + restore).min(MAX_HUNGER);
                true
            }
            None => false,
        }
    }

    /// Advance hunger decay, starvation and regeneration by `dt_ms`
    ///
    /// A non-positive interval disables that process.
    pub fn update(&mut self, dt_ms: f32, params: &VitalsParams) {
        if self.is_dead() {
            return;
        }

        self.hunger_timer_ms += dt_ms;
        while params.hunger_decay_ms > 0.0 && self.hunger_timer_ms >= params.hunger_decay_ms {
            self.hunger_timer_ms -= params.hunger_decay_ms;
            if self.hunger > 0 {
                self.hunger -= 1;
            } else if self.take_damage(1) {
                log::debug!("Player starved");
                return;
            }
        }

        self.since_damage_ms += dt_ms;
        let can_regen = self.since_damage_ms >= params.regen_cooldown_ms
            && self.hunger > 0
            && self.health < MAX_HEALTH;
        if !can_regen {
            self.regen_timer_ms = 0.0;
            return;
        }

        self.regen_timer_ms += dt_ms;
        while params.regen_interval_ms > 0.0
            && self.regen_timer_ms >= params.regen_interval_ms
            && self.health < MAX_HEALTH
        {
            self.regen_timer_ms -= params.regen_interval_ms;
            self.health += 1;
        }
    }
}
