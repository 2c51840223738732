//! Furnace smelting state machine
//!
//! A furnace is Idle (not burning, no fuel left), Burning (consuming fuel and
//! accumulating progress) or Blocked (it could smelt, but the output slot
//! cannot take the result, so nothing moves). The state is implicit in the
//! fields. Every change goes through [`FurnaceState::apply`], either as a
//! patch computed by [`FurnaceState::step`] or from a player action.

use crate::entity::inventory::{Inventory, Slot};
use glam::IVec2;
use pixelcraft_blocks::{BlockType, FuelKind, smelt_result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Smelt and burn durations in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FurnaceTimings {
    /// Time to smelt one item (default: 4000)
    pub smelt_ms: f32,
    /// Burn time of one coal (default: 16000)
    pub coal_ms: f32,
    /// Burn time of one log or plank (default: 4000)
    pub wood_ms: f32,
}

impl Default for FurnaceTimings {
    fn default() -> Self {
        Self {
            smelt_ms: 4_000.0,
            coal_ms: 16_000.0,
            wood_ms: 4_000.0,
        }
    }
}

/// A furnace duration that cannot drive the state machine
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("furnace {field} must be positive, got {value}")]
pub struct FurnaceTimingsError {
    pub field: &'static str,
    pub value: f32,
}

impl FurnaceTimings {
    pub fn burn_time(&self, fuel: FuelKind) -> f32 {
        match fuel {
            FuelKind::Coal => self.coal_ms,
            FuelKind::Wood => self.wood_ms,
        }
    }

    pub fn validate(&self) -> Result<(), FurnaceTimingsError> {
        for (field, value) in [
            ("smelt_ms", self.smelt_ms),
            ("coal_ms", self.coal_ms),
            ("wood_ms", self.wood_ms),
        ] {
            if value.is_nan() || value <= 0.0 {
                return Err(FurnaceTimingsError { field, value });
            }
        }
        Ok(())
    }
}

/// Partial update to a furnace; `None` fields are left as they are
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FurnacePatch {
    pub input: Option<Slot>,
    pub fuel: Option<Slot>,
    pub output: Option<Slot>,
    pub smelt_progress: Option<f32>,
    pub fuel_left: Option<f32>,
    pub is_burning: Option<bool>,
    pub burn_ms: Option<f32>,
}

impl FurnacePatch {
    pub fn is_empty(&self) -> bool {
        *self == FurnacePatch::default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FurnaceSlot {
    Input,
    Fuel,
    Output,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FurnaceState {
    input: Slot,
    fuel: Slot,
    output: Slot,
    /// 0..=100
    smelt_progress: f32,
    /// Remaining burn of the current fuel item, 100 down to 0
    fuel_left: f32,
    is_burning: bool,
    /// Burn time of the fuel item currently in the fire
    burn_ms: f32,
}

impl Default for FurnaceState {
    fn default() -> Self {
        Self {
            input: Slot::EMPTY,
            fuel: Slot::EMPTY,
            output: Slot::EMPTY,
            smelt_progress: 0.0,
            fuel_left: 0.0,
            is_burning: false,
            burn_ms: 0.0,
        }
    }
}

impl FurnaceState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> Slot {
        self.input
    }

    pub fn fuel(&self) -> Slot {
        self.fuel
    }

    pub fn output(&self) -> Slot {
        self.output
    }

    pub fn slot(&self, which: FurnaceSlot) -> Slot {
        match which {
            FurnaceSlot::Input => self.input,
            FurnaceSlot::Fuel => self.fuel,
            FurnaceSlot::Output => self.output,
        }
    }

    pub fn smelt_progress(&self) -> f32 {
        self.smelt_progress
    }

    pub fn fuel_left(&self) -> f32 {
        self.fuel_left
    }

    pub fn is_burning(&self) -> bool {
        self.is_burning
    }

    /// What the input will turn into, if the output slot has room for it
    fn smeltable_result(&self) -> Option<BlockType> {
        smelt_result(self.input.block()).filter(|&out| self.output.can_accept(out, 1))
    }

    /// Output is full (or holds something else) while there is input to smelt
    pub fn is_blocked(&self) -> bool {
        smelt_result(self.input.block()).is_some() && self.smeltable_result().is_none()
    }

    /// Apply a patch, restoring the range invariants
    ///
    /// Progress and fuel are clamped to 0..=100. A furnace only stays burning
    /// with fuel left, smeltable input and room in the output. This is the
    /// only way the state changes.
    pub fn apply(&mut self, patch: FurnacePatch) {
        if let Some(input) = patch.input {
            self.input = input;
        }
        if let Some(fuel) = patch.fuel {
            self.fuel = fuel;
        }
        if let Some(output) = patch.output {
            self.output = output;
        }
        if let Some(progress) = patch.smelt_progress {
            self.smelt_progress = progress.clamp(0.0, 100.0);
        }
        if let Some(fuel_left) = patch.fuel_left {
            self.fuel_left = fuel_left.clamp(0.0, 100.0);
        }
        if let Some(is_burning) = patch.is_burning {
            self.is_burning = is_burning;
        }
        if let Some(burn_ms) = patch.burn_ms {
            self.burn_ms = burn_ms.max(0.0);
        }

        if self.fuel_left <= 0.0 || self.smeltable_result().is_none() {
            self.is_burning = false;
        }
    }

    /// Compute the effect of `dt_ms` of smelting without changing anything
    pub fn step(&self, dt_ms: f32, timings: &FurnaceTimings) -> FurnacePatch {
        let mut next = self.clone();

        if next.input.is_empty() {
            next.smelt_progress = 0.0;
        }

        let result = next.smeltable_result();

        // Light a new fuel item once the current one is spent
        if next.fuel_left <= 0.0 && result.is_some() {
            if let Some(kind) = FuelKind::of(next.fuel.block()) {
                next.fuel.take(1);
                next.fuel_left = 100.0;
                next.burn_ms = timings.burn_time(kind);
                log::debug!("Furnace ignited {:?} ({}ms)", kind, next.burn_ms);
            }
        }

        match result {
            Some(out) if next.fuel_left > 0.0 => {
                next.is_burning = true;
                let burn = if next.burn_ms > 0.0 {
                    dt_ms / next.burn_ms * 100.0
                } else {
                    f32::INFINITY
                };
                // Share of dt_ms the remaining fuel actually covers
                let lit = if burn > next.fuel_left {
                    next.fuel_left / burn
                } else {
                    1.0
                };
                next.fuel_left = (next.fuel_left - burn).max(0.0);
                next.smelt_progress =
                    (next.smelt_progress + dt_ms / timings.smelt_ms * 100.0 * lit).min(100.0);

                if next.smelt_progress >= 100.0 {
                    next.input.take(1);
                    next.output.add(out, 1);
                    next.smelt_progress = 0.0;
                    log::debug!(
                        "Furnace produced {} ({} in output)",
                        out.def().name,
                        next.output.count()
                    );
                }
            }
            _ => {
                if self.is_burning && self.is_blocked() {
                    log::debug!("Furnace blocked: output slot holds {:?}", self.output);
                }
                next.is_burning = false;
            }
        }

        // The last input item or the final output space may have just gone
        if next.fuel_left <= 0.0 || next.smeltable_result().is_none() {
            next.is_burning = false;
        }

        self.diff(&next)
    }

    /// Advance the furnace by `dt_ms`
    pub fn tick(&mut self, dt_ms: f32, timings: &FurnaceTimings) {
        let patch = self.step(dt_ms, timings);
        self.apply(patch);
    }

    fn diff(&self, next: &FurnaceState) -> FurnacePatch {
        fn changed<T: PartialEq + Copy>(old: T, new: T) -> Option<T> {
            (old != new).then_some(new)
        }

        FurnacePatch {
            input: changed(self.input, next.input),
            fuel: changed(self.fuel, next.fuel),
            output: changed(self.output, next.output),
            smelt_progress: changed(self.smelt_progress, next.smelt_progress),
            fuel_left: changed(self.fuel_left, next.fuel_left),
            is_burning: changed(self.is_burning, next.is_burning),
            burn_ms: changed(self.burn_ms, next.burn_ms),
        }
    }

    /// Move an inventory stack into the input (smeltables) or fuel slot
    ///
    /// Moves as much as fits. Anything that is neither smeltable nor fuel, or
    /// a slot holding a different block, makes this a no-op. Returns the
    /// number of items moved.
    pub fn deposit_from_inventory(&mut self, inventory: &mut Inventory, index: usize) -> u32 {
        let Some(source) = inventory.slot_mut(index) else {
            return 0;
        };
        let block = source.block();

        let (which, current) = if smelt_result(block).is_some() {
            (FurnaceSlot::Input, self.input)
        } else if FuelKind::of(block).is_some() {
            (FurnaceSlot::Fuel, self.fuel)
        } else {
            return 0;
        };

        let moved = source.take(current.space_for(block));
        if moved.is_empty() {
            return 0;
        }

        let mut target = current;
        target.add(block, moved.count());
        self.apply(match which {
            FurnaceSlot::Input => FurnacePatch {
                input: Some(target),
                ..Default::default()
            },
            _ => FurnacePatch {
                fuel: Some(target),
                ..Default::default()
            },
        });
        moved.count()
    }

    /// Move a furnace slot into the inventory; whatever doesn't fit stays
    ///
    /// Returns the number of items moved.
    pub fn withdraw_to_inventory(&mut self, which: FurnaceSlot, inventory: &mut Inventory) -> u32 {
        let slot = self.slot(which);
        if slot.is_empty() {
            return 0;
        }

        let leftover = inventory.add_item(slot.block(), slot.count());
        let remaining = Slot::new(slot.block(), leftover);
        let mut patch = FurnacePatch::default();
        match which {
            FurnaceSlot::Input => patch.input = Some(remaining),
            FurnaceSlot::Fuel => patch.fuel = Some(remaining),
            FurnaceSlot::Output => patch.output = Some(remaining),
        }
        self.apply(patch);
        slot.count() - leftover
    }

    /// Non-empty slots, e.g. to drop when the furnace is broken
    pub fn contents(&self) -> Vec<Slot> {
        [self.input, self.fuel, self.output]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect()
    }
}

/// Every placed furnace, keyed by tile position
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Furnaces {
    states: HashMap<IVec2, FurnaceState>,
}

impl Furnaces {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a furnace at `pos`, keeping any existing state
    pub fn place(&mut self, pos: IVec2) -> &mut FurnaceState {
        self.states.entry(pos).or_default()
    }

    pub fn get(&self, pos: IVec2) -> Option<&FurnaceState> {
        self.states.get(&pos)
    }

    pub fn get_mut(&mut self, pos: IVec2) -> Option<&mut FurnaceState> {
        self.states.get_mut(&pos)
    }

    /// Forget a furnace, returning what was inside it
    pub fn remove(&mut self, pos: IVec2) -> Vec<Slot> {
        self.states
            .remove(&pos)
            .map(|state| state.contents())
            .unwrap_or_default()
    }

    pub fn tick_all(&mut self, dt_ms: f32, timings: &FurnaceTimings) {
        for state in self.states.values_mut() {
            state.tick(dt_ms, timings);
        }
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&IVec2, &FurnaceState)> {
        self.states.iter()
    }
}
