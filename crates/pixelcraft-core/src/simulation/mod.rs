//! Timed game systems: smelting, mining and the day cycle

pub mod clock;
pub mod furnace;
pub mod mining;

pub use clock::{DAY_LENGTH, DayClock};
pub use furnace::{
    FurnacePatch, FurnaceSlot, FurnaceState, FurnaceTimings, FurnaceTimingsError, Furnaces,
};
pub use mining::{MiningProgress, mining_time_ms};
