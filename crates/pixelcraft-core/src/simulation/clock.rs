//! Day/night cycle

use serde::{Deserialize, Serialize};

/// Ticks in one full day
pub const DAY_LENGTH: u32 = 24_000;
/// A new world starts in the morning
pub const START_TICK: u32 = 6_000;
/// Night falls at this tick
pub const DUSK_TICK: u32 = 13_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayClock {
    tick: u32,
}

impl Default for DayClock {
    fn default() -> Self {
        Self { tick: START_TICK }
    }
}

impl DayClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(tick: u32) -> Self {
        Self {
            tick: tick % DAY_LENGTH,
        }
    }

    pub fn tick(&self) -> u32 {
        self.tick
    }

    pub fn advance(&mut self, ticks: u32) {
        self.tick = ((self.tick as u64 + ticks as u64) % DAY_LENGTH as u64) as u32;
    }

    pub fn is_day(&self) -> bool {
        self.tick > 0 && self.tick < DUSK_TICK
    }

    /// Fraction of the day elapsed, 0.0 - 1.0
    pub fn phase(&self) -> f32 {
        self.tick as f32 / DAY_LENGTH as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_in_the_morning() {
        let clock = DayClock::new();
        assert_eq!(clock.tick(), 6_000);
        assert!(clock.is_day());
        assert_eq!(clock.phase(), 0.25);
    }

    #[test]
    fn test_wraps_at_midnight() {
        let mut clock = DayClock::at(23_999);
        clock.advance(1);
        assert_eq!(clock.tick(), 0);
        assert!(!clock.is_day());
        clock.advance(DAY_LENGTH * 3 + 5);
        assert_eq!(clock.tick(), 5);
    }

    #[test]
    fn test_day_night_boundary() {
        assert!(DayClock::at(12_999).is_day());
        assert!(!DayClock::at(13_000).is_day());
        assert!(!DayClock::at(20_000).is_day());
    }
}
