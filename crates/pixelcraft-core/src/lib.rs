pub mod entity;
pub mod session;
pub mod simulation;
pub mod world;

// Re-export the block table so callers only need one dependency
pub mod blocks {
    pub use pixelcraft_blocks::*;
}

pub use session::{GameSession, SessionConfig, WorldInfo};
