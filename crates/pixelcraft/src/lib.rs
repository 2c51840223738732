//! # PixelCraft - headless driver
//!
//! Loads configuration, generates a world, fetches its lore in the background
//! and runs the session loop.

pub mod app;
pub mod config;
pub mod lore;

// Re-export core modules for convenience
pub use pixelcraft_core::blocks;
pub use pixelcraft_core::entity;
pub use pixelcraft_core::simulation;
pub use pixelcraft_core::world;

pub use app::{RunOptions, RunSummary, run};
pub use config::GameConfig;
