//! Block data for PixelCraft
//!
//! This crate provides the immutable, process-wide block table:
//! - Block codes and metadata (BlockType, BlockDef, Blocks)
//! - Tool categories and tiers (ToolKind, ToolTier)
//! - Smelting recipes and fuel values (smelt_result, FuelKind)

mod blocks;
mod smelting;
mod tools;

pub use blocks::{BlockDef, BlockType, Blocks, DEFAULT_STACK_SIZE};
pub use smelting::{FuelKind, smelt_result};
pub use tools::{ToolKind, ToolTier};
