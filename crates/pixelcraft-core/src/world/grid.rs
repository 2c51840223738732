//! WorldGrid - fixed-size tile storage

use pixelcraft_blocks::BlockType;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("tile ({x}, {y}) is outside the {width}x{height} world")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },
}

/// Tile grid of `height` rows by `width` columns, `y` growing downward.
///
/// Cells are stored row-major in one buffer (index = y * width + x), so every
/// cell always holds a block.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldGrid {
    width: usize,
    height: usize,
    cells: Vec<BlockType>,
}

impl WorldGrid {
    /// Create an all-air grid
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![BlockType::Air; width * height],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if self.in_bounds(x, y) {
            Some(y as usize * self.width + x as usize)
        } else {
            None
        }
    }

    /// Block at (x, y), or None outside the world
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<BlockType> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// True if (x, y) is inside the world and holds `block`
    #[inline]
    pub fn is(&self, x: i32, y: i32, block: BlockType) -> bool {
        self.get(x, y) == Some(block)
    }

    /// Write a block. Out-of-bounds writes are ignored.
    ///
    /// Returns whether the cell was written.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, block: BlockType) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = block;
                true
            }
            None => false,
        }
    }

    /// Write a block, reporting out-of-bounds coordinates
    pub fn try_set(&mut self, x: i32, y: i32, block: BlockType) -> Result<(), GridError> {
        if self.set(x, y, block) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Row of the first non-air cell in a column, scanning from the top
    pub fn column_surface(&self, x: i32) -> Option<usize> {
        (0..self.height as i32)
            .find(|&y| self.get(x, y).is_some_and(|b| !b.is_air()))
            .map(|y| y as usize)
    }

    pub fn row(&self, y: usize) -> Option<&[BlockType]> {
        if y < self.height {
            Some(&self.cells[y * self.width..(y + 1) * self.width])
        } else {
            None
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[BlockType]> {
        self.cells.chunks(self.width.max(1))
    }

    /// All cells as (x, y, block), row by row
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, BlockType)> + '_ {
        let width = self.width.max(1);
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &block)| (i % width, i / width, block))
    }

    pub fn cells(&self) -> &[BlockType] {
        &self.cells
    }

    /// Number of cells holding `block`
    pub fn count(&self, block: BlockType) -> usize {
        self.cells.iter().filter(|&&b| b == block).count()
    }
}

impl std::fmt::Debug for WorldGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorldGrid")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("non_air", &(self.cells.len() - self.count(BlockType::Air)))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_air() {
        let grid = WorldGrid::new(10, 5);
        assert_eq!(grid.cells().len(), 50);
        assert_eq!(grid.count(BlockType::Air), 50);
        assert_eq!(grid.rows().count(), 5);
    }

    #[test]
    fn test_set_and_get() {
        let mut grid = WorldGrid::new(10, 5);
        assert!(grid.set(3, 4, BlockType::Stone));
        assert_eq!(grid.get(3, 4), Some(BlockType::Stone));
        assert_eq!(grid.row(4).unwrap()[3], BlockType::Stone);
        assert!(grid.is(3, 4, BlockType::Stone));
    }

    #[test]
    fn test_out_of_bounds_is_noop() {
        let mut grid = WorldGrid::new(10, 5);
        assert!(!grid.set(-1, 0, BlockType::Stone));
        assert!(!grid.set(10, 0, BlockType::Stone));
        assert!(!grid.set(0, 5, BlockType::Stone));
        assert_eq!(grid.get(0, -1), None);
        assert_eq!(grid.count(BlockType::Air), 50);
    }

    #[test]
    fn test_try_set_reports_bounds() {
        let mut grid = WorldGrid::new(4, 4);
        assert!(grid.try_set(1, 1, BlockType::Dirt).is_ok());
        let err = grid.try_set(4, 1, BlockType::Dirt).unwrap_err();
        assert_eq!(
            err,
            GridError::OutOfBounds {
                x: 4,
                y: 1,
                width: 4,
                height: 4
            }
        );
    }

    #[test]
    fn test_column_surface() {
        let mut grid = WorldGrid::new(4, 8);
        assert_eq!(grid.column_surface(2), None);
        grid.set(2, 5, BlockType::Grass);
        grid.set(2, 6, BlockType::Dirt);
        assert_eq!(grid.column_surface(2), Some(5));
    }

    #[test]
    fn test_iter_coordinates() {
        let mut grid = WorldGrid::new(3, 2);
        grid.set(2, 1, BlockType::Sand);
        let found: Vec<_> = grid
            .iter()
            .filter(|(_, _, b)| *b == BlockType::Sand)
            .collect();
        assert_eq!(found, vec![(2, 1, BlockType::Sand)]);
    }
}
