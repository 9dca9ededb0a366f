#![no_std]

extern crate alloc;

use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use command::*;
pub use engine::*;
pub use error::*;
pub use render::*;
pub use seed::*;
pub use tile::*;
pub use types::*;

mod board;
mod command;
mod engine;
mod error;
mod render;
mod seed;
mod tile;
mod types;

/// Smallest allowed number of rows or columns.
pub const MIN_SIZE: Coord = 5;

/// Largest allowed number of rows or columns.
pub const MAX_SIZE: Coord = 10;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    /// Validates raw seed values: the mine count must leave at least one safe
    /// cell and both dimensions must lie in `MIN_SIZE..=MAX_SIZE`.
    pub fn new(rows: i32, cols: i32, mines: i32) -> Result<Self> {
        let total = i64::from(rows) * i64::from(cols);
        if mines < 1 || i64::from(mines) > total - 1 {
            return Err(GameError::InvalidMineCount { mines });
        }

        let size_range = i32::from(MIN_SIZE)..=i32::from(MAX_SIZE);
        if !size_range.contains(&rows) || !size_range.contains(&cols) {
            return Err(GameError::InvalidDimensions { rows, cols });
        }

        // both fit: dimensions are at most MAX_SIZE and mines below their product
        let size = (rows as Coord, cols as Coord);
        Ok(Self::new_unchecked(size, mines as CellCount))
    }

    pub const fn rows(&self) -> Coord {
        self.size.0
    }

    pub const fn cols(&self) -> Coord {
        self.size.1
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells() - self.mines
    }
}

/// Fixed mine placement of a board, never changes after construction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

impl MineLayout {
    /// Places one mine per coordinate pair, rejecting pairs outside the grid
    /// and pairs declared more than once.
    pub fn from_mine_coords(config: GameConfig, mine_coords: &[(i32, i32)]) -> Result<Self> {
        if mine_coords.len() != usize::from(config.mines) {
            return Err(GameError::InvalidMineCount {
                mines: i32::from(config.mines),
            });
        }

        let mut mine_mask: Array2<bool> = Array2::default(config.size.to_nd_index());

        for &(row, col) in mine_coords {
            let coords = checked_coords(row, col, config.size)
                .ok_or(GameError::MineOutOfBounds { row, col })?;
            let cell = &mut mine_mask[coords.to_nd_index()];
            if *cell {
                return Err(GameError::DuplicateMine {
                    row: coords.0,
                    col: coords.1,
                });
            }
            *cell = true;
        }

        Ok(Self {
            mine_mask,
            mine_count: config.mines,
        })
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            size: self.size(),
            mines: self.mine_count,
        }
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.mine_mask.dim();
        // validated against MAX_SIZE on construction
        (rows as Coord, cols as Coord)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    /// Whether `coords` holds a mine, false outside the grid.
    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self.mine_mask
            .get(coords.to_nd_index())
            .copied()
            .unwrap_or(false)
    }

    /// Mines in the 3x3 block centered on `coords`, the center cell included.
    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        let count = iter_block(coords, self.size())
            .filter(|&pos| self[pos])
            .count();
        // a block holds at most nine cells
        count as u8
    }

    pub fn iter_mines(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.mine_mask
            .indexed_iter()
            .filter(|&(_, &is_mine)| is_mine)
            .map(|((row, col), _)| (row as Coord, col as Coord))
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, (row, col): Coord2) -> &Self::Output {
        &self.mine_mask[(row as usize, col as usize)]
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// The cell now shows its block count; `first_time` is false when the
    /// cell had already been counted by an earlier reveal.
    Revealed { count: u8, first_time: bool },
    HitMine,
}
