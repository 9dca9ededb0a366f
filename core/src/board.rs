use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Mine layout plus everything the player has done to it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    mine_layout: MineLayout,
    cells: Array2<CellState>,
    /// Safe cells revealed at least once, kept apart from `cells` because
    /// flag and guess may overwrite a revealed cell.
    ever_revealed: Array2<bool>,
    tiles_revealed: CellCount,
}

impl Board {
    pub fn new(mine_layout: MineLayout) -> Self {
        let size = mine_layout.size();
        Self {
            mine_layout,
            cells: Array2::default(size.to_nd_index()),
            ever_revealed: Array2::default(size.to_nd_index()),
            tiles_revealed: 0,
        }
    }

    /// Validates the seed values and builds a fully hidden board.
    pub fn construct(rows: i32, cols: i32, mines: i32, mine_coords: &[(i32, i32)]) -> Result<Self> {
        let config = GameConfig::new(rows, cols, mines)?;
        Ok(Self::new(MineLayout::from_mine_coords(config, mine_coords)?))
    }

    pub fn size(&self) -> Coord2 {
        self.mine_layout.size()
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_layout.mine_count()
    }

    pub fn tiles_revealed(&self) -> CellCount {
        self.tiles_revealed
    }

    pub fn mine_layout(&self) -> &MineLayout {
        &self.mine_layout
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<CellState> {
        self.check_bounds(coords)?;
        Ok(self.cells[coords.to_nd_index()])
    }

    pub fn has_mine_at(&self, coords: Coord2) -> bool {
        self.mine_layout.contains_mine(coords)
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        self.mine_layout.adjacent_mine_count(coords)
    }

    /// Checks signed player coordinates against the grid.
    pub fn validate_coords(&self, row: i32, col: i32) -> Result<Coord2> {
        let (rows, cols) = self.size();
        checked_coords(row, col, (rows, cols)).ok_or(GameError::OutOfBounds {
            row,
            col,
            rows,
            cols,
        })
    }

    fn check_bounds(&self, coords: Coord2) -> Result<()> {
        let (rows, cols) = self.size();
        if coords.0 < rows && coords.1 < cols {
            Ok(())
        } else {
            Err(GameError::OutOfBounds {
                row: coords.0.into(),
                col: coords.1.into(),
                rows,
                cols,
            })
        }
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        self.check_bounds(coords)?;

        if self.mine_layout[coords] {
            log::debug!("Mine triggered at {:?}", coords);
            return Ok(RevealOutcome::HitMine);
        }

        let count = self.mine_layout.adjacent_mine_count(coords);
        self.cells[coords.to_nd_index()] = CellState::Revealed(count);

        let seen = &mut self.ever_revealed[coords.to_nd_index()];
        let first_time = !*seen;
        if first_time {
            *seen = true;
            self.tiles_revealed += 1;
        }
        log::debug!(
            "Revealed {:?}, mine count: {}, tiles revealed: {}",
            coords,
            count,
            self.tiles_revealed
        );

        Ok(RevealOutcome::Revealed { count, first_time })
    }

    /// Marks a cell as a believed mine, overwriting whatever it showed.
    pub fn flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        self.overwrite(coords, CellState::Flagged)
    }

    /// Marks a cell with the uncertain `?` marker, overwriting whatever it showed.
    pub fn guess(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        self.overwrite(coords, CellState::Guessed)
    }

    fn overwrite(&mut self, coords: Coord2, state: CellState) -> Result<MarkOutcome> {
        self.check_bounds(coords)?;

        let cell = &mut self.cells[coords.to_nd_index()];
        if *cell == state {
            Ok(MarkOutcome::NoChange)
        } else {
            *cell = state;
            Ok(MarkOutcome::Changed)
        }
    }

    /// Every safe cell revealed and every mine flagged.
    pub fn is_won(&self) -> bool {
        self.tiles_revealed == self.mine_layout.game_config().safe_cells()
            && self
                .mine_layout
                .iter_mines()
                .all(|pos| self.cells[pos.to_nd_index()] == CellState::Flagged)
    }
}
