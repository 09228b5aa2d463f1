use std::fmt;

use randomize::{RandRangeU32, PCG32};

use crate::auxiliary::randomizer::generate_seed;
use crate::traits_and_structs::cell::Cell;
use crate::traits_and_structs::error::{ConstructionError, OutOfBounds};

/// An N x N Game of Life board whose edges wrap around.
///
/// Generations are double buffered: `advance` reads only from `cells`,
/// writes into `scratch_cells`, then swaps the two.
#[derive(Clone, Debug)]
pub struct GridEngine {
    cells: Vec<Cell>,
    scratch_cells: Vec<Cell>,
    size: usize,
    generation: u64,
}

impl GridEngine {
    /// Build a grid and seed it from OS entropy.
    pub fn new(size: usize, live_cells: usize) -> Result<Self, ConstructionError> {
        let seed = generate_seed().map_err(ConstructionError::Entropy)?;
        Self::with_seed(size, live_cells, seed)
    }

    /// Build a grid and seed it from a fixed PCG32 seed.
    pub fn with_seed(
        size: usize,
        live_cells: usize,
        seed: (u64, u64),
    ) -> Result<Self, ConstructionError> {
        let mut result = Self::new_empty(size)?;
        if live_cells > result.cells.len() {
            return Err(ConstructionError::TooManyCells {
                requested: live_cells,
                capacity: result.cells.len(),
            });
        }
        let mut rng: PCG32 = seed.into();
        result.populate(live_cells, &mut rng);
        Ok(result)
    }

    fn new_empty(size: usize) -> Result<Self, ConstructionError> {
        if size == 0 {
            return Err(ConstructionError::EmptyGrid);
        }
        // Coordinates are sampled as u32.
        if u32::try_from(size).is_err() {
            return Err(ConstructionError::GridTooLarge(size));
        }
        let len = size
            .checked_mul(size)
            .ok_or(ConstructionError::GridTooLarge(size))?;
        Ok(Self {
            cells: vec![Cell::Dead; len],
            scratch_cells: vec![Cell::Dead; len],
            size,
            generation: 0,
        })
    }

    // Collisions are retried, so exactly `live_cells` end up alive.
    fn populate(&mut self, live_cells: usize, rng: &mut PCG32) {
        let range = RandRangeU32::from(0..self.size as u32);
        let mut placed = 0;
        while placed < live_cells {
            let x = range.sample(rng) as usize;
            let y = range.sample(rng) as usize;
            let idx = x + y * self.size;
            if !self.cells[idx].is_alive() {
                self.cells[idx] = Cell::Alive;
                placed += 1;
            }
        }
    }

    pub fn dimensions(&self) -> usize {
        self.size
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    pub fn cell_state(&self, x: usize, y: usize) -> Result<Cell, OutOfBounds> {
        let idx = self.grid_idx(x, y)?;
        Ok(self.cells[idx])
    }

    /// Overwrite one cell. Does not count as a generation.
    pub fn set_cell(&mut self, x: usize, y: usize, state: Cell) -> Result<(), OutOfBounds> {
        let idx = self.grid_idx(x, y)?;
        self.cells[idx] = state;
        Ok(())
    }

    /// Row-major, one slice per row, top row first.
    pub fn rows(&self) -> std::slice::ChunksExact<'_, Cell> {
        self.cells.chunks_exact(self.size)
    }

    /// Compute the next generation from the current one.
    pub fn advance(&mut self) {
        for y in 0..self.size {
            for x in 0..self.size {
                let neighbors = self.live_neighbor_count(x, y);
                let idx = x + y * self.size;
                // Write into `scratch_cells`, since we're still reading from `cells`
                self.scratch_cells[idx] = self.cells[idx].next_state(neighbors);
            }
        }
        std::mem::swap(&mut self.scratch_cells, &mut self.cells);
        self.generation += 1;
    }

    // Sums all 8 wrapped offsets; on grids smaller than 3 some of them
    // land on the same cell and are counted more than once.
    fn live_neighbor_count(&self, x: usize, y: usize) -> u8 {
        let n = self.size;
        let (xm1, xp1) = ((x + n - 1) % n, (x + 1) % n);
        let (ym1, yp1) = ((y + n - 1) % n, (y + 1) % n);
        [
            (xm1, ym1),
            (x, ym1),
            (xp1, ym1),
            (xm1, y),
            (xp1, y),
            (xm1, yp1),
            (x, yp1),
            (xp1, yp1),
        ]
        .iter()
        .filter(|&&(nx, ny)| self.cells[nx + ny * n].is_alive())
        .count() as u8
    }

    fn grid_idx(&self, x: usize, y: usize) -> Result<usize, OutOfBounds> {
        if x < self.size && y < self.size {
            Ok(x + y * self.size)
        } else {
            Err(OutOfBounds {
                x,
                y,
                size: self.size,
            })
        }
    }
}

// `scratch_cells` only holds the previous generation, so it is left out.
impl PartialEq for GridEngine {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.generation == other.generation && self.cells == other.cells
    }
}

impl Eq for GridEngine {}

/// Console format: `'0'` alive, `' '` dead, one newline terminated line per row.
impl fmt::Display for GridEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                write!(f, "{}", cell.as_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
