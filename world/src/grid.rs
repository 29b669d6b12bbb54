//! Bounded two-state cell matrix and the B3/S23 transition rule.

use life_core::{CellCoord, CellState, GridDimensions};
use life_pattern_catalog::{sanitise_density, Pattern};
use rand::Rng;
use thiserror::Error;

/// Relative positions forming the Moore neighbourhood of a cell.
const NEIGHBOURHOOD: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Errors that can occur when constructing a [`Grid`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GridError {
    /// Both dimensions must be positive.
    #[error("grid dimensions must be positive (received {columns}x{rows})")]
    EmptyDimensions {
        /// Requested number of columns.
        columns: u32,
        /// Requested number of rows.
        rows: u32,
    },
    /// Coordinates must stay addressable with signed 32-bit indices.
    #[error("grid dimensions {columns}x{rows} exceed the addressable range")]
    TooLarge {
        /// Requested number of columns.
        columns: u32,
        /// Requested number of rows.
        rows: u32,
    },
}

/// Fixed-size board of cells surrounded by permanently dead space.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    dimensions: GridDimensions,
    cells: Vec<CellState>,
}

impl Grid {
    /// Creates a grid of the requested size with every cell dead.
    pub fn new(columns: u32, rows: u32) -> Result<Self, GridError> {
        if columns == 0 || rows == 0 {
            return Err(GridError::EmptyDimensions { columns, rows });
        }
        if i32::try_from(columns).is_err() || i32::try_from(rows).is_err() {
            return Err(GridError::TooLarge { columns, rows });
        }
        let capacity = usize::try_from(u64::from(columns) * u64::from(rows))
            .map_err(|_| GridError::TooLarge { columns, rows })?;

        Ok(Self {
            dimensions: GridDimensions::new(columns, rows),
            cells: vec![CellState::Dead; capacity],
        })
    }

    /// Size of the grid, fixed at construction.
    #[must_use]
    pub const fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    /// Returns the state of a cell; positions outside the grid are dead.
    #[must_use]
    pub fn get(&self, x: i32, y: i32) -> CellState {
        self.index(x, y)
            .map_or(CellState::Dead, |index| self.cells[index])
    }

    /// Writes a single cell. Writes outside the grid are ignored.
    pub fn set(&mut self, x: i32, y: i32, state: CellState) {
        if let Some(index) = self.index(x, y) {
            self.cells[index] = state;
        }
    }

    /// Flips a single cell and returns its new state, or `None` when the
    /// position lies outside the grid.
    pub fn toggle(&mut self, x: i32, y: i32) -> Option<CellState> {
        let index = self.index(x, y)?;
        let toggled = self.cells[index].toggled();
        self.cells[index] = toggled;
        Some(toggled)
    }

    /// Number of live cells among the eight neighbours of `(x, y)`.
    #[must_use]
    pub fn count_live_neighbors(&self, x: i32, y: i32) -> u8 {
        NEIGHBOURHOOD
            .iter()
            .filter(|&&(dx, dy)| {
                self.get(x.saturating_add(dx), y.saturating_add(dy))
                    .is_alive()
            })
            .count() as u8
    }

    /// Computes the following generation into a fresh grid.
    #[must_use]
    pub fn next_generation(&self) -> Grid {
        let columns = self.columns();
        let rows = self.rows();
        let mut cells = Vec::with_capacity(self.cells.len());
        for y in 0..rows {
            for x in 0..columns {
                let current = self.get(x, y);
                cells.push(next_state(current, self.count_live_neighbors(x, y)));
            }
        }

        Grid {
            dimensions: self.dimensions,
            cells,
        }
    }

    /// Sets every cell alive with probability `density`, independently.
    ///
    /// The density is clamped into `0.0..=1.0`; NaN behaves like zero.
    pub fn randomize<R>(&mut self, density: f64, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        let density = sanitise_density(density);
        for cell in &mut self.cells {
            *cell = CellState::from(rng.gen_bool(density));
        }
    }

    /// Sets every cell dead.
    pub fn clear(&mut self) {
        self.cells.fill(CellState::Dead);
    }

    /// Brings the pattern's cells to life with its bounding box at `origin`.
    ///
    /// Cells falling outside the grid are clipped silently.
    pub fn apply_pattern(&mut self, pattern: &Pattern, origin: CellCoord) {
        for cell in pattern.cells_at(origin) {
            self.set(cell.x(), cell.y(), CellState::Alive);
        }
    }

    /// Number of live cells on the board.
    #[must_use]
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterates over the live cells in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = CellCoord> + '_ {
        let columns = self.columns();
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_alive())
            .map(move |(index, _)| {
                let index = index as i64;
                let width = i64::from(columns);
                CellCoord::new((index % width) as i32, (index / width) as i32)
            })
    }

    fn columns(&self) -> i32 {
        self.dimensions.columns() as i32
    }

    fn rows(&self) -> i32 {
        self.dimensions.rows() as i32
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if !self.dimensions.contains(CellCoord::new(x, y)) {
            return None;
        }
        let row = usize::try_from(y).ok()?;
        let column = usize::try_from(x).ok()?;
        let width = usize::try_from(self.dimensions.columns()).ok()?;
        Some(row * width + column)
    }
}

/// Applies the B3/S23 rule to a single cell.
#[must_use]
pub fn next_state(current: CellState, live_neighbors: u8) -> CellState {
    match (current, live_neighbors) {
        (CellState::Alive, 2 | 3) | (CellState::Dead, 3) => CellState::Alive,
        _ => CellState::Dead,
    }
}
