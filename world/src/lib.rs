#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative world state for the Game of Life.
//!
//! The world owns the grid, the active mode and the generation counter. All
//! mutations flow through [`apply`], which validates each [`Command`] against
//! the active mode and reports the outcome as [`Event`] values.

mod grid;

pub use grid::{next_state, Grid, GridError};

use life_core::{Command, Event, GridDimensions, Mode, Rejection};
use life_pattern_catalog::pattern;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Represents the authoritative Game of Life world state.
#[derive(Clone, Debug)]
pub struct World {
    grid: Grid,
    mode: Mode,
    generation: u64,
}

impl World {
    /// Creates a world in setup mode with an empty grid of the given size.
    pub fn new(dimensions: GridDimensions) -> Result<Self, GridError> {
        Ok(Self {
            grid: Grid::new(dimensions.columns(), dimensions.rows())?,
            mode: Mode::Setup,
            generation: 0,
        })
    }

    fn reject(&self, reason: Rejection, out_events: &mut Vec<Event>) {
        out_events.push(Event::CommandRejected {
            mode: self.mode,
            reason,
        });
    }

    fn editable(&self, out_events: &mut Vec<Event>) -> bool {
        if self.mode == Mode::Setup {
            true
        } else {
            self.reject(Rejection::EditingDisabled, out_events);
            false
        }
    }
}

/// Applies the provided command to the world, mutating state deterministically.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::ClearGrid => {
            if world.editable(out_events) {
                world.grid.clear();
                out_events.push(Event::GridCleared);
            }
        }
        Command::PlacePattern {
            pattern: kind,
            origin,
        } => {
            if world.editable(out_events) {
                world.grid.apply_pattern(pattern(kind), origin);
                out_events.push(Event::PatternPlaced {
                    pattern: kind,
                    origin,
                    population: world.grid.population(),
                });
            }
        }
        Command::Randomize { density, seed } => {
            if world.editable(out_events) {
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                world.grid.randomize(density, &mut rng);
                out_events.push(Event::GridRandomized {
                    seed,
                    population: world.grid.population(),
                });
            }
        }
        Command::ToggleCell { cell } => {
            if world.editable(out_events) {
                if let Some(state) = world.grid.toggle(cell.x(), cell.y()) {
                    out_events.push(Event::CellToggled { cell, state });
                }
            }
        }
        Command::AdvanceGeneration => {
            if world.mode != Mode::Simulation {
                world.reject(Rejection::SimulationHalted, out_events);
                return;
            }
            world.grid = world.grid.next_generation();
            world.generation = world.generation.saturating_add(1);
            out_events.push(Event::GenerationAdvanced {
                generation: world.generation,
                population: world.grid.population(),
            });
        }
        Command::SetMode { mode } => {
            let from = world.mode;
            if !from.can_transition_to(mode) {
                world.reject(Rejection::InvalidTransition { requested: mode }, out_events);
                return;
            }
            if (from, mode) == (Mode::Simulation, Mode::Setup) {
                world.grid.clear();
                world.generation = 0;
                out_events.push(Event::GridCleared);
            }
            world.mode = mode;
            out_events.push(Event::ModeChanged { from, to: mode });
        }
    }
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use super::{Grid, World};
    use life_core::{CellCoord, CellState, GridDimensions, Mode};

    /// Provides read-only access to the current generation's grid.
    #[must_use]
    pub fn grid(world: &World) -> &Grid {
        &world.grid
    }

    /// Reports the active interaction mode.
    #[must_use]
    pub fn mode(world: &World) -> Mode {
        world.mode
    }

    /// Number of generations computed since the last commit.
    #[must_use]
    pub fn generation(world: &World) -> u64 {
        world.generation
    }

    /// Size of the grid in cells.
    #[must_use]
    pub fn dimensions(world: &World) -> GridDimensions {
        world.grid.dimensions()
    }

    /// Number of live cells on the board.
    #[must_use]
    pub fn population(world: &World) -> usize {
        world.grid.population()
    }

    /// State of a single cell; positions outside the grid are dead.
    #[must_use]
    pub fn cell(world: &World, cell: CellCoord) -> CellState {
        world.grid.get(cell.x(), cell.y())
    }

    /// Collects the live cells in row-major order.
    #[must_use]
    pub fn live_cells(world: &World) -> Vec<CellCoord> {
        world.grid.live_cells().collect()
    }
}
