#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Mode coordinator that owns the world and routes input to the active system.
//!
//! Each frame the coordinator hands the drained input batch to the system for
//! the current mode, applies the resulting commands to the world in order and
//! keeps the emitted events available for inspection until the next frame.

use life_core::{Event, GridDimensions, InputEvent, Mode};
use life_pattern_catalog::RandomFill;
use life_system_setup::Setup;
use life_system_simulation::Simulation;
use life_world::{self as world, query, GridError, World};

/// Parameters required to start a session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoordinatorConfig {
    /// Size of the board in cells.
    pub dimensions: GridDimensions,
    /// Seed driving every random fill of the session.
    pub seed: u64,
    /// Random-fill settings used in setup mode.
    pub fill: RandomFill,
}

impl CoordinatorConfig {
    /// Creates a configuration with the default random-fill density.
    #[must_use]
    pub fn new(dimensions: GridDimensions, seed: u64) -> Self {
        Self {
            dimensions,
            seed,
            fill: RandomFill::default(),
        }
    }
}

/// Owns the session state and drives the setup/simulation state machine.
#[derive(Debug)]
pub struct Coordinator {
    world: World,
    setup: Setup,
    simulation: Simulation,
    events: Vec<Event>,
}

impl Coordinator {
    /// Builds the world once for the configured grid and enters setup mode.
    pub fn new(config: CoordinatorConfig) -> Result<Self, GridError> {
        let world = World::new(config.dimensions)?;
        log::info!(
            "created {}x{} grid; entering setup",
            config.dimensions.columns(),
            config.dimensions.rows()
        );
        Ok(Self {
            world,
            setup: Setup::new(config.seed, config.fill),
            simulation: Simulation::new(),
            events: Vec::new(),
        })
    }

    /// Processes one frame of input and returns the mode active afterwards.
    ///
    /// Once the coordinator reaches [`Mode::Exit`] further frames are no-ops.
    pub fn frame(&mut self, input: &[InputEvent]) -> Mode {
        self.events.clear();

        let mut commands = Vec::new();
        match query::mode(&self.world) {
            Mode::Setup => self
                .setup
                .handle(input, query::dimensions(&self.world), &mut commands),
            Mode::Simulation => self.simulation.handle(input, &mut commands),
            Mode::Exit => return Mode::Exit,
        }

        for command in commands {
            world::apply(&mut self.world, command, &mut self.events);
        }
        for event in &self.events {
            log_event(event);
        }

        query::mode(&self.world)
    }

    /// Events emitted by the world during the most recent frame.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Read-only access to the world for presentation.
    #[must_use]
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Currently active mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        query::mode(&self.world)
    }

    /// Generations computed since the last commit.
    #[must_use]
    pub fn generation(&self) -> u64 {
        query::generation(&self.world)
    }
}

fn log_event(event: &Event) {
    match event {
        Event::ModeChanged { from, to } => log::info!("mode changed: {from:?} -> {to:?}"),
        Event::GridCleared => log::debug!("grid cleared"),
        Event::PatternPlaced {
            pattern,
            origin,
            population,
        } => log::debug!(
            "placed {} at ({}, {}); population {population}",
            pattern.name(),
            origin.x(),
            origin.y()
        ),
        Event::GridRandomized { seed, population } => {
            log::debug!("randomized grid with seed {seed}; population {population}")
        }
        Event::CellToggled { cell, state } => {
            log::debug!("toggled ({}, {}) to {state:?}", cell.x(), cell.y())
        }
        Event::GenerationAdvanced {
            generation,
            population,
        } => log::trace!("generation {generation}; population {population}"),
        Event::CommandRejected { mode, reason } => {
            log::warn!("command rejected in {mode:?}: {reason:?}")
        }
    }
}
