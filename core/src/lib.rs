#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Game of Life engine.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative world, and the mode controllers. Adapters translate raw
//! device input into [`InputEvent`] values, controllers turn those into
//! [`Command`] values describing desired board mutations, the world executes
//! the commands via its `apply` entry point, and then reports [`Event`] values
//! describing what actually changed.

use serde::{Deserialize, Serialize};

/// Canonical title shown by adapters when the experience boots.
pub const WINDOW_TITLE: &str = "Game of Life";

/// Interaction mode held by the coordinator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// The user composes the initial board.
    Setup,
    /// The board evolves one generation per tick.
    Simulation,
    /// Terminal mode; the frame loop shuts down.
    Exit,
}

impl Mode {
    /// Reports whether the mode ends the session.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Exit)
    }

    /// Reports whether the coordinator accepts a transition from `self` to `to`.
    #[must_use]
    pub const fn can_transition_to(self, to: Mode) -> bool {
        matches!(
            (self, to),
            (Self::Setup, Self::Simulation)
                | (Self::Simulation, Self::Setup)
                | (Self::Setup, Self::Exit)
                | (Self::Simulation, Self::Exit)
        )
    }
}

/// Binary state held by every grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    /// The cell is empty.
    #[default]
    Dead,
    /// The cell is populated.
    Alive,
}

impl CellState {
    /// Reports whether the cell is populated.
    #[must_use]
    pub const fn is_alive(self) -> bool {
        matches!(self, Self::Alive)
    }

    /// Returns the opposite state.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Alive => Self::Dead,
            Self::Dead => Self::Alive,
        }
    }
}

impl From<bool> for CellState {
    fn from(alive: bool) -> Self {
        if alive {
            Self::Alive
        } else {
            Self::Dead
        }
    }
}

/// Location of a single grid cell expressed as signed column and row indices.
///
/// Coordinates are signed so that positions beyond the grid edge, which the
/// world treats as permanently dead, remain expressible.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    x: i32,
    y: i32,
}

impl CellCoord {
    /// Creates a new grid cell coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Zero-based column index of the cell.
    #[must_use]
    pub const fn x(&self) -> i32 {
        self.x
    }

    /// Zero-based row index of the cell.
    #[must_use]
    pub const fn y(&self) -> i32 {
        self.y
    }

    /// Returns the coordinate displaced by the provided offsets.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

/// Fixed width and height of the board measured in cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridDimensions {
    columns: u32,
    rows: u32,
}

impl GridDimensions {
    /// Creates a new dimension descriptor.
    #[must_use]
    pub const fn new(columns: u32, rows: u32) -> Self {
        Self { columns, rows }
    }

    /// Number of columns contained in the grid.
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of rows contained in the grid.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Total number of cells addressed by the grid.
    #[must_use]
    pub const fn cell_count(&self) -> u64 {
        self.columns as u64 * self.rows as u64
    }

    /// Reports whether the coordinate addresses a cell inside the grid.
    #[must_use]
    pub const fn contains(&self, cell: CellCoord) -> bool {
        cell.x >= 0
            && cell.y >= 0
            && (cell.x as u32) < self.columns
            && (cell.y as u32) < self.rows
    }

    /// Cell at the centre of the grid, rounding towards the origin.
    #[must_use]
    pub const fn centre(&self) -> CellCoord {
        CellCoord::new((self.columns / 2) as i32, (self.rows / 2) as i32)
    }
}

/// Named patterns available from the built-in catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PatternKind {
    /// Bill Gosper's period-30 glider gun.
    GosperGliderGun,
    /// Seven-cell methuselah that stabilises after 5206 generations.
    Acorn,
    /// Eight-cell puffer that settles into a diagonal switch engine.
    SwitchEngine,
    /// Smallest spaceship, travelling diagonally with period 4.
    Glider,
    /// Five-cell methuselah.
    RPentomino,
    /// Seven-cell pattern that vanishes after 130 generations.
    Diehard,
}

/// Fixed lookup table from selection keys to catalog patterns.
const PATTERN_KEYS: [(char, PatternKind); 6] = [
    ('g', PatternKind::GosperGliderGun),
    ('a', PatternKind::Acorn),
    ('s', PatternKind::SwitchEngine),
    ('l', PatternKind::Glider),
    ('p', PatternKind::RPentomino),
    ('d', PatternKind::Diehard),
];

impl PatternKind {
    /// Every pattern in selection-key order.
    pub const ALL: [PatternKind; 6] = [
        Self::GosperGliderGun,
        Self::Acorn,
        Self::SwitchEngine,
        Self::Glider,
        Self::RPentomino,
        Self::Diehard,
    ];

    /// Resolves the pattern bound to a selection key, ignoring ASCII case.
    #[must_use]
    pub fn from_key(key: char) -> Option<Self> {
        let key = key.to_ascii_lowercase();
        PATTERN_KEYS
            .iter()
            .find(|(bound, _)| *bound == key)
            .map(|(_, kind)| *kind)
    }

    /// Selection key bound to the pattern.
    #[must_use]
    pub const fn key(self) -> char {
        match self {
            Self::GosperGliderGun => 'g',
            Self::Acorn => 'a',
            Self::SwitchEngine => 's',
            Self::Glider => 'l',
            Self::RPentomino => 'p',
            Self::Diehard => 'd',
        }
    }

    /// Human readable pattern name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::GosperGliderGun => "Gosper glider gun",
            Self::Acorn => "acorn",
            Self::SwitchEngine => "switch engine",
            Self::Glider => "glider",
            Self::RPentomino => "R-pentomino",
            Self::Diehard => "diehard",
        }
    }
}

/// Key that selects the random-fill action during setup.
pub const RANDOM_FILL_KEY: char = 'r';

/// Discrete keys the controllers distinguish.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// A printable character key.
    Character(char),
    /// The return/enter key.
    Return,
    /// The escape key.
    Escape,
}

/// Input observed by an adapter during a single frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputEvent {
    /// A key was pressed.
    KeyPressed {
        /// Key that was pressed.
        key: Key,
    },
    /// The mouse was clicked over a grid cell.
    ///
    /// Adapters map screen positions to cells and drop clicks that land
    /// outside the grid area.
    CellClicked {
        /// Cell under the cursor when the button was released.
        cell: CellCoord,
    },
}

/// Commands that express all permissible world mutations.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Sets every cell to dead.
    ClearGrid,
    /// Stamps a catalog pattern with its bounding box anchored at `origin`.
    PlacePattern {
        /// Pattern to stamp.
        pattern: PatternKind,
        /// Upper-left cell of the pattern's bounding box.
        origin: CellCoord,
    },
    /// Fills every cell independently with the given probability of life.
    Randomize {
        /// Probability in `0.0..=1.0` that a cell becomes alive.
        density: f64,
        /// Seed for the deterministic generator that drives the fill.
        seed: u64,
    },
    /// Flips a single cell between alive and dead.
    ToggleCell {
        /// Cell to flip.
        cell: CellCoord,
    },
    /// Replaces the board with its next generation.
    AdvanceGeneration,
    /// Requests that the world transition to the provided mode.
    SetMode {
        /// Mode the world should activate.
        mode: Mode,
    },
}

/// Reasons the world declines to execute a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// Board edits are only accepted in setup mode.
    EditingDisabled,
    /// Generations only advance in simulation mode.
    SimulationHalted,
    /// The requested mode is not reachable from the current one.
    InvalidTransition {
        /// Mode that was requested.
        requested: Mode,
    },
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// Confirms that every cell was cleared.
    GridCleared,
    /// Confirms that a pattern was stamped onto the board.
    PatternPlaced {
        /// Pattern that was stamped.
        pattern: PatternKind,
        /// Upper-left cell of the stamped bounding box.
        origin: CellCoord,
        /// Live cells on the board after placement.
        population: usize,
    },
    /// Confirms that the board was filled randomly.
    GridRandomized {
        /// Seed used for the fill.
        seed: u64,
        /// Live cells on the board after the fill.
        population: usize,
    },
    /// Confirms that a single cell changed state.
    CellToggled {
        /// Cell that was flipped.
        cell: CellCoord,
        /// State of the cell after the flip.
        state: CellState,
    },
    /// Announces that the board advanced by one generation.
    GenerationAdvanced {
        /// Generation counter after the step.
        generation: u64,
        /// Live cells in the new generation.
        population: usize,
    },
    /// Announces that the world entered a new mode.
    ModeChanged {
        /// Mode that was active before the transition.
        from: Mode,
        /// Mode that became active.
        to: Mode,
    },
    /// Reports that a command was not executed.
    CommandRejected {
        /// Mode that was active when the command arrived.
        mode: Mode,
        /// Specific reason the command was declined.
        reason: Rejection,
    },
}
