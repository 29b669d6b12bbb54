#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Static catalog of starting patterns and the random-fill descriptor.
//!
//! Offsets are stored normalised so that each pattern's bounding box starts
//! at `(0, 0)`; x grows to the right and y grows downwards.

use life_core::{CellCoord, GridDimensions, PatternKind};

const GOSPER_GLIDER_GUN: [(i32, i32); 36] = [
    (24, 0),
    (22, 1),
    (24, 1),
    (12, 2),
    (13, 2),
    (20, 2),
    (21, 2),
    (34, 2),
    (35, 2),
    (11, 3),
    (15, 3),
    (20, 3),
    (21, 3),
    (34, 3),
    (35, 3),
    (0, 4),
    (1, 4),
    (10, 4),
    (16, 4),
    (20, 4),
    (21, 4),
    (0, 5),
    (1, 5),
    (10, 5),
    (14, 5),
    (16, 5),
    (17, 5),
    (22, 5),
    (24, 5),
    (10, 6),
    (16, 6),
    (24, 6),
    (11, 7),
    (15, 7),
    (12, 8),
    (13, 8),
];

// .O.....
// ...O...
// OO..OOO
const ACORN: [(i32, i32); 7] = [(1, 0), (3, 1), (0, 2), (1, 2), (4, 2), (5, 2), (6, 2)];

// .O.O..
// O.....
// .O..O.
// ...OOO
const SWITCH_ENGINE: [(i32, i32); 8] = [
    (1, 0),
    (3, 0),
    (0, 1),
    (1, 2),
    (4, 2),
    (3, 3),
    (4, 3),
    (5, 3),
];

// .O.
// ..O
// OOO
const GLIDER: [(i32, i32); 5] = [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];

// .OO
// OO.
// .O.
const R_PENTOMINO: [(i32, i32); 5] = [(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)];

// ......O.
// OO......
// .O...OOO
const DIEHARD: [(i32, i32); 7] = [(6, 0), (0, 1), (1, 1), (1, 2), (5, 2), (6, 2), (7, 2)];

/// Where a pattern is stamped when selected from the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    /// Bounding box anchored at a fixed cell near the top-left corner.
    Inset {
        /// Column of the upper-left bounding box cell.
        x: i32,
        /// Row of the upper-left bounding box cell.
        y: i32,
    },
    /// Bounding box centred on the grid.
    Centred,
}

/// Immutable named set of live-cell offsets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pattern {
    kind: PatternKind,
    offsets: &'static [(i32, i32)],
    placement: Placement,
}

impl Pattern {
    /// Identifier of the pattern.
    #[must_use]
    pub const fn kind(&self) -> PatternKind {
        self.kind
    }

    /// Human readable pattern name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Live-cell offsets relative to the bounding box origin.
    #[must_use]
    pub const fn offsets(&self) -> &'static [(i32, i32)] {
        self.offsets
    }

    /// Default placement policy for the pattern.
    #[must_use]
    pub const fn placement(&self) -> Placement {
        self.placement
    }

    /// Width and height of the pattern's bounding box in cells.
    #[must_use]
    pub fn bounding_box(&self) -> (i32, i32) {
        self.offsets
            .iter()
            .fold((0, 0), |(width, height), &(dx, dy)| {
                (width.max(dx + 1), height.max(dy + 1))
            })
    }

    /// Resolves the deterministic placement origin on a grid of the given size.
    ///
    /// Centred origins may be negative on grids smaller than the pattern; the
    /// overhanging cells are clipped when the pattern is stamped.
    #[must_use]
    pub fn origin_within(&self, dimensions: GridDimensions) -> CellCoord {
        match self.placement {
            Placement::Inset { x, y } => CellCoord::new(x, y),
            Placement::Centred => {
                let (width, height) = self.bounding_box();
                dimensions.centre().offset(-(width / 2), -(height / 2))
            }
        }
    }

    /// Absolute live cells produced by stamping the pattern at `origin`.
    pub fn cells_at(&self, origin: CellCoord) -> impl Iterator<Item = CellCoord> + 'static {
        let offsets: &'static [(i32, i32)] = self.offsets;
        offsets
            .iter()
            .map(move |&(dx, dy)| origin.offset(dx, dy))
    }
}

static CATALOG: [Pattern; 6] = [
    Pattern {
        kind: PatternKind::GosperGliderGun,
        offsets: &GOSPER_GLIDER_GUN,
        placement: Placement::Inset { x: 20, y: 6 },
    },
    Pattern {
        kind: PatternKind::Acorn,
        offsets: &ACORN,
        placement: Placement::Centred,
    },
    Pattern {
        kind: PatternKind::SwitchEngine,
        offsets: &SWITCH_ENGINE,
        placement: Placement::Centred,
    },
    Pattern {
        kind: PatternKind::Glider,
        offsets: &GLIDER,
        placement: Placement::Inset { x: 3, y: 3 },
    },
    Pattern {
        kind: PatternKind::RPentomino,
        offsets: &R_PENTOMINO,
        placement: Placement::Centred,
    },
    Pattern {
        kind: PatternKind::Diehard,
        offsets: &DIEHARD,
        placement: Placement::Centred,
    },
];

/// Every catalog entry in selection-key order.
#[must_use]
pub fn catalog() -> &'static [Pattern] {
    &CATALOG
}

/// Definition of the provided pattern.
#[must_use]
pub fn pattern(kind: PatternKind) -> &'static Pattern {
    match kind {
        PatternKind::GosperGliderGun => &CATALOG[0],
        PatternKind::Acorn => &CATALOG[1],
        PatternKind::SwitchEngine => &CATALOG[2],
        PatternKind::Glider => &CATALOG[3],
        PatternKind::RPentomino => &CATALOG[4],
        PatternKind::Diehard => &CATALOG[5],
    }
}

/// Catalog entry bound to a selection key, if any.
#[must_use]
pub fn for_key(key: char) -> Option<&'static Pattern> {
    PatternKind::from_key(key).map(pattern)
}

/// Random-fill generator settings used by the `r` setup action.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RandomFill {
    density: f64,
}

impl RandomFill {
    /// Probability of life used when no density is configured.
    pub const DEFAULT_DENSITY: f64 = 0.25;

    /// Creates a fill descriptor, clamping the density into `0.0..=1.0`.
    ///
    /// A NaN density is treated as zero.
    #[must_use]
    pub fn new(density: f64) -> Self {
        Self {
            density: sanitise_density(density),
        }
    }

    /// Probability that any single cell becomes alive.
    #[must_use]
    pub const fn density(&self) -> f64 {
        self.density
    }
}

impl Default for RandomFill {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DENSITY)
    }
}

/// Clamps a probability into `0.0..=1.0`, mapping NaN to zero.
#[must_use]
pub fn sanitise_density(density: f64) -> f64 {
    if density.is_nan() {
        0.0
    } else {
        density.clamp(0.0, 1.0)
    }
}
