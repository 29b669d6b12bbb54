#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Shared rendering contracts for Game of Life adapters.

use anyhow::Result as AnyResult;
use glam::Vec2;
use life_core::{CellCoord, InputEvent, Mode, PatternKind, RANDOM_FILL_KEY, WINDOW_TITLE};
use std::{error::Error, fmt, time::Duration};

/// RGBA color used when presenting frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red channel intensity in the range 0.0..=1.0.
    pub red: f32,
    /// Green channel intensity in the range 0.0..=1.0.
    pub green: f32,
    /// Blue channel intensity in the range 0.0..=1.0.
    pub blue: f32,
    /// Alpha channel intensity in the range 0.0..=1.0.
    pub alpha: f32,
}

impl Color {
    /// Creates a new color from floating point channels.
    #[must_use]
    pub const fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Creates an opaque color from byte RGB values.
    #[must_use]
    pub const fn from_rgb_u8(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: red as f32 / 255.0,
            green: green as f32 / 255.0,
            blue: blue as f32 / 255.0,
            alpha: 1.0,
        }
    }
}

/// Input gathered by adapters before updating the scene.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct FrameInput {
    /// Every input event observed since the previous frame, in arrival order.
    pub events: Vec<InputEvent>,
}

/// Describes the cell grid drawn by adapters, measured in screen pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridPresentation {
    /// Number of columns contained in the grid.
    pub columns: u32,
    /// Number of rows contained in the grid.
    pub rows: u32,
    /// Side length of a single square cell in pixels.
    pub cell_size: u32,
    /// Color used when drawing grid lines.
    pub line_color: Color,
    /// Color used to fill live cells.
    pub live_color: Color,
}

impl GridPresentation {
    /// Creates a new grid descriptor.
    ///
    /// Returns an error when any dimension or the cell size is zero.
    pub fn new(
        columns: u32,
        rows: u32,
        cell_size: u32,
        line_color: Color,
        live_color: Color,
    ) -> Result<Self, RenderingError> {
        if columns == 0 || rows == 0 {
            return Err(RenderingError::EmptyGrid { columns, rows });
        }
        if cell_size == 0 {
            return Err(RenderingError::InvalidCellSize { cell_size });
        }

        Ok(Self {
            columns,
            rows,
            cell_size,
            line_color,
            live_color,
        })
    }

    /// Total width of the grid in pixels.
    #[must_use]
    pub const fn width(&self) -> f32 {
        self.columns as f32 * self.cell_size as f32
    }

    /// Total height of the grid in pixels.
    #[must_use]
    pub const fn height(&self) -> f32 {
        self.rows as f32 * self.cell_size as f32
    }

    /// Maps a screen position to the cell underneath it.
    ///
    /// Returns `None` when the position lies outside the grid.
    #[must_use]
    pub fn cell_at(&self, position: Vec2) -> Option<CellCoord> {
        if !position.is_finite() || position.x < 0.0 || position.y < 0.0 {
            return None;
        }
        let size = self.cell_size as f32;
        let column = (position.x / size).floor();
        let row = (position.y / size).floor();
        if column >= self.columns as f32 || row >= self.rows as f32 {
            return None;
        }

        Some(CellCoord::new(column as i32, row as i32))
    }

    /// Screen position of the cell's upper-left corner.
    #[must_use]
    pub fn cell_origin(&self, cell: CellCoord) -> Vec2 {
        let size = self.cell_size as f32;
        Vec2::new(cell.x() as f32 * size, cell.y() as f32 * size)
    }
}

/// Scene description combining the grid and the current generation.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    /// Grid geometry and colors.
    pub grid: GridPresentation,
    /// Live cells of the generation on display.
    pub live_cells: Vec<CellCoord>,
    /// Mode the coordinator is in.
    pub mode: Mode,
    /// Generation counter shown during simulation.
    pub generation: u64,
}

impl Scene {
    /// Creates an empty setup-mode scene for the provided grid.
    #[must_use]
    pub fn new(grid: GridPresentation) -> Self {
        Self {
            grid,
            live_cells: Vec::new(),
            mode: Mode::Setup,
            generation: 0,
        }
    }

    /// Title text describing the scene.
    #[must_use]
    pub fn caption(&self) -> String {
        caption(self.mode, self.generation)
    }
}

/// Builds the title text for the given mode, listing the available controls.
#[must_use]
pub fn caption(mode: Mode, generation: u64) -> String {
    match mode {
        Mode::Setup => {
            let keys: String = std::iter::once(RANDOM_FILL_KEY)
                .chain(PatternKind::ALL.iter().map(|kind| kind.key()))
                .flat_map(|key| ['|', key])
                .collect();
            format!(
                "{WINDOW_TITLE} (set initial conditions [mouse{keys}] and press RETURN to start; or ESC to quit)"
            )
        }
        Mode::Simulation => format!(
            "{WINDOW_TITLE} (press RETURN to re-set the start conditions or ESC to quit) generation={generation}"
        ),
        Mode::Exit => WINDOW_TITLE.to_owned(),
    }
}

/// Presentation descriptor consumed by rendering backends.
#[derive(Clone, Debug, PartialEq)]
pub struct Presentation {
    /// Title used by the created window.
    pub window_title: String,
    /// Solid color used to clear each frame; dead cells show this color.
    pub clear_color: Color,
    /// Scene content that should be displayed.
    pub scene: Scene,
}

impl Presentation {
    /// Constructs a new presentation descriptor.
    #[must_use]
    pub fn new<T>(window_title: T, clear_color: Color, scene: Scene) -> Self
    where
        T: Into<String>,
    {
        Self {
            window_title: window_title.into(),
            clear_color,
            scene,
        }
    }
}

/// Decision returned by the scene update closure each frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameControl {
    /// Render the updated scene and keep running.
    Continue,
    /// Stop the frame loop and close the window.
    Exit,
}

/// Rendering backend capable of presenting Game of Life scenes.
pub trait RenderingBackend {
    /// Runs the rendering backend until it is requested to exit.
    ///
    /// The provided `update_scene` closure receives the elapsed frame time and
    /// the input captured by the adapter, may mutate the scene before it is
    /// rendered, and decides whether the loop continues. Closing the window
    /// ends the loop as well.
    fn run<F>(self, presentation: Presentation, update_scene: F) -> AnyResult<()>
    where
        F: FnMut(Duration, FrameInput, &mut Scene) -> FrameControl + 'static;
}

/// Fixed-rate frame limiter shared by backends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FramePacer {
    interval: Duration,
}

impl FramePacer {
    /// Creates a pacer targeting `frames_per_second` frames each second.
    pub fn from_fps(frames_per_second: u32) -> Result<Self, RenderingError> {
        if frames_per_second == 0 {
            return Err(RenderingError::InvalidFrameRate { frames_per_second });
        }

        Ok(Self {
            interval: Duration::from_secs(1) / frames_per_second,
        })
    }

    /// Target duration of a single frame.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Time left to wait after a frame that took `elapsed` to produce.
    #[must_use]
    pub fn remaining(&self, elapsed: Duration) -> Duration {
        self.interval.saturating_sub(elapsed)
    }
}

/// Errors that can occur when constructing rendering descriptors.
#[derive(Debug, PartialEq, Eq)]
pub enum RenderingError {
    /// Grids must contain at least one cell.
    EmptyGrid {
        /// Provided column count.
        columns: u32,
        /// Provided row count.
        rows: u32,
    },
    /// Cells must be at least one pixel wide.
    InvalidCellSize {
        /// Provided cell size that failed validation.
        cell_size: u32,
    },
    /// Frame pacing requires a positive rate.
    InvalidFrameRate {
        /// Provided frame rate that failed validation.
        frames_per_second: u32,
    },
}

impl fmt::Display for RenderingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid { columns, rows } => {
                write!(f, "grid must contain cells (received {columns}x{rows})")
            }
            Self::InvalidCellSize { cell_size } => {
                write!(f, "cell_size must be positive (received {cell_size})")
            }
            Self::InvalidFrameRate { frames_per_second } => {
                write!(
                    f,
                    "frames per second must be positive (received {frames_per_second})"
                )
            }
        }
    }
}

impl Error for RenderingError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(columns: u32, rows: u32, cell_size: u32) -> GridPresentation {
        GridPresentation::new(
            columns,
            rows,
            cell_size,
            Color::from_rgb_u8(40, 40, 40),
            Color::from_rgb_u8(255, 0, 0),
        )
        .expect("valid grid")
    }

    #[test]
    fn grid_creation_rejects_zero_cell_size_without_panicking() {
        let error = GridPresentation::new(
            10,
            5,
            0,
            Color::from_rgb_u8(0, 0, 0),
            Color::from_rgb_u8(0, 0, 0),
        )
        .expect_err("zero cell size must be rejected");

        assert_eq!(error, RenderingError::InvalidCellSize { cell_size: 0 });
    }

    #[test]
    fn grid_creation_rejects_empty_grids() {
        let error = GridPresentation::new(
            0,
            5,
            10,
            Color::from_rgb_u8(0, 0, 0),
            Color::from_rgb_u8(0, 0, 0),
        )
        .expect_err("empty grid must be rejected");

        assert_eq!(error, RenderingError::EmptyGrid { columns: 0, rows: 5 });
    }

    #[test]
    fn standard_grid_matches_window_size() {
        let grid = grid(102, 56, 10);
        assert_eq!(grid.width(), 1020.0);
        assert_eq!(grid.height(), 560.0);
    }

    #[test]
    fn cell_at_floors_pixel_positions() {
        let grid = grid(102, 56, 10);

        assert_eq!(grid.cell_at(Vec2::new(0.0, 0.0)), Some(CellCoord::new(0, 0)));
        assert_eq!(grid.cell_at(Vec2::new(9.9, 19.9)), Some(CellCoord::new(0, 1)));
        assert_eq!(
            grid.cell_at(Vec2::new(1019.5, 559.5)),
            Some(CellCoord::new(101, 55))
        );
    }

    #[test]
    fn cell_at_rejects_positions_outside_grid() {
        let grid = grid(102, 56, 10);

        assert!(grid.cell_at(Vec2::new(-0.5, 10.0)).is_none());
        assert!(grid.cell_at(Vec2::new(10.0, -3.0)).is_none());
        assert!(grid.cell_at(Vec2::new(1020.0, 10.0)).is_none());
        assert!(grid.cell_at(Vec2::new(10.0, 560.0)).is_none());
        assert!(grid.cell_at(Vec2::new(f32::NAN, 10.0)).is_none());
    }

    #[test]
    fn cell_origin_scales_by_cell_size() {
        let grid = grid(10, 10, 12);
        assert_eq!(grid.cell_origin(CellCoord::new(3, 2)), Vec2::new(36.0, 24.0));
    }

    #[test]
    fn setup_caption_lists_every_control() {
        assert_eq!(
            caption(Mode::Setup, 0),
            "Game of Life (set initial conditions [mouse|r|g|a|s|l|p|d] and press RETURN to start; or ESC to quit)"
        );
    }

    #[test]
    fn simulation_caption_reports_generation() {
        let mut scene = Scene::new(grid(4, 4, 10));
        scene.mode = Mode::Simulation;
        scene.generation = 42;

        assert_eq!(
            scene.caption(),
            "Game of Life (press RETURN to re-set the start conditions or ESC to quit) generation=42"
        );
    }

    #[test]
    fn frame_pacer_targets_the_configured_rate() {
        let pacer = FramePacer::from_fps(10).expect("positive rate");

        assert_eq!(pacer.interval(), Duration::from_millis(100));
        assert_eq!(pacer.remaining(Duration::from_millis(30)), Duration::from_millis(70));
        assert_eq!(pacer.remaining(Duration::from_millis(250)), Duration::ZERO);
    }

    #[test]
    fn frame_pacer_rejects_zero_rate() {
        assert_eq!(
            FramePacer::from_fps(0),
            Err(RenderingError::InvalidFrameRate {
                frames_per_second: 0
            })
        );
    }
}
