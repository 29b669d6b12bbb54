#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Macroquad-backed rendering adapter for the Game of Life.
//!
//! Macroquad's optional audio stack depends on native ALSA development
//! libraries, which are unavailable in the containerised CI environment.
//! To keep `cargo test` usable everywhere we depend on macroquad without its
//! default `audio` feature.
//!
//! Macroquad 0.3 cannot retitle a window after creation, so the per-mode
//! caption is drawn as an overlay along the top edge of the grid.

use anyhow::{Context, Result};
use glam::Vec2;
use life_core::{InputEvent, Key};
use life_rendering::{
    Color, FrameControl, FrameInput, FramePacer, GridPresentation, Presentation,
    RenderingBackend, Scene,
};
use macroquad::input::{
    get_char_pressed, is_key_pressed, is_mouse_button_released, mouse_position, KeyCode,
    MouseButton,
};
use std::{
    thread,
    time::{Duration, Instant},
};

const DEFAULT_FRAMES_PER_SECOND: u32 = 10;
const CAPTION_FONT_SIZE: f32 = 16.0;
const CAPTION_BAND_HEIGHT: f32 = 20.0;

/// Rendering backend implemented on top of macroquad.
#[derive(Debug)]
pub struct MacroquadBackend {
    frames_per_second: u32,
    show_fps: bool,
}

impl Default for MacroquadBackend {
    fn default() -> Self {
        Self {
            frames_per_second: DEFAULT_FRAMES_PER_SECOND,
            show_fps: false,
        }
    }
}

impl MacroquadBackend {
    /// Returns a backend running at the default ten frames per second.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the number of frames, and therefore generations, per second.
    #[must_use]
    pub fn with_frames_per_second(mut self, frames_per_second: u32) -> Self {
        self.frames_per_second = frames_per_second;
        self
    }

    /// Configures whether the backend logs the measured frame rate once per second.
    #[must_use]
    pub fn with_show_fps(mut self, show: bool) -> Self {
        self.show_fps = show;
        self
    }
}

#[derive(Clone, Copy, Debug, Default)]
struct FpsCounter {
    elapsed: Duration,
    frames: u32,
}

impl FpsCounter {
    /// Records a rendered frame and returns the average rate once a second has elapsed.
    fn record_frame(&mut self, frame: Duration) -> Option<f32> {
        self.elapsed += frame;
        self.frames = self.frames.saturating_add(1);

        if self.elapsed < Duration::from_secs(1) {
            return None;
        }

        let seconds = self.elapsed.as_secs_f32();
        let per_second = self.frames as f32 / seconds;
        self.elapsed = Duration::ZERO;
        self.frames = 0;
        Some(per_second)
    }
}

impl RenderingBackend for MacroquadBackend {
    fn run<F>(self, presentation: Presentation, mut update_scene: F) -> Result<()>
    where
        F: FnMut(Duration, FrameInput, &mut Scene) -> FrameControl + 'static,
    {
        let Self {
            frames_per_second,
            show_fps,
        } = self;
        let pacer = FramePacer::from_fps(frames_per_second).context("invalid frame rate")?;

        let Presentation {
            window_title,
            clear_color,
            scene,
        } = presentation;

        let config = macroquad::window::Conf {
            window_title,
            window_width: scene.grid.width() as i32,
            window_height: scene.grid.height() as i32,
            window_resizable: false,
            ..macroquad::window::Conf::default()
        };
        log::info!(
            "opening {}x{} window at {} frames per second",
            config.window_width,
            config.window_height,
            frames_per_second
        );

        macroquad::Window::from_config(config, async move {
            let mut scene = scene;
            let background = to_macroquad_color(clear_color);
            let mut fps_counter = FpsCounter::default();
            let mut previous_frame = Instant::now();

            loop {
                let frame_start = Instant::now();
                let frame_dt = frame_start.duration_since(previous_frame);
                previous_frame = frame_start;

                let frame_input = gather_frame_input(&scene.grid);
                if update_scene(frame_dt, frame_input, &mut scene) == FrameControl::Exit {
                    log::info!("frame loop finished");
                    break;
                }

                macroquad::window::clear_background(background);
                draw_cells(&scene);
                draw_grid_lines(&scene.grid);
                draw_caption(&scene);

                if show_fps {
                    if let Some(per_second) = fps_counter.record_frame(frame_dt) {
                        log::info!("FPS: {per_second:.2}");
                    }
                }

                thread::sleep(pacer.remaining(frame_start.elapsed()));
                macroquad::window::next_frame().await;
            }
        });

        Ok(())
    }
}

fn gather_frame_input(grid: &GridPresentation) -> FrameInput {
    let mut characters = Vec::new();
    while let Some(character) = get_char_pressed() {
        characters.push(character);
    }

    let click = if is_mouse_button_released(MouseButton::Left) {
        let (x, y) = mouse_position();
        Some(Vec2::new(x, y))
    } else {
        None
    };
    let return_pressed = is_key_pressed(KeyCode::Enter) || is_key_pressed(KeyCode::KpEnter);
    let escape_pressed = is_key_pressed(KeyCode::Escape);

    gather_frame_input_from_observations(
        grid,
        &characters,
        click,
        return_pressed,
        escape_pressed,
    )
}

/// Orders one frame of observations into input events.
///
/// Macroquad reports keys and clicks through separate queues, so edits are
/// emitted first, then `Escape`, then `Return`.
fn gather_frame_input_from_observations(
    grid: &GridPresentation,
    characters: &[char],
    click: Option<Vec2>,
    return_pressed: bool,
    escape_pressed: bool,
) -> FrameInput {
    let mut events: Vec<InputEvent> = characters
        .iter()
        .filter(|character| !character.is_control())
        .map(|&character| InputEvent::KeyPressed {
            key: Key::Character(character),
        })
        .collect();

    if let Some(cell) = click.and_then(|position| grid.cell_at(position)) {
        events.push(InputEvent::CellClicked { cell });
    }
    if escape_pressed {
        events.push(InputEvent::KeyPressed { key: Key::Escape });
    }
    if return_pressed {
        events.push(InputEvent::KeyPressed { key: Key::Return });
    }

    FrameInput { events }
}

fn draw_cells(scene: &Scene) {
    let grid = scene.grid;
    let size = grid.cell_size as f32;
    let color = to_macroquad_color(grid.live_color);
    for &cell in &scene.live_cells {
        let origin = grid.cell_origin(cell);
        macroquad::shapes::draw_rectangle(origin.x, origin.y, size, size, color);
    }
}

fn draw_grid_lines(grid: &GridPresentation) {
    let color = to_macroquad_color(grid.line_color);
    let size = grid.cell_size as f32;

    for column in 0..grid.columns {
        let x = column as f32 * size;
        macroquad::shapes::draw_line(x, 0.0, x, grid.height(), 1.0, color);
    }

    for row in 0..grid.rows {
        let y = row as f32 * size;
        macroquad::shapes::draw_line(0.0, y, grid.width(), y, 1.0, color);
    }
}

fn draw_caption(scene: &Scene) {
    let band = macroquad::color::Color::new(0.0, 0.0, 0.0, 0.6);
    macroquad::shapes::draw_rectangle(0.0, 0.0, scene.grid.width(), CAPTION_BAND_HEIGHT, band);
    let _ = macroquad::text::draw_text(
        &scene.caption(),
        4.0,
        CAPTION_FONT_SIZE - 2.0,
        CAPTION_FONT_SIZE,
        macroquad::color::WHITE,
    );
}

fn to_macroquad_color(color: Color) -> macroquad::color::Color {
    macroquad::color::Color::new(color.red, color.green, color.blue, color.alpha)
}

#[cfg(test)]
mod tests {
    use super::*;
    use life_core::CellCoord;

    fn grid() -> GridPresentation {
        GridPresentation::new(
            102,
            56,
            10,
            Color::from_rgb_u8(40, 40, 40),
            Color::from_rgb_u8(255, 0, 0),
        )
        .expect("valid grid")
    }

    #[test]
    fn quiet_frames_produce_no_events() {
        let input = gather_frame_input_from_observations(&grid(), &[], None, false, false);
        assert!(input.events.is_empty());
    }

    #[test]
    fn clicks_map_to_the_cell_under_the_cursor() {
        let input = gather_frame_input_from_observations(
            &grid(),
            &[],
            Some(Vec2::new(35.0, 12.0)),
            false,
            false,
        );

        assert_eq!(
            input.events,
            vec![InputEvent::CellClicked {
                cell: CellCoord::new(3, 1)
            }]
        );
    }

    #[test]
    fn clicks_outside_the_grid_are_dropped() {
        let input = gather_frame_input_from_observations(
            &grid(),
            &[],
            Some(Vec2::new(1030.0, 12.0)),
            false,
            false,
        );
        assert!(input.events.is_empty());
    }

    #[test]
    fn control_characters_are_not_reported_as_keys() {
        let input = gather_frame_input_from_observations(
            &grid(),
            &['\r', 'g', '\u{1b}', 'R'],
            None,
            false,
            false,
        );

        assert_eq!(
            input.events,
            vec![
                InputEvent::KeyPressed {
                    key: Key::Character('g')
                },
                InputEvent::KeyPressed {
                    key: Key::Character('R')
                },
            ]
        );
    }

    #[test]
    fn edits_precede_escape_and_return() {
        let input = gather_frame_input_from_observations(
            &grid(),
            &['a'],
            Some(Vec2::new(5.0, 5.0)),
            true,
            true,
        );

        assert_eq!(
            input.events,
            vec![
                InputEvent::KeyPressed {
                    key: Key::Character('a')
                },
                InputEvent::CellClicked {
                    cell: CellCoord::new(0, 0)
                },
                InputEvent::KeyPressed { key: Key::Escape },
                InputEvent::KeyPressed { key: Key::Return },
            ]
        );
    }

    #[test]
    fn fps_counter_reports_once_per_second() {
        let mut counter = FpsCounter::default();
        let frame = Duration::from_millis(100);

        for _ in 0..9 {
            assert!(counter.record_frame(frame).is_none());
        }
        let rate = counter.record_frame(frame).expect("one second elapsed");
        assert!((rate - 10.0).abs() < 1e-3);
        assert!(counter.record_frame(frame).is_none());
    }
}
