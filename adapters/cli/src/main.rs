#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that boots the Game of Life experience.

mod config;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use life_core::WINDOW_TITLE;
use life_pattern_catalog::RandomFill;
use life_rendering::{
    Color, FrameControl, GridPresentation, Presentation, RenderingBackend, Scene,
};
use life_rendering_macroquad::MacroquadBackend;
use life_system_coordinator::{Coordinator, CoordinatorConfig};
use life_world::query;

use crate::config::LifeConfig;

const BACKGROUND_COLOR: Color = Color::from_rgb_u8(0, 0, 0);
const GRID_LINE_COLOR: Color = Color::from_rgb_u8(40, 40, 40);
const LIVE_CELL_COLOR: Color = Color::from_rgb_u8(255, 0, 0);

#[derive(Debug, Parser)]
#[command(name = "game-of-life", version, about = "Conway's Game of Life")]
struct CliArgs {
    /// TOML file with session settings.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Seed for random fills, for reproducible sessions.
    #[arg(long)]
    seed: Option<u64>,
    /// Frames, and therefore generations, per second.
    #[arg(long, value_name = "FPS")]
    fps: Option<u32>,
    /// Probability of life used by the random fill.
    #[arg(long)]
    density: Option<f64>,
    /// Log the measured frame rate once per second.
    #[arg(long)]
    show_fps: bool,
}

impl CliArgs {
    fn resolve_config(&self) -> Result<LifeConfig> {
        let mut config = match &self.config {
            Some(path) => LifeConfig::load(path)?,
            None => LifeConfig::default(),
        };

        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(fps) = self.fps {
            config.frames_per_second = fps;
        }
        if let Some(density) = self.density {
            config.density = density;
        }
        if self.show_fps {
            config.show_fps = true;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Entry point for the Game of Life command-line interface.
fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = CliArgs::parse();
    let config = args
        .resolve_config()
        .context("invalid configuration")?;
    let seed = config.seed.unwrap_or_else(rand::random);
    log::info!("starting session with {config:?}; random fill seed {seed}");

    let coordinator = Coordinator::new(CoordinatorConfig {
        dimensions: config.grid_dimensions(),
        seed,
        fill: RandomFill::new(config.density),
    })
    .context("failed to create grid")?;

    let backend = MacroquadBackend::new()
        .with_frames_per_second(config.frames_per_second)
        .with_show_fps(config.show_fps);

    run(backend, coordinator, config.cell_size)
}

fn run<B>(backend: B, mut coordinator: Coordinator, cell_size: u32) -> Result<()>
where
    B: RenderingBackend,
{
    let dimensions = query::dimensions(coordinator.world());
    let grid = GridPresentation::new(
        dimensions.columns(),
        dimensions.rows(),
        cell_size,
        GRID_LINE_COLOR,
        LIVE_CELL_COLOR,
    )
    .context("failed to describe grid")?;
    let mut scene = Scene::new(grid);
    populate_scene(&coordinator, &mut scene);
    let presentation = Presentation::new(WINDOW_TITLE, BACKGROUND_COLOR, scene);

    backend.run(presentation, move |_dt, input, scene| {
        let mode = coordinator.frame(&input.events);
        populate_scene(&coordinator, scene);
        if mode.is_terminal() {
            FrameControl::Exit
        } else {
            FrameControl::Continue
        }
    })
}

fn populate_scene(coordinator: &Coordinator, scene: &mut Scene) {
    scene.mode = coordinator.mode();
    scene.generation = coordinator.generation();
    scene.live_cells.clear();
    scene
        .live_cells
        .extend(query::grid(coordinator.world()).live_cells());
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;
    use life_core::{CellCoord, GridDimensions, InputEvent, Key, Mode};
    use life_rendering::FrameInput;
    use std::{cell::RefCell, rc::Rc, time::Duration};

    struct ScriptedBackend {
        frames: Vec<Vec<InputEvent>>,
        rendered: Rc<RefCell<Vec<Scene>>>,
    }

    impl RenderingBackend for ScriptedBackend {
        fn run<F>(self, presentation: Presentation, mut update_scene: F) -> Result<()>
        where
            F: FnMut(Duration, FrameInput, &mut Scene) -> FrameControl + 'static,
        {
            assert_eq!(presentation.window_title, WINDOW_TITLE);
            let mut scene = presentation.scene;
            for events in self.frames {
                let control =
                    update_scene(Duration::from_millis(100), FrameInput { events }, &mut scene);
                self.rendered.borrow_mut().push(scene.clone());
                if control == FrameControl::Exit {
                    return Ok(());
                }
            }
            bail!("script ended before the session exited")
        }
    }

    fn key(key: Key) -> InputEvent {
        InputEvent::KeyPressed { key }
    }

    fn play(frames: Vec<Vec<InputEvent>>) -> Result<Vec<Scene>> {
        let coordinator = Coordinator::new(CoordinatorConfig::new(GridDimensions::new(12, 8), 3))
            .expect("valid grid");
        let rendered = Rc::new(RefCell::new(Vec::new()));
        let backend = ScriptedBackend {
            frames,
            rendered: Rc::clone(&rendered),
        };

        run(backend, coordinator, 10)?;
        let scenes = rendered.borrow().clone();
        Ok(scenes)
    }

    #[test]
    fn session_renders_setup_then_simulation_until_escape() {
        let scenes = play(vec![
            vec![key(Key::Character('l'))],
            vec![key(Key::Return)],
            vec![],
            vec![key(Key::Escape)],
        ])
        .expect("session exits cleanly");

        assert_eq!(scenes.len(), 4);
        assert_eq!(scenes[0].mode, Mode::Setup);
        assert_eq!(scenes[0].live_cells.len(), 5);
        assert_eq!(scenes[1].mode, Mode::Simulation);
        assert_eq!(scenes[1].generation, 0);
        assert_eq!(scenes[2].generation, 1);
        assert_eq!(scenes[3].mode, Mode::Exit);
    }

    #[test]
    fn escape_in_setup_ends_the_session_immediately() {
        let scenes = play(vec![vec![key(Key::Escape)], vec![key(Key::Return)]])
            .expect("session exits cleanly");

        assert_eq!(scenes.len(), 1);
        assert_eq!(scenes[0].mode, Mode::Exit);
    }

    #[test]
    fn clicks_show_up_in_the_rendered_scene() {
        let scenes = play(vec![
            vec![InputEvent::CellClicked {
                cell: CellCoord::new(2, 3),
            }],
            vec![key(Key::Escape)],
        ])
        .expect("session exits cleanly");

        assert_eq!(scenes[0].live_cells, vec![CellCoord::new(2, 3)]);
    }

    #[test]
    fn flags_override_defaults() {
        let args = CliArgs::try_parse_from([
            "game-of-life",
            "--seed",
            "17",
            "--fps",
            "25",
            "--density",
            "0.5",
            "--show-fps",
        ])
        .expect("valid flags");
        let config = args.resolve_config().expect("valid config");

        assert_eq!(config.seed, Some(17));
        assert_eq!(config.frames_per_second, 25);
        assert_eq!(config.density, 0.5);
        assert!(config.show_fps);
    }

    #[test]
    fn no_flags_yield_the_default_session() {
        let args = CliArgs::try_parse_from(["game-of-life"]).expect("no flags");
        let config = args.resolve_config().expect("valid config");

        assert_eq!(config, LifeConfig::default());
    }

    #[test]
    fn invalid_flag_values_are_rejected_at_startup() {
        let args = CliArgs::try_parse_from(["game-of-life", "--fps", "0"]).expect("parses");
        assert!(args.resolve_config().is_err());
    }
}
