#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure setup-mode system that turns keyboard and mouse input into board edits.

use life_core::{Command, GridDimensions, InputEvent, Key, Mode, RANDOM_FILL_KEY};
use life_pattern_catalog::{for_key, RandomFill};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Setup-mode system that lets the user compose the initial generation.
#[derive(Clone, Debug)]
pub struct Setup {
    rng: ChaCha8Rng,
    fill: RandomFill,
}

impl Setup {
    /// Creates a setup system whose random fills are derived from `seed`.
    #[must_use]
    pub fn new(seed: u64, fill: RandomFill) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            fill,
        }
    }

    /// Random-fill settings applied by the `r` action.
    #[must_use]
    pub const fn fill(&self) -> RandomFill {
        self.fill
    }

    /// Translates one frame of input into commands, in arrival order.
    ///
    /// Pattern and random-fill selections clear the board first, so the last
    /// selection wins. The first commit (`Return`) or exit (`Escape`) ends
    /// processing; any events after it in the same frame are discarded.
    pub fn handle(
        &mut self,
        input: &[InputEvent],
        dimensions: GridDimensions,
        out: &mut Vec<Command>,
    ) {
        for event in input {
            match *event {
                InputEvent::KeyPressed {
                    key: Key::Character(character),
                } => self.select(character, dimensions, out),
                InputEvent::KeyPressed { key: Key::Return } => {
                    out.push(Command::SetMode {
                        mode: Mode::Simulation,
                    });
                    return;
                }
                InputEvent::KeyPressed { key: Key::Escape } => {
                    out.push(Command::SetMode { mode: Mode::Exit });
                    return;
                }
                InputEvent::CellClicked { cell } => out.push(Command::ToggleCell { cell }),
            }
        }
    }

    fn select(&mut self, character: char, dimensions: GridDimensions, out: &mut Vec<Command>) {
        if character.eq_ignore_ascii_case(&RANDOM_FILL_KEY) {
            out.push(Command::ClearGrid);
            out.push(Command::Randomize {
                density: self.fill.density(),
                seed: self.rng.next_u64(),
            });
        } else if let Some(pattern) = for_key(character) {
            out.push(Command::ClearGrid);
            out.push(Command::PlacePattern {
                pattern: pattern.kind(),
                origin: pattern.origin_within(dimensions),
            });
        }
    }
}
