#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure simulation-mode system that steps the board once per tick.

use life_core::{Command, InputEvent, Key, Mode};

/// Simulation-mode system that advances one generation per frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct Simulation;

impl Simulation {
    /// Creates a new simulation system instance.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Consumes one frame of input and emits the commands for this tick.
    ///
    /// `Return` resets to setup and `Escape` exits; on such a tick the board
    /// does not advance. Every other input is ignored.
    pub fn handle(&self, input: &[InputEvent], out: &mut Vec<Command>) {
        for event in input {
            let mode = match event {
                InputEvent::KeyPressed { key: Key::Return } => Mode::Setup,
                InputEvent::KeyPressed { key: Key::Escape } => Mode::Exit,
                _ => continue,
            };
            out.push(Command::SetMode { mode });
            return;
        }

        out.push(Command::AdvanceGeneration);
    }
}
