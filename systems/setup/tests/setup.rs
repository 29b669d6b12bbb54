use life_core::{CellCoord, Command, GridDimensions, InputEvent, Key, Mode, PatternKind};
use life_pattern_catalog::RandomFill;
use life_system_setup::Setup;

const STANDARD: GridDimensions = GridDimensions::new(102, 56);

fn press(character: char) -> InputEvent {
    InputEvent::KeyPressed {
        key: Key::Character(character),
    }
}

fn click(x: i32, y: i32) -> InputEvent {
    InputEvent::CellClicked {
        cell: CellCoord::new(x, y),
    }
}

fn handle(setup: &mut Setup, input: &[InputEvent]) -> Vec<Command> {
    let mut commands = Vec::new();
    setup.handle(input, STANDARD, &mut commands);
    commands
}

#[test]
fn pattern_keys_clear_then_place_at_the_catalog_origin() {
    let mut setup = Setup::new(0, RandomFill::default());

    let commands = handle(&mut setup, &[press('g'), press('A')]);

    assert_eq!(
        commands,
        vec![
            Command::ClearGrid,
            Command::PlacePattern {
                pattern: PatternKind::GosperGliderGun,
                origin: CellCoord::new(20, 6),
            },
            Command::ClearGrid,
            Command::PlacePattern {
                pattern: PatternKind::Acorn,
                origin: CellCoord::new(48, 27),
            },
        ],
        "each selection should overwrite the previous board",
    );
}

#[test]
fn random_fill_clears_then_randomizes_with_configured_density() {
    let mut setup = Setup::new(11, RandomFill::new(0.6));

    let commands = handle(&mut setup, &[press('r')]);

    assert_eq!(commands.len(), 2);
    assert_eq!(commands[0], Command::ClearGrid);
    assert!(
        matches!(commands[1], Command::Randomize { density, .. } if density == 0.6),
        "unexpected command: {:?}",
        commands[1]
    );
}

#[test]
fn random_fill_seeds_are_reproducible() {
    let mut first = Setup::new(42, RandomFill::default());
    let mut second = Setup::new(42, RandomFill::default());
    let input = [press('r'), press('r'), press('r')];

    assert_eq!(handle(&mut first, &input), handle(&mut second, &input));
}

#[test]
fn clicks_toggle_cells() {
    let mut setup = Setup::new(0, RandomFill::default());

    let commands = handle(&mut setup, &[click(4, 7), click(4, 7)]);

    let toggle = Command::ToggleCell {
        cell: CellCoord::new(4, 7),
    };
    assert_eq!(commands, vec![toggle.clone(), toggle]);
}

#[test]
fn unbound_keys_are_ignored() {
    let mut setup = Setup::new(0, RandomFill::default());

    let commands = handle(&mut setup, &[press('x'), press('7'), press(' ')]);

    assert!(commands.is_empty(), "unexpected commands: {commands:?}");
}

#[test]
fn return_commits_and_discards_the_rest_of_the_frame() {
    let mut setup = Setup::new(0, RandomFill::default());

    let commands = handle(
        &mut setup,
        &[
            click(1, 1),
            InputEvent::KeyPressed { key: Key::Return },
            press('g'),
            InputEvent::KeyPressed { key: Key::Escape },
        ],
    );

    assert_eq!(
        commands,
        vec![
            Command::ToggleCell {
                cell: CellCoord::new(1, 1),
            },
            Command::SetMode {
                mode: Mode::Simulation,
            },
        ]
    );
}

#[test]
fn escape_requests_exit_immediately() {
    let mut setup = Setup::new(0, RandomFill::default());

    let commands = handle(
        &mut setup,
        &[
            InputEvent::KeyPressed { key: Key::Escape },
            InputEvent::KeyPressed { key: Key::Return },
        ],
    );

    assert_eq!(commands, vec![Command::SetMode { mode: Mode::Exit }]);
}

#[test]
fn centred_patterns_follow_the_grid_size() {
    let mut setup = Setup::new(0, RandomFill::default());
    let mut commands = Vec::new();

    setup.handle(&[press('p')], GridDimensions::new(20, 10), &mut commands);

    assert_eq!(
        commands[1],
        Command::PlacePattern {
            pattern: PatternKind::RPentomino,
            origin: CellCoord::new(9, 4),
        }
    );
}
