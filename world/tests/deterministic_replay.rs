use torus_life_core::{BoardSize, CellCoord, Command, Event, Grid};
use torus_life_system_seeding::{Config as SeedingConfig, Density};
use torus_life_world::{self as world, query, Config, World};

#[test]
fn replaying_a_session_is_deterministic() {
    let first = replay(session_script(), 0x5eed);
    let second = replay(session_script(), 0x5eed);

    assert_eq!(first, second, "session replay diverged");
    assert_eq!(first.final_step, 3);
    assert!(first.final_running, "script ends with auto-run enabled");
}

#[test]
fn different_seeds_only_diverge_after_randomize() {
    let script = vec![
        toggle(1, 1),
        toggle(2, 1),
        toggle(3, 1),
        Command::Step,
        Command::Randomize,
    ];
    let first = replay(script.clone(), 1);
    let second = replay(script, 2);

    assert_eq!(first.events[..4], second.events[..4]);
    assert_ne!(first.final_grid, second.final_grid);
}

#[test]
fn glider_crosses_the_board_edge() {
    let size = BoardSize::new(10, 10).expect("valid board size");
    let mut world = World::new(Config::new(size, SeedingConfig::default()));
    let glider = [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];
    let mut events = Vec::new();
    for &(column, row) in &glider {
        world::apply(&mut world, toggle(column, row), &mut events);
    }
    world::apply(&mut world, Command::ToggleAutoRun, &mut events);

    for _ in 0..40 {
        world::apply(&mut world, Command::AutoStep, &mut events);
    }

    let expected = Grid::from_live_cells(
        size,
        glider.iter().map(|&(column, row)| CellCoord::new(column, row)),
    );
    assert_eq!(query::step(&world), 40);
    assert_eq!(
        query::grid(&world),
        &expected,
        "glider should return to its start after circling the torus:\n{}",
        query::grid(&world),
    );
}

fn replay(commands: Vec<Command>, seed: u64) -> ReplayOutcome {
    let size = BoardSize::new(12, 9).expect("valid board size");
    let seeding = SeedingConfig::new(Density::default(), Some(seed));
    let mut world = World::new(Config::new(size, seeding));
    let mut events = Vec::new();

    for command in commands {
        world::apply(&mut world, command, &mut events);
    }

    ReplayOutcome {
        events,
        final_grid: query::grid(&world).clone(),
        final_step: query::step(&world),
        final_running: query::is_running(&world),
    }
}

fn session_script() -> Vec<Command> {
    vec![
        Command::Randomize,
        toggle(0, 0),
        toggle(11, 8),
        toggle(20, 3),
        Command::Step,
        Command::ToggleAutoRun,
        Command::AutoStep,
        Command::AutoStep,
        Command::ToggleAutoRun,
        Command::AutoStep,
        Command::ToggleAutoRun,
    ]
}

fn toggle(column: u32, row: u32) -> Command {
    Command::ToggleCell {
        cell: CellCoord::new(column, row),
    }
}

#[derive(Debug, PartialEq, Eq)]
struct ReplayOutcome {
    events: Vec<Event>,
    final_grid: Grid,
    final_step: u64,
    final_running: bool,
}
