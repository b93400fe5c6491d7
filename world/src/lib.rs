#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative board state management for Torus Life.

use torus_life_core::{BoardSize, Cell, Command, Event, ToggleError};
use torus_life_system_generation::Generation;
use torus_life_system_seeding::{self as seeding, Seeding};
use tracing::{debug, warn};

/// Configuration parameters required to construct the world.
#[derive(Clone, Copy, Debug, Default)]
pub struct Config {
    size: BoardSize,
    seeding: seeding::Config,
}

impl Config {
    /// Creates a new configuration for a board of the provided size.
    #[must_use]
    pub const fn new(size: BoardSize, seeding: seeding::Config) -> Self {
        Self { size, seeding }
    }

    /// Dimensions of the board.
    #[must_use]
    pub const fn size(&self) -> BoardSize {
        self.size
    }

    /// Parameters used when the board is randomized.
    #[must_use]
    pub const fn seeding(&self) -> seeding::Config {
        self.seeding
    }
}

/// Represents the authoritative Torus Life board state.
#[derive(Debug)]
pub struct World {
    generation: Generation,
    seeding: Seeding,
    running: bool,
    step: u64,
}

impl World {
    /// Creates a new world with every cell dead and auto-run disabled.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            generation: Generation::new(config.size()),
            seeding: Seeding::new(config.seeding()),
            running: false,
            step: 0,
        }
    }

    fn advance(&mut self, out_events: &mut Vec<Event>) {
        let _ = self.generation.advance();
        self.step = self.step.saturating_add(1);
        debug!(step = self.step, "advanced generation");
        out_events.push(Event::GenerationAdvanced { step: self.step });
    }

    fn stop(&mut self, out_events: &mut Vec<Event>) {
        if self.running {
            self.running = false;
            out_events.push(Event::AutoRunChanged { running: false });
        }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

/// Applies the provided command to the world, mutating state deterministically.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::Step => {
            world.advance(out_events);
            world.stop(out_events);
        }
        Command::AutoStep => {
            if world.running {
                world.advance(out_events);
            } else {
                out_events.push(Event::AutoStepSkipped);
            }
        }
        Command::ToggleCell { cell } => match world.generation.current_mut().toggle(cell) {
            Some(toggled) => out_events.push(Event::CellToggled {
                cell,
                alive: toggled.is_alive(),
            }),
            None => {
                warn!(
                    x = cell.column(),
                    y = cell.row(),
                    "rejected toggle outside the board"
                );
                out_events.push(Event::ToggleRejected {
                    cell,
                    reason: ToggleError::OutOfBounds,
                });
            }
        },
        Command::Clear => {
            world.generation.current_mut().fill(Cell::DEAD);
            world.step = 0;
            world.stop(out_events);
            debug!("cleared board");
            out_events.push(Event::BoardCleared);
        }
        Command::Randomize => {
            let population = world.seeding.fill(world.generation.current_mut());
            world.step = 0;
            world.stop(out_events);
            debug!(population, "randomized board");
            out_events.push(Event::BoardRandomized { population });
        }
        Command::ToggleAutoRun => {
            world.running = !world.running;
            debug!(running = world.running, "toggled auto-run");
            out_events.push(Event::AutoRunChanged {
                running: world.running,
            });
        }
    }
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use serde::Serialize;
    use torus_life_core::{BoardSize, Cell, CellCoord, Grid};

    use super::World;

    /// Provides read-only access to the live board.
    #[must_use]
    pub fn grid(world: &World) -> &Grid {
        world.generation.current()
    }

    /// Dimensions of the board.
    #[must_use]
    pub fn size(world: &World) -> BoardSize {
        world.generation.size()
    }

    /// Reports whether auto-step polls currently advance the board.
    #[must_use]
    pub fn is_running(world: &World) -> bool {
        world.running
    }

    /// Number of generations advanced since the last clear or randomize.
    #[must_use]
    pub fn step(world: &World) -> u64 {
        world.step
    }

    /// Returns the state of a single cell, if it lies on the board.
    #[must_use]
    pub fn cell(world: &World, cell: CellCoord) -> Option<Cell> {
        world.generation.current().cell(cell)
    }

    /// Captures a serialisable view of the complete board state.
    #[must_use]
    pub fn snapshot(world: &World) -> Snapshot<'_> {
        let size = size(world);
        Snapshot {
            grid: grid(world),
            width: size.width(),
            height: size.height(),
            running: world.running,
            step: world.step,
        }
    }

    /// Read-only snapshot of the board and its control state.
    #[derive(Clone, Copy, Debug, Serialize)]
    pub struct Snapshot<'a> {
        /// Live board, serialised as rows of cells.
        pub grid: &'a Grid,
        /// Number of columns on the board.
        pub width: u32,
        /// Number of rows on the board.
        pub height: u32,
        /// Whether auto-step polls currently advance the board.
        pub running: bool,
        /// Number of generations advanced since the last reset.
        pub step: u64,
    }
}
