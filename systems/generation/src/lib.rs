#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Double-buffered generation engine implementing Conway's B3/S23 rule.
//!
//! The engine owns two equally sized grids. Advancing writes the next
//! generation into the scratch grid while reading only from the live one, then
//! exchanges the two buffers. No allocation happens after construction.

use std::mem;

use torus_life_core::{BoardSize, Cell, Grid};

/// Decides whether a cell is alive in the next generation.
///
/// A live cell survives with two or three live neighbours; a dead cell is
/// born with exactly three.
#[must_use]
pub const fn next_state(alive: bool, neighbors: u8) -> bool {
    matches!((alive, neighbors), (true, 2) | (true, 3) | (false, 3))
}

/// Writes the generation following `source` into `target`.
///
/// Every cell is computed from `source` alone, so the update is synchronous
/// regardless of iteration order. Both grids must share the same size.
pub fn advance_into(source: &Grid, target: &mut Grid) {
    debug_assert_eq!(source.size(), target.size(), "generation buffers differ in size");

    let size = source.size();
    for (index, (slot, current)) in target
        .cells_mut()
        .iter_mut()
        .zip(source.cells())
        .enumerate()
    {
        let neighbors = source.live_neighbors(size.coord_at(index));
        *slot = Cell::new(next_state(current.is_alive(), neighbors));
    }
}

/// Two-slot buffer pool holding the live board and its scratch companion.
#[derive(Clone, Debug)]
pub struct Generation {
    current: Grid,
    scratch: Grid,
}

impl Generation {
    /// Creates an engine whose live board has every cell dead.
    #[must_use]
    pub fn new(size: BoardSize) -> Self {
        Self {
            current: Grid::new(size),
            scratch: Grid::new(size),
        }
    }

    /// Creates an engine that starts from the provided board.
    #[must_use]
    pub fn from_grid(grid: Grid) -> Self {
        let scratch = Grid::new(grid.size());
        Self {
            current: grid,
            scratch,
        }
    }

    /// Live board.
    #[must_use]
    pub fn current(&self) -> &Grid {
        &self.current
    }

    /// Mutable access to the live board for direct edits such as toggles.
    pub fn current_mut(&mut self) -> &mut Grid {
        &mut self.current
    }

    /// Dimensions shared by both buffers.
    #[must_use]
    pub fn size(&self) -> BoardSize {
        self.current.size()
    }

    /// Advances the live board by one generation and returns it.
    pub fn advance(&mut self) -> &Grid {
        advance_into(&self.current, &mut self.scratch);
        mem::swap(&mut self.current, &mut self.scratch);
        &self.current
    }
}
