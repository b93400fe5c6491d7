#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Torus Life engine.
//!
//! This crate defines the board representation and the message surface that
//! connects adapters to the authoritative world. Adapters submit [`Command`]
//! values describing desired board mutations, the world executes those
//! commands via its `apply` entry point, and then reports the outcome as
//! [`Event`] values. The [`Grid`] type is the dense toroidal cell matrix that
//! every layer reads from.

use std::fmt;

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Board width used when no explicit configuration is supplied.
pub const DEFAULT_BOARD_WIDTH: u32 = 50;

/// Board height used when no explicit configuration is supplied.
pub const DEFAULT_BOARD_HEIGHT: u32 = 30;

/// Largest number of cells a board may hold.
pub const MAX_BOARD_CELLS: u64 = 1 << 22;

/// Commands that express all permissible board mutations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    /// Advances the board by one generation and disables auto-run.
    Step,
    /// Advances the board by one generation only while auto-run is enabled.
    AutoStep,
    /// Flips the state of a single cell.
    ToggleCell {
        /// Cell whose state should be inverted.
        cell: CellCoord,
    },
    /// Kills every cell and resets the step counter.
    Clear,
    /// Refills the board with random cells and resets the step counter.
    Randomize,
    /// Inverts the auto-run flag.
    ToggleAutoRun,
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Event {
    /// Confirms that the board advanced by one generation.
    GenerationAdvanced {
        /// Value of the step counter after the advance.
        step: u64,
    },
    /// Reports that an auto-step poll was ignored because auto-run is disabled.
    AutoStepSkipped,
    /// Confirms that a cell changed state.
    CellToggled {
        /// Cell that was flipped.
        cell: CellCoord,
        /// State of the cell after the flip.
        alive: bool,
    },
    /// Reports that a toggle request was rejected without changing the board.
    ToggleRejected {
        /// Cell named in the rejected request.
        cell: CellCoord,
        /// Specific reason the toggle failed.
        reason: ToggleError,
    },
    /// Confirms that every cell was killed and the step counter reset.
    BoardCleared,
    /// Confirms that the board was refilled with random cells.
    BoardRandomized {
        /// Number of live cells after the refill.
        population: usize,
    },
    /// Announces a new value of the auto-run flag.
    AutoRunChanged {
        /// Whether auto-step polls are honoured after the change.
        running: bool,
    },
}

/// Reasons a toggle request may be rejected by the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ToggleError {
    /// The requested cell lies outside the board.
    OutOfBounds,
}

/// Single cell of the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Cell {
    alive: bool,
}

impl Cell {
    /// A dead cell.
    pub const DEAD: Self = Self { alive: false };

    /// A live cell.
    pub const ALIVE: Self = Self { alive: true };

    /// Creates a cell with the provided state.
    #[must_use]
    pub const fn new(alive: bool) -> Self {
        Self { alive }
    }

    /// Reports whether the cell is alive.
    #[must_use]
    pub const fn is_alive(self) -> bool {
        self.alive
    }

    /// Returns the cell with its state inverted.
    #[must_use]
    pub const fn toggled(self) -> Self {
        Self { alive: !self.alive }
    }
}

/// Location of a single board cell expressed as column and row coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellCoord {
    column: u32,
    row: u32,
}

impl CellCoord {
    /// Creates a new board cell coordinate.
    #[must_use]
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }

    /// Zero-based column index (the `x` coordinate) of the cell.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Zero-based row index (the `y` coordinate) of the cell.
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }
}

/// Dimensions of a board. Both sides are at least one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BoardSize {
    width: u32,
    height: u32,
}

impl BoardSize {
    /// Validates and creates a new board size.
    pub fn new(width: u32, height: u32) -> Result<Self, BoardSizeError> {
        if width == 0 {
            return Err(BoardSizeError::ZeroWidth);
        }
        if height == 0 {
            return Err(BoardSizeError::ZeroHeight);
        }

        if u64::from(width) * u64::from(height) > MAX_BOARD_CELLS {
            return Err(BoardSizeError::TooLarge { width, height });
        }

        Ok(Self { width, height })
    }

    /// Number of columns on the board.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows on the board.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells on the board.
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Reports whether the cell lies within the board.
    #[must_use]
    pub const fn contains(&self, cell: CellCoord) -> bool {
        cell.column() < self.width && cell.row() < self.height
    }

    /// Converts a row-major storage index back into a cell coordinate.
    #[must_use]
    pub const fn coord_at(&self, index: usize) -> CellCoord {
        let width = self.width as usize;
        CellCoord::new((index % width) as u32, (index / width) as u32)
    }

    fn index(&self, cell: CellCoord) -> Option<usize> {
        if self.contains(cell) {
            let row = usize::try_from(cell.row()).ok()?;
            let column = usize::try_from(cell.column()).ok()?;
            let width = usize::try_from(self.width).ok()?;
            Some(row * width + column)
        } else {
            None
        }
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_BOARD_WIDTH,
            height: DEFAULT_BOARD_HEIGHT,
        }
    }
}

/// Reasons a board size may be rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BoardSizeError {
    /// The board must be at least one column wide.
    #[error("board width must be at least 1")]
    ZeroWidth,
    /// The board must be at least one row tall.
    #[error("board height must be at least 1")]
    ZeroHeight,
    /// The board holds more than [`MAX_BOARD_CELLS`] cells.
    #[error("board of {width}x{height} cells exceeds the limit of {max} cells", max = MAX_BOARD_CELLS)]
    TooLarge {
        /// Requested number of columns.
        width: u32,
        /// Requested number of rows.
        height: u32,
    },
}

/// Dense row-major cell matrix whose edges wrap around like a torus.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: BoardSize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates a grid of the provided size with every cell dead.
    #[must_use]
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            cells: vec![Cell::DEAD; size.cell_count()],
        }
    }

    /// Creates a grid where exactly the listed cells are alive.
    ///
    /// Coordinates outside the board are ignored.
    #[must_use]
    pub fn from_live_cells<I>(size: BoardSize, live: I) -> Self
    where
        I: IntoIterator<Item = CellCoord>,
    {
        let mut grid = Self::new(size);
        for cell in live {
            if let Some(index) = size.index(cell) {
                grid.cells[index] = Cell::ALIVE;
            }
        }
        grid
    }

    /// Dimensions of the grid.
    #[must_use]
    pub const fn size(&self) -> BoardSize {
        self.size
    }

    /// Number of columns in the grid.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.size.width()
    }

    /// Number of rows in the grid.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.size.height()
    }

    /// Returns the cell stored at the coordinate, if it lies on the board.
    #[must_use]
    pub fn cell(&self, cell: CellCoord) -> Option<Cell> {
        self.size
            .index(cell)
            .and_then(|index| self.cells.get(index).copied())
    }

    /// Inverts a cell, returning its new value when the coordinate is on the board.
    pub fn toggle(&mut self, cell: CellCoord) -> Option<Cell> {
        let index = self.size.index(cell)?;
        let slot = self.cells.get_mut(index)?;
        *slot = slot.toggled();
        Some(*slot)
    }

    /// Overwrites every cell with the provided value.
    pub fn fill(&mut self, value: Cell) {
        self.cells.fill(value);
    }

    /// Counts the live cells among the eight neighbours of `cell`.
    ///
    /// Neighbour coordinates wrap around the board edges: stepping left of
    /// column zero lands on the last column and stepping past the last row
    /// lands on row zero. The result is always in `0..=8`.
    #[must_use]
    pub fn live_neighbors(&self, cell: CellCoord) -> u8 {
        let width = self.size.width();
        let height = self.size.height();
        let columns = [
            wrap_back(cell.column(), width),
            cell.column(),
            wrap_forward(cell.column(), width),
        ];
        let rows = [
            wrap_back(cell.row(), height),
            cell.row(),
            wrap_forward(cell.row(), height),
        ];

        let mut count = 0;
        for (dy, &row) in rows.iter().enumerate() {
            for (dx, &column) in columns.iter().enumerate() {
                if dx == 1 && dy == 1 {
                    continue;
                }
                if self.is_alive_at(column, row) {
                    count += 1;
                }
            }
        }
        count
    }

    /// Iterates every cell in row-major order alongside its coordinate.
    pub fn iter(&self) -> impl Iterator<Item = (CellCoord, Cell)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(index, cell)| (size.coord_at(index), *cell))
    }

    /// Iterates the rows of the grid from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(self.size.width() as usize)
    }

    /// Row-major view of the underlying storage.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Mutable row-major view of the underlying storage.
    ///
    /// The slice length is fixed, so callers cannot resize the grid.
    pub fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Number of live cells on the board.
    #[must_use]
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    fn is_alive_at(&self, column: u32, row: u32) -> bool {
        self.size
            .index(CellCoord::new(column, row))
            .and_then(|index| self.cells.get(index))
            .is_some_and(|cell| cell.is_alive())
    }
}

impl Serialize for Grid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.rows())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                f.write_str(if cell.is_alive() { "#" } else { "." })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

fn wrap_back(value: u32, dimension: u32) -> u32 {
    if value == 0 {
        dimension - 1
    } else {
        value - 1
    }
}

fn wrap_forward(value: u32, dimension: u32) -> u32 {
    if value.saturating_add(1) >= dimension {
        0
    } else {
        value + 1
    }
}
