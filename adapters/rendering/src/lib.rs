#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Shared rendering contracts for Torus Life adapters.
//!
//! Every fragment is a small value type that captures the data a client
//! needs (cell coordinates, alive flags, the auto-run state) and renders that
//! data as htmx-ready markup through its [`fmt::Display`] implementation.

use std::fmt;

use torus_life_core::{CellCoord, Grid};

mod template;

pub use template::{PageTemplate, PageView, Slot, TemplateError};

/// Endpoint each rendered cell posts to when clicked.
pub const TOGGLE_ENDPOINT: &str = "/api/toggle";

/// Endpoint the auto-run control posts to when clicked.
pub const AUTO_TOGGLE_ENDPOINT: &str = "/api/toggle-auto";

/// Approximate markup length of one rendered cell, used to pre-size buffers.
const CELL_MARKUP_CAPACITY: usize = 120;

/// Renderable view of a single board cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellFragment {
    /// Location of the cell on the board.
    pub cell: CellCoord,
    /// Whether the cell is alive.
    pub alive: bool,
}

impl CellFragment {
    /// Creates a fragment describing the cell at `cell`.
    #[must_use]
    pub const fn new(cell: CellCoord, alive: bool) -> Self {
        Self { cell, alive }
    }

    /// CSS classes applied to the cell element.
    #[must_use]
    pub const fn class(&self) -> &'static str {
        if self.alive {
            "cell alive"
        } else {
            "cell"
        }
    }
}

impl fmt::Display for CellFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"<div class="{class}" hx-post="{TOGGLE_ENDPOINT}" hx-vals='{{"x":{x},"y":{y}}}' hx-target="this" hx-swap="outerHTML"></div>"#,
            class = self.class(),
            x = self.cell.column(),
            y = self.cell.row(),
        )
    }
}

/// Renderable view of the whole board, one cell element per cell in row-major order.
#[derive(Clone, Copy, Debug)]
pub struct GridFragment<'a> {
    grid: &'a Grid,
}

impl<'a> GridFragment<'a> {
    /// Captures a fragment view of the provided board.
    #[must_use]
    pub const fn new(grid: &'a Grid) -> Self {
        Self { grid }
    }

    /// Iterates the cell fragments in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = CellFragment> + 'a {
        self.grid
            .iter()
            .map(|(cell, state)| CellFragment::new(cell, state.is_alive()))
    }

    /// Renders the fragment into a buffer sized for the whole board.
    #[must_use]
    pub fn render(&self) -> String {
        let mut markup =
            String::with_capacity(self.grid.size().cell_count() * CELL_MARKUP_CAPACITY);
        for cell in self.cells() {
            markup.push_str(&cell.to_string());
        }
        markup
    }
}

impl fmt::Display for GridFragment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in self.cells() {
            write!(f, "{cell}")?;
        }
        Ok(())
    }
}

/// Button that starts or stops auto-run, reflecting the current state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AutoRunControl {
    running: bool,
}

impl AutoRunControl {
    /// Creates the control for the provided auto-run state.
    #[must_use]
    pub const fn new(running: bool) -> Self {
        Self { running }
    }

    /// Text shown on the button; it names the action a click performs.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        if self.running {
            "Auto Stop"
        } else {
            "Auto Start"
        }
    }
}

impl fmt::Display for AutoRunControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r##"<button class="btn btn-success" id="auto-toggle" hx-post="{AUTO_TOGGLE_ENDPOINT}" hx-target="#auto-controls" hx-swap="innerHTML">{}</button>"##,
            self.label(),
        )
    }
}

/// Status line reporting whether auto-run is enabled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusLine {
    running: bool,
}

impl StatusLine {
    /// Creates the status line for the provided auto-run state.
    #[must_use]
    pub const fn new(running: bool) -> Self {
        Self { running }
    }

    /// Plain text of the status line.
    #[must_use]
    pub const fn text(&self) -> &'static str {
        if self.running {
            "Status: Running"
        } else {
            "Status: Stopped"
        }
    }
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, r#"<span class="status-text">{}</span>"#, self.text())
    }
}
