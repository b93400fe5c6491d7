use std::{
    fmt, fs, io,
    path::{Path, PathBuf},
};

use thiserror::Error;
use torus_life_core::Grid;

use crate::{AutoRunControl, GridFragment, StatusLine};

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Placeholder that a page template may reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Every cell of the board, rendered as a grid fragment.
    Grid,
    /// Number of columns on the board.
    Width,
    /// Number of rows on the board.
    Height,
    /// Current value of the step counter.
    Step,
    /// Status line for the auto-run flag.
    Status,
    /// Button that toggles auto-run.
    AutoControl,
}

impl Slot {
    const ALL: [Self; 6] = [
        Self::Grid,
        Self::Width,
        Self::Height,
        Self::Step,
        Self::Status,
        Self::AutoControl,
    ];

    /// Name used between the braces in template source.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::Width => "width",
            Self::Height => "height",
            Self::Step => "step",
            Self::Status => "status",
            Self::AutoControl => "auto_control",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|slot| slot.name() == name)
    }
}

/// Errors raised while loading or parsing a page template.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// The template file could not be read.
    #[error("failed to read page template {}", path.display())]
    Read {
        /// Location the template was read from.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// A `{{` was never closed.
    #[error("unterminated placeholder starting at byte {offset}")]
    Unterminated {
        /// Byte offset of the opening braces.
        offset: usize,
    },
    /// A placeholder named something other than a known [`Slot`].
    #[error("unknown placeholder `{{{{{0}}}}}`")]
    UnknownSlot(String),
    /// The template never places the board.
    #[error("page template has no `{{{{grid}}}}` placeholder")]
    MissingGrid,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Slot(Slot),
}

/// Full-page template parsed once at startup and rendered per request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageTemplate {
    segments: Vec<Segment>,
}

impl PageTemplate {
    /// Reads and parses the template stored at `path`.
    pub fn load(path: &Path) -> Result<Self, TemplateError> {
        let source = fs::read_to_string(path).map_err(|source| TemplateError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&source)
    }

    /// Splits template source into literal text and `{{slot}}` placeholders.
    pub fn parse(source: &str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut has_grid = false;
        let mut rest = source;

        while let Some(start) = rest.find(OPEN) {
            let offset = source.len() - rest.len() + start;
            if start > 0 {
                segments.push(Segment::Literal(rest[..start].to_owned()));
            }

            let after_open = &rest[start + OPEN.len()..];
            let end = after_open
                .find(CLOSE)
                .ok_or(TemplateError::Unterminated { offset })?;
            let name = after_open[..end].trim();
            let slot =
                Slot::from_name(name).ok_or_else(|| TemplateError::UnknownSlot(name.to_owned()))?;
            has_grid |= slot == Slot::Grid;
            segments.push(Segment::Slot(slot));

            rest = &after_open[end + CLOSE.len()..];
        }

        if !rest.is_empty() {
            segments.push(Segment::Literal(rest.to_owned()));
        }
        if !has_grid {
            return Err(TemplateError::MissingGrid);
        }

        Ok(Self { segments })
    }

    /// Renders the page for the provided board state.
    #[must_use]
    pub fn render(&self, view: PageView<'_>) -> String {
        RenderedPage {
            template: self,
            view,
        }
        .to_string()
    }
}

/// Board state substituted into a page template.
#[derive(Clone, Copy, Debug)]
pub struct PageView<'a> {
    /// Live board.
    pub grid: &'a Grid,
    /// Current value of the step counter.
    pub step: u64,
    /// Whether auto-run is enabled.
    pub running: bool,
}

struct RenderedPage<'a> {
    template: &'a PageTemplate,
    view: PageView<'a>,
}

impl fmt::Display for RenderedPage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.view;
        for segment in &self.template.segments {
            match segment {
                Segment::Literal(text) => f.write_str(text)?,
                Segment::Slot(Slot::Grid) => write!(f, "{}", GridFragment::new(view.grid))?,
                Segment::Slot(Slot::Width) => write!(f, "{}", view.grid.width())?,
                Segment::Slot(Slot::Height) => write!(f, "{}", view.grid.height())?,
                Segment::Slot(Slot::Step) => write!(f, "{}", view.step)?,
                Segment::Slot(Slot::Status) => write!(f, "{}", StatusLine::new(view.running))?,
                Segment::Slot(Slot::AutoControl) => {
                    write!(f, "{}", AutoRunControl::new(view.running))?;
                }
            }
        }
        Ok(())
    }
}
