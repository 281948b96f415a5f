//! Figure module - immutable chart descriptions
//!
//! A [`Figure`] is an ordered arrangement of [`Panel`]s in a one-row or
//! one-column grid; each panel plots one or more [`Series`] on shared axes.
//! Figures are built once from literal data, rendered, and discarded.

mod panel;
mod series;

pub use panel::Panel;
pub use series::{Color, Marker, Series, SeriesStyle, BLUE, GREEN, PALETTE, RED};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FigureError {
    #[error("series '{name}' has {x_len} x values but {y_len} y values")]
    DataShape {
        name: String,
        x_len: usize,
        y_len: usize,
    },
    #[error("{context} has no series")]
    EmptyData { context: String },
}

/// How a figure arranges its panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GridLayout {
    /// Panels side by side (1×N).
    #[default]
    Row,
    /// Panels stacked vertically (N×1).
    Column,
}

impl GridLayout {
    /// (rows, cols) for `n` panels.
    pub fn dims(self, n: usize) -> (usize, usize) {
        match self {
            GridLayout::Row => (1, n.max(1)),
            GridLayout::Column => (n.max(1), 1),
        }
    }
}

/// The full rendered output: panels arranged in a grid, fixed at construction.
#[derive(Debug, Clone)]
pub struct Figure {
    layout: GridLayout,
    panels: Vec<Panel>,
}

impl Figure {
    pub fn new(layout: GridLayout, panels: Vec<Panel>) -> Self {
        Self { layout, panels }
    }

    /// Single-panel figure.
    pub fn single(panel: Panel) -> Self {
        Self::new(GridLayout::Row, vec![panel])
    }

    pub fn layout(&self) -> GridLayout {
        self.layout
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    /// Grid dimensions as (rows, cols).
    pub fn dims(&self) -> (usize, usize) {
        self.layout.dims(self.panels.len())
    }

    /// Check every enforced invariant: at least one panel, every panel
    /// non-empty, every series shape-consistent. Returns the first violation.
    pub fn validate(&self) -> Result<(), FigureError> {
        if self.panels.is_empty() {
            return Err(FigureError::EmptyData {
                context: "figure".to_string(),
            });
        }
        for panel in &self.panels {
            panel.validate()?;
        }
        Ok(())
    }
}
