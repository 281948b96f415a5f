//! benchplot - Execution-time charts for parallel image filter benchmarks.
//!
//! Models a chart as plain immutable value structures — [`figure::Series`],
//! [`figure::Panel`], [`figure::Figure`] — passed to one of two rendering
//! entry points: [`charts::StaticChartRenderer`] for PNG/SVG files and
//! [`charts::ChartPlotter`] for the interactive egui viewer. The recorded
//! filter timings and their figure configurations live in [`presets`].
//!
//! # Example
//!
//! ```ignore
//! use benchplot::charts::StaticChartRenderer;
//! use benchplot::presets;
//!
//! let figure = presets::execution_times();
//! StaticChartRenderer::render_to_file(&figure, "times.png", (1440, 360))?;
//! ```

#![deny(unsafe_code)]

pub mod charts;
pub mod figure;
pub mod gui;
pub mod presets;

pub use charts::{ChartPlotter, RenderError, StaticChartRenderer};
pub use figure::{Figure, FigureError, GridLayout, Panel, Series};
