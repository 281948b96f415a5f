//! Static Chart Renderer
//! Renders a figure to a PNG or SVG file, or to in-memory PNG bytes.
//!
//! Layout: the drawing area is split evenly into the figure's grid, one
//! subplot per panel. Each subplot gets a caption, labeled axes, one
//! line-with-marker trace per series, and a legend box when the panel asks
//! for one.

use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use thiserror::Error;
use tracing::info;

use crate::figure::{Figure, FigureError, Marker, Panel};

/// Marker half-size in pixels.
const MARKER_SIZE: i32 = 3;
/// Fraction of the data range added on each side of the x axis.
const X_PAD: f64 = 0.03;
/// Fraction of the data range added on each side of the y axis.
const Y_PAD: f64 = 0.08;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error(transparent)]
    Figure(#[from] FigureError),
    #[error("chart backend error: {0}")]
    Backend(String),
}

fn backend<E: std::fmt::Display>(err: E) -> RenderError {
    RenderError::Backend(err.to_string())
}

/// Renders figures with plotters, off-screen.
pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Render `figure` to `path` at `size` pixels. The backend is chosen by
    /// extension: `.svg` gets the vector backend, anything else a PNG bitmap.
    pub fn render_to_file(
        figure: &Figure,
        path: impl AsRef<Path>,
        size: (u32, u32),
    ) -> Result<(), RenderError> {
        figure.validate()?;
        let path = path.as_ref();
        let is_svg = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));

        if is_svg {
            let root = SVGBackend::new(path, size).into_drawing_area();
            Self::draw_figure(&root, figure)?;
            root.present().map_err(backend)?;
        } else {
            let root = BitMapBackend::new(path, size).into_drawing_area();
            Self::draw_figure(&root, figure)?;
            root.present().map_err(backend)?;
        }

        info!(path = %path.display(), "figure written");
        Ok(())
    }

    /// Render `figure` to PNG bytes in memory.
    pub fn render_png_bytes(
        figure: &Figure,
        width: u32,
        height: u32,
    ) -> Result<Vec<u8>, RenderError> {
        figure.validate()?;

        let mut raw = vec![0u8; width as usize * height as usize * 3];
        {
            let root = BitMapBackend::with_buffer(&mut raw, (width, height)).into_drawing_area();
            Self::draw_figure(&root, figure)?;
            root.present().map_err(backend)?;
        }

        let img = image::RgbImage::from_raw(width, height, raw)
            .ok_or_else(|| RenderError::Backend("pixel buffer size mismatch".to_string()))?;
        let mut bytes = Vec::new();
        img.write_to(
            &mut std::io::Cursor::new(&mut bytes),
            image::ImageFormat::Png,
        )
        .map_err(backend)?;
        Ok(bytes)
    }

    fn draw_figure<DB: DrawingBackend>(
        root: &DrawingArea<DB, Shift>,
        figure: &Figure,
    ) -> Result<(), RenderError> {
        root.fill(&WHITE).map_err(backend)?;

        let areas = root.split_evenly(figure.dims());
        for (panel, area) in figure.panels().iter().zip(areas.iter()) {
            Self::draw_panel(area, panel)?;
        }
        Ok(())
    }

    fn draw_panel<DB: DrawingBackend>(
        area: &DrawingArea<DB, Shift>,
        panel: &Panel,
    ) -> Result<(), RenderError> {
        let (x_min, x_max) = padded(panel.x_extent(), X_PAD);
        let (y_min, y_max) = padded(panel.y_extent(), Y_PAD);

        let mut chart = ChartBuilder::on(area)
            .caption(panel.title(), ("sans-serif", 18))
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(55)
            .build_cartesian_2d(x_min..x_max, y_min..y_max)
            .map_err(backend)?;

        chart
            .configure_mesh()
            .x_desc(panel.xlabel())
            .y_desc(panel.ylabel())
            .draw()
            .map_err(backend)?;

        for (idx, series) in panel.series().iter().enumerate() {
            let style = series.resolved_style(idx);
            let color = RGBColor(style.color.r, style.color.g, style.color.b);

            chart
                .draw_series(LineSeries::new(series.points(), color.stroke_width(2)))
                .map_err(backend)?
                .label(series.name())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], color));

            match style.marker {
                Marker::Circle => chart
                    .draw_series(
                        series
                            .points()
                            .map(|p| Circle::new(p, MARKER_SIZE, color.filled())),
                    )
                    .map_err(backend)?,
                Marker::Square => chart
                    .draw_series(series.points().map(|p| {
                        EmptyElement::at(p)
                            + Rectangle::new(
                                [(-MARKER_SIZE, -MARKER_SIZE), (MARKER_SIZE, MARKER_SIZE)],
                                color.filled(),
                            )
                    }))
                    .map_err(backend)?,
                Marker::Triangle => chart
                    .draw_series(
                        series
                            .points()
                            .map(|p| TriangleMarker::new(p, MARKER_SIZE, color.filled())),
                    )
                    .map_err(backend)?,
                Marker::Cross => chart
                    .draw_series(
                        series
                            .points()
                            .map(|p| Cross::new(p, MARKER_SIZE, color.filled())),
                    )
                    .map_err(backend)?,
            };
        }

        if panel.show_legend() {
            chart
                .configure_series_labels()
                .background_style(&WHITE.mix(0.8))
                .border_style(&BLACK)
                .draw()
                .map_err(backend)?;
        }
        Ok(())
    }
}

/// Pad a data extent so plotters never sees an empty or degenerate range.
fn padded(extent: Option<(f64, f64)>, frac: f64) -> (f64, f64) {
    let Some((min, max)) = extent else {
        return (0.0, 1.0);
    };
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    if min == max {
        return (min - 0.5, max + 0.5);
    }
    let pad = (max - min) * frac;
    (min - pad, max + pad)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padded_widens_constant_extents() {
        assert_eq!(padded(Some((2.0, 2.0)), 0.1), (1.5, 2.5));
    }

    #[test]
    fn padded_defaults_when_there_are_no_points() {
        assert_eq!(padded(None, 0.1), (0.0, 1.0));
    }

    #[test]
    fn padded_adds_the_requested_fraction() {
        let (lo, hi) = padded(Some((0.0, 10.0)), 0.1);
        assert_eq!((lo, hi), (-1.0, 11.0));
    }
}
