//! Chart Plotter Module
//! Draws panels as interactive egui_plot charts.

use egui::Color32;
use egui_plot::{Legend, Line, MarkerShape, Plot, PlotPoints, Points};

use crate::figure::{Color, Marker, Panel};

/// Line stroke width in points.
const LINE_WIDTH: f32 = 1.5;
/// Marker radius in points.
const MARKER_RADIUS: f32 = 3.0;

/// Draws figure panels with egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Draw one panel into `ui` as a line-with-marker plot.
    ///
    /// `id_salt` keeps plot state distinct when several panels share a title.
    pub fn draw_panel(ui: &mut egui::Ui, panel: &Panel, id_salt: usize, height: f32) {
        ui.vertical_centered(|ui| {
            ui.strong(panel.title());
        });

        let mut plot = Plot::new(format!("panel_{}_{}", id_salt, panel.title()))
            .height(height)
            .allow_scroll(false)
            .x_axis_label(panel.xlabel())
            .y_axis_label(panel.ylabel());

        if panel.show_legend() {
            plot = plot.legend(Legend::default());
        }

        plot.show(ui, |plot_ui| {
            for (idx, series) in panel.series().iter().enumerate() {
                let style = series.resolved_style(idx);
                let color = Self::color32(style.color);

                let points: Vec<[f64; 2]> = series.points().map(|(x, y)| [x, y]).collect();

                plot_ui.line(
                    Line::new(PlotPoints::from_iter(points.iter().copied()))
                        .color(color)
                        .width(LINE_WIDTH)
                        .name(series.name()),
                );

                plot_ui.points(
                    Points::new(PlotPoints::from_iter(points.iter().copied()))
                        .shape(Self::marker_shape(style.marker))
                        .radius(MARKER_RADIUS)
                        .color(color)
                        .name(series.name()),
                );
            }
        });
    }

    /// Convert a figure color to an egui color.
    pub fn color32(color: Color) -> Color32 {
        Color32::from_rgb(color.r, color.g, color.b)
    }

    fn marker_shape(marker: Marker) -> MarkerShape {
        match marker {
            Marker::Circle => MarkerShape::Circle,
            Marker::Square => MarkerShape::Square,
            Marker::Triangle => MarkerShape::Up,
            Marker::Cross => MarkerShape::Cross,
        }
    }
}
