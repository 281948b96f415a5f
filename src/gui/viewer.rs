//! Figure Viewer Widget
//! Lays a figure's panels out in its grid and hands each one to the plotter.

use crate::charts::ChartPlotter;
use crate::figure::{Figure, GridLayout};

/// Vertical gap between stacked panels.
const PANEL_SPACING: f32 = 12.0;
/// Space reserved above each plot for its title line.
const TITLE_HEIGHT: f32 = 24.0;

/// Draws a figure's panel grid.
pub struct FigureViewer;

impl FigureViewer {
    /// Draw `figure` into the available space: row layouts get equal columns,
    /// column layouts a vertical stack.
    pub fn show(ui: &mut egui::Ui, figure: &Figure) {
        let panels = figure.panels();
        if panels.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label("No data");
            });
            return;
        }

        match figure.layout() {
            GridLayout::Row => {
                let height = (ui.available_height() - TITLE_HEIGHT).max(120.0);
                ui.columns(panels.len(), |columns| {
                    for (idx, (panel, column)) in
                        panels.iter().zip(columns.iter_mut()).enumerate()
                    {
                        ChartPlotter::draw_panel(column, panel, idx, height);
                    }
                });
            }
            GridLayout::Column => {
                let rows = panels.len() as f32;
                let height = (ui.available_height() / rows - TITLE_HEIGHT - PANEL_SPACING)
                    .max(120.0);
                for (idx, panel) in panels.iter().enumerate() {
                    ChartPlotter::draw_panel(ui, panel, idx, height);
                    ui.add_space(PANEL_SPACING);
                }
            }
        }
    }
}
