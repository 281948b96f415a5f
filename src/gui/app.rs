//! benchplot Main Application
//! Main window with a figure selector, export action, and the chart view.

use egui::{CentralPanel, TopBottomPanel};
use tracing::{info, warn};

use crate::charts::StaticChartRenderer;
use crate::figure::Figure;
use crate::gui::FigureViewer;
use crate::presets;

/// Exported pixel width of one panel.
const EXPORT_PANEL_WIDTH: u32 = 480;
/// Exported pixel height of one panel.
const EXPORT_PANEL_HEIGHT: u32 = 360;

/// Main application window.
pub struct BenchPlotApp {
    figures: Vec<(&'static str, Figure)>,
    selected: usize,
    status: String,
}

impl BenchPlotApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            figures: presets::all(),
            selected: 0,
            status: String::new(),
        }
    }

    /// Ask for an output path, render the selected figure to it, and open the
    /// result with the system viewer.
    fn handle_export(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG Image", &["png"])
            .add_filter("SVG Image", &["svg"])
            .set_file_name("benchplot.png")
            .save_file()
        else {
            return; // User cancelled
        };

        let (name, figure) = &self.figures[self.selected];
        let (rows, cols) = figure.dims();
        let size = (
            EXPORT_PANEL_WIDTH * cols as u32,
            EXPORT_PANEL_HEIGHT * rows as u32,
        );

        match StaticChartRenderer::render_to_file(figure, &path, size) {
            Ok(()) => {
                info!(figure = %name, path = %path.display(), "figure exported");
                self.status = format!("Exported to {}", path.display());
                if let Err(err) = open::that(&path) {
                    warn!(%err, "could not open exported figure");
                }
            }
            Err(err) => {
                warn!(%err, "export failed");
                self.status = format!("Export failed: {err}");
            }
        }
    }
}

impl eframe::App for BenchPlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                egui::ComboBox::from_label("Figure")
                    .selected_text(self.figures[self.selected].0)
                    .show_ui(ui, |ui| {
                        for (idx, (figure_name, _)) in self.figures.iter().enumerate() {
                            ui.selectable_value(&mut self.selected, idx, *figure_name);
                        }
                    });

                ui.separator();

                if ui.button("Export…").clicked() {
                    self.handle_export();
                }

                if !self.status.is_empty() {
                    ui.separator();
                    ui.label(&self.status);
                }
            });
        });

        CentralPanel::default().show(ctx, |ui| {
            let (_, figure) = &self.figures[self.selected];
            FigureViewer::show(ui, figure);
        });
    }
}
