//! benchplot - Execution-time charts for parallel image filter benchmarks.
//!
//! Opens the interactive viewer on the built-in figures.

use anyhow::Result;
use benchplot::gui::BenchPlotApp;
use eframe::egui;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    tracing::info!("starting benchplot");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 800.0])
            .with_min_inner_size([1000.0, 600.0])
            .with_title("benchplot"),
        ..Default::default()
    };

    eframe::run_native(
        "benchplot",
        options,
        Box::new(|cc| Ok(Box::new(BenchPlotApp::new(cc)))),
    )
    .map_err(|err| anyhow::anyhow!("failed to start viewer: {err}"))
}
