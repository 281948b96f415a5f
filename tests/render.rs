//! End-to-end rendering tests against the static renderer.

use benchplot::charts::{RenderError, StaticChartRenderer};
use benchplot::figure::{Figure, FigureError, GridLayout, Panel, Series};
use benchplot::presets;

fn blur_series() -> Series {
    Series::new(
        "Blur",
        vec![1.0, 2.0, 4.0, 8.0],
        vec![16.0, 8.5, 4.3, 2.2],
    )
}

#[test]
fn single_series_figure_renders_to_svg() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("single.svg");

    let figure = Figure::single(
        Panel::new("Blur Execution Time", "Threads", "Execution Time (s)")
            .with_series(blur_series()),
    );
    StaticChartRenderer::render_to_file(&figure, &path, (640, 480)).unwrap();

    let svg = std::fs::read_to_string(&path).unwrap();
    assert!(svg.contains("Blur Execution Time"), "missing panel title");
    assert!(svg.contains("Blur"), "missing legend entry");
    assert!(svg.contains("Execution Time (s)"), "missing axis label");
}

#[test]
fn two_series_panel_gets_both_legend_entries() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pair.svg");

    let x = vec![1.0, 2.0, 4.0, 8.0, 16.0, 32.0, 64.0];
    let figure = Figure::single(
        Panel::new("Threshold Execution Time", "Threads/Processes", "Execution Time (s)")
            .with_series(Series::new(
                "Pthreads",
                x.clone(),
                vec![0.109, 0.054, 0.037, 0.025, 0.016, 0.018, 0.013],
            ))
            .with_series(Series::new(
                "MPI",
                x,
                vec![0.089, 0.063, 0.031, 0.021, 0.017, 0.013, 0.009],
            )),
    );
    StaticChartRenderer::render_to_file(&figure, &path, (640, 480)).unwrap();

    let svg = std::fs::read_to_string(&path).unwrap();
    assert!(svg.contains("Pthreads"));
    assert!(svg.contains("MPI"));
}

#[test]
fn three_panel_preset_renders_each_title() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("grid.svg");

    StaticChartRenderer::render_to_file(&presets::execution_times(), &path, (1440, 400)).unwrap();

    let svg = std::fs::read_to_string(&path).unwrap();
    for title in [
        "Blur Execution Time",
        "Threshold Execution Time",
        "Laplacian Execution Time",
    ] {
        assert!(svg.contains(title), "missing panel title '{title}'");
    }
}

#[test]
fn png_export_matches_requested_dimensions() {
    let bytes =
        StaticChartRenderer::render_png_bytes(&presets::execution_times(), 1200, 400).unwrap();
    let img = image::load_from_memory(&bytes).unwrap();
    assert_eq!((img.width(), img.height()), (1200, 400));
}

#[test]
fn png_file_export_is_decodable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stacked.png");

    StaticChartRenderer::render_to_file(&presets::execution_times_stacked(), &path, (640, 960))
        .unwrap();

    let img = image::open(&path).unwrap();
    assert_eq!((img.width(), img.height()), (640, 960));
}

#[test]
fn empty_panel_aborts_the_render() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("never.svg");

    let figure = Figure::single(Panel::new("Empty", "x", "y"));
    let err = StaticChartRenderer::render_to_file(&figure, &path, (640, 480)).unwrap_err();
    assert!(matches!(
        err,
        RenderError::Figure(FigureError::EmptyData { .. })
    ));
    assert!(!path.exists(), "no artifact should be written on failure");
}

#[test]
fn shape_mismatch_aborts_the_render() {
    let figure = Figure::new(
        GridLayout::Row,
        vec![Panel::new("Blur", "Threads", "Time (s)").with_series(Series::new(
            "Pthreads",
            vec![1.0, 2.0, 4.0, 8.0],
            vec![16.0, 8.5, 4.3],
        ))],
    );
    let err = StaticChartRenderer::render_png_bytes(&figure, 640, 480).unwrap_err();
    match err {
        RenderError::Figure(FigureError::DataShape { name, x_len, y_len }) => {
            assert_eq!(name, "Pthreads");
            assert_eq!((x_len, y_len), (4, 3));
        }
        other => panic!("unexpected error: {other}"),
    }
}
