//! Presets Module
//! Recorded execution times for the parallel image filter runs, and the
//! figure configurations built from them.
//!
//! The numbers are measurements, not computed here: blur and threshold were
//! run with 1..64 Pthreads/MPI ranks, the Laplacian solver with 1..32 OpenMP
//! threads.

use crate::figure::{Figure, GridLayout, Marker, Panel, Series, SeriesStyle, BLUE, GREEN, RED};

/// Thread/process counts for the blur and threshold runs.
pub const THREAD_COUNTS: [f64; 7] = [1.0, 2.0, 4.0, 8.0, 16.0, 32.0, 64.0];
/// Thread counts for the OpenMP Laplacian run.
pub const OMP_THREAD_COUNTS: [f64; 6] = [1.0, 2.0, 4.0, 8.0, 16.0, 32.0];

const BLUR_PTHREADS: [f64; 7] = [16.3786, 8.55247, 4.32111, 2.21067, 1.26054, 0.982082, 1.17529];
const BLUR_MPI: [f64; 7] = [
    14.018321, 7.058290, 3.750033, 1.937216, 1.107606, 0.754410, 0.656233,
];
const THRESHOLD_PTHREADS: [f64; 7] = [
    0.109217, 0.0535817, 0.0371549, 0.0252247, 0.0157444, 0.0183072, 0.0130858,
];
const THRESHOLD_MPI: [f64; 7] = [
    0.088511, 0.062794, 0.031244, 0.020858, 0.016567, 0.013478, 0.008912,
];
const LAPLACIAN_OMP: [f64; 6] = [0.181218, 0.104422, 0.064208, 0.043191, 0.034682, 0.051359];

const X_LABEL: &str = "Threads/Processes";
const Y_LABEL: &str = "Execution Time (s)";

fn pthreads(times: &[f64]) -> Series {
    Series::styled(
        "Pthreads",
        THREAD_COUNTS.to_vec(),
        times.to_vec(),
        SeriesStyle::new(RED, Marker::Circle),
    )
}

fn mpi(times: &[f64]) -> Series {
    Series::styled(
        "MPI",
        THREAD_COUNTS.to_vec(),
        times.to_vec(),
        SeriesStyle::new(GREEN, Marker::Circle),
    )
}

fn blur_panel() -> Panel {
    Panel::new("Blur Execution Time", X_LABEL, Y_LABEL)
        .with_series(pthreads(&BLUR_PTHREADS))
        .with_series(mpi(&BLUR_MPI))
}

fn threshold_panel() -> Panel {
    Panel::new("Threshold Execution Time", X_LABEL, Y_LABEL)
        .with_series(pthreads(&THRESHOLD_PTHREADS))
        .with_series(mpi(&THRESHOLD_MPI))
}

fn laplacian_panel() -> Panel {
    Panel::new("Laplacian Execution Time", "Threads", Y_LABEL).with_series(Series::styled(
        "OpenMP",
        OMP_THREAD_COUNTS.to_vec(),
        LAPLACIAN_OMP.to_vec(),
        SeriesStyle::new(BLUE, Marker::Circle),
    ))
}

/// Blur, threshold, and Laplacian timings side by side (1×3).
pub fn execution_times() -> Figure {
    Figure::new(
        GridLayout::Row,
        vec![blur_panel(), threshold_panel(), laplacian_panel()],
    )
}

/// The same three panels stacked vertically (3×1).
pub fn execution_times_stacked() -> Figure {
    Figure::new(
        GridLayout::Column,
        vec![blur_panel(), threshold_panel(), laplacian_panel()],
    )
}

/// Grouped by parallelization method instead of by filter: one panel per
/// method, one series per filter. Threshold times are an order of magnitude
/// below blur, so the legend does the separating.
pub fn times_by_method() -> Figure {
    let pthreads_panel = Panel::new("Pthreads", "Threads", Y_LABEL)
        .with_series(Series::new(
            "Blur",
            THREAD_COUNTS.to_vec(),
            BLUR_PTHREADS.to_vec(),
        ))
        .with_series(Series::new(
            "Threshold",
            THREAD_COUNTS.to_vec(),
            THRESHOLD_PTHREADS.to_vec(),
        ));
    let mpi_panel = Panel::new("MPI", "Processes", Y_LABEL)
        .with_series(Series::new("Blur", THREAD_COUNTS.to_vec(), BLUR_MPI.to_vec()))
        .with_series(Series::new(
            "Threshold",
            THREAD_COUNTS.to_vec(),
            THRESHOLD_MPI.to_vec(),
        ));
    Figure::new(GridLayout::Row, vec![pthreads_panel, mpi_panel])
}

/// All built-in figures with their display names, in viewer order.
pub fn all() -> Vec<(&'static str, Figure)> {
    vec![
        ("Execution times (side by side)", execution_times()),
        ("Execution times (stacked)", execution_times_stacked()),
        ("By method", times_by_method()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_preset_validates() {
        for (name, figure) in all() {
            assert!(figure.validate().is_ok(), "preset '{name}' failed validation");
        }
    }

    #[test]
    fn side_by_side_preset_has_three_titled_panels() {
        let figure = execution_times();
        assert_eq!(figure.dims(), (1, 3));
        let titles: Vec<&str> = figure.panels().iter().map(|p| p.title()).collect();
        assert_eq!(
            titles,
            vec![
                "Blur Execution Time",
                "Threshold Execution Time",
                "Laplacian Execution Time"
            ]
        );
        for panel in figure.panels() {
            assert!(!panel.xlabel().is_empty());
            assert_eq!(panel.ylabel(), "Execution Time (s)");
        }
    }

    #[test]
    fn stacked_preset_flips_the_grid() {
        assert_eq!(execution_times_stacked().dims(), (3, 1));
    }

    #[test]
    fn series_share_x_domains_within_panels() {
        for (_, figure) in all() {
            for panel in figure.panels() {
                let first = panel.series()[0].x();
                for series in panel.series() {
                    assert_eq!(series.x(), first);
                }
            }
        }
    }
}
