//! Panel Module
//! One set of shared axes holding one or more series.

use crate::figure::{FigureError, Series};

/// A titled set of axes with its series and label configuration.
///
/// Series within a panel are expected to share an x-domain for the comparison
/// to be meaningful, but only per-series shape consistency is enforced.
#[derive(Debug, Clone)]
pub struct Panel {
    title: String,
    xlabel: String,
    ylabel: String,
    show_legend: bool,
    series: Vec<Series>,
}

impl Panel {
    pub fn new(
        title: impl Into<String>,
        xlabel: impl Into<String>,
        ylabel: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            xlabel: xlabel.into(),
            ylabel: ylabel.into(),
            show_legend: true,
            series: Vec::new(),
        }
    }

    /// Add a series, builder style.
    pub fn with_series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    /// Toggle the legend, builder style. Legends are on by default.
    pub fn with_legend(mut self, show: bool) -> Self {
        self.show_legend = show;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn xlabel(&self) -> &str {
        &self.xlabel
    }

    pub fn ylabel(&self) -> &str {
        &self.ylabel
    }

    pub fn show_legend(&self) -> bool {
        self.show_legend
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// Verify the panel holds at least one series and that every series is
    /// shape-consistent.
    pub fn validate(&self) -> Result<(), FigureError> {
        if self.series.is_empty() {
            return Err(FigureError::EmptyData {
                context: format!("panel '{}'", self.title),
            });
        }
        for series in &self.series {
            series.check_shape()?;
        }
        Ok(())
    }

    /// Union of the series x-extents, None when no series has points.
    pub fn x_extent(&self) -> Option<(f64, f64)> {
        merge_extents(self.series.iter().filter_map(Series::x_extent))
    }

    /// Union of the series y-extents, None when no series has points.
    pub fn y_extent(&self) -> Option<(f64, f64)> {
        merge_extents(self.series.iter().filter_map(Series::y_extent))
    }
}

fn merge_extents(extents: impl Iterator<Item = (f64, f64)>) -> Option<(f64, f64)> {
    extents.reduce(|(lo, hi), (min, max)| (lo.min(min), hi.max(max)))
}
