//! Series Module
//! One named sequence of (x, y) points drawn as a single line-with-marker trace.

use crate::figure::FigureError;

/// RGB color used by both chart backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

pub const RED: Color = Color::rgb(231, 76, 60);
pub const GREEN: Color = Color::rgb(46, 204, 113);
pub const BLUE: Color = Color::rgb(52, 152, 219);

/// Fallback palette for series constructed without an explicit style.
pub const PALETTE: [Color; 10] = [
    Color::rgb(231, 76, 60),  // Red
    Color::rgb(46, 204, 113), // Green
    Color::rgb(155, 89, 182), // Purple
    Color::rgb(243, 156, 18), // Orange
    Color::rgb(26, 188, 156), // Teal
    Color::rgb(233, 30, 99),  // Pink
    Color::rgb(0, 188, 212),  // Cyan
    Color::rgb(255, 87, 34),  // Deep Orange
    Color::rgb(121, 85, 72),  // Brown
    Color::rgb(96, 125, 139), // Blue Grey
];

/// Marker drawn at each data point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Marker {
    #[default]
    Circle,
    Square,
    Triangle,
    Cross,
}

/// Visual style of one series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesStyle {
    pub color: Color,
    pub marker: Marker,
}

impl SeriesStyle {
    pub const fn new(color: Color, marker: Marker) -> Self {
        Self { color, marker }
    }

    /// Palette color for the series at `index` within its panel.
    pub fn from_palette(index: usize) -> Self {
        Self::new(PALETTE[index % PALETTE.len()], Marker::Circle)
    }
}

/// One named (x, y) sequence sharing an x-domain with the other series in its
/// panel. x and y are kept as separate vectors so a shape mismatch is
/// representable and reported instead of silently truncated.
#[derive(Debug, Clone)]
pub struct Series {
    name: String,
    x: Vec<f64>,
    y: Vec<f64>,
    style: Option<SeriesStyle>,
}

impl Series {
    /// Create a series that takes its color from the panel palette.
    pub fn new(name: impl Into<String>, x: Vec<f64>, y: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            x,
            y,
            style: None,
        }
    }

    /// Create a series with an explicit color and marker.
    pub fn styled(name: impl Into<String>, x: Vec<f64>, y: Vec<f64>, style: SeriesStyle) -> Self {
        Self {
            name: name.into(),
            x,
            y,
            style: Some(style),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Explicit style, if one was given; panels fall back to the palette.
    pub fn style(&self) -> Option<SeriesStyle> {
        self.style
    }

    /// Resolved style for the series at `index` within its panel.
    pub fn resolved_style(&self, index: usize) -> SeriesStyle {
        self.style.unwrap_or_else(|| SeriesStyle::from_palette(index))
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Paired (x, y) points. Only valid once `check_shape` has passed.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    /// Verify the x and y sequences have equal length.
    pub fn check_shape(&self) -> Result<(), FigureError> {
        if self.x.len() != self.y.len() {
            return Err(FigureError::DataShape {
                name: self.name.clone(),
                x_len: self.x.len(),
                y_len: self.y.len(),
            });
        }
        Ok(())
    }

    /// (min, max) of the x sequence, None when the series is empty.
    pub fn x_extent(&self) -> Option<(f64, f64)> {
        extent(&self.x)
    }

    /// (min, max) of the y sequence, None when the series is empty.
    pub fn y_extent(&self) -> Option<(f64, f64)> {
        extent(&self.y)
    }
}

fn extent(values: &[f64]) -> Option<(f64, f64)> {
    if values.is_empty() {
        return None;
    }
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Some((min, max))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_check_accepts_matching_lengths() {
        let s = Series::new("Pthreads", vec![1.0, 2.0, 4.0], vec![3.0, 2.0, 1.0]);
        assert!(s.check_shape().is_ok());
    }

    #[test]
    fn shape_check_rejects_mismatched_lengths() {
        let s = Series::new("MPI", vec![1.0, 2.0, 4.0], vec![3.0, 2.0]);
        let err = s.check_shape().unwrap_err();
        match err {
            FigureError::DataShape { name, x_len, y_len } => {
                assert_eq!(name, "MPI");
                assert_eq!((x_len, y_len), (3, 2));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn extents_track_min_and_max() {
        let s = Series::new("OpenMP", vec![1.0, 64.0, 8.0], vec![0.5, 0.1, 0.9]);
        assert_eq!(s.x_extent(), Some((1.0, 64.0)));
        assert_eq!(s.y_extent(), Some((0.1, 0.9)));
        assert_eq!(Series::new("empty", vec![], vec![]).x_extent(), None);
    }

    #[test]
    fn palette_cycles_past_its_length() {
        assert_eq!(
            SeriesStyle::from_palette(0).color,
            SeriesStyle::from_palette(PALETTE.len()).color
        );
    }
}
