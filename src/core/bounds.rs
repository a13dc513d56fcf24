//! Geometry helpers: data extents, per-axis scale + terminal size plumbing.

use terminal_size::{Height, Width, terminal_size};

use crate::core::{
    constants::{MIN_GRAPH_HEIGHT, MIN_GRAPH_WIDTH},
    data::Entry,
};

/// Data extents over both axes, derived once per render.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    /// The first entry seeds both min and max on each axis; an empty series
    /// yields the all-zero bounds.
    #[must_use]
    pub fn of(entries: &[Entry]) -> Self {
        let Some(first) = entries.first() else {
            return Self {
                min_x: 0.0,
                max_x: 0.0,
                min_y: 0.0,
                max_y: 0.0,
            };
        };

        let mut b = Self {
            min_x: first.x,
            max_x: first.x,
            min_y: first.y,
            max_y: first.y,
        };
        for e in entries {
            b.min_x = b.min_x.min(e.x);
            b.max_x = b.max_x.max(e.x);
            b.min_y = b.min_y.min(e.y);
            b.max_y = b.max_y.max(e.y);
        }
        b
    }

    #[inline]
    #[must_use]
    pub fn range_x(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[inline]
    #[must_use]
    pub fn range_y(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// Data units represented by one grid cell along each axis.
#[derive(Clone, Copy, Debug)]
pub struct Scale {
    pub x: f64,
    pub y: f64,
}

impl Scale {
    /// Scale increments for a plot area of `width` × `height` cells.
    #[must_use]
    pub fn fit(bounds: &Bounds, width: usize, height: usize) -> Self {
        Self {
            x: fit_axis(bounds.range_x(), width as f64),
            y: fit_axis(bounds.range_y(), height as f64),
        }
    }
}

/// Per-axis scale increment. The configured cell count serves as both the
/// ceiling and the floor of the draw area, so every non-degenerate case
/// reduces to `range / dim`: above 1.0 each cell spans several data units,
/// below 1.0 the sweep covers less than one unit per cell and the plotted
/// span contracts to the data's natural extent.
fn fit_axis(range: f64, dim: f64) -> f64 {
    if range == 0.0 {
        // Constant axis: the sweep cursor must not advance at all, so the
        // series collapses into the first row/column instead of dividing
        // zero further down the pipeline.
        0.0
    } else {
        range / dim
    }
}

/// Zero-decimal tick-label formatting. Ties resolve half-to-even via the
/// standard formatter, e.g. `2.5` → `"2"` and `3.5` → `"4"`.
#[inline]
#[must_use]
pub fn format_value(value: f64) -> String {
    format!("{value:.0}")
}

/// Widest formatted label over the series' y values.
#[must_use]
pub fn y_label_width(entries: &[Entry]) -> usize {
    entries
        .iter()
        .map(|e| format_value(e.y).chars().count())
        .max()
        .unwrap_or(0)
}

/// Current terminal geometry (80×30 fallback).
#[inline]
#[must_use]
pub fn terminal_geometry() -> (Width, Height) {
    terminal_size().unwrap_or((Width(80), Height(30)))
}

/// Convert terminal dimensions to plot-area cell counts, leaving room for
/// the y-label gutter, the axis boundary and the label/title rows.
#[inline]
#[must_use]
pub fn graph_dims((w, h): (Width, Height), label_width: usize) -> (usize, usize) {
    let x_cells = (w.0 as usize)
        .saturating_sub(label_width + 2)
        .max(MIN_GRAPH_WIDTH);
    let y_cells = usize::from(h.0).saturating_sub(5).max(MIN_GRAPH_HEIGHT);
    (x_cells, y_cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_series_yields_zero_bounds() {
        assert_eq!(
            Bounds::of(&[]),
            Bounds {
                min_x: 0.0,
                max_x: 0.0,
                min_y: 0.0,
                max_y: 0.0
            }
        );
    }

    #[test]
    fn first_entry_seeds_extrema() {
        let b = Bounds::of(&[Entry::new(3.0, -1.0), Entry::new(-2.0, 4.0)]);
        assert_eq!(b.min_x, -2.0);
        assert_eq!(b.max_x, 3.0);
        assert_eq!(b.min_y, -1.0);
        assert_eq!(b.max_y, 4.0);
        assert_eq!(b.range_x(), 5.0);
        assert_eq!(b.range_y(), 5.0);
    }

    #[test]
    fn dense_range_downsamples() {
        let b = Bounds::of(&[Entry::new(0.0, 0.0), Entry::new(100.0, 30.0)]);
        let s = Scale::fit(&b, 20, 10);
        assert_eq!(s.x, 5.0);
        assert_eq!(s.y, 3.0);
    }

    #[test]
    fn sparse_range_contracts() {
        let b = Bounds::of(&[Entry::new(0.0, 0.0), Entry::new(4.0, 5.0)]);
        let s = Scale::fit(&b, 20, 5);
        assert_eq!(s.x, 0.2);
        assert_eq!(s.y, 1.0);
    }

    #[test]
    fn zero_range_never_advances() {
        let b = Bounds::of(&[Entry::new(5.0, 10.0)]);
        let s = Scale::fit(&b, 20, 5);
        assert_eq!(s.x, 0.0);
        assert_eq!(s.y, 0.0);
    }

    #[test]
    fn labels_round_to_zero_decimals() {
        assert_eq!(format_value(3.7), "4");
        assert_eq!(format_value(-0.4), "-0");
        assert_eq!(format_value(2.5), "2");
        assert_eq!(format_value(3.5), "4");
    }

    #[test]
    fn label_width_tracks_widest_value() {
        let entries = [Entry::new(0.0, 7.0), Entry::new(1.0, -123.4)];
        assert_eq!(y_label_width(&entries), 4);
        assert_eq!(y_label_width(&[]), 0);
    }
}
