//! Space-initialised character grid + the precomputed drawing layout.

/// Row-major character buffer, mutated in place by each drawing phase and
/// discarded after serialisation.
#[derive(Debug)]
pub struct Grid {
    width: usize,
    rows: Vec<Vec<char>>,
}

impl Grid {
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            rows: vec![vec![' '; width]; height],
        }
    }

    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> char {
        self.rows[row][col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, ch: char) {
        self.rows[row][col] = ch;
    }

    /// Swap in a full replacement row; `cells` must already be grid-width.
    pub fn replace_row(&mut self, row: usize, cells: Vec<char>) {
        debug_assert_eq!(cells.len(), self.width);
        self.rows[row] = cells;
    }

    /// Join rows with a single newline, no trailing newline.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.height() * (self.width + 1));
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.extend(row.iter());
        }
        out
    }
}

/// Pre-calculated grid-index boundaries consumed by every drawing phase.
/// Recomputed per render, no independent lifecycle.
#[derive(Clone, Copy, Debug)]
pub struct Layout {
    /// Column where the plot area begins.
    pub graph_start_x: usize,
    /// Row where the plot area ends (bottom of plot area).
    pub graph_end_y: usize,
    /// Row for the x-axis boundary line.
    pub x_axis_line_y: usize,
    /// Row for x-axis value labels.
    pub x_axis_label_y: usize,
    /// Column for the y-axis boundary line.
    pub y_axis_line_x: usize,
    /// Exclusive end column of the y tick-label field.
    pub y_label_end_x: usize,
    /// Reserved width for y tick labels.
    pub y_label_width: usize,
}

impl Layout {
    #[must_use]
    pub fn compute(
        grid_height: usize,
        extra_width: usize,
        extra_height: usize,
        has_title: bool,
        has_axis_lines: bool,
        label_width: usize,
    ) -> Self {
        let title_rows = usize::from(has_title);
        let axis_rows = usize::from(has_axis_lines);
        let axis_cols = usize::from(has_axis_lines);
        let graph_end_y = (grid_height - 1) - (extra_height - title_rows);

        Self {
            graph_start_x: extra_width,
            graph_end_y,
            x_axis_line_y: graph_end_y + 1,
            x_axis_label_y: graph_end_y + 1 + axis_rows,
            y_axis_line_x: extra_width.saturating_sub(1),
            y_label_end_x: extra_width - axis_cols,
            y_label_width: label_width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_starts_blank_and_serialises_without_trailing_newline() {
        let g = Grid::new(3, 2);
        assert_eq!(g.to_text(), "   \n   ");
    }

    #[test]
    fn set_and_get_round_trip() {
        let mut g = Grid::new(4, 3);
        g.set(2, 1, '*');
        assert_eq!(g.get(2, 1), '*');
        assert_eq!(g.get(0, 0), ' ');
    }

    #[test]
    fn layout_without_title() {
        // 20×6 plot, axis line + x-label rows, 1-wide y labels
        let l = Layout::compute(8, 2, 2, false, true, 1);
        assert_eq!(l.graph_start_x, 2);
        assert_eq!(l.graph_end_y, 5);
        assert_eq!(l.x_axis_line_y, 6);
        assert_eq!(l.x_axis_label_y, 7);
        assert_eq!(l.y_axis_line_x, 1);
        assert_eq!(l.y_label_end_x, 1);
    }

    #[test]
    fn title_row_shrinks_the_plot_from_the_top_only() {
        let with = Layout::compute(8, 2, 3, true, true, 1);
        let without = Layout::compute(7, 2, 2, false, true, 1);
        assert_eq!(with.graph_end_y, without.graph_end_y + 1);
    }
}
