//! One-shot line-graph renderer: entries × config → text block.
//!
//! ### Pipeline
//! 1. resolution filter (see `render::filter`)
//! 2. bounds + per-axis scale
//! 3. grid allocation + layout
//! 4. axis boundary lines
//! 5. cursor-sweep point plotting with tick labels
//! 6. connecting segments between screen-ordered points
//! 7. centred title / axis titles
//! 8. serialisation
//!
//! Each render call is an independent, pure computation: the grid is local
//! transient state and nothing is shared between calls.

use crate::{
    core::{
        bounds::{Bounds, Scale, format_value, y_label_width},
        config::Config,
        constants::{
            DATA_POINT_GLYPH, DIAGONAL_DOWN_GLYPH, DIAGONAL_UP_GLYPH, ELLIPSIS, HORIZONTAL_GLYPH,
            VERTICAL_GLYPH, X_AXIS_GLYPH, Y_AXIS_GLYPH,
        },
        data::Entry,
        error::{ConfigError, GraphError},
    },
    render::{
        filter::filter_by_resolution,
        grid::{Grid, Layout},
    },
};

/// A rendered graph. Holds nothing but the finished text block.
#[derive(Debug)]
pub struct LineGraph {
    content: String,
}

impl LineGraph {
    /// Render `entries` into a character grid under `config`.
    ///
    /// Never fails for well-formed numeric input; an empty series yields a
    /// grid with axis scaffolding and no plotted points.
    pub fn render(entries: &[Entry], config: &Config) -> Result<Self, GraphError> {
        // re-checked here so a hand-assembled Config cannot size a zero grid
        if config.width == 0 || config.height == 0 {
            return Err(ConfigError::InvalidDimensions {
                width: config.width,
                height: config.height,
            }
            .into());
        }

        let entries = filter_by_resolution(entries, config.resolution);
        let bounds = Bounds::of(&entries);
        let scale = Scale::fit(&bounds, config.width, config.height);

        let label_width = if config.show_y_values {
            y_label_width(&entries)
        } else {
            0
        };
        let extra_height = usize::from(config.title.is_some())
            + usize::from(config.show_axis_lines)
            + usize::from(config.show_x_values)
            + usize::from(config.x_axis_title.is_some());
        let extra_width = usize::from(config.y_axis_title.is_some())
            + label_width
            + usize::from(config.show_axis_lines);

        let grid_height = config.height + extra_height;
        let layout = Layout::compute(
            grid_height,
            extra_width,
            extra_height,
            config.title.is_some(),
            config.show_axis_lines,
            label_width,
        );

        let mut painter = Painter {
            grid: Grid::new(config.width + extra_width, grid_height),
            layout,
            bounds,
            scale,
            config,
        };

        painter.draw_axes();
        painter.plot_points(entries);
        painter.connect_points();
        painter.draw_axis_titles();
        if let Some(title) = &config.title {
            painter.draw_title(title);
        }

        Ok(Self {
            content: painter.grid.to_text(),
        })
    }

    #[inline]
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[inline]
    #[must_use]
    pub fn into_content(self) -> String {
        self.content
    }
}

/// Short-lived drawing state scoped to one render call.
struct Painter<'a> {
    grid: Grid,
    layout: Layout,
    bounds: Bounds,
    scale: Scale,
    config: &'a Config,
}

impl Painter<'_> {
    // --- Axes ---

    fn draw_axes(&mut self) {
        if !self.config.show_axis_lines {
            return;
        }
        for y in 0..=self.layout.graph_end_y {
            self.grid.set(y, self.layout.y_axis_line_x, Y_AXIS_GLYPH);
        }
        for x in self.layout.graph_start_x..self.grid.width() {
            self.grid.set(self.layout.x_axis_line_y, x, X_AXIS_GLYPH);
        }
    }

    // --- Data Points ---

    /// Sweep the plot area bottom-to-top, left-to-right, advancing a
    /// data-space cursor by one scale increment per cell. The first pending
    /// entry at or behind the cursor on both axes is plotted; every entry
    /// satisfying the threshold at that cell is then consumed with it.
    fn plot_points(&mut self, mut pending: Vec<Entry>) {
        let mut cursor_y = self.bounds.min_y;

        for y in (0..self.grid.height()).rev() {
            if y == 0 && self.config.title.is_some() {
                continue;
            }
            if y <= self.layout.graph_end_y {
                cursor_y += self.scale.y;
            }

            let mut cursor_x = self.bounds.min_x;

            for x in 0..self.grid.width() {
                if x < self.layout.graph_start_x || y > self.layout.graph_end_y {
                    continue;
                }
                cursor_x += self.scale.x;

                let hit = pending
                    .iter()
                    .position(|e| e.x <= cursor_x && e.y <= cursor_y);
                if let Some(i) = hit {
                    let entry = pending[i];
                    self.grid.set(y, x, DATA_POINT_GLYPH);
                    self.draw_y_axis_label(y, entry.y);
                    self.draw_x_axis_label(x, entry.x);

                    // bulk removal: everything at or behind the cursor goes,
                    // not just the plotted entry
                    pending.retain(|e| !(e.x <= cursor_x && e.y <= cursor_y));
                }
            }
        }
    }

    fn draw_y_axis_label(&mut self, row: usize, value: f64) {
        if !self.config.show_y_values || self.layout.y_label_width == 0 {
            return;
        }
        // first writer wins: any earlier label ends right before the axis
        let end = self.layout.y_label_end_x;
        if self.grid.get(row, end - 1) != ' ' {
            return;
        }

        let label: Vec<char> = format_value(value).chars().collect();
        let start = end.saturating_sub(label.len());
        for (i, &ch) in label.iter().enumerate() {
            self.grid.set(row, start + i, ch);
        }
    }

    fn draw_x_axis_label(&mut self, column: usize, value: f64) {
        if !self.config.show_x_values {
            return;
        }
        let row = self.layout.x_axis_label_y;
        let label: Vec<char> = format_value(value).chars().collect();

        // room to the right, including one separating blank
        if column + label.len() >= self.grid.width() {
            return;
        }
        // left neighbour must be blank unless it is the axis boundary
        if let Some(left) = column.checked_sub(1) {
            let ch = self.grid.get(row, left);
            if ch != ' ' && ch != Y_AXIS_GLYPH {
                return;
            }
        }
        if self.grid.get(row, column + label.len()) != ' ' {
            return;
        }
        // first writer wins across the label's own span
        if (0..label.len()).any(|i| self.grid.get(row, column + i) != ' ') {
            return;
        }

        for (i, &ch) in label.iter().enumerate() {
            self.grid.set(row, column + i, ch);
        }
    }

    // --- Connecting Lines ---

    fn connect_points(&mut self) {
        let mut points: Vec<(usize, usize)> = Vec::new(); // (col, row)
        for y in 0..self.grid.height() {
            for x in 0..self.grid.width() {
                if self.grid.get(y, x) == DATA_POINT_GLYPH {
                    points.push((x, y));
                }
            }
        }
        // stable: equal columns stay in scan order (top row first)
        points.sort_by_key(|&(x, _)| x);

        for pair in points.windows(2) {
            self.draw_segment(pair[0], pair[1]);
        }
    }

    fn draw_segment(&mut self, from: (usize, usize), to: (usize, usize)) {
        let dx = to.0 as isize - from.0 as isize;
        let dy = to.1 as isize - from.1 as isize;

        if dx <= 1 {
            self.draw_vertical(from, to);
        } else if dy == 0 {
            self.draw_horizontal(from, to);
        } else {
            self.draw_diagonal(from, dx, dy);
        }
    }

    fn draw_vertical(&mut self, from: (usize, usize), to: (usize, usize)) {
        let low = from.1.min(to.1);
        let high = from.1.max(to.1);
        for y in low + 1..high {
            if self.in_plot_area(from.0, y) {
                self.grid.set(y, from.0, VERTICAL_GLYPH);
            }
        }
    }

    fn draw_horizontal(&mut self, from: (usize, usize), to: (usize, usize)) {
        for x in from.0 + 1..to.0 {
            if self.in_plot_area(x, from.1) {
                self.grid.set(from.1, x, HORIZONTAL_GLYPH);
            }
        }
    }

    fn draw_diagonal(&mut self, from: (usize, usize), dx: isize, dy: isize) {
        let steps = dx.abs().max(dy.abs());
        let glyph = if dy < 0 {
            DIAGONAL_UP_GLYPH
        } else {
            DIAGONAL_DOWN_GLYPH
        };

        for step in 1..steps {
            let t = step as f64 / steps as f64;
            let x = from.0 as isize + (dx as f64 * t).round() as isize;
            let y = from.1 as isize + (dy as f64 * t).round() as isize;
            if x < 0 || y < 0 {
                continue;
            }
            let (x, y) = (x as usize, y as usize);
            // data points and earlier segments take precedence
            if self.in_plot_area(x, y) && self.grid.get(y, x) == ' ' {
                self.grid.set(y, x, glyph);
            }
        }
    }

    fn in_plot_area(&self, x: usize, y: usize) -> bool {
        y <= self.layout.graph_end_y && x >= self.layout.graph_start_x && x < self.grid.width()
    }

    // --- Titles ---

    fn draw_title(&mut self, title: &str) {
        let width = self.grid.width();
        let chars = truncate_to(title, width);

        let pad = width - chars.len();
        let left = pad / 2;
        // the odd column lands on the right
        let mut row = vec![' '; left];
        row.extend(chars);
        row.resize(width, ' ');
        self.grid.replace_row(0, row);
    }

    fn draw_axis_titles(&mut self) {
        if let Some(t) = &self.config.x_axis_title {
            let row = self.grid.height() - 1;
            let width = self.grid.width();
            let chars = truncate_to(t, width);
            let start = (width - chars.len()) / 2;
            for (i, &ch) in chars.iter().enumerate() {
                self.grid.set(row, start + i, ch);
            }
        }
        if let Some(t) = &self.config.y_axis_title {
            // one reserved column at the far left, centred over the plot rows
            let top = usize::from(self.config.title.is_some());
            let rows = self.layout.graph_end_y + 1 - top;
            let chars = truncate_to(t, rows);
            let start = top + (rows - chars.len()) / 2;
            for (i, &ch) in chars.iter().enumerate() {
                self.grid.set(start + i, 0, ch);
            }
        }
    }
}

/// Truncate to `limit` characters, marking the cut with an ellipsis.
fn truncate_to(text: &str, limit: usize) -> Vec<char> {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= limit {
        return chars;
    }
    let mut out: Vec<char> = chars[..limit.saturating_sub(1)].to_vec();
    out.push(ELLIPSIS);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_marks_the_cut() {
        assert_eq!(truncate_to("abc", 5), vec!['a', 'b', 'c']);
        assert_eq!(truncate_to("abcdef", 4), vec!['a', 'b', 'c', '…']);
        assert_eq!(truncate_to("ab", 2), vec!['a', 'b']);
    }

    #[test]
    fn empty_series_renders_scaffolding_only() {
        let cfg = Config::builder().width(5).height(3).build().unwrap();
        let graph = LineGraph::render(&[], &cfg).unwrap();
        let rows: Vec<&str> = graph.content().lines().collect();
        // 3 plot rows + axis line + label row, each 6 wide (axis column only)
        assert_eq!(rows.len(), 5);
        assert!(rows.iter().all(|r| r.chars().count() == 6));
        assert!(!graph.content().contains('*'));
        assert_eq!(rows[3], " ―――――");
        assert!(rows[0].starts_with('│'));
    }

    #[test]
    fn hand_assembled_zero_config_is_rejected() {
        let cfg = Config {
            width: 0,
            ..Config::default()
        };
        assert!(matches!(
            LineGraph::render(&[], &cfg),
            Err(GraphError::Config(ConfigError::InvalidDimensions { .. }))
        ));
    }
}
