//! A collection of constants.

/// Default plot-area width in cells.
pub const DEFAULT_WIDTH: usize = 50;
/// Default plot-area height in cells.
pub const DEFAULT_HEIGHT: usize = 10;

/// Smallest plot area the CLI will auto-size down to.
pub const MIN_GRAPH_WIDTH: usize = 14;
/// Smallest plot height the CLI will auto-size down to.
pub const MIN_GRAPH_HEIGHT: usize = 7;

/// Marks a plotted data point.
pub const DATA_POINT_GLYPH: char = '*';
/// Y-axis boundary column.
pub const Y_AXIS_GLYPH: char = '│';
/// X-axis boundary row.
pub const X_AXIS_GLYPH: char = '―';
/// Connector between points sharing a row.
pub const HORIZONTAL_GLYPH: char = '─';
/// Connector between (nearly) vertically stacked points.
pub const VERTICAL_GLYPH: char = '|';
/// Rising segment, y increasing left to right.
pub const DIAGONAL_UP_GLYPH: char = '/';
/// Falling segment.
pub const DIAGONAL_DOWN_GLYPH: char = '╲';
/// Appended when a title is truncated to the grid width.
pub const ELLIPSIS: char = '…';
