//! Run-time configuration object + fluent builder.

use crate::core::{
    constants::{DEFAULT_HEIGHT, DEFAULT_WIDTH},
    error::ConfigError,
};

/// Immutable parameters handed to the renderer.
#[derive(Debug, Clone)]
pub struct Config {
    pub title: Option<String>,
    pub x_axis_title: Option<String>,
    pub y_axis_title: Option<String>,
    /// Plot-area width in cells.
    pub width: usize,
    /// Plot-area height in cells.
    pub height: usize,
    /// Fraction of non-extremum points retained, already clamped to [0, 1].
    pub resolution: f64,
    pub show_axis_lines: bool,
    pub show_x_values: bool,
    pub show_y_values: bool,
}

impl Config {
    #[inline]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: None,
            x_axis_title: None,
            y_axis_title: None,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            resolution: 1.0,
            show_axis_lines: true,
            show_x_values: true,
            show_y_values: true,
        }
    }
}

/// Fluent builder with zero allocation until `build`.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    width: Option<usize>,
    height: Option<usize>,
    title: Option<String>,
    x_axis_title: Option<String>,
    y_axis_title: Option<String>,
    resolution: Option<f64>,
    show_axis_lines: Option<bool>,
    show_x_values: Option<bool>,
    show_y_values: Option<bool>,
}

impl ConfigBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn width(mut self, cells: usize) -> Self {
        self.width = Some(cells);
        self
    }
    #[inline]
    pub fn height(mut self, cells: usize) -> Self {
        self.height = Some(cells);
        self
    }
    #[inline]
    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = Some(t.into());
        self
    }
    #[inline]
    pub fn title_opt(mut self, t: &Option<String>) -> Self {
        if let Some(t) = t {
            self.title = Some(t.clone());
        }
        self
    }
    #[inline]
    pub fn x_axis_title(mut self, t: impl Into<String>) -> Self {
        self.x_axis_title = Some(t.into());
        self
    }
    #[inline]
    pub fn x_axis_title_opt(mut self, t: &Option<String>) -> Self {
        if let Some(t) = t {
            self.x_axis_title = Some(t.clone());
        }
        self
    }
    #[inline]
    pub fn y_axis_title(mut self, t: impl Into<String>) -> Self {
        self.y_axis_title = Some(t.into());
        self
    }
    #[inline]
    pub fn y_axis_title_opt(mut self, t: &Option<String>) -> Self {
        if let Some(t) = t {
            self.y_axis_title = Some(t.clone());
        }
        self
    }
    #[inline]
    pub fn resolution(mut self, r: f64) -> Self {
        self.resolution = Some(r);
        self
    }
    #[inline]
    pub fn show_axis_lines(mut self, show: bool) -> Self {
        self.show_axis_lines = Some(show);
        self
    }
    #[inline]
    pub fn show_x_values(mut self, show: bool) -> Self {
        self.show_x_values = Some(show);
        self
    }
    #[inline]
    pub fn show_y_values(mut self, show: bool) -> Self {
        self.show_y_values = Some(show);
        self
    }

    pub fn build(self) -> Result<Config, ConfigError> {
        let width = self.width.unwrap_or(DEFAULT_WIDTH);
        let height = self.height.unwrap_or(DEFAULT_HEIGHT);
        if width == 0 || height == 0 {
            return Err(ConfigError::InvalidDimensions { width, height });
        }
        Ok(Config {
            title: self.title,
            x_axis_title: self.x_axis_title,
            y_axis_title: self.y_axis_title,
            width,
            height,
            // out-of-range resolutions clamp silently rather than fail
            resolution: self.resolution.unwrap_or(1.0).clamp(0.0, 1.0),
            show_axis_lines: self.show_axis_lines.unwrap_or(true),
            show_x_values: self.show_x_values.unwrap_or(true),
            show_y_values: self.show_y_values.unwrap_or(true),
        })
    }
}

/// Ergonomic `?` on a builder chain.
impl From<ConfigBuilder> for Result<Config, ConfigError> {
    fn from(b: ConfigBuilder) -> Self {
        b.build()
    }
}
