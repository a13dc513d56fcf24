//! Public-facing crate root – re-exports + one-shot helper.

pub mod cli;
pub mod core;
pub mod render;

pub use crate::core::{
    config::{Config, ConfigBuilder},
    data::Entry,
    error::{ConfigError, GraphError},
};

pub use crate::render::{LineGraph, filter_by_resolution};

/// Convenience function: plot a static in-memory series with
/// terminal-fitted dimensions and return the text block.
pub fn plot_entries(entries: &[Entry], title: &str) -> Result<String, GraphError> {
    use crate::core::bounds::{graph_dims, terminal_geometry, y_label_width};

    let (width, height) = graph_dims(terminal_geometry(), y_label_width(entries));
    let cfg = Config::builder()
        .width(width)
        .height(height)
        .title(title)
        .build()?;
    Ok(LineGraph::render(entries, &cfg)?.into_content())
}
