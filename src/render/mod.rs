pub mod filter;
pub mod graph;
pub mod grid;

pub use filter::filter_by_resolution;
pub use graph::LineGraph;
pub use grid::{Grid, Layout};
