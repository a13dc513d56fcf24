//! Aggregates the “business logic” layer.

pub mod bounds;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;

// re-export frequently-used items for convenience
pub use bounds::{Bounds, Scale};
pub use config::{Config, ConfigBuilder};
pub use constants::{DEFAULT_HEIGHT, DEFAULT_WIDTH, MIN_GRAPH_HEIGHT, MIN_GRAPH_WIDTH};
pub use data::Entry;
pub use error::{ConfigError, GraphError};
