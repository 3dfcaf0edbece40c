pub mod config;
pub mod engine;
pub mod segment;

pub use config::{CM, ConfigError, LayoutConfig};
pub use engine::{Cursor, LayoutEngine};
pub use segment::segments;
