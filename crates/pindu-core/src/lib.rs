pub mod annotate;
pub mod glossary;
pub mod render;
pub mod romanize;
pub mod types;

pub use annotate::annotate_segment;
pub use glossary::Glossary;
pub use render::Canvas;
pub use romanize::Romanizer;
pub use types::{AnnotatedChar, Placement};
