pub mod gloss;
pub mod index;
pub mod line;

pub use gloss::format_gloss;
pub use index::{CedictIndex, LoadError, MISS};
pub use line::EntryLine;
