use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::Path;

use pindu_core::{Glossary, Romanizer};

use crate::gloss::format_gloss;
use crate::line::parse_line;

/// Sentinel returned for lookup misses. A miss is not an error;
/// consumers format it away ([`format_gloss`] turns it into "").
pub const MISS: &str = "_";

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Dictionary resource not found: {0}")]
    FileNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone)]
struct Entry {
    gloss_lines: Vec<String>,
    reading: Option<String>,
}

impl Entry {
    /// Rebuild the legacy gloss block: a leading line separator (the
    /// source-format artifact that [`format_gloss`] strips) followed by
    /// the gloss lines joined with newlines. Empty entries stay empty.
    fn gloss_block(&self) -> String {
        if self.gloss_lines.is_empty() {
            return String::new();
        }
        format!("\n{}", self.gloss_lines.join("\n"))
    }
}

/// Exact-match lookup table built once from a CC-CEDICT style resource.
///
/// Immutable after build; lookups take `&self` and the table is safe
/// for any number of concurrent readers.
#[derive(Debug)]
pub struct CedictIndex {
    entries: HashMap<String, Entry>,
    skipped: usize,
}

impl CedictIndex {
    /// Parse the full resource text. Never fails: malformed lines are
    /// skipped and counted, and the last entry for a duplicate key wins.
    pub fn parse(resource: &str) -> Self {
        let mut entries = HashMap::new();
        let mut skipped = 0usize;
        for line in resource.lines() {
            if line.is_empty() {
                continue;
            }
            match parse_line(line) {
                Some(parsed) => {
                    entries.insert(
                        parsed.key.to_string(),
                        Entry {
                            gloss_lines: parsed.gloss_lines.iter().map(|g| g.to_string()).collect(),
                            reading: parsed.reading.map(str::to_string),
                        },
                    );
                }
                None => {
                    tracing::debug!("Skipping malformed dictionary line: {line}");
                    skipped += 1;
                }
            }
        }
        tracing::info!(
            "Dictionary loaded into memory with {} entries ({} malformed lines skipped)",
            entries.len(),
            skipped
        );
        Self { entries, skipped }
    }

    /// Load and parse the resource file. Missing or unreadable files
    /// are fatal to construction.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        tracing::info!("Loading dictionary from: {}", path.display());
        let resource = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => LoadError::FileNotFound(path.display().to_string()),
            _ => LoadError::Io(e),
        })?;
        Ok(Self::parse(&resource))
    }

    /// The stored gloss block for `key`, or the `"_"` sentinel.
    /// Case-sensitive, exact match only.
    pub fn lookup(&self, key: &str) -> String {
        match self.entries.get(key) {
            Some(entry) => entry.gloss_block(),
            None => MISS.to_string(),
        }
    }

    /// The bracketed pinyin field for `key`, when the resource had one.
    pub fn reading(&self, key: &str) -> Option<&str> {
        self.entries.get(key).and_then(|e| e.reading.as_deref())
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Malformed lines dropped during the build.
    pub fn skipped_lines(&self) -> usize {
        self.skipped
    }
}

impl Glossary for CedictIndex {
    fn gloss(&self, key: &str) -> String {
        format_gloss(&self.lookup(key))
    }
}

impl Romanizer for CedictIndex {
    fn romanize(&self, hanzi: char) -> String {
        self.reading(hanzi.to_string().as_str())
            .map(str::to_string)
            .unwrap_or_default()
    }
}
