use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use pindu_core::{Canvas, Placement};
use serde::Serialize;

/// Paged placement document: the renderer boundary.
///
/// Records the layout engine's placements page by page and serializes
/// them to JSON; a downstream renderer turns placements into glyphs and
/// output bytes.
#[derive(Debug, Serialize)]
pub struct PlacementDocument {
    pub headline: String,
    pub pages: Vec<Vec<Placement>>,
}

impl PlacementDocument {
    pub fn new(headline: String) -> Self {
        Self {
            headline,
            pages: vec![Vec::new()],
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)?;
        Ok(())
    }
}

impl Canvas for PlacementDocument {
    fn draw_text(&mut self, placement: &Placement) {
        if let Some(page) = self.pages.last_mut() {
            page.push(placement.clone());
        }
    }

    fn new_page(&mut self) {
        self.pages.push(Vec::new());
    }
}
