use pindu_core::{AnnotatedChar, Canvas, Placement};

use crate::config::{CM, ConfigError, LayoutConfig};

/// End-of-segment page threshold. Deliberately distinct from (and
/// slightly tighter than) the per-character check against
/// `page_height - border_bottom`: a fresh segment never starts in the
/// last centimeter of the page even when one more line would still fit.
const SEGMENT_PAGE_LIMIT: f32 = 27.0 * CM;

/// Mutable position state for one layout pass. Owned exclusively by the
/// engine; reset when the pass starts and discarded with it.
#[derive(Debug, Clone, Copy)]
pub struct Cursor {
    pub x: f32,
    pub y: f32,
    /// Glyphs already placed on the current line.
    pub column: usize,
    pub page_index: usize,
}

/// Walks annotated segments and emits positioned glyph and pinyin
/// placements onto a [`Canvas`], honoring line length, sentence
/// boundaries and page height.
///
/// One engine drives one pass; concurrent passes need separate engines.
pub struct LayoutEngine {
    config: LayoutConfig,
    cursor: Cursor,
    in_body: bool,
    headline_placed: bool,
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let cursor = Cursor {
            x: config.border_side,
            y: config.border_top,
            column: 0,
            page_index: 0,
        };
        Ok(Self {
            config,
            cursor,
            in_body: false,
            headline_placed: false,
        })
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// One page-centered headline line, then a line advance. Valid once
    /// per document, before any segment; later calls are ignored.
    pub fn place_headline(&mut self, text: &str, canvas: &mut dyn Canvas) {
        if self.headline_placed || self.in_body {
            tracing::warn!("Headline placement after layout started, ignoring");
            return;
        }
        self.headline_placed = true;
        canvas.draw_text(&Placement {
            text: text.to_string(),
            primary: true,
            x: self.config.page_width / 2.0,
            y: self.cursor.y,
        });
        self.next_line();
    }

    /// Place one annotated segment. Content characters emit a primary
    /// glyph placement at the cursor and a secondary pinyin placement
    /// below it; non-content characters are skipped entirely and
    /// consume no layout slot. An empty slice is a no-op.
    pub fn place_segment(&mut self, chars: &[AnnotatedChar], canvas: &mut dyn Canvas) {
        if chars.is_empty() {
            return;
        }
        self.in_body = true;
        tracing::debug!(
            "Placing segment with {} content characters",
            chars.iter().filter(|c| c.is_content).count()
        );

        for ch in chars.iter().filter(|c| c.is_content) {
            if self.cursor.column >= self.config.chars_per_line {
                self.next_line();
                if self.cursor.y > self.config.page_height - self.config.border_bottom {
                    self.next_page(canvas);
                }
            }
            canvas.draw_text(&Placement {
                text: ch.glyph.clone(),
                primary: true,
                x: self.cursor.x,
                y: self.cursor.y,
            });
            canvas.draw_text(&Placement {
                text: ch.romanization.clone(),
                primary: false,
                x: self.cursor.x,
                y: self.cursor.y + self.config.pinyin_offset,
            });
            self.cursor.column += 1;
            self.cursor.x += self.config.char_width;
        }

        // Each segment owns its final line, even when every character
        // was folded as whitespace.
        self.next_line();
        if self.cursor.y > SEGMENT_PAGE_LIMIT {
            self.next_page(canvas);
        }
    }

    fn next_line(&mut self) {
        self.cursor.y += self.config.line_height;
        self.cursor.x = self.config.border_side;
        self.cursor.column = 0;
    }

    fn next_page(&mut self, canvas: &mut dyn Canvas) {
        canvas.new_page();
        self.cursor.y = self.config.border_top;
        self.cursor.x = self.config.border_side;
        self.cursor.column = 0;
        self.cursor.page_index += 1;
        tracing::debug!("Advanced to page {}", self.cursor.page_index + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct RecordingCanvas {
        pages: Vec<Vec<Placement>>,
    }

    impl RecordingCanvas {
        fn new() -> Self {
            Self { pages: vec![Vec::new()] }
        }

        fn primaries(&self, page: usize) -> Vec<&Placement> {
            self.pages[page].iter().filter(|p| p.primary).collect()
        }
    }

    impl Canvas for RecordingCanvas {
        fn draw_text(&mut self, placement: &Placement) {
            self.pages
                .last_mut()
                .expect("canvas always has a page")
                .push(placement.clone());
        }

        fn new_page(&mut self) {
            self.pages.push(Vec::new());
        }
    }

    fn content(glyph: &str) -> AnnotatedChar {
        AnnotatedChar {
            glyph: glyph.to_string(),
            romanization: "pin1".to_string(),
            gloss: String::new(),
            is_content: true,
        }
    }

    fn whitespace() -> AnnotatedChar {
        AnnotatedChar {
            glyph: " ".to_string(),
            romanization: String::new(),
            gloss: String::new(),
            is_content: false,
        }
    }

    fn small_config() -> LayoutConfig {
        LayoutConfig {
            chars_per_line: 2,
            char_width: 10.0,
            line_height: 10.0,
            pinyin_offset: 4.0,
            page_width: 100.0,
            page_height: 10_000.0,
            border_side: 5.0,
            border_top: 20.0,
            border_bottom: 10.0,
            ..LayoutConfig::a4()
        }
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn five_chars_at_two_per_line_take_three_line_advances() {
        let mut engine = LayoutEngine::new(small_config()).unwrap();
        let mut canvas = RecordingCanvas::new();
        let chars: Vec<AnnotatedChar> = (0..5).map(|_| content("你")).collect();

        engine.place_segment(&chars, &mut canvas);

        let primaries = canvas.primaries(0);
        assert_eq!(primaries.len(), 5);
        // Lines of 2, 2, 1; x resets to border_side at each line start.
        let xs: Vec<f32> = primaries.iter().map(|p| p.x).collect();
        for (got, want) in xs.iter().zip([5.0, 15.0, 5.0, 15.0, 5.0]) {
            assert!(approx(*got, want), "x = {got}, want {want}");
        }
        let ys: Vec<f32> = primaries.iter().map(|p| p.y).collect();
        for (got, want) in ys.iter().zip([20.0, 20.0, 30.0, 30.0, 40.0]) {
            assert!(approx(*got, want), "y = {got}, want {want}");
        }
        // Two mid-segment advances plus the segment-final one.
        assert!(approx(engine.cursor().y, 20.0 + 3.0 * 10.0));
        assert_eq!(canvas.pages.len(), 1);
    }

    #[test]
    fn pinyin_is_placed_below_each_glyph() {
        let mut engine = LayoutEngine::new(small_config()).unwrap();
        let mut canvas = RecordingCanvas::new();

        engine.place_segment(&[content("好")], &mut canvas);

        let page = &canvas.pages[0];
        assert_eq!(page.len(), 2);
        assert!(page[0].primary);
        assert!(!page[1].primary);
        assert_eq!(page[1].text, "pin1");
        assert!(approx(page[1].x, page[0].x));
        assert!(approx(page[1].y, page[0].y + 4.0));
    }

    #[test]
    fn page_shorter_than_one_line_breaks_on_first_line_advance() {
        let config = LayoutConfig {
            chars_per_line: 2,
            char_width: 0.5 * CM,
            line_height: 1.5 * CM,
            page_height: 3.0 * CM,
            border_side: 0.5 * CM,
            border_top: 2.0 * CM,
            border_bottom: 1.7 * CM,
            ..LayoutConfig::a4()
        };
        let mut engine = LayoutEngine::new(config).unwrap();
        let mut canvas = RecordingCanvas::new();
        let chars: Vec<AnnotatedChar> = (0..3).map(|_| content("你")).collect();

        engine.place_segment(&chars, &mut canvas);

        assert_eq!(canvas.pages.len(), 2);
        assert_eq!(canvas.primaries(0).len(), 2);
        // The third glyph lands at the top-left of the fresh page.
        let third = canvas.primaries(1)[0];
        assert!(approx(third.x, 0.5 * CM));
        assert!(approx(third.y, 2.0 * CM));
        assert_eq!(engine.cursor().page_index, 1);
    }

    #[test]
    fn segment_end_threshold_fires_before_the_per_character_one() {
        // After the segment-final advance y lands at 27.5cm: past the
        // fixed 27cm segment limit but inside the 28cm per-character
        // limit (page_height - border_bottom). Only the end-of-segment
        // check may fire here; the two thresholds are not the same.
        let config = LayoutConfig {
            chars_per_line: 4,
            line_height: 25.5 * CM,
            ..LayoutConfig::a4()
        };
        let mut engine = LayoutEngine::new(config).unwrap();
        let mut canvas = RecordingCanvas::new();

        engine.place_segment(&[content("你"), content("好")], &mut canvas);

        assert_eq!(canvas.pages.len(), 2);
        // Both glyphs were placed before the page turned.
        assert_eq!(canvas.primaries(0).len(), 2);
        assert!(canvas.pages[1].is_empty());
        assert!(approx(engine.cursor().y, 2.0 * CM));
    }

    #[test]
    fn headline_is_centered_and_takes_a_line() {
        let config = small_config();
        let mut engine = LayoutEngine::new(config).unwrap();
        let mut canvas = RecordingCanvas::new();

        engine.place_headline("春晓", &mut canvas);

        let page = &canvas.pages[0];
        assert_eq!(page.len(), 1);
        assert!(approx(page[0].x, 50.0));
        assert!(approx(page[0].y, 20.0));
        assert!(approx(engine.cursor().y, 30.0));
    }

    #[test]
    fn headline_after_body_is_ignored() {
        let mut engine = LayoutEngine::new(small_config()).unwrap();
        let mut canvas = RecordingCanvas::new();

        engine.place_segment(&[content("你")], &mut canvas);
        let placed = canvas.pages[0].len();
        engine.place_headline("too late", &mut canvas);

        assert_eq!(canvas.pages[0].len(), placed);
    }

    #[test]
    fn empty_segment_is_a_no_op() {
        let mut engine = LayoutEngine::new(small_config()).unwrap();
        let mut canvas = RecordingCanvas::new();

        engine.place_segment(&[], &mut canvas);

        assert!(canvas.pages[0].is_empty());
        assert!(approx(engine.cursor().y, 20.0));
    }

    #[test]
    fn whitespace_only_segment_emits_nothing_but_advances_a_line() {
        let mut engine = LayoutEngine::new(small_config()).unwrap();
        let mut canvas = RecordingCanvas::new();

        engine.place_segment(&[whitespace(), whitespace()], &mut canvas);

        assert!(canvas.pages[0].is_empty());
        assert!(approx(engine.cursor().y, 30.0));
    }

    #[test]
    fn non_content_characters_consume_no_slot() {
        let mut engine = LayoutEngine::new(small_config()).unwrap();
        let mut canvas = RecordingCanvas::new();

        engine.place_segment(
            &[content("你"), whitespace(), content("好")],
            &mut canvas,
        );

        let primaries = canvas.primaries(0);
        assert_eq!(primaries.len(), 2);
        // Both glyphs sit on the same line, adjacent columns.
        assert!(approx(primaries[1].x, primaries[0].x + 10.0));
        assert!(approx(primaries[1].y, primaries[0].y));
    }

    #[test]
    fn invalid_config_is_rejected_at_construction() {
        let config = LayoutConfig {
            chars_per_line: 0,
            ..LayoutConfig::a4()
        };
        assert!(LayoutEngine::new(config).is_err());
    }
}
