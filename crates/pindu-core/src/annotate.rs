use std::collections::HashSet;

use crate::glossary::Glossary;
use crate::romanize::Romanizer;
use crate::types::AnnotatedChar;

/// Annotate one segment character by character.
///
/// Whitespace is kept in the output but marked non-content so the
/// layout engine skips it. Characters in `ignored` (punctuation,
/// digits) carry a single-space romanization and the romanizer is not
/// consulted for them.
pub fn annotate_segment(
    segment: &str,
    glossary: &dyn Glossary,
    romanizer: &dyn Romanizer,
    ignored: &HashSet<char>,
) -> Vec<AnnotatedChar> {
    tracing::trace!("Annotating segment: {}", segment);
    segment
        .chars()
        .map(|c| {
            if c.is_whitespace() {
                return AnnotatedChar {
                    glyph: c.to_string(),
                    romanization: String::new(),
                    gloss: String::new(),
                    is_content: false,
                };
            }
            let key = c.to_string();
            let romanization = if ignored.contains(&c) {
                " ".to_string()
            } else {
                romanizer.romanize(c)
            };
            AnnotatedChar {
                romanization,
                gloss: glossary.gloss(&key),
                glyph: key,
                is_content: true,
            }
        })
        .collect()
}
