/// Display formatting for a raw gloss block.
///
/// The block's first character is a separator artifact of the source
/// format and is always dropped. Blocks longer than 75 characters are
/// cut to characters 1..40 plus an ellipsis so they fit a preview
/// column. Indices are character-based, preserved exactly for
/// compatibility with the source format's consumers.
pub fn format_gloss(raw: &str) -> String {
    if raw.chars().count() > 75 {
        let mut truncated: String = raw.chars().skip(1).take(39).collect();
        truncated.push('…');
        truncated
    } else {
        raw.chars().skip(1).collect()
    }
}
