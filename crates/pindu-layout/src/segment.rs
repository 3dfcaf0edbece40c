/// Split input text into layout segments.
///
/// With `split_on_sentence` the triggers are the sentence-final `。`
/// and newlines, so a sentence never straddles the end-of-segment page
/// check; otherwise newlines only. The iterator is lazy and restartable
/// from a fresh call. Empty segments are produced (including one after
/// a trailing trigger) and callers skip them before layout.
pub fn segments(text: &str, split_on_sentence: bool) -> impl Iterator<Item = &str> {
    text.split(move |c: char| c == '\n' || (split_on_sentence && c == '。'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_sentence_final_punctuation() {
        let parts: Vec<&str> = segments("你好。再见。", true).collect();
        assert_eq!(parts, vec!["你好", "再见", ""]);
    }

    #[test]
    fn newline_only_mode_keeps_sentences_together() {
        let parts: Vec<&str> = segments("你好。再见。\n下一行", false).collect();
        assert_eq!(parts, vec!["你好。再见。", "下一行"]);
    }

    #[test]
    fn newlines_split_in_both_modes() {
        let parts: Vec<&str> = segments("一\n二。三", true).collect();
        assert_eq!(parts, vec!["一", "二", "三"]);
    }

    #[test]
    fn empty_input_yields_one_empty_segment() {
        let parts: Vec<&str> = segments("", true).collect();
        assert_eq!(parts, vec![""]);
    }
}
