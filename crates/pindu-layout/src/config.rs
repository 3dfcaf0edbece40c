use std::collections::HashSet;

/// One centimeter in PostScript points, the unit all page measurements
/// were tuned in.
pub const CM: f32 = 28.346_457;

/// Characters that carry no pinyin: punctuation, digits, brackets.
const IGNORED_FOR_ROMANIZATION: &str = "：。，！；’【0123456789’、】【/@#……&*（）()——-=+“”？:;";

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("chars_per_line must be at least 1")]
    ZeroCharsPerLine,

    #[error("layout dimension {0} must be positive")]
    NonPositiveDimension(&'static str),

    #[error("border {0} must not be negative")]
    NegativeBorder(&'static str),
}

/// Immutable measurement snapshot for one layout pass.
///
/// The caller is responsible for picking measurements where a full line
/// fits the page horizontally; the engine does not re-check that
/// mid-pass. A page shorter than one line is accepted and simply pages
/// through on every line advance.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    pub chars_per_line: usize,
    pub char_width: f32,
    pub line_height: f32,
    /// Vertical distance between a glyph and its pinyin annotation.
    pub pinyin_offset: f32,
    pub page_width: f32,
    pub page_height: f32,
    pub border_side: f32,
    pub border_top: f32,
    pub border_bottom: f32,
    /// Split segments on sentence-final punctuation as well as newlines.
    pub split_on_sentence: bool,
    pub ignored_for_romanization: HashSet<char>,
}

impl LayoutConfig {
    /// Standard A4 measurements.
    pub fn a4() -> Self {
        Self {
            chars_per_line: 24,
            char_width: 0.85 * CM,
            line_height: 1.5 * CM,
            pinyin_offset: 0.5 * CM,
            page_width: 21.0 * CM,
            page_height: 29.7 * CM,
            border_side: 0.5 * CM,
            border_top: 2.0 * CM,
            border_bottom: 1.7 * CM,
            split_on_sentence: false,
            ignored_for_romanization: IGNORED_FOR_ROMANIZATION.chars().collect(),
        }
    }

    /// Extra large glyphs for increased visibility.
    pub fn large_text() -> Self {
        Self {
            chars_per_line: 12,
            char_width: 1.8 * CM,
            line_height: 2.8 * CM,
            pinyin_offset: 0.8 * CM,
            ..Self::a4()
        }
    }

    /// Reject inconsistent measurements before a pass starts; the
    /// engine never re-validates mid-layout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chars_per_line == 0 {
            return Err(ConfigError::ZeroCharsPerLine);
        }
        for (name, value) in [
            ("char_width", self.char_width),
            ("line_height", self.line_height),
            ("page_width", self.page_width),
            ("page_height", self.page_height),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NonPositiveDimension(name));
            }
        }
        for (name, value) in [
            ("border_side", self.border_side),
            ("border_top", self.border_top),
            ("border_bottom", self.border_bottom),
        ] {
            if value < 0.0 {
                return Err(ConfigError::NegativeBorder(name));
            }
        }
        Ok(())
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::a4()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_validate() {
        assert_eq!(LayoutConfig::a4().validate(), Ok(()));
        assert_eq!(LayoutConfig::large_text().validate(), Ok(()));
    }

    #[test]
    fn zero_chars_per_line_is_rejected() {
        let config = LayoutConfig {
            chars_per_line: 0,
            ..LayoutConfig::a4()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroCharsPerLine));
    }

    #[test]
    fn non_positive_dimensions_are_rejected() {
        let config = LayoutConfig {
            line_height: 0.0,
            ..LayoutConfig::a4()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonPositiveDimension("line_height"))
        );
    }

    #[test]
    fn negative_borders_are_rejected() {
        let config = LayoutConfig {
            border_top: -1.0,
            ..LayoutConfig::a4()
        };
        assert_eq!(config.validate(), Err(ConfigError::NegativeBorder("border_top")));
    }

    #[test]
    fn digits_and_punctuation_are_ignored_for_romanization() {
        let config = LayoutConfig::a4();
        for c in "。，7？".chars() {
            assert!(config.ignored_for_romanization.contains(&c));
        }
        assert!(!config.ignored_for_romanization.contains(&'好'));
    }
}
