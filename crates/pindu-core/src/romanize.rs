/// Phonetic transcription collaborator.
///
/// Treated as a pure black box: any failure to produce a reading is the
/// implementation's concern and surfaces as an empty string.
pub trait Romanizer: Send + Sync {
    /// Transcription for one character (pinyin for Hanzi).
    fn romanize(&self, hanzi: char) -> String;
}
