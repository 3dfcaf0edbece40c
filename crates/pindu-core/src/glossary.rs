/// Gloss lookup for a single character or word.
pub trait Glossary: Send + Sync {
    /// Display-ready gloss for an exact key. Implementations decide
    /// how misses are represented (an empty string is typical).
    fn gloss(&self, key: &str) -> String;
}
