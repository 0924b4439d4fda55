//! Romanization seam: kana/kanji in, spaced Hepburn romaji out.

/// Converts Japanese text to word-separated Hepburn romaji.
///
/// Implementations are shared read-only across requests, so `romanize`
/// takes `&self` and must be callable from any thread.
pub trait Romanizer: Send + Sync {
    fn romanize(&self, text: &str) -> anyhow::Result<String>;

    /// Short name for logs and the health endpoint.
    fn name(&self) -> &'static str;
}
