use std::sync::Arc;
use wana_kana::ConvertJapanese;

use super::interface::Romanizer;

/// Whitespace-separated words, each converted kana-by-kana.
///
/// Kanji and Latin text pass through untouched; used when the dictionary
/// is not compiled in.
#[derive(Debug, Default, Clone)]
pub struct KanaRomanizer;

impl Romanizer for KanaRomanizer {
    fn romanize(&self, text: &str) -> anyhow::Result<String> {
        Ok(text
            .split_whitespace()
            .map(|word| word.to_romaji())
            .collect::<Vec<_>>()
            .join(" "))
    }

    fn name(&self) -> &'static str {
        "kana"
    }
}

#[cfg(feature = "ipadic")]
pub use self::ipadic::IpadicRomanizer;

#[cfg(feature = "ipadic")]
mod ipadic {
    use lindera::dictionary::{load_dictionary_from_kind, DictionaryKind};
    use lindera::mode::Mode;
    use lindera::segmenter::Segmenter;
    use lindera::tokenizer::Tokenizer;
    use wana_kana::ConvertJapanese;

    use crate::romanize::interface::Romanizer;

    /// IPADIC feature column holding the katakana reading.
    const READING_FIELD: usize = 7;

    /// Morphological segmentation with IPADIC readings, one romaji word per token.
    pub struct IpadicRomanizer {
        tokenizer: Tokenizer,
    }

    impl IpadicRomanizer {
        /// Loads the embedded dictionary; slow, call off the async runtime.
        pub fn load() -> anyhow::Result<Self> {
            let dictionary = load_dictionary_from_kind(DictionaryKind::IPADIC)
                .map_err(|e| anyhow::anyhow!("Failed to load IPADIC dictionary: {}", e))?;
            let segmenter = Segmenter::new(Mode::Normal, dictionary, None);

            Ok(Self {
                tokenizer: Tokenizer::new(segmenter),
            })
        }
    }

    impl Romanizer for IpadicRomanizer {
        fn romanize(&self, text: &str) -> anyhow::Result<String> {
            let mut tokens = self
                .tokenizer
                .tokenize(text)
                .map_err(|e| anyhow::anyhow!("Tokenization failed: {}", e))?;

            let words: Vec<String> = tokens
                .iter_mut()
                .filter_map(|token| {
                    let surface = token.text.to_string();
                    if surface.trim().is_empty() {
                        return None;
                    }
                    // Unknown words have no reading column, or "*" in it
                    let details = token.details();
                    let reading = details
                        .get(READING_FIELD)
                        .filter(|reading| **reading != "*")
                        .map(|reading| reading.to_string())
                        .unwrap_or(surface);
                    Some(reading.to_romaji())
                })
                .collect();

            Ok(words.join(" "))
        }

        fn name(&self) -> &'static str {
            "ipadic"
        }
    }

}

/// The best engine this build supports.
#[cfg(feature = "ipadic")]
pub fn load_default() -> anyhow::Result<Arc<dyn Romanizer>> {
    Ok(Arc::new(IpadicRomanizer::load()?))
}

#[cfg(not(feature = "ipadic"))]
pub fn load_default() -> anyhow::Result<Arc<dyn Romanizer>> {
    Ok(Arc::new(KanaRomanizer))
}
