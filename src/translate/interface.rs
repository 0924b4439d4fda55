//! Translation backend seam; the relay only ever talks to this trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::RelayError;

/// Two-letter language code understood by the upstream service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    Ja,
    En,
}

impl Lang {
    pub fn code(self) -> &'static str {
        match self {
            Lang::Ja => "ja",
            Lang::En => "en",
        }
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Resolved translation direction; `from` and `to` always differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Direction {
    pub from: Lang,
    pub to: Lang,
}

impl Direction {
    pub const JA_TO_EN: Direction = Direction { from: Lang::Ja, to: Lang::En };
    pub const EN_TO_JA: Direction = Direction { from: Lang::En, to: Lang::Ja };
}

#[derive(Debug, Clone)]
pub struct TranslateRequest {
    pub text: String,
    pub direction: Direction,
}

#[async_trait]
pub trait TranslateInterface: Send + Sync {
    /// Translate `request.text`, returning the concatenated translated text.
    ///
    /// Upstream status and shape problems come back as the matching
    /// `RelayError` variants so the handler can map them to 502s.
    async fn translate(&self, request: &TranslateRequest) -> Result<String, RelayError>;
}
