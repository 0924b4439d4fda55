use std::sync::Arc;

use crate::config::Config;
use crate::romanize::EngineGate;
use crate::translate::{GoogleTranslateClient, TranslateInterface};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub translator: Arc<dyn TranslateInterface>,
    pub romanizer: EngineGate,
}

impl AppState {
    /// Wires the production upstream client; the romanizer gate starts closed.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let translator = Arc::new(GoogleTranslateClient::new(&config.upstream)?);

        Ok(Self {
            config,
            translator,
            romanizer: EngineGate::new(),
        })
    }

    pub fn with_parts(
        config: Config,
        translator: Arc<dyn TranslateInterface>,
        romanizer: EngineGate,
    ) -> Self {
        Self {
            config,
            translator,
            romanizer,
        }
    }
}
