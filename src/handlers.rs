use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::info;

use crate::error::RelayError;
use crate::romanize::Romanizer;
use crate::state::AppState;
use crate::translate::{
    resolve_direction, romanize_target, InputType, Lang, RomanizeTarget, TranslateRequest,
};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct TranslateParams {
    pub text: Option<String>,
    pub input_type: Option<String>,
}

impl TranslateParams {
    /// First value wins when a key repeats; unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "text" => &mut params.text,
                "inputType" => &mut params.input_type,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslateResponse {
    pub input: String,
    pub from: Lang,
    pub to: Lang,
    pub translated: String,
    pub romanized: Option<String>,
}

pub async fn translate(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<TranslateResponse>, RelayError> {
    let Query(pairs) = query.map_err(|e| RelayError::InvalidQuery(e.body_text()))?;
    relay(&state, TranslateParams::from_pairs(pairs)).await.map(Json)
}

/// Resolve direction, call upstream, romanize when the hint asks for it.
pub async fn relay(state: &AppState, params: TranslateParams) -> Result<TranslateResponse, RelayError> {
    let text = match params.text {
        Some(text) if !text.is_empty() => text,
        _ => return Err(RelayError::MissingText),
    };
    let input_type = InputType::from_param(params.input_type.as_deref());
    let direction = resolve_direction(input_type, &text);
    let target = romanize_target(input_type, direction);

    // Check the gate before spending an upstream call we could not finish
    let engine = match target {
        RomanizeTarget::Nothing => None,
        _ => Some(state.romanizer.engine().await?),
    };

    info!("Incoming: text={:?} from={} to={}", text, direction.from, direction.to);
    let request = TranslateRequest {
        text,
        direction,
    };
    let translated = state.translator.translate(&request).await?;

    let romanized = match (target, engine) {
        (RomanizeTarget::Input, Some(engine)) => Some(romanize(engine, request.text.clone()).await?),
        (RomanizeTarget::Translated, Some(engine)) => Some(romanize(engine, translated.clone()).await?),
        _ => None,
    };

    let payload = TranslateResponse {
        input: request.text,
        from: direction.from,
        to: direction.to,
        translated,
        romanized,
    };
    info!("Outgoing JSON: {:?}", payload);
    Ok(payload)
}

async fn romanize(engine: Arc<dyn Romanizer>, text: String) -> anyhow::Result<String> {
    tokio::task::spawn_blocking(move || engine.romanize(&text)).await?
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhraseTotals {
    pub phrases: usize,
    pub words: usize,
    pub combined: usize,
}

/// Body of the disabled phrase listing; there is no data source behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhrasesResponse {
    pub phrases: Vec<Value>,
    pub words: Vec<Value>,
    pub total: PhraseTotals,
}

impl PhrasesResponse {
    pub fn empty() -> Self {
        let phrases: Vec<Value> = Vec::new();
        let words: Vec<Value> = Vec::new();
        let total = PhraseTotals {
            phrases: phrases.len(),
            words: words.len(),
            combined: phrases.len() + words.len(),
        };
        Self { phrases, words, total }
    }
}

pub async fn phrases() -> Json<PhrasesResponse> {
    Json(PhrasesResponse::empty())
}

pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let romanizer = state.romanizer.state().await;
    Json(json!({
        "status": "ok",
        "romanizer": romanizer.label()
    }))
}
