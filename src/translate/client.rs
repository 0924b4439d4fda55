use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info};

use crate::config::UpstreamConfig;
use crate::error::RelayError;
use super::interface::{TranslateInterface, TranslateRequest};

/// Client for the public `translate_a/single` endpoint.
#[derive(Debug, Clone)]
pub struct GoogleTranslateClient {
    client: Client,
    base_url: String,
    client_id: String,
}

impl GoogleTranslateClient {
    pub fn new(config: &UpstreamConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            client_id: config.client.clone(),
        })
    }
}

#[async_trait]
impl TranslateInterface for GoogleTranslateClient {
    async fn translate(&self, request: &TranslateRequest) -> Result<String, RelayError> {
        let direction = request.direction;
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("client", self.client_id.as_str()),
                ("sl", direction.from.code()),
                ("tl", direction.to.code()),
                ("dt", "t"),
                ("q", request.text.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        info!("Upstream status: {}", status.as_u16());
        if status.as_u16() >= 400 {
            return Err(RelayError::UpstreamStatus(status.as_u16()));
        }

        let body = response.text().await?;
        debug!("Upstream body (truncated): {}", truncate_chars(&body, 200));
        parse_upstream_body(&body)
    }
}

/// Extract the translation from an upstream body.
///
/// Accepts either `[[["chunk", "orig", ...], ...], ...]`, whose chunk heads
/// are concatenated in order, or a bare string. Bodies that are not JSON at
/// all are taken verbatim as text.
pub fn parse_upstream_body(body: &str) -> Result<String, RelayError> {
    let data: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(_) => return Ok(body.to_string()),
    };

    match data {
        Value::Array(items) => match items.first() {
            Some(Value::Array(chunks)) => Ok(chunks
                .iter()
                .map(|chunk| match chunk {
                    Value::Array(parts) => parts.first().and_then(Value::as_str).unwrap_or(""),
                    _ => "",
                })
                .collect()),
            _ => Err(RelayError::UnexpectedUpstream),
        },
        Value::String(text) => Ok(text),
        _ => Err(RelayError::UnexpectedUpstream),
    }
}

fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concatenates_chunks_in_order() {
        let body = r#"[[["Hello ","こんにちは",null,null,10],["world","世界",null,null,3]],null,"ja"]"#;
        assert_eq!(parse_upstream_body(body).unwrap(), "Hello world");
    }

    #[test]
    fn non_array_chunks_contribute_nothing() {
        let body = r#"[[["a","x"],null,"stray",["b","y"],[42]]]"#;
        assert_eq!(parse_upstream_body(body).unwrap(), "ab");
    }

    #[test]
    fn bare_json_string_is_verbatim() {
        assert_eq!(parse_upstream_body(r#""ciao""#).unwrap(), "ciao");
    }

    #[test]
    fn non_json_text_is_verbatim() {
        assert_eq!(parse_upstream_body("plain text reply").unwrap(), "plain text reply");
        assert_eq!(parse_upstream_body("").unwrap(), "");
    }

    #[test]
    fn other_shapes_are_rejected() {
        for body in [r#"{"sentences":[]}"#, "42", "null", "[]", r#"["x"]"#, "true"] {
            assert!(
                matches!(parse_upstream_body(body), Err(RelayError::UnexpectedUpstream)),
                "accepted {body}"
            );
        }
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        assert_eq!(truncate_chars("こんにちは", 2), "こん");
        assert_eq!(truncate_chars("abc", 10), "abc");
    }
}
