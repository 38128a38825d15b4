use super::traits::{Translation, Translator};
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

pub const DEFAULT_TRANSLATE_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

/// Longest input the public endpoint accepts in one request.
const MAX_INPUT_CHARS: usize = 5000;

/// Client for Google's public translate endpoint with automatic source
/// language detection.
pub struct GoogleTranslator {
    client: reqwest::Client,
    endpoint: String,
    target: String,
}

impl GoogleTranslator {
    pub fn new(endpoint: &str, target: &str, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
            target: target.to_string(),
        })
    }

    async fn request(&self, text: &str) -> anyhow::Result<String> {
        if text.chars().count() > MAX_INPUT_CHARS {
            anyhow::bail!("input longer than {} characters", MAX_INPUT_CHARS);
        }

        let url = reqwest::Url::parse_with_params(
            &self.endpoint,
            &[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", self.target.as_str()),
                ("dt", "t"),
                ("q", text),
            ],
        )?;

        let body: Value = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        parse_translation(&body)
    }
}

/// Extracts the translated text from the endpoint's nested array response:
/// `[[["translated", "source", ...], ...], ...]`.
pub fn parse_translation(body: &Value) -> anyhow::Result<String> {
    let segments = body
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| anyhow::anyhow!("unexpected translation response shape"))?;

    let translated: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();

    if translated.trim().is_empty() {
        anyhow::bail!("translation response contained no text");
    }
    Ok(translated)
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(&self, text: &str) -> Translation {
        if text.trim().is_empty() {
            return Translation::Skipped(text.to_string());
        }

        match self.request(text).await {
            Ok(translated) => {
                tracing::debug!(target_lang = %self.target, "Translated comment");
                Translation::Translated(translated)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Translation unavailable, using original text");
                Translation::Unavailable {
                    original: text.to_string(),
                    reason: e.to_string(),
                }
            }
        }
    }
}
