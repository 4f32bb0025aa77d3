// Translation via the public Google translate web endpoint
//
// One fixed source/target pair per deployment. The service is networked and
// unbounded, so the client carries explicit connect and request timeouts;
// failures surface to the caller and are never retried within a run.

use std::time::Duration;

use serde_json::Value;
use tracing::debug;

use crate::core::errors::{TranslationError, TranslationResult};

/// Translation capability: normalized text to translated text.
pub trait Translator: Send + Sync {
    fn translate(&self, text: &str) -> TranslationResult<String>;
}

const ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the unauthenticated `translate_a/single` endpoint (the same
/// service the original deployment used).
pub struct GoogleTranslator {
    client: reqwest::blocking::Client,
    source_lang: String,
    target_lang: String,
}

impl GoogleTranslator {
    pub fn new(
        source_lang: impl Into<String>,
        target_lang: impl Into<String>,
        timeout: Duration,
    ) -> TranslationResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            source_lang: source_lang.into(),
            target_lang: target_lang.into(),
        })
    }
}

impl Translator for GoogleTranslator {
    fn translate(&self, text: &str) -> TranslationResult<String> {
        let response = self
            .client
            .get(ENDPOINT)
            .query(&[
                ("client", "gtx"),
                ("dt", "t"),
                ("sl", self.source_lang.as_str()),
                ("tl", self.target_lang.as_str()),
                ("q", text),
            ])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            // 429 here means quota exhaustion; both are "unavailable" to the user
            return Err(TranslationError::Unavailable(format!(
                "service returned HTTP {status}"
            )));
        }

        let body: Value = response.json()?;
        parse_translation(&body)
    }
}

/// Response shape: `[[[translated, original, ...], ...], ...]` — one inner
/// entry per detected sentence.
fn parse_translation(body: &Value) -> TranslationResult<String> {
    let sentences = body
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| TranslationError::InvalidResponse("missing sentence array".into()))?;

    let mut translated = String::new();
    for sentence in sentences {
        if let Some(part) = sentence.get(0).and_then(Value::as_str) {
            translated.push_str(part);
        }
    }

    if translated.is_empty() {
        return Err(TranslationError::InvalidResponse(
            "no translated text in response".into(),
        ));
    }

    debug!("Translated to {} chars", translated.chars().count());
    Ok(translated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_single_sentence_response() {
        let body = json!([[["Hello", "こんにちは", null, null]], null, "ja"]);
        assert_eq!(parse_translation(&body).unwrap(), "Hello");
    }

    #[test]
    fn concatenates_multi_sentence_response() {
        let body = json!([
            [
                ["It is sunny today. ", "今日は晴れ。", null],
                ["Let's go out.", "出かけよう。", null]
            ],
            null,
            "ja"
        ]);
        assert_eq!(
            parse_translation(&body).unwrap(),
            "It is sunny today. Let's go out."
        );
    }

    #[test]
    fn malformed_response_is_invalid() {
        assert!(matches!(
            parse_translation(&json!({"error": "nope"})),
            Err(TranslationError::InvalidResponse(_))
        ));
        assert!(matches!(
            parse_translation(&json!([[], null])),
            Err(TranslationError::InvalidResponse(_))
        ));
    }
}
