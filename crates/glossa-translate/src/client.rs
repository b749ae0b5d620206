use std::time::Duration;

use glossa_config::translator::TranslatorConfig;
use serde_json::{Value, json};

use crate::response::{TranslationData, parse_translate_payload};
use crate::{LanguageCode, TranslateError, Translator};

/// RPC method the web translation engine exposes for full word data.
const RPC_ID: &str = "MkEWBc";

#[derive(Clone)]
pub struct GoogleTranslateClient {
    client: reqwest::Client,
    base_url: String,
    source_lang: String,
    timeout: Duration,
}

impl GoogleTranslateClient {
    pub fn new(config: &TranslatorConfig, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.clone(),
            source_lang: config.source_lang.clone(),
            timeout,
        }
    }

    /// The RPC body is JSON twice over: the request arguments are serialized
    /// on their own and embedded as a string inside the envelope.
    fn rpc_body(&self, word: &str, to: &str) -> Result<String, serde_json::Error> {
        let request = serde_json::to_string(&json!([[word, self.source_lang, to, true], [null]]))?;
        serde_json::to_string(&json!([[[RPC_ID, request, null, "generic"]]]))
    }
}

#[async_trait::async_trait]
impl Translator for GoogleTranslateClient {
    async fn lookup(
        &self,
        word: &str,
        to: LanguageCode,
    ) -> Result<Option<TranslationData>, TranslateError> {
        let url = format!(
            "{}/_/TranslateWebserverUi/data/batchexecute?rpcids={}",
            self.base_url, RPC_ID
        );
        let body = self.rpc_body(word, &to)?;

        let response = self
            .client
            .post(&url)
            .timeout(self.timeout)
            .form(&[("f.req", body.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(TranslateError::ApiError(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let text = response.text().await?;
        let payload = decode_envelope(&text)?;
        let translated = translated_text(&payload);

        tracing::debug!("translated {word:?} to {to:?}: {translated:?}");

        Ok(parse_translate_payload(&payload, &translated))
    }
}

/// The engine prefixes its body with an anti-JSON guard line and streams
/// framed JSON arrays; the frame tagged with our RPC id carries the word
/// payload as a JSON string at [0][2].
fn decode_envelope(body: &str) -> Result<Value, TranslateError> {
    for line in body.lines() {
        if !line.contains(RPC_ID) {
            continue;
        }
        let Ok(frame) = serde_json::from_str::<Value>(line) else {
            continue;
        };
        let Some(inner) = frame.get(0).and_then(|f| f.get(2)).and_then(Value::as_str) else {
            continue;
        };
        return Ok(serde_json::from_str(inner)?);
    }

    Err(TranslateError::ApiError(
        "no data frame in engine response".to_string(),
    ))
}

/// Whole-response translated text: sentence segments sit at [1][0][0][5],
/// each keeping its text at position 0.
fn translated_text(payload: &Value) -> String {
    let segments = payload
        .get(1)
        .and_then(|v| v.get(0))
        .and_then(|v| v.get(0))
        .and_then(|v| v.get(5))
        .and_then(Value::as_array);

    match segments {
        Some(parts) => parts
            .iter()
            .filter_map(|part| part.get(0).and_then(Value::as_str))
            .collect::<Vec<_>>()
            .join(" "),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_frame_is_found_and_unwrapped() {
        let inner = json!([["rɪˈkərʒən"], null, null, null]).to_string();
        let frame = json!([["wrb.fr", RPC_ID, inner, null, null, null, "generic"]]).to_string();
        let body = format!(")]}}'\n\n1234\n{frame}\n25\n[[\"di\",17]]\n");

        let payload = decode_envelope(&body).expect("envelope should decode");
        assert_eq!(json!("rɪˈkərʒən"), payload[0][0]);
    }

    #[test]
    fn envelope_without_a_data_frame_is_an_error() {
        assert!(decode_envelope(")]}'\n\n12\n[[\"di\",17]]\n").is_err());
        assert!(decode_envelope("").is_err());
    }

    #[test]
    fn translated_segments_are_joined() {
        let payload = json!([
            null,
            [[[null, null, null, null, null, [["Рекурсия", null], ["опять", null]]]]]
        ]);
        assert_eq!("Рекурсия опять", translated_text(&payload));

        assert_eq!("", translated_text(&json!([null, null])));
    }
}
