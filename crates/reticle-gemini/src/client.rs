use async_trait::async_trait;
use reticle_analyzer::{AnalyzeError, CrosshairAnalyzer, ProviderMetadata};
use reticle_types::CrosshairConfig;
use serde_json::{Value, json};

use crate::schema;

#[derive(Clone)]
pub struct GeminiAnalyzer {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
    model: String,
}

impl GeminiAnalyzer {
    pub fn new(api_key: String, api_url: String, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            api_url,
            model,
        }
    }
}

#[async_trait]
impl CrosshairAnalyzer for GeminiAnalyzer {
    async fn analyze(&self, image: &str) -> Result<CrosshairConfig, AnalyzeError> {
        if self.api_key.is_empty() {
            return Err(AnalyzeError::MissingApiKey);
        }

        let inline = InlineImage::from_data_url(image);

        let body = json!({
            "contents": [{
                "parts": [
                    { "inlineData": { "mimeType": inline.mime_type, "data": inline.data } },
                    { "text": schema::ANALYSIS_PROMPT }
                ]
            }],
            "generationConfig": schema::generation_config(),
            "safetySettings": schema::safety_settings()
        });

        let url = format!("{}/{}:generateContent", self.api_url, self.model);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        if response.status() == 429 {
            return Err(AnalyzeError::RateLimitExceeded);
        }

        if response.status() == 401 || response.status() == 403 {
            return Err(AnalyzeError::Authentication);
        }

        if !response.status().is_success() {
            return Err(AnalyzeError::Api(format!("HTTP {}", response.status())));
        }

        let json: Value = response
            .json()
            .await
            .map_err(|e| AnalyzeError::Parse(format!("invalid response body: {e}")))?;

        let text = extract_text(&json).ok_or(AnalyzeError::EmptyResponse)?;

        parse_config_text(text)
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Gemini".to_string(),
            requires_api_key: true,
        }
    }
}

/// Inline image part of a generateContent request.
struct InlineImage {
    mime_type: String,
    data: String,
}

impl InlineImage {
    /// Split a data-URL payload into MIME type and raw base64 body.
    /// Payloads without a recognizable `data:image/...;base64,` prefix
    /// fall back to `image/png` with the body passed through as-is.
    fn from_data_url(payload: &str) -> Self {
        if let Some(rest) = payload.strip_prefix("data:") {
            if let Some((mime, data)) = rest.split_once(";base64,") {
                if mime.starts_with("image/") {
                    return Self {
                        mime_type: mime.to_string(),
                        data: data.to_string(),
                    };
                }
            }
        }

        Self {
            mime_type: "image/png".to_string(),
            data: payload.to_string(),
        }
    }
}

/// First candidate text, if the model returned one.
fn extract_text(response: &Value) -> Option<&str> {
    response["candidates"]
        .get(0)?
        .get("content")?
        .get("parts")?
        .get(0)?
        .get("text")?
        .as_str()
}

/// Parse the model's textual JSON answer, tolerating a markdown fence.
fn parse_config_text(text: &str) -> Result<CrosshairConfig, AnalyzeError> {
    let text = strip_code_fence(text.trim());
    serde_json::from_str(text).map_err(|e| AnalyzeError::Parse(e.to_string()))
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = rest.strip_prefix('\n').unwrap_or(rest);
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    rest.trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG_JSON: &str = r#"{
        "cl_crosshairsize": 3,
        "cl_crosshairthickness": 1,
        "cl_crosshairgap": -2,
        "cl_crosshair_drawoutline": true,
        "cl_crosshair_outlinethickness": 1,
        "cl_crosshairdot": true,
        "cl_crosshaircolor_r": 0,
        "cl_crosshaircolor_g": 255,
        "cl_crosshaircolor_b": 0,
        "cl_crosshairalpha": 255,
        "cl_crosshairstyle": 4,
        "cl_crosshair_t": false
    }"#;

    #[test]
    fn splits_data_url_into_mime_and_body() {
        let inline = InlineImage::from_data_url("data:image/jpeg;base64,Zm9vYmFy");
        assert_eq!(inline.mime_type, "image/jpeg");
        assert_eq!(inline.data, "Zm9vYmFy");
    }

    #[test]
    fn bare_base64_falls_back_to_png() {
        let inline = InlineImage::from_data_url("Zm9vYmFy");
        assert_eq!(inline.mime_type, "image/png");
        assert_eq!(inline.data, "Zm9vYmFy");
    }

    #[test]
    fn non_image_data_url_falls_back_to_png() {
        let inline = InlineImage::from_data_url("data:text/plain;base64,Zm9vYmFy");
        assert_eq!(inline.mime_type, "image/png");
        assert_eq!(inline.data, "data:text/plain;base64,Zm9vYmFy");
    }

    #[test]
    fn extracts_first_candidate_text() {
        let response = json!({
            "candidates": [{
                "content": { "parts": [{ "text": "{}" }] }
            }]
        });
        assert_eq!(extract_text(&response), Some("{}"));
    }

    #[test]
    fn empty_candidates_yield_no_text() {
        assert_eq!(extract_text(&json!({ "candidates": [] })), None);
        assert_eq!(extract_text(&json!({})), None);
    }

    #[test]
    fn parses_plain_json_answer() {
        let config = parse_config_text(CONFIG_JSON).unwrap();
        assert_eq!(config.size, 3.0);
        assert_eq!(config.color_g, 255);
    }

    #[test]
    fn parses_fenced_json_answer() {
        let fenced = format!("```json\n{CONFIG_JSON}\n```");
        let config = parse_config_text(&fenced).unwrap();
        assert_eq!(config.gap, -2.0);

        let bare_fence = format!("```\n{CONFIG_JSON}\n```");
        let config = parse_config_text(&bare_fence).unwrap();
        assert!(config.dot);
    }

    #[test]
    fn malformed_answer_is_a_parse_error() {
        match parse_config_text("not json at all") {
            Err(AnalyzeError::Parse(_)) => {}
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_api_key_fails_before_any_network_call() {
        // Port 9 (discard) would hang or refuse; the guard returns first.
        let analyzer = GeminiAnalyzer::new(
            String::new(),
            "http://127.0.0.1:9".to_string(),
            "gemini-3-flash-preview".to_string(),
        );

        match analyzer.analyze("data:image/png;base64,AAAA").await {
            Err(AnalyzeError::MissingApiKey) => {}
            other => panic!("expected MissingApiKey, got {other:?}"),
        }
    }
}
