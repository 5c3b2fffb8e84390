//! Gemini `generateContent` client.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{LlmError, LlmGateway, LlmRequest};

// -- Request types -----------------------------------------------------------

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<&'static str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    #[serde(rename = "system_instruction")]
    system_instruction: Content<'a>,
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

// -- Response types ----------------------------------------------------------

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

fn request_body(request: &LlmRequest) -> GenerateContentRequest<'_> {
    GenerateContentRequest {
        system_instruction: Content {
            parts: vec![Part {
                text: &request.system_prompt,
            }],
        },
        contents: vec![Content {
            parts: vec![Part {
                text: &request.user_prompt,
            }],
        }],
        generation_config: GenerationConfig {
            temperature: request.temperature,
            response_mime_type: request.expect_json.then_some("application/json"),
        },
    }
}

/// Text of the first part of the first candidate.
fn first_text(response: GenerateContentResponse) -> Result<String, LlmError> {
    response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().next())
        .and_then(|part| part.text)
        .ok_or(LlmError::EmptyResponse)
}

pub struct GeminiGateway {
    client: reqwest::Client,
    url: String,
    api_key: String,
}

impl GeminiGateway {
    pub fn new(
        endpoint: &str,
        model: &str,
        api_key: &str,
        timeout: Duration,
    ) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LlmError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            url: format!(
                "{}/models/{}:generateContent",
                endpoint.trim_end_matches('/'),
                model
            ),
            api_key: api_key.to_string(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl LlmGateway for GeminiGateway {
    async fn complete(&self, request: &LlmRequest) -> Result<String, LlmError> {
        let response = self
            .client
            .post(&self.url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request_body(request))
            .send()
            .await
            .map_err(|e| LlmError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LlmError::Status(status.as_u16()));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(e.to_string()))?;

        first_text(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(expect_json: bool) -> LlmRequest {
        LlmRequest {
            system_prompt: "be terse".to_string(),
            user_prompt: "review this".to_string(),
            temperature: 0.5,
            expect_json,
        }
    }

    #[test]
    fn test_request_body_shape() {
        // テスト項目: リクエストボディが generateContent の形式になる
        // given (前提条件):
        let request = request(true);

        // when (操作):
        let value = serde_json::to_value(request_body(&request)).unwrap();

        // then (期待する結果):
        assert_eq!(
            value,
            serde_json::json!({
                "system_instruction": {"parts": [{"text": "be terse"}]},
                "contents": [{"parts": [{"text": "review this"}]}],
                "generationConfig": {"temperature": 0.5, "responseMimeType": "application/json"}
            })
        );
    }

    #[test]
    fn test_request_body_omits_mime_type_for_text() {
        // テスト項目: テキスト応答の場合は responseMimeType を送らない
        // given (前提条件):
        let request = request(false);

        // when (操作):
        let value = serde_json::to_value(request_body(&request)).unwrap();

        // then (期待する結果):
        assert!(value["generationConfig"].get("responseMimeType").is_none());
    }

    #[test]
    fn test_first_text_extracts_candidate_text() {
        // テスト項目: 最初の候補の最初のパートのテキストを取り出す
        // given (前提条件):
        let body: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{"content": {"parts": [{"text": "hello"}, {"text": "ignored"}]}}]
        }))
        .unwrap();

        // when (操作):
        let result = first_text(body);

        // then (期待する結果):
        assert_eq!(result, Ok("hello".to_string()));
    }

    #[test]
    fn test_first_text_without_candidates() {
        // テスト項目: 候補がない応答は EmptyResponse になる
        // given (前提条件):
        let body: GenerateContentResponse =
            serde_json::from_value(serde_json::json!({"promptFeedback": {}})).unwrap();

        // when (操作):
        let result = first_text(body);

        // then (期待する結果):
        assert_eq!(result, Err(LlmError::EmptyResponse));
    }

    #[test]
    fn test_url_joins_endpoint_and_model() {
        // テスト項目: エンドポイントとモデル名から URL が組み立てられる
        // given (前提条件):
        let endpoint = "https://example.test/v1beta/";

        // when (操作):
        let gateway =
            GeminiGateway::new(endpoint, "gemini-1.5-flash", "key", Duration::from_secs(5))
                .unwrap();

        // then (期待する結果):
        assert_eq!(
            gateway.url(),
            "https://example.test/v1beta/models/gemini-1.5-flash:generateContent"
        );
    }
}
