//! LLM gateway contract: prompt in, text out, or an error the caller turns
//! into a fallback.

use async_trait::async_trait;
use thiserror::Error;

/// One completion request.
#[derive(Debug, Clone, PartialEq)]
pub struct LlmRequest {
    pub system_prompt: String,
    pub user_prompt: String,
    pub temperature: f32,
    /// Ask the provider to answer with a JSON document
    pub expect_json: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LlmError {
    #[error("no LLM provider is configured")]
    NotConfigured,

    #[error("provider request failed: {0}")]
    Transport(String),

    #[error("provider answered with status {0}")]
    Status(u16),

    #[error("provider response had no text")]
    EmptyResponse,

    #[error("provider response could not be decoded: {0}")]
    InvalidResponse(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LlmGateway: Send + Sync {
    async fn complete(&self, request: &LlmRequest) -> Result<String, LlmError>;
}
