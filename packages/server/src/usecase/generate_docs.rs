//! UseCase: README の生成

use std::{sync::Arc, time::Duration};

use crate::domain::{ChatLine, DOCS_FALLBACK, LlmGateway, LlmRequest};

use super::prompt::{DOCS_SYSTEM_PROMPT, docs_prompt};

const DOCS_TEMPERATURE: f32 = 0.4;

pub struct GenerateDocsUseCase {
    gateway: Arc<dyn LlmGateway>,
    timeout: Duration,
}

impl GenerateDocsUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>, timeout: Duration) -> Self {
        Self { gateway, timeout }
    }

    /// Markdown README for the session. Never fails: any problem, or an
    /// empty answer, yields [`DOCS_FALLBACK`].
    pub async fn execute(
        &self,
        project_name: String,
        messages: Vec<ChatLine>,
        code: String,
    ) -> String {
        let request = LlmRequest {
            system_prompt: DOCS_SYSTEM_PROMPT.to_string(),
            user_prompt: docs_prompt(&project_name, &messages, &code),
            temperature: DOCS_TEMPERATURE,
            expect_json: false,
        };

        match tokio::time::timeout(self.timeout, self.gateway.complete(&request)).await {
            Ok(Ok(markdown)) if !markdown.trim().is_empty() => markdown,
            Ok(Ok(_)) => {
                tracing::warn!("[docs] empty response -> using fallback");
                DOCS_FALLBACK.to_string()
            }
            Ok(Err(e)) => {
                tracing::warn!("[docs] {} -> using fallback", e);
                DOCS_FALLBACK.to_string()
            }
            Err(_) => {
                tracing::warn!("[docs] timed out after {:?} -> using fallback", self.timeout);
                DOCS_FALLBACK.to_string()
            }
        }
    }
}
