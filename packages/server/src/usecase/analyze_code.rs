//! UseCase: AI によるコード解析
//!
//! ## テスト作業記録
//!
//! ### 何をテストしているか
//! - AnalyzeCodeUseCase::execute()
//!
//! ### なぜこのテストが必要か
//! - プロバイダがどのように失敗しても、呼び出し側には常に解析結果が返ることを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：JSON（フェンス付きを含む）の応答
//! - 異常系：未設定、HTTP エラー、JSON として不正な応答、タイムアウト

use std::{sync::Arc, time::Duration};

use crate::domain::{ChatLine, CodeAnalysis, LlmGateway, LlmRequest};

use super::prompt::{ANALYZE_SYSTEM_PROMPT, analyze_prompt, strip_json_fence};

const ANALYZE_TEMPERATURE: f32 = 0.3;

pub struct AnalyzeCodeUseCase {
    gateway: Arc<dyn LlmGateway>,
    timeout: Duration,
}

impl AnalyzeCodeUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>, timeout: Duration) -> Self {
        Self { gateway, timeout }
    }

    /// Ask the provider to review `current_code`. Never fails: any problem
    /// yields [`CodeAnalysis::fallback`].
    pub async fn execute(&self, messages: Vec<ChatLine>, current_code: String) -> CodeAnalysis {
        let request = LlmRequest {
            system_prompt: ANALYZE_SYSTEM_PROMPT.to_string(),
            user_prompt: analyze_prompt(&messages, &current_code),
            temperature: ANALYZE_TEMPERATURE,
            expect_json: true,
        };

        let raw = match tokio::time::timeout(self.timeout, self.gateway.complete(&request)).await {
            Ok(Ok(raw)) => raw,
            Ok(Err(e)) => {
                tracing::warn!("[analyze] {} -> using fallback", e);
                return CodeAnalysis::fallback();
            }
            Err(_) => {
                tracing::warn!("[analyze] timed out after {:?} -> using fallback", self.timeout);
                return CodeAnalysis::fallback();
            }
        };

        serde_json::from_str(strip_json_fence(&raw)).unwrap_or_else(|e| {
            tracing::warn!("[analyze] unparsable response ({}) -> using fallback", e);
            CodeAnalysis::fallback()
        })
    }
}
