use async_trait::async_trait;

use crate::domain::{LlmError, LlmGateway, LlmRequest};

/// Gateway used when no provider is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnconfiguredGateway;

#[async_trait]
impl LlmGateway for UnconfiguredGateway {
    async fn complete(&self, _request: &LlmRequest) -> Result<String, LlmError> {
        Err(LlmError::NotConfigured)
    }
}
