//! LLM gateway implementations.
//!
//! - `gemini`: Google Generative Language API over HTTP
//! - `unconfigured`: used when no API key is set; every call fails fast so the
//!   use cases answer with their fallback

pub mod gemini;
pub mod unconfigured;

use std::sync::Arc;

pub use gemini::GeminiGateway;
pub use unconfigured::UnconfiguredGateway;

use crate::{config::LlmConfig, domain::LlmGateway};

/// Pick the gateway matching the configuration.
pub fn build_gateway(config: &LlmConfig) -> Arc<dyn LlmGateway> {
    let Some(api_key) = config.api_key.as_deref().filter(|key| !key.trim().is_empty()) else {
        tracing::info!("No Gemini API key configured, AI endpoints will serve fallbacks");
        return Arc::new(UnconfiguredGateway);
    };

    match GeminiGateway::new(&config.endpoint, &config.model, api_key, config.timeout) {
        Ok(gateway) => {
            tracing::info!("Gemini gateway enabled (model: {})", config.model);
            Arc::new(gateway)
        }
        Err(e) => {
            tracing::warn!("Failed to build Gemini gateway, serving fallbacks: {}", e);
            Arc::new(UnconfiguredGateway)
        }
    }
}
