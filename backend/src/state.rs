use crate::config::RelayConfig;
use crate::error::RelayResult;
use crate::upstream::{GeminiClient, Generator};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// `None` when no API key is configured
    pub generator: Option<Arc<dyn Generator>>,
}

impl AppState {
    pub fn new(generator: Arc<dyn Generator>) -> Self {
        Self {
            generator: Some(generator),
        }
    }

    pub fn unconfigured() -> Self {
        Self { generator: None }
    }

    pub fn from_config(config: &RelayConfig) -> RelayResult<Self> {
        match &config.api_key {
            Some(api_key) => Ok(Self::new(Arc::new(GeminiClient::new(config, api_key)?))),
            None => {
                tracing::warn!("GEMINI_API_KEY is not set; /chat will answer with the fallback");
                Ok(Self::unconfigured())
            }
        }
    }
}
