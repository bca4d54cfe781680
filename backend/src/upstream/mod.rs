use crate::error::RelayResult;
use async_trait::async_trait;

pub mod gemini;

pub use gemini::GeminiClient;

/// Something that turns a prompt into raw model text.
#[async_trait]
pub trait Generator: Send + Sync {
    async fn generate(&self, prompt: &str) -> RelayResult<String>;
}
