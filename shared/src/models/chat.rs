use super::emotion::Emotion;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ChatRequest {
    pub text: String,
    #[serde(rename = "basePrompt")]
    pub base_prompt: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub message: String,
    pub emotion: Emotion,
}

impl ChatResponse {
    pub fn new(message: impl Into<String>, emotion: Emotion) -> Self {
        Self {
            message: message.into(),
            emotion,
        }
    }

    /// A reply carrying only a message, with every emotion weight at zero
    pub fn neutral(message: impl Into<String>) -> Self {
        Self::new(message, Emotion::default())
    }
}
