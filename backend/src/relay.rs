use crate::AppState;
use crate::error::{RelayError, RelayResult};
use crate::extract::parse_reply;
use crate::prompt::compose_prompt;
use shared::models::{ChatRequest, ChatResponse};

pub const FALLBACK_MESSAGE: &str = "エラーが発生しました";
pub const MISSING_KEY_MESSAGE: &str = "APIキーが設定されていません";

/// Run one chat request through the whole pipeline.
pub async fn run(state: &AppState, request: &ChatRequest) -> RelayResult<ChatResponse> {
    let generator = state.generator.as_ref().ok_or(RelayError::MissingApiKey)?;
    let prompt = compose_prompt(&request.base_prompt, &request.text);
    let raw = generator.generate(&prompt).await?;
    let reply = parse_reply(&raw)?;
    tracing::debug!("Extracted reply: {:?}", reply);
    Ok(reply)
}

/// The reply sent in place of a failed pipeline run.
pub fn fallback(error: &RelayError) -> ChatResponse {
    match error {
        RelayError::MissingApiKey => ChatResponse::neutral(MISSING_KEY_MESSAGE),
        _ => ChatResponse::neutral(FALLBACK_MESSAGE),
    }
}
