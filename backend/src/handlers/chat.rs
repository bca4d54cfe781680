use crate::AppState;
use crate::relay;
use axum::{Json, extract::State};
use shared::models::{ChatRequest, ChatResponse};

/// Always answers 200; failures come back as the fallback reply.
pub async fn chat(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> Json<ChatResponse> {
    match relay::run(&state, &payload).await {
        Ok(reply) => Json(reply),
        Err(e) => {
            if let Some(raw) = e.raw_text() {
                tracing::error!("Failed to relay chat: {}\nUpstream text:\n{}", e, raw);
            } else {
                tracing::error!("Failed to relay chat: {:?}", e);
            }
            Json(relay::fallback(&e))
        }
    }
}
