pub mod config;
pub mod error;
pub mod extract;
mod handlers;
pub mod prompt;
pub mod relay;
mod state;
pub mod upstream;

pub use crate::config::RelayConfig;
pub use crate::error::{RelayError, RelayResult};
pub use crate::state::AppState;

use crate::handlers::{chat, ping};
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn init(router: Router<AppState>, state: AppState) -> Router<()> {
    router
        .route("/ping", get(ping))
        .route("/chat", post(chat))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
