use serde::{Deserialize, Serialize};

pub const STATUS_OK: &str = "ok";

/// Liveness payload for uptime monitors
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PingResponse {
    pub status: String,
}

impl PingResponse {
    pub fn ok() -> Self {
        Self {
            status: STATUS_OK.to_string(),
        }
    }
}
