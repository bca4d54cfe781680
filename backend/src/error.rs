use thiserror::Error;

pub type RelayResult<T> = Result<T, RelayError>;

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("GEMINI_API_KEY is not set")]
    MissingApiKey,
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
    #[error("Upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Upstream returned {status}: {body}")]
    UpstreamStatus {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("Malformed upstream response: {0}")]
    MalformedResponse(String),
    #[error("No candidates in upstream response")]
    NoCandidates,
    #[error("Empty text from upstream")]
    EmptyText,
    #[error("JSON object not found in upstream text")]
    NoJsonObject { raw: String },
    #[error("Invalid JSON in upstream text: {source}")]
    InvalidJson {
        #[source]
        source: serde_json::Error,
        raw: String,
    },
}

impl RelayError {
    /// Raw model output, when the failure happened while reading it
    pub fn raw_text(&self) -> Option<&str> {
        match self {
            RelayError::NoJsonObject { raw } | RelayError::InvalidJson { raw, .. } => {
                Some(raw.as_str())
            }
            _ => None,
        }
    }
}
