use std::fmt;

pub const GENERIC_SERVER_ERROR: &str = "An error occurred";

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Non-2xx response; `detail` is the body's `detail` string when present.
    Server { status: u16, detail: Option<String> },
    /// The request never completed.
    Transport(String),
    /// Response body that could not be read as the JSON the endpoint promises.
    Decode(String),
}

impl ApiError {
    /// Text shown to the user. Server failures carry their own detail;
    /// everything else falls back to the operation's fixed message.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Server { detail: Some(detail), .. } => detail.clone(),
            ApiError::Server { detail: None, .. } => GENERIC_SERVER_ERROR.to_string(),
            ApiError::Transport(_) | ApiError::Decode(_) => fallback.to_string(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ApiError::Server { status, detail: Some(detail) } => {
                write!(f, "server responded {}: {}", status, detail)
            }
            ApiError::Server { status, detail: None } => write!(f, "server responded {}", status),
            ApiError::Transport(e) => write!(f, "request failed: {}", e),
            ApiError::Decode(e) => write!(f, "unexpected response body: {}", e),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> ApiError {
        ApiError::Transport(e.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> ApiError {
        ApiError::Decode(e.to_string())
    }
}
