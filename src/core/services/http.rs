use gloo_net::http::Request;
use serde::Deserialize;

use crate::config::BoardConfig;
use crate::error::{ApiError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

/// The three backend routes the board talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    Activities,
    Signup { activity: &'a str, email: &'a str },
    Unregister { activity: &'a str, email: &'a str },
}

impl<'a> Endpoint<'a> {
    pub fn method(&self) -> Method {
        match self {
            Endpoint::Activities => Method::Get,
            Endpoint::Signup { .. } => Method::Post,
            Endpoint::Unregister { .. } => Method::Delete,
        }
    }

    /// Path and query with every caller-supplied piece run through `encode`.
    pub fn path_with(&self, encode: impl Fn(&str) -> String) -> String {
        match *self {
            Endpoint::Activities => "/activities".to_string(),
            Endpoint::Signup { activity, email } => {
                format!("/activities/{}/signup?email={}", encode(activity), encode(email))
            }
            Endpoint::Unregister { activity, email } => {
                format!("/activities/{}/unregister?email={}", encode(activity), encode(email))
            }
        }
    }

    pub fn url(&self, api_base: &str) -> String {
        format!("{}{}", api_base, self.path_with(encode_component))
    }
}

// encodeURIComponent semantics, straight from the browser
fn encode_component(raw: &str) -> String {
    js_sys::encode_uri_component(raw).into()
}

/// Status and body of a completed request, before any interpretation.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub ok: bool,
    pub body: String,
}

// Generic request executor; transport failures come back as ApiError::Transport
pub async fn execute_request(config: &BoardConfig, endpoint: Endpoint<'_>) -> Result<RawResponse> {
    let url = endpoint.url(&config.api_base);
    let builder = match endpoint.method() {
        Method::Get => Request::get(&url),
        Method::Post => Request::post(&url),
        Method::Delete => Request::delete(&url),
    };

    let response = builder.header("Accept", "application/json").send().await?;
    let status = response.status();
    let ok = response.ok();
    let body = response.text().await?;

    Ok(RawResponse { status, ok, body })
}

/// Shown when a 2xx mutation response carries no `message`.
pub const GENERIC_SUCCESS: &str = "Request completed successfully";

#[derive(Deserialize)]
struct MessageBody {
    #[serde(default)]
    message: Option<serde_json::Value>,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

/// Turn a non-2xx response into an error, passing 2xx through.
///
/// A JSON error body becomes `Server`, with its `detail` only when that is a string.
/// A body that is not JSON at all (a proxy's HTML page, say) is a `Decode` error.
pub fn check_status(raw: RawResponse) -> Result<RawResponse> {
    if raw.ok {
        return Ok(raw);
    }
    match serde_json::from_str::<ErrorBody>(&raw.body) {
        Ok(body) => Err(ApiError::Server {
            status: raw.status,
            detail: body.detail.and_then(|d| d.as_str().map(|s| s.to_string())),
        }),
        Err(e) => Err(ApiError::Decode(format!("{} response: {}", raw.status, e))),
    }
}

/// `{message}` on success, `{detail}` on failure. Any 2xx counts as applied.
pub fn interpret_mutation(raw: RawResponse) -> Result<String> {
    let raw = check_status(raw)?;
    let message = serde_json::from_str::<MessageBody>(&raw.body)
        .ok()
        .and_then(|b| b.message)
        .and_then(|m| m.as_str().map(|s| s.to_string()));
    Ok(message.unwrap_or_else(|| GENERIC_SUCCESS.to_string()))
}
