//! API utilities for submitting form data
//!
//! The forms are served from the same origin as the booking API, so every
//! request goes to `window.location.origin` with same-origin credentials.

use contracts::shared::submission::{Credentials, HttpMethod, SubmitRequest};
use gloo_net::http::{Request, Response};
use thiserror::Error;
use web_sys::RequestCredentials;

/// Shown in the form whenever a submission fails
pub const SAVE_ERROR_MESSAGE: &str = "An error occurred during save.";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Failed to serialize request: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to send request: {0}")]
    Network(String),

    #[error("Request failed with status {0}")]
    Status(u16),
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        ApiError::Network(e.to_string())
    }
}

/// Origin of the current page, e.g. "https://salon.example"
///
/// Empty when there is no window, which leaves request paths relative.
pub fn api_base() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Build a full API URL from a path such as "/customers"
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

fn fetch_credentials(credentials: Credentials) -> RequestCredentials {
    match credentials {
        Credentials::SameOrigin => RequestCredentials::SameOrigin,
    }
}

/// Issue the request once; a non-ok response is an error
pub async fn send(request: &SubmitRequest) -> Result<Response, ApiError> {
    let url = api_url(&request.path);
    log::debug!("{} {}", request.method.as_str(), url);

    let builder = match request.method {
        HttpMethod::Post => Request::post(&url),
    };

    let response = builder
        .credentials(fetch_credentials(request.credentials))
        .header("Content-Type", request.content_type)
        .body(request.body.clone())?
        .send()
        .await?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("https://salon.example", "/customers"), "https://salon.example/customers");
        assert_eq!(join_url("https://salon.example/", "/appointment"), "https://salon.example/appointment");
        assert_eq!(join_url("", "/appointment"), "/appointment");
    }

    #[test]
    fn test_same_origin_credentials() {
        assert_eq!(fetch_credentials(Credentials::SameOrigin), RequestCredentials::SameOrigin);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ApiError::Status(500).to_string(), "Request failed with status 500");
        assert_eq!(
            ApiError::Network("offline".into()).to_string(),
            "Failed to send request: offline"
        );
    }
}
