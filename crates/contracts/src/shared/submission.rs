use serde::Serialize;

/// Endpoint that accepts new appointments
pub const APPOINTMENT_ENDPOINT: &str = "/appointment";

/// Endpoint that accepts new customers
pub const CUSTOMERS_ENDPOINT: &str = "/customers";

pub const JSON_CONTENT_TYPE: &str = "application/json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Post => "POST",
        }
    }
}

/// Mirrors the fetch `credentials` option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Credentials {
    SameOrigin,
}

/// Description of a single form submission request.
///
/// The frontend turns this into a real fetch call; keeping it as plain data
/// lets the request shape be checked without a browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitRequest {
    pub method: HttpMethod,
    pub path: String,
    pub credentials: Credentials,
    pub content_type: &'static str,
    pub body: String,
}

impl SubmitRequest {
    /// Build a same-origin JSON POST carrying the whole `payload`
    pub fn post_json<T: Serialize>(path: impl Into<String>, payload: &T) -> serde_json::Result<Self> {
        Ok(Self {
            method: HttpMethod::Post,
            path: path.into(),
            credentials: Credentials::SameOrigin,
            content_type: JSON_CONTENT_TYPE,
            body: serde_json::to_string(payload)?,
        })
    }
}
