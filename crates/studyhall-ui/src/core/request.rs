//! Request options and failure taxonomy for the portal HTTP helper.
//!
//! # Design
//! - Defaults are JSON + the AJAX marker header; callers override per header.
//! - Header names compare case-insensitively, values are kept as given.
//! - Application-level failures (`success: false`) are not errors here.

use serde::Serialize;
use thiserror::Error;

/// Notification raised by the helper on any transport or status failure.
pub const REQUEST_FAILED_MESSAGE: &str = "Request failed. Please try again.";

const CONTENT_TYPE: &str = "Content-Type";
const REQUESTED_WITH: &str = "X-Requested-With";

/// HTTP verbs used by the portal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Method {
    /// GET request.
    #[default]
    Get,
    /// POST request.
    Post,
}

impl Method {
    /// Upper-case method token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// Method, headers and body for one request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestOptions {
    /// HTTP method.
    pub method: Method,
    /// Ordered header list.
    pub headers: Vec<(String, String)>,
    /// Serialized JSON body, when any.
    pub body: Option<String>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::Get,
            headers: vec![
                (CONTENT_TYPE.to_string(), "application/json".to_string()),
                (REQUESTED_WITH.to_string(), "XMLHttpRequest".to_string()),
            ],
            body: None,
        }
    }
}

/// Caller-side overrides layered over [`RequestOptions::default`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestOverrides {
    /// Method override.
    pub method: Option<Method>,
    /// Headers replacing defaults of the same name or adding new ones.
    pub headers: Vec<(String, String)>,
    /// Body to send.
    pub body: Option<String>,
}

impl RequestOverrides {
    /// Plain GET with default headers.
    #[must_use]
    pub fn get() -> Self {
        Self {
            method: Some(Method::Get),
            ..Self::default()
        }
    }

    /// POST without a body.
    #[must_use]
    pub fn post() -> Self {
        Self {
            method: Some(Method::Post),
            ..Self::default()
        }
    }

    /// POST carrying a JSON body.
    ///
    /// # Errors
    /// Returns [`ApiError::Encode`] when the payload cannot be serialized.
    pub fn post_json<T: Serialize>(payload: &T) -> Result<Self, ApiError> {
        let body =
            serde_json::to_string(payload).map_err(|err| ApiError::Encode(err.to_string()))?;
        Ok(Self {
            method: Some(Method::Post),
            headers: vec![(CONTENT_TYPE.to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    /// Add or replace a header on the override set.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        set_header(&mut self.headers, name.into(), value.into());
        self
    }
}

impl RequestOptions {
    /// Layer caller overrides on top of the defaults.
    #[must_use]
    pub fn merged_over_defaults(overrides: RequestOverrides) -> Self {
        let mut merged = Self::default();
        if let Some(method) = overrides.method {
            merged.method = method;
        }
        for (name, value) in overrides.headers {
            set_header(&mut merged.headers, name, value);
        }
        if overrides.body.is_some() {
            merged.body = overrides.body;
        }
        merged
    }

    /// Look up a header value by case-insensitive name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

fn set_header(headers: &mut Vec<(String, String)>, name: String, value: String) {
    if let Some(slot) = headers
        .iter_mut()
        .find(|(key, _)| key.eq_ignore_ascii_case(&name))
    {
        slot.1 = value;
    } else {
        headers.push((name, value));
    }
}

/// Failures surfaced by the HTTP helper.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Transport(String),
    /// The server answered with a non-2xx status.
    #[error("HTTP error! status: {status}")]
    Status {
        /// Response status code.
        status: u16,
    },
    /// The response body was not the expected JSON.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// The request body could not be serialized.
    #[error("invalid request body: {0}")]
    Encode(String),
}

impl ApiError {
    /// Whether the failure should also be written to the console.
    #[must_use]
    pub const fn is_transport_or_status(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Status { .. })
    }
}

/// Classify a response status.
///
/// # Errors
/// Returns [`ApiError::Status`] for anything outside 200-299.
pub const fn check_status(status: u16) -> Result<(), ApiError> {
    if status >= 200 && status < 300 {
        Ok(())
    } else {
        Err(ApiError::Status { status })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_json_get_with_ajax_marker() {
        let options = RequestOptions::default();
        assert_eq!(options.method, Method::Get);
        assert_eq!(options.header("content-type"), Some("application/json"));
        assert_eq!(options.header("X-Requested-With"), Some("XMLHttpRequest"));
        assert!(options.body.is_none());
    }

    #[test]
    fn caller_headers_override_defaults_and_keep_the_rest() {
        let overrides = RequestOverrides::post()
            .header("content-type", "text/plain")
            .header("X-Trace", "abc");
        let merged = RequestOptions::merged_over_defaults(overrides);

        assert_eq!(merged.method, Method::Post);
        assert_eq!(merged.header("Content-Type"), Some("text/plain"));
        assert_eq!(merged.header("X-Requested-With"), Some("XMLHttpRequest"));
        assert_eq!(merged.header("x-trace"), Some("abc"));
        assert_eq!(merged.headers.len(), 3);
    }

    #[test]
    fn post_json_serializes_body() {
        #[derive(Serialize)]
        struct Body {
            material_name: &'static str,
        }
        let overrides = RequestOverrides::post_json(&Body {
            material_name: "Algebra Notes",
        })
        .expect("encodable body");
        let merged = RequestOptions::merged_over_defaults(overrides);
        assert_eq!(
            merged.body.as_deref(),
            Some(r#"{"material_name":"Algebra Notes"}"#)
        );
        assert_eq!(merged.header("X-Requested-With"), Some("XMLHttpRequest"));
    }

    #[test]
    fn status_errors_embed_the_code() {
        assert!(check_status(200).is_ok());
        assert!(check_status(204).is_ok());
        let err = check_status(404).expect_err("404 is a failure");
        assert_eq!(err.to_string(), "HTTP error! status: 404");
        assert!(err.is_transport_or_status());
        assert!(!ApiError::Decode("x".into()).is_transport_or_status());
    }
}
