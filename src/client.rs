//! Shared HTTP transport for the API access layer.
//!
//! All endpoint wrappers build a [`RequestDescriptor`] and hand it to
//! [`ApiClient::send`], which owns URL construction, timeouts, and
//! auth-header injection from the session store. The transport is a pure
//! pass-through around request and response bodies apart from JSON
//! encoding/decoding.
//!
//! Content-type rules: JSON bodies declare `application/json`; multipart
//! bodies set nothing so the boundary header is generated by the HTTP
//! library. Call sites must never set content-type themselves.

use crate::{
    APP_USER_AGENT, config::ClientConfig, errors::ApiError, features::auth::state::SessionStore,
};
use reqwest::multipart::Form;
use secrecy::ExposeSecret;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use std::fmt;
use std::time::Duration;
use tracing::{Instrument, debug, info_span};
use url::Url;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Maximum number of error body characters surfaced to callers.
const MAX_ERROR_CHARS: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// Request body prior to transmission.
pub enum Body {
    Empty,
    Json(Value),
    Multipart(Form),
}

/// The logical bundle of method, path, headers, and body for one call.
/// Constructed per call and consumed by [`ApiClient::send`].
pub struct RequestDescriptor {
    pub method: Method,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Body,
}

impl RequestDescriptor {
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            headers: Vec::new(),
            body: Body::Empty,
        }
    }

    /// A POST with no body, used by action endpoints such as like toggles.
    #[must_use]
    pub fn post(path: impl Into<String>) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            headers: Vec::new(),
            body: Body::Empty,
        }
    }

    /// A POST carrying a JSON payload.
    /// # Errors
    /// Returns an error if the payload cannot be serialized.
    pub fn post_json<B: Serialize>(path: impl Into<String>, body: &B) -> Result<Self, ApiError> {
        let value = serde_json::to_value(body)
            .map_err(|err| ApiError::Serialization(format!("Failed to encode request: {err}")))?;
        Ok(Self {
            method: Method::Post,
            path: path.into(),
            headers: Vec::new(),
            body: Body::Json(value),
        })
    }

    /// A POST carrying a multipart form. No content-type header is set
    /// here or in `send`; the boundary comes from the HTTP library.
    #[must_use]
    pub fn post_multipart(path: impl Into<String>, form: Form) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            headers: Vec::new(),
            body: Body::Multipart(form),
        }
    }

    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

impl fmt::Debug for RequestDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let body = match self.body {
            Body::Empty => "Empty",
            Body::Json(_) => "Json",
            Body::Multipart(_) => "Multipart",
        };
        f.debug_struct("RequestDescriptor")
            .field("method", &self.method)
            .field("path", &self.path)
            .field("headers", &self.headers)
            .field("body", &body)
            .finish()
    }
}

/// Build a request URL from a base URL and an absolute path.
/// # Errors
/// Returns an error if `base` cannot be parsed, has no host, uses an
/// unsupported scheme, or `path` is not absolute.
pub fn endpoint_url(base: &str, path: &str) -> Result<String, ApiError> {
    if !path.starts_with('/') {
        return Err(ApiError::Config(format!("path must start with /: {path}")));
    }

    let url = Url::parse(base)
        .map_err(|err| ApiError::Config(format!("Error parsing URL: {err}")))?;

    let scheme = url.scheme();

    let host = url
        .host()
        .ok_or_else(|| ApiError::Config("Error parsing URL: no host specified".to_string()))?
        .to_owned();

    let port = match url.port() {
        Some(p) => p,
        None => match scheme {
            "http" => 80,
            "https" => 443,
            _ => {
                return Err(ApiError::Config(format!(
                    "Error parsing URL: unsupported scheme {scheme}"
                )));
            }
        },
    };

    let endpoint_url = format!("{scheme}://{host}:{port}{path}");

    debug!("endpoint URL: {}", endpoint_url);

    Ok(endpoint_url)
}

/// Shared API client: reqwest transport, base URL, and the session store
/// consulted for auth-header injection.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: SessionStore,
}

impl ApiClient {
    /// Build a client for the configured base URL.
    /// # Errors
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: &ClientConfig, session: SessionStore) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .user_agent(APP_USER_AGENT)
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| ApiError::Config(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self {
            http,
            base_url: config.api_base_url.clone(),
            session,
        })
    }

    #[must_use]
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Execute a request. When the session store holds a token the
    /// `Authorization: Bearer` header is attached here, never by callers.
    /// # Errors
    /// Returns an error if the request cannot be sent.
    pub async fn send(&self, descriptor: RequestDescriptor) -> Result<reqwest::Response, ApiError> {
        let url = endpoint_url(&self.base_url, &descriptor.path)?;

        let method = match descriptor.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
        };

        let mut request = self
            .http
            .request(method, &url)
            .header("Accept", "application/json");

        if let Some(token) = self.session.token() {
            request = request.bearer_auth(token.expose_secret());
        }

        for (name, value) in &descriptor.headers {
            request = request.header(name, value);
        }

        request = match descriptor.body {
            Body::Empty => request,
            Body::Json(value) => request
                .header("Content-Type", "application/json")
                .json(&value),
            Body::Multipart(form) => request.multipart(form),
        };

        let span = info_span!(
            "api.request",
            http.method = descriptor.method.as_str(),
            url = %url
        );
        request
            .send()
            .instrument(span)
            .await
            .map_err(map_transport_error)
    }

    /// Execute a request and parse the JSON response body.
    /// # Errors
    /// Returns an error if the request fails, the server returns a
    /// non-success status, or the body is not valid JSON.
    pub async fn send_json<T: DeserializeOwned>(
        &self,
        descriptor: RequestDescriptor,
    ) -> Result<T, ApiError> {
        let response = self.send(descriptor).await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Http {
                status: status.as_u16(),
                message: http_error_message(&body),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|err| ApiError::Parse(format!("Failed to decode response: {err}")))
    }
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("user_agent", &APP_USER_AGENT)
            .finish()
    }
}

fn map_transport_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        ApiError::Timeout("Request timed out. Please try again.".to_string())
    } else {
        ApiError::Network(format!("Unable to reach the server: {err}"))
    }
}

/// Extract a human-readable message from an HTTP failure body: a structured
/// `message`/`error` field when the body is JSON, else the trimmed raw body
/// truncated for display. An empty body stays empty; callers own fallbacks.
fn http_error_message(body: &str) -> String {
    if let Ok(json) = serde_json::from_str::<Value>(body) {
        if let Some(message) = json
            .get("message")
            .or_else(|| json.get("error"))
            .and_then(Value::as_str)
        {
            return message.trim().to_string();
        }
    }

    body.trim().chars().take(MAX_ERROR_CHARS).collect()
}
