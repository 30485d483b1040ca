//! HTTP transport seam.
//!
//! `ApiClient` assembles fully-formed [`ApiRequest`] values and hands them to a
//! [`Transport`]. In the browser that is `gloo-net` over `fetch`; tests swap in
//! an in-memory recorder.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use thiserror::Error;

/// HTTP verbs the client can issue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

/// A request ready to go on the wire.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    /// Serialized JSON body, if any.
    pub body: Option<String>,
    /// Send cookies cross-origin (`credentials: "include"`).
    pub include_credentials: bool,
}

impl ApiRequest {
    /// Value of the first header named `name` (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Raw response: status plus undecoded body text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Failure before any HTTP status was received.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TransportError {
    /// The request could not be sent or the connection failed.
    #[error("network error: {0}")]
    Network(String),

    /// No browser networking in this environment (SSR render pass).
    #[error("not available on server")]
    Unavailable,
}

/// Sends an [`ApiRequest`] and returns whatever status came back.
///
/// Implementations must not treat non-2xx statuses as errors; status
/// classification belongs to `ApiClient`.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}

/// `fetch`-backed transport used by the hydrated app.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;

            let mut builder = match request.method {
                Method::Get => Request::get(&request.url),
                Method::Post => Request::post(&request.url),
                Method::Put => Request::put(&request.url),
                Method::Patch => Request::patch(&request.url),
                Method::Delete => Request::delete(&request.url),
            };
            if request.include_credentials {
                builder = builder.credentials(web_sys::RequestCredentials::Include);
            }
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            let outgoing = match request.body {
                Some(body) => builder.body(body),
                None => builder.build(),
            }
            .map_err(|e| TransportError::Network(e.to_string()))?;

            let resp = outgoing
                .send()
                .await
                .map_err(|e| TransportError::Network(e.to_string()))?;
            let status = resp.status();
            // An unreadable body still carries a meaningful status.
            let body = resp.text().await.unwrap_or_default();
            Ok(ApiResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(TransportError::Unavailable)
        }
    }
}
