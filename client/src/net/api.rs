//! REST client for the backend auth API.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `ApiClient` is constructed by the root component and shared through
//! context. Every request it builds carries browser cookies and, when the
//! backend has issued one, the CSRF token echoed in `X-CSRFToken`.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx statuses and transport failures both surface as [`ApiError`];
//! pages reduce them to a single display string. Nothing here retries.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use super::config::ApiConfig;
use super::cookies::{BrowserCookies, CSRF_COOKIE, CookieSource};
use super::transport::{ApiRequest, ApiResponse, BrowserTransport, Method, Transport, TransportError};
use super::types::{CurrentUser, ErrorBody, LoginRequest, LoginResponse, MeResponse, RegisterRequest, User};

/// Header the backend checks against the CSRF cookie.
pub const CSRF_HEADER: &str = "X-CSRFToken";

pub const ME_PATH: &str = "/auth/me/";
pub const LOGIN_PATH: &str = "/auth/login/";
pub const REGISTER_PATH: &str = "/auth/register/";
pub const LOGOUT_PATH: &str = "/auth/logout/";

/// Client wired to the real browser cookie store and `fetch`.
pub type BrowserApi = ApiClient<BrowserTransport, BrowserCookies>;

/// Failure of a single API call.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced an HTTP status.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The backend answered with a non-2xx status.
    #[error("request failed: {status}")]
    Status { status: u16, body: ErrorBody },

    /// A 2xx body did not match the expected shape.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// The request body could not be serialized.
    #[error("request encode failed: {0}")]
    Encode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The backend's `error` string, if the failure carried one.
    pub fn server_error(&self) -> Option<&str> {
        match self {
            Self::Status { body, .. } => body.error.as_deref(),
            _ => None,
        }
    }

    /// The backend's `detail` string, if the failure carried one.
    pub fn server_detail(&self) -> Option<&str> {
        match self {
            Self::Status { body, .. } => body.detail.as_deref(),
            _ => None,
        }
    }
}

/// Backend client bound to a base URL, a transport, and a cookie source.
#[derive(Clone, Debug)]
pub struct ApiClient<T, C> {
    config: ApiConfig,
    transport: T,
    cookies: C,
}

impl BrowserApi {
    /// Client for the hydrated app, using the build-time base URL.
    pub fn browser() -> Self {
        Self::new(ApiConfig::from_build_env(), BrowserTransport, BrowserCookies)
    }
}

impl<T: Transport, C: CookieSource> ApiClient<T, C> {
    pub fn new(config: ApiConfig, transport: T, cookies: C) -> Self {
        Self { config, transport, cookies }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Assemble an outgoing request.
    ///
    /// The CSRF cookie is read at build time, not at construction, so a token
    /// set by an earlier response is picked up by the very next request.
    pub fn build_request(&self, method: Method, path: &str, body: Option<String>) -> ApiRequest {
        let mut headers = vec![("Content-Type".to_owned(), "application/json".to_owned())];
        if let Some(token) = self.cookies.get(CSRF_COOKIE) {
            headers.push((CSRF_HEADER.to_owned(), token));
        }
        ApiRequest {
            method,
            url: self.config.endpoint_url(path),
            headers,
            body,
            include_credentials: true,
        }
    }

    /// Send a request and classify the status. Non-2xx becomes
    /// [`ApiError::Status`] with the parsed error body.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx status.
    pub async fn request(&self, method: Method, path: &str, body: Option<String>) -> Result<ApiResponse, ApiError> {
        let request = self.build_request(method, path, body);
        log::debug!("{} {}", method.as_str(), request.url);
        let resp = self.transport.send(request).await?;
        if !resp.is_success() {
            return Err(ApiError::Status { status: resp.status, body: ErrorBody::parse(&resp.body) });
        }
        Ok(resp)
    }

    /// `GET` and decode a JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-2xx status, or a body that
    /// does not decode as `R`.
    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        let resp = self.request(Method::Get, path, None).await?;
        decode(&resp)
    }

    /// `POST` a JSON body and decode the JSON reply.
    ///
    /// # Errors
    ///
    /// Returns an error if the body cannot be encoded, on transport failure,
    /// non-2xx status, or an undecodable reply.
    pub async fn post<B: Serialize, R: DeserializeOwned>(&self, path: &str, body: &B) -> Result<R, ApiError> {
        let resp = self.send_json(Method::Post, path, body).await?;
        decode(&resp)
    }

    /// `PUT` a JSON body and decode the JSON reply.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::post`].
    pub async fn put<B: Serialize, R: DeserializeOwned>(&self, path: &str, body: &B) -> Result<R, ApiError> {
        let resp = self.send_json(Method::Put, path, body).await?;
        decode(&resp)
    }

    /// `PATCH` a JSON body and decode the JSON reply.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::post`].
    pub async fn patch<B: Serialize, R: DeserializeOwned>(&self, path: &str, body: &B) -> Result<R, ApiError> {
        let resp = self.send_json(Method::Patch, path, body).await?;
        decode(&resp)
    }

    /// `DELETE`, ignoring any reply body.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx status.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.request(Method::Delete, path, None).await.map(|_| ())
    }

    async fn send_json<B: Serialize>(&self, method: Method, path: &str, body: &B) -> Result<ApiResponse, ApiError> {
        let encoded = serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.request(method, path, Some(encoded)).await
    }

    /// Provoke the backend into setting the CSRF cookie.
    ///
    /// Issues one `GET /auth/me/` and ignores the outcome; an anonymous
    /// visitor gets a 401/403 here, which is expected. Returns whether a CSRF
    /// token is present afterwards.
    pub async fn initialize(&self) -> bool {
        if let Err(e) = self.request(Method::Get, ME_PATH, None).await {
            log::debug!("csrf bootstrap probe failed: {e}");
        }
        let ready = self.cookies.get(CSRF_COOKIE).is_some();
        if !ready {
            log::warn!("no {CSRF_COOKIE} cookie after bootstrap; unsafe requests may be rejected");
        }
        ready
    }

    /// Fetch the signed-in account via `GET /auth/me/`.
    ///
    /// # Errors
    ///
    /// Returns an error when unauthenticated (non-2xx) or on any failure.
    pub async fn current_user(&self) -> Result<CurrentUser, ApiError> {
        self.get::<MeResponse>(ME_PATH).await.map(CurrentUser::from)
    }

    /// Start a session via `POST /auth/login/`.
    ///
    /// Any 2xx counts as signed in; an unexpected body decodes as an empty
    /// [`LoginResponse`].
    ///
    /// # Errors
    ///
    /// Returns an error when the credentials are rejected or on any failure.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let resp = self.send_json(Method::Post, LOGIN_PATH, credentials).await?;
        Ok(serde_json::from_str(&resp.body).unwrap_or_default())
    }

    /// Create an account via `POST /auth/register/`.
    ///
    /// Any 2xx counts as created; the echoed account is returned when the body
    /// decodes.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend rejects the registration or on any
    /// failure.
    pub async fn register(&self, account: &RegisterRequest) -> Result<Option<User>, ApiError> {
        let resp = self.send_json(Method::Post, REGISTER_PATH, account).await?;
        Ok(serde_json::from_str(&resp.body).ok())
    }

    /// End the session via `POST /auth/logout/`. Any reply body is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx status.
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.request(Method::Post, LOGOUT_PATH, None).await.map(|_| ())
    }
}

fn decode<R: DeserializeOwned>(resp: &ApiResponse) -> Result<R, ApiError> {
    serde_json::from_str(&resp.body).map_err(|e| ApiError::Decode(e.to_string()))
}
