//! In-memory transport and cookie jar for exercising `ApiClient` without a
//! browser.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use super::api::ApiClient;
use super::config::ApiConfig;
use super::cookies::CookieSource;
use super::transport::{ApiRequest, ApiResponse, Transport, TransportError};

/// Cookie string shared between a test, its transport, and its client.
#[derive(Clone, Debug, Default)]
pub struct StaticCookies(Rc<RefCell<String>>);

impl StaticCookies {
    pub fn new(raw: &str) -> Self {
        Self(Rc::new(RefCell::new(raw.to_owned())))
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn set(&self, raw: &str) {
        *self.0.borrow_mut() = raw.to_owned();
    }
}

impl CookieSource for StaticCookies {
    fn cookie_string(&self) -> Option<String> {
        Some(self.0.borrow().clone())
    }
}

/// Transport that records every request and replays scripted replies in order.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    requests: RefCell<Vec<ApiRequest>>,
    replies: RefCell<VecDeque<Result<ApiResponse, TransportError>>>,
    set_cookie: Option<(StaticCookies, String)>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, status: u16, body: &str) -> Self {
        self.replies
            .borrow_mut()
            .push_back(Ok(ApiResponse { status, body: body.to_owned() }));
        self
    }

    pub fn fail(self, message: &str) -> Self {
        self.replies
            .borrow_mut()
            .push_back(Err(TransportError::Network(message.to_owned())));
        self
    }

    /// Emulate `Set-Cookie`: overwrite `jar` whenever a request is sent.
    pub fn setting_cookie(mut self, jar: &StaticCookies, raw: &str) -> Self {
        self.set_cookie = Some((jar.clone(), raw.to_owned()));
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl Transport for RecordingTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        self.requests.borrow_mut().push(request);
        if let Some((jar, raw)) = &self.set_cookie {
            jar.set(raw);
        }
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Network("no scripted reply".to_owned())))
    }
}

pub type TestApi = ApiClient<RecordingTransport, StaticCookies>;

pub fn test_api(transport: RecordingTransport, cookies: StaticCookies) -> TestApi {
    ApiClient::new(ApiConfig::default(), transport, cookies)
}
