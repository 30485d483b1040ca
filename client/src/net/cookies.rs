//! Read-only access to the browser cookie store.
//!
//! The backend owns every cookie (session id + CSRF token) through
//! `Set-Cookie`; the client only looks values up to echo the CSRF token back.

#[cfg(test)]
#[path = "cookies_test.rs"]
mod cookies_test;

/// Name of the cookie carrying the backend-issued CSRF token.
pub const CSRF_COOKIE: &str = "csrftoken";

/// Source of the raw `name=value; name2=value2` cookie string.
pub trait CookieSource {
    /// Current cookie string, or `None` when no cookie store is reachable.
    fn cookie_string(&self) -> Option<String>;

    /// Look up a single cookie by exact name. Empty values count as absent.
    fn get(&self, name: &str) -> Option<String> {
        self.cookie_string().and_then(|raw| find_cookie(&raw, name))
    }
}

/// Find `name` in a `document.cookie`-style string.
pub fn find_cookie(raw: &str, name: &str) -> Option<String> {
    raw.split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim())
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
}

/// Cookie store of the current document.
///
/// Outside the browser (SSR, native tests) there is no document, so every
/// lookup yields `None`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserCookies;

impl CookieSource for BrowserCookies {
    fn cookie_string(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            let document = web_sys::window()?.document()?;
            let html: web_sys::HtmlDocument = document.dyn_into().ok()?;
            html.cookie().ok()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }
}
