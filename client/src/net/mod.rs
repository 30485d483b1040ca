//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns request assembly (base URL, cookies, CSRF header) and endpoint
//! calls, `transport` abstracts the HTTP stack, `cookies` reads the browser
//! cookie store, and `types` defines the wire schema.

pub mod api;
pub mod config;
pub mod cookies;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;
