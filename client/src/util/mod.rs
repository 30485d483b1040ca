//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate routing and redirect concerns from page logic to
//! improve reuse and testability.

pub mod auth;
pub mod route;
