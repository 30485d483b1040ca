//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State types are plain values so they can be unit-tested without a reactive
//! runtime; components wrap them in `RwSignal` and share them via context.

pub mod auth;
pub mod flash;
pub mod form;
pub mod login;
pub mod signup;
