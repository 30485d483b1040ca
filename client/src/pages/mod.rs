//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration: an async flow function that is
//! generic over the transport (unit-testable without a browser) plus the
//! component that drives it and renders through `components`.

pub mod dashboard;
pub mod login;
pub mod signup;
