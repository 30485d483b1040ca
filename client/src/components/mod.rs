//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the shared auth-card chrome and form controls; pages own
//! state and pass signals/callbacks down.

pub mod auth_card;
pub mod form_field;
pub mod oauth_buttons;
