//! Submit lifecycle shared by the login and signup forms.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

/// Where a form is in its submit attempt.
///
/// `Idle → Validating → Submitting → Succeeded | Failed`. Login skips
/// `Validating`. Each new attempt starts from a cleared error.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed(String),
}

impl FormStatus {
    /// An attempt is in progress; further submits are ignored.
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Validating | Self::Submitting)
    }

    /// Message to display, if the last attempt failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}
