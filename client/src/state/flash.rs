//! One-shot message carried across a navigation.
//!
//! Signup sets it right before navigating to `/login`; the login page takes it
//! on mount, so a reload or later visit never shows it again. Nothing is
//! persisted.

#[cfg(test)]
#[path = "flash_test.rs"]
mod flash_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlashState {
    message: Option<String>,
}

impl FlashState {
    pub fn set(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    /// Remove and return the pending message.
    pub fn take(&mut self) -> Option<String> {
        self.message.take()
    }
}
