//! Wire DTOs for the backend auth endpoints.
//!
//! DESIGN
//! ======
//! Field names mirror the backend JSON exactly. Response types are lenient
//! (`serde(default)`, optional fields) so additive backend changes never break
//! decoding.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An account as returned by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Numeric account identifier.
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

/// Per-account settings attached to a [`User`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountProfile {
    /// Spotify account id once the account has been linked.
    #[serde(default)]
    pub spotify_user_id: Option<String>,
    #[serde(default)]
    pub voice_commands_enabled: bool,
    #[serde(default)]
    pub ai_suggestions_enabled: bool,
}

impl AccountProfile {
    pub fn spotify_linked(&self) -> bool {
        self.spotify_user_id.as_deref().is_some_and(|id| !id.is_empty())
    }
}

/// The signed-in account plus its profile, as shown on the dashboard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurrentUser {
    pub user: User,
    pub profile: Option<AccountProfile>,
}

/// `GET /auth/me/` body. The backend wraps the user in an envelope; a bare
/// user object is accepted too.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum MeResponse {
    Envelope {
        user: User,
        #[serde(default)]
        profile: Option<AccountProfile>,
    },
    Bare(User),
}

impl From<MeResponse> for CurrentUser {
    fn from(resp: MeResponse) -> Self {
        match resp {
            MeResponse::Envelope { user, profile } => Self { user, profile },
            MeResponse::Bare(user) => Self { user, profile: None },
        }
    }
}

/// `POST /auth/login/` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST /auth/login/` success body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub message: Option<String>,
}

/// `POST /auth/register/` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Error payload the backend attaches to non-2xx responses.
///
/// Only string values count; anything else (validation maps, arrays) is
/// treated as absent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: Option<String>,
    pub detail: Option<String>,
}

impl ErrorBody {
    /// Parse a response body, yielding an empty `ErrorBody` for anything that
    /// is not a JSON object.
    pub fn parse(raw: &str) -> Self {
        let Ok(serde_json::Value::Object(map)) = serde_json::from_str::<serde_json::Value>(raw) else {
            return Self::default();
        };
        let text = |key: &str| {
            map.get(key)
                .and_then(serde_json::Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_owned)
        };
        Self { error: text("error"), detail: text("detail") }
    }
}
