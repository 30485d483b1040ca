//! Third-party sign-in entry points.
//!
//! No provider is wired to the backend yet. Each button reports that the
//! provider is unavailable instead of pretending to start a flow.

#[cfg(test)]
#[path = "oauth_buttons_test.rs"]
mod oauth_buttons_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OAuthProvider {
    Google,
    Spotify,
}

impl OAuthProvider {
    pub const ALL: [Self; 2] = [Self::Google, Self::Spotify];

    pub fn label(self) -> &'static str {
        match self {
            Self::Google => "Google",
            Self::Spotify => "Spotify",
        }
    }

    pub fn unavailable_message(self) -> String {
        format!("{} sign-in is not available yet.", self.label())
    }
}

/// Divider plus one button per provider. `verb` reads "Continue", "Sign up", etc.
#[component]
pub fn OAuthButtons(#[prop(into)] verb: String) -> impl IntoView {
    let notice = RwSignal::new(None::<String>);

    let buttons = OAuthProvider::ALL
        .into_iter()
        .map(|provider| {
            let text = format!("{verb} with {}", provider.label());
            view! {
                <button
                    type="button"
                    class="oauth-button"
                    title="Not available yet"
                    on:click=move |_| {
                        log::info!("{} sign-in requested but not implemented", provider.label());
                        notice.set(Some(provider.unavailable_message()));
                    }
                >
                    {text}
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="auth-divider"><span>"OR"</span></div>
        <div class="oauth-buttons">{buttons}</div>
        <Show when=move || notice.get().is_some()>
            <p class="oauth-buttons__notice">{move || notice.get().unwrap_or_default()}</p>
        </Show>
    }
}
