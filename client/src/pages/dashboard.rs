//! Dashboard page: the signed-in account and logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It fetches `/auth/me/` on every
//! mount (no cache) and hands the result to the shared unauthenticated
//! redirect, so any failure sends the browser to `/login` exactly once.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::{ApiClient, BrowserApi};
use crate::net::cookies::CookieSource;
use crate::net::transport::Transport;
use crate::net::types::CurrentUser;
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;
use crate::util::route::Route;

/// What the dashboard learned from `/auth/me/`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DashboardLoad {
    Ready(CurrentUser),
    SignedOut,
}

impl From<DashboardLoad> for AuthState {
    fn from(load: DashboardLoad) -> Self {
        match load {
            DashboardLoad::Ready(user) => Self::signed_in(user),
            DashboardLoad::SignedOut => Self::signed_out(),
        }
    }
}

/// Fetch the current account. Every failure (any status, transport, bad body)
/// counts as signed out; the reason is only logged.
pub async fn load_dashboard<T: Transport, C: CookieSource>(api: &ApiClient<T, C>) -> DashboardLoad {
    match api.current_user().await {
        Ok(user) => DashboardLoad::Ready(user),
        Err(e) => {
            log::warn!("failed to fetch current user: {e}");
            DashboardLoad::SignedOut
        }
    }
}

/// Call logout and return where to go next, which is always `/login`.
pub async fn sign_out<T: Transport, C: CookieSource>(api: &ApiClient<T, C>) -> Route {
    if let Err(e) = api.logout().await {
        log::warn!("logout failed: {e}");
    }
    Route::Login
}

/// Dashboard page: greeting, account details, and inert quick actions.
/// Redirects to `/login` if the user is not authenticated.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let api = expect_context::<BrowserApi>();
    let navigate = use_navigate();
    let auth = RwSignal::new(AuthState::loading());

    install_unauth_redirect(auth, navigate.clone());

    #[cfg(feature = "hydrate")]
    {
        let api = api.clone();
        leptos::task::spawn_local(async move {
            let load = load_dashboard(&api).await;
            auth.set(load.into());
        });
    }

    let logging_out = RwSignal::new(false);
    let on_logout = move |_| {
        if logging_out.get_untracked() {
            return;
        }
        logging_out.set(true);
        let api = api.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let to = sign_out(&api).await;
            navigate(to.path(), NavigateOptions::default());
        });
    };

    let username = move || auth.with(|a| a.username().unwrap_or_default().to_owned());
    let email = move || auth.with(|a| a.user.as_ref().map(|u| u.user.email.clone()).unwrap_or_default());
    let profile = move || auth.with(|a| a.user.as_ref().and_then(|u| u.profile.clone()));

    view! {
        <Show
            when=move || auth.with(|a| a.user.is_some())
            fallback=move || {
                view! {
                    <div class="dashboard-page dashboard-page--loading">
                        <p>{move || if auth.get().loading { "Loading..." } else { "Redirecting to login..." }}</p>
                    </div>
                }
            }
        >
            <div class="dashboard-page">
                <header class="dashboard-page__header">
                    <span class="dashboard-page__brand">"🎵 Spotify Voice Manager"</span>
                    <span class="dashboard-page__spacer"></span>
                    <span class="dashboard-page__greeting">
                        "Welcome, " <strong>{username}</strong> "!"
                    </span>
                    <button
                        class="btn dashboard-page__logout"
                        on:click=on_logout.clone()
                        disabled=move || logging_out.get()
                    >
                        "Logout"
                    </button>
                </header>

                <main class="dashboard-page__body">
                    <h1>"Dashboard"</h1>
                    <div class="dashboard-page__cards">
                        <section class="card">
                            <h2>"👤 User Information"</h2>
                            <dl class="card__fields">
                                <dt>"Username"</dt>
                                <dd>{username}</dd>
                                <dt>"Email"</dt>
                                <dd>{email}</dd>
                                <dt>"Spotify account"</dt>
                                <dd>
                                    {move || {
                                        if profile().is_some_and(|p| p.spotify_linked()) { "Linked" } else { "Not linked" }
                                    }}
                                </dd>
                                <dt>"Voice commands"</dt>
                                <dd>
                                    {move || {
                                        if profile().is_some_and(|p| p.voice_commands_enabled) { "Enabled" } else { "Disabled" }
                                    }}
                                </dd>
                            </dl>
                        </section>

                        <section class="card">
                            <h2>"⚡ Quick Actions"</h2>
                            <p class="card__hint">"Playlist management is coming soon."</p>
                            <div class="card__actions">
                                <button class="btn" type="button" disabled=true>"View Playlists"</button>
                                <button class="btn" type="button" disabled=true>"Create Playlist"</button>
                            </div>
                        </section>
                    </div>
                </main>
            </div>
        </Show>
    }
}
