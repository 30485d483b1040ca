//! Login page: email + password against `POST /auth/login/`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::auth_card::{AuthCard, ErrorAlert, NoticeAlert};
use crate::components::form_field::FormField;
use crate::components::oauth_buttons::OAuthButtons;
use crate::net::api::{ApiClient, ApiError, BrowserApi};
use crate::net::cookies::CookieSource;
use crate::net::transport::Transport;
use crate::state::flash::FlashState;
use crate::state::form::FormStatus;
use crate::state::login::LoginForm;
use crate::util::route::Route;

pub const LOGIN_FALLBACK_MESSAGE: &str = "Login failed. Please try again.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    Redirect(Route),
    Failed(String),
}

/// Server `error` string, else the generic fallback. `detail` is not consulted.
pub fn login_failure_message(err: &ApiError) -> String {
    err.server_error().unwrap_or(LOGIN_FALLBACK_MESSAGE).to_owned()
}

/// Submit credentials; any 2xx goes to the dashboard.
pub async fn submit_login<T: Transport, C: CookieSource>(api: &ApiClient<T, C>, form: &LoginForm) -> LoginOutcome {
    match api.login(&form.request()).await {
        Ok(resp) => {
            log::info!("{}", resp.message.as_deref().unwrap_or("login successful"));
            LoginOutcome::Redirect(Route::Dashboard)
        }
        Err(e) => {
            log::warn!("login failed: {e}");
            LoginOutcome::Failed(login_failure_message(&e))
        }
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let api = expect_context::<BrowserApi>();
    let flash = expect_context::<RwSignal<FlashState>>();
    let navigate = use_navigate();

    let notice = RwSignal::new(flash.try_update(FlashState::take).flatten());
    let form = RwSignal::new(LoginForm::default());
    let status = RwSignal::new(FormStatus::Idle);
    let busy = Signal::derive(move || status.get().is_busy());
    let error = Signal::derive(move || status.get().error().map(str::to_owned));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if status.get_untracked().is_busy() {
            return;
        }
        status.set(FormStatus::Submitting);
        notice.set(None);

        let api = api.clone();
        let navigate = navigate.clone();
        let snapshot = form.get_untracked();
        leptos::task::spawn_local(async move {
            match submit_login(&api, &snapshot).await {
                LoginOutcome::Redirect(to) => {
                    status.set(FormStatus::Succeeded);
                    navigate(to.path(), NavigateOptions::default());
                }
                LoginOutcome::Failed(message) => status.set(FormStatus::Failed(message)),
            }
        });
    };

    view! {
        <AuthCard title="Welcome Back" subtitle="Log in to Spotify Voice Manager">
            <NoticeAlert message=notice/>
            <ErrorAlert message=error/>
            <form class="auth-form" on:submit=on_submit>
                <FormField
                    id="email"
                    label="Email"
                    input_type="email"
                    placeholder="you@example.com"
                    value=Signal::derive(move || form.with(|f| f.email.clone()))
                    on_input=Callback::new(move |value: String| form.update(|f| f.email = value))
                    disabled=busy
                />
                <FormField
                    id="password"
                    label="Password"
                    input_type="password"
                    placeholder="Your password"
                    value=Signal::derive(move || form.with(|f| f.password.clone()))
                    on_input=Callback::new(move |value: String| form.update(|f| f.password = value))
                    disabled=busy
                />
                <button class="auth-button" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Logging in..." } else { "Log In" }}
                </button>
            </form>
            <OAuthButtons verb="Continue"/>
            <p class="auth-card__footer">
                "Don't have an account? "
                <A href=Route::Signup.path()>"Sign up"</A>
            </p>
        </AuthCard>
    }
}
