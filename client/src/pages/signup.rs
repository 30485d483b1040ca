//! Signup page: client-side validation, then `POST /auth/register/`.
//!
//! On success the browser moves to `/login` with a one-shot confirmation
//! message; on failure the page shows exactly one error string.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::auth_card::{AuthCard, ErrorAlert};
use crate::components::form_field::FormField;
use crate::components::oauth_buttons::OAuthButtons;
use crate::net::api::{ApiClient, ApiError, BrowserApi};
use crate::net::cookies::CookieSource;
use crate::net::transport::Transport;
use crate::net::types::RegisterRequest;
use crate::state::flash::FlashState;
use crate::state::form::FormStatus;
use crate::state::signup::{SignupField, SignupForm};
use crate::util::route::Route;

pub const SIGNUP_SUCCESS_MESSAGE: &str = "Account created successfully! Please log in.";
pub const SIGNUP_FALLBACK_MESSAGE: &str = "Signup failed. Please try again.";

/// Result of one signup attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignupOutcome {
    /// Account created; go to `to` and show `flash` there.
    Redirect { to: Route, flash: String },
    /// Stay on the page and show this message.
    Failed(String),
}

/// Display text for a rejected registration: server `error`, then server
/// `detail`, then the generic fallback.
pub fn signup_failure_message(err: &ApiError) -> String {
    err.server_error()
        .or_else(|| err.server_detail())
        .unwrap_or(SIGNUP_FALLBACK_MESSAGE)
        .to_owned()
}

/// Send an already-validated registration.
pub async fn register_account<T: Transport, C: CookieSource>(
    api: &ApiClient<T, C>,
    request: &RegisterRequest,
) -> SignupOutcome {
    match api.register(request).await {
        Ok(created) => {
            let name = created.map_or_else(|| request.username.clone(), |user| user.username);
            log::info!("signup successful for {name}");
            SignupOutcome::Redirect { to: Route::Login, flash: SIGNUP_SUCCESS_MESSAGE.to_owned() }
        }
        Err(e) => {
            log::warn!("signup failed: {e}");
            SignupOutcome::Failed(signup_failure_message(&e))
        }
    }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let api = expect_context::<BrowserApi>();
    let flash = expect_context::<RwSignal<FlashState>>();
    let navigate = use_navigate();

    let form = RwSignal::new(SignupForm::default());
    let status = RwSignal::new(FormStatus::Idle);
    let busy = Signal::derive(move || status.get().is_busy());
    let error = Signal::derive(move || status.get().error().map(str::to_owned));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if status.get_untracked().is_busy() {
            return;
        }
        status.set(FormStatus::Validating);
        let request = match form.get_untracked().validate() {
            Ok(request) => request,
            Err(rule) => {
                status.set(FormStatus::Failed(rule.to_string()));
                return;
            }
        };
        status.set(FormStatus::Submitting);

        let api = api.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match register_account(&api, &request).await {
                SignupOutcome::Redirect { to, flash: message } => {
                    status.set(FormStatus::Succeeded);
                    flash.update(|f| f.set(message));
                    navigate(to.path(), NavigateOptions::default());
                }
                SignupOutcome::Failed(message) => status.set(FormStatus::Failed(message)),
            }
        });
    };

    let field = move |field: SignupField| {
        (
            Signal::derive(move || form.with(|f| f.get(field).to_owned())),
            Callback::new(move |value: String| form.update(|f| f.set(field, value))),
        )
    };
    let (username, on_username) = field(SignupField::Username);
    let (email, on_email) = field(SignupField::Email);
    let (password, on_password) = field(SignupField::Password);
    let (confirm, on_confirm) = field(SignupField::ConfirmPassword);

    view! {
        <AuthCard title="Create Account" subtitle="Join Spotify Voice Manager">
            <ErrorAlert message=error/>
            <form class="auth-form" on:submit=on_submit>
                <FormField
                    id="username"
                    label="Username"
                    placeholder="Choose a username"
                    value=username
                    on_input=on_username
                    disabled=busy
                />
                <FormField
                    id="email"
                    label="Email"
                    input_type="email"
                    placeholder="you@example.com"
                    value=email
                    on_input=on_email
                    disabled=busy
                />
                <FormField
                    id="password"
                    label="Password"
                    input_type="password"
                    placeholder="At least 6 characters"
                    value=password
                    on_input=on_password
                    disabled=busy
                />
                <FormField
                    id="confirmPassword"
                    label="Confirm Password"
                    input_type="password"
                    placeholder="Repeat your password"
                    value=confirm
                    on_input=on_confirm
                    disabled=busy
                />
                <button class="auth-button" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Creating account..." } else { "Sign Up" }}
                </button>
            </form>
            <OAuthButtons verb="Sign up"/>
            <p class="auth-card__footer">
                "Already have an account? "
                <A href=Route::Login.path()>"Log in"</A>
            </p>
        </AuthCard>
    }
}
