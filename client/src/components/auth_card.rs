//! Centered card layout shared by the login and signup pages.

use leptos::prelude::*;

/// Card with a heading, subtitle, and the page form as children.
#[component]
pub fn AuthCard(#[prop(into)] title: String, #[prop(into)] subtitle: String, children: Children) -> impl IntoView {
    view! {
        <div class="auth-page">
            <div class="auth-card">
                <div class="auth-card__header">
                    <div class="auth-card__logo" aria-hidden="true">"🎵"</div>
                    <h1>{title}</h1>
                    <p class="auth-card__subtitle">{subtitle}</p>
                </div>
                {children()}
            </div>
        </div>
    }
}

/// Error banner; renders nothing while `message` is `None`.
#[component]
pub fn ErrorAlert(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div class="alert alert--error" role="alert">
                {move || message.get().unwrap_or_default()}
            </div>
        </Show>
    }
}

/// Informational banner (e.g. post-signup confirmation).
#[component]
pub fn NoticeAlert(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div class="alert alert--notice" role="status">
                {move || message.get().unwrap_or_default()}
            </div>
        </Show>
    }
}
