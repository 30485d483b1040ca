//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::net::api::BrowserApi;
use crate::pages::{dashboard::DashboardPage, login::LoginPage, signup::SignupPage};
use crate::state::flash::FlashState;
use crate::util::route::Route as AppRoute;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the single [`BrowserApi`], provides it and the navigation flash
/// slot to every page, and kicks off the CSRF bootstrap once in the browser.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let api = BrowserApi::browser();
    let flash = RwSignal::new(FlashState::default());

    #[cfg(feature = "hydrate")]
    {
        let api = api.clone();
        leptos::task::spawn_local(async move {
            api.initialize().await;
        });
    }

    provide_context(api);
    provide_context(flash);

    view! {
        <Stylesheet id="leptos" href="/pkg/voicelist.css"/>
        <Title text="Spotify Voice Manager"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("") view=|| view! { <Redirect path=AppRoute::Dashboard.path()/> }/>
            </Routes>
        </Router>
    }
}
