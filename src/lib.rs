use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router_macro::path;
use tracing::info;

mod components;
pub mod constants;
mod error;
pub mod lazy;
mod pages;
pub mod routes;

use constants::APP_NAME;
use routes::{nav::Nav, RouteOutlet};

pub use error::Error;

#[component]
pub fn App() -> impl IntoView {
    info!("rendering <App/>");

    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title text=APP_NAME />
        <Router>
            <header>
                <div class="flex justify-between items-center">
                    <div id="mainTitle" class="my-2 font-bold text-3xl line-clamp-1">
                        {APP_NAME}
                    </div>
                </div>
                <hr />
                <Nav />
                <hr />
            </header>
            <main class="p-2 overflow-x-auto">
                // Deferred page loads that fail end up here.
                <ErrorBoundary fallback=|errors| {
                    view! {
                        <div class="py-8 space-y-2">
                            <p class="font-bold">"Something went wrong loading this page."</p>
                            <ul>
                                {move || {
                                    errors
                                        .get()
                                        .into_iter()
                                        .map(|(_, error)| view! { <li>{error.to_string()}</li> })
                                        .collect_view()
                                }}
                            </ul>
                        </div>
                    }
                }>
                    // The table does its own matching; the router only supplies the location.
                    <Routes fallback=|| "This page could not be found.">
                        <Route path=path!("/") view=RouteOutlet />
                        <Route path=path!("/*any") view=RouteOutlet />
                    </Routes>
                </ErrorBoundary>
            </main>
        </Router>
    }
}
