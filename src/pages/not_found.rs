use leptos::prelude::*;
use leptos_router::components::A;
use tracing::info;

#[component]
pub fn NotFound() -> impl IntoView {
    info!("rendering <NotFound/>");

    view! {
        <div class="py-16 text-center space-y-4">
            <h1 class="text-6xl font-bold">"404"</h1>
            <p>"Page not found!"</p>
            <A href="/" attr:class="no-underline">"Oops, take me back"</A>
        </div>
    }
}
