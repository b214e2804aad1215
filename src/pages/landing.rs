use crate::constants::APP_NAME;
use leptos::prelude::*;
use leptos_router::components::A;
use tracing::info;

#[component]
pub fn Landing() -> impl IntoView {
    info!("rendering <Landing/>");

    view! {
        <div class="max-w-2xl mx-auto py-8 space-y-4">
            <h1 class="text-4xl font-bold">{APP_NAME}</h1>
            <p class="text-muted-foreground">"Swap, earn, and build on a community-owned exchange."</p>
            <div class="flex gap-2">
                <A href="/swap" attr:class="px-4 py-2 font-semibold no-underline">
                    "Get started"
                </A>
                <A href="/whatishorswap" attr:class="px-4 py-2 no-underline">
                    "Learn more"
                </A>
            </div>
        </div>
    }
}
