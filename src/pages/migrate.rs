use crate::routes::use_route_params;
use leptos::prelude::*;
use tracing::info;

#[component]
pub fn MigrateV2() -> impl IntoView {
    info!("rendering <MigrateV2/>");

    view! {
        <div class="space-y-2">
            <h2 class="text-2xl font-bold">"Migrate V2 liquidity"</h2>
            <p>"Pick a V2 position to move into a concentrated liquidity position."</p>
        </div>
    }
}

#[component]
pub fn MigrateV2Pair() -> impl IntoView {
    info!("rendering <MigrateV2Pair/>");

    let params = use_route_params();
    let address = move || params.get().get("address").unwrap_or_default().to_string();

    view! {
        <div class="space-y-2">
            <h2 class="text-2xl font-bold">"Migrate V2 liquidity"</h2>
            <p>"Pair " <code>{address}</code></p>
        </div>
    }
}
