use crate::routes::use_route_params;
use leptos::prelude::*;
use leptos_router::components::A;
use tracing::info;

#[component]
pub fn Pool() -> impl IntoView {
    info!("rendering <Pool/>");

    view! {
        <div class="space-y-2">
            <h2 class="text-2xl font-bold">"Pools"</h2>
            <div class="flex gap-2">
                <A href="/add/ETH" attr:class="no-underline">"New position"</A>
                <A href="/pool/v2" attr:class="no-underline">"V2 liquidity"</A>
            </div>
        </div>
    }
}

#[component]
pub fn PoolV2() -> impl IntoView {
    info!("rendering <PoolV2/>");

    view! {
        <div class="space-y-2">
            <h2 class="text-2xl font-bold">"V2 liquidity"</h2>
            <div class="flex gap-2">
                <A href="/add/v2/ETH" attr:class="no-underline">"Add V2 liquidity"</A>
                <A href="/pool/v2/find" attr:class="no-underline">"Import pool"</A>
            </div>
        </div>
    }
}

#[component]
pub fn PoolFinder() -> impl IntoView {
    info!("rendering <PoolFinder/>");

    view! {
        <div class="space-y-2">
            <h2 class="text-2xl font-bold">"Import V2 pool"</h2>
            <p>"Select a token pair to find an existing pool."</p>
        </div>
    }
}

#[component]
pub fn PositionPage() -> impl IntoView {
    info!("rendering <PositionPage/>");

    let params = use_route_params();
    let token_id = move || params.get().get("tokenId").unwrap_or_default().to_string();

    view! {
        <div class="space-y-2">
            <h2 class="text-2xl font-bold">"Position #" {token_id}</h2>
            <div class="flex gap-2">
                <A href=move || format!("/increase/ETH/ETH/3000/{}", token_id()) attr:class="no-underline">
                    "Increase liquidity"
                </A>
                <A href=move || format!("/remove/{}", token_id()) attr:class="no-underline">
                    "Remove liquidity"
                </A>
            </div>
        </div>
    }
}
