use crate::routes::use_route_params;
use leptos::prelude::*;
use tracing::info;

#[component]
pub fn RemoveLiquidity() -> impl IntoView {
    info!("rendering <RemoveLiquidity/>");

    let params = use_route_params();
    let pair = move || {
        let params = params.get();
        format!(
            "{} / {}",
            params.get("currencyIdA").unwrap_or_default(),
            params.get("currencyIdB").unwrap_or_default()
        )
    };

    view! {
        <div class="space-y-2">
            <h2 class="text-2xl font-bold">"Remove V2 liquidity"</h2>
            <p>{pair}</p>
        </div>
    }
}

#[component]
pub fn RemoveLiquidityV3() -> impl IntoView {
    info!("rendering <RemoveLiquidityV3/>");

    let params = use_route_params();
    let token_id = move || params.get().get("tokenId").unwrap_or_default().to_string();

    view! {
        <div class="space-y-2">
            <h2 class="text-2xl font-bold">"Remove liquidity"</h2>
            <p>"Position #" {token_id}</p>
        </div>
    }
}
