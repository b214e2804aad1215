use crate::routes::use_route_params;
use leptos::prelude::*;
use tracing::info;

mod redirects;

pub use redirects::{RedirectDuplicateTokenIds, RedirectDuplicateTokenIdsV2};

/// Add-liquidity flow. Serves `/add/...` (after the duplicate-token check) and
/// `/increase/...`; `v2` switches to the constant-product pool form.
#[component]
pub fn AddLiquidity(#[prop(optional)] v2: bool) -> impl IntoView {
    info!("rendering <AddLiquidity/>");

    let params = use_route_params();
    let param = move |name: &'static str| {
        move || params.get().get(name).unwrap_or("-").to_string()
    };

    view! {
        <div class="max-w-md mx-auto space-y-2">
            <h2 class="text-2xl font-bold">
                {if v2 { "Add V2 liquidity" } else { "Add liquidity" }}
            </h2>
            <dl class="grid grid-cols-2 gap-1">
                <dt>"Token A"</dt>
                <dd>{param("currencyIdA")}</dd>
                <dt>"Token B"</dt>
                <dd>{param("currencyIdB")}</dd>
                <Show when=move || !v2>
                    <dt>"Fee tier"</dt>
                    <dd>{param("feeAmount")}</dd>
                    <dt>"Position"</dt>
                    <dd>{param("tokenId")}</dd>
                </Show>
            </dl>
        </div>
    }
}
