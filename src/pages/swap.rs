use leptos::prelude::*;
use leptos_router::hooks::use_query_map;
use tracing::info;

#[component]
pub fn Swap() -> impl IntoView {
    info!("rendering <Swap/>");

    let query = use_query_map();
    let input_currency = move || query.read().get("inputCurrency");
    let output_currency = move || query.read().get("outputCurrency");

    view! {
        <div class="max-w-md mx-auto space-y-2">
            <h2 class="text-2xl font-bold">"Swap"</h2>
            <p>"From: " {move || input_currency().unwrap_or_else(|| "select a token".to_string())}</p>
            <p>"To: " {move || output_currency().unwrap_or_else(|| "select a token".to_string())}</p>
        </div>
    }
}
