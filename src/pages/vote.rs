use crate::routes::use_route_params;
use leptos::prelude::*;
use tracing::info;

/// Governance section. Everything under `/vote/` lands here; the remainder of the path
/// selects the sub-view.
#[component]
pub fn Vote() -> impl IntoView {
    info!("rendering <Vote/>");

    let params = use_route_params();
    let section = move || params.get().get("*").unwrap_or_default().to_string();

    view! {
        <div class="space-y-2">
            <h2 class="text-2xl font-bold">"Vote"</h2>
            {move || match section().as_str() {
                "" => view! { <p>"Proposals"</p> }.into_any(),
                "create-proposal" => view! { <p>"Create a proposal"</p> }.into_any(),
                id => view! { <p>"Proposal " {id.to_string()}</p> }.into_any(),
            }}
        </div>
    }
}
