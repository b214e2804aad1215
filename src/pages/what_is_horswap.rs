use crate::constants::APP_NAME;
use leptos::prelude::*;
use tracing::info;

#[component]
pub fn WhatIsHorswap() -> impl IntoView {
    info!("rendering <WhatIsHorswap/>");

    view! {
        <div class="max-w-2xl mx-auto space-y-4">
            <h2 class="text-2xl font-bold">"What is " {APP_NAME} "?"</h2>
            <ul class="list-disc list-inside space-y-2">
                <li>
                    <strong>"Community interface: "</strong>
                    <span>"An independent front-end for the same on-chain exchange contracts."</span>
                </li>
                <li>
                    <strong>"No tracking: "</strong>
                    <span>"The interface keeps no analytics and stores nothing off-chain."</span>
                </li>
            </ul>
        </div>
    }
}
