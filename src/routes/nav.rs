use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="leading-tight flex flex-row items-center">
            <A
                exact=true
                strict_trailing_slash=false
                href="/swap"
                attr:class="text-muted-foreground px-3 py-1.5 no-underline leading-none"
            >
                "Swap"
            </A>
            <A href="/pool" attr:class="text-muted-foreground px-3 py-1.5 no-underline leading-none">
                "Pool"
            </A>
            <A href="/vote" attr:class="text-muted-foreground px-3 py-1.5 no-underline leading-none">
                "Vote"
            </A>
            <A
                href="/whatishorswap"
                attr:class="text-muted-foreground px-3 py-1.5 no-underline leading-none"
            >
                "About"
            </A>
        </nav>
    }
}
