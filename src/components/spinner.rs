use leptos::prelude::*;

// Same drawing as the blue loader image asset. It is inlined here because the remote asset
// may not have loaded yet when a deferred page first suspends.
#[component]
pub fn LazyLoadSpinner() -> impl IntoView {
    view! {
        <svg
            class="animate-spin mx-auto my-16"
            width="94"
            height="94"
            viewBox="0 0 94 94"
            fill="none"
            xmlns="http://www.w3.org/2000/svg"
        >
            <path
                d="M92 47C92 22.1472 71.8528 2 47 2C22.1472 2 2 22.1472 2 47C2 71.8528 22.1472 92 47 92"
                stroke="#2172E5"
                stroke-width="3"
                stroke-linecap="round"
                stroke-linejoin="round"
            />
        </svg>
    }
}
