use super::{
    definition::{Element, Navigate, Page, RouterConfig},
    matcher::Params,
    table::route_table,
};
use crate::{components::LazyLoadSpinner, pages};
use leptos::prelude::*;
use leptos_router::{components::Redirect, hooks::use_location, NavigateOptions};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Parameters of the route currently rendered by `<RouteOutlet/>`.
#[derive(Copy, Clone)]
pub struct RouteParams(pub Memo<Params>);

/// Convenience hook which organizes the router configuration into a single object.
///
/// The returned memo keeps handing out the same `Arc` until the location hash changes.
pub fn use_router_config() -> Memo<Arc<RouterConfig>> {
    let location = use_location();

    Memo::new(move |previous: Option<&Arc<RouterConfig>>| {
        RouterConfig::derive(previous, location.hash.get())
    })
}

pub fn use_route_params() -> Memo<Params> {
    use_context::<RouteParams>()
        .expect("route params context missing!")
        .0
}

/// Matches the current location against the route table and renders the result.
#[component]
pub fn RouteOutlet() -> impl IntoView {
    info!("rendering <RouteOutlet/>");

    let location = use_location();
    let config = use_router_config();

    let matched = Memo::new(move |_| {
        let pathname = location.pathname.get();
        let matched = route_table().match_path(&config.get(), &pathname);
        if matched.is_none() {
            warn!(pathname, "no route matched");
        }
        matched
    });

    let params = Memo::new(move |_| {
        matched
            .get()
            .map(|matched| matched.params)
            .unwrap_or_default()
    });
    provide_context(RouteParams(params));

    let element = Memo::new(move |_| {
        matched
            .get()
            .map(|matched| matched.element)
            .unwrap_or_default()
    });

    move || {
        let element = element.get();
        debug!(?element, "rendering route element");
        render_element(element)
    }
}

fn render_element(element: Element) -> AnyView {
    match element {
        Element::Empty => ().into_any(),
        Element::Page(page) => pages::render(page),
        Element::Deferred(page) => view! { <DeferredPage page /> }.into_any(),
        Element::Navigate(navigate) => view! { <NavigateTo navigate /> }.into_any(),
    }
}

/// Renders a page behind the loading spinner until its module is loaded. Load failures
/// are rendered as errors and caught by the nearest `<ErrorBoundary/>`.
#[component]
fn DeferredPage(page: Page) -> impl IntoView {
    let Some(module) = pages::deferred(page) else {
        warn!(%page, "no deferred module registered, rendering eagerly");
        return pages::render(page);
    };

    // Already loaded: skip the fallback entirely.
    if let Some(render) = module.get() {
        return render();
    }

    let page_view = LocalResource::new(move || module.load());

    view! {
        <Suspense fallback=|| view! { <LazyLoadSpinner /> }>
            {move || Suspend::new(async move { page_view.await.map(|render| render()) })}
        </Suspense>
    }
    .into_any()
}

#[component]
pub fn NavigateTo(navigate: Navigate) -> impl IntoView {
    let location = use_location();
    let target = navigate.target(
        &location.search.get_untracked(),
        &location.hash.get_untracked(),
    );
    info!(to = %target, "redirecting");

    view! {
        <Redirect
            path=target
            options=NavigateOptions {
                replace: navigate.replace,
                ..Default::default()
            }
        />
    }
}
