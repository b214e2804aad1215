use crate::{lazy::Deferred, routes::Page};
use futures::FutureExt;
use leptos::prelude::*;
use std::{collections::HashMap, sync::LazyLock};

mod add_liquidity;
mod landing;
mod migrate;
mod not_found;
mod pool;
mod remove_liquidity;
mod swap;
mod vote;
mod what_is_horswap;

pub use add_liquidity::{AddLiquidity, RedirectDuplicateTokenIds, RedirectDuplicateTokenIdsV2};
pub use landing::Landing;
pub use migrate::{MigrateV2, MigrateV2Pair};
pub use not_found::NotFound;
pub use pool::{Pool, PoolFinder, PoolV2, PositionPage};
pub use remove_liquidity::{RemoveLiquidity, RemoveLiquidityV3};
pub use swap::Swap;
pub use vote::Vote;
pub use what_is_horswap::WhatIsHorswap;

/// Entry point of a page module.
pub type PageView = fn() -> AnyView;

// One deferred module per page. The CSR build links every page into the same wasm binary,
// so loading resolves immediately; this is the seam where split loading would plug in.
static DEFERRED: LazyLock<HashMap<Page, Deferred<PageView>>> = LazyLock::new(|| {
    Page::ALL
        .into_iter()
        .map(|page| {
            let module = Deferred::new(page.name(), move || {
                async move { Ok(entry_point(page)) }.boxed()
            });
            (page, module)
        })
        .collect()
});

pub fn deferred(page: Page) -> Option<&'static Deferred<PageView>> {
    DEFERRED.get(&page)
}

/// Renders a page directly, without going through its deferred module.
pub fn render(page: Page) -> AnyView {
    entry_point(page)()
}

fn entry_point(page: Page) -> PageView {
    match page {
        Page::Landing => || view! { <Landing /> }.into_any(),
        Page::Swap => || view! { <Swap /> }.into_any(),
        Page::Vote => || view! { <Vote /> }.into_any(),
        Page::Pool => || view! { <Pool /> }.into_any(),
        Page::PoolV2 => || view! { <PoolV2 /> }.into_any(),
        Page::PoolFinder => || view! { <PoolFinder /> }.into_any(),
        Page::PositionPage => || view! { <PositionPage /> }.into_any(),
        Page::WhatIsHorswap => || view! { <WhatIsHorswap /> }.into_any(),
        Page::RedirectDuplicateTokenIds => || view! { <RedirectDuplicateTokenIds /> }.into_any(),
        Page::RedirectDuplicateTokenIdsV2 => {
            || view! { <RedirectDuplicateTokenIdsV2 /> }.into_any()
        }
        Page::AddLiquidity => || view! { <AddLiquidity /> }.into_any(),
        Page::RemoveLiquidity => || view! { <RemoveLiquidity /> }.into_any(),
        Page::RemoveLiquidityV3 => || view! { <RemoveLiquidityV3 /> }.into_any(),
        Page::MigrateV2 => || view! { <MigrateV2 /> }.into_any(),
        Page::MigrateV2Pair => || view! { <MigrateV2Pair /> }.into_any(),
        Page::NotFound => || view! { <NotFound /> }.into_any(),
    }
}
