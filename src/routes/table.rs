use super::{
    definition::{
        create_route_definition, Element, Navigate, Page, PartialRoute, RouteDefinition,
    },
    matcher::RouteTable,
};
use std::sync::LazyLock;

static ROUTE_TABLE: LazyLock<RouteTable> = LazyLock::new(|| RouteTable::new(route_definitions()));

/// The ordered route list, built once per process.
pub fn routes() -> &'static [RouteDefinition] {
    ROUTE_TABLE.routes()
}

pub fn route_table() -> &'static RouteTable {
    &ROUTE_TABLE
}

fn page(path: &str, page: Page) -> RouteDefinition {
    create_route_definition(
        PartialRoute::new()
            .path(path)
            .element(move |_| Element::Deferred(page)),
    )
}

fn redirect(path: &str, to: &'static str) -> RouteDefinition {
    create_route_definition(
        PartialRoute::new()
            .path(path)
            .element(move |_| Element::redirect(to)),
    )
}

// High-traffic pages (index and /swap) are linked eagerly; everything else is deferred.
//
// NOTE: the catch-all sits before /not-found on purpose. Matching is ranked, so the static
// /not-found still wins over `*` and is reachable both directly and through the redirect.
pub fn route_definitions() -> Vec<RouteDefinition> {
    vec![
        create_route_definition(PartialRoute::new().path("/").element(|config| {
            match &config.hash {
                Some(hash) => Element::redirect(hash.replacen('#', "", 1)),
                None => Element::Page(Page::Landing),
            }
        })),
        page("/vote/*", Page::Vote),
        redirect("/create-proposal", "/vote/create-proposal"),
        create_route_definition(
            PartialRoute::new()
                .path("/send")
                .element(|_| Element::Navigate(Navigate::replace("/swap").keep_query())),
        ),
        create_route_definition(
            PartialRoute::new()
                .path("/swap")
                .element(|_| Element::Page(Page::Swap)),
        ),
        page("/pool/v2/find", Page::PoolFinder),
        page("/pool/v2", Page::PoolV2),
        page("/pool", Page::Pool),
        page("/pool/:tokenId", Page::PositionPage),
        page("/pools/v2/find", Page::PoolFinder),
        page("/pools/v2", Page::PoolV2),
        page("/pools", Page::Pool),
        page("/pools/:tokenId", Page::PositionPage),
        page("/whatishorswap", Page::WhatIsHorswap),
        create_route_definition(
            PartialRoute::new()
                .path("/add/v2")
                .nested_paths([":currencyIdA", ":currencyIdA/:currencyIdB"])
                .element(|_| Element::Deferred(Page::RedirectDuplicateTokenIdsV2)),
        ),
        create_route_definition(
            PartialRoute::new()
                .path("/add")
                .nested_paths([
                    ":currencyIdA",
                    ":currencyIdA/:currencyIdB",
                    ":currencyIdA/:currencyIdB/:feeAmount",
                ])
                .element(|_| Element::Deferred(Page::RedirectDuplicateTokenIds)),
        ),
        create_route_definition(
            PartialRoute::new()
                .path("/increase")
                .nested_paths([
                    ":currencyIdA",
                    ":currencyIdA/:currencyIdB",
                    ":currencyIdA/:currencyIdB/:feeAmount",
                    ":currencyIdA/:currencyIdB/:feeAmount/:tokenId",
                ])
                .element(|_| Element::Deferred(Page::AddLiquidity)),
        ),
        page("/remove/v2/:currencyIdA/:currencyIdB", Page::RemoveLiquidity),
        page("/remove/:tokenId", Page::RemoveLiquidityV3),
        page("/migrate/v2", Page::MigrateV2),
        page("/migrate/v2/:address", Page::MigrateV2Pair),
        redirect("*", "/not-found"),
        page("/not-found", Page::NotFound),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::definition::RouterConfig;

    fn resolve(pathname: &str, hash: &str) -> Element {
        route_table()
            .match_path(&RouterConfig::from_hash(hash), pathname)
            .map(|m| m.element)
            .unwrap_or_default()
    }

    #[test]
    fn table_order_is_preserved() {
        let paths: Vec<&str> = routes().iter().map(|r| r.path.as_str()).collect();
        assert_eq!(paths.first(), Some(&"/"));
        assert_eq!(paths.len(), 23);
        let catch_all = paths.iter().position(|p| *p == "*").unwrap();
        let not_found = paths.iter().position(|p| *p == "/not-found").unwrap();
        assert_eq!(not_found, catch_all + 1);
        assert_eq!(not_found, paths.len() - 1);
    }

    #[test]
    fn every_route_is_enabled_by_default() {
        let config = RouterConfig::default();
        assert!(routes().iter().all(|route| route.is_enabled(&config)));
    }

    #[test]
    fn index_redirects_to_fragment() {
        assert_eq!(resolve("/", "#/vote").redirect_target(), Some("/vote"));
        assert_eq!(resolve("/", "").page(), Some(Page::Landing));
        assert_eq!(resolve("/", ""), Element::Page(Page::Landing));
    }

    #[test]
    fn legacy_redirects() {
        assert_eq!(resolve("/send", "").redirect_target(), Some("/swap"));
        assert_eq!(
            resolve("/create-proposal", "").redirect_target(),
            Some("/vote/create-proposal")
        );
    }

    #[test]
    fn eager_and_deferred_pages() {
        assert_eq!(resolve("/swap", ""), Element::Page(Page::Swap));
        assert_eq!(resolve("/vote/2", ""), Element::Deferred(Page::Vote));
        assert_eq!(resolve("/pools/v2/find", ""), Element::Deferred(Page::PoolFinder));
    }

    #[test]
    fn unknown_paths_end_on_not_found() {
        assert_eq!(resolve("/xyz123", "").redirect_target(), Some("/not-found"));
        assert_eq!(resolve("/not-found", ""), Element::Deferred(Page::NotFound));
    }
}
