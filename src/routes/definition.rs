use serde::{Deserialize, Serialize};
use std::{fmt, sync::Arc};

/// Per-navigation context handed to route predicates and element producers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouterConfig {
    pub hash: Option<String>,
}

impl RouterConfig {
    /// Builds a config from the raw location hash. An empty hash or a bare `#` means none.
    pub fn from_hash(hash: impl AsRef<str>) -> Self {
        let hash = hash.as_ref();
        let hash = match hash {
            "" | "#" => None,
            hash => Some(hash.to_string()),
        };
        Self { hash }
    }

    /// Memoized derivation: hands back `previous` untouched while the hash is unchanged.
    pub fn derive(previous: Option<&Arc<Self>>, hash: impl AsRef<str>) -> Arc<Self> {
        let next = Self::from_hash(hash);
        match previous {
            Some(previous) if **previous == next => Arc::clone(previous),
            _ => Arc::new(next),
        }
    }
}

/// Every page the route table can produce.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Page {
    Landing,
    Swap,
    Vote,
    Pool,
    PoolV2,
    PoolFinder,
    PositionPage,
    WhatIsHorswap,
    RedirectDuplicateTokenIds,
    RedirectDuplicateTokenIdsV2,
    AddLiquidity,
    RemoveLiquidity,
    RemoveLiquidityV3,
    MigrateV2,
    MigrateV2Pair,
    NotFound,
}

impl Page {
    pub const ALL: [Page; 16] = [
        Page::Landing,
        Page::Swap,
        Page::Vote,
        Page::Pool,
        Page::PoolV2,
        Page::PoolFinder,
        Page::PositionPage,
        Page::WhatIsHorswap,
        Page::RedirectDuplicateTokenIds,
        Page::RedirectDuplicateTokenIdsV2,
        Page::AddLiquidity,
        Page::RemoveLiquidity,
        Page::RemoveLiquidityV3,
        Page::MigrateV2,
        Page::MigrateV2Pair,
        Page::NotFound,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Page::Landing => "Landing",
            Page::Swap => "Swap",
            Page::Vote => "Vote",
            Page::Pool => "Pool",
            Page::PoolV2 => "PoolV2",
            Page::PoolFinder => "PoolFinder",
            Page::PositionPage => "PositionPage",
            Page::WhatIsHorswap => "WhatIsHorswap",
            Page::RedirectDuplicateTokenIds => "RedirectDuplicateTokenIds",
            Page::RedirectDuplicateTokenIdsV2 => "RedirectDuplicateTokenIdsV2",
            Page::AddLiquidity => "AddLiquidity",
            Page::RemoveLiquidity => "RemoveLiquidity",
            Page::RemoveLiquidityV3 => "RemoveLiquidityV3",
            Page::MigrateV2 => "MigrateV2",
            Page::MigrateV2Pair => "MigrateV2Pair",
            Page::NotFound => "NotFound",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A client-side redirect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigate {
    pub to: String,
    /// Replace the current history entry instead of pushing a new one.
    pub replace: bool,
    /// Carry the current search string and fragment over to the new pathname.
    pub keep_query: bool,
}

impl Navigate {
    pub fn replace(to: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            replace: true,
            keep_query: false,
        }
    }

    pub fn keep_query(mut self) -> Self {
        self.keep_query = true;
        self
    }

    /// Resolves the final href given the current location's search and hash.
    pub fn target(&self, search: &str, hash: &str) -> String {
        if !self.keep_query {
            return self.to.clone();
        }

        let search = search.trim_start_matches('?');
        let hash = hash.trim_start_matches('#');

        let mut target = self.to.clone();
        if !search.is_empty() {
            target.push('?');
            target.push_str(search);
        }
        if !hash.is_empty() {
            target.push('#');
            target.push_str(hash);
        }
        target
    }
}

/// What a route renders. Producers return this instead of a view so the table stays
/// independent of the DOM.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Element {
    #[default]
    Empty,
    Page(Page),
    Deferred(Page),
    Navigate(Navigate),
}

impl Element {
    pub fn redirect(to: impl Into<String>) -> Self {
        Element::Navigate(Navigate::replace(to))
    }

    pub fn page(&self) -> Option<Page> {
        match self {
            Element::Page(page) | Element::Deferred(page) => Some(*page),
            _ => None,
        }
    }

    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            Element::Navigate(navigate) => Some(&navigate.to),
            _ => None,
        }
    }
}

pub type Predicate = Arc<dyn Fn(&RouterConfig) -> bool + Send + Sync>;
pub type Producer = Arc<dyn Fn(&RouterConfig) -> Element + Send + Sync>;

#[derive(Clone)]
pub struct RouteDefinition {
    pub path: String,
    pub nested_paths: Vec<String>,
    pub enabled: Predicate,
    pub get_element: Producer,
}

impl RouteDefinition {
    pub fn is_enabled(&self, config: &RouterConfig) -> bool {
        (self.enabled)(config)
    }

    pub fn element(&self, config: &RouterConfig) -> Element {
        (self.get_element)(config)
    }
}

impl fmt::Debug for RouteDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteDefinition")
            .field("path", &self.path)
            .field("nested_paths", &self.nested_paths)
            .finish_non_exhaustive()
    }
}

/// A route definition with any subset of its fields set.
#[derive(Clone, Default)]
pub struct PartialRoute {
    pub path: Option<String>,
    pub nested_paths: Option<Vec<String>>,
    pub enabled: Option<Predicate>,
    pub get_element: Option<Producer>,
}

impl PartialRoute {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn nested_paths<I, S>(mut self, nested_paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.nested_paths = Some(nested_paths.into_iter().map(Into::into).collect());
        self
    }

    pub fn enabled(mut self, enabled: impl Fn(&RouterConfig) -> bool + Send + Sync + 'static) -> Self {
        self.enabled = Some(Arc::new(enabled));
        self
    }

    pub fn element(
        mut self,
        get_element: impl Fn(&RouterConfig) -> Element + Send + Sync + 'static,
    ) -> Self {
        self.get_element = Some(Arc::new(get_element));
        self
    }
}

// Assigns the defaults to the route definition.
pub fn create_route_definition(route: PartialRoute) -> RouteDefinition {
    RouteDefinition {
        path: route.path.unwrap_or_else(|| "/".to_string()),
        nested_paths: route.nested_paths.unwrap_or_default(),
        enabled: route.enabled.unwrap_or_else(|| Arc::new(|_| true)),
        get_element: route.get_element.unwrap_or_else(|| Arc::new(|_| Element::Empty)),
    }
}
