//! Ranked path matching over a route table.
//!
//! Every enabled route contributes one branch for its own path and one per nested path.
//! Branches are ranked by specificity (static segments beat parameters, parameters beat
//! splats) and the first branch that matches the pathname wins. Ties keep table order.

use super::definition::{Element, RouteDefinition, RouterConfig};
use crate::error::Error;
use std::borrow::Cow;
use tracing::{trace, warn};

const STATIC_SEGMENT_VALUE: i32 = 10;
const DYNAMIC_SEGMENT_VALUE: i32 = 3;
const EMPTY_SEGMENT_VALUE: i32 = 1;
const SPLAT_PENALTY: i32 = -2;

/// Parameters extracted from a matched path, in pattern order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Params(Vec<(String, String)>);

impl Params {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.push((name.into(), value.into()));
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    Static(String),
    Param(String),
    Splat,
}

/// A single, fully expanded path pattern such as `/pool/:tokenId` or `/vote/*`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    pub fn parse(pattern: &str) -> Result<Self, Error> {
        let pieces: Vec<&str> = pattern.split('/').filter(|s| !s.is_empty()).collect();
        let mut segments = Vec::with_capacity(pieces.len());

        for (i, piece) in pieces.iter().enumerate() {
            let segment = if *piece == "*" {
                if i + 1 != pieces.len() {
                    return Err(Error::invalid_pattern(
                        pattern,
                        "'*' is only allowed as the last segment",
                    ));
                }
                Segment::Splat
            } else if let Some(name) = piece.strip_prefix(':') {
                if name.is_empty() {
                    return Err(Error::invalid_pattern(pattern, "parameter without a name"));
                }
                if name.ends_with('?') {
                    return Err(Error::invalid_pattern(
                        pattern,
                        "optional segments must be expanded first",
                    ));
                }
                Segment::Param(name.to_string())
            } else {
                Segment::Static(piece.to_string())
            };
            segments.push(segment);
        }

        Ok(Self {
            raw: normalize(pattern),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Specificity score; higher ranks first.
    pub fn score(&self) -> i32 {
        // "/pool" splits into ["", "pool"] and "/" into ["", ""]; the empty pieces count too.
        let empties: i32 = if self.segments.is_empty() { 2 } else { 1 };
        let mut score = self.segments.len() as i32 + empties + empties * EMPTY_SEGMENT_VALUE;
        for segment in &self.segments {
            score += match segment {
                Segment::Static(_) => STATIC_SEGMENT_VALUE,
                Segment::Param(_) => DYNAMIC_SEGMENT_VALUE,
                Segment::Splat => SPLAT_PENALTY,
            };
        }
        score
    }

    /// Matches a pathname, returning the extracted parameters.
    pub fn matches(&self, pathname: &str) -> Option<Params> {
        let pieces: Vec<&str> = pathname.split('/').filter(|s| !s.is_empty()).collect();
        let mut params = Params::default();

        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Splat => {
                    let rest = pieces[i.min(pieces.len())..].join("/");
                    params.insert("*", decode(&rest));
                    return Some(params);
                }
                Segment::Static(expected) => {
                    let piece = pieces.get(i)?;
                    if !piece.eq_ignore_ascii_case(expected) {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    let piece = pieces.get(i)?;
                    params.insert(name.clone(), decode(piece));
                }
            }
        }

        (pieces.len() == self.segments.len()).then_some(params)
    }
}

fn normalize(path: &str) -> String {
    let joined = path
        .split('/')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/");
    format!("/{joined}")
}

fn decode(value: &str) -> String {
    match urlencoding::decode(value) {
        Ok(decoded) => decoded.into_owned(),
        Err(error) => {
            warn!(value, %error, "path segment is not valid percent-encoded UTF-8");
            value.to_string()
        }
    }
}

/// Joins a parent path and a nested suffix with exactly one `/` between them.
pub fn join_paths(parent: &str, nested: &str) -> String {
    let parent = parent.trim_end_matches('/');
    let nested = nested.trim_start_matches('/');
    if nested.is_empty() {
        return if parent.is_empty() { "/".to_string() } else { parent.to_string() };
    }
    format!("{parent}/{nested}")
}

/// Expands optional segments (`:name?` or `static?`) into every concrete variant.
/// `/a/:b?` becomes `/a` and `/a/:b`.
pub fn explode_optional_segments(path: &str) -> Vec<String> {
    let pieces: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    let mut variants: Vec<Vec<Cow<'_, str>>> = vec![Vec::new()];

    for piece in pieces {
        match piece.strip_suffix('?') {
            Some(required) => {
                let with: Vec<_> = variants
                    .iter()
                    .cloned()
                    .map(|mut v| {
                        v.push(Cow::Borrowed(required));
                        v
                    })
                    .collect();
                variants.extend(with);
            }
            None => variants.iter_mut().for_each(|v| v.push(Cow::Borrowed(piece))),
        }
    }

    let mut exploded: Vec<String> = variants
        .into_iter()
        .map(|v| format!("/{}", v.join("/")))
        .collect();
    exploded.sort_by_key(|v| v.matches('/').count());
    exploded.dedup();
    exploded
}

/// One matchable pattern contributed by a route.
#[derive(Clone, Debug)]
pub struct Branch {
    pub route_index: usize,
    pub pattern: PathPattern,
    score: i32,
}

/// Flattens routes into branches, ranked most specific first.
pub fn flatten_routes(routes: &[RouteDefinition]) -> Vec<Branch> {
    let mut branches = Vec::new();

    for (route_index, route) in routes.iter().enumerate() {
        let paths = std::iter::once(route.path.clone()).chain(
            route
                .nested_paths
                .iter()
                .map(|nested| join_paths(&route.path, nested)),
        );

        for path in paths {
            for variant in explode_optional_segments(&path) {
                match PathPattern::parse(&variant) {
                    Ok(pattern) => branches.push(Branch {
                        route_index,
                        score: pattern.score(),
                        pattern,
                    }),
                    Err(error) => warn!(%error, "skipping unmatchable route"),
                }
            }
        }
    }

    // stable sort: equal scores keep table order
    branches.sort_by(|a, b| b.score.cmp(&a.score));
    branches
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteMatch {
    pub route_index: usize,
    pub pattern: String,
    pub params: Params,
    pub element: Element,
}

/// Routes plus their ranked branches, computed once.
#[derive(Clone, Debug)]
pub struct RouteTable {
    routes: Vec<RouteDefinition>,
    branches: Vec<Branch>,
}

impl RouteTable {
    pub fn new(routes: Vec<RouteDefinition>) -> Self {
        let branches = flatten_routes(&routes);
        Self { routes, branches }
    }

    pub fn routes(&self) -> &[RouteDefinition] {
        &self.routes
    }

    pub fn branches(&self) -> &[Branch] {
        &self.branches
    }

    pub fn match_path(&self, config: &RouterConfig, pathname: &str) -> Option<RouteMatch> {
        match_branches(&self.routes, &self.branches, config, pathname)
    }
}

/// Finds the route that renders `pathname` under `config`.
pub fn match_routes(
    routes: &[RouteDefinition],
    config: &RouterConfig,
    pathname: &str,
) -> Option<RouteMatch> {
    let branches = flatten_routes(routes);
    match_branches(routes, &branches, config, pathname)
}

fn match_branches(
    routes: &[RouteDefinition],
    branches: &[Branch],
    config: &RouterConfig,
    pathname: &str,
) -> Option<RouteMatch> {
    branches.iter().find_map(|branch| {
        let route = &routes[branch.route_index];
        if !route.is_enabled(config) {
            return None;
        }
        let params = branch.pattern.matches(pathname)?;
        trace!(pathname, pattern = branch.pattern.as_str(), "route matched");

        Some(RouteMatch {
            route_index: branch.route_index,
            pattern: branch.pattern.as_str().to_string(),
            params,
            element: route.element(config),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::definition::{create_route_definition, Page, PartialRoute};

    fn pattern(path: &str) -> PathPattern {
        PathPattern::parse(path).unwrap()
    }

    #[test]
    fn static_segments_ignore_case_and_trailing_slash() {
        let p = pattern("/whatishorswap");
        assert!(p.matches("/WhatIsHorswap/").is_some());
        assert!(p.matches("//whatishorswap").is_some());
        assert!(p.matches("/whatishorswap/more").is_none());
    }

    #[test]
    fn params_are_extracted_and_decoded() {
        let p = pattern("/remove/v2/:currencyIdA/:currencyIdB");
        let params = p.matches("/remove/v2/ETH/0xAbC%20").unwrap();
        assert_eq!(params.get("currencyIdA"), Some("ETH"));
        assert_eq!(params.get("currencyIdB"), Some("0xAbC "));
        assert!(p.matches("/remove/v2/ETH").is_none());
    }

    #[test]
    fn splat_matches_any_remainder() {
        let p = pattern("/vote/*");
        assert_eq!(p.matches("/vote").unwrap().get("*"), Some(""));
        assert_eq!(p.matches("/vote/1/5").unwrap().get("*"), Some("1/5"));
        assert!(p.matches("/voter").is_none());

        let all = pattern("*");
        assert_eq!(all.as_str(), "/*");
        assert_eq!(all.matches("/xyz123").unwrap().get("*"), Some("xyz123"));
        assert!(all.matches("/").is_some());
    }

    #[test]
    fn root_matches_only_root() {
        let root = pattern("/");
        assert!(root.matches("/").unwrap().is_empty());
        assert!(root.matches("").is_some());
        assert!(root.matches("/swap").is_none());
    }

    #[test]
    fn invalid_patterns_are_rejected() {
        assert!(matches!(
            PathPattern::parse("/a/*/b"),
            Err(Error::InvalidPattern { .. })
        ));
        assert!(PathPattern::parse("/a/:").is_err());
        assert!(PathPattern::parse("/a/:b?").is_err());
    }

    #[test]
    fn scores_rank_specific_first() {
        assert!(pattern("/not-found").score() > pattern("*").score());
        assert!(pattern("/pool/v2").score() > pattern("/pool/:tokenId").score());
        assert!(pattern("/pool/:tokenId").score() > pattern("/pool").score());
        assert!(pattern("/").score() > pattern("*").score());
        assert!(pattern("/vote/create-proposal").score() > pattern("/vote/*").score());
    }

    #[test]
    fn optional_segments_explode_into_prefixes() {
        assert_eq!(
            explode_optional_segments("/migrate/v2/:address?"),
            vec!["/migrate/v2", "/migrate/v2/:address"]
        );
        assert_eq!(explode_optional_segments("/swap"), vec!["/swap"]);
    }

    #[test]
    fn join_paths_uses_single_separator() {
        assert_eq!(join_paths("/add", ":currencyIdA"), "/add/:currencyIdA");
        assert_eq!(join_paths("/add/", "/:currencyIdA"), "/add/:currencyIdA");
        assert_eq!(join_paths("/", ":id"), "/:id");
        assert_eq!(join_paths("/", ""), "/");
    }

    #[test]
    fn nested_paths_and_disabled_routes() {
        let routes = vec![
            create_route_definition(
                PartialRoute::new()
                    .path("/add")
                    .nested_paths([":currencyIdA", ":currencyIdA/:currencyIdB"])
                    .element(|_| Element::Page(Page::AddLiquidity)),
            ),
            create_route_definition(
                PartialRoute::new()
                    .path("/secret")
                    .enabled(|config| config.hash.is_some())
                    .element(|_| Element::Page(Page::Vote)),
            ),
            create_route_definition(PartialRoute::new().path("*")),
        ];
        let config = RouterConfig::default();

        let m = match_routes(&routes, &config, "/add/ETH/DAI").unwrap();
        assert_eq!(m.route_index, 0);
        assert_eq!(m.pattern, "/add/:currencyIdA/:currencyIdB");
        assert_eq!(m.params.len(), 2);

        assert_eq!(match_routes(&routes, &config, "/add").unwrap().route_index, 0);
        assert_eq!(match_routes(&routes, &config, "/add/a/b/c").unwrap().route_index, 2);

        let m = match_routes(&routes, &config, "/secret").unwrap();
        assert_eq!(m.route_index, 2);
        assert_eq!(m.element, Element::Empty);

        let hashed = RouterConfig::from_hash("#on");
        assert_eq!(match_routes(&routes, &hashed, "/secret").unwrap().route_index, 1);
    }

    #[test]
    fn ties_keep_table_order() {
        let routes = vec![
            create_route_definition(
                PartialRoute::new()
                    .path("/:first")
                    .element(|_| Element::Page(Page::Pool)),
            ),
            create_route_definition(
                PartialRoute::new()
                    .path("/:second")
                    .element(|_| Element::Page(Page::Swap)),
            ),
        ];
        let m = match_routes(&routes, &RouterConfig::default(), "/x").unwrap();
        assert_eq!(m.element, Element::Page(Page::Pool));
        assert_eq!(m.params.get("first"), Some("x"));
    }

    #[test]
    fn nothing_matches_without_catch_all() {
        let routes = vec![create_route_definition(PartialRoute::new().path("/swap"))];
        assert!(match_routes(&routes, &RouterConfig::default(), "/pool").is_none());
    }
}
