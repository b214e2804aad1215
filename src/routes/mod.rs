mod definition;
mod matcher;
pub mod nav;
mod outlet;
mod table;

pub use definition::{
    create_route_definition, Element, Navigate, Page, PartialRoute, Predicate, Producer,
    RouteDefinition, RouterConfig,
};
pub use matcher::{
    explode_optional_segments, flatten_routes, join_paths, match_routes, Branch, Params,
    PathPattern, RouteMatch, RouteTable,
};
pub use outlet::{use_route_params, use_router_config, NavigateTo, RouteOutlet, RouteParams};
pub use table::{route_definitions, route_table, routes};
