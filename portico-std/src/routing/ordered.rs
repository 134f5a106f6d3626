//! Ordered router with first-match-wins precedence.
//!
//! This is the default backend of [`MemoryHost`](crate::MemoryHost). It keeps
//! routes in table order and returns the first entry that matches, which is
//! what the route table's ordering promises.

use portico_core::{RouteResult, Router, RouterBuildError, RouterBuilder, WILDCARD};

/// A router that scans routes in insertion order.
///
/// A route whose path is [`WILDCARD`] matches any key. Because the first match
/// wins, a wildcard shadows every route registered after it.
pub struct OrderedRouter<V> {
    routes: Vec<(String, V)>,
}

impl<V> OrderedRouter<V> {
    /// Get the number of routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Check if the router is empty.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Paths in precedence order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|(path, _)| path.as_str())
    }
}

impl<V: Send + Sync + 'static> Router<str, V> for OrderedRouter<V> {
    fn route(&self, key: &str) -> RouteResult<'_, V> {
        self.routes
            .iter()
            .find(|(path, _)| path == key || path == WILDCARD)
            .map_or(RouteResult::NotFound, |(_, v)| RouteResult::Matched(v))
    }
}

/// Builder for `OrderedRouter`.
#[derive(Clone)]
pub struct OrderedRouterBuilder<V> {
    routes: Vec<(String, V)>,
    allow_duplicates: bool,
}

impl<V> OrderedRouterBuilder<V> {
    /// Keep duplicate paths; the earlier entry shadows the later one.
    pub fn allow_duplicates(mut self) -> Self {
        self.allow_duplicates = true;
        self
    }
}

impl<V> Default for OrderedRouterBuilder<V> {
    fn default() -> Self {
        Self {
            routes: Vec::new(),
            allow_duplicates: false,
        }
    }
}

impl<V: Clone + Send + Sync + 'static> RouterBuilder<V> for OrderedRouterBuilder<V> {
    type Router = OrderedRouter<V>;

    fn insert(&mut self, path: String, value: V) -> Result<(), RouterBuildError> {
        if !self.allow_duplicates && self.routes.iter().any(|(p, _)| *p == path) {
            return Err(RouterBuildError::DuplicateKey(path));
        }
        self.routes.push((path, value));
        Ok(())
    }

    fn build(self) -> Result<Self::Router, RouterBuildError> {
        Ok(OrderedRouter {
            routes: self.routes,
        })
    }
}
