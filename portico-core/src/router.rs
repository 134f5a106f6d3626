//! Routing abstraction layer.
//!
//! Hosts match paths with a router of their choosing. This module provides a
//! trait-based abstraction so that different backends (ordered list,
//! HashMap, matchit) can be swapped without changing the composition root.

use crate::error::RouterBuildError;

/// Result of a routing lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteResult<'a, V> {
    /// Route matched, contains the value.
    Matched(&'a V),
    /// No matching route found.
    NotFound,
}

impl<'a, V> RouteResult<'a, V> {
    /// Returns true if the route was matched.
    pub fn is_matched(&self) -> bool {
        matches!(self, RouteResult::Matched(_))
    }

    /// Returns the matched value, if any.
    pub fn matched(self) -> Option<&'a V> {
        match self {
            RouteResult::Matched(v) => Some(v),
            RouteResult::NotFound => None,
        }
    }
}

/// A router that maps keys to values.
pub trait Router<K: ?Sized, V>: Send + Sync + 'static {
    /// Look up a value by key.
    fn route(&self, key: &K) -> RouteResult<'_, V>;

    /// Check if a key exists in the router.
    fn contains(&self, key: &K) -> bool {
        self.route(key).is_matched()
    }
}

/// Builder for constructing path routers.
///
/// Paths are inserted in table order. Backends that care about precedence
/// must preserve it. Hosts clone the builder to stage a batch of inserts, so
/// a rejected batch leaves the original untouched.
pub trait RouterBuilder<V>: Default + Clone + Send {
    /// The router type this builder produces.
    type Router: Router<str, V>;

    /// Insert a path and its value.
    ///
    /// Returns an error if the path already exists and the backend rejects
    /// duplicates.
    fn insert(&mut self, path: String, value: V) -> Result<(), RouterBuildError>;

    /// Build the router, consuming the builder.
    fn build(self) -> Result<Self::Router, RouterBuildError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_result_helpers() {
        let val = 42;
        let matched = RouteResult::Matched(&val);
        let not_found: RouteResult<i32> = RouteResult::NotFound;

        assert!(matched.is_matched());
        assert!(!not_found.is_matched());

        assert_eq!(matched.matched(), Some(&42));
        assert_eq!(not_found.matched(), None);
    }
}
