//! HashMap-based router implementation.
//!
//! Exact matching only. Table order is not kept, so use it when paths never
//! overlap.

use portico_core::{RouteResult, Router, RouterBuildError, RouterBuilder};
use std::collections::HashMap;

/// A router backed by `HashMap`.
pub struct HashMapRouter<V> {
    map: HashMap<String, V>,
}

impl<V> HashMapRouter<V> {
    /// Get the number of routes.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if the router is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<V: Send + Sync + 'static> Router<str, V> for HashMapRouter<V> {
    fn route(&self, key: &str) -> RouteResult<'_, V> {
        match self.map.get(key) {
            Some(v) => RouteResult::Matched(v),
            None => RouteResult::NotFound,
        }
    }
}

/// Builder for `HashMapRouter`.
#[derive(Clone)]
pub struct HashMapRouterBuilder<V> {
    map: HashMap<String, V>,
    allow_duplicates: bool,
}

impl<V> HashMapRouterBuilder<V> {
    /// Allow duplicate keys (later insertions override earlier ones).
    pub fn allow_duplicates(mut self) -> Self {
        self.allow_duplicates = true;
        self
    }
}

impl<V> Default for HashMapRouterBuilder<V> {
    fn default() -> Self {
        Self {
            map: HashMap::new(),
            allow_duplicates: false,
        }
    }
}

impl<V: Clone + Send + Sync + 'static> RouterBuilder<V> for HashMapRouterBuilder<V> {
    type Router = HashMapRouter<V>;

    fn insert(&mut self, path: String, value: V) -> Result<(), RouterBuildError> {
        if !self.allow_duplicates && self.map.contains_key(&path) {
            return Err(RouterBuildError::DuplicateKey(path));
        }
        self.map.insert(path, value);
        Ok(())
    }

    fn build(self) -> Result<Self::Router, RouterBuildError> {
        Ok(HashMapRouter { map: self.map })
    }
}
