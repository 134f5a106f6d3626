//! Matchit-based router implementation.
//!
//! Supports parameter and catch-all segments (`users/{id}`, `files/{*rest}`).
//! Route table paths are relative, matchit's are absolute; a leading `/` is
//! added on both sides.

use ::matchit::{Match, Router as InnerRouter};
use portico_core::{RouteResult, Router, RouterBuildError, RouterBuilder};
use std::borrow::Cow;

fn absolute(path: &str) -> Cow<'_, str> {
    if path.starts_with('/') {
        Cow::Borrowed(path)
    } else {
        Cow::Owned(format!("/{path}"))
    }
}

/// A router based on `matchit`.
pub struct MatchitRouter<V> {
    router: InnerRouter<V>,
}

impl<V: Send + Sync + 'static> Router<str, V> for MatchitRouter<V> {
    fn route(&self, key: &str) -> RouteResult<'_, V> {
        match self.router.at(&absolute(key)) {
            Ok(Match { value, .. }) => RouteResult::Matched(value),
            Err(_) => RouteResult::NotFound,
        }
    }
}

/// Builder for MatchitRouter.
#[derive(Clone)]
pub struct MatchitRouterBuilder<V> {
    router: InnerRouter<V>,
}

impl<V> Default for MatchitRouterBuilder<V> {
    fn default() -> Self {
        Self {
            router: InnerRouter::new(),
        }
    }
}

impl<V: Clone + Send + Sync + 'static> RouterBuilder<V> for MatchitRouterBuilder<V> {
    type Router = MatchitRouter<V>;

    fn insert(&mut self, path: String, value: V) -> Result<(), RouterBuildError> {
        let route = absolute(&path).into_owned();
        self.router
            .insert(route, value)
            // matchit errors if the route conflicts or is malformed
            .map_err(|e| RouterBuildError::DuplicateKey(format!("{path}: {e}")))
    }

    fn build(self) -> Result<Self::Router, RouterBuildError> {
        Ok(MatchitRouter {
            router: self.router,
        })
    }
}
