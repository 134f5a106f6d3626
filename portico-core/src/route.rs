//! Route tables.
//!
//! A [`RouteTable`] is what an application hands to the host router: an
//! ordered list of `(path, page)` pairs. The table checks that it is well
//! formed as it is built and never drops or merges entries. Order is kept
//! because host routers may give earlier entries precedence.

use crate::{error::RouteError, page::Page};
use std::fmt;

/// Path that routers supporting fallbacks match against any URL.
pub const WILDCARD: &str = "**";

/// A non-empty, relative route path such as `"start"` or `"admin/users"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoutePath(String);

impl RoutePath {
    /// Validate a route path.
    pub fn new(path: impl Into<String>) -> Result<Self, RouteError> {
        let path = path.into();
        if path.is_empty() {
            return Err(RouteError::EmptyPath);
        }
        if path.starts_with('/') {
            return Err(RouteError::AbsolutePath(path));
        }
        Ok(Self(path))
    }

    /// The path as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true for the fallback path.
    pub fn is_wildcard(&self) -> bool {
        self.0 == WILDCARD
    }

    /// Consume the path, returning the string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for RoutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An immutable association between a path and a page.
#[derive(Debug, Clone)]
pub struct Route {
    path: RoutePath,
    page: Page,
}

impl Route {
    /// Create a route.
    pub fn new(path: RoutePath, page: Page) -> Self {
        Self { path, page }
    }

    /// The route path.
    pub fn path(&self) -> &RoutePath {
        &self.path
    }

    /// The page rendered when the path is active.
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Split the route into its parts.
    pub fn into_parts(self) -> (RoutePath, Page) {
        (self.path, self.page)
    }
}

/// An ordered list of routes with unique paths.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Build a table from `(path, page)` pairs, keeping their order.
    pub fn from_pairs<I, P>(pairs: I) -> Result<Self, RouteError>
    where
        I: IntoIterator<Item = (P, Page)>,
        P: Into<String>,
    {
        let mut table = Self::new();
        for (path, page) in pairs {
            table.push(path, page)?;
        }
        Ok(table)
    }

    /// Append a route.
    ///
    /// Fails if the path is malformed or already present.
    pub fn push(&mut self, path: impl Into<String>, page: Page) -> Result<(), RouteError> {
        let path = RoutePath::new(path)?;
        if self.contains(path.as_str()) {
            return Err(RouteError::DuplicatePath(path.into_string()));
        }
        self.routes.push(Route::new(path, page));
        Ok(())
    }

    /// Returns true if a route with this exact path exists.
    pub fn contains(&self, path: &str) -> bool {
        self.routes.iter().any(|r| r.path.as_str() == path)
    }

    /// The page registered for this exact path.
    pub fn get(&self, path: &str) -> Option<&Page> {
        self.routes
            .iter()
            .find(|r| r.path.as_str() == path)
            .map(Route::page)
    }

    /// Paths in table order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|r| r.path.as_str())
    }

    /// Iterate over routes in table order.
    pub fn iter(&self) -> std::slice::Iter<'_, Route> {
        self.routes.iter()
    }

    /// Get the number of routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Consume the table, returning the routes in order.
    pub fn into_routes(self) -> Vec<Route> {
        self.routes
    }
}

impl IntoIterator for RouteTable {
    type Item = Route;
    type IntoIter = std::vec::IntoIter<Route>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.into_iter()
    }
}

impl<'a> IntoIterator for &'a RouteTable {
    type Item = &'a Route;
    type IntoIter = std::slice::Iter<'a, Route>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        component::{Component, Markup},
        page::PageId,
    };

    struct Text(&'static str);

    impl Component for Text {
        fn selector(&self) -> &'static str {
            "text"
        }

        fn render(&self) -> Markup {
            Markup::from(self.0)
        }
    }

    fn page(id: &'static str) -> Page {
        Page::new(PageId::new(id), Text(id))
    }

    #[test]
    fn test_path_validation() {
        assert_eq!(RoutePath::new(""), Err(RouteError::EmptyPath));
        assert_eq!(
            RoutePath::new("/start"),
            Err(RouteError::AbsolutePath("/start".into()))
        );
        assert_eq!(RoutePath::new("admin/users").unwrap().as_str(), "admin/users");
        assert!(RoutePath::new(WILDCARD).unwrap().is_wildcard());
    }

    #[test]
    fn test_table_keeps_insertion_order() {
        let table = RouteTable::from_pairs([
            ("start", page("hello")),
            ("about", page("about")),
            ("admin/users", page("users")),
        ])
        .unwrap();

        assert_eq!(
            table.paths().collect::<Vec<_>>(),
            ["start", "about", "admin/users"]
        );
        assert_eq!(table.get("about").map(Page::id), Some(PageId::new("about")));
        assert!(table.get("missing").is_none());
    }

    #[test]
    fn test_duplicate_path_is_rejected() {
        let mut table = RouteTable::new();
        table.push("start", page("hello")).unwrap();

        let result = table.push("start", page("other"));
        assert_eq!(result, Err(RouteError::DuplicatePath("start".into())));
        // The original entry survives untouched.
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("start").map(Page::id), Some(PageId::new("hello")));
    }

    #[test]
    fn test_malformed_pair_aborts_table() {
        let result = RouteTable::from_pairs([("start", page("hello")), ("", page("empty"))]);
        assert!(matches!(result, Err(RouteError::EmptyPath)));
    }
}
