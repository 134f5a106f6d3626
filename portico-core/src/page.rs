//! Pages addressable by a route path.

use crate::{component::Component, navigation::NavigationId};
use std::{fmt, sync::Arc};

/// Identifies a [`Page`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(&'static str);

impl PageId {
    /// Create a page identifier.
    pub const fn new(id: &'static str) -> Self {
        Self(id)
    }

    /// The identifier as a string.
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// A unit of content addressable by a route path.
///
/// Cloning a page is cheap; the component is shared.
#[derive(Clone)]
pub struct Page {
    id: PageId,
    component: Arc<dyn Component>,
    navigation: Option<NavigationId>,
}

impl Page {
    /// Create a page rendered by `component`.
    pub fn new<C: Component + 'static>(id: PageId, component: C) -> Self {
        Self::from_shared(id, Arc::new(component))
    }

    /// Create a page from an already shared component.
    pub fn from_shared(id: PageId, component: Arc<dyn Component>) -> Self {
        Self {
            id,
            component,
            navigation: None,
        }
    }

    /// The page identifier.
    pub fn id(&self) -> PageId {
        self.id
    }

    /// The component that renders this page.
    pub fn component(&self) -> &Arc<dyn Component> {
        &self.component
    }

    /// The navigation context that produced this page, if any.
    ///
    /// This names the navigation; the page never owns navigation state.
    pub fn navigation(&self) -> Option<NavigationId> {
        self.navigation
    }

    /// Return a copy of this page attributed to `navigation`.
    pub fn with_navigation(mut self, navigation: NavigationId) -> Self {
        self.navigation = Some(navigation);
        self
    }

    /// Returns true if both pages share the same identifier and component.
    pub fn same_as(&self, other: &Page) -> bool {
        self.id == other.id && Arc::ptr_eq(&self.component, &other.component)
    }
}

impl fmt::Debug for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Page")
            .field("id", &self.id)
            .field("component", &self.component.selector())
            .field("navigation", &self.navigation)
            .finish()
    }
}
