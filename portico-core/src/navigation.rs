//! The navigation capability.

use crate::{component::Component, page::PageId};
use std::fmt;

/// Identifies a navigation implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NavigationId(&'static str);

impl NavigationId {
    /// Create a navigation identifier.
    pub const fn new(id: &'static str) -> Self {
        Self(id)
    }

    /// The identifier as a string.
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for NavigationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// A navigation UI.
///
/// The host sets the active page before rendering. The reference is a
/// [`PageId`] resolved against the host router; a navigation component never
/// owns the page it points at. It may be `None` when no route is active, and
/// implementations must render in that state.
pub trait NavigationComponent: Component {
    /// The currently active page.
    fn page(&self) -> Option<PageId>;

    /// Point the navigation at a page.
    fn set_page(&mut self, page: Option<PageId>);
}

/// Describes a navigation implementation the host may instantiate.
///
/// Creating a descriptor never creates the component. The host calls
/// [`NavigationImpl::instantiate`] once the factory has selected it.
#[derive(Clone, Copy)]
pub struct NavigationImpl {
    id: NavigationId,
    construct: fn() -> Box<dyn NavigationComponent>,
}

impl NavigationImpl {
    /// Describe an implementation built by `construct`.
    pub const fn new(id: NavigationId, construct: fn() -> Box<dyn NavigationComponent>) -> Self {
        Self { id, construct }
    }

    /// The implementation identifier.
    pub const fn id(&self) -> NavigationId {
        self.id
    }

    /// Create a fresh instance of the implementation.
    pub fn instantiate(&self) -> Box<dyn NavigationComponent> {
        (self.construct)()
    }
}

impl fmt::Debug for NavigationImpl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationImpl")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}
