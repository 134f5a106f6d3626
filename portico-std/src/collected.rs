//! Distributed navigation registrations.
//!
//! Implementations can be submitted from any crate linked into the binary
//! and gathered at composition time, so an implementation that nothing else
//! references is still known to the host. [`DEFAULT_NAVIGATION`] is always
//! submitted.
//!
//! # Example
//!
//! ```rust,ignore
//! use portico_std::{collected::NavigationRegistration, inventory};
//!
//! inventory::submit! {
//!     NavigationRegistration::new(NavigationImpl::new(SIDEBAR_ID, sidebar))
//! }
//!
//! let known = collected_navigations();
//! ```

use crate::navigation::DEFAULT_NAVIGATION;
use portico_core::NavigationImpl;

/// Registration entry for a navigation implementation.
///
/// This struct is submitted to `inventory` for automatic collection.
pub struct NavigationRegistration {
    implementation: NavigationImpl,
}

impl NavigationRegistration {
    /// Create a registration entry.
    pub const fn new(implementation: NavigationImpl) -> Self {
        Self { implementation }
    }

    /// The registered implementation.
    pub const fn implementation(&self) -> NavigationImpl {
        self.implementation
    }
}

inventory::collect!(NavigationRegistration);

inventory::submit! {
    NavigationRegistration::new(DEFAULT_NAVIGATION)
}

/// Collects every submitted implementation.
///
/// Link order is unspecified, so entries are sorted by identifier.
pub fn collected_navigations() -> Vec<NavigationImpl> {
    let mut implementations: Vec<NavigationImpl> = inventory::iter::<NavigationRegistration>
        .into_iter()
        .map(NavigationRegistration::implementation)
        .collect();
    implementations.sort_by_key(NavigationImpl::id);
    implementations
}
