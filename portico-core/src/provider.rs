//! # Provider Factories
//!
//! A provider factory decides which implementation backs a capability. The
//! application hands a factory to the host keyed by a [`CapabilityToken`]; the
//! host calls it when the shell first needs the capability.
//!
//! A factory only *names* an implementation. It never instantiates one, so the
//! host stays in charge of the implementation's lifecycle.

use crate::navigation::NavigationId;
use std::fmt;

/// Names a capability the host can resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CapabilityToken(&'static str);

impl CapabilityToken {
    /// Create a capability token.
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// The token name.
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for CapabilityToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// The token the navigation factory is registered under.
pub const NAVIGATION_COMPONENT: CapabilityToken = CapabilityToken::new("navigation-component");

/// Selects the active navigation implementation.
///
/// Implementations must be pure: same answer every call, no side effects.
/// Hosts call this at most once per process.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot select a navigation implementation",
    label = "missing `NavigationFactory` implementation",
    note = "Any `Fn() -> NavigationId + Send + Sync` closure is a factory."
)]
pub trait NavigationFactory: Send + Sync {
    /// Return the identifier of the implementation to activate.
    fn provide(&self) -> NavigationId;
}

impl<F> NavigationFactory for F
where
    F: Fn() -> NavigationId + Send + Sync,
{
    fn provide(&self) -> NavigationId {
        (self)()
    }
}

/// A factory with a fixed answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selected(pub NavigationId);

impl NavigationFactory for Selected {
    fn provide(&self) -> NavigationId {
        self.0
    }
}
