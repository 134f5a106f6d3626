//! # Host Contracts
//!
//! The host shell supplies dependency resolution, routing and rendering.
//! Portico consumes those services through the traits in this module and
//! never reimplements them.
//!
//! # Registration side
//!
//! Used once, at process start, by the composition root:
//!
//! - [`ProviderRegistry`]: capability token → factory
//! - [`ComponentRegistry`]: implementations the factory may select
//! - [`RouteRegistry`]: the application's route table
//! - [`EntryPoint`]: the top-level component and its attributes
//!
//! [`Host`] is implemented for every type providing all four.
//!
//! # Resolution side
//!
//! [`Shell`] is what the running shell uses afterwards. It only needs `&self`:
//! after bootstrap, everything Portico registered is read-only.

use crate::{
    attributes::ShellAttributes,
    component::{Component, Markup},
    error::HostError,
    navigation::{NavigationComponent, NavigationImpl},
    page::Page,
    provider::{CapabilityToken, NavigationFactory},
    route::Route,
};
use std::sync::Arc;

/// Binds capability tokens to factories.
pub trait ProviderRegistry {
    /// Register the factory for a capability.
    fn register_provider(
        &mut self,
        token: CapabilityToken,
        factory: Box<dyn NavigationFactory>,
    ) -> Result<(), HostError>;
}

/// Keeps the implementations a factory is allowed to select.
pub trait ComponentRegistry {
    /// Make an implementation known to the host without instantiating it.
    fn declare(&mut self, implementation: NavigationImpl) -> Result<(), HostError>;
}

/// Accepts route tables.
pub trait RouteRegistry {
    /// Augment the host router with `routes`, in order.
    fn register_routes(&mut self, routes: Vec<Route>) -> Result<(), HostError>;
}

/// Starts rendering.
pub trait EntryPoint {
    /// Designate the top-level component and forward the shell attributes.
    fn bootstrap(
        &mut self,
        entry: Arc<dyn Component>,
        attributes: ShellAttributes,
    ) -> Result<(), HostError>;

    /// Returns true once [`EntryPoint::bootstrap`] has succeeded.
    fn is_bootstrapped(&self) -> bool;
}

/// Everything the composition root registers against.
pub trait Host: ProviderRegistry + ComponentRegistry + RouteRegistry + EntryPoint {}

impl<T> Host for T where T: ProviderRegistry + ComponentRegistry + RouteRegistry + EntryPoint {}

/// What the host produced for one URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedView {
    /// Rendered top-level component.
    pub entry: Markup,
    /// Rendered navigation.
    pub navigation: Markup,
    /// Rendered page, or `None` when no route matched.
    pub outlet: Option<Markup>,
}

/// The resolution side of a host.
pub trait Shell {
    /// Instantiate the active navigation implementation.
    ///
    /// The first call runs the registered factory; later calls reuse its
    /// answer.
    fn resolve_navigation(&self) -> Result<Box<dyn NavigationComponent>, HostError>;

    /// Match a URL path against the registered routes.
    ///
    /// A single leading `/` is ignored. A matched page is returned even when
    /// navigation cannot be resolved.
    fn resolve_page(&self, path: &str) -> Result<Option<Page>, HostError>;

    /// Render the shell for a URL path.
    fn render(&self, path: &str) -> Result<RenderedView, HostError>;
}
