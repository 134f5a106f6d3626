//! Tracing decorator for hosts.

use portico_core::{
    CapabilityToken, Component, ComponentRegistry, EntryPoint, HostError, NavigationComponent,
    NavigationFactory, NavigationImpl, Page, ProviderRegistry, RenderedView, Route, RouteRegistry,
    Shell, ShellAttributes,
};
use std::sync::Arc;

/// A host wrapper that records every registration and resolution as a
/// `tracing` event, then delegates to the inner host.
///
/// Failures are logged at `warn` and returned unchanged.
///
/// # Example
///
/// ```rust,ignore
/// let mut host = TracingHost::named("demo", MemoryHost::new());
/// portico::compose(&app, &mut host)?;
/// ```
pub struct TracingHost<H> {
    inner: H,
    name: &'static str,
}

impl<H> TracingHost<H> {
    /// Wrap a host with the default span name.
    pub fn new(inner: H) -> Self {
        Self::named("host", inner)
    }

    /// Wrap a host with a custom name used in every event.
    pub fn named(name: &'static str, inner: H) -> Self {
        Self { inner, name }
    }

    /// Get a reference to the wrapped host.
    pub fn inner(&self) -> &H {
        &self.inner
    }

    /// Unwrap the host.
    pub fn into_inner(self) -> H {
        self.inner
    }

    fn report<T>(&self, op: &'static str, result: Result<T, HostError>) -> Result<T, HostError> {
        if let Err(err) = &result {
            ::tracing::warn!(host = self.name, op, error = %err, "host rejected operation");
        }
        result
    }
}

impl<H: ProviderRegistry> ProviderRegistry for TracingHost<H> {
    fn register_provider(
        &mut self,
        token: CapabilityToken,
        factory: Box<dyn NavigationFactory>,
    ) -> Result<(), HostError> {
        ::tracing::info!(host = self.name, %token, "registering provider");
        let result = self.inner.register_provider(token, factory);
        self.report("register_provider", result)
    }
}

impl<H: ComponentRegistry> ComponentRegistry for TracingHost<H> {
    fn declare(&mut self, implementation: NavigationImpl) -> Result<(), HostError> {
        ::tracing::info!(host = self.name, navigation = %implementation.id(), "declaring navigation");
        let result = self.inner.declare(implementation);
        self.report("declare", result)
    }
}

impl<H: RouteRegistry> RouteRegistry for TracingHost<H> {
    fn register_routes(&mut self, routes: Vec<Route>) -> Result<(), HostError> {
        for route in &routes {
            ::tracing::debug!(
                host = self.name,
                path = %route.path(),
                page = %route.page().id(),
                "route"
            );
        }
        ::tracing::info!(host = self.name, routes = routes.len(), "registering routes");
        let result = self.inner.register_routes(routes);
        self.report("register_routes", result)
    }
}

impl<H: EntryPoint> EntryPoint for TracingHost<H> {
    fn bootstrap(
        &mut self,
        entry: Arc<dyn Component>,
        attributes: ShellAttributes,
    ) -> Result<(), HostError> {
        ::tracing::info!(
            host = self.name,
            entry = entry.selector(),
            app_title = attributes.app_title(),
            api_root = attributes.api_root(),
            "bootstrapping"
        );
        let result = self.inner.bootstrap(entry, attributes);
        self.report("bootstrap", result)
    }

    fn is_bootstrapped(&self) -> bool {
        self.inner.is_bootstrapped()
    }
}

impl<H: Shell> Shell for TracingHost<H> {
    fn resolve_navigation(&self) -> Result<Box<dyn NavigationComponent>, HostError> {
        let result = self.inner.resolve_navigation();
        if let Ok(nav) = &result {
            ::tracing::debug!(host = self.name, selector = nav.selector(), "navigation resolved");
        }
        self.report("resolve_navigation", result)
    }

    fn resolve_page(&self, path: &str) -> Result<Option<Page>, HostError> {
        let result = self.inner.resolve_page(path);
        if let Ok(page) = &result {
            ::tracing::debug!(
                host = self.name,
                path,
                page = page.as_ref().map(|p| p.id().as_str()),
                "page resolved"
            );
        }
        self.report("resolve_page", result)
    }

    fn render(&self, path: &str) -> Result<RenderedView, HostError> {
        let result = self.inner.render(path);
        self.report("render", result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        MemoryHost,
        navigation::{DEFAULT_NAVIGATION, DefaultNavigation},
        testing::StaticComponent,
    };
    use portico_core::{NAVIGATION_COMPONENT, Selected};

    #[test]
    fn test_delegates_to_inner_host() {
        let mut host = TracingHost::named("test", MemoryHost::new());
        host.register_provider(NAVIGATION_COMPONENT, Box::new(Selected(DefaultNavigation::ID)))
            .unwrap();
        host.declare(DEFAULT_NAVIGATION).unwrap();
        host.bootstrap(
            Arc::new(StaticComponent::new("app-root", "")),
            ShellAttributes::new(),
        )
        .unwrap();

        assert!(host.is_bootstrapped());
        assert!(host.inner().has_provider(NAVIGATION_COMPONENT));
        assert_eq!(host.inner().entry_selector(), Some("app-root"));
        assert_eq!(host.resolve_page("start").unwrap().map(|p| p.id()), None);
    }

    #[test]
    fn test_errors_pass_through() {
        let mut host = TracingHost::new(MemoryHost::new());
        host.declare(DEFAULT_NAVIGATION).unwrap();
        assert!(matches!(
            host.declare(DEFAULT_NAVIGATION),
            Err(HostError::DuplicateImplementation(_))
        ));
        assert!(matches!(
            host.render("start"),
            Err(HostError::NotBootstrapped)
        ));
    }
}
