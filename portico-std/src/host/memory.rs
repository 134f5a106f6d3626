//! In-process host.
//!
//! [`MemoryHost`] implements every host contract with plain data structures.
//! Registration happens through `&mut self` before [`EntryPoint::bootstrap`];
//! afterwards the host is only read through `&self` and can be shared across
//! threads.
//!
//! # Lifecycle
//!
//! 1. The composition root registers the factory, routes, implementations.
//! 2. `bootstrap` builds the router and freezes the host.
//! 3. The first time the shell needs navigation, the factory runs and its
//!    answer is kept for the rest of the process.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut host = MemoryHost::new();
//! portico::compose(&app, &mut host)?;
//!
//! let view = host.render("/start")?;
//! assert!(view.outlet.is_some());
//! ```

use crate::routing::OrderedRouterBuilder;
use portico_core::{
    CapabilityToken, Component, ComponentRegistry, EntryPoint, HostError, NAVIGATION_COMPONENT,
    NavigationComponent, NavigationFactory, NavigationId, NavigationImpl, Page, ProviderRegistry,
    RenderedView, Route, RouteRegistry, Router, RouterBuilder, Shell, ShellAttributes,
};
use std::{
    collections::HashMap,
    sync::{Arc, Mutex, OnceLock, PoisonError},
};
use tracing::{debug, info};

/// A host that keeps everything in memory.
///
/// `B` is the router backend built from the registered routes.
pub struct MemoryHost<B: RouterBuilder<Page> = OrderedRouterBuilder<Page>> {
    providers: HashMap<CapabilityToken, Box<dyn NavigationFactory>>,
    implementations: Vec<NavigationImpl>,
    routes: Vec<Route>,
    builder: Option<B>,
    router: Option<B::Router>,
    entry: Option<Arc<dyn Component>>,
    attributes: ShellAttributes,
    selection: OnceLock<NavigationId>,
    instantiated: Mutex<HashMap<NavigationId, usize>>,
}

impl MemoryHost {
    /// Create a host using the ordered, first-match-wins router.
    pub fn new() -> Self {
        Self::with_router()
    }
}

impl<B: RouterBuilder<Page>> Default for MemoryHost<B> {
    fn default() -> Self {
        Self::with_router()
    }
}

impl<B: RouterBuilder<Page>> MemoryHost<B> {
    /// Create a host using the router backend `B`.
    pub fn with_router() -> Self {
        Self::with_builder(B::default())
    }

    /// Create a host from a configured router builder.
    pub fn with_builder(builder: B) -> Self {
        Self {
            providers: HashMap::new(),
            implementations: Vec::new(),
            routes: Vec::new(),
            builder: Some(builder),
            router: None,
            entry: None,
            attributes: ShellAttributes::new(),
            selection: OnceLock::new(),
            instantiated: Mutex::new(HashMap::new()),
        }
    }

    /// Routes in the order they were registered.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Registered paths in order.
    pub fn route_paths(&self) -> Vec<&str> {
        self.routes.iter().map(|r| r.path().as_str()).collect()
    }

    /// Implementations declared so far.
    pub fn implementations(&self) -> &[NavigationImpl] {
        &self.implementations
    }

    /// Returns true if a factory is registered for `token`.
    pub fn has_provider(&self, token: CapabilityToken) -> bool {
        self.providers.contains_key(&token)
    }

    /// Attributes forwarded at bootstrap.
    pub fn attributes(&self) -> &ShellAttributes {
        &self.attributes
    }

    /// Selector of the entry component, once bootstrapped.
    pub fn entry_selector(&self) -> Option<&'static str> {
        self.entry.as_ref().map(|entry| entry.selector())
    }

    /// The navigation selection, if the factory has already run.
    ///
    /// This never runs the factory.
    pub fn active_navigation(&self) -> Option<NavigationId> {
        self.selection.get().copied()
    }

    /// Number of instances created so far for `id`.
    pub fn instantiations(&self, id: NavigationId) -> usize {
        self.instantiated
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
            .copied()
            .unwrap_or(0)
    }

    /// Every implementation instantiated at least once, sorted by id.
    pub fn instantiated(&self) -> Vec<NavigationId> {
        let mut ids: Vec<NavigationId> = self
            .instantiated
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .copied()
            .collect();
        ids.sort();
        ids
    }

    fn is_declared(&self, id: NavigationId) -> bool {
        self.implementations.iter().any(|known| known.id() == id)
    }

    fn ensure_open(&self) -> Result<(), HostError> {
        if self.is_bootstrapped() {
            return Err(HostError::AlreadyBootstrapped);
        }
        Ok(())
    }

    fn router(&self) -> Result<&B::Router, HostError> {
        self.router.as_ref().ok_or(HostError::NotBootstrapped)
    }

    fn selection(&self) -> Result<NavigationId, HostError> {
        if let Some(id) = self.selection.get() {
            return Ok(*id);
        }
        let factory = self
            .providers
            .get(&NAVIGATION_COMPONENT)
            .ok_or(HostError::NoProvider(NAVIGATION_COMPONENT))?;
        // get_or_init runs the factory once even under concurrent resolution
        let id = *self.selection.get_or_init(|| {
            let id = factory.provide();
            info!(navigation = %id, "navigation selected");
            id
        });
        Ok(id)
    }
}

impl<B: RouterBuilder<Page>> ProviderRegistry for MemoryHost<B> {
    fn register_provider(
        &mut self,
        token: CapabilityToken,
        factory: Box<dyn NavigationFactory>,
    ) -> Result<(), HostError> {
        self.ensure_open()?;
        if self.providers.contains_key(&token) {
            return Err(HostError::ProviderAlreadyRegistered(token));
        }
        debug!(%token, "provider registered");
        self.providers.insert(token, factory);
        Ok(())
    }
}

impl<B: RouterBuilder<Page>> ComponentRegistry for MemoryHost<B> {
    fn declare(&mut self, implementation: NavigationImpl) -> Result<(), HostError> {
        self.ensure_open()?;
        if self.is_declared(implementation.id()) {
            return Err(HostError::DuplicateImplementation(implementation.id()));
        }
        debug!(navigation = %implementation.id(), "implementation declared");
        self.implementations.push(implementation);
        Ok(())
    }
}

impl<B: RouterBuilder<Page>> RouteRegistry for MemoryHost<B> {
    fn register_routes(&mut self, routes: Vec<Route>) -> Result<(), HostError> {
        self.ensure_open()?;
        let builder = self.builder.as_mut().ok_or(HostError::AlreadyBootstrapped)?;
        // Stage the batch so a rejected route leaves nothing behind.
        let mut staged = builder.clone();
        for route in &routes {
            staged.insert(route.path().to_string(), route.page().clone())?;
        }
        *builder = staged;
        debug!(routes = routes.len(), "routes registered");
        self.routes.extend(routes);
        Ok(())
    }
}

impl<B: RouterBuilder<Page>> EntryPoint for MemoryHost<B> {
    fn bootstrap(
        &mut self,
        entry: Arc<dyn Component>,
        attributes: ShellAttributes,
    ) -> Result<(), HostError> {
        self.ensure_open()?;
        let builder = self.builder.take().ok_or(HostError::AlreadyBootstrapped)?;
        self.router = Some(builder.build()?);
        info!(
            entry = entry.selector(),
            routes = self.routes.len(),
            implementations = self.implementations.len(),
            "host bootstrapped"
        );
        self.entry = Some(entry);
        self.attributes = attributes;
        Ok(())
    }

    fn is_bootstrapped(&self) -> bool {
        self.router.is_some()
    }
}

impl<B: RouterBuilder<Page>> Shell for MemoryHost<B> {
    fn resolve_navigation(&self) -> Result<Box<dyn NavigationComponent>, HostError> {
        self.router()?;
        let id = self.selection()?;
        let implementation = self
            .implementations
            .iter()
            .find(|known| known.id() == id)
            .ok_or(HostError::UnknownImplementation(id))?;

        let instance = implementation.instantiate();
        *self
            .instantiated
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(id)
            .or_insert(0) += 1;
        debug!(navigation = %id, "navigation instantiated");
        Ok(instance)
    }

    fn resolve_page(&self, path: &str) -> Result<Option<Page>, HostError> {
        let router = self.router()?;
        let key = path.strip_prefix('/').unwrap_or(path);
        let Some(page) = router.route(key).matched() else {
            debug!(path, "no route matched");
            return Ok(None);
        };
        // The page resolves whether or not navigation does.
        let navigation = self
            .selection()
            .ok()
            .filter(|id| self.is_declared(*id));
        Ok(Some(match navigation {
            Some(id) => page.clone().with_navigation(id),
            None => page.clone(),
        }))
    }

    fn render(&self, path: &str) -> Result<RenderedView, HostError> {
        let entry = self.entry.as_ref().ok_or(HostError::NotBootstrapped)?;
        let page = self.resolve_page(path)?;

        let mut navigation = self.resolve_navigation()?;
        navigation.set_page(page.as_ref().map(Page::id));

        Ok(RenderedView {
            entry: entry.render(),
            navigation: navigation.render(),
            outlet: page.map(|p| p.component().render()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        navigation::{DEFAULT_NAVIGATION, DefaultNavigation},
        testing::{CountingFactory, StaticComponent},
    };
    use portico_core::{PageId, RouteTable, Selected};

    fn hello() -> Page {
        Page::new(PageId::new("hello"), StaticComponent::new("hello", "<p>hi</p>"))
    }

    fn bootstrapped(factory: impl NavigationFactory + 'static) -> MemoryHost {
        let mut host = MemoryHost::new();
        host.register_provider(NAVIGATION_COMPONENT, Box::new(factory))
            .unwrap();
        let table = RouteTable::from_pairs([("start", hello())]).unwrap();
        host.register_routes(table.into_routes()).unwrap();
        host.declare(DEFAULT_NAVIGATION).unwrap();
        host.bootstrap(
            Arc::new(StaticComponent::new("app-root", "<app></app>")),
            ShellAttributes::new(),
        )
        .unwrap();
        host
    }

    #[test]
    fn test_resolution_requires_bootstrap() {
        let host = MemoryHost::new();
        assert!(matches!(
            host.resolve_page("start"),
            Err(HostError::NotBootstrapped)
        ));
        assert!(matches!(
            host.resolve_navigation(),
            Err(HostError::NotBootstrapped)
        ));
    }

    #[test]
    fn test_factory_runs_lazily_and_once() {
        let factory = CountingFactory::new(DefaultNavigation::ID);
        let host = bootstrapped(factory.clone());
        assert_eq!(factory.count(), 0);
        assert_eq!(host.active_navigation(), None);

        host.resolve_navigation().unwrap();
        host.resolve_navigation().unwrap();
        host.render("start").unwrap();

        assert_eq!(factory.count(), 1);
        assert_eq!(host.active_navigation(), Some(DefaultNavigation::ID));
        assert_eq!(host.instantiations(DefaultNavigation::ID), 3);
        assert_eq!(host.instantiated(), [DefaultNavigation::ID]);
    }

    #[test]
    fn test_leading_slash_is_ignored() {
        let host = bootstrapped(Selected(DefaultNavigation::ID));
        let page = host.resolve_page("/start").unwrap().unwrap();
        assert_eq!(page.id(), PageId::new("hello"));
        assert_eq!(page.navigation(), Some(DefaultNavigation::ID));
    }

    #[test]
    fn test_only_one_leading_slash_is_ignored() {
        let host = bootstrapped(Selected(DefaultNavigation::ID));
        assert!(host.resolve_page("//start").unwrap().is_none());
    }

    #[test]
    fn test_page_resolves_without_provider() {
        let mut host = MemoryHost::new();
        let table = RouteTable::from_pairs([("start", hello())]).unwrap();
        host.register_routes(table.into_routes()).unwrap();
        host.bootstrap(
            Arc::new(StaticComponent::new("app-root", "")),
            ShellAttributes::new(),
        )
        .unwrap();

        let page = host.resolve_page("start").unwrap().unwrap();
        assert_eq!(page.id(), PageId::new("hello"));
        assert_eq!(page.navigation(), None);
        assert!(matches!(
            host.resolve_navigation(),
            Err(HostError::NoProvider(_))
        ));
    }

    #[test]
    fn test_page_not_attributed_to_undeclared_selection() {
        let factory = CountingFactory::new(NavigationId::new("sidebar"));
        let host = bootstrapped(factory.clone());

        let page = host.resolve_page("start").unwrap().unwrap();
        assert_eq!(page.navigation(), None);
        assert_eq!(factory.count(), 1);
    }

    #[test]
    fn test_instantiations_are_counted() {
        let host = bootstrapped(Selected(DefaultNavigation::ID));
        for _ in 0..100 {
            host.render("start").unwrap();
        }
        assert_eq!(host.instantiations(DefaultNavigation::ID), 100);
        assert_eq!(host.instantiations(NavigationId::new("sidebar")), 0);
        assert_eq!(host.instantiated(), [DefaultNavigation::ID]);
        assert_eq!(host.instantiated.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_unknown_selection() {
        let host = bootstrapped(Selected(NavigationId::new("sidebar")));
        assert!(matches!(
            host.resolve_navigation(),
            Err(HostError::UnknownImplementation(id)) if id.as_str() == "sidebar"
        ));
    }

    #[test]
    fn test_registration_closed_after_bootstrap() {
        let mut host = bootstrapped(Selected(DefaultNavigation::ID));
        assert!(matches!(
            host.declare(DEFAULT_NAVIGATION),
            Err(HostError::AlreadyBootstrapped)
        ));
        assert!(matches!(
            host.register_routes(Vec::new()),
            Err(HostError::AlreadyBootstrapped)
        ));
    }

    #[test]
    fn test_duplicate_declaration() {
        let mut host = MemoryHost::new();
        host.declare(DEFAULT_NAVIGATION).unwrap();
        assert!(matches!(
            host.declare(DEFAULT_NAVIGATION),
            Err(HostError::DuplicateImplementation(_))
        ));
    }

    #[test]
    fn test_render_sets_navigation_page() {
        let host = bootstrapped(Selected(DefaultNavigation::ID));

        let view = host.render("start").unwrap();
        assert_eq!(view.entry.as_str(), "<app></app>");
        assert_eq!(view.outlet.unwrap().as_str(), "<p>hi</p>");
        assert!(view.navigation.as_str().contains("hello"));

        let missing = host.render("missing").unwrap();
        assert_eq!(missing.outlet, None);
        assert_eq!(
            missing.navigation.as_str(),
            r#"<nav class="default-navigation"></nav>"#
        );
    }
}
