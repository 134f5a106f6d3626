//! Testing utilities for Portico.
//!
//! This module provides utilities to make testing composition roots and
//! navigation implementations easier.
//!
//! # Features
//!
//! - [`StaticComponent`]: A component that renders fixed markup
//! - [`CountingFactory`]: A navigation factory that counts its invocations
//! - [`RecordingHost`]: A host that records every registration in order

use portico_core::{
    CapabilityToken, Component, ComponentRegistry, EntryPoint, HostError, Markup,
    NavigationFactory, NavigationId, NavigationImpl, PageId, ProviderRegistry, Route,
    RouteRegistry, ShellAttributes,
};
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Static Component
// ============================================================================

/// A component that always renders the same markup.
#[derive(Debug, Clone)]
pub struct StaticComponent {
    selector: &'static str,
    markup: &'static str,
}

impl StaticComponent {
    /// Create a component mounted under `selector` that renders `markup`.
    pub const fn new(selector: &'static str, markup: &'static str) -> Self {
        Self { selector, markup }
    }
}

impl Component for StaticComponent {
    fn selector(&self) -> &'static str {
        self.selector
    }

    fn render(&self) -> Markup {
        Markup::from(self.markup)
    }
}

// ============================================================================
// Counting Factory
// ============================================================================

/// A navigation factory that counts invocations.
///
/// Clones share the counter, so keep one clone and hand the other to the host.
///
/// # Example
///
/// ```rust,ignore
/// let factory = CountingFactory::new(DefaultNavigation::ID);
/// host.register_provider(NAVIGATION_COMPONENT, Box::new(factory.clone()))?;
///
/// host.resolve_navigation()?;
/// host.resolve_navigation()?;
/// assert_eq!(factory.count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct CountingFactory {
    selection: NavigationId,
    count: Arc<AtomicUsize>,
}

impl CountingFactory {
    /// Create a factory that selects `selection`.
    pub fn new(selection: NavigationId) -> Self {
        Self {
            selection,
            count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Get the number of times the factory ran.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

impl NavigationFactory for CountingFactory {
    fn provide(&self) -> NavigationId {
        self.count.fetch_add(1, Ordering::SeqCst);
        self.selection
    }
}

// ============================================================================
// Recording Host
// ============================================================================

/// One call received by a [`RecordingHost`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Registration {
    /// A factory was registered for a capability.
    Provider(CapabilityToken),
    /// An implementation was declared.
    Declared(NavigationId),
    /// A batch of routes was registered, as `(path, page)` in order.
    Routes(Vec<(String, PageId)>),
    /// The host was bootstrapped.
    Bootstrapped {
        /// Selector of the entry component.
        entry: &'static str,
        /// Forwarded attributes.
        attributes: ShellAttributes,
    },
}

/// Registration step a [`RecordingHost`] can be told to reject.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// `register_provider`
    Provider,
    /// `declare`
    Declare,
    /// `register_routes`
    Routes,
    /// `bootstrap`
    Bootstrap,
}

/// A host that records registrations without acting on them.
///
/// Factories are stored but never invoked; tests can run them through
/// [`RecordingHost::provide`].
#[derive(Default)]
pub struct RecordingHost {
    log: Vec<Registration>,
    factories: Vec<(CapabilityToken, Box<dyn NavigationFactory>)>,
    bootstrapped: bool,
    failure: Option<(Step, HostError)>,
}

impl RecordingHost {
    /// Create a host that accepts everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a host that fails `step` with `error`.
    pub fn failing_at(step: Step, error: HostError) -> Self {
        Self {
            failure: Some((step, error)),
            ..Self::default()
        }
    }

    /// Every call received, in order.
    pub fn log(&self) -> &[Registration] {
        &self.log
    }

    /// Run the factory registered for `token`.
    pub fn provide(&self, token: CapabilityToken) -> Option<NavigationId> {
        self.factories
            .iter()
            .find(|(t, _)| *t == token)
            .map(|(_, factory)| factory.provide())
    }

    fn check(&self, step: Step) -> Result<(), HostError> {
        match &self.failure {
            Some((failing, error)) if *failing == step => Err(error.clone()),
            _ => Ok(()),
        }
    }
}

impl ProviderRegistry for RecordingHost {
    fn register_provider(
        &mut self,
        token: CapabilityToken,
        factory: Box<dyn NavigationFactory>,
    ) -> Result<(), HostError> {
        self.check(Step::Provider)?;
        self.log.push(Registration::Provider(token));
        self.factories.push((token, factory));
        Ok(())
    }
}

impl ComponentRegistry for RecordingHost {
    fn declare(&mut self, implementation: NavigationImpl) -> Result<(), HostError> {
        self.check(Step::Declare)?;
        self.log.push(Registration::Declared(implementation.id()));
        Ok(())
    }
}

impl RouteRegistry for RecordingHost {
    fn register_routes(&mut self, routes: Vec<Route>) -> Result<(), HostError> {
        self.check(Step::Routes)?;
        self.log.push(Registration::Routes(
            routes
                .iter()
                .map(|r| (r.path().to_string(), r.page().id()))
                .collect(),
        ));
        Ok(())
    }
}

impl EntryPoint for RecordingHost {
    fn bootstrap(
        &mut self,
        entry: Arc<dyn Component>,
        attributes: ShellAttributes,
    ) -> Result<(), HostError> {
        self.check(Step::Bootstrap)?;
        self.log.push(Registration::Bootstrapped {
            entry: entry.selector(),
            attributes,
        });
        self.bootstrapped = true;
        Ok(())
    }

    fn is_bootstrapped(&self) -> bool {
        self.bootstrapped
    }
}
