//! # portico - Composition Root for Host Shells
//!
//! `portico` wires an application into a host shell. An application describes
//! itself once, as an [`AppModule`], and [`compose`] hands every part of it
//! to the host in a fixed order:
//!
//! 1. the navigation factory, under [`NAVIGATION_COMPONENT`]
//! 2. the route table
//! 3. every navigation implementation the factory may select
//! 4. the entry component and its attributes
//!
//! The host owns everything after that: it runs the factory when the shell
//! first needs navigation, matches URLs against the routes, and renders.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use portico::prelude::*;
//!
//! struct App;
//!
//! impl AppModule for App {
//!     fn navigation(&self) -> Box<dyn NavigationFactory> {
//!         Box::new(Selected(DefaultNavigation::ID))
//!     }
//!
//!     fn routes(&self) -> Result<RouteTable, RouteError> {
//!         portico::routes!["start" => Page::new(HELLO, Hello)]
//!     }
//!
//!     fn declarations(&self) -> Vec<NavigationImpl> {
//!         vec![DEFAULT_NAVIGATION]
//!     }
//!
//!     fn entry(&self) -> Arc<dyn Component> {
//!         Arc::new(AppRoot)
//!     }
//! }
//!
//! let mut host = MemoryHost::new();
//! portico::compose(&App, &mut host)?;
//! let view = host.render("start")?;
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod compose;
pub mod config;
mod macros;

pub use compose::{AppModule, compose};
pub use config::{ConfigError, ShellConfig};

pub use portico_core::{
    // Attributes
    API_ROOT,
    APP_TITLE,
    // Capability
    CapabilityToken,
    // Components
    Component,
    // Host contracts
    ComponentRegistry,
    // Error types
    CompositionError,
    EntryPoint,
    Host,
    HostError,
    Markup,
    NAVIGATION_COMPONENT,
    // Navigation
    NavigationComponent,
    NavigationFactory,
    NavigationId,
    NavigationImpl,
    Page,
    PageId,
    ProviderRegistry,
    RenderedView,
    // Routing
    Route,
    RouteError,
    RoutePath,
    RouteRegistry,
    RouteResult,
    RouteTable,
    Router,
    RouterBuildError,
    RouterBuilder,
    Selected,
    Shell,
    ShellAttributes,
    WILDCARD,
};

// Standard hosts and navigation
pub use portico_std::{DEFAULT_NAVIGATION, DefaultNavigation, MemoryHost, TracingHost};

/// Router backends.
pub mod routing {
    #![allow(clippy::wildcard_imports)]
    pub use portico_std::routing::*;
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use portico_std::testing::*;
}

/// Distributed navigation registration.
#[cfg(feature = "inventory")]
pub mod collected {
    pub use portico_std::collected::{NavigationRegistration, collected_navigations};
}

#[cfg(feature = "inventory")]
pub use portico_std::inventory;

/// Commonly used items.
pub mod prelude {
    pub use crate::{
        AppModule, Component, DEFAULT_NAVIGATION, DefaultNavigation, Markup, MemoryHost,
        NavigationComponent, NavigationFactory, NavigationId, NavigationImpl, Page, PageId,
        RouteError, RouteTable, Selected, Shell, ShellAttributes, ShellConfig, compose,
    };
    pub use std::sync::Arc;
}
