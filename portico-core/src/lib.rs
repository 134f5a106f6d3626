//! # portico-core
//!
//! Core types and traits for the Portico composition root.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! navigation implementations and hosts that don't need `portico-std`.
//!
//! # Layers
//!
//! Portico sits between an application and the host shell that renders it.
//! The application never talks to a concrete host; it talks to the contracts
//! defined here.
//!
//! ## Layer 1: Components ([`Component`], [`Page`])
//!
//! Anything the host can render. A [`Page`] binds a [`Component`] to a
//! [`PageId`] and optionally names the navigation context that produced it.
//!
//! ## Layer 2: Capability ([`NavigationComponent`])
//!
//! The navigation capability: a component with a non-owning reference to the
//! currently active page. Implementations are made known to a host through
//! [`NavigationImpl`] descriptors and selected by a [`NavigationFactory`].
//!
//! ## Layer 3: Routing ([`Route`], [`RouteTable`], [`Router`])
//!
//! An ordered table of `(path, page)` pairs handed to the host, and the
//! lookup interface host routers expose.
//!
//! ## Layer 4: Host contracts ([`Host`], [`Shell`])
//!
//! The registration side used once at startup, and the resolution side the
//! shell uses afterwards.
//!
//! # Error Types
//!
//! - [`CompositionError`] - Composition root failures
//! - [`HostError`] - Host-raised conditions
//! - [`RouteError`] - Malformed route tables
//! - [`RouterBuildError`] - Router construction failures

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod attributes;
mod component;
mod error;
mod host;
mod navigation;
mod page;
mod provider;
mod route;
mod router;

// Re-exports
pub use attributes::{API_ROOT, APP_TITLE, ShellAttributes};
pub use component::{Component, Markup};
pub use error::{CompositionError, HostError, RouteError, RouterBuildError};
pub use host::{
    ComponentRegistry, EntryPoint, Host, ProviderRegistry, RenderedView, RouteRegistry, Shell,
};
pub use navigation::{NavigationComponent, NavigationId, NavigationImpl};
pub use page::{Page, PageId};
pub use provider::{CapabilityToken, NAVIGATION_COMPONENT, NavigationFactory, Selected};
pub use route::{Route, RoutePath, RouteTable, WILDCARD};
pub use router::{RouteResult, Router, RouterBuilder};
