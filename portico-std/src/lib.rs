//! # portico-std
//!
//! Standard implementations for the Portico composition root.
//!
//! This crate provides:
//! - **Routers**: [`OrderedRouter`], [`HashMapRouter`], and `MatchitRouter`
//!   behind the `matchit` feature
//! - **Hosts**: [`MemoryHost`], an in-process host, and [`TracingHost`], a
//!   logging decorator for any host
//! - **Navigation**: [`DefaultNavigation`]
//! - **Distributed registration**: `NavigationRegistration` behind the
//!   `inventory` feature
//! - **Testing utilities**: [`testing`]

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use portico_core;

// Modules
#[cfg(feature = "inventory")]
pub mod collected;
pub mod host;
pub mod navigation;
pub mod routing;
pub mod testing;

pub use host::{MemoryHost, TracingHost};
pub use navigation::{DEFAULT_NAVIGATION, DefaultNavigation};
pub use routing::{HashMapRouter, HashMapRouterBuilder, OrderedRouter, OrderedRouterBuilder};

#[cfg(feature = "inventory")]
pub use inventory;
