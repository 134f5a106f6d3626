//! The Demo-TT application.
//!
//! One page under `start`, the default navigation bar, and a custom
//! navigation that can be switched on from configuration:
//!
//! ```toml
//! navigation = "custom"
//! ```
//!
//! or `PORTICO_NAVIGATION=custom`.

#![warn(missing_docs)]

pub mod app;

pub use app::{AppRoot, CustomNavigation, DemoModule, HelloPage, NavigationChoice};
