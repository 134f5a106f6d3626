//! Error types for Portico.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`CompositionError`] - Errors raised while composing an application
//! - [`HostError`] - Conditions raised by the host shell
//! - [`RouteError`] - Malformed route tables
//! - [`RouterBuildError`] - Errors from router construction

use crate::{navigation::NavigationId, provider::CapabilityToken};
use thiserror::Error;

/// Errors raised by the composition root.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompositionError {
    /// The host has already been composed.
    #[error("host has already been composed")]
    AlreadyComposed,

    /// The application supplied a malformed route table.
    #[error(transparent)]
    Route(#[from] RouteError),

    /// The host rejected a registration.
    #[error(transparent)]
    Host(#[from] HostError),
}

/// Conditions raised by a host shell.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    /// Nothing is registered for the requested capability.
    #[error("no provider registered for capability `{0}`")]
    NoProvider(CapabilityToken),

    /// A provider is already registered for the capability.
    #[error("a provider is already registered for capability `{0}`")]
    ProviderAlreadyRegistered(CapabilityToken),

    /// The factory selected an implementation the host doesn't know.
    #[error("navigation implementation `{0}` was never declared")]
    UnknownImplementation(NavigationId),

    /// The same implementation was declared twice.
    #[error("navigation implementation `{0}` is already declared")]
    DuplicateImplementation(NavigationId),

    /// The host router could not be built.
    #[error("router error: {0}")]
    Router(#[from] RouterBuildError),

    /// The host has not been bootstrapped yet.
    #[error("host has not been bootstrapped")]
    NotBootstrapped,

    /// The host was already bootstrapped and no longer accepts registrations.
    #[error("host is already bootstrapped")]
    AlreadyBootstrapped,
}

/// Errors in a route table supplied by the application.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// A route path was empty.
    #[error("route path must not be empty")]
    EmptyPath,

    /// A route path started with `/`.
    #[error("route path must be relative: {0}")]
    AbsolutePath(String),

    /// Two routes in the same table share a path.
    #[error("duplicate route path: {0}")]
    DuplicatePath(String),
}

/// Errors that can occur while building a router.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouterBuildError {
    /// A duplicate key was inserted.
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),
}
