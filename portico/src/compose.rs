//! The composition root.

use portico_core::{
    Component, CompositionError, Host, NAVIGATION_COMPONENT, NavigationFactory, NavigationImpl,
    RouteError, RouteTable, ShellAttributes,
};
use std::sync::Arc;
use tracing::{debug, info};

/// Everything an application hands to the host at startup.
///
/// Implementations describe the application; they never touch a host.
/// [`compose`] is the only place the two meet.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not describe a Portico application",
    label = "missing `AppModule` implementation",
    note = "Implement `navigation`, `routes`, `declarations` and `entry`."
)]
pub trait AppModule {
    /// The factory that selects the active navigation implementation.
    ///
    /// The host runs it lazily, so building it must not instantiate anything.
    fn navigation(&self) -> Box<dyn NavigationFactory>;

    /// The application's route table, in resolution order.
    fn routes(&self) -> Result<RouteTable, RouteError>;

    /// Every implementation the factory may select.
    ///
    /// Includes implementations nothing else references, so the host can
    /// instantiate them on demand.
    fn declarations(&self) -> Vec<NavigationImpl>;

    /// The top-level component.
    fn entry(&self) -> Arc<dyn Component>;

    /// Strings forwarded to the entry component.
    fn attributes(&self) -> ShellAttributes {
        ShellAttributes::new()
    }
}

/// Register `module` with `host` and bootstrap it.
///
/// Runs once per host. A host that is already bootstrapped is rejected with
/// [`CompositionError::AlreadyComposed`] before anything is registered. Host
/// errors are returned unchanged inside [`CompositionError::Host`]; nothing
/// is retried.
pub fn compose<M, H>(module: &M, host: &mut H) -> Result<(), CompositionError>
where
    M: AppModule + ?Sized,
    H: Host + ?Sized,
{
    if host.is_bootstrapped() {
        return Err(CompositionError::AlreadyComposed);
    }

    let routes = module.routes()?;
    let declarations = module.declarations();
    debug!(
        token = %NAVIGATION_COMPONENT,
        routes = routes.len(),
        declarations = declarations.len(),
        "composing application"
    );

    host.register_provider(NAVIGATION_COMPONENT, module.navigation())?;
    host.register_routes(routes.into_routes())?;
    for implementation in declarations {
        host.declare(implementation)?;
    }

    let entry = module.entry();
    let selector = entry.selector();
    host.bootstrap(entry, module.attributes())?;
    info!(entry = selector, "application composed");
    Ok(())
}
