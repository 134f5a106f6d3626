//! Composes the Demo-TT application into an in-memory host and renders one URL.
//!
//! ```text
//! portico-demo [CONFIG] [PATH]
//! ```
//!
//! `CONFIG` is an optional TOML file (see `portico.toml`), `PATH` defaults to
//! `start`. Logging is controlled with `RUST_LOG`.

use anyhow::{Context, Result};
use portico::{MemoryHost, Shell, ShellConfig, TracingHost};
use portico_demo::DemoModule;
use std::env;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut args = env::args_os().skip(1);
    let config = match args.next() {
        Some(path) => ShellConfig::load(&path)
            .with_context(|| format!("failed to load {}", path.to_string_lossy()))?,
        None => ShellConfig::default(),
    }
    .with_env_overrides();
    let path = args
        .next()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| "start".to_string());

    let module = DemoModule::from_config(config).context("invalid configuration")?;
    info!(navigation = %module.choice(), "starting");

    let mut host = TracingHost::named("demo", MemoryHost::new());
    portico::compose(&module, &mut host).context("failed to compose application")?;

    let view = host
        .render(&path)
        .with_context(|| format!("failed to render {path}"))?;
    println!("{}", view.entry);
    println!("{}", view.navigation);
    match view.outlet {
        Some(outlet) => println!("{outlet}"),
        None => println!("<!-- no route for {path} -->"),
    }
    Ok(())
}
