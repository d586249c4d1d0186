//! RefOS demo entry point.
//!
//! Headless driver for the window core: builds the launch catalog
//! (optionally overlaid from a TOML file), picks a launch policy, replays a
//! scripted desktop session through the dispatcher and interaction layer,
//! and prints the resulting window stack.
//!
//! Environment:
//! - `REFOS_APPS` -- path to a catalog overlay TOML file.
//! - `REFOS_LAUNCH_POLICY` -- `singleton` or `multi` (default `multi`).

mod scenario;

use anyhow::{Context, Result, bail};

use refos_types::catalog::AppCatalog;
use refos_wm::LaunchPolicy;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let catalog = match std::env::var_os("REFOS_APPS") {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("reading catalog overlay {}", path.to_string_lossy()))?;
            AppCatalog::from_toml_str(&text).context("parsing catalog overlay")?
        },
        None => AppCatalog::builtin(),
    };

    let policy = match std::env::var("REFOS_LAUNCH_POLICY").as_deref() {
        Ok("singleton") => LaunchPolicy::SingletonPerKind,
        Ok("multi") | Err(_) => LaunchPolicy::AlwaysNewInstance,
        Ok(other) => bail!("unknown launch policy: {other} (expected singleton or multi)"),
    };
    log::info!("Starting RefOS demo session (policy: {policy:?})");

    for line in scenario::run_demo_session(catalog, policy) {
        println!("{line}");
    }
    Ok(())
}
