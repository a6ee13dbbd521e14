//! Headless entry point for the site's view-state reconciler.
//!
//! Responsibilities here are intentionally minimal:
//! - Parse command-line arguments.
//! - Load configuration from `conf/config.toml` and the page layout.
//! - Replay an event script against the reconciler, writing every
//!   presentation instruction to stdout as a JSON line.

use anyhow::{Context, Result, anyhow};
use ista_site::app::App;
use ista_site::config::load_config;
use ista_site::driver::{parse_script, run_script};
use ista_site::host::HeadlessHost;
use ista_site::page::load_page_layout;
use ista_site::store::FileStore;
use std::env;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

fn main() {
    let reload_handle = init_tracing();
    if let Err(err) = run(&reload_handle) {
        error!("{err:?}");
        std::process::exit(1);
    }
}

fn run(reload_handle: &ReloadHandle) -> Result<()> {
    let (layout_path, script_path) = parse_args()?;
    let config = load_config(Path::new("conf/config.toml"));
    set_log_level(reload_handle, config.log_level.as_filter_str());
    info!(
        layout = %layout_path.display(),
        level = %config.log_level,
        header_offset = config.header_offset,
        throttle = config.throttle_to_frame,
        "Starting headless reconciler"
    );

    let layout = load_page_layout(&layout_path)?;
    let script = read_script(script_path.as_deref())?;
    let messages = parse_script(&script)?;

    let store = FileStore::for_origin(Path::new(&config.cache_dir), &config.site_origin);
    info!(path = %store.path().display(), "Using persisted storage");

    let stdout = io::stdout();
    let mut host = HeadlessHost::new(layout, store, stdout.lock());
    let mut app = App::bootstrap(config, &mut host);
    let summary = run_script(&mut app, &mut host, messages);
    info!(
        applied = summary.applied,
        rejected = summary.rejected,
        language = %app.language(),
        active_link = app.active_link().unwrap_or("-"),
        "Event script finished"
    );
    Ok(())
}

fn parse_args() -> Result<(PathBuf, Option<PathBuf>)> {
    let mut args = env::args().skip(1);
    let layout = args
        .next()
        .ok_or_else(|| anyhow!("Usage: ista-site <page.toml> [events.txt]"))?;

    let layout = PathBuf::from(layout);
    if !layout.exists() {
        return Err(anyhow!("File not found: {}", layout.display()));
    }
    Ok((layout, args.next().map(PathBuf::from)))
}

fn read_script(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("reading event script {}", path.display())),
        None => {
            let mut script = String::new();
            io::stdin()
                .read_to_string(&mut script)
                .context("reading event script from stdin")?;
            Ok(script)
        }
    }
}

fn init_tracing() -> ReloadHandle {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let (filter_layer, handle) = reload::Layer::new(env_filter);
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(filter_layer),
        )
        .init();
    debug!("Reconciler logging ready; [logging] log_level or RUST_LOG sets the filter");
    handle
}

fn set_log_level(handle: &ReloadHandle, level: &str) {
    let parsed = EnvFilter::builder()
        .parse(level)
        .unwrap_or_else(|_| EnvFilter::new("debug"));
    if let Err(err) = handle.modify(|filter| *filter = parsed.clone()) {
        warn!(%level, "Could not apply [logging] log_level: {err}");
    } else {
        info!(%level, "Log filter set from site config");
    }
}
