//! # Catalog CLI Library
//!
//! The `catalog` command: a terminal front end over [`catalog_store::ProductStore`].
//!
//! ## Module Organization
//! ```text
//! catalog_cli/
//! ├── lib.rs          ◄─── You are here (startup & dispatch)
//! ├── cli.rs          ◄─── clap argument definitions
//! ├── config.rs       ◄─── catalog.toml + CATALOG_* overrides
//! ├── render.rs       ◄─── Tables, detail view, stats line
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── product.rs  ◄─── list/show/add/update/delete/stats
//! │   └── export.rs   ◄─── export + config
//! └── error.rs        ◄─── CliError, exit codes
//! ```
//!
//! ## Run Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Parse arguments (clap)                                              │
//! │  2. Initialize tracing (stderr, RUST_LOG, default "warn")               │
//! │  3. Load CatalogConfig, apply --data-dir                                │
//! │  4. Open ProductStore over FileStorage (loads or seeds the list)        │
//! │  5. Run one command against the store, render to stdout                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod render;

use std::io::{self, BufRead, Write};

use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use catalog_core::Product;
use catalog_store::{FileStorage, ProductStore};

use crate::cli::{Cli, Command};
use crate::config::CatalogConfig;
use crate::error::CliResult;

/// Runs one parsed invocation.
pub fn run(cli: Cli) -> CliResult<()> {
    let mut config = CatalogConfig::load(cli.config.clone())?;
    if let Some(dir) = cli.data_dir {
        config.storage.data_dir = dir;
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    // The config command never touches the product slot.
    if let Command::Config(args) = &cli.command {
        return commands::show_config(&mut out, &config, args, cli.config);
    }

    info!(data_dir = %config.storage.data_dir.display(), "Opening catalog");
    let storage = FileStorage::new(&config.storage.data_dir);
    let mut store = ProductStore::with_config(storage, config.store_config());

    match cli.command {
        Command::List(args) => commands::list(&store, &mut out, &args),
        Command::Show { id } => commands::show(&store, &mut out, &id),
        Command::Add(args) => commands::add(&mut store, &mut out, args),
        Command::Update(args) => commands::update(&mut store, &mut out, args),
        Command::Delete(args) => commands::delete(&mut store, &mut out, &args, confirm_on_stdin),
        Command::Stats => commands::stats(&store, &mut out),
        Command::Export(args) => commands::export(&store, &mut out, &args),
        Command::Config(_) => Ok(()),
    }
}

/// Asks on the terminal before a delete.
fn confirm_on_stdin(product: &Product) -> io::Result<bool> {
    let mut stderr = io::stderr();
    write!(stderr, "Delete \"{}\" ({})? [y/N] ", product.name, product.id)?;
    stderr.flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    debug!(answer = %answer.trim(), "Delete confirmation");

    Ok(matches!(answer.trim(), "y" | "Y" | "yes" | "Yes"))
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show store mutations and saves
/// - `RUST_LOG=catalog_store=trace` - Store internals only
/// - Default: WARN level, so command output stays clean
///
/// Logs go to stderr; stdout carries command output only.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
