//! # Export & Config Commands

use std::io::Write;
use std::path::PathBuf;

use chrono::Utc;
use tracing::info;

use catalog_store::{write_export, ProductStore, Storage};

use crate::cli::{ConfigArgs, ExportArgs};
use crate::config::CatalogConfig;
use crate::error::CliResult;

/// Writes `products-YYYY-MM-DD.json` into the output directory.
///
/// Only the file is produced; the catalog itself is not modified.
pub fn export<S: Storage, W: Write>(
    store: &ProductStore<S>,
    out: &mut W,
    args: &ExportArgs,
) -> CliResult<()> {
    let document = store.export(Utc::now());
    let path = write_export(&document, &args.out)?;
    info!(count = document.total_count, "Catalog exported");

    writeln!(
        out,
        "Exported {} products to {}",
        document.total_count,
        path.display()
    )?;
    Ok(())
}

/// Prints the effective configuration, optionally saving it.
pub fn show_config<W: Write>(
    out: &mut W,
    config: &CatalogConfig,
    args: &ConfigArgs,
    config_path: Option<PathBuf>,
) -> CliResult<()> {
    write!(out, "{}", config.to_toml()?)?;

    if args.write {
        let path = config.save(config_path)?;
        writeln!(out, "# saved to {}", path.display())?;
    }

    Ok(())
}
