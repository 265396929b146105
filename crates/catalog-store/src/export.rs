//! # Export Writer
//!
//! Writes an [`ExportDocument`] as pretty-printed JSON, named after the
//! export day (`products-YYYY-MM-DD.json`). A second export on the same day
//! overwrites the first.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use catalog_core::ExportDocument;

use crate::error::StoreResult;

/// Writes `document` into `dir`, creating the directory if needed.
///
/// ## Returns
/// The path of the written file.
pub fn write_export(document: &ExportDocument, dir: &Path) -> StoreResult<PathBuf> {
    fs::create_dir_all(dir)?;

    let path = dir.join(document.file_name());
    let json = serde_json::to_string_pretty(document)?;
    fs::write(&path, json)?;

    info!(
        path = %path.display(),
        total = document.total_count,
        "Exported products"
    );
    Ok(path)
}
