//! # Product Commands
//!
//! Listing, inspection and editing of catalog entries.
//!
//! ## Edit Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    catalog update 2 --price 19.99                       │
//! │                                                                         │
//! │  UpdateArgs ──► validate present fields ──► ProductPatch               │
//! │                                                  │                      │
//! │                                                  ▼                      │
//! │                              store.update("2", &patch)                  │
//! │                                                  │                      │
//! │                    ┌─────────────────────────────┴──────────┐           │
//! │                    ▼                                        ▼           │
//! │           Some(product): print it                None: not found       │
//! │           + refreshed stats                      (exit 2)               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{self, Write};

use tracing::{debug, info};

use catalog_core::validation::{
    validate_image_data, validate_price, validate_product_name, validate_search_query,
};
use catalog_core::{Category, CoreError, Product, ProductDraft, ProductPatch};
use catalog_store::{ProductStore, Storage};

use crate::cli::{AddArgs, DeleteArgs, ListArgs, UpdateArgs};
use crate::error::{CliError, CliResult, ErrorCode};
use crate::render;

/// Prints the (optionally filtered) product table followed by statistics.
pub fn list<S: Storage, W: Write>(
    store: &ProductStore<S>,
    out: &mut W,
    args: &ListArgs,
) -> CliResult<()> {
    let term = match &args.search {
        Some(raw) => validate_search_query(raw)?,
        None => String::new(),
    };

    let products = store.filter(&term);
    debug!(term = %term, hits = products.len(), "Listing products");

    render::product_table(out, &products)?;
    writeln!(out)?;
    render::stats_line(out, &store.stats())?;
    Ok(())
}

/// Prints every field of one product.
pub fn show<S: Storage, W: Write>(store: &ProductStore<S>, out: &mut W, id: &str) -> CliResult<()> {
    let product = store
        .get(id)
        .ok_or_else(|| CoreError::ProductNotFound(id.to_string()))?;

    render::product_detail(out, product)?;
    Ok(())
}

/// Validates the form and creates a product.
pub fn add<S: Storage, W: Write>(
    store: &mut ProductStore<S>,
    out: &mut W,
    args: AddArgs,
) -> CliResult<()> {
    validate_product_name(&args.name)?;
    validate_price(args.price)?;
    if let Some(image) = &args.image_data {
        validate_image_data(image)?;
    }

    let mut draft = ProductDraft::new(args.name.trim(), args.price, args.quantity)
        .with_description(args.description)
        .with_category(parse_category(&args.category))
        .with_available(!args.unavailable);
    if let Some(image) = args.image_data {
        draft = draft.with_image_data(image);
    }
    if let Some(id) = args.id {
        draft = draft.with_id(id);
    }

    let product = store.create(draft);
    ensure_saved(store)?;
    info!(id = %product.id, "Product added");

    writeln!(out, "Added product {}", product.id)?;
    confirm(store, out, &product)
}

/// Applies the given fields to one product, keeping the rest.
pub fn update<S: Storage, W: Write>(
    store: &mut ProductStore<S>,
    out: &mut W,
    args: UpdateArgs,
) -> CliResult<()> {
    let id = args.id.clone();
    let patch = patch_from_args(args)?;

    if patch.is_empty() {
        return Err(CliError::validation("Nothing to update: pass at least one field"));
    }

    let product = store
        .update(&id, &patch)
        .ok_or_else(|| CoreError::ProductNotFound(id.clone()))?;
    ensure_saved(store)?;
    info!(id = %id, "Product updated");

    writeln!(out, "Updated product {}", product.id)?;
    confirm(store, out, &product)
}

/// Deletes one product after confirmation.
///
/// `ask` is only called when `--yes` was not given. A refusal leaves the
/// catalog untouched and is not an error.
pub fn delete<S, W, F>(
    store: &mut ProductStore<S>,
    out: &mut W,
    args: &DeleteArgs,
    ask: F,
) -> CliResult<()>
where
    S: Storage,
    W: Write,
    F: FnOnce(&Product) -> io::Result<bool>,
{
    let product = store
        .get(&args.id)
        .ok_or_else(|| CoreError::ProductNotFound(args.id.clone()))?;

    if !args.yes && !ask(product)? {
        writeln!(out, "Cancelled")?;
        return Ok(());
    }

    let removed = store.delete(&args.id);
    ensure_saved(store)?;
    info!(id = %args.id, removed, "Product deleted");

    writeln!(out, "Deleted product {}", args.id)?;
    render::stats_line(out, &store.stats())?;
    Ok(())
}

/// Prints the statistics line.
pub fn stats<S: Storage, W: Write>(store: &ProductStore<S>, out: &mut W) -> CliResult<()> {
    render::stats_line(out, &store.stats())?;
    Ok(())
}

// =============================================================================
// Helpers
// =============================================================================

fn parse_category(raw: &str) -> Category {
    Category::from(raw.trim().to_string())
}

/// Fails when the last store write did not reach storage.
fn ensure_saved<S: Storage>(store: &ProductStore<S>) -> CliResult<()> {
    match store.last_save_error() {
        Some(e) => Err(CliError::new(
            ErrorCode::StorageError,
            format!("Changes were not saved: {}", e),
        )),
        None => Ok(()),
    }
}

/// Validates the present fields and turns them into a patch.
fn patch_from_args(args: UpdateArgs) -> CliResult<ProductPatch> {
    if let Some(name) = &args.name {
        validate_product_name(name)?;
    }
    if let Some(price) = args.price {
        validate_price(price)?;
    }
    if let Some(image) = &args.image_data {
        validate_image_data(image)?;
    }

    let image_data = if args.clear_image {
        Some(None)
    } else {
        args.image_data.map(Some)
    };

    Ok(ProductPatch {
        name: args.name.map(|n| n.trim().to_string()),
        price: args.price,
        quantity: args.quantity,
        description: args.description,
        image_data,
        available: args.available,
        category: args.category.as_deref().map(parse_category),
        currency: None,
    })
}

/// Shows the stored record and the refreshed statistics.
fn confirm<S: Storage, W: Write>(
    store: &ProductStore<S>,
    out: &mut W,
    product: &Product,
) -> CliResult<()> {
    render::product_table(out, &[product])?;
    writeln!(out)?;
    render::stats_line(out, &store.stats())?;
    Ok(())
}
