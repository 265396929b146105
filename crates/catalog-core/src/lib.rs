//! # catalog-core: Pure Catalog Logic
//!
//! This crate holds the domain model of the catalog editor as plain data and
//! pure functions. It never touches storage, the terminal or the clock.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Catalog Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    catalog CLI (apps/catalog-cli)               │   │
//! │  │    list ──► add ──► update ──► delete ──► stats ──► export      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              catalog-store (ProductStore + Storage)              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ catalog-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   stats   │  │  export   │  │ validation│  │   │
//! │  │   │  Product  │  │ StockLevel│  │ ExportDoc │  │   rules   │  │   │
//! │  │   │  Patch    │  │ Catalog-  │  │           │  │           │  │   │
//! │  │   │  Draft    │  │   Stats   │  │           │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO CLOCK • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Category, ProductDraft, ProductPatch)
//! - [`stats`] - Stock levels and catalog statistics
//! - [`export`] - The export document projection
//! - [`error`] - Domain error types
//! - [`validation`] - Form-level input checks
//!
//! ## Example Usage
//!
//! ```rust
//! use catalog_core::{Category, ProductDraft, ProductPatch};
//!
//! let mut product = ProductDraft::new("Blue Shirt", 19.5, 4)
//!     .with_category(Category::Clothing)
//!     .into_product("1".to_string(), "€");
//!
//! let patch = ProductPatch {
//!     price: Some(17.0),
//!     ..Default::default()
//! };
//! patch.apply_to(&mut product);
//!
//! assert_eq!(product.price, 17.0);
//! assert_eq!(product.name, "Blue Shirt");
//! assert!(product.matches("SHIRT"));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod export;
pub mod stats;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use export::ExportDocument;
pub use stats::{CatalogStats, StockLevel};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Name of the persistence slot holding the product list.
pub const STORAGE_KEY: &str = "products";

/// Currency symbol stamped on every record unless configured otherwise.
pub const DEFAULT_CURRENCY: &str = "€";

/// Highest quantity still counted as "low stock" (inclusive, zero excluded).
pub const LOW_STOCK_THRESHOLD: u32 = 5;

/// Largest accepted image payload, in decoded bytes (2 MiB).
pub const MAX_IMAGE_BYTES: usize = 2 * 1024 * 1024;

/// Maximum product name length, in characters.
pub const MAX_NAME_LENGTH: usize = 200;

/// Maximum search query length, in characters.
pub const MAX_QUERY_LENGTH: usize = 100;
