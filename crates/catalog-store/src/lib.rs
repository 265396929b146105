//! # catalog-store: Persistence Layer for the Catalog
//!
//! This crate owns the product list. Every mutation goes through
//! [`ProductStore`], which mirrors the full list to a [`Storage`] slot
//! before returning.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Catalog Data Flow                                │
//! │                                                                         │
//! │  catalog CLI command (add / update / delete / list ...)                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  catalog-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │ ProductStore  │    │    Storage    │    │    seed /    │  │   │
//! │  │   │  (store.rs)   │───►│ (storage.rs)  │    │   export     │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ Vec<Product>  │    │ MemoryStorage │    │ demo data    │  │   │
//! │  │   │ create/update │    │ FileStorage   │    │ export file  │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  <data_dir>/products.json                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - The product store and its configuration
//! - [`storage`] - Key-value slot backends
//! - [`seed`] - Demonstration products for a first run
//! - [`export`] - Export file writer
//! - [`error`] - Storage error types
//!
//! ## Usage
//!
//! ```rust,no_run
//! use catalog_store::{FileStorage, ProductStore};
//!
//! let mut store = ProductStore::open(FileStorage::new("./data"));
//! for product in store.filter("shirt") {
//!     println!("{} {}", product.id, product.name);
//! }
//! store.delete("3");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod export;
pub mod seed;
pub mod storage;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use export::write_export;
pub use seed::demo_products;
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use store::{ProductStore, StoreConfig};
