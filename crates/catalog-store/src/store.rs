//! # Product Store
//!
//! The authoritative product list and its mirror in storage.
//!
//! ## Mutation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    How a Mutation Completes                             │
//! │                                                                         │
//! │  caller ── create / update / delete ──► ProductStore                   │
//! │                                            │                            │
//! │                                            ▼                            │
//! │                                  mutate Vec<Product>                    │
//! │                                            │                            │
//! │                                            ▼                            │
//! │                                  save(): serialize whole list,         │
//! │                                  overwrite the "products" slot         │
//! │                                            │                            │
//! │  caller ◄── return value (record / count) ─┘                            │
//! │     │                                                                   │
//! │     └── re-queries (filter / stats) and re-renders                     │
//! │                                                                         │
//! │  No observers: the return value is the completion signal.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Policy
//! No operation returns an error.
//! - Unknown id on `update` / `delete`: explicit no-op branch, nothing written
//! - Missing or unreadable snapshot on `load`: demonstration data
//! - Unreadable records inside a snapshot: skipped, the rest is kept
//! - Failed write on `save`: logged and recorded in [`ProductStore::last_save_error`],
//!   in-memory list stays authoritative
//!
//! ## Snapshot Backup
//! ```text
//! load: raw snapshot ──► whole array decodes?  ──► yes: every record readable? ──► done
//!                              │ no                       │ no
//!                              ▼                          ▼
//!                         demo data                 keep good records
//!                              └──────────┬───────────────┘
//!                                         ▼
//!                  first save copies the raw text to "<key>-backup"
//!                  before overwriting "<key>"
//! ```

use chrono::Utc;
use tracing::{debug, error, info, warn};

use catalog_core::{
    CatalogStats, ExportDocument, Product, ProductDraft, ProductPatch, DEFAULT_CURRENCY,
    STORAGE_KEY,
};

use crate::error::StoreError;
use crate::seed::demo_products;
use crate::storage::Storage;

// =============================================================================
// Configuration
// =============================================================================

/// Store configuration.
///
/// ## Example
/// ```rust
/// use catalog_store::StoreConfig;
///
/// let config = StoreConfig::new().key("products_test").currency("$");
/// assert_eq!(config.key, "products_test");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    /// Storage slot holding the snapshot.
    /// Default: "products"
    pub key: String,

    /// Currency stamped on drafts that do not carry one.
    /// Default: "€"
    pub currency: String,
}

impl StoreConfig {
    pub fn new() -> Self {
        StoreConfig {
            key: STORAGE_KEY.to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }

    /// Sets the storage slot name.
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Sets the default currency symbol.
    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Product Store
// =============================================================================

/// Owns the product list and keeps `storage` in step with it.
///
/// ## Usage
/// ```rust
/// use catalog_core::{ProductDraft, ProductPatch};
/// use catalog_store::{MemoryStorage, ProductStore};
///
/// let mut store = ProductStore::open(MemoryStorage::new());
/// assert_eq!(store.len(), 3); // demonstration data
///
/// let created = store.create(ProductDraft::new("Red Hat", 12.0, 4).with_id("42"));
/// assert_eq!(store.get("42"), Some(&created));
///
/// let patch = ProductPatch { price: Some(10.0), ..Default::default() };
/// assert!(store.update("42", &patch).is_some());
/// assert_eq!(store.delete("42"), 1);
/// ```
#[derive(Debug)]
pub struct ProductStore<S: Storage> {
    storage: S,
    config: StoreConfig,
    products: Vec<Product>,
    /// Last generated id, so ids stay unique within one millisecond.
    last_generated: i64,
    /// Raw snapshot that did not decode cleanly, written aside on the next save.
    pending_backup: Option<String>,
    /// Outcome of the most recent `save`.
    last_save_error: Option<StoreError>,
}

impl<S: Storage> ProductStore<S> {
    /// Opens a store with default configuration and loads the snapshot.
    pub fn open(storage: S) -> Self {
        Self::with_config(storage, StoreConfig::default())
    }

    /// Opens a store with the given configuration and loads the snapshot.
    pub fn with_config(storage: S, config: StoreConfig) -> Self {
        let mut store = ProductStore {
            storage,
            config,
            products: Vec::new(),
            last_generated: 0,
            pending_backup: None,
            last_save_error: None,
        };
        store.load();
        store
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Replaces the in-memory list with the persisted snapshot.
    ///
    /// Falls back to the demonstration products when nothing was saved yet
    /// or the snapshot is not a JSON array. Records that do not decode are
    /// skipped one by one. Never writes; when anything was dropped, the raw
    /// snapshot is kept for [`save`](Self::save) to back up.
    pub fn load(&mut self) -> &[Product] {
        self.pending_backup = None;

        let raw = match self.storage.read(&self.config.key) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(key = %self.config.key, error = %e, "Failed to read product snapshot");
                None
            }
        };

        self.products = match raw {
            None => {
                info!(key = %self.config.key, "Using demonstration products");
                demo_products()
            }
            Some(raw) => match decode_snapshot(&raw) {
                Ok((products, 0)) => {
                    info!(key = %self.config.key, count = products.len(), "Loaded product snapshot");
                    products
                }
                Ok((products, skipped)) => {
                    warn!(
                        key = %self.config.key,
                        count = products.len(),
                        skipped,
                        "Loaded product snapshot with unreadable records"
                    );
                    self.pending_backup = Some(raw);
                    products
                }
                Err(e) => {
                    warn!(key = %self.config.key, error = %e, "Malformed product snapshot");
                    self.pending_backup = Some(raw);
                    demo_products()
                }
            },
        };
        &self.products
    }

    /// Writes the whole list to storage.
    ///
    /// Failures are logged, not returned: the in-memory list remains the
    /// source of truth until the next successful write. The outcome is
    /// available from [`last_save_error`](Self::last_save_error).
    ///
    /// A snapshot that did not fully decode on `load` is first copied to
    /// [`backup_key`](Self::backup_key); if that copy fails, the slot is
    /// left untouched.
    pub fn save(&mut self) {
        if let Some(raw) = self.pending_backup.take() {
            let backup_key = self.backup_key();
            if let Err(e) = self.storage.write(&backup_key, &raw) {
                error!(key = %backup_key, error = %e, "Failed to back up product snapshot");
                self.pending_backup = Some(raw);
                self.last_save_error = Some(e);
                return;
            }
            info!(key = %backup_key, "Backed up unreadable product snapshot");
        }

        let json = match serde_json::to_string(&self.products) {
            Ok(json) => json,
            Err(e) => {
                error!(error = %e, "Failed to serialize products");
                self.last_save_error = Some(e.into());
                return;
            }
        };

        match self.storage.write(&self.config.key, &json) {
            Ok(()) => {
                debug!(count = self.products.len(), "Saved products");
                self.last_save_error = None;
            }
            Err(e) => {
                error!(key = %self.config.key, error = %e, "Failed to save products");
                self.last_save_error = Some(e);
            }
        }
    }

    /// Error from the most recent `save`, if it failed.
    pub fn last_save_error(&self) -> Option<&StoreError> {
        self.last_save_error.as_ref()
    }

    /// False when the last `save` did not reach storage.
    pub fn is_persisted(&self) -> bool {
        self.last_save_error.is_none()
    }

    /// Slot receiving a snapshot that did not fully decode.
    pub fn backup_key(&self) -> String {
        format!("{}-backup", self.config.key)
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Appends a product and persists.
    ///
    /// When the draft has no id, one is generated from the current time in
    /// milliseconds. A supplied id is used as-is, even if it is already
    /// taken. A non-finite price is stored as zero.
    ///
    /// ## Returns
    /// The stored record.
    pub fn create(&mut self, mut draft: ProductDraft) -> Product {
        let id = match draft.id.take() {
            Some(id) => {
                if self.get(&id).is_some() {
                    warn!(id = %id, "Creating product with an id that already exists");
                }
                id
            }
            None => self.generate_id(),
        };

        let mut product = draft.into_product(id, &self.config.currency);
        normalize_price(&mut product);
        debug!(id = %product.id, name = %product.name, "Creating product");

        self.products.push(product.clone());
        self.save();
        product
    }

    /// Merges `patch` over the first product with this id and persists.
    ///
    /// ## Returns
    /// * `Some(Product)` - The updated record
    /// * `None` - No such id; nothing changed, nothing written
    pub fn update(&mut self, id: &str, patch: &ProductPatch) -> Option<Product> {
        let Some(product) = self.products.iter_mut().find(|p| p.id == id) else {
            debug!(id = %id, "Update skipped: product not found");
            return None;
        };

        patch.apply_to(product);
        normalize_price(product);
        let updated = product.clone();
        debug!(id = %id, "Updated product");

        self.save();
        Some(updated)
    }

    /// Removes every product with this id and persists.
    ///
    /// ## Returns
    /// How many records were removed. Zero means nothing changed and
    /// nothing was written.
    pub fn delete(&mut self, id: &str) -> usize {
        let before = self.products.len();
        self.products.retain(|p| p.id != id);
        let removed = before - self.products.len();

        if removed == 0 {
            debug!(id = %id, "Delete skipped: product not found");
            return 0;
        }

        debug!(id = %id, removed, "Deleted product");
        self.save();
        removed
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// First product with this id.
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Products whose name, description or category contains `term`,
    /// ignoring case, in list order. An empty term returns everything.
    pub fn filter(&self, term: &str) -> Vec<&Product> {
        self.products.iter().filter(|p| p.matches(term)).collect()
    }

    /// The full list, in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Counters for the statistics panel.
    pub fn stats(&self) -> CatalogStats {
        CatalogStats::from_products(&self.products)
    }

    /// Export projection of the current list, stamped with `now`.
    pub fn export(&self, now: chrono::DateTime<Utc>) -> ExportDocument {
        ExportDocument::new(&self.products, now)
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// The underlying storage backend.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Consumes the store, returning its backend.
    pub fn into_storage(self) -> S {
        self.storage
    }

    // =========================================================================
    // Id Generation
    // =========================================================================

    /// Millisecond timestamp, bumped past anything already issued or present.
    fn generate_id(&mut self) -> String {
        let mut candidate = Utc::now().timestamp_millis().max(self.last_generated + 1);
        while self.get(&candidate.to_string()).is_some() {
            candidate += 1;
        }
        self.last_generated = candidate;
        candidate.to_string()
    }
}

// =============================================================================
// Snapshot Decoding
// =============================================================================

/// Decodes a snapshot record by record.
///
/// ## Returns
/// The readable products in order and how many records were skipped.
/// Fails only when `raw` is not a JSON array.
fn decode_snapshot(raw: &str) -> Result<(Vec<Product>, usize), serde_json::Error> {
    let records: Vec<serde_json::Value> = serde_json::from_str(raw)?;
    let mut skipped = 0;

    let products = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value::<Product>(record) {
            Ok(product) => Some(product),
            Err(e) => {
                warn!(index, error = %e, "Skipping unreadable product record");
                skipped += 1;
                None
            }
        })
        .collect();

    Ok((products, skipped))
}

/// JSON has no NaN or infinity; serde_json would write `null`.
fn normalize_price(product: &mut Product) {
    if !product.price.is_finite() {
        warn!(id = %product.id, price = product.price, "Non-finite price stored as 0");
        product.price = 0.0;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{FileStorage, MemoryStorage};
    use catalog_core::Category;

    /// Store over an empty list (not the demo data).
    fn empty_store() -> ProductStore<MemoryStorage> {
        ProductStore::open(MemoryStorage::with_value(STORAGE_KEY, "[]"))
    }

    /// Reopens a store over a copy of `store`'s persisted state.
    fn reopen(store: &ProductStore<MemoryStorage>) -> ProductStore<MemoryStorage> {
        ProductStore::open(store.storage().clone())
    }

    /// Storage whose writes always fail.
    #[derive(Debug, Default)]
    struct BrokenStorage;

    impl Storage for BrokenStorage {
        fn read(&self, _key: &str) -> crate::StoreResult<Option<String>> {
            Err(StoreError::InvalidKey("broken".to_string()))
        }

        fn write(&mut self, _key: &str, _value: &str) -> crate::StoreResult<()> {
            Err(StoreError::InvalidKey("broken".to_string()))
        }
    }

    #[test]
    fn test_load_without_snapshot_seeds_demo_products() {
        let store = ProductStore::open(MemoryStorage::new());
        assert_eq!(store.products(), demo_products().as_slice());

        // Loading alone does not write.
        assert_eq!(store.storage().get(STORAGE_KEY), None);
    }

    #[test]
    fn test_load_malformed_snapshot_falls_back_to_seed() {
        for raw in ["not json", r#"{"id":"1"}"#] {
            let store = ProductStore::open(MemoryStorage::with_value(STORAGE_KEY, raw));
            assert_eq!(store.products(), demo_products().as_slice(), "input: {raw}");
        }
    }

    #[test]
    fn test_malformed_snapshot_is_backed_up_on_first_save() {
        let mut store = ProductStore::open(MemoryStorage::with_value(STORAGE_KEY, "not json"));
        assert_eq!(store.storage().get("products-backup"), None);

        store.create(ProductDraft::new("New", 1.0, 1).with_id("n"));

        assert_eq!(store.storage().get("products-backup"), Some("not json"));
        assert_eq!(reopen(&store).products(), store.products());
    }

    #[test]
    fn test_load_skips_unreadable_records() {
        let raw = r#"[
            {"id":"100","nom":"Ballon","prix":15,"quantite":4,"description":"",
             "imageData":null,"disponible":true,"categorie":"sport","devise":"€"},
            {"id":"101","nom":"Vide","prix":null,"quantite":-1,"description":"",
             "imageData":null,"disponible":true,"categorie":"autre","devise":"€"}
        ]"#;
        let mut store = ProductStore::open(MemoryStorage::with_value(STORAGE_KEY, raw));

        let ids: Vec<&str> = store.products().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["100"]);

        store.create(ProductDraft::new("N", 1.0, 1).with_id("n"));

        let reopened = reopen(&store);
        let ids: Vec<&str> = reopened.products().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["100", "n"]);
        // The skipped record survives in the backup slot.
        assert_eq!(store.storage().get("products-backup"), Some(raw));
    }

    #[test]
    fn test_clean_snapshot_is_not_backed_up() {
        let mut store = empty_store();
        store.create(ProductDraft::new("A", 1.0, 1).with_id("a"));
        assert_eq!(store.storage().get("products-backup"), None);
    }

    #[test]
    fn test_load_unreadable_storage_falls_back_to_seed() {
        let store = ProductStore::open(BrokenStorage);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_load_empty_snapshot_is_respected() {
        let store = empty_store();
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_legacy_snapshot() {
        let raw = r#"[{"id":"7","nom":"Ballon","prix":15,"quantite":4,
            "description":"","imageData":null,"disponible":true,
            "categorie":"sport","devise":"€"}]"#;
        let store = ProductStore::open(MemoryStorage::with_value(STORAGE_KEY, raw));

        let product = store.get("7").unwrap();
        assert_eq!(product.name, "Ballon");
        assert_eq!(product.price, 15.0);
        assert_eq!(product.category, Category::Sport);
    }

    #[test]
    fn test_create_then_get() {
        let mut store = empty_store();
        let created = store.create(
            ProductDraft::new("Answer", 4.2, 1)
                .with_id("42")
                .with_category(Category::Home),
        );

        assert_eq!(created.id, "42");
        assert_eq!(created.currency, DEFAULT_CURRENCY);
        assert_eq!(store.get("42"), Some(&created));
    }

    #[test]
    fn test_create_appends_in_order() {
        let mut store = ProductStore::open(MemoryStorage::new());
        store.create(ProductDraft::new("Fourth", 1.0, 1).with_id("4"));

        let ids: Vec<&str> = store.products().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let mut store = empty_store();
        let a = store.create(ProductDraft::new("A", 1.0, 1));
        let b = store.create(ProductDraft::new("B", 1.0, 1));
        let c = store.create(ProductDraft::new("C", 1.0, 1));

        assert_ne!(a.id, b.id);
        assert_ne!(b.id, c.id);
        assert!(a.id.parse::<i64>().is_ok());
    }

    #[test]
    fn test_generated_id_skips_existing_ids() {
        let mut store = empty_store();
        let far_future = (Utc::now().timestamp_millis() + 60_000).to_string();
        store.last_generated = far_future.parse::<i64>().unwrap() - 1;
        store.create(ProductDraft::new("Taken", 1.0, 1).with_id(far_future.clone()));

        let fresh = store.create(ProductDraft::new("Fresh", 1.0, 1));
        assert_ne!(fresh.id, far_future);
    }

    #[test]
    fn test_create_with_duplicate_id_is_permissive() {
        let mut store = ProductStore::open(MemoryStorage::new());
        store.create(ProductDraft::new("Shadow", 1.0, 1).with_id("1"));

        assert_eq!(store.len(), 4);
        // The first match wins for reads.
        assert_eq!(store.get("1").unwrap().name, "Smartphone Samsung");
        // Delete removes every match.
        assert_eq!(store.delete("1"), 2);
        assert_eq!(store.get("1"), None);
    }

    #[test]
    fn test_partial_update_keeps_untouched_fields() {
        let mut store = empty_store();
        store.create(ProductDraft::new("A", 10.0, 3).with_id("1"));

        let patch = ProductPatch {
            price: Some(20.0),
            ..Default::default()
        };
        let updated = store.update("1", &patch).unwrap();

        assert_eq!(updated.id, "1");
        assert_eq!(updated.name, "A");
        assert_eq!(updated.price, 20.0);
        assert_eq!(updated.quantity, 3);
        assert_eq!(store.get("1"), Some(&updated));
    }

    #[test]
    fn test_update_unknown_id_is_silent_noop() {
        let mut store = ProductStore::open(MemoryStorage::new());
        let patch = ProductPatch {
            name: Some("Ghost".to_string()),
            ..Default::default()
        };

        assert_eq!(store.update("missing", &patch), None);
        assert_eq!(store.products(), demo_products().as_slice());
        assert_eq!(store.storage().get(STORAGE_KEY), None);
    }

    #[test]
    fn test_delete_unknown_id_twice_is_idempotent() {
        let mut store = ProductStore::open(MemoryStorage::new());

        assert_eq!(store.delete("x"), 0);
        assert_eq!(store.products(), demo_products().as_slice());
        assert_eq!(store.delete("x"), 0);
        assert_eq!(store.products(), demo_products().as_slice());
    }

    #[test]
    fn test_filter_matches_and_preserves_order() {
        let mut store = empty_store();
        store.create(ProductDraft::new("Blue Shirt", 20.0, 2).with_id("1"));
        store.create(ProductDraft::new("Red Hat", 15.0, 8).with_id("2"));

        for term in ["shirt", "SHIRT", "Shirt"] {
            let hits: Vec<&str> = store.filter(term).iter().map(|p| p.id.as_str()).collect();
            assert_eq!(hits, vec!["1"], "term: {term}");
        }

        let all: Vec<&str> = store.filter("").iter().map(|p| p.id.as_str()).collect();
        assert_eq!(all, vec!["1", "2"]);
    }

    #[test]
    fn test_filter_searches_description_and_category() {
        let store = ProductStore::open(MemoryStorage::new());

        let by_description: Vec<&str> =
            store.filter("MINUTERIE").iter().map(|p| p.id.as_str()).collect();
        assert_eq!(by_description, vec!["3"]);

        let by_category: Vec<&str> =
            store.filter("cloth").iter().map(|p| p.id.as_str()).collect();
        assert_eq!(by_category, vec!["2"]);

        assert!(store.filter("nothing like this").is_empty());
    }

    #[test]
    fn test_persisted_state_matches_memory_after_each_mutation() {
        let mut store = ProductStore::open(MemoryStorage::new());

        store.create(ProductDraft::new("New", 5.0, 5).with_id("10"));
        assert_eq!(reopen(&store).products(), store.products());

        let patch = ProductPatch {
            quantity: Some(0),
            available: Some(false),
            ..Default::default()
        };
        store.update("2", &patch);
        assert_eq!(reopen(&store).products(), store.products());

        store.delete("1");
        assert_eq!(reopen(&store).products(), store.products());

        let ids: Vec<&str> = store.products().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3", "10"]);
    }

    #[test]
    fn test_non_finite_prices_round_trip() {
        let mut store = empty_store();
        store.create(ProductDraft::new("Keep", 1.0, 1).with_id("keep"));
        let inf = store.create(ProductDraft::new("Inf", f64::INFINITY, 1).with_id("inf"));
        assert_eq!(inf.price, 0.0);

        let patch = ProductPatch {
            price: Some(f64::NAN),
            ..Default::default()
        };
        assert_eq!(store.update("keep", &patch).unwrap().price, 0.0);

        assert!(!store.storage().get(STORAGE_KEY).unwrap().contains(r#""price":null"#));
        let reopened = reopen(&store);
        let ids: Vec<&str> = reopened.products().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["keep", "inf"]);
        assert_eq!(reopened.products(), store.products());
    }

    #[test]
    fn test_save_failure_keeps_memory_authoritative() {
        let mut store = ProductStore::open(BrokenStorage);
        assert!(store.is_persisted());

        let created = store.create(ProductDraft::new("Still here", 1.0, 1).with_id("9"));
        assert_eq!(store.get("9"), Some(&created));
        assert!(!store.is_persisted());
        assert!(matches!(store.last_save_error(), Some(StoreError::InvalidKey(_))));
    }

    #[test]
    fn test_file_storage_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = ProductStore::open(FileStorage::new(dir.path()));

        store.create(ProductDraft::new("Lamp", 35.0, 2).with_id("lamp"));
        store.delete("3");
        assert!(store.is_persisted());
        assert!(dir.path().join("products.json").exists());
        assert!(!dir.path().join(".products.json.tmp").exists());

        let reopened = ProductStore::open(FileStorage::new(dir.path()));
        assert_eq!(reopened.products(), store.products());
    }

    #[test]
    fn test_file_storage_failure_is_recorded() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let mut store = ProductStore::open(FileStorage::new(file.path()));

        store.create(ProductDraft::new("Lamp", 35.0, 2).with_id("lamp"));

        assert!(matches!(store.last_save_error(), Some(StoreError::Io(_))));
        let reopened = ProductStore::open(FileStorage::new(file.path()));
        assert_eq!(reopened.get("lamp"), None);
    }

    #[test]
    fn test_stats_follow_mutations() {
        let mut store = empty_store();
        for (id, quantity, available) in [("1", 0, true), ("2", 3, false), ("3", 10, true), ("4", 5, true)] {
            store.create(
                ProductDraft::new(format!("P{id}"), 1.0, quantity)
                    .with_id(id)
                    .with_available(available),
            );
        }

        let stats = store.stats();
        assert_eq!(stats.total, 4);
        assert_eq!(stats.out_of_stock, 1);
        assert_eq!(stats.low_stock, 2);
        assert_eq!(stats.available, 3);
    }

    #[test]
    fn test_configured_key_and_currency() {
        let config = StoreConfig::new().key("shop").currency("$");
        let mut store = ProductStore::with_config(MemoryStorage::new(), config);

        let created = store.create(ProductDraft::new("Mug", 8.0, 2).with_id("m"));
        assert_eq!(created.currency, "$");
        assert!(store.storage().get("shop").is_some());
        assert_eq!(store.storage().get(STORAGE_KEY), None);
    }

    #[test]
    fn test_export_projection() {
        let store = ProductStore::open(MemoryStorage::new());
        let doc = store.export(Utc::now());

        assert_eq!(doc.total_count, 3);
        assert_eq!(doc.products, store.products());
    }
}
